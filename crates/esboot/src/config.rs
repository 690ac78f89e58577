use std::path::PathBuf;

use thiserror::Error;

use esboot_discover::DiscoverConfig;
use esboot_observe::{LoggerConfig, LoggerError, LoggerFormat};

pub const ENV_SCHEDULER_ADDR: &str = "MARATHON_ADDR";
pub const ENV_APP_ID: &str = "MARATHON_APP_ID";
pub const ENV_PREFIX: &str = "ESBOOT_ENV_PREFIX";
pub const ENV_ENTRYPOINT: &str = "ESBOOT_ENTRYPOINT";
pub const ENV_LOG_LEVEL: &str = "ESBOOT_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "ESBOOT_LOG_FORMAT";

pub const DEFAULT_ENV_PREFIX: &str = "ELASTICSEARCH_";
pub const DEFAULT_ENTRYPOINT: &str = "/docker-entrypoint.sh";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("$MARATHON_ADDR is required")]
    MissingSchedulerAddr,
    #[error("$MARATHON_APP_ID (automatic) is not set")]
    MissingAppId,
    #[error("invalid ${var}: {source}")]
    Logger {
        var: &'static str,
        #[source]
        source: LoggerError,
    },
}

/// Everything the bootstrap needs, read once from the environment.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    pub discover: DiscoverConfig,
    /// Prefix selecting the variables turned into flags.
    pub env_prefix: String,
    /// Program control is handed over to.
    pub entrypoint: PathBuf,
}

impl BootstrapConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty or whitespace-only values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let endpoint = get(ENV_SCHEDULER_ADDR).ok_or(ConfigError::MissingSchedulerAddr)?;
        let app_id = get(ENV_APP_ID).ok_or(ConfigError::MissingAppId)?;

        Ok(Self {
            discover: DiscoverConfig::new(endpoint, app_id),
            env_prefix: get(ENV_PREFIX).unwrap_or_else(|| DEFAULT_ENV_PREFIX.to_string()),
            entrypoint: get(ENV_ENTRYPOINT)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ENTRYPOINT)),
        })
    }
}

/// Logger settings from `ESBOOT_LOG_LEVEL` / `ESBOOT_LOG_FORMAT`, on top of [`LoggerConfig::default`].
pub fn logger_config<F>(lookup: F) -> Result<LoggerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = LoggerConfig::default();

    if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
        cfg.level = level;
    }
    if let Some(format) = lookup(ENV_LOG_FORMAT).filter(|v| !v.trim().is_empty()) {
        cfg.format = format
            .parse::<LoggerFormat>()
            .map_err(|source| ConfigError::Logger {
                var: ENV_LOG_FORMAT,
                source,
            })?;
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply() {
        let cfg = BootstrapConfig::from_lookup(lookup(&[
            ("MARATHON_ADDR", "http://marathon.mesos:8080"),
            ("MARATHON_APP_ID", "/search/es"),
        ]))
        .unwrap();

        assert_eq!(cfg.discover.endpoint, "http://marathon.mesos:8080");
        assert_eq!(cfg.discover.app_id, "/search/es");
        assert_eq!(cfg.env_prefix, "ELASTICSEARCH_");
        assert_eq!(cfg.entrypoint, PathBuf::from("/docker-entrypoint.sh"));
    }

    #[test]
    fn overrides_apply() {
        let cfg = BootstrapConfig::from_lookup(lookup(&[
            ("MARATHON_ADDR", "http://m"),
            ("MARATHON_APP_ID", "/es"),
            ("ESBOOT_ENV_PREFIX", "ES_"),
            ("ESBOOT_ENTRYPOINT", "/usr/share/elasticsearch/bin/elasticsearch"),
        ]))
        .unwrap();

        assert_eq!(cfg.env_prefix, "ES_");
        assert_eq!(
            cfg.entrypoint,
            PathBuf::from("/usr/share/elasticsearch/bin/elasticsearch")
        );
    }

    #[test]
    fn scheduler_addr_required() {
        let err = BootstrapConfig::from_lookup(lookup(&[("MARATHON_APP_ID", "/es")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSchedulerAddr));
        assert_eq!(err.to_string(), "$MARATHON_ADDR is required");
    }

    #[test]
    fn app_id_required_and_empty_counts_as_missing() {
        let err = BootstrapConfig::from_lookup(lookup(&[
            ("MARATHON_ADDR", "http://m"),
            ("MARATHON_APP_ID", ""),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingAppId));
        assert_eq!(err.to_string(), "$MARATHON_APP_ID (automatic) is not set");
    }

    #[test]
    fn blank_values_are_missing_with_config_wording() {
        let err = BootstrapConfig::from_lookup(lookup(&[
            ("MARATHON_ADDR", "  "),
            ("MARATHON_APP_ID", "/es"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingSchedulerAddr));

        let err = BootstrapConfig::from_lookup(lookup(&[
            ("MARATHON_ADDR", "http://m"),
            ("MARATHON_APP_ID", " "),
        ]))
        .unwrap_err();
        assert_eq!(err.to_string(), "$MARATHON_APP_ID (automatic) is not set");
    }

    #[test]
    fn logger_settings() {
        let cfg = logger_config(lookup(&[
            ("ESBOOT_LOG_LEVEL", "debug"),
            ("ESBOOT_LOG_FORMAT", "json"),
        ]))
        .unwrap();
        assert_eq!(cfg.level, "debug");
        assert_eq!(cfg.format, LoggerFormat::Json);

        let cfg = logger_config(lookup(&[])).unwrap();
        assert_eq!(cfg.level, "info");
        assert_eq!(cfg.format, LoggerFormat::Text);
    }

    #[test]
    fn bad_log_format_names_the_variable() {
        let err = logger_config(lookup(&[("ESBOOT_LOG_FORMAT", "xml")])).unwrap_err();
        assert!(err.to_string().starts_with("invalid $ESBOOT_LOG_FORMAT"));
    }
}
