mod config;
pub use config::{
    BootstrapConfig, ConfigError, DEFAULT_ENTRYPOINT, DEFAULT_ENV_PREFIX, ENV_APP_ID,
    ENV_ENTRYPOINT, ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_PREFIX, ENV_SCHEDULER_ADDR, logger_config,
};

mod plan;
pub use plan::plan;
