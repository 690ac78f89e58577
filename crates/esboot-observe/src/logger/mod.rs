mod config;
mod error;
mod format;
mod log;

use tracing_subscriber::util::SubscriberInitExt;

pub use config::LoggerConfig;
pub use error::LoggerError;
pub use format::LoggerFormat;

/// Install the global logger. Text and json lines go to stderr.
pub fn logger_init(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    log::build(cfg, std::io::stderr)?
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)
}
