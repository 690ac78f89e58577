use std::io::IsTerminal;

use crate::logger::format::LoggerFormat;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    /// `EnvFilter` directive, e.g. `info` or `esboot=debug,reqwest=warn`.
    pub level: String,
    /// ANSI colours for the text format; ignored by json and journald.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::Text,
            level: "info".to_string(),
            use_color: std::io::stderr().is_terminal(),
        }
    }
}
