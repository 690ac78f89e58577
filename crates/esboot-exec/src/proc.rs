use std::path::PathBuf;

use tracing::info;

use crate::{
    error::{ExecError, ExecResult},
    util::{cmd_program, transfer},
};

/// Target of the process transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecConfig {
    pub program: PathBuf,
    /// Arguments after `argv[0]`; the program path itself is `argv[0]`.
    pub args: Vec<String>,
}

impl ExecConfig {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

/// Hand control over to `cfg.program`, inheriting the environment and open descriptors.
///
/// On unix the current process image is replaced, so this only returns on failure.
/// Elsewhere the program runs as a child and the current process exits with its status.
pub fn exec(cfg: &ExecConfig) -> ExecResult {
    if cfg.program.as_os_str().is_empty() {
        return Err(ExecError::MissingProgram);
    }
    info!(target: "esboot.exec", program = %cfg.program.display(), args = ?cfg.args, "exec");

    transfer(cmd_program(&cfg.program, &cfg.args))
}
