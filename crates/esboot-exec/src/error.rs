use std::convert::Infallible;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecError {
    #[error("missing program")]
    MissingProgram,
    #[error("exec failed: {0}")]
    Exec(#[source] std::io::Error),
    #[error("spawn failed: {0}")]
    Spawn(#[source] std::io::Error),
}

/// Outcome of a process transfer. `Ok` is uninhabited: success never returns.
pub type ExecResult = Result<Infallible, ExecError>;
