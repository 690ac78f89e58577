mod error;
pub use error::{ExecError, ExecResult};

mod util;

mod proc;
pub use proc::{ExecConfig, exec};
