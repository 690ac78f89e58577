use std::path::Path;
use std::process::Command;

use crate::error::{ExecError, ExecResult};

pub fn cmd_program(program: &Path, args: &[String]) -> Command {
    let mut cmd = Command::new(program);
    cmd.args(args.iter().map(|s| s.as_str()));
    cmd
}

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        pub fn transfer(mut cmd: Command) -> ExecResult {
            use std::os::unix::process::CommandExt;
            Err(ExecError::Exec(cmd.exec()))
        }
    } else {
        // No image replacement here: run to completion and forward the exit code.
        pub fn transfer(mut cmd: Command) -> ExecResult {
            let status = cmd.status().map_err(ExecError::Spawn)?;
            std::process::exit(status.code().unwrap_or(1))
        }
    }
}
