use std::convert::Infallible;
use std::process::ExitCode;

use anyhow::{Context, anyhow};
use tracing::error;

use esboot::{BootstrapConfig, logger_config, plan};
use esboot_exec::exec;
use esboot_model::Environ;
use esboot_observe::logger_init;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let log_cfg = match logger_config(|key| std::env::var(key).ok()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("fatal: logger: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logger_init(&log_cfg) {
        eprintln!("fatal: logger: {e}");
        return ExitCode::FAILURE;
    }

    match run().await {
        Ok(never) => match never {},
        Err(e) => {
            error!("fatal: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<Infallible> {
    let cfg = BootstrapConfig::from_env().context("marathon")?;

    let own_args = std::env::args_os()
        .skip(1)
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| anyhow!("argument is not valid UTF-8: {arg:?}"))
        })
        .collect::<anyhow::Result<Vec<String>>>()?;

    let target = plan(&cfg, &Environ::from_process(), own_args)
        .await
        .context("marathon")?;

    exec(&target).context("exec")
}
