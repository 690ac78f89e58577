use tracing::info;

use esboot_args::{ArgList, env_to_args_default};
use esboot_discover::{DiscoverError, discover};
use esboot_exec::ExecConfig;
use esboot_model::Environ;

use crate::config::BootstrapConfig;

/// Resolve the full launch of the node: `own_args`, then flags from `environ`, then the discovered seed hosts.
///
/// Nothing is executed here; the returned target is handed to [`esboot_exec::exec`] by the caller.
pub async fn plan<I, S>(
    cfg: &BootstrapConfig,
    environ: &Environ,
    own_args: I,
) -> Result<ExecConfig, DiscoverError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let flags = env_to_args_default(environ, &cfg.env_prefix);
    let peers = discover(&cfg.discover).await?;
    info!(peers = peers.len(), flags = flags.len(), "discovery finished");

    let args = ArgList::new(own_args)
        .extend_flags(flags)
        .with_peers(&peers)
        .into_vec();

    Ok(ExecConfig::new(cfg.entrypoint.clone(), args))
}
