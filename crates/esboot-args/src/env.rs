use tracing::debug;

use esboot_model::Environ;

use crate::transform::{GnuTransform, KeyTransform};

/// Convert prefixed `KEY=VALUE` entries into command-line flags.
///
/// Only entries starting with `prefix` are considered. The prefix is stripped, the key goes through `transform`
/// and the value is appended verbatim. Output order follows `environ`; duplicates are kept.
/// Entries without a `=` after the prefix are skipped.
pub fn env_to_args<T>(environ: &Environ, prefix: &str, transform: &T) -> Vec<String>
where
    T: KeyTransform + ?Sized,
{
    environ
        .iter()
        .filter_map(|entry| entry.strip_prefix(prefix))
        .filter_map(|rest| match Environ::split_entry(rest) {
            Some((key, value)) => Some(transform.flag_prefix(key) + value),
            None => {
                debug!(entry = %rest, prefix, "skipping malformed environment entry");
                None
            }
        })
        .collect()
}

/// [`env_to_args`] with the [`GnuTransform`] policy.
#[inline]
pub fn env_to_args_default(environ: &Environ, prefix: &str) -> Vec<String> {
    env_to_args(environ, prefix, &GnuTransform)
}
