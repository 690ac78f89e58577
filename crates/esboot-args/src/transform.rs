/// Strategy that turns a stripped environment key into the flag prefix placed before its value.
///
/// The returned string is concatenated with the raw value as-is, so it must carry its own separator (e.g. `--key=`).
pub trait KeyTransform {
    fn flag_prefix(&self, key: &str) -> String;
}

/// Default GNU-style policy: `CLUSTER_NAME` becomes `--cluster.name=`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GnuTransform;

impl KeyTransform for GnuTransform {
    fn flag_prefix(&self, key: &str) -> String {
        format!("--{}=", key.to_lowercase().replace('_', "."))
    }
}

impl<F> KeyTransform for F
where
    F: Fn(&str) -> String,
{
    #[inline]
    fn flag_prefix(&self, key: &str) -> String {
        self(key)
    }
}
