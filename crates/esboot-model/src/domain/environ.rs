/// Ordered snapshot of `KEY=VALUE` environment entries.
///
/// Entries are kept raw, exactly as the process would see them, so malformed items (no `=`) survive until a consumer decides what to do with them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environ(Vec<String>);

impl Environ {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Snapshot the current process environment, preserving its order.
    ///
    /// Entries whose key or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| {
                let (k, v) = (k.into_string().ok()?, v.into_string().ok()?);
                Some(format!("{k}={v}"))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over raw entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Append a raw entry.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.0.push(entry.into());
    }

    /// Append a `key=value` entry.
    pub fn push_pair(&mut self, key: &str, value: &str) {
        self.0.push(format!("{key}={value}"));
    }

    /// Split an entry at its first `=`. Returns `None` when there is no separator.
    pub fn split_entry(entry: &str) -> Option<(&str, &str)> {
        entry.split_once('=')
    }
}

impl FromIterator<String> for Environ {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for Environ {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for Environ {
    fn from(entries: Vec<String>) -> Self {
        Self(entries)
    }
}
