use esboot_model::PeerAddr;

/// Flag carrying the unicast seed hosts for cluster discovery.
pub const DISCOVERY_HOSTS_FLAG: &str = "--discovery.zen.ping.unicast.hosts=";

/// Discovery flag for `peers`, comma-joined in discovery order. `None` when no peer was found.
pub fn discovery_flag(peers: &[PeerAddr]) -> Option<String> {
    if peers.is_empty() {
        return None;
    }
    let hosts = peers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    Some(format!("{DISCOVERY_HOSTS_FLAG}{hosts}"))
}

/// Final argument list for the target process.
///
/// Layout: the program's own arguments first, then generated flags, then the discovery flag (if any).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgList {
    own: Vec<String>,
    flags: Vec<String>,
}

impl ArgList {
    pub fn new<I, S>(own: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            own: own.into_iter().map(Into::into).collect(),
            flags: Vec::new(),
        }
    }

    pub fn extend_flags<I>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.flags.extend(flags);
        self
    }

    /// Append the discovery flag; a no-op for an empty peer list.
    pub fn with_peers(mut self, peers: &[PeerAddr]) -> Self {
        self.flags.extend(discovery_flag(peers));
        self
    }

    pub fn len(&self) -> usize {
        self.own.len() + self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<String> {
        let mut out = self.own;
        out.extend(self.flags);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovery_flag_joins_in_order() {
        let peers = vec![PeerAddr::new("b", 2), PeerAddr::new("a", 1)];
        assert_eq!(
            discovery_flag(&peers).as_deref(),
            Some("--discovery.zen.ping.unicast.hosts=b:2,a:1")
        );
    }

    #[test]
    fn no_peers_no_flag() {
        assert_eq!(discovery_flag(&[]), None);
    }

    #[test]
    fn own_args_come_first() {
        let args = ArgList::new(["-Des.foo=1", "--verbose"])
            .extend_flags(vec!["--cluster.name=logs".to_string()])
            .with_peers(&[PeerAddr::new("10.0.0.1", 31001)])
            .into_vec();

        assert_eq!(
            args,
            vec![
                "-Des.foo=1",
                "--verbose",
                "--cluster.name=logs",
                "--discovery.zen.ping.unicast.hosts=10.0.0.1:31001",
            ]
        );
    }

    #[test]
    fn empty_peers_leave_list_untouched() {
        let list = ArgList::new(Vec::<String>::new())
            .extend_flags(vec!["--a=1".to_string()])
            .with_peers(&[]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.into_vec(), vec!["--a=1"]);
    }

    #[test]
    fn default_is_empty() {
        assert!(ArgList::default().is_empty());
    }
}
