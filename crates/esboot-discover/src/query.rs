use crate::config::DiscoverConfig;

/// Identifier to query the apps API with.
///
/// Peers usually live in sibling applications of the same group, so the parent path is used
/// (`path.Dir` semantics: `/group/service/` has parent `/group/service`).
/// When the parent is the root, or the id has no `/` at all, the application id itself is used.
pub fn query_id(app_id: &str) -> &str {
    let Some(idx) = app_id.rfind('/') else {
        return app_id;
    };
    match app_id[..idx].trim_end_matches('/') {
        "" => app_id,
        parent => parent,
    }
}

/// `<endpoint>/v2/apps?embed=apps.tasks&id=<query id>`
pub fn query_url(cfg: &DiscoverConfig) -> String {
    format!(
        "{}/v2/apps?embed=apps.tasks&id={}",
        cfg.endpoint.trim_end_matches('/'),
        query_id(&cfg.app_id)
    )
}
