use reqwest::header::ACCEPT;
use tracing::{debug, info};

use esboot_model::{App, AppsResponse, PeerAddr};

use crate::config::DiscoverConfig;
use crate::errors::DiscoverError;
use crate::query::query_url;

/// Resolve the transport addresses of all running peers of `cfg.app_id`.
///
/// An empty result is not an error.
pub async fn discover(cfg: &DiscoverConfig) -> Result<Vec<PeerAddr>, DiscoverError> {
    cfg.validate()?;

    let url = query_url(cfg);
    info!(target: "esboot.discover", %url, "query url");

    let apps = fetch_apps(&url).await?;
    Ok(peers(&apps))
}

/// Single GET against the apps API.
pub async fn fetch_apps(url: &str) -> Result<Vec<App>, DiscoverError> {
    let client = reqwest::Client::new();

    let response = client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(DiscoverError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    let apps: AppsResponse = serde_json::from_str(&body)?;
    debug!(target: "esboot.discover", apps = apps.apps.len(), "apps response decoded");

    Ok(apps.apps)
}

/// Eligible tasks' transport addresses, in the order the API returned them.
pub fn peers(apps: &[App]) -> Vec<PeerAddr> {
    let mut out = Vec::new();

    for app in apps {
        for task in app.tasks.iter().filter(|t| t.is_eligible()) {
            let addr = task.transport_addr();
            info!(
                target: "esboot.discover",
                app_id = %app.id,
                task_id = %task.id,
                addr = %addr,
                "node discovered"
            );
            out.push(addr);
        }
    }
    out
}
