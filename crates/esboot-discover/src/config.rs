use crate::errors::DiscoverError;

/// Where to look for peers.
#[derive(Debug, Clone)]
pub struct DiscoverConfig {
    /// Scheduler base address, e.g. `http://marathon.mesos:8080`.
    pub endpoint: String,
    /// Identifier of the application this node belongs to.
    pub app_id: String,
}

impl DiscoverConfig {
    pub fn new(endpoint: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            app_id: app_id.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DiscoverError> {
        if self.endpoint.trim().is_empty() {
            return Err(DiscoverError::MissingEndpoint);
        }
        if self.app_id.trim().is_empty() {
            return Err(DiscoverError::MissingAppId);
        }
        Ok(())
    }
}
