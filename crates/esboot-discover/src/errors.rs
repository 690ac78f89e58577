use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("scheduler endpoint is required")]
    MissingEndpoint,

    #[error("application id is not set")]
    MissingAppId,

    #[error("http request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("HTTP Error {0}")]
    Status(u16),

    #[error("failed to decode apps response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl DiscoverError {
    /// HTTP status code for [`DiscoverError::Status`].
    pub fn status(&self) -> Option<u16> {
        match self {
            DiscoverError::Status(code) => Some(*code),
            _ => None,
        }
    }
}
