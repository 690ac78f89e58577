use serde::{Deserialize, Serialize};

use crate::{AppId, Task};

/// Application with its embedded tasks (`embed=apps.tasks`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    pub id: AppId,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Envelope of the `/v2/apps` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppsResponse {
    #[serde(default)]
    pub apps: Vec<App>,
}
