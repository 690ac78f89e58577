use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a scheduler task.
///
/// Decoded from the raw `state` string of the apps API.
/// Matching is exact and case-sensitive; unknown values are kept verbatim in [`TaskState::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskState {
    /// Task is accepted but not yet running.
    Staged,
    /// Task is up and serving.
    Running,
    /// Task terminated with an error.
    Failed,
    /// Any state this crate does not interpret.
    Other(String),
}

impl TaskState {
    /// Returns `true` only for [`TaskState::Running`].
    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self, TaskState::Running)
    }

    pub fn as_str(&self) -> &str {
        match self {
            TaskState::Staged => "TASK_STAGING",
            TaskState::Running => "TASK_RUNNING",
            TaskState::Failed => "TASK_FAILED",
            TaskState::Other(s) => s,
        }
    }
}

/// An unreported state: known to nothing, so never running.
impl Default for TaskState {
    fn default() -> Self {
        TaskState::Other(String::new())
    }
}

impl From<String> for TaskState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "TASK_RUNNING" | "running" => TaskState::Running,
            "TASK_STAGING" | "staged" => TaskState::Staged,
            "TASK_FAILED" | "failed" => TaskState::Failed,
            _ => TaskState::Other(s),
        }
    }
}

impl From<&str> for TaskState {
    fn from(s: &str) -> Self {
        TaskState::from(s.to_string())
    }
}

impl From<TaskState> for String {
    fn from(state: TaskState) -> Self {
        match state {
            TaskState::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
