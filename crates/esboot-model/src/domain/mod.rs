mod app;
pub use app::{App, AppsResponse};

mod task;
pub use task::{CLIENT_PORT_INDEX, TRANSPORT_PORT_INDEX, Task};

mod task_state;
pub use task_state::TaskState;

mod peer_addr;
pub use peer_addr::PeerAddr;

mod environ;
pub use environ::Environ;

/// Hierarchical application identifier as used by the scheduler (e.g. `/search/es-node`).
pub type AppId = String;

/// Scheduler-assigned task identifier.
pub type TaskId = String;
