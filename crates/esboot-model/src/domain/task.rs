use serde::{Deserialize, Serialize};

use crate::{AppId, PeerAddr, TaskId, TaskState};

/// Port index reserved for client (HTTP) traffic.
pub const CLIENT_PORT_INDEX: usize = 0;
/// Port index used for inter-node cluster communication.
pub const TRANSPORT_PORT_INDEX: usize = 1;

/// A single running instance of an application as reported by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub id: TaskId,
    #[serde(default)]
    pub app_id: AppId,
    /// Absent on older schedulers; such tasks are never eligible.
    #[serde(default)]
    pub state: TaskState,
    #[serde(default)]
    pub host: String,
    /// Allocated host ports, in allocation order.
    #[serde(default)]
    pub ports: Vec<u16>,
}

impl Task {
    /// A task can join the cluster only while running and with both client and transport ports allocated.
    pub fn is_eligible(&self) -> bool {
        self.state.is_running() && self.ports.len() > TRANSPORT_PORT_INDEX
    }

    /// Address of the `index`-th allocated port on this task's host.
    ///
    /// # Panics
    ///
    /// Panics with "invalid port index" if `index` is beyond the allocated ports.
    pub fn addr(&self, index: usize) -> PeerAddr {
        match self.ports.get(index) {
            Some(&port) => PeerAddr::new(self.host.clone(), port),
            None => panic!(
                "invalid port index {index} for task {} ({} ports allocated)",
                self.id,
                self.ports.len()
            ),
        }
    }

    /// Cluster transport address (second allocated port).
    #[inline]
    pub fn transport_addr(&self) -> PeerAddr {
        self.addr(TRANSPORT_PORT_INDEX)
    }
}
