use serde::{Deserialize, Serialize};

/// Operation counters maintained by the write paths.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphMetrics {
    /// Edge records visited while walking adjacency threads on write paths.
    pub edge_traversals: u64,
    pub edges_added: u64,
    pub edges_removed: u64,
    pub payload_overwrites: u64,
    pub compactions_performed: u64,
    pub edge_slots_reclaimed: u64,
    pub vertex_slots_reclaimed: u64,
}

impl GraphMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
