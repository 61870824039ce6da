/// Construction parameters for a [`crate::Graph`].
#[derive(Debug, Clone, Copy)]
pub struct GraphConfig {
    /// Estimated vertex count used to size the initial tables.
    pub initial_capacity: usize,
    /// Slots added to the vertex and coordinate tables when they fill.
    pub vertex_growth: usize,
    /// Slots added to the edge arena when it fills. Must be a multiple of 4.
    pub edge_growth_slots: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 1000,
            vertex_growth: 10_000,
            edge_growth_slots: 10_000,
        }
    }
}

impl GraphConfig {
    pub fn with_capacity(estimate: usize) -> Self {
        Self {
            initial_capacity: estimate,
            ..Self::default()
        }
    }
}
