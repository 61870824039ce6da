use tracing::debug;

use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::metrics::GraphMetrics;
use crate::model::{Coordinate, EdgePayload, EdgeSlot, VertexId, NONE};

mod compact;
mod cursor;
mod edge_ops;
mod vertex_ops;

pub use compact::CompressStats;
pub use cursor::EdgeCursor;

// Slot offsets within a 4-slot edge record. NEXT_A threads the record
// through NODE_A's adjacency list, NEXT_B through NODE_B's.
pub(crate) const NODE_A: usize = 0;
pub(crate) const NODE_B: usize = 1;
pub(crate) const NEXT_A: usize = 2;
pub(crate) const NEXT_B: usize = 3;
pub(crate) const EDGE_SIZE: usize = 4;

/// In-memory undirected graph with directional edge payloads.
///
/// Vertices carry coordinates and are addressed by dense ids starting at 1
/// (0 is reserved). Edges live in a flat arena of fixed-width records, each
/// threaded through both endpoints' adjacency lists; the parallel payload
/// arena maps record index / 4 to the edge's payload. A single record exists
/// per unordered vertex pair, and the payload is reversed on access whenever
/// the queried vertex is the record's second endpoint.
pub struct Graph<P> {
    /// Vertex id -> first edge record in its adjacency thread, or NONE.
    heads: Vec<EdgeSlot>,
    coordinates: Vec<Coordinate>,
    /// Flat arena of 4-slot edge records.
    edges: Vec<u32>,
    payloads: Vec<P>,
    next_vertex_id: VertexId,
    next_edge_slot: EdgeSlot,
    live_edges: usize,
    config: GraphConfig,
    metrics: GraphMetrics,
}

impl<P: EdgePayload> Graph<P> {
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_capacity(estimate: usize) -> Self {
        Self::with_config(GraphConfig::with_capacity(estimate))
    }

    pub fn with_config(config: GraphConfig) -> Self {
        let estimate = config.initial_capacity.max(1);
        let graph = Self {
            heads: vec![NONE; estimate],
            coordinates: vec![Coordinate::default(); estimate],
            edges: vec![NONE; 3 * estimate * EDGE_SIZE],
            payloads: vec![P::default(); 3 * estimate],
            next_vertex_id: 1,
            next_edge_slot: 0,
            live_edges: 0,
            config,
            metrics: GraphMetrics::new(),
        };
        debug!(capacity = estimate, "graph.created");
        graph
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    /// Vertex slots currently allocated in the backing tables.
    pub fn vertex_capacity(&self) -> usize {
        self.heads.len()
    }

    /// `u32` slots currently allocated in the edge arena.
    pub fn edge_capacity(&self) -> usize {
        self.edges.len()
    }

    pub fn metrics(&self) -> &GraphMetrics {
        &self.metrics
    }

    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    pub(crate) fn check_vertex(&self, v: VertexId) -> Result<()> {
        if v >= self.next_vertex_id {
            return Err(GraphError::OutOfRange(v));
        }
        Ok(())
    }
}

impl<P: EdgePayload> Default for Graph<P> {
    fn default() -> Self {
        Self::new()
    }
}
