use smallvec::SmallVec;

use super::cursor::EdgeCursor;
use super::{Graph, EDGE_SIZE, NEXT_A, NEXT_B, NODE_A, NODE_B};
use crate::error::{GraphError, Result};
use crate::model::{EdgeComparator, EdgePayload, VertexId, NONE};

impl<P: EdgePayload> Graph<P> {
    /// Inserts the edge {u, w}, overwriting the payload unconditionally if
    /// the edge already exists.
    ///
    /// The payload must be forward-oriented; it is stored as u -> w and
    /// reversed on reads that address the edge from w's side.
    pub fn add_edge(&mut self, u: VertexId, w: VertexId, payload: P) -> Result<()> {
        self.insert_edge(u, w, payload, None)
    }

    /// Inserts the edge {u, w}; on a duplicate, overwrites the stored
    /// payload only when the comparator reports an overlap.
    ///
    /// A duplicate whose payload does not overlap is dropped silently.
    pub fn add_edge_with<C>(&mut self, u: VertexId, w: VertexId, payload: P, comparator: &C) -> Result<()>
    where
        C: EdgeComparator<P>,
    {
        self.insert_edge(u, w, payload, Some(comparator))
    }

    fn insert_edge(
        &mut self,
        u: VertexId,
        w: VertexId,
        payload: P,
        comparator: Option<&dyn EdgeComparator<P>>,
    ) -> Result<()> {
        if u == w {
            return Err(GraphError::InvalidArgument("self-loops are not supported"));
        }
        if !payload.is_forward() {
            return Err(GraphError::InvalidArgument(
                "edge payload must be forward-oriented",
            ));
        }
        self.check_vertex(u)?;
        self.check_vertex(w)?;

        // Scan u's thread for an existing {u, w} record, remembering the
        // tail successor slot where a new record would be appended.
        let mut tail_slot: Option<usize> = None;
        let mut edge = self.heads[u as usize];
        while edge != NONE {
            self.metrics.edge_traversals += 1;
            let base = edge as usize;
            let (other, succ, stored_forward) = if self.edges[base + NODE_A] == u {
                (self.edges[base + NODE_B], base + NEXT_A, true)
            } else {
                (self.edges[base + NODE_A], base + NEXT_B, false)
            };
            if other == w {
                // The record may be stored as {w, u}; canonicalize the
                // incoming payload to the stored orientation first.
                let canonical = if stored_forward {
                    payload
                } else {
                    payload.reverse()
                };
                let idx = base / EDGE_SIZE;
                let overwrite = match comparator {
                    Some(cmp) => cmp.overlaps(&canonical, &self.payloads[idx]),
                    None => true,
                };
                if overwrite {
                    self.payloads[idx] = canonical;
                    self.metrics.payload_overwrites += 1;
                }
                return Ok(());
            }
            tail_slot = Some(succ);
            edge = self.edges[succ];
        }

        let slot = self.allocate_slot();
        let base = slot as usize;
        self.edges[base + NODE_A] = u;
        self.edges[base + NODE_B] = w;
        self.edges[base + NEXT_A] = NONE;
        self.edges[base + NEXT_B] = NONE;

        match tail_slot {
            Some(succ) => self.edges[succ] = slot,
            None => self.heads[u as usize] = slot,
        }
        self.link_tail(w, slot);

        self.payloads[base / EDGE_SIZE] = payload;
        self.live_edges += 1;
        self.metrics.edges_added += 1;
        Ok(())
    }

    /// Unlinks the edge {u, w} from both threads and clears its record.
    ///
    /// Returns false when the edge does not exist. An edge reachable from u
    /// but not from w is a corruption of the dual-thread invariant.
    pub fn remove_edge(&mut self, u: VertexId, w: VertexId) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(w)?;
        if self.heads[u as usize] == NONE || self.heads[w as usize] == NONE {
            return Ok(false);
        }

        let Some(base) = self.unlink(u, w) else {
            return Ok(false);
        };
        if self.unlink(w, u).is_none() {
            return Err(GraphError::Corruption(
                "edge reachable from one endpoint only",
            ));
        }

        self.edges[base + NODE_A] = NONE;
        self.edges[base + NODE_B] = NONE;
        self.edges[base + NEXT_A] = NONE;
        self.edges[base + NEXT_B] = NONE;
        self.payloads[base / EDGE_SIZE] = P::default();
        self.live_edges -= 1;
        self.metrics.edges_removed += 1;
        Ok(true)
    }

    /// Removes every edge incident to v. Returns the number removed.
    pub fn remove_edges(&mut self, v: VertexId) -> Result<usize> {
        self.check_vertex(v)?;

        // Materialize first: removal relinks the thread under the walk.
        let mut neighbors: SmallVec<[VertexId; 8]> = SmallVec::new();
        let mut edge = self.heads[v as usize];
        while edge != NONE {
            self.metrics.edge_traversals += 1;
            let base = edge as usize;
            let (other, succ) = if self.edges[base + NODE_A] == v {
                (self.edges[base + NODE_B], base + NEXT_A)
            } else {
                (self.edges[base + NODE_A], base + NEXT_B)
            };
            neighbors.push(other);
            edge = self.edges[succ];
        }

        let mut removed = 0;
        for neighbor in neighbors {
            if self.remove_edge(v, neighbor)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    pub fn contains_edge(&self, u: VertexId, w: VertexId) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(w)?;
        Ok(self.find_edge(u, w).is_some())
    }

    /// Returns the payload of {u, w} oriented from u to w, or None.
    pub fn get_edge(&self, u: VertexId, w: VertexId) -> Result<Option<P>> {
        self.check_vertex(u)?;
        self.check_vertex(w)?;
        Ok(self.find_edge(u, w).map(|(base, stored_forward)| {
            let payload = self.payloads[base / EDGE_SIZE];
            if stored_forward {
                payload
            } else {
                payload.reverse()
            }
        }))
    }

    /// Returns a cursor over v's edges in thread order.
    pub fn get_edges(&self, v: VertexId) -> Result<EdgeCursor<P>> {
        self.check_vertex(v)?;
        let mut entries = Vec::new();
        let mut edge = self.heads[v as usize];
        while edge != NONE {
            let base = edge as usize;
            if self.edges[base + NODE_A] == v {
                entries.push((self.edges[base + NODE_B], self.payloads[base / EDGE_SIZE]));
                edge = self.edges[base + NEXT_A];
            } else {
                entries.push((
                    self.edges[base + NODE_A],
                    self.payloads[base / EDGE_SIZE].reverse(),
                ));
                edge = self.edges[base + NEXT_B];
            }
        }
        Ok(EdgeCursor::new(entries))
    }

    /// Locates the record for {u, w} from u's side.
    ///
    /// Returns the record base index and whether u is stored as the first
    /// endpoint.
    fn find_edge(&self, u: VertexId, w: VertexId) -> Option<(usize, bool)> {
        let mut edge = self.heads[u as usize];
        while edge != NONE {
            let base = edge as usize;
            let (other, succ, stored_forward) = if self.edges[base + NODE_A] == u {
                (self.edges[base + NODE_B], base + NEXT_A, true)
            } else {
                (self.edges[base + NODE_A], base + NEXT_B, false)
            };
            if other == w {
                return Some((base, stored_forward));
            }
            edge = self.edges[succ];
        }
        None
    }

    /// Reserves a fresh 4-slot record at the watermark, growing the arena
    /// by the configured increment when full. Freed interior slots are only
    /// reclaimed by `compress`.
    fn allocate_slot(&mut self) -> u32 {
        if self.next_edge_slot as usize + EDGE_SIZE > self.edges.len() {
            let grown = self.edges.len() + self.config.edge_growth_slots;
            self.edges.resize(grown, NONE);
            self.payloads.resize(grown / EDGE_SIZE, P::default());
        }
        let slot = self.next_edge_slot;
        self.next_edge_slot += EDGE_SIZE as u32;
        slot
    }

    /// Appends `slot` at the tail of v's thread.
    fn link_tail(&mut self, v: VertexId, slot: u32) {
        let mut edge = self.heads[v as usize];
        if edge == NONE {
            self.heads[v as usize] = slot;
            return;
        }
        loop {
            self.metrics.edge_traversals += 1;
            let base = edge as usize;
            let succ = if self.edges[base + NODE_A] == v {
                base + NEXT_A
            } else {
                base + NEXT_B
            };
            if self.edges[succ] == NONE {
                self.edges[succ] = slot;
                return;
            }
            edge = self.edges[succ];
        }
    }

    /// Unlinks the {v, other} record from v's thread without clearing it.
    ///
    /// Returns the record base index, or None if no such edge is threaded
    /// through v.
    fn unlink(&mut self, v: VertexId, other: VertexId) -> Option<usize> {
        let mut prev: Option<usize> = None;
        let mut edge = self.heads[v as usize];
        while edge != NONE {
            self.metrics.edge_traversals += 1;
            let base = edge as usize;
            let (far, succ) = if self.edges[base + NODE_A] == v {
                (self.edges[base + NODE_B], base + NEXT_A)
            } else {
                (self.edges[base + NODE_A], base + NEXT_B)
            };
            if far == other {
                let next = self.edges[succ];
                match prev {
                    Some(p) => self.edges[p] = next,
                    None => self.heads[v as usize] = next,
                }
                return Some(base);
            }
            prev = Some(succ);
            edge = self.edges[succ];
        }
        None
    }
}
