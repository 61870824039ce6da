use super::Graph;
use crate::error::Result;
use crate::model::{Coordinate, EdgePayload, VertexId, NONE};

impl<P: EdgePayload> Graph<P> {
    /// Creates a vertex at the given position and returns its id.
    ///
    /// Ids are handed out monotonically starting at 1.
    pub fn add_vertex(&mut self, lat: f32, lon: f32) -> VertexId {
        let id = self.next_vertex_id;
        if id as usize >= self.heads.len() {
            let grown = self.heads.len() + self.config.vertex_growth;
            self.heads.resize(grown, NONE);
            self.coordinates.resize(grown, Coordinate::default());
        }
        self.coordinates[id as usize] = Coordinate::new(lat, lon);
        self.next_vertex_id += 1;
        id
    }

    /// Overwrites the coordinate of an existing vertex.
    pub fn set_vertex(&mut self, v: VertexId, lat: f32, lon: f32) -> Result<()> {
        self.check_vertex(v)?;
        self.coordinates[v as usize] = Coordinate::new(lat, lon);
        Ok(())
    }

    pub fn get_vertex(&self, v: VertexId) -> Option<Coordinate> {
        if v >= self.next_vertex_id {
            return None;
        }
        Some(self.coordinates[v as usize])
    }

    pub fn vertex_count(&self) -> u32 {
        self.next_vertex_id - 1
    }
}
