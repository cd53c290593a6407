use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an obstacle polygon in the scene.
    pub struct PolygonId;
}

/// A polygon boundary segment: an ordered pair of vertices in ring
/// traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Vertex the edge leaves from.
    pub start: VertexId,
    /// Vertex the edge arrives at.
    pub end: VertexId,
}

impl Edge {
    /// Creates a new edge.
    #[must_use]
    pub fn new(start: VertexId, end: VertexId) -> Self {
        Self { start, end }
    }

    /// Whether `vertex` is one of this edge's endpoints, by identity.
    #[must_use]
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.start == vertex || self.end == vertex
    }
}

/// Data associated with an obstacle polygon.
///
/// The ring is closed: consecutive vertices, including the wrap-around
/// pair last→first, bound its edges. Simplicity (no self-intersection) is
/// assumed, not checked.
#[derive(Debug, Clone)]
pub struct PolygonData {
    /// The ordered, clockwise vertex ring.
    pub ring: Vec<VertexId>,
}
