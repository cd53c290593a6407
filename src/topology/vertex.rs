use crate::math::Point2;

use super::polygon::PolygonId;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the scene.
    pub struct VertexId;
}

/// Data associated with a scene vertex.
///
/// Identity lives in the [`VertexId`], never in the coordinates: two
/// vertices at the same point remain distinct entities, so visited-sets
/// and incidence lookups stay unambiguous.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// Position of the vertex.
    pub point: Point2,
    /// The polygon whose ring contains this vertex, if any.
    ///
    /// Waypoints (the start and end of a path query) are free vertices
    /// with no owner and therefore no incident edges.
    pub owner: Option<PolygonId>,
}
