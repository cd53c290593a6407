pub mod polygon;
pub mod vertex;

pub use polygon::{Edge, PolygonData, PolygonId};
pub use vertex::{VertexData, VertexId};

use slotmap::SlotMap;

use crate::error::{GeometryError, Result, TopologyError};
use crate::math::polygon_2d::is_clockwise;
use crate::math::Point2;

/// Central arena that owns all scene entities.
///
/// Obstacles and waypoints reference each other via typed IDs
/// (generational indices), so vertex identity never depends on coordinate
/// values and coincident points stay distinguishable.
#[derive(Debug, Default)]
pub struct Scene {
    vertices: SlotMap<VertexId, VertexData>,
    polygons: SlotMap<PolygonId, PolygonData>,
}

impl Scene {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an obstacle polygon from its boundary points, in order.
    ///
    /// The ring is stored clockwise regardless of input winding, so the
    /// interior-angle test always sweeps through the polygon's inside.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] for fewer than 3 points
    /// and [`GeometryError::NonFiniteCoordinate`] for any NaN or infinite
    /// coordinate.
    pub fn add_obstacle(&mut self, points: &[Point2]) -> Result<PolygonId> {
        if points.len() < 3 {
            return Err(GeometryError::TooFewVertices(points.len()).into());
        }
        for p in points {
            check_finite(p)?;
        }

        let mut ring_points = points.to_vec();
        if !is_clockwise(&ring_points) {
            ring_points.reverse();
        }

        let id = self.polygons.insert(PolygonData { ring: Vec::new() });
        let ring = ring_points
            .into_iter()
            .map(|point| {
                self.vertices.insert(VertexData {
                    point,
                    owner: Some(id),
                })
            })
            .collect();
        self.polygons[id].ring = ring;
        Ok(id)
    }

    /// Adds a free vertex not attached to any polygon (a query endpoint).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFiniteCoordinate`] for a NaN or
    /// infinite coordinate.
    pub fn add_waypoint(&mut self, point: Point2) -> Result<VertexId> {
        check_finite(&point)?;
        Ok(self.vertices.insert(VertexData { point, owner: None }))
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the scene.
    pub fn vertex(&self, id: VertexId) -> std::result::Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns the position of a vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the scene.
    pub fn point(&self, id: VertexId) -> std::result::Result<Point2, TopologyError> {
        Ok(self.vertex(id)?.point)
    }

    /// Returns a reference to the polygon data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the scene.
    pub fn polygon(&self, id: PolygonId) -> std::result::Result<&PolygonData, TopologyError> {
        self.polygons
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("polygon".into()))
    }

    /// Iterates over all obstacle polygons in insertion order.
    pub fn polygons(&self) -> impl Iterator<Item = (PolygonId, &PolygonData)> {
        self.polygons.iter()
    }

    /// Iterates over every vertex belonging to some obstacle polygon.
    pub fn obstacle_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.polygons
            .iter()
            .flat_map(|(_, data)| data.ring.iter().copied())
    }

    /// Returns the edge list of a polygon, wrap-around pair included.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the scene.
    pub fn edges(&self, id: PolygonId) -> std::result::Result<Vec<Edge>, TopologyError> {
        let ring = &self.polygon(id)?.ring;
        let n = ring.len();
        Ok((0..n).map(|i| Edge::new(ring[i], ring[(i + 1) % n])).collect())
    }

    /// Returns the pair of edges incident to `vertex` in its owning
    /// polygon: the edge arriving at it and the edge leaving it, in ring
    /// traversal order. Lookup is by identity, so coincident coordinates
    /// cannot confuse it.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not found, is a free waypoint, or
    /// its owner's ring does not contain it.
    pub fn incident_edges(
        &self,
        vertex: VertexId,
    ) -> std::result::Result<(Edge, Edge), TopologyError> {
        let owner = self.vertex(vertex)?.owner.ok_or_else(|| {
            TopologyError::InvalidTopology("vertex has no owning polygon".into())
        })?;
        let ring = &self.polygon(owner)?.ring;
        let i = ring.iter().position(|&v| v == vertex).ok_or_else(|| {
            TopologyError::InvalidTopology("owner ring does not contain vertex".into())
        })?;
        let n = ring.len();
        let prev = ring[(i + n - 1) % n];
        let next = ring[(i + 1) % n];
        Ok((Edge::new(prev, vertex), Edge::new(vertex, next)))
    }
}

fn check_finite(p: &Point2) -> Result<()> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFiniteCoordinate { x: p.x, y: p.y }.into())
    }
}
