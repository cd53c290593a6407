use crate::error::Result;
use crate::math::angle_2d::{angle_to, normalize_angle};
use crate::math::{Point2, TOLERANCE};
use crate::topology::{Scene, VertexId};

/// Tests whether the ray from `vertex` toward `target` leaves through the
/// interior angle of the vertex's owning polygon.
///
/// Edges incident to a vertex never register as crossing a segment that
/// starts there, so a diagonal cutting through the polygon's own body at
/// that corner is invisible to the edge-intersection scan. This test
/// closes the gap: with a clockwise ring, the counter-clockwise sweep from
/// the in-edge direction to the out-edge direction spans exactly the
/// interior angle, and the ray is blocked iff it falls strictly inside
/// that sweep. A ray grazing either incident edge within [`TOLERANCE`]
/// counts as visible.
///
/// # Errors
///
/// Returns an error if `vertex` is unknown or has no owning polygon.
pub fn exits_through_corner(scene: &Scene, vertex: VertexId, target: &Point2) -> Result<bool> {
    let (in_edge, out_edge) = scene.incident_edges(vertex)?;
    let origin = scene.point(vertex)?;

    let in_angle = angle_to(&origin, &scene.point(in_edge.start)?);
    let out_angle = angle_to(&origin, &scene.point(out_edge.end)?);
    let target_angle = angle_to(&origin, target);

    let interior_span = normalize_angle(out_angle - in_angle);
    let offset = normalize_angle(target_angle - in_angle);

    Ok(offset > TOLERANCE && offset < interior_span - TOLERANCE)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn unit_square() -> (Scene, Vec<VertexId>) {
        let mut scene = Scene::new();
        let id = scene
            .add_obstacle(&[
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 1.0),
                Point2::new(1.0, 1.0),
                Point2::new(1.0, 0.0),
            ])
            .unwrap();
        let ring = scene.polygon(id).unwrap().ring.clone();
        (scene, ring)
    }

    fn corner_at(scene: &Scene, ring: &[VertexId], x: f64, y: f64) -> VertexId {
        *ring
            .iter()
            .find(|&&v| {
                let p = scene.point(v).unwrap();
                (p.x - x).abs() < 1e-12 && (p.y - y).abs() < 1e-12
            })
            .unwrap()
    }

    #[test]
    fn ray_into_interior_blocked() {
        let (scene, ring) = unit_square();
        let origin = corner_at(&scene, &ring, 0.0, 0.0);
        assert!(exits_through_corner(&scene, origin, &Point2::new(0.5, 0.5)).unwrap());
    }

    #[test]
    fn ray_away_from_interior_clear() {
        let (scene, ring) = unit_square();
        let origin = corner_at(&scene, &ring, 0.0, 0.0);
        assert!(!exits_through_corner(&scene, origin, &Point2::new(-1.0, -1.0)).unwrap());
    }

    #[test]
    fn ray_along_incident_edges_clear() {
        let (scene, ring) = unit_square();
        let origin = corner_at(&scene, &ring, 0.0, 0.0);
        // Both ring neighbours lie exactly on an incident edge.
        assert!(!exits_through_corner(&scene, origin, &Point2::new(0.0, 2.0)).unwrap());
        assert!(!exits_through_corner(&scene, origin, &Point2::new(2.0, 0.0)).unwrap());
    }

    #[test]
    fn reflex_corner_blocks_wide_span() {
        // An L-shaped hexagon with a reflex corner at (1, 1); its interior
        // angle there is 270 degrees.
        let mut scene = Scene::new();
        let id = scene
            .add_obstacle(&[
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 2.0),
                Point2::new(1.0, 2.0),
                Point2::new(1.0, 1.0),
                Point2::new(2.0, 1.0),
                Point2::new(2.0, 0.0),
            ])
            .unwrap();
        let ring = scene.polygon(id).unwrap().ring.clone();
        let reflex = corner_at(&scene, &ring, 1.0, 1.0);
        // Down-left into the body: blocked.
        assert!(exits_through_corner(&scene, reflex, &Point2::new(0.5, 0.5)).unwrap());
        // Up-right into the notch: clear.
        assert!(!exits_through_corner(&scene, reflex, &Point2::new(1.5, 1.5)).unwrap());
    }

    #[test]
    fn waypoint_has_no_corner() {
        let mut scene = Scene::new();
        let w = scene.add_waypoint(Point2::new(0.0, 0.0)).unwrap();
        assert!(exits_through_corner(&scene, w, &Point2::new(1.0, 1.0)).is_err());
    }
}
