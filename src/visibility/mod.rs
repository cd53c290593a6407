pub mod corner;

pub use corner::exits_through_corner;

use crate::error::Result;
use crate::math::intersect_2d::segments_cross;
use crate::topology::{Scene, VertexId};

/// Tests whether `start` and `end` see each other: no obstacle edge
/// crosses the segment between them, and the segment does not leave
/// `start` through its own polygon's interior angle.
///
/// Edges incident to either endpoint are skipped by identity: they always
/// touch the segment at the shared vertex and must not count as blocking.
/// That skip is also why the corner test exists at all: a diagonal
/// cutting through the starting corner crosses no non-incident edge.
///
/// # Errors
///
/// Returns an error if either vertex is not in the scene.
pub fn visible(scene: &Scene, start: VertexId, end: VertexId) -> Result<bool> {
    let start_point = scene.point(start)?;
    let end_point = scene.point(end)?;

    for (id, _) in scene.polygons() {
        for edge in scene.edges(id)? {
            if edge.touches(start) || edge.touches(end) {
                continue;
            }
            let e0 = scene.point(edge.start)?;
            let e1 = scene.point(edge.end)?;
            if segments_cross(&e0, &e1, &start_point, &end_point) {
                return Ok(false);
            }
        }
    }

    if scene.vertex(start)?.owner.is_some()
        && exits_through_corner(scene, start, &end_point)?
    {
        return Ok(false);
    }

    Ok(true)
}

/// Collects every scene vertex visible from `vertex`: all obstacle
/// vertices plus the supplied extra targets (typically the goal).
///
/// Adjacency is recomputed per call rather than cached; the visibility
/// graph is never materialized up front, only the explored fringe pays
/// for its edges.
///
/// # Errors
///
/// Returns an error if `vertex` or any extra target is not in the scene.
pub fn visible_neighbors(
    scene: &Scene,
    vertex: VertexId,
    extra_targets: &[VertexId],
) -> Result<Vec<VertexId>> {
    let mut reachable = Vec::new();

    for candidate in scene
        .obstacle_vertices()
        .chain(extra_targets.iter().copied())
    {
        if candidate == vertex {
            continue;
        }
        if visible(scene, vertex, candidate)? {
            reachable.push(candidate);
        }
    }

    Ok(reachable)
}
