mod node;

use std::collections::BinaryHeap;

use log::debug;
use slotmap::SecondaryMap;

use crate::error::Result;
use crate::math::Point2;
use crate::topology::{Scene, VertexId};
use crate::visibility::visible_neighbors;

use node::FrontierNode;

/// A shortest path through the visibility graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Consecutive segment endpoints, in start→goal order. Each hop is a
    /// mutually visible vertex pair.
    pub segments: Vec<(Point2, Point2)>,
    /// Total Euclidean length of the path.
    pub cost: f64,
    /// Number of vertices finalized before the goal was reached.
    pub nodes_explored: usize,
}

/// Outcome of a path search.
///
/// An unreachable goal is a normal result, not an error: geometry that
/// passed validation cannot fail, only exhaust the frontier.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// A shortest path was found.
    Found(Path),
    /// The frontier was exhausted without reaching the goal.
    NoPath {
        /// Number of vertices finalized before giving up.
        nodes_explored: usize,
    },
}

/// Finds the shortest obstacle-avoiding path from `start` to `end`.
///
/// Obstacle polygons are given as boundary point rings; the path routes
/// through their vertices, each hop a straight unobstructed segment.
/// Polygons are assumed simple and non-overlapping with the endpoints.
///
/// # Errors
///
/// Returns a [`crate::error::GeometryError`] if any polygon has fewer
/// than 3 vertices or any coordinate is NaN or infinite. Unreachability
/// is reported through [`SearchOutcome::NoPath`] instead.
pub fn find_path(start: Point2, end: Point2, obstacles: &[Vec<Point2>]) -> Result<SearchOutcome> {
    let mut scene = Scene::new();
    for ring in obstacles {
        scene.add_obstacle(ring)?;
    }
    let start_vertex = scene.add_waypoint(start)?;
    let end_vertex = scene.add_waypoint(end)?;
    shortest_path(&scene, start_vertex, end_vertex)
}

/// A* over the implicit visibility graph of an already-built scene.
///
/// The frontier orders entries by `f = g + h` with the straight-line
/// distance to the goal as `h`; since no visibility-graph path can be
/// shorter than the straight line, the heuristic is admissible and the
/// first pop of the goal is optimal. Stale duplicate entries are allowed
/// in the frontier and discarded on pop once their vertex is visited.
///
/// # Errors
///
/// Returns an error if `start` or `goal` is not a vertex of the scene.
pub fn shortest_path(scene: &Scene, start: VertexId, goal: VertexId) -> Result<SearchOutcome> {
    let goal_point = scene.point(goal)?;
    scene.point(start)?;

    let mut frontier: BinaryHeap<FrontierNode> = BinaryHeap::new();
    let mut visited: SecondaryMap<VertexId, ()> = SecondaryMap::new();
    let mut predecessors: SecondaryMap<VertexId, Option<VertexId>> = SecondaryMap::new();
    let mut seq = 0_u64;
    let mut nodes_explored = 0_usize;

    frontier.push(FrontierNode {
        vertex: start,
        prev: None,
        g: 0.0,
        f: 0.0,
        seq,
    });

    while let Some(entry) = frontier.pop() {
        if visited.contains_key(entry.vertex) {
            // Stale duplicate left behind by lazy deletion.
            continue;
        }
        visited.insert(entry.vertex, ());
        predecessors.insert(entry.vertex, entry.prev);
        nodes_explored += 1;

        if entry.vertex == goal {
            debug!("goal reached: cost={} explored={nodes_explored}", entry.g);
            return Ok(SearchOutcome::Found(Path {
                segments: reconstruct(scene, &predecessors, goal)?,
                cost: entry.g,
                nodes_explored,
            }));
        }

        let here = scene.point(entry.vertex)?;
        for neighbor in visible_neighbors(scene, entry.vertex, &[goal])? {
            if visited.contains_key(neighbor) {
                continue;
            }
            let there = scene.point(neighbor)?;
            let g = entry.g + nalgebra::distance(&here, &there);
            seq += 1;
            frontier.push(FrontierNode {
                vertex: neighbor,
                prev: Some(entry.vertex),
                g,
                f: g + nalgebra::distance(&there, &goal_point),
                seq,
            });
        }
    }

    debug!("frontier exhausted: explored={nodes_explored}");
    Ok(SearchOutcome::NoPath { nodes_explored })
}

/// Walks the predecessor map back from the goal and emits the hops in
/// start→goal order.
fn reconstruct(
    scene: &Scene,
    predecessors: &SecondaryMap<VertexId, Option<VertexId>>,
    goal: VertexId,
) -> Result<Vec<(Point2, Point2)>> {
    let mut segments = Vec::new();
    let mut current = goal;
    while let Some(&Some(prev)) = predecessors.get(current) {
        segments.push((scene.point(prev)?, scene.point(current)?));
        current = prev;
    }
    segments.reverse();
    Ok(segments)
}
