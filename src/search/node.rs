use std::cmp::Ordering;

use crate::topology::VertexId;

/// Entry in the A* frontier.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed to pop the
/// smallest estimate first. Ties on `f` fall back to the insertion
/// sequence number, earliest first, which makes repeated searches over
/// identical input pop in an identical order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierNode {
    /// Vertex this entry would finalize.
    pub vertex: VertexId,
    /// Vertex it was reached from, `None` for the start.
    pub prev: Option<VertexId>,
    /// Cost accumulated from the start.
    pub g: f64,
    /// Priority estimate, `g` plus the straight-line distance to goal.
    pub f: f64,
    /// Monotonic insertion number for deterministic tie-breaking.
    pub seq: u64,
}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for FrontierNode {}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on f for min-heap behaviour; NaN sinks to the bottom.
        match (self.f.is_nan(), other.f.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => other
                .f
                .partial_cmp(&self.f)
                .unwrap_or(Ordering::Equal)
                .then_with(|| other.seq.cmp(&self.seq)),
        }
    }
}
