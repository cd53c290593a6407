use thiserror::Error;

/// Top-level error type for the sightline pathfinding library.
#[derive(Debug, Error)]
pub enum SightlineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors raised while validating input geometry.
///
/// All validation happens up front, when obstacles and waypoints are added
/// to a [`crate::topology::Scene`]; the search itself never fails on
/// geometry it has accepted.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
}

/// Errors related to scene topology lookups.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Convenience type alias for results using [`SightlineError`].
pub type Result<T> = std::result::Result<T, SightlineError>;
