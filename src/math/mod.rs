pub mod angle_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Segments whose transverse separation stays below this value are treated
/// as parallel, and a ray within this angular margin of a polygon edge is
/// treated as grazing it rather than entering the interior.
pub const TOLERANCE: f64 = 1e-5;
