pub mod error;
pub mod math;
pub mod search;
pub mod topology;
pub mod visibility;

pub use error::{Result, SightlineError};
pub use math::Point2;
pub use search::{find_path, Path, SearchOutcome};
pub use topology::Scene;
