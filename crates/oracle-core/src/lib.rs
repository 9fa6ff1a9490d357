pub mod clock;
pub mod constants;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod geometry;
pub mod oracle;
pub mod outcome;
pub mod planner;
pub mod rng;
pub mod settings;
pub mod theme;
pub mod ticks;
pub mod tones;

pub use clock::*;
pub use constants::*;
pub use engine::*;
pub use error::*;
pub use feedback::*;
pub use geometry::*;
pub use oracle::*;
pub use outcome::*;
pub use planner::*;
pub use rng::*;
pub use settings::*;
pub use theme::*;
pub use ticks::*;
