pub mod annotation;
pub mod error;
pub mod host;
pub mod log;
pub mod math;

pub use error::{GeomError, Result};
pub use math::offset_2d::Side;
pub use math::Point2;
