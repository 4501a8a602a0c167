pub mod angle_2d;
pub mod offset_2d;
pub mod scalar;
pub mod segment_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance for floating-point comparisons in tests and callers.
///
/// The degenerate-segment checks themselves compare against exact zero.
pub const TOLERANCE: f64 = 1e-10;
