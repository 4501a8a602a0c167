use thiserror::Error;

/// Error type for the fallible edges of the drafting geometry helpers.
///
/// The angle and offset computations themselves never fail; errors only come
/// from parsing host-supplied values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    #[error("invalid side {0:?}, expected \"left\" or \"right\"")]
    InvalidSide(String),

    #[error("coordinate {axis} = {value} is not finite")]
    NonFiniteCoordinate { axis: &'static str, value: f64 },
}

/// Convenience type alias for results using [`GeomError`].
pub type Result<T> = std::result::Result<T, GeomError>;
