//! Conversion between host point types and [`Point2`].
//!
//! The host application supplies coordinates in its own point type; implement
//! [`HostPoint`] for it to feed the helpers directly.

use crate::error::{GeomError, Result};
use crate::math::Point2;

/// A planar point type owned by the host application.
pub trait HostPoint: Sized {
    fn x(&self) -> f64;

    fn y(&self) -> f64;

    fn from_xy(x: f64, y: f64) -> Self;
}

/// Converts a host point to a [`Point2`] without validation.
#[must_use]
pub fn to_point2<P: HostPoint>(p: &P) -> Point2 {
    Point2::new(p.x(), p.y())
}

/// Converts a [`Point2`] back to the host point type.
#[must_use]
pub fn from_point2<P: HostPoint>(p: &Point2) -> P {
    P::from_xy(p.x, p.y)
}

/// Converts a host point to a [`Point2`], rejecting NaN and infinite coordinates.
///
/// # Errors
///
/// Returns [`GeomError::NonFiniteCoordinate`] naming the first offending axis.
pub fn try_to_point2<P: HostPoint>(p: &P) -> Result<Point2> {
    let (x, y) = (p.x(), p.y());
    if !x.is_finite() {
        return Err(GeomError::NonFiniteCoordinate { axis: "x", value: x });
    }
    if !y.is_finite() {
        return Err(GeomError::NonFiniteCoordinate { axis: "y", value: y });
    }
    Ok(Point2::new(x, y))
}

impl HostPoint for Point2 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn from_xy(x: f64, y: f64) -> Self {
        Point2::new(x, y)
    }
}

impl HostPoint for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }

    fn from_xy(x: f64, y: f64) -> Self {
        (x, y)
    }
}

impl HostPoint for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }

    fn from_xy(x: f64, y: f64) -> Self {
        [x, y]
    }
}
