//! Perpendicular offset points for annotating a segment.
//!
//! # Sign Convention
//!
//! Sides are taken relative to the walking direction `p1 -> p2`:
//! - `Side::Left`: the segment direction rotated 90° counter-clockwise
//! - `Side::Right`: the segment direction rotated 90° clockwise
//!
//! A negative distance moves to the opposite side.

use std::fmt;
use std::str::FromStr;

use crate::error::GeomError;
use crate::log;

use super::{Point2, Vector2};

/// Interpolation position used when none is given: the segment midpoint.
pub const DEFAULT_POSITION: f64 = 0.5;

/// Side used when none is given.
pub const DEFAULT_SIDE: Side = Side::Left;

/// Which perpendicular direction an offset goes toward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    /// Returns the unit normal of `unit_dir` on this side.
    #[must_use]
    pub fn normal(self, unit_dir: &Vector2) -> Vector2 {
        match self {
            Self::Left => Vector2::new(-unit_dir.y, unit_dir.x),
            Self::Right => Vector2::new(unit_dir.y, -unit_dir.x),
        }
    }

    /// Returns the other side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

impl FromStr for Side {
    type Err = GeomError;

    /// Parses `"left"` or `"right"`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("left") {
            Ok(Self::Left)
        } else if trimmed.eq_ignore_ascii_case("right") {
            Ok(Self::Right)
        } else {
            Err(GeomError::InvalidSide(s.to_owned()))
        }
    }
}

/// Computes a point offset perpendicularly from the segment `p1 -> p2`.
///
/// The base point is `p1 + position * (p2 - p1)`; `position` outside `[0, 1]`
/// extrapolates along the supporting line. The result is the base point moved
/// by `distance` along the unit normal on `side`.
///
/// A zero-length segment has no normal, so the base point is returned as-is.
#[must_use]
pub fn perpendicular_offset_point(
    p1: &Point2,
    p2: &Point2,
    distance: f64,
    position: f64,
    side: Side,
) -> Point2 {
    let dir = p2 - p1;
    let base = p1 + dir * position;

    let len = dir.norm();
    if len == 0.0 {
        log::trace!(x = p1.x, y = p1.y, "zero-length segment, offset falls back to base point");
        return base;
    }

    base + side.normal(&(dir / len)) * distance
}

/// Computes the offset point at the segment midpoint on the left side.
///
/// Same as [`perpendicular_offset_point`] with [`DEFAULT_POSITION`] and
/// [`DEFAULT_SIDE`].
#[must_use]
pub fn perpendicular_offset(p1: &Point2, p2: &Point2, distance: f64) -> Point2 {
    perpendicular_offset_point(p1, p2, distance, DEFAULT_POSITION, DEFAULT_SIDE)
}

/// Offset parameters with named defaults.
///
/// ```
/// use drafting_geom::math::offset_2d::{OffsetOptions, Side};
/// use drafting_geom::math::Point2;
///
/// let p = OffsetOptions::new(2.0)
///     .side(Side::Right)
///     .apply(&Point2::new(0.0, 0.0), &Point2::new(10.0, 0.0));
/// assert_eq!(p, Point2::new(5.0, -2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OffsetOptions {
    pub distance: f64,
    pub position: f64,
    pub side: Side,
}

impl Default for OffsetOptions {
    fn default() -> Self {
        Self {
            distance: 0.0,
            position: DEFAULT_POSITION,
            side: DEFAULT_SIDE,
        }
    }
}

impl OffsetOptions {
    /// Creates options for the given distance with the default position and side.
    #[must_use]
    pub fn new(distance: f64) -> Self {
        Self {
            distance,
            ..Self::default()
        }
    }

    /// Sets the interpolation position along the segment.
    #[must_use]
    pub fn position(mut self, position: f64) -> Self {
        self.position = position;
        self
    }

    /// Sets the offset side.
    #[must_use]
    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Computes the offset point for the segment `p1 -> p2`.
    #[must_use]
    pub fn apply(&self, p1: &Point2, p2: &Point2) -> Point2 {
        perpendicular_offset_point(p1, p2, self.distance, self.position, self.side)
    }
}

/// Moves `reference` along the left normal of the segment `start -> end`.
///
/// Positive `distance` goes left, negative goes right. A zero-length segment
/// returns `reference` unchanged.
#[must_use]
pub fn perpendicular_point(start: &Point2, end: &Point2, reference: &Point2, distance: f64) -> Point2 {
    let dir = end - start;
    let len = dir.norm();
    if len == 0.0 {
        log::trace!("zero-length segment, perpendicular point falls back to reference");
        return *reference;
    }
    reference + Side::Left.normal(&(dir / len)) * distance
}
