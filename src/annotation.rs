//! Placement of drawing annotations along a segment.
//!
//! Combines the angle and offset helpers into what a host drawing needs to
//! place a flow arrow or a text label on a pipe run: an insertion point plus a
//! rotation in degrees.

use crate::log;
use crate::math::angle_2d::{azimuth, cad_angle, readable_rotation};
use crate::math::offset_2d::{perpendicular_offset_point, Side, DEFAULT_POSITION, DEFAULT_SIDE};
use crate::math::segment_2d::{point_at_ratio, segment_length};
use crate::math::Point2;

/// A flow arrow insertion point with its azimuth rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub point: Point2,
    /// Azimuth in degrees: 0° North, clockwise.
    pub rotation: f64,
}

/// Places flow-direction arrows on segments that are long enough to hold one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArrowPlacement {
    /// Drawing scale; multiplies `min_segment_length`.
    pub scale_factor: f64,
    /// Shortest segment, in scale units, that still gets an arrow.
    pub min_segment_length: f64,
    /// Interpolation position of the arrow along the segment.
    pub position: f64,
}

impl Default for ArrowPlacement {
    fn default() -> Self {
        Self {
            scale_factor: 1.0,
            min_segment_length: 20.0,
            position: 0.75,
        }
    }
}

impl ArrowPlacement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    #[must_use]
    pub fn min_segment_length(mut self, min_segment_length: f64) -> Self {
        self.min_segment_length = min_segment_length;
        self
    }

    #[must_use]
    pub fn position(mut self, position: f64) -> Self {
        self.position = position;
        self
    }

    /// Returns the arrow for the segment `p1 -> p2`, or `None` if the segment
    /// is shorter than `min_segment_length * scale_factor`.
    #[must_use]
    pub fn place(&self, p1: &Point2, p2: &Point2) -> Option<Arrow> {
        let length = segment_length(p1, p2);
        let min_length = self.min_segment_length * self.scale_factor;
        if length < min_length {
            log::debug!(length, min_length, "segment too short for a flow arrow");
            return None;
        }
        Some(Arrow {
            point: point_at_ratio(p1, p2, self.position),
            rotation: azimuth(p1, p2),
        })
    }
}

/// A text label insertion point with a rotation that keeps the text readable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label {
    pub point: Point2,
    /// CAD angle in degrees, in `[0, 90] ∪ (270, 360)`.
    pub rotation: f64,
}

/// Places text labels parallel to a segment, offset to one side.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabelPlacement {
    pub offset: f64,
    pub position: f64,
    pub side: Side,
}

impl Default for LabelPlacement {
    fn default() -> Self {
        Self {
            offset: 0.0,
            position: DEFAULT_POSITION,
            side: DEFAULT_SIDE,
        }
    }
}

impl LabelPlacement {
    /// Creates a placement with the given offset at the default position and side.
    #[must_use]
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn position(mut self, position: f64) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Returns the label for the segment `p1 -> p2`.
    ///
    /// A zero-length segment puts the label on the segment point with
    /// rotation 0.
    #[must_use]
    pub fn place(&self, p1: &Point2, p2: &Point2) -> Label {
        Label {
            point: perpendicular_offset_point(p1, p2, self.offset, self.position, self.side),
            rotation: readable_rotation(cad_angle(p1, p2)),
        }
    }
}
