//! Drafting angles in degrees.
//!
//! CAD convention: 0° points along +x (East) and angles grow counter-clockwise.
//! Surveying azimuths instead start at North and grow clockwise.

use super::Point2;

/// Wraps an angle in degrees into `[0, 360)`.
///
/// NaN and infinite inputs produce NaN.
#[must_use]
pub fn normalize_angle(angle_deg: f64) -> f64 {
    // `%` keeps the dividend's sign.
    let rem = angle_deg % 360.0;
    if rem >= 0.0 {
        // Turns -0.0 into 0.0; every other value is unchanged.
        return rem + 0.0;
    }
    let wrapped = rem + 360.0;
    // Tiny negative remainders round up to exactly 360.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Returns the direction of the segment `p1 -> p2` in degrees, CAD convention.
///
/// The result lies in `(-180, 180]` and is not normalized. A zero-length
/// segment yields `0.0`.
#[must_use]
pub fn cad_angle(p1: &Point2, p2: &Point2) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    dy.atan2(dx).to_degrees()
}

/// Adjusts a text rotation so the text never reads upside down.
///
/// Angles in `(90, 270]` (after normalization) are turned by 180°. The
/// boundary is asymmetric: 90° is kept, 270° is flipped to 90°.
#[must_use]
pub fn readable_rotation(angle_deg: f64) -> f64 {
    let angle = normalize_angle(angle_deg);
    if angle > 90.0 && angle <= 270.0 {
        normalize_angle(angle + 180.0)
    } else {
        angle
    }
}

/// Returns the surveying azimuth of `p1 -> p2`: 0° North, 90° East, clockwise.
///
/// The result lies in `[0, 360)`. A zero-length segment yields `0.0`.
#[must_use]
pub fn azimuth(p1: &Point2, p2: &Point2) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    let deg = dx.atan2(dy).to_degrees();
    if deg < 0.0 {
        deg + 360.0
    } else {
        deg
    }
}

/// Returns the segment angle folded into `[-90, 90]` for aligning a label.
///
/// Unlike [`readable_rotation`] this keeps signed angles, so a segment
/// pointing straight down gives `-90`.
#[must_use]
pub fn text_rotation(p1: &Point2, p2: &Point2) -> f64 {
    if p1 == p2 {
        return 0.0;
    }
    let angle = cad_angle(p1, p2);
    if angle > 90.0 {
        angle - 180.0
    } else if angle < -90.0 {
        angle + 180.0
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use super::*;

    const TOL: f64 = 1e-9;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    // ── normalize_angle ──

    #[test]
    fn normalize_keeps_in_range_values() {
        assert_abs_diff_eq!(normalize_angle(0.0), 0.0);
        assert_abs_diff_eq!(normalize_angle(45.0), 45.0);
        assert_abs_diff_eq!(normalize_angle(359.5), 359.5);
    }

    #[test]
    fn normalize_wraps_full_turns() {
        assert_abs_diff_eq!(normalize_angle(360.0), 0.0);
        assert_abs_diff_eq!(normalize_angle(720.0), 0.0);
        assert_abs_diff_eq!(normalize_angle(405.0), 45.0, epsilon = TOL);
    }

    #[test]
    fn normalize_negative_angles() {
        assert_abs_diff_eq!(normalize_angle(-90.0), 270.0);
        assert_abs_diff_eq!(normalize_angle(-360.0), 0.0);
        assert_abs_diff_eq!(normalize_angle(-450.0), 270.0, epsilon = TOL);
    }

    #[test]
    fn normalize_full_negative_turn_is_positive_zero() {
        let a = normalize_angle(-360.0);
        assert_eq!(a.to_bits(), 0.0_f64.to_bits(), "a={a}");
        assert!(normalize_angle(-0.0).is_sign_positive());
        assert_eq!(format!("{}", normalize_angle(-720.0)), "0");
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        let a = normalize_angle(-1e-17);
        assert!((0.0..360.0).contains(&a), "a={a}");
    }

    #[test]
    fn normalize_nan_and_infinity() {
        assert!(normalize_angle(f64::NAN).is_nan());
        assert!(normalize_angle(f64::INFINITY).is_nan());
        assert!(normalize_angle(f64::NEG_INFINITY).is_nan());
    }

    // ── cad_angle ──

    #[test]
    fn cad_angle_cardinal_directions() {
        let o = p(0.0, 0.0);
        assert_abs_diff_eq!(cad_angle(&o, &p(1.0, 0.0)), 0.0);
        assert_abs_diff_eq!(cad_angle(&o, &p(0.0, 1.0)), 90.0, epsilon = TOL);
        assert_abs_diff_eq!(cad_angle(&o, &p(-1.0, 0.0)), 180.0, epsilon = TOL);
        assert_abs_diff_eq!(cad_angle(&o, &p(0.0, -1.0)), -90.0, epsilon = TOL);
    }

    #[test]
    fn cad_angle_diagonal_is_independent_of_origin() {
        let a = cad_angle(&p(10.0, 20.0), &p(13.0, 23.0));
        assert_abs_diff_eq!(a, 45.0, epsilon = TOL);
    }

    #[test]
    fn cad_angle_zero_length_segment() {
        let q = p(3.5, -7.25);
        assert_abs_diff_eq!(cad_angle(&q, &q), 0.0);
    }

    // ── readable_rotation ──

    #[test]
    fn readable_rotation_boundaries() {
        assert_abs_diff_eq!(readable_rotation(45.0), 45.0);
        assert_abs_diff_eq!(readable_rotation(90.0), 90.0);
        assert_abs_diff_eq!(readable_rotation(91.0), 271.0);
        assert_abs_diff_eq!(readable_rotation(270.0), 90.0);
        assert_abs_diff_eq!(readable_rotation(271.0), 271.0);
    }

    #[test]
    fn readable_rotation_flips_left_pointing_angles() {
        assert_abs_diff_eq!(readable_rotation(180.0), 0.0);
        assert_abs_diff_eq!(readable_rotation(269.0), 89.0);
        // -89 normalizes to 271, outside the flip range.
        assert_abs_diff_eq!(readable_rotation(-89.0), 271.0);
    }

    #[test]
    fn readable_rotation_wrap_edges_stay_unflipped() {
        assert_abs_diff_eq!(readable_rotation(0.0), 0.0);
        assert_abs_diff_eq!(readable_rotation(360.0), 0.0);
        assert_abs_diff_eq!(readable_rotation(-270.0), 90.0);
    }

    // ── azimuth ──

    #[test]
    fn azimuth_cardinal_directions() {
        let o = p(0.0, 0.0);
        assert_abs_diff_eq!(azimuth(&o, &p(0.0, 1.0)), 0.0);
        assert_abs_diff_eq!(azimuth(&o, &p(1.0, 0.0)), 90.0, epsilon = TOL);
        assert_abs_diff_eq!(azimuth(&o, &p(0.0, -1.0)), 180.0, epsilon = TOL);
        assert_abs_diff_eq!(azimuth(&o, &p(-1.0, 0.0)), 270.0, epsilon = TOL);
    }

    #[test]
    fn azimuth_zero_length_segment() {
        let q = p(1.0, 1.0);
        assert_abs_diff_eq!(azimuth(&q, &q), 0.0);
    }

    // ── text_rotation ──

    #[test]
    fn text_rotation_folds_leftward_segments() {
        let o = p(0.0, 0.0);
        assert_abs_diff_eq!(text_rotation(&o, &p(1.0, 1.0)), 45.0, epsilon = TOL);
        assert_abs_diff_eq!(text_rotation(&o, &p(-1.0, 1.0)), -45.0, epsilon = TOL);
        assert_abs_diff_eq!(text_rotation(&o, &p(-1.0, -1.0)), 45.0, epsilon = TOL);
        assert_abs_diff_eq!(text_rotation(&o, &p(-1.0, 0.0)), 0.0, epsilon = TOL);
        assert_abs_diff_eq!(text_rotation(&o, &p(0.0, -1.0)), -90.0, epsilon = TOL);
    }

    #[test]
    fn text_rotation_zero_length_segment() {
        let q = p(2.0, 2.0);
        assert_abs_diff_eq!(text_rotation(&q, &q), 0.0);
    }

    proptest! {
        #[test]
        fn normalize_is_in_range(a in -1.0e6..1.0e6_f64) {
            let n = normalize_angle(a);
            prop_assert!((0.0..360.0).contains(&n), "a={} n={}", a, n);
        }

        #[test]
        fn normalize_is_periodic(a in -1.0e4..1.0e4_f64, k in -20_i32..20) {
            let lhs = normalize_angle(a);
            let rhs = normalize_angle(a + 360.0 * f64::from(k));
            // Compare on the circle so 0 and 359.999... count as equal.
            let diff = (lhs - rhs).abs();
            prop_assert!(diff.min(360.0 - diff) < 1e-6, "lhs={} rhs={}", lhs, rhs);
        }

        #[test]
        fn normalize_is_idempotent(a in -1.0e6..1.0e6_f64) {
            let once = normalize_angle(a);
            prop_assert_eq!(normalize_angle(once), once);
        }

        #[test]
        fn readable_rotation_never_points_left(a in -1.0e4..1.0e4_f64) {
            let r = readable_rotation(a);
            prop_assert!(r <= 90.0 || r > 270.0, "a={} r={}", a, r);
        }

        #[test]
        fn text_rotation_is_folded(x in -1.0e3..1.0e3_f64, y in -1.0e3..1.0e3_f64) {
            let r = text_rotation(&Point2::origin(), &Point2::new(x, y));
            prop_assert!((-90.0..=90.0).contains(&r), "r={}", r);
        }
    }
}
