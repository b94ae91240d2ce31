//! 2D vector helpers
//!
//! Angles passed to `angle_to_vector`/`vector_to_angle` are degrees measured
//! clockwise from "up" (the negative y axis, screen coordinates).

use glam::Vec2;

/// Convert degrees to radians
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * 180.0 / std::f32::consts::PI
}

/// Length of a vector
#[inline]
pub fn magnitude(v: Vec2) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Scale `v` to unit length.
///
/// Returns `None` when `v` has zero (or non-finite) magnitude; callers pick
/// their own fallback direction.
#[inline]
pub fn unit_vector(v: Vec2) -> Option<Vec2> {
    let len = magnitude(v);
    if len > 0.0 && len.is_finite() {
        Some(v / len)
    } else {
        None
    }
}

/// Vector pointing from `from` to `to`
#[inline]
pub fn vector_between(from: Vec2, to: Vec2) -> Vec2 {
    to - from
}

#[inline]
pub fn dot_product(a: Vec2, b: Vec2) -> f32 {
    a.x * b.x + a.y * b.y
}

/// Rotate `point` around `pivot` by `angle` radians
pub fn rotate(point: Vec2, pivot: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    let d = point - pivot;
    Vec2::new(d.x * cos - d.y * sin + pivot.x, d.x * sin + d.y * cos + pivot.y)
}

/// Unit vector for a heading in degrees (0 = up, 90 = right)
pub fn angle_to_vector(degrees: f32) -> Vec2 {
    let r = degrees_to_radians(degrees);
    Vec2::new(r.sin(), -r.cos())
}

/// Heading of `v` in degrees, in `[0, 360)`.
///
/// A zero vector has no heading and maps to 0.
pub fn vector_to_angle(v: Vec2) -> f32 {
    let Some(unit) = unit_vector(v) else {
        return 0.0;
    };
    let angle = radians_to_degrees(unit.x.atan2(-unit.y));
    if angle < 0.0 { angle + 360.0 } else { angle }
}

/// Closest point to `p` on the segment `a..b`
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let line = b - a;
    let len_sq = line.length_squared();
    if len_sq < 1e-8 {
        return a; // Degenerate segment
    }
    let t = (dot_product(p - a, line) / len_sq).clamp(0.0, 1.0);
    a + line * t
}

/// Unit normal from the segment `a..b` toward `p`, or `None` if `p` lies on it
pub fn bounce_line_normal(p: Vec2, a: Vec2, b: Vec2) -> Option<Vec2> {
    unit_vector(vector_between(closest_point_on_segment(p, a, b), p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unit_vector_zero_is_none() {
        assert!(unit_vector(Vec2::ZERO).is_none());
        assert!(unit_vector(Vec2::new(f32::NAN, 1.0)).is_none());
    }

    #[test]
    fn test_unit_vector_axis() {
        let v = unit_vector(Vec2::new(0.0, -5.0)).unwrap();
        assert_eq!(v, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_angle_vector_convention() {
        // 0° is up, 90° is right
        let up = angle_to_vector(0.0);
        assert!((up - Vec2::new(0.0, -1.0)).length() < 1e-5);
        let right = angle_to_vector(90.0);
        assert!((right - Vec2::new(1.0, 0.0)).length() < 1e-5);

        assert!((vector_to_angle(Vec2::new(1.0, 0.0)) - 90.0).abs() < 1e-3);
        assert!((vector_to_angle(Vec2::new(0.0, 1.0)) - 180.0).abs() < 1e-3);
        assert!((vector_to_angle(Vec2::new(-1.0, 0.0)) - 270.0).abs() < 1e-3);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let p = rotate(Vec2::new(2.0, 1.0), Vec2::new(1.0, 1.0), std::f32::consts::FRAC_PI_2);
        assert!((p - Vec2::new(1.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn test_closest_point_on_segment() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(closest_point_on_segment(Vec2::new(5.0, 3.0), a, b), Vec2::new(5.0, 0.0));
        assert_eq!(closest_point_on_segment(Vec2::new(-4.0, 3.0), a, b), a);
        assert_eq!(closest_point_on_segment(Vec2::new(14.0, -3.0), a, b), b);

        let n = bounce_line_normal(Vec2::new(5.0, 3.0), a, b).unwrap();
        assert!((n - Vec2::new(0.0, 1.0)).length() < 1e-6);
        assert!(bounce_line_normal(Vec2::new(5.0, 0.0), a, b).is_none());
    }

    proptest! {
        #[test]
        fn unit_vector_has_unit_length_and_same_direction(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
        ) {
            let v = Vec2::new(x, y);
            prop_assume!(magnitude(v) > 1e-3);
            let u = unit_vector(v).unwrap();
            prop_assert!((magnitude(u) - 1.0).abs() < 1e-4);
            // Parallel with a positive scale factor
            prop_assert!(dot_product(u, v) > 0.0);
            prop_assert!((u.x * v.y - u.y * v.x).abs() < 1e-2 * magnitude(v));
        }

        #[test]
        fn angle_round_trips(deg in 0.0f32..359.9) {
            let back = vector_to_angle(angle_to_vector(deg));
            prop_assert!((back - deg).abs() < 1e-2);
        }
    }
}
