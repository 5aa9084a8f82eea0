//! Decimal rounding and unit conversion

use crate::constants::{METRES_PER_YARD, MM_PER_INCH, POINTS_PER_INCH, POINTS_PER_MM};

/// Round `value` to `places` decimal places, halves away from zero.
///
/// Decimal halves such as 0.145 are stored just below the half in binary, so
/// the scaled value is nudged outward by a few ulps before rounding.
pub fn round(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor * (1.0 + 4.0 * f64::EPSILON)).round() / factor
}

#[inline]
pub fn inches_to_points(inches: f64) -> f64 {
    inches * POINTS_PER_INCH
}

#[inline]
pub fn points_to_inches(points: f64) -> f64 {
    points / POINTS_PER_INCH
}

#[inline]
pub fn mm_to_points(mm: f64) -> f64 {
    mm * POINTS_PER_MM
}

#[inline]
pub fn points_to_mm(points: f64) -> f64 {
    points / POINTS_PER_MM
}

#[inline]
pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

#[inline]
pub fn yards_to_metres(yards: f64) -> f64 {
    yards * METRES_PER_YARD
}

#[inline]
pub fn metres_to_yards(metres: f64) -> f64 {
    metres / METRES_PER_YARD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round(2.5, 0), 3.0);
        assert_eq!(round(45.5, 0), 46.0);
        assert_eq!(round(0.125, 2), 0.13);
        assert_eq!(round(1.25, 1), 1.3);
        assert_eq!(round(41.91, 0), 42.0);
        assert_eq!(round(7.333333, 2), 7.33);
    }

    #[test]
    fn test_round_decimal_halves() {
        assert_eq!(round(1.005, 2), 1.01);
        assert_eq!(round(0.285, 2), 0.29);
        assert_eq!(round(0.145, 2), 0.15);
        assert_eq!(round(2.675, 2), 2.68);
        assert_eq!(round(0.35, 1), 0.4);
    }

    #[test]
    fn test_round_leaves_whole_numbers() {
        assert_eq!(round(300.0, 0), 300.0);
        assert_eq!(round(11.0, 2), 11.0);
    }

    #[test]
    fn test_yards_metres_round_trip() {
        for yards in [1.0, 46.0, 100.0, 300.0, 1000.0] {
            let back = metres_to_yards(yards_to_metres(yards));
            assert!((back - yards).abs() < 1e-9, "{} came back as {}", yards, back);
        }
    }

    #[test]
    fn test_point_conversions() {
        assert_eq!(inches_to_points(8.5), 612.0);
        assert!((points_to_mm(612.0) - 215.9).abs() < 1e-9);
        assert!((mm_to_points(25.4) - 72.0).abs() < 1e-9);
        assert_eq!(points_to_inches(792.0), 11.0);
        assert!((inches_to_mm(11.0) - 279.4).abs() < 1e-9);
    }
}
