//! Gauge arithmetic: swatch density to cast-on and row counts.

use serde::{Deserialize, Serialize};

use crate::error::{KnitError, Result};

/// Gauge is measured over a 10-unit swatch (10 cm, or 4 in rounded).
pub const SWATCH_SIZE: f64 = 10.0;

/// Stitch and row counts for a target size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeResult {
    pub cast_on: u64,
    pub row_count: u64,
    pub stitches_per_unit: f64,
    pub rows_per_unit: f64,
}

/// Largest count reported exactly (every integer up to 2^53 fits in an f64).
pub const MAX_COUNT: f64 = 9_007_199_254_740_992.0;

fn to_count(name: &str, value: f64) -> Result<u64> {
    let rounded = value.round();
    if !rounded.is_finite() || rounded > MAX_COUNT {
        return Err(KnitError::InvalidArgument(format!(
            "{} of {} is too large",
            name, value
        )));
    }
    Ok(rounded as u64)
}

fn check(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(KnitError::InvalidArgument(format!(
            "{} must be a non-negative finite number, got {}",
            name, value
        )));
    }
    Ok(value)
}

/// Compute cast-on and row counts from swatch gauge.
///
/// Counts are rounded half away from zero. A zero target yields zero.
pub fn gauge_calc(
    sts_per_10units: f64,
    rows_per_10units: f64,
    target_width: f64,
    target_height: f64,
) -> Result<GaugeResult> {
    let sts = check("sts_per_10units", sts_per_10units)?;
    let rows = check("rows_per_10units", rows_per_10units)?;
    let width = check("target_width", target_width)?;
    let height = check("target_height", target_height)?;

    let stitches_per_unit = sts / SWATCH_SIZE;
    let rows_per_unit = rows / SWATCH_SIZE;

    Ok(GaugeResult {
        cast_on: to_count("cast_on", stitches_per_unit * width)?,
        row_count: to_count("row_count", rows_per_unit * height)?,
        stitches_per_unit,
        rows_per_unit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_gauge() {
        let result = gauge_calc(20.0, 28.0, 50.0, 30.0).unwrap();
        assert_eq!(result.stitches_per_unit, 2.0);
        assert!((result.rows_per_unit - 2.8).abs() < 1e-12);
        assert_eq!(result.cast_on, 100);
        assert_eq!(result.row_count, 84);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        // 2.5 sts/unit * 3 = 7.5 -> 8
        let result = gauge_calc(25.0, 10.0, 3.0, 1.0).unwrap();
        assert_eq!(result.cast_on, 8);
        assert_eq!(result.row_count, 1);
    }

    #[test]
    fn test_zero_target_is_allowed() {
        let result = gauge_calc(22.0, 30.0, 0.0, 0.0).unwrap();
        assert_eq!(result.cast_on, 0);
        assert_eq!(result.row_count, 0);
    }

    #[test]
    fn test_negative_inputs_rejected() {
        assert!(matches!(
            gauge_calc(-1.0, 28.0, 50.0, 30.0),
            Err(KnitError::InvalidArgument(_))
        ));
        assert!(gauge_calc(20.0, -28.0, 50.0, 30.0).is_err());
        assert!(gauge_calc(20.0, 28.0, -50.0, 30.0).is_err());
        assert!(gauge_calc(20.0, 28.0, 50.0, -0.5).is_err());
    }

    #[test]
    fn test_huge_counts_rejected() {
        assert!(matches!(
            gauge_calc(1e300, 28.0, 1e300, 30.0),
            Err(KnitError::InvalidArgument(_))
        ));
        assert!(gauge_calc(20.0, 1e200, 50.0, 1e200).is_err());
        assert!(gauge_calc(20.0, 28.0, 1e20, 30.0).is_err());
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        assert!(gauge_calc(f64::NAN, 28.0, 50.0, 30.0).is_err());
        assert!(gauge_calc(20.0, f64::INFINITY, 50.0, 30.0).is_err());
    }
}
