//! # Numeric Helpers
//!
//! Table interpolation and distribution helpers shared by the seismic
//! modules. Code tables (site coefficients, spectral shape factors,
//! normalized record intensities) are all piecewise linear in their
//! arguments, so plain linear and bilinear interpolation is sufficient.

use crate::errors::{DesignError, DesignResult};

/// Piecewise linear interpolation over strictly increasing knots.
///
/// Returns an error if the knot vectors are malformed or `x` falls outside
/// the knot range. Exact endpoint hits are allowed.
///
/// # Example
///
/// ```rust
/// use girder_core::numeric::interp1;
///
/// let y = interp1(&[0.0, 1.0, 2.0], &[10.0, 20.0, 40.0], 1.5).unwrap();
/// assert_eq!(y, 30.0);
/// ```
pub fn interp1(xs: &[f64], ys: &[f64], x: f64) -> DesignResult<f64> {
    if !x.is_finite() {
        return Err(DesignError::invalid_input(
            "x",
            x.to_string(),
            "Interpolation argument must be finite",
        ));
    }
    if xs.len() != ys.len() {
        return Err(DesignError::Internal {
            message: format!(
                "interpolation knot mismatch: {} x values, {} y values",
                xs.len(),
                ys.len()
            ),
        });
    }
    if xs.len() < 2 {
        return Err(DesignError::Internal {
            message: "interpolation requires at least 2 knots".to_string(),
        });
    }
    if xs.windows(2).any(|w| w[1] <= w[0]) {
        return Err(DesignError::Internal {
            message: "interpolation knots must be strictly increasing".to_string(),
        });
    }

    let (lo, hi) = (xs[0], xs[xs.len() - 1]);
    if x < lo || x > hi {
        return Err(DesignError::out_of_range(
            "interpolation argument",
            x,
            format!("{} to {}", lo, hi),
        ));
    }

    // Index of the segment containing x. partition_point returns the first
    // knot strictly greater than x, so the segment start is one before it.
    let idx = xs.partition_point(|&k| k <= x).min(xs.len() - 1) - 1;
    let t = (x - xs[idx]) / (xs[idx + 1] - xs[idx]);
    Ok(ys[idx] + t * (ys[idx + 1] - ys[idx]))
}

/// Like [`interp1`], but clamps `x` to the knot range instead of erroring.
///
/// Used where a code table states "use the tabulated value" beyond its
/// bounds (e.g. site coefficients for Ss above the last column).
pub fn interp1_clamped(xs: &[f64], ys: &[f64], x: f64) -> DesignResult<f64> {
    if !x.is_finite() {
        return Err(DesignError::invalid_input(
            "x",
            x.to_string(),
            "Interpolation argument must be finite",
        ));
    }
    let clamped = x.clamp(xs[0], xs[xs.len() - 1]);
    interp1(xs, ys, clamped)
}

/// Bilinear interpolation over a rectangular grid.
///
/// `grid` is indexed `grid[i][j]` where `i` runs over `ys` (rows) and `j`
/// over `xs` (columns). Both arguments must fall within the knot ranges.
pub fn bilinear(xs: &[f64], ys: &[f64], grid: &[&[f64]], x: f64, y: f64) -> DesignResult<f64> {
    if !x.is_finite() || !y.is_finite() {
        return Err(DesignError::invalid_input(
            "x/y",
            format!("{}/{}", x, y),
            "Interpolation arguments must be finite",
        ));
    }
    if grid.len() != ys.len() || grid.iter().any(|row| row.len() != xs.len()) {
        return Err(DesignError::Internal {
            message: "bilinear grid does not match knot dimensions".to_string(),
        });
    }

    // Interpolate each bracketing row along x, then between rows along y.
    let (ylo, yhi) = (ys[0], ys[ys.len() - 1]);
    if y < ylo || y > yhi {
        return Err(DesignError::out_of_range(
            "interpolation argument",
            y,
            format!("{} to {}", ylo, yhi),
        ));
    }
    let i = ys.partition_point(|&k| k <= y).min(ys.len() - 1) - 1;
    let v0 = interp1(xs, grid[i], x)?;
    let v1 = interp1(xs, grid[i + 1], x)?;
    let t = (y - ys[i]) / (ys[i + 1] - ys[i]);
    Ok(v0 + t * (v1 - v0))
}

/// Inverse CDF of the standard normal distribution.
///
/// Acklam's rational approximation; absolute error below 1.2e-9 over the
/// open interval (0, 1), which is far tighter than the two-decimal code
/// tables this library reproduces.
pub fn probit(p: f64) -> DesignResult<f64> {
    if !(0.0..=1.0).contains(&p) || p == 0.0 || p == 1.0 {
        return Err(DesignError::out_of_range(
            "probability",
            p,
            "0.0 to 1.0 exclusive",
        ));
    }

    const A: [f64; 6] = [
        -3.969683028665376e+01,
        2.209460984245205e+02,
        -2.759285104469687e+02,
        1.383577518672690e+02,
        -3.066479806614716e+01,
        2.506628277459239e+00,
    ];
    const B: [f64; 5] = [
        -5.447609879822406e+01,
        1.615858368580409e+02,
        -1.556989798598866e+02,
        6.680131188771972e+01,
        -1.328068155288572e+01,
    ];
    const C: [f64; 6] = [
        -7.784894002430293e-03,
        -3.223964580411365e-01,
        -2.400758277161838e+00,
        -2.549732539343734e+00,
        4.374664141464968e+00,
        2.938163982698783e+00,
    ];
    const D: [f64; 4] = [
        7.784695709041462e-03,
        3.224671290700398e-01,
        2.445134137142996e+00,
        3.754408661907416e+00,
    ];

    const P_LOW: f64 = 0.02425;
    const P_HIGH: f64 = 1.0 - P_LOW;

    let x = if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= P_HIGH {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    };

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interp1_midpoints() {
        let xs = [1.0, 2.0, 4.0];
        let ys = [10.0, 20.0, 10.0];
        assert_relative_eq!(interp1(&xs, &ys, 1.5).unwrap(), 15.0);
        assert_relative_eq!(interp1(&xs, &ys, 3.0).unwrap(), 15.0);
    }

    #[test]
    fn test_interp1_endpoints() {
        let xs = [1.0, 2.0, 4.0];
        let ys = [10.0, 20.0, 10.0];
        assert_relative_eq!(interp1(&xs, &ys, 1.0).unwrap(), 10.0);
        assert_relative_eq!(interp1(&xs, &ys, 4.0).unwrap(), 10.0);
    }

    #[test]
    fn test_interp1_out_of_range() {
        let xs = [1.0, 2.0];
        let ys = [10.0, 20.0];
        assert!(interp1(&xs, &ys, 0.5).is_err());
        assert!(interp1(&xs, &ys, 2.5).is_err());
    }

    #[test]
    fn test_interp1_clamped() {
        let xs = [1.0, 2.0];
        let ys = [10.0, 20.0];
        assert_relative_eq!(interp1_clamped(&xs, &ys, 0.0).unwrap(), 10.0);
        assert_relative_eq!(interp1_clamped(&xs, &ys, 5.0).unwrap(), 20.0);
    }

    #[test]
    fn test_interp1_rejects_non_finite() {
        // NaN compares false against both range bounds, so it must be
        // caught before the segment search
        let xs = [1.0, 2.0];
        let ys = [10.0, 20.0];
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = interp1(&xs, &ys, bad).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
            let err = interp1_clamped(&xs, &ys, bad).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }
    }

    #[test]
    fn test_bilinear_rejects_non_finite() {
        let xs = [0.0, 1.0];
        let ys = [0.0, 1.0];
        let grid: [&[f64]; 2] = [&[0.0, 1.0], &[1.0, 2.0]];
        assert!(bilinear(&xs, &ys, &grid, f64::NAN, 0.5).is_err());
        assert!(bilinear(&xs, &ys, &grid, 0.5, f64::NAN).is_err());
    }

    #[test]
    fn test_bilinear_center() {
        let xs = [0.0, 1.0];
        let ys = [0.0, 1.0];
        let grid: [&[f64]; 2] = [&[0.0, 1.0], &[1.0, 2.0]];
        assert_relative_eq!(bilinear(&xs, &ys, &grid, 0.5, 0.5).unwrap(), 1.0);
        assert_relative_eq!(bilinear(&xs, &ys, &grid, 1.0, 1.0).unwrap(), 2.0);
    }

    #[test]
    fn test_bilinear_reduces_to_rows() {
        let xs = [0.0, 2.0];
        let ys = [0.0, 1.0];
        let grid: [&[f64]; 2] = [&[4.0, 8.0], &[0.0, 0.0]];
        assert_relative_eq!(bilinear(&xs, &ys, &grid, 1.0, 0.0).unwrap(), 6.0);
    }

    #[test]
    fn test_probit_known_values() {
        // Reference values from standard normal tables
        assert_relative_eq!(probit(0.5).unwrap(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(probit(0.975).unwrap(), 1.959964, epsilon = 1e-5);
        assert_relative_eq!(probit(0.2).unwrap(), -0.8416212, epsilon = 1e-6);
        assert_relative_eq!(probit(0.1).unwrap(), -1.2815516, epsilon = 1e-6);
    }

    #[test]
    fn test_probit_symmetry() {
        let lo = probit(0.25).unwrap();
        let hi = probit(0.75).unwrap();
        assert_relative_eq!(lo, -hi, epsilon = 1e-9);
    }

    #[test]
    fn test_probit_rejects_bounds() {
        assert!(probit(0.0).is_err());
        assert!(probit(1.0).is_err());
        assert!(probit(-0.1).is_err());
    }
}
