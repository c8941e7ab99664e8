//! 1D resampling of response curves to a different wavelength resolution.
//!
//! Curves come sampled on an implicit uniform wavelength axis; resampling
//! builds an interpolant over that axis and evaluates it on a new uniform
//! axis. No extrapolation: every target point must sit inside the source
//! domain.

use ndarray::Array2;

use crate::error::{ResampleError, Result};

/// Interpolation method used between source samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Piecewise-linear, exact at the source sample points
    #[default]
    Linear,
    /// Value of the nearest source sample
    Nearest,
}

// Relative tolerance when snapping a target point onto the domain edge.
// Rounding in `start + i * resolution` can land a hair past `end`.
const EDGE_TOL: f64 = 1e-9;

/// Resample a curve sampled over `[start, end]` to a new uniform resolution.
///
/// The source axis is `curve.len()` points evenly spaced over the inclusive
/// interval; the target axis is `start + i * resolution` for
/// `i in 0..=floor((end - start) / resolution)`.
pub fn resample(
    curve: &[f64],
    start: f64,
    end: f64,
    resolution: f64,
    kind: Interpolation,
) -> Result<Vec<f64>> {
    check_domain(curve.len(), start, end, resolution)?;

    let step = (end - start) / (curve.len() - 1) as f64;
    target_axis(start, end, resolution)
        .into_iter()
        .map(|wavelength| Ok(evaluate(curve, start, end, step, wavelength, kind)?))
        .collect()
}

/// Resample a full curve set at once, deriving the domain from the given
/// wavelength axis. Returns the new axis and the resampled curves, one row
/// per band as before.
pub fn resample_response_curves(
    wavelength: &[f64],
    curves: &Array2<f64>,
    resolution: f64,
    kind: Interpolation,
) -> Result<(Vec<f64>, Array2<f64>)> {
    if wavelength.len() < 2 {
        return Err(ResampleError::InvalidInput(format!(
            "wavelength axis needs at least 2 samples, got {}",
            wavelength.len()
        ))
        .into());
    }
    if curves.ncols() != wavelength.len() {
        return Err(ResampleError::InvalidInput(format!(
            "curve matrix has {} columns for {} wavelengths",
            curves.ncols(),
            wavelength.len()
        ))
        .into());
    }

    let start = wavelength[0];
    let end = wavelength[wavelength.len() - 1];
    check_domain(wavelength.len(), start, end, resolution)?;

    let step = (end - start) / (wavelength.len() - 1) as f64;
    let axis = target_axis(start, end, resolution);
    let mut resampled = Array2::zeros((curves.nrows(), axis.len()));
    for (row, curve) in curves.rows().into_iter().enumerate() {
        let curve = curve.to_vec();
        for (col, &target) in axis.iter().enumerate() {
            resampled[[row, col]] = evaluate(&curve, start, end, step, target, kind)?;
        }
    }
    Ok((axis, resampled))
}

fn check_domain(samples: usize, start: f64, end: f64, resolution: f64) -> Result<()> {
    if samples < 2 {
        return Err(ResampleError::InvalidInput(format!(
            "curve needs at least 2 samples, got {samples}"
        ))
        .into());
    }
    if !(start < end) {
        return Err(ResampleError::InvalidInput(format!(
            "start wavelength {start} must be below end wavelength {end}"
        ))
        .into());
    }
    if !(resolution > 0.0) {
        return Err(ResampleError::InvalidInput(format!(
            "resolution must be positive, got {resolution}"
        ))
        .into());
    }
    Ok(())
}

/// Uniform target axis over `[start, end]`, clamped so the last point never
/// drifts past the edge
fn target_axis(start: f64, end: f64, resolution: f64) -> Vec<f64> {
    let span = end - start;
    let ratio = span / resolution;
    // snap near-integer ratios so the endpoint is not dropped
    let intervals = if (ratio - ratio.round()).abs() <= EDGE_TOL * ratio.max(1.0) {
        ratio.round()
    } else {
        ratio.floor()
    } as usize;

    let tol = span * EDGE_TOL;
    (0..=intervals)
        .map(|i| {
            let wavelength = start + i as f64 * resolution;
            if wavelength > end && wavelength - end <= tol {
                end
            } else {
                wavelength
            }
        })
        .collect()
}

fn evaluate(
    curve: &[f64],
    start: f64,
    end: f64,
    step: f64,
    wavelength: f64,
    kind: Interpolation,
) -> std::result::Result<f64, ResampleError> {
    if wavelength < start || wavelength > end {
        return Err(ResampleError::OutOfDomain {
            wavelength,
            start,
            end,
        });
    }

    let position = (wavelength - start) / step;
    match kind {
        Interpolation::Nearest => {
            let index = (position.round() as usize).min(curve.len() - 1);
            Ok(curve[index])
        }
        Interpolation::Linear => {
            let index = (position.floor() as usize).min(curve.len() - 2);
            let frac = position - index as f64;
            // exact knot: return the sample itself, so an absent (NaN)
            // neighbour cannot leak in and the value stays bit-exact.
            // frac == 1.0 is the end knot pushed back by the index clamp.
            if frac == 0.0 {
                return Ok(curve[index]);
            }
            if frac == 1.0 {
                return Ok(curve[index + 1]);
            }
            Ok(curve[index] + frac * (curve[index + 1] - curve[index]))
        }
    }
}
