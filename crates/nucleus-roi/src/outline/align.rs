//! Rotational alignment of an outline's end points.
//!
//! Brute-force search over whole-degree rotations for the one that brings the
//! first and last points closest together along an axis. Each trial rotates
//! the untouched input, never the previous trial, so rounding cannot build up.

use super::types::{AlignCfg, Axis, Polyline};
use crate::error::{Result, RoiError};
use crate::host::Rotator;

/// Outcome of an alignment search.
#[derive(Clone, Debug, PartialEq)]
pub struct Alignment {
    /// The outline rotated by `angle_deg` (the input itself if 0).
    pub polyline: Polyline,
    /// Winning rotation in degrees; 0 when no trial beat the input.
    pub angle_deg: f64,
    /// `|first - last|` along the searched axis after rotation.
    pub separation: f64,
}

fn end_separation(poly: &Polyline, axis: Axis) -> f64 {
    let vals = poly.coords(axis);
    match (vals.first(), vals.last()) {
        (Some(a), Some(b)) => (a - b).abs(),
        _ => f64::INFINITY,
    }
}

/// Rotate `poly` so its end points are as close as possible on `axis`.
///
/// The unrotated input is the baseline; a trial angle wins only by strictly
/// improving on the best separation so far (first improvement wins ties).
pub fn align_on_axis<R: Rotator + ?Sized>(
    poly: &Polyline,
    axis: Axis,
    rotator: &R,
    cfg: AlignCfg,
) -> Result<Alignment> {
    poly.require(1, "align_on_axis")?;
    if cfg.step_deg == 0 {
        return Err(RoiError::invalid("alignment step must be at least 1 degree"));
    }
    let mut best = Alignment {
        polyline: poly.clone(),
        angle_deg: 0.0,
        separation: end_separation(poly, axis),
    };
    let trials = (cfg.first_deg..=cfg.last_deg).step_by(cfg.step_deg as usize);
    for deg in trials {
        let rotated = rotator.rotate(poly, f64::from(deg));
        let sep = end_separation(&rotated, axis);
        if sep < best.separation {
            best = Alignment {
                polyline: rotated,
                angle_deg: f64::from(deg),
                separation: sep,
            };
        }
    }
    tracing::debug!(%axis, angle = best.angle_deg, separation = best.separation, "aligned");
    Ok(best)
}

/// Align so the end points share an x-coordinate (outline stands upright).
pub fn align_on_axis_x<R: Rotator + ?Sized>(poly: &Polyline, rotator: &R) -> Result<Alignment> {
    align_on_axis(poly, Axis::X, rotator, AlignCfg::default())
}

/// Align so the end points share a y-coordinate (outline lies flat).
pub fn align_on_axis_y<R: Rotator + ?Sized>(poly: &Polyline, rotator: &R) -> Result<Alignment> {
    align_on_axis(poly, Axis::Y, rotator, AlignCfg::default())
}
