//! Interior angle profiles along a closed outline.

use super::types::{Polyline, ProfileCfg};
use crate::error::{Result, RoiError};
use crate::geom::{angle_at, wrap_index};
use crate::table::FieldTable;

/// Interior angle at every vertex, in degrees within [0, 360).
///
/// The angle at `i` is taken between the points `window` behind and ahead
/// (wrapping). If the midpoint of those two points lies outside the outline
/// the reflex angle `360 - a` is reported instead.
pub fn angle_profile(poly: &Polyline, cfg: ProfileCfg) -> Result<Vec<f64>> {
    poly.require(3, "angle_profile")?;
    let n = poly.len();
    if cfg.window == 0 || cfg.window % n == 0 {
        return Err(RoiError::invalid(format!(
            "profile window {} unusable for {n} points",
            cfg.window
        )));
    }
    let w = cfg.window as isize;
    let pts: Vec<_> = poly.points().collect();
    let mut angles = Vec::with_capacity(n);
    for i in 0..n {
        let before = pts[wrap_index(i as isize - w, n)];
        let after = pts[wrap_index(i as isize + w, n)];
        let a = angle_at(before, pts[i], after)?;
        let mid = (before + after) / 2.0;
        angles.push(if poly.contains(mid) { a } else { 360.0 - a });
    }
    Ok(angles)
}

/// Outline plus its angle profile as a three-field table (x, y, angle).
pub fn angle_table(poly: &Polyline, cfg: ProfileCfg) -> Result<FieldTable> {
    let angles = angle_profile(poly, cfg)?;
    FieldTable::angle_roi(poly.xs(), poly.ys(), &angles)
}

/// Index of the sharpest vertex (smallest interior angle, first wins).
pub fn tip_index(profile: &[f64]) -> Option<usize> {
    profile
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &a)| match best {
            Some((_, b)) if b <= a => best,
            _ => Some((i, a)),
        })
        .map(|(i, _)| i)
}
