//! Flat outline encoding `[n, x_0..x_{n-1}, y_0..y_{n-1}]`.
//!
//! This is the interchange layout for outlines written out by other tools;
//! inside the crate outlines travel as `Polyline`.

use super::types::Polyline;
use crate::error::{Result, RoiError};

/// Encode coordinate columns as `[n] ++ xs ++ ys`.
pub fn encode(xs: &[f64], ys: &[f64]) -> Result<Vec<f64>> {
    if xs.len() != ys.len() {
        return Err(RoiError::invalid(format!(
            "coordinate length mismatch: {} x values, {} y values",
            xs.len(),
            ys.len()
        )));
    }
    let mut flat = Vec::with_capacity(2 * xs.len() + 1);
    flat.push(xs.len() as f64);
    flat.extend_from_slice(xs);
    flat.extend_from_slice(ys);
    Ok(flat)
}

/// Point count from the header, checked against the total length `2n + 1`.
fn header(flat: &[f64]) -> Result<usize> {
    let &h = flat
        .first()
        .ok_or_else(|| RoiError::invalid("flat outline has no header"))?;
    if !(h >= 0.0 && h.fract() == 0.0 && h.is_finite()) {
        return Err(RoiError::invalid(format!(
            "flat outline header {h} is not a point count"
        )));
    }
    let n = h as usize;
    let expected = n
        .checked_mul(2)
        .and_then(|v| v.checked_add(1))
        .ok_or_else(|| RoiError::invalid(format!("flat outline header {h} is too large")))?;
    if flat.len() != expected {
        return Err(RoiError::invalid(format!(
            "flat outline of {n} points must hold {expected} values, got {}",
            flat.len()
        )));
    }
    Ok(n)
}

/// The x block of a flat outline.
pub fn decode_x(flat: &[f64]) -> Result<Vec<f64>> {
    let n = header(flat)?;
    Ok(flat[1..=n].to_vec())
}

/// The y block of a flat outline.
pub fn decode_y(flat: &[f64]) -> Result<Vec<f64>> {
    let n = header(flat)?;
    Ok(flat[n + 1..].to_vec())
}

impl Polyline {
    pub fn from_flat(flat: &[f64]) -> Result<Self> {
        Polyline::new(decode_x(flat)?, decode_y(flat)?)
    }

    pub fn to_flat(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(2 * self.len() + 1);
        flat.push(self.len() as f64);
        flat.extend_from_slice(self.xs());
        flat.extend_from_slice(self.ys());
        flat
    }
}
