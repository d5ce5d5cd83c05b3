//! Outline transforms: re-rooting, trimming, flips, translations, scaling.
//!
//! All transforms take `&self` and return a new `Polyline`.

use super::types::{Axis, Polyline};
use crate::error::{Result, RoiError};
use crate::geom::distance;
use crate::record::RecordLog;
use crate::Point;

/// Record name for the maximum y seen by `normalise`.
pub const MAX_Y_RECORD: &str = "MY";

impl Polyline {
    /// Index `i` of the largest gap between point `i` and its successor,
    /// treating the outline as closed. First maximum wins.
    pub fn discontinuity(&self) -> Result<(usize, f64)> {
        self.require(1, "discontinuity")?;
        let n = self.len();
        let mut best = (0, 0.0);
        for (i, p) in self.points().enumerate() {
            let q = self.point((i + 1) % n).unwrap_or(p);
            let d = distance(p, q);
            if d > best.1 {
                best = (i, d);
            }
        }
        Ok(best)
    }

    /// Re-root the closed outline just after its largest gap.
    ///
    /// The run after the gap is moved before the run up to it; relative order
    /// is otherwise kept. A single point is returned unchanged.
    pub fn shuffle(&self) -> Result<Polyline> {
        self.require(1, "shuffle")?;
        if self.len() == 1 {
            return Ok(self.clone());
        }
        let (i, gap) = self.discontinuity()?;
        tracing::debug!(index = i, gap, "shuffle");
        self.rotate_to_index(i + 1)
    }

    /// Cyclically move point `index` to the front. `index == len` is a no-op.
    pub fn rotate_to_index(&self, index: usize) -> Result<Polyline> {
        let n = self.len();
        if index > n {
            return Err(RoiError::IndexOutOfRange { index, len: n });
        }
        let mut xs = self.xs().to_vec();
        let mut ys = self.ys().to_vec();
        xs.rotate_left(index);
        ys.rotate_left(index);
        Polyline::new(xs, ys)
    }

    /// Keep the first `floor(n * fraction)` points, `fraction` in [0, 1].
    pub fn trim(&self, fraction: f64) -> Result<Polyline> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(RoiError::invalid(format!(
                "trim fraction {fraction} outside [0, 1]"
            )));
        }
        let keep = ((self.len() as f64) * fraction).floor() as usize;
        let keep = keep.min(self.len());
        Polyline::new(self.xs()[..keep].to_vec(), self.ys()[..keep].to_vec())
    }

    /// Reflect one axis about the midpoint of its first and last values.
    pub fn flip(&self, axis: Axis) -> Result<Polyline> {
        self.require(1, "flip")?;
        let vals = self.coords(axis);
        let mid = (vals[0] + vals[vals.len() - 1]) / 2.0;
        let flipped: Vec<f64> = vals.iter().map(|v| 2.0 * mid - v).collect();
        match axis {
            Axis::X => Polyline::new(flipped, self.ys().to_vec()),
            Axis::Y => Polyline::new(self.xs().to_vec(), flipped),
        }
    }

    /// Translate each axis by its own minimum, so `min(x) = min(y) = 0`.
    pub fn offset_to_zero(&self) -> Result<Polyline> {
        self.require(1, "offset_to_zero")?;
        let min_x = self.xs().iter().copied().fold(f64::INFINITY, f64::min);
        let min_y = self.ys().iter().copied().fold(f64::INFINITY, f64::min);
        Polyline::new(
            self.xs().iter().map(|x| x - min_x).collect(),
            self.ys().iter().map(|y| y - min_y).collect(),
        )
    }

    /// Scale x so that `max(x) == target`; y is untouched.
    ///
    /// When `log` is given, the maximum y is recorded under [`MAX_Y_RECORD`].
    pub fn normalise(&self, target: f64, log: Option<&mut RecordLog>) -> Result<Polyline> {
        self.require(1, "normalise")?;
        let max_x = self.xs().iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if max_x == 0.0 {
            return Err(RoiError::degenerate("normalise with max(x) == 0"));
        }
        if let Some(log) = log {
            let max_y = self.ys().iter().copied().fold(f64::NEG_INFINITY, f64::max);
            log.record(MAX_Y_RECORD, max_y);
        }
        Polyline::new(
            self.xs().iter().map(|x| x / max_x * target).collect(),
            self.ys().to_vec(),
        )
    }

    /// Re-sample at a fixed arc-length spacing by linear interpolation.
    ///
    /// The first point is kept; the last point is appended if the spacing
    /// does not land on it. Coincident consecutive points are skipped.
    pub fn resample(&self, interval: f64) -> Result<Polyline> {
        if !(interval > 0.0 && interval.is_finite()) {
            return Err(RoiError::invalid(format!(
                "resample interval {interval} must be positive"
            )));
        }
        self.require(1, "resample")?;
        let pts: Vec<Point> = self.points().collect();
        let mut out = vec![pts[0]];
        // arc length still to travel before the next sample
        let mut pending = interval;
        for w in pts.windows(2) {
            let (a, b) = (w[0], w[1]);
            let seg = distance(a, b);
            if seg == 0.0 {
                continue;
            }
            let mut along = 0.0;
            while seg - along >= pending {
                along += pending;
                out.push(a + (b - a) * (along / seg));
                pending = interval;
            }
            pending -= seg - along;
        }
        if let (Some(&tail), Some(&end)) = (out.last(), pts.last()) {
            if distance(tail, end) > 1e-9 {
                out.push(end);
            }
        }
        Ok(Polyline::from_points(&out))
    }
}
