//! Outline types and search configuration.
//!
//! - `Polyline`: ordered points kept as two coordinate columns of equal length.
//! - `Axis`: coordinate selector for flips and alignment.
//! - `AlignCfg`, `ProfileCfg`: knobs for the rotation search and angle profiles.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RoiError};
use crate::Point;

/// Ordered sequence of 2D points.
///
/// Invariant: `xs.len() == ys.len()`. Transforms never mutate in place; each
/// returns a fresh `Polyline`. An empty polyline is representable (e.g. a
/// trim to zero) but most operations reject it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Polyline {
    /// Build from coordinate columns. Fails if the lengths differ.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(RoiError::invalid(format!(
                "coordinate length mismatch: {} x values, {} y values",
                xs.len(),
                ys.len()
            )));
        }
        Ok(Self { xs, ys })
    }

    pub fn from_points(points: &[Point]) -> Self {
        Self {
            xs: points.iter().map(|p| p.x).collect(),
            ys: points.iter().map(|p| p.y).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    #[inline]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[inline]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Split into coordinate columns.
    pub fn into_columns(self) -> (Vec<f64>, Vec<f64>) {
        (self.xs, self.ys)
    }

    /// Point at `i`, if any.
    #[inline]
    pub fn point(&self, i: usize) -> Option<Point> {
        Some(Point::new(*self.xs.get(i)?, *self.ys.get(i)?))
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .map(|(&x, &y)| Point::new(x, y))
    }

    pub fn first(&self) -> Option<Point> {
        self.point(0)
    }

    pub fn last(&self) -> Option<Point> {
        self.point(self.len().checked_sub(1)?)
    }

    /// Coordinates on one axis.
    #[inline]
    pub fn coords(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.xs,
            Axis::Y => &self.ys,
        }
    }

    /// Exchange the x and y columns.
    pub fn swap_axes(&self) -> Polyline {
        Polyline {
            xs: self.ys.clone(),
            ys: self.xs.clone(),
        }
    }

    /// Error unless at least `min` points are present.
    pub(crate) fn require(&self, min: usize, op: &str) -> Result<()> {
        if self.len() < min {
            return Err(RoiError::invalid(format!(
                "{op} needs at least {min} point(s), got {}",
                self.len()
            )));
        }
        Ok(())
    }
}

/// Coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    pub fn of(self, p: Point) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }
}

impl FromStr for Axis {
    type Err = RoiError;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            other => Err(RoiError::invalid(format!("unknown axis {other:?}"))),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}

/// Angular range for the brute-force alignment search (whole degrees).
#[derive(Clone, Copy, Debug)]
pub struct AlignCfg {
    pub first_deg: u32,
    pub last_deg: u32,
    pub step_deg: u32,
}

impl Default for AlignCfg {
    fn default() -> Self {
        Self {
            first_deg: 1,
            last_deg: 179,
            step_deg: 1,
        }
    }
}

/// Angle profile settings: how many points ahead and behind form each angle.
#[derive(Clone, Copy, Debug)]
pub struct ProfileCfg {
    pub window: usize,
}

impl Default for ProfileCfg {
    fn default() -> Self {
        Self { window: 23 }
    }
}
