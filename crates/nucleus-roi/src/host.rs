//! Capabilities normally provided by the imaging host.
//!
//! The alignment search, area queries and outline display go through these
//! traits so the geometry runs headless. The default implementations compute
//! everything locally.

use nalgebra::Rotation2;

use crate::error::{Result, RoiError};
use crate::outline::Polyline;
use crate::Point;

/// Rigid rotation of a whole outline by an angle in degrees.
pub trait Rotator {
    fn rotate(&self, poly: &Polyline, degrees: f64) -> Polyline;
}

/// Rotation about the centre of the outline's bounding box, which is how a
/// selection is rotated on screen.
#[derive(Clone, Copy, Debug, Default)]
pub struct CentreRotator;

/// Rotation about the image origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct OriginRotator;

fn rotate_about(poly: &Polyline, centre: Point, degrees: f64) -> Polyline {
    let rot = Rotation2::new(degrees.to_radians());
    let pts: Vec<Point> = poly.points().map(|p| centre + rot * (p - centre)).collect();
    Polyline::from_points(&pts)
}

impl Rotator for CentreRotator {
    fn rotate(&self, poly: &Polyline, degrees: f64) -> Polyline {
        match bounds_centre(poly) {
            Some(c) => rotate_about(poly, c, degrees),
            None => poly.clone(),
        }
    }
}

impl Rotator for OriginRotator {
    fn rotate(&self, poly: &Polyline, degrees: f64) -> Polyline {
        rotate_about(poly, Point::zeros(), degrees)
    }
}

fn bounds_centre(poly: &Polyline) -> Option<Point> {
    if poly.is_empty() {
        return None;
    }
    let (mut lo, mut hi) = (Point::repeat(f64::INFINITY), Point::repeat(f64::NEG_INFINITY));
    for p in poly.points() {
        lo = lo.inf(&p);
        hi = hi.sup(&p);
    }
    Some((lo + hi) / 2.0)
}

/// Enclosed area of a closed outline.
pub trait AreaMeter {
    fn area(&self, poly: &Polyline) -> Result<f64>;
}

/// Absolute shoelace area; the outline is closed from last point to first.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShoelaceArea;

impl AreaMeter for ShoelaceArea {
    fn area(&self, poly: &Polyline) -> Result<f64> {
        if poly.len() < 3 {
            return Err(RoiError::invalid(format!(
                "area needs at least 3 points, got {}",
                poly.len()
            )));
        }
        Ok(poly.signed_area().abs())
    }
}

/// How an outline is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// Open freehand line.
    Freeline,
    /// Open segmented line.
    Polyline,
    /// Closed polygon.
    Polygon,
}

/// Display surface and persistent selection list.
pub trait SelectionSink {
    /// Make `poly` the current selection.
    fn show(&mut self, poly: &Polyline, style: Style);

    /// Keep `poly` in the selection list.
    fn add(&mut self, poly: &Polyline, style: Style);

    /// Keep a one-pixel re-sampled copy of `poly`.
    fn add_smooth(&mut self, poly: &Polyline, style: Style) -> Result<()> {
        let smooth = poly.resample(1.0)?;
        self.add(&smooth, style);
        Ok(())
    }
}

/// In-memory selection sink.
#[derive(Clone, Debug, Default)]
pub struct SelectionList {
    pub current: Option<(Style, Polyline)>,
    pub entries: Vec<(Style, Polyline)>,
}

impl SelectionSink for SelectionList {
    fn show(&mut self, poly: &Polyline, style: Style) {
        self.current = Some((style, poly.clone()));
    }

    fn add(&mut self, poly: &Polyline, style: Style) {
        self.show(poly, style);
        self.entries.push((style, poly.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polyline {
        Polyline::new(vec![0.0, 2.0, 2.0, 0.0], vec![0.0, 0.0, 2.0, 2.0]).unwrap()
    }

    #[test]
    fn centre_rotation_keeps_bounds_centre() {
        let sq = square();
        let r = CentreRotator.rotate(&sq, 90.0);
        let c = bounds_centre(&r).unwrap();
        assert!((c - Point::new(1.0, 1.0)).norm() < 1e-12);
        // (0,0) -> (2,0) for a quarter turn about (1,1).
        assert!((r.point(0).unwrap() - Point::new(2.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn origin_rotation_half_turn() {
        let r = OriginRotator.rotate(&square(), 180.0);
        assert!((r.point(2).unwrap() - Point::new(-2.0, -2.0)).norm() < 1e-12);
    }

    #[test]
    fn shoelace_square_either_orientation() {
        let sq = square();
        assert!((ShoelaceArea.area(&sq).unwrap() - 4.0).abs() < 1e-12);
        let rev = sq.flip(crate::Axis::X).unwrap();
        assert!((ShoelaceArea.area(&rev).unwrap() - 4.0).abs() < 1e-12);
        let line = Polyline::new(vec![0.0, 1.0], vec![0.0, 1.0]).unwrap();
        assert!(ShoelaceArea.area(&line).is_err());
    }

    #[test]
    fn selection_list_records_entries() {
        let mut sel = SelectionList::default();
        sel.show(&square(), Style::Polygon);
        assert!(sel.entries.is_empty());
        sel.add(&square(), Style::Freeline);
        sel.add_smooth(&square(), Style::Freeline).unwrap();
        assert_eq!(sel.entries.len(), 2);
        // Three unit-spaced sides of length 2 give 7 samples.
        assert_eq!(sel.entries[1].1.len(), 7);
        assert_eq!(sel.current.as_ref().map(|c| c.0), Some(Style::Freeline));
    }
}
