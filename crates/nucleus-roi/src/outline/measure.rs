//! Length, area, centroid and containment of outlines.

use super::types::Polyline;
use crate::error::Result;
use crate::geom::{self, distance};
use crate::Point;

impl Polyline {
    /// Path length of the open polyline.
    pub fn length(&self) -> f64 {
        self.points()
            .zip(self.points().skip(1))
            .map(|(a, b)| distance(a, b))
            .sum()
    }

    /// Signed shoelace area of the closed outline (positive counterclockwise).
    pub fn signed_area(&self) -> f64 {
        let n = self.len();
        let mut a = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            a += self.xs()[i] * self.ys()[j] - self.xs()[j] * self.ys()[i];
        }
        0.5 * a
    }

    /// Area centroid; vertex mean when the enclosed area vanishes.
    pub fn centroid(&self) -> Result<Point> {
        self.require(1, "centroid")?;
        let n = self.len();
        let a = self.signed_area();
        if a.abs() < 1e-12 {
            let sum = self.points().fold(Point::zeros(), |acc, p| acc + p);
            return Ok(sum / n as f64);
        }
        let (mut cx, mut cy) = (0.0, 0.0);
        for i in 0..n {
            let j = (i + 1) % n;
            let p = Point::new(self.xs()[i], self.ys()[i]);
            let q = Point::new(self.xs()[j], self.ys()[j]);
            let cross = p.x * q.y - q.x * p.y;
            cx += (p.x + q.x) * cross;
            cy += (p.y + q.y) * cross;
        }
        Ok(Point::new(cx / (6.0 * a), cy / (6.0 * a)))
    }

    /// Whether `p` lies inside the closed outline (even-odd rule).
    pub fn contains(&self, p: Point) -> bool {
        let verts: Vec<Point> = self.points().collect();
        geom::contains(&verts, p)
    }
}
