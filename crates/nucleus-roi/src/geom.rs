//! Point and line primitives.
//!
//! - `distance`, `angle_at`: Euclidean measures on `Point`s.
//! - `LineEq`: slope/intercept form `y = m x + c` through two points.
//! - `clip_line_to_box`: visible endpoints of a line inside an image box.
//! - `contains`, `wrap_index`: closed-outline helpers.

use crate::error::{Result, RoiError};
use crate::Point;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).norm()
}

/// Line `y = m x + c`.
///
/// Vertical lines have no such form; `through` rejects them instead of
/// producing an infinite slope.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineEq {
    pub m: f64,
    pub c: f64,
}

impl LineEq {
    /// Line through `p1` and `p2`. Fails when both share an x-coordinate.
    pub fn through(p1: Point, p2: Point) -> Result<Self> {
        let dx = p1.x - p2.x;
        if dx == 0.0 {
            return Err(RoiError::degenerate(format!(
                "vertical line through x = {}",
                p1.x
            )));
        }
        let m = (p1.y - p2.y) / dx;
        // y - y1 = m (x - x1)
        let c = p1.y - m * p1.x;
        Ok(Self { m, c })
    }

    #[inline]
    pub fn y_at(&self, x: f64) -> f64 {
        self.m * x + self.c
    }

    /// Inverse evaluation `x = (y - c) / m`; horizontal lines have no unique x.
    pub fn x_at(&self, y: f64) -> Result<f64> {
        if self.m == 0.0 {
            return Err(RoiError::degenerate(format!(
                "horizontal line y = {} has no unique x",
                self.c
            )));
        }
        Ok((y - self.c) / self.m)
    }
}

/// Endpoints of `eq` visible in the box `[0, width) x [0, height)`.
///
/// y is evaluated at `x = 0` and `x = width - 1`. An endpoint above the top
/// (`y < 0`) or below the bottom (`y > height - 1`) is re-projected onto that
/// boundary through `x_at`. Left and right bounds are implied by the x range.
pub fn clip_line_to_box(eq: &LineEq, width: f64, height: f64) -> Result<(Point, Point)> {
    if !(width >= 1.0 && height >= 1.0) {
        return Err(RoiError::invalid(format!(
            "box must be at least 1x1, got {width}x{height}"
        )));
    }
    let bottom = height - 1.0;
    let clamp_end = |x: f64| -> Result<Point> {
        let y = eq.y_at(x);
        if y < 0.0 {
            Ok(Point::new(eq.x_at(0.0)?, 0.0))
        } else if y > bottom {
            Ok(Point::new(eq.x_at(bottom)?, bottom))
        } else {
            Ok(Point::new(x, y))
        }
    };
    Ok((clamp_end(0.0)?, clamp_end(width - 1.0)?))
}

/// Angle a-b-c at vertex `b`, in degrees within [0, 180].
///
/// ```text
///   a   c
///    \ /
///     b
/// ```
pub fn angle_at(a: Point, b: Point, c: Point) -> Result<f64> {
    let u = a - b;
    let v = c - b;
    if u.norm() == 0.0 || v.norm() == 0.0 {
        return Err(RoiError::degenerate("angle arm of zero length"));
    }
    let cross = u.x * v.y - u.y * v.x;
    Ok(cross.abs().atan2(u.dot(&v)).to_degrees())
}

/// Wrap a signed offset into `0..len` (e.g. `-1` maps to `len - 1`).
///
/// Returns 0 for `len == 0`.
#[inline]
pub fn wrap_index(i: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    i.rem_euclid(len as isize) as usize
}

/// Even-odd containment of `p` in the closed outline through `verts`.
pub fn contains(verts: &[Point], p: Point) -> bool {
    let n = verts.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (verts[i], verts[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn distance_pythagoras() {
        assert!((distance(vector![0.0, 0.0], vector![3.0, 4.0]) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn line_through_and_inverse() {
        let eq = LineEq::through(vector![0.0, 1.0], vector![2.0, 5.0]).unwrap();
        assert!((eq.m - 2.0).abs() < 1e-12 && (eq.c - 1.0).abs() < 1e-12);
        assert!((eq.y_at(3.0) - 7.0).abs() < 1e-12);
        assert!((eq.x_at(7.0).unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn vertical_and_horizontal_are_degenerate() {
        let v = LineEq::through(vector![1.0, 0.0], vector![1.0, 5.0]);
        assert!(matches!(v, Err(RoiError::DegenerateGeometry(_))));
        let h = LineEq { m: 0.0, c: 2.0 };
        assert!(matches!(h.x_at(1.0), Err(RoiError::DegenerateGeometry(_))));
    }

    #[test]
    fn clip_inside_keeps_x_range() {
        let eq = LineEq { m: 0.5, c: 1.0 };
        let (a, b) = clip_line_to_box(&eq, 11.0, 100.0).unwrap();
        assert_eq!(a, vector![0.0, 1.0]);
        assert_eq!(b, vector![10.0, 6.0]);
    }

    #[test]
    fn clip_reprojects_top_and_bottom() {
        // y = 2x - 5 in a 11x11 box: y(0) = -5 (above), y(10) = 15 (below).
        let eq = LineEq { m: 2.0, c: -5.0 };
        let (a, b) = clip_line_to_box(&eq, 11.0, 11.0).unwrap();
        assert!((a.x - 2.5).abs() < 1e-12 && a.y == 0.0);
        assert!((b.x - 7.5).abs() < 1e-12 && b.y == 10.0);
    }

    #[test]
    fn clip_rejects_empty_box() {
        let eq = LineEq { m: 1.0, c: 0.0 };
        assert!(matches!(
            clip_line_to_box(&eq, 0.0, 10.0),
            Err(RoiError::InvalidInput(_))
        ));
    }

    #[test]
    fn right_angle_and_straight_line() {
        let b = vector![0.0, 0.0];
        let right = angle_at(vector![1.0, 0.0], b, vector![0.0, 1.0]).unwrap();
        assert!((right - 90.0).abs() < 1e-12);
        let straight = angle_at(vector![-1.0, 0.0], b, vector![1.0, 0.0]).unwrap();
        assert!((straight - 180.0).abs() < 1e-12);
        assert!(angle_at(b, b, vector![1.0, 0.0]).is_err());
    }

    #[test]
    fn wrap_negative_and_overflow() {
        assert_eq!(wrap_index(-1, 200), 199);
        assert_eq!(wrap_index(205, 200), 5);
        assert_eq!(wrap_index(3, 0), 0);
    }

    #[test]
    fn square_contains_centre_only() {
        let sq = [
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 4.0],
            vector![0.0, 4.0],
        ];
        assert!(contains(&sq, vector![2.0, 2.0]));
        assert!(!contains(&sq, vector![5.0, 2.0]));
        assert!(!contains(&sq[..2], vector![2.0, 0.0]));
    }
}
