//! Elliptical neighborhoods on the pixel lattice

use crate::raster::picture::Picture;
use crate::raster::point::Point;

/// Lattice points inside an axis-aligned ellipse, in column-major order
///
/// The iterator walks the bounding box `[cx-a, cx+a] x [cy-b, cy+b]` column by
/// column and yields the points passing [`in_ellipse`]. Cloning restarts from
/// the current position.
#[derive(Debug, Clone)]
pub struct EllipseNeighborhood {
    center: Point,
    semi_axes: (u32, u32),
    y_start: i64,
    x_end: i64,
    y_end: i64,
    cursor: Option<(i64, i64)>,
}

impl EllipseNeighborhood {
    fn with_box(center: Point, semi_axes: (u32, u32), min: (i64, i64), max: (i64, i64)) -> Self {
        let cursor = (min.0 <= max.0 && min.1 <= max.1).then_some(min);
        Self {
            center,
            semi_axes,
            y_start: min.1,
            x_end: max.0,
            y_end: max.1,
            cursor,
        }
    }

    const fn advance(&mut self) {
        if let Some((i, j)) = self.cursor {
            self.cursor = if j < self.y_end {
                Some((i, j + 1))
            } else if i < self.x_end {
                Some((i + 1, self.y_start))
            } else {
                None
            };
        }
    }
}

impl Iterator for EllipseNeighborhood {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        loop {
            let (i, j) = self.cursor?;
            self.advance();
            let (Ok(x), Ok(y)) = (i32::try_from(i), i32::try_from(j)) else {
                continue;
            };
            let p = Point::new(x, y);
            if in_ellipse(p, self.center, self.semi_axes.0, self.semi_axes.1) {
                return Some(p);
            }
        }
    }
}

/// Enumerate the lattice points of the ellipse centered at `center` with semi-axes `(a, b)`
///
/// Zero semi-axes are allowed: `a = b = 0` yields only the center, and a single
/// zero axis yields a segment along the other one.
pub fn ellipse_neighborhood(center: Point, a: u32, b: u32) -> EllipseNeighborhood {
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    let (a64, b64) = (i64::from(a), i64::from(b));
    let lattice = (i64::from(i32::MIN), i64::from(i32::MAX));
    EllipseNeighborhood::with_box(
        center,
        (a, b),
        ((cx - a64).max(lattice.0), (cy - b64).max(lattice.0)),
        ((cx + a64).min(lattice.1), (cy + b64).min(lattice.1)),
    )
}

/// Same enumeration restricted to pixels of `picture`
pub fn ellipse_neighborhood_within(
    picture: &Picture,
    center: Point,
    a: u32,
    b: u32,
) -> EllipseNeighborhood {
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    let (a64, b64) = (i64::from(a), i64::from(b));
    let last_x = i64::try_from(picture.width()).unwrap_or(i64::MAX) - 1;
    let last_y = i64::try_from(picture.height()).unwrap_or(i64::MAX) - 1;
    EllipseNeighborhood::with_box(
        center,
        (a, b),
        ((cx - a64).max(0), (cy - b64).max(0)),
        ((cx + a64).min(last_x), (cy + b64).min(last_y)),
    )
}

/// Ellipse membership `(dx/a)^2 + (dy/b)^2 <= 1`, evaluated without division
///
/// Multiplying through by `a^2 b^2` keeps the test exact in integers. Points
/// outside the bounding box are rejected first, which keeps zero semi-axes
/// meaningful: `a = 0` is the vertical segment `|dy| <= b` and `a = b = 0`
/// is the center alone.
pub fn in_ellipse(p: Point, center: Point, a: u32, b: u32) -> bool {
    let dx = u128::from((i64::from(p.x) - i64::from(center.x)).unsigned_abs());
    let dy = u128::from((i64::from(p.y) - i64::from(center.y)).unsigned_abs());
    let (a, b) = (u128::from(a), u128::from(b));
    if dx > a || dy > b {
        return false;
    }

    let lhs = (dx * dx)
        .saturating_mul(b * b)
        .saturating_add((dy * dy).saturating_mul(a * a));
    lhs <= (a * a) * (b * b)
}
