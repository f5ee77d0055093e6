//! Integer lattice points and real-valued sample coordinates

/// Pixel lattice coordinate
///
/// `x` grows to the right (column) and `y` grows downwards (row). Coordinates
/// are signed so neighborhoods may extend past the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Point {
    /// Create a lattice point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Fractional coordinate produced by back-mapping a destination pixel
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    /// Column
    pub x: f64,
    /// Row
    pub y: f64,
}

impl PointF {
    /// Create a real-valued point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Replace components lying within `epsilon` of an integer by that integer
    pub fn snapped(self, epsilon: f64) -> Self {
        let snap = |v: f64| {
            let nearest = v.round();
            if (v - nearest).abs() <= epsilon {
                nearest
            } else {
                v
            }
        };
        Self::new(snap(self.x), snap(self.y))
    }
}

impl From<Point> for PointF {
    fn from(p: Point) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}
