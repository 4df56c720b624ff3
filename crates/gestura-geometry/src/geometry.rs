//! Geometric primitives: Point, Point3, Rect

use std::ops::{Add, AddAssign, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f32 {
        (other - *self).length()
    }

    /// Length of this point treated as a vector from the origin.
    pub fn length(&self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new(self.x * 0.5 + other.x * 0.5, self.y * 0.5 + other.y * 0.5)
    }

    /// Heading of the vector `self -> other` in degrees, measured with `atan2(dy, dx)`.
    pub fn heading_degrees_to(&self, other: Point) -> f32 {
        let delta = other - *self;
        delta.y.atan2(delta.x).to_degrees()
    }

    pub fn scale(&self, factor: f32) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A position in placement space. `z` is depth towards the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const ZERO: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl AddAssign for Point3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

/// Axis-aligned rectangle in screen space, origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A rectangle with a finite origin and strictly positive finite extent.
    ///
    /// Only such rectangles can be used as a normalization basis.
    pub fn is_usable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Maps `point` into the symmetric `[-1, 1]` range spanned by this rectangle.
    ///
    /// `x` grows to the right, `y` grows upwards (screen `y` is flipped). Points
    /// outside the rectangle map outside the range.
    pub fn normalize(&self, point: Point) -> Point {
        let nx = ((point.x - self.left) / self.width - 0.5) * 2.0;
        let ny = -((point.y - self.top) / self.height - 0.5) * 2.0;
        Point::new(nx, ny)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_and_midpoint() {
        let a = Point::new(100.0, 100.0);
        let b = Point::new(200.0, 100.0);
        assert_eq!(a.distance_to(b), 100.0);
        assert_eq!(a.midpoint(b), Point::new(150.0, 100.0));
    }

    #[test]
    fn midpoint_of_extreme_points_stays_finite() {
        let mid = Point::new(3.0e38, 0.0).midpoint(Point::new(3.0e38, 10.0));
        assert!(mid.is_finite());
        assert_eq!(mid, Point::new(3.0e38, 5.0));
    }

    #[test]
    fn heading_follows_atan2() {
        let origin = Point::ZERO;
        assert_eq!(origin.heading_degrees_to(Point::new(1.0, 0.0)), 0.0);
        assert!((origin.heading_degrees_to(Point::new(0.0, 1.0)) - 90.0).abs() < 1e-4);
        assert!((origin.heading_degrees_to(Point::new(-1.0, 0.0)) - 180.0).abs() < 1e-4);
    }

    #[test]
    fn normalize_maps_corners_and_center() {
        let rect = Rect::new(10.0, 20.0, 200.0, 100.0);
        assert_eq!(rect.normalize(Point::new(110.0, 70.0)), Point::new(0.0, 0.0));
        assert_eq!(rect.normalize(Point::new(10.0, 20.0)), Point::new(-1.0, 1.0));
        assert_eq!(rect.normalize(Point::new(210.0, 120.0)), Point::new(1.0, -1.0));
    }

    #[test]
    fn degenerate_rect_is_not_usable() {
        assert!(Rect::new(0.0, 0.0, 100.0, 50.0).is_usable());
        assert!(!Rect::new(0.0, 0.0, 0.0, 50.0).is_usable());
        assert!(!Rect::new(0.0, 0.0, 100.0, -1.0).is_usable());
        assert!(!Rect::new(f32::NAN, 0.0, 100.0, 50.0).is_usable());
    }

    #[test]
    fn point3_add_assign() {
        let mut p = Point3::new(1.0, 2.0, 3.0);
        p += Point3::new(0.5, -2.0, 0.0);
        assert_eq!(p, Point3::new(1.5, 0.0, 3.0));
    }
}
