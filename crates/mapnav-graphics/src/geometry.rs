//! Screen-space primitives: Point, Rect

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// A position or displacement in CSS pixels relative to the map container.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Length of the vector from the origin to this point.
    pub fn mag(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points.
    pub fn dist(&self, other: Point) -> f64 {
        (*self - other).mag()
    }

    /// Unit vector in the same direction, or `ZERO` for the zero vector.
    pub fn unit(&self) -> Point {
        let mag = self.mag();
        if mag == 0.0 {
            return Point::ZERO;
        }
        *self / mag
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Mean position of a set of points, or `None` when the set is empty.
    pub fn centroid<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Point> {
        let mut sum = Point::ZERO;
        let mut count = 0usize;
        for point in points {
            sum += *point;
            count += 1;
        }
        (count > 0).then(|| sum / count as f64)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Builds the axis-aligned rectangle spanned by two opposite corners,
    /// in whichever order they were given.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let min_x = a.x.min(b.x);
        let min_y = a.y.min(b.y);
        Self {
            x: min_x,
            y: min_y,
            width: a.x.max(b.x) - min_x,
            height: a.y.max(b.y) - min_y,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && y >= self.y && x <= self.x + self.width && y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_keeps_direction_and_handles_zero() {
        let unit = Point::new(3.0, 4.0).unit();
        assert!((unit.x - 0.6).abs() < 1e-12);
        assert!((unit.y - 0.8).abs() < 1e-12);
        assert_eq!(Point::ZERO.unit(), Point::ZERO);
    }

    #[test]
    fn rect_from_corners_normalizes_order() {
        let rect = Rect::from_corners(Point::new(5.0, 1.0), Point::new(2.0, 7.0));
        assert_eq!(rect.origin(), Point::new(2.0, 1.0));
        assert_eq!(rect.width, 3.0);
        assert_eq!(rect.height, 6.0);
        assert!(rect.contains(3.0, 3.0));
    }

    #[test]
    fn centroid_of_empty_set_is_none() {
        let empty: &[Point] = &[];
        assert_eq!(Point::centroid(empty), None);
        let points = [Point::new(0.0, 0.0), Point::new(4.0, 2.0)];
        assert_eq!(Point::centroid(&points), Some(Point::new(2.0, 1.0)));
    }
}
