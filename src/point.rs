use std::ops::{Add, Sub};

/// Represents an immutable 2-dimensional point with floating point coordinates.
///
/// In the coordinate system used by this crate, the point `(0.0, 0.0)` indicates the top-left
/// corner of the `Canvas`. The x-coordinate grows to the right and the y-coordinate grows
/// downwards, both measured in canvas units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Constructs and returns the point `(x, y)`
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Gets the `x`-coordinate of this point.
    pub fn get_x(&self) -> f32 {
        self.x
    }

    /// Gets the `y`-coordinate of this point.
    pub fn get_y(&self) -> f32 {
        self.y
    }

    /// Computes and returns the (Euclidean) distance from this point to the `other` point
    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        f32::sqrt(dx * dx + dy * dy)
    }

    /// Tests if this point is 'nearly' equal to the other point. This is convenient for unit tests
    /// because floating point numbers can have rounding errors.
    ///
    /// Currently, two points are considered nearly equal if their distance is smaller than 0.01
    pub fn nearly_equal(&self, other: Point) -> bool {
        self.distance_to(other) < 0.01
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, right: Point) -> Point {
        Point::new(self.x + right.x, self.y + right.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, right: Point) -> Point {
        Point::new(self.x - right.x, self.y - right.y)
    }
}
