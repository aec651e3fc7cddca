use std::fmt;

/// A point of the projection plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianCoordinates {
    x: f64,
    y: f64,
}

impl CartesianCoordinates {
    pub fn of(x: f64, y: f64) -> Self {
        CartesianCoordinates { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance in the plane.
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.x - x).hypot(self.y - y)
    }
}

impl fmt::Display for CartesianCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x = {:.6}, y = {:.6})", self.x, self.y)
    }
}
