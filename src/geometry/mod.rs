use num_traits::{Num, Signed, Float};


/// Manhattan distance between two (x, y) coordinates
/// Admissible heuristic for grids where moves are axis aligned with unit cost
pub fn manhattan_distance<T>(from: (T, T), to: (T, T)) -> T
where
    T: Num + Copy + Signed,
{
    let (dx, dy) = (from.0 - to.0, from.1 - to.1);
    dx.abs() + dy.abs()
}

/// Straight line distance between two (x, y) coordinates
/// Admissible whenever edge weights are at least the straight line length
pub fn euclidean<T>(from: (T, T), to: (T, T)) -> T
where
    T: Float,
{
    (from.0 - to.0).hypot(from.1 - to.1)
}


/// 2D Point
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight line distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        euclidean((self.x, self.y), (other.x, other.y))
    }
}
