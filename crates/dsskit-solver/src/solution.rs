use crate::region::Point;

/// The optimal vertex of a solved problem
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Optimal value of the first decision variable
    pub x1: f64,
    /// Optimal value of the second decision variable
    pub x2: f64,
    /// Maximized objective value c·x
    pub objective_value: f64,
}

impl Solution {
    /// The optimal point, for the region builder's inclusion test
    pub fn point(&self) -> Point {
        Point {
            x1: self.x1,
            x2: self.x2,
        }
    }
}
