mod error;
mod problem;
mod region;
mod simplex;
mod solution;

pub use error::SolveError;
pub use problem::{LpProblem, Objective, ResourceConstraint};
pub use region::{FeasiblePolygon, Point, RegionBuilder};
pub use simplex::Solver;
pub use solution::Solution;
