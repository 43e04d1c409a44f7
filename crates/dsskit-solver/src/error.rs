use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("Invalid constraint '{name}': {reason}")]
    InvalidConstraint { name: String, reason: String },
    #[error("No point satisfies all constraints and non-negativity")]
    Infeasible,
    #[error("The objective is unbounded over the feasible region")]
    Unbounded,
    #[error("Feasible region is degenerate: only {points} candidate point(s) survive")]
    DegenerateRegion { points: usize },
}
