use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankError {
    #[error("Alternative '{alternative}' has {found} criterion value(s), expected {expected}")]
    DimensionMismatch {
        expected: usize,
        found: usize,
        alternative: String,
    },
    #[error("Not enough data: {rows} row(s), need at least one alternative and the weight row")]
    InsufficientData { rows: usize },
    #[error("Cell at row {row}, column {column} is not a number: '{value}'")]
    InvalidValue {
        row: usize,
        column: usize,
        value: String,
    },
}
