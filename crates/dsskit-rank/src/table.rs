use crate::error::RankError;
use crate::wsm::{rank, Alternative, RankingResult};

/// A parsed ranking grid: the last input row holds the criterion weights,
/// every other row is an alternative, and the first column holds names.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingTable {
    pub weights: Vec<f64>,
    pub alternatives: Vec<Alternative>,
}

impl RankingTable {
    /// Parse a raw string grid (header row already stripped).
    ///
    /// The first cell of the weight row is a label and is ignored.
    pub fn from_rows(rows: &[Vec<String>]) -> Result<Self, RankError> {
        if rows.len() < 2 {
            return Err(RankError::InsufficientData { rows: rows.len() });
        }

        let weight_row = &rows[rows.len() - 1];
        if weight_row.len() < 2 {
            return Err(RankError::InsufficientData { rows: rows.len() });
        }
        let weights = parse_values(weight_row, rows.len() - 1)?;

        let mut alternatives = Vec::with_capacity(rows.len() - 1);
        for (i, row) in rows[..rows.len() - 1].iter().enumerate() {
            let name = row.first().cloned().unwrap_or_default();
            let criteria = parse_values(row, i)?;
            if criteria.len() != weights.len() {
                return Err(RankError::DimensionMismatch {
                    expected: weights.len(),
                    found: criteria.len(),
                    alternative: name,
                });
            }
            alternatives.push(Alternative { name, criteria });
        }

        Ok(Self {
            weights,
            alternatives,
        })
    }

    /// Run the ranking engine over the parsed grid
    pub fn rank(&self) -> Result<RankingResult, RankError> {
        rank(&self.weights, &self.alternatives)
    }
}

/// Parse every cell after the name column as a number
fn parse_values(row: &[String], row_index: usize) -> Result<Vec<f64>, RankError> {
    row.iter()
        .enumerate()
        .skip(1)
        .map(|(column, cell)| {
            cell.trim()
                .parse::<f64>()
                .map_err(|_| RankError::InvalidValue {
                    row: row_index,
                    column,
                    value: cell.clone(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_parses_alternatives_and_weights() {
        let rows = grid(&[
            &["Laptop", "3", "4"],
            &["Desktop", "5", "2"],
            &["Weights", "0.6", "0.4"],
        ]);
        let table = RankingTable::from_rows(&rows).unwrap();

        assert_eq!(table.weights, vec![0.6, 0.4]);
        assert_eq!(table.alternatives.len(), 2);
        assert_eq!(table.alternatives[0].name, "Laptop");
        assert_eq!(table.alternatives[1].criteria, vec![5.0, 2.0]);

        let result = table.rank().unwrap();
        assert_eq!(result.best, 1);
        assert_eq!(result.best_alternative().name, "Desktop");
    }

    #[test]
    fn test_weight_row_alone_is_insufficient() {
        let rows = grid(&[&["Weights", "0.6", "0.4"]]);
        let err = RankingTable::from_rows(&rows).unwrap_err();
        assert_eq!(err, RankError::InsufficientData { rows: 1 });
    }

    #[test]
    fn test_empty_grid_is_insufficient() {
        let err = RankingTable::from_rows(&[]).unwrap_err();
        assert_eq!(err, RankError::InsufficientData { rows: 0 });
    }

    #[test]
    fn test_ragged_row_is_a_dimension_mismatch() {
        let rows = grid(&[
            &["Laptop", "3", "4"],
            &["Desktop", "5"],
            &["Weights", "0.6", "0.4"],
        ]);
        let err = RankingTable::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            RankError::DimensionMismatch {
                expected: 2,
                found: 1,
                alternative: "Desktop".to_string(),
            }
        );
    }

    #[test]
    fn test_non_numeric_cell_is_reported_with_position() {
        let rows = grid(&[
            &["Laptop", "3", "oops"],
            &["Weights", "0.6", "0.4"],
        ]);
        let err = RankingTable::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            RankError::InvalidValue {
                row: 0,
                column: 2,
                value: "oops".to_string(),
            }
        );
    }

    #[test]
    fn test_name_only_columns_are_insufficient() {
        let rows = grid(&[&["Laptop"], &["Weights"]]);
        let err = RankingTable::from_rows(&rows).unwrap_err();
        assert!(matches!(err, RankError::InsufficientData { .. }));
    }
}
