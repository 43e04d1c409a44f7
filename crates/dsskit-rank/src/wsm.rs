use crate::error::RankError;

/// A named alternative with one value per criterion
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alternative {
    pub name: String,
    pub criteria: Vec<f64>,
}

impl Alternative {
    pub fn new(name: impl Into<String>, criteria: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            criteria,
        }
    }
}

/// One alternative's weighted-sum score, in input order
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredAlternative {
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankingResult {
    /// Scores parallel to the input alternatives
    pub scores: Vec<ScoredAlternative>,
    /// Index of the highest score; ties go to the first occurrence
    pub best: usize,
}

impl RankingResult {
    pub fn best_alternative(&self) -> &ScoredAlternative {
        &self.scores[self.best]
    }
}

/// Score every alternative by the weighted sum of its criterion values and
/// pick the argmax.
pub fn rank(weights: &[f64], alternatives: &[Alternative]) -> Result<RankingResult, RankError> {
    if alternatives.is_empty() || weights.is_empty() {
        return Err(RankError::InsufficientData {
            rows: alternatives.len(),
        });
    }

    let mut scores = Vec::with_capacity(alternatives.len());
    for alternative in alternatives {
        if alternative.criteria.len() != weights.len() {
            return Err(RankError::DimensionMismatch {
                expected: weights.len(),
                found: alternative.criteria.len(),
                alternative: alternative.name.clone(),
            });
        }

        let score: f64 = alternative
            .criteria
            .iter()
            .zip(weights)
            .map(|(value, weight)| value * weight)
            .sum();
        scores.push(ScoredAlternative {
            name: alternative.name.clone(),
            score,
        });
    }

    // Strictly-greater scan keeps the first occurrence on ties
    let mut best = 0;
    for (i, scored) in scores.iter().enumerate() {
        if scored.score > scores[best].score {
            best = i;
        }
    }

    Ok(RankingResult { scores, best })
}
