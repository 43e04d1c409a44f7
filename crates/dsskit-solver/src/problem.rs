use crate::error::SolveError;

/// A named resource constraint of the form
/// `coefficient_a * x1 + coefficient_b * x2 <= limit`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceConstraint {
    /// Name/label for the constraint (for diagnostics)
    pub name: String,
    /// Units of the resource consumed per unit of the first decision variable
    pub coefficient_a: f64,
    /// Units of the resource consumed per unit of the second decision variable
    pub coefficient_b: f64,
    /// Available amount of the resource
    pub limit: f64,
}

impl ResourceConstraint {
    pub fn new(
        name: impl Into<String>,
        coefficient_a: f64,
        coefficient_b: f64,
        limit: f64,
    ) -> Result<Self, SolveError> {
        let constraint = Self {
            name: name.into(),
            coefficient_a,
            coefficient_b,
            limit,
        };
        constraint.validate()?;
        Ok(constraint)
    }

    pub fn validate(&self) -> Result<(), SolveError> {
        let invalid = |reason: &str| SolveError::InvalidConstraint {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if !self.coefficient_a.is_finite() || !self.coefficient_b.is_finite() {
            return Err(invalid("coefficients must be finite"));
        }
        if self.coefficient_a < 0.0 || self.coefficient_b < 0.0 {
            return Err(invalid("coefficients must be non-negative"));
        }
        if !self.limit.is_finite() {
            return Err(invalid("limit must be finite"));
        }
        if self.limit < 0.0 {
            return Err(invalid("limit must be non-negative"));
        }
        Ok(())
    }

    /// Resource usage at the point (x1, x2)
    pub fn usage(&self, x1: f64, x2: f64) -> f64 {
        self.coefficient_a * x1 + self.coefficient_b * x2
    }

    pub fn is_satisfied(&self, x1: f64, x2: f64, tolerance: f64) -> bool {
        self.usage(x1, x2) <= self.limit + tolerance
    }
}

/// Per-unit contribution of each decision variable to the maximized quantity
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objective {
    pub cost_a: f64,
    pub cost_b: f64,
}

impl Objective {
    pub fn new(cost_a: f64, cost_b: f64) -> Self {
        Self { cost_a, cost_b }
    }

    /// Objective value at the point (x1, x2)
    pub fn value(&self, x1: f64, x2: f64) -> f64 {
        self.cost_a * x1 + self.cost_b * x2
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.cost_a, self.cost_b]
    }
}

/// A two-variable profit-maximization problem:
/// maximize c·x subject to A·x <= b and x >= 0.
///
/// Immutable in the solve path; built once per request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LpProblem {
    /// Resource constraints (rows of A and entries of b)
    pub constraints: Vec<ResourceConstraint>,
    /// Objective coefficients (c), maximized
    pub objective: Objective,
}

impl LpProblem {
    pub fn new(
        constraints: Vec<ResourceConstraint>,
        objective: Objective,
    ) -> Result<Self, SolveError> {
        let problem = Self {
            constraints,
            objective,
        };
        problem.validate()?;
        Ok(problem)
    }

    pub fn validate(&self) -> Result<(), SolveError> {
        for constraint in &self.constraints {
            constraint.validate()?;
        }
        if !self.objective.cost_a.is_finite() || !self.objective.cost_b.is_finite() {
            return Err(SolveError::InvalidConstraint {
                name: "objective".to_string(),
                reason: "objective coefficients must be finite".to_string(),
            });
        }
        Ok(())
    }

    /// Rows of the constraint coefficient matrix A
    pub fn coefficient_rows(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.constraints
            .iter()
            .map(|c| [c.coefficient_a, c.coefficient_b])
    }

    /// The bound vector b
    pub fn limits(&self) -> impl Iterator<Item = f64> + '_ {
        self.constraints.iter().map(|c| c.limit)
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// True when (x1, x2) satisfies every constraint and non-negativity
    pub fn is_feasible(&self, x1: f64, x2: f64, tolerance: f64) -> bool {
        x1 >= -tolerance
            && x2 >= -tolerance
            && self
                .constraints
                .iter()
                .all(|c| c.is_satisfied(x1, x2, tolerance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative_limit() {
        let err = ResourceConstraint::new("Plastic", 0.065, 0.05, -41.0).unwrap_err();
        assert!(matches!(err, SolveError::InvalidConstraint { .. }));
    }

    #[test]
    fn test_rejects_non_finite_coefficient() {
        let err = ResourceConstraint::new("Wire", f64::NAN, 0.087, 45.0).unwrap_err();
        assert!(matches!(err, SolveError::InvalidConstraint { .. }));

        let err = ResourceConstraint::new("Wire", 0.045, f64::INFINITY, 45.0).unwrap_err();
        assert!(matches!(err, SolveError::InvalidConstraint { .. }));
    }

    #[test]
    fn test_accepts_well_formed_problem() {
        let problem = LpProblem::new(
            vec![
                ResourceConstraint::new("Plastic", 0.065, 0.05, 41.0).unwrap(),
                ResourceConstraint::new("Wire", 0.045, 0.087, 45.0).unwrap(),
                ResourceConstraint::new("Paint", 0.068, 0.035, 39.0).unwrap(),
            ],
            Objective::new(430.0, 680.0),
        )
        .unwrap();

        assert_eq!(problem.num_constraints(), 3);
        let rows: Vec<[f64; 2]> = problem.coefficient_rows().collect();
        assert_eq!(rows[1], [0.045, 0.087]);
        let limits: Vec<f64> = problem.limits().collect();
        assert_eq!(limits, vec![41.0, 45.0, 39.0]);
    }

    #[test]
    fn test_feasibility_check_uses_tolerance() {
        let constraint = ResourceConstraint::new("Paint", 1.0, 1.0, 10.0).unwrap();
        assert!(constraint.is_satisfied(5.0, 5.0 + 1e-9, 1e-7));
        assert!(!constraint.is_satisfied(5.0, 6.0, 1e-7));
    }
}
