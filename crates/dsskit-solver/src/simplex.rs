use crate::error::SolveError;
use crate::problem::LpProblem;
use crate::solution::Solution;

/// Simplex solver for the two-variable maximization problem
pub struct Solver {
    /// Maximum iterations before giving up
    max_iterations: usize,
    /// Tolerance for floating point comparisons
    tolerance: f64,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            max_iterations: 10000,
            tolerance: 1e-9,
        }
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    /// Solve the problem with the two-phase simplex method.
    ///
    /// The tableau carries the maximization form directly, so the reported
    /// objective value is the true maximized c·x, never a negated internal.
    pub fn solve(&self, problem: &LpProblem) -> Result<Solution, SolveError> {
        let mut tableau = self.build_tableau(problem);

        // Phase 1: find an initial basic feasible solution
        if tableau.has_artificial {
            if !self.phase1(&mut tableau) {
                return Err(SolveError::Infeasible);
            }
        }

        // Phase 2: optimize
        match self.phase2(&mut tableau) {
            SimplexResult::Optimal => {}
            SimplexResult::Unbounded => return Err(SolveError::Unbounded),
        }

        Ok(self.extract_solution(&tableau, problem))
    }

    fn build_tableau(&self, problem: &LpProblem) -> Tableau {
        let n_vars = 2;
        let n_constraints = problem.num_constraints();
        let n_slack = n_constraints;

        // Rows with a negative bound get flipped to a non-negative RHS, which
        // turns their slack coefficient negative and forces an artificial.
        let n_artificial = problem.limits().filter(|&b| b < 0.0).count();

        let total_cols = n_vars + n_slack + n_artificial + 1; // +1 for RHS
        let total_rows = n_constraints + 1; // +1 for objective

        let mut tableau = Tableau {
            data: vec![vec![0.0; total_cols]; total_rows],
            basic_vars: vec![0; n_constraints],
            n_vars,
            n_slack,
            n_artificial,
            has_artificial: n_artificial > 0,
        };

        let mut artificial_idx = n_vars + n_slack;

        for (i, row) in problem.coefficient_rows().enumerate() {
            let constraint = &problem.constraints[i];
            let slack_idx = n_vars + i;
            let flip = constraint.limit < 0.0;
            let sign = if flip { -1.0 } else { 1.0 };

            for (j, &coef) in row.iter().enumerate() {
                tableau.data[i][j] = sign * coef;
            }
            tableau.data[i][total_cols - 1] = sign * constraint.limit;

            tableau.data[i][slack_idx] = sign;
            if flip {
                tableau.data[i][artificial_idx] = 1.0;
                tableau.basic_vars[i] = artificial_idx;
                artificial_idx += 1;
            } else {
                tableau.basic_vars[i] = slack_idx;
            }
        }

        // Objective row (last row); the pivot search looks for positive
        // reduced costs, so a maximization stores the coefficients as-is
        let obj_row = n_constraints;
        tableau.data[obj_row][0] = problem.objective.cost_a;
        tableau.data[obj_row][1] = problem.objective.cost_b;

        tableau
    }

    fn phase1(&self, tableau: &mut Tableau) -> bool {
        // Auxiliary objective: maximize -sum of artificials (= minimize sum)
        let n_constraints = tableau.data.len() - 1;
        let n_cols = tableau.data[0].len();
        let art_start = tableau.n_vars + tableau.n_slack;

        // Save original objective
        let orig_obj = tableau.data[n_constraints].clone();

        for j in 0..n_cols {
            tableau.data[n_constraints][j] = 0.0;
        }
        for j in art_start..(art_start + tableau.n_artificial) {
            tableau.data[n_constraints][j] = -1.0;
        }

        // Make the objective row consistent with the basic artificials
        for i in 0..n_constraints {
            if tableau.basic_vars[i] >= art_start {
                for j in 0..n_cols {
                    tableau.data[n_constraints][j] += tableau.data[i][j];
                }
            }
        }

        for _ in 0..self.max_iterations {
            let Some(pivot_col) = self.find_pivot_column(tableau, 0) else {
                break;
            };
            let Some(pivot_row) = self.find_pivot_row(tableau, pivot_col) else {
                // Unbounded in phase 1 means the original is infeasible
                return false;
            };
            self.pivot(tableau, pivot_row, pivot_col);
        }

        // All artificials must have left the solution
        let rhs_col = n_cols - 1;
        for i in 0..n_constraints {
            if tableau.basic_vars[i] >= art_start && tableau.data[i][rhs_col].abs() > self.tolerance
            {
                return false;
            }
        }

        // Restore the original objective and adjust for the current basis
        tableau.data[n_constraints] = orig_obj;
        for i in 0..n_constraints {
            let basic = tableau.basic_vars[i];
            let ratio = tableau.data[n_constraints][basic];
            if ratio.abs() > self.tolerance {
                for j in 0..n_cols {
                    tableau.data[n_constraints][j] -= ratio * tableau.data[i][j];
                }
            }
        }

        true
    }

    fn phase2(&self, tableau: &mut Tableau) -> SimplexResult {
        // Artificial columns are never allowed to re-enter
        let exclude_from = tableau.n_vars + tableau.n_slack;

        for _ in 0..self.max_iterations {
            let Some(pivot_col) = self.find_pivot_column(tableau, exclude_from) else {
                return SimplexResult::Optimal;
            };
            let Some(pivot_row) = self.find_pivot_row(tableau, pivot_col) else {
                return SimplexResult::Unbounded;
            };
            self.pivot(tableau, pivot_row, pivot_col);
        }
        SimplexResult::Optimal // iteration limit reached, return best found
    }

    fn find_pivot_column(&self, tableau: &Tableau, exclude_from: usize) -> Option<usize> {
        let obj_row = tableau.data.len() - 1;
        // Exclude the RHS and any columns >= exclude_from
        let n_cols = if exclude_from > 0 {
            exclude_from
        } else {
            tableau.data[0].len() - 1
        };

        // Most positive reduced cost can still improve the objective
        let mut max_val = self.tolerance;
        let mut max_col = None;

        for j in 0..n_cols {
            if tableau.data[obj_row][j] > max_val {
                max_val = tableau.data[obj_row][j];
                max_col = Some(j);
            }
        }

        max_col
    }

    fn find_pivot_row(&self, tableau: &Tableau, col: usize) -> Option<usize> {
        let n_constraints = tableau.data.len() - 1;
        let rhs_col = tableau.data[0].len() - 1;

        let mut min_ratio = f64::INFINITY;
        let mut min_row = None;

        for i in 0..n_constraints {
            let val = tableau.data[i][col];
            if val > self.tolerance {
                let ratio = tableau.data[i][rhs_col] / val;
                if ratio >= 0.0 && ratio < min_ratio {
                    min_ratio = ratio;
                    min_row = Some(i);
                }
            }
        }

        min_row
    }

    fn pivot(&self, tableau: &mut Tableau, row: usize, col: usize) {
        let n_rows = tableau.data.len();
        let n_cols = tableau.data[0].len();

        tableau.basic_vars[row] = col;

        let pivot_val = tableau.data[row][col];
        for j in 0..n_cols {
            tableau.data[row][j] /= pivot_val;
        }

        for i in 0..n_rows {
            if i != row {
                let factor = tableau.data[i][col];
                for j in 0..n_cols {
                    tableau.data[i][j] -= factor * tableau.data[row][j];
                }
            }
        }
    }

    fn extract_solution(&self, tableau: &Tableau, problem: &LpProblem) -> Solution {
        let n_constraints = problem.num_constraints();
        let rhs_col = tableau.data[0].len() - 1;

        let mut values = [0.0; 2];
        for i in 0..n_constraints {
            let basic = tableau.basic_vars[i];
            if basic < tableau.n_vars {
                values[basic] = tableau.data[i][rhs_col];
            }
        }

        let (x1, x2) = (values[0], values[1]);
        Solution {
            x1,
            x2,
            objective_value: problem.objective.value(x1, x2),
        }
    }
}

struct Tableau {
    data: Vec<Vec<f64>>,
    basic_vars: Vec<usize>,
    n_vars: usize,
    n_slack: usize,
    n_artificial: usize,
    has_artificial: bool,
}

enum SimplexResult {
    Optimal,
    Unbounded,
}
