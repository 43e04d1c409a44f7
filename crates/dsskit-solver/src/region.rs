use crate::error::SolveError;
use crate::problem::{LpProblem, ResourceConstraint};

/// A point in the decision-variable plane
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x1: f64,
    pub x2: f64,
}

/// The convex boundary of the feasible region, counter-clockwise.
///
/// Built once per solve from the problem alone; never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeasiblePolygon {
    vertices: Vec<Point>,
}

impl FeasiblePolygon {
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// True when the point lies inside or on the boundary.
    ///
    /// Every edge of a counter-clockwise convex polygon must see the point on
    /// its left side.
    pub fn contains(&self, point: Point, tolerance: f64) -> bool {
        let n = self.vertices.len();
        (0..n).all(|i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            cross(a, b, point) >= -tolerance
        })
    }
}

/// Builds the feasible polygon from pairwise constraint-line intersections
/// and axis intercepts
pub struct RegionBuilder {
    /// Tolerance for feasibility filtering and point deduplication
    tolerance: f64,
}

impl Default for RegionBuilder {
    fn default() -> Self {
        Self { tolerance: 1e-7 }
    }
}

impl RegionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    pub fn build(&self, problem: &LpProblem) -> Result<FeasiblePolygon, SolveError> {
        let constraints = &problem.constraints;
        let mut candidates: Vec<Point> = Vec::new();

        // Pairwise constraint-line intersections; a singular 2x2 system means
        // parallel lines and just excludes that pair
        for i in 0..constraints.len() {
            for j in (i + 1)..constraints.len() {
                if let Some(p) = line_intersection(&constraints[i], &constraints[j]) {
                    candidates.push(p);
                }
            }
        }

        // Axis-bound candidates: the origin and the tightest intercept on
        // each axis. A zero coefficient yields a non-finite quotient and
        // drops out of the minimum.
        candidates.push(Point { x1: 0.0, x2: 0.0 });
        let x2_cap = constraints
            .iter()
            .map(|c| c.limit / c.coefficient_b)
            .filter(|v| v.is_finite())
            .fold(f64::INFINITY, f64::min);
        if x2_cap.is_finite() {
            candidates.push(Point { x1: 0.0, x2: x2_cap });
        }
        let x1_cap = constraints
            .iter()
            .map(|c| c.limit / c.coefficient_a)
            .filter(|v| v.is_finite())
            .fold(f64::INFINITY, f64::min);
        if x1_cap.is_finite() {
            candidates.push(Point { x1: x1_cap, x2: 0.0 });
        }

        // An intersection of two constraint lines can violate the third;
        // without this filter the polygon picks up infeasible vertices
        candidates.retain(|p| problem.is_feasible(p.x1, p.x2, self.tolerance));

        // Coincident candidates (e.g. an intersection lying on an axis)
        // would break the hull ordering
        dedup_points(&mut candidates, self.tolerance);

        if candidates.len() < 3 {
            return Err(SolveError::DegenerateRegion {
                points: candidates.len(),
            });
        }

        let vertices = convex_hull(candidates);
        if vertices.len() < 3 {
            return Err(SolveError::DegenerateRegion {
                points: vertices.len(),
            });
        }

        Ok(FeasiblePolygon { vertices })
    }
}

/// Intersection of two constraint lines by Cramer's rule; None when the
/// 2x2 system is singular (parallel lines)
fn line_intersection(a: &ResourceConstraint, b: &ResourceConstraint) -> Option<Point> {
    let det = a.coefficient_a * b.coefficient_b - a.coefficient_b * b.coefficient_a;
    if det.abs() < 1e-12 {
        return None;
    }
    Some(Point {
        x1: (a.limit * b.coefficient_b - a.coefficient_b * b.limit) / det,
        x2: (a.coefficient_a * b.limit - a.limit * b.coefficient_a) / det,
    })
}

fn dedup_points(points: &mut Vec<Point>, tolerance: f64) {
    let mut kept: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points.iter() {
        let duplicate = kept
            .iter()
            .any(|q| (p.x1 - q.x1).abs() <= tolerance && (p.x2 - q.x2).abs() <= tolerance);
        if !duplicate {
            kept.push(p);
        }
    }
    *points = kept;
}

/// Cross product of (a - o) and (b - o); positive when o->a->b turns left
fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x1 - o.x1) * (b.x2 - o.x2) - (a.x2 - o.x2) * (b.x1 - o.x1)
}

/// Andrew's monotone chain; returns the hull counter-clockwise
fn convex_hull(mut points: Vec<Point>) -> Vec<Point> {
    points.sort_by(|a, b| a.x1.total_cmp(&b.x1).then(a.x2.total_cmp(&b.x2)));

    let mut lower: Vec<Point> = Vec::with_capacity(points.len());
    for &p in &points {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{LpProblem, Objective, ResourceConstraint};
    use crate::simplex::Solver;

    fn production_problem() -> LpProblem {
        LpProblem::new(
            vec![
                ResourceConstraint::new("Plastic", 0.065, 0.05, 41.0).unwrap(),
                ResourceConstraint::new("Wire", 0.045, 0.087, 45.0).unwrap(),
                ResourceConstraint::new("Paint", 0.068, 0.035, 39.0).unwrap(),
            ],
            Objective::new(430.0, 680.0),
        )
        .unwrap()
    }

    fn assert_convex_ccw(polygon: &FeasiblePolygon) {
        let v = polygon.vertices();
        let n = v.len();
        for i in 0..n {
            let turn = cross(v[i], v[(i + 1) % n], v[(i + 2) % n]);
            assert!(turn > 0.0, "clockwise or collinear turn at vertex {}: {}", i, turn);
        }
    }

    #[test]
    fn test_production_region() {
        let problem = production_problem();
        let polygon = RegionBuilder::new().build(&problem).unwrap();

        // Origin, both axis intercepts, Plastic/Paint, Plastic/Wire;
        // the Wire/Paint intersection violates the Plastic bound
        assert_eq!(polygon.num_vertices(), 5);
        assert_convex_ccw(&polygon);

        for p in polygon.vertices() {
            assert!(
                problem.is_feasible(p.x1, p.x2, 1e-6),
                "infeasible vertex ({}, {})",
                p.x1,
                p.x2
            );
        }
    }

    #[test]
    fn test_infeasible_intersections_are_filtered() {
        let problem = production_problem();
        let polygon = RegionBuilder::new().build(&problem).unwrap();

        // Wire/Paint intersect at roughly (418.8, 300.6), outside Plastic
        let excluded =
            line_intersection(&problem.constraints[1], &problem.constraints[2]).unwrap();
        assert!(!problem.is_feasible(excluded.x1, excluded.x2, 1e-6));
        assert!(polygon
            .vertices()
            .iter()
            .all(|p| (p.x1 - excluded.x1).abs() > 1e-3 || (p.x2 - excluded.x2).abs() > 1e-3));
    }

    #[test]
    fn test_polygon_contains_the_optimum() {
        let problem = production_problem();
        let solution = Solver::new().solve(&problem).unwrap();
        let polygon = RegionBuilder::new().build(&problem).unwrap();

        assert!(polygon.contains(solution.point(), 1e-6));
        assert!(!polygon.contains(Point { x1: 1000.0, x2: 1000.0 }, 1e-6));
    }

    #[test]
    fn test_parallel_lines_are_skipped() {
        // Two parallel constraints: their pair contributes no candidate but
        // the build still succeeds
        let problem = LpProblem::new(
            vec![
                ResourceConstraint::new("near", 1.0, 1.0, 10.0).unwrap(),
                ResourceConstraint::new("far", 2.0, 2.0, 30.0).unwrap(),
                ResourceConstraint::new("cap", 1.0, 0.0, 8.0).unwrap(),
            ],
            Objective::new(1.0, 1.0),
        )
        .unwrap();

        let polygon = RegionBuilder::new().build(&problem).unwrap();
        assert_convex_ccw(&polygon);
        for p in polygon.vertices() {
            assert!(problem.is_feasible(p.x1, p.x2, 1e-6));
        }
    }

    #[test]
    fn test_degenerate_region() {
        // Zero limits collapse the region to the origin
        let problem = LpProblem::new(
            vec![
                ResourceConstraint::new("a", 1.0, 1.0, 0.0).unwrap(),
                ResourceConstraint::new("b", 1.0, 2.0, 0.0).unwrap(),
                ResourceConstraint::new("c", 2.0, 1.0, 0.0).unwrap(),
            ],
            Objective::new(1.0, 1.0),
        )
        .unwrap();

        let err = RegionBuilder::new().build(&problem).unwrap_err();
        assert!(matches!(err, SolveError::DegenerateRegion { .. }));
    }

    #[test]
    fn test_duplicate_candidates_are_merged() {
        // Both constraint lines meet exactly on the x1 axis, so the
        // intersection coincides with the axis intercept
        let problem = LpProblem::new(
            vec![
                ResourceConstraint::new("a", 1.0, 1.0, 4.0).unwrap(),
                ResourceConstraint::new("b", 1.0, 2.0, 4.0).unwrap(),
            ],
            Objective::new(1.0, 1.0),
        )
        .unwrap();

        let polygon = RegionBuilder::new().build(&problem).unwrap();
        let v = polygon.vertices();
        for i in 0..v.len() {
            for j in (i + 1)..v.len() {
                assert!(
                    (v[i].x1 - v[j].x1).abs() > 1e-7 || (v[i].x2 - v[j].x2).abs() > 1e-7,
                    "duplicate hull vertex"
                );
            }
        }
        assert_convex_ccw(&polygon);
    }
}
