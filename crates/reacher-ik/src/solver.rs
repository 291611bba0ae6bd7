//! Closed-form two-link IK solver.
//!
//! Uses the law of cosines for the elbow angle and a two-argument arctangent
//! for the shoulder angle. Both elbow branches are computed; the one that
//! moves the shoulder least relative to its previous angle is selected.

use std::f64::consts::PI;

use nalgebra::Vector2;

use reacher_core::{ArmConfig, ElbowBranch, IkError, JointAngles, Point2D};

/// Configuration for the analytic solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Slack allowed on the law-of-cosines ratio beyond `[-1, 1]`.
    /// Ratios within the slack are clamped; anything further out is
    /// [`IkError::InvalidGeometry`].
    pub cos_tolerance: f64,
    /// Branch used when there is no previous shoulder angle to compare with.
    pub default_branch: ElbowBranch,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            cos_tolerance: 1e-6,
            default_branch: ElbowBranch::Up,
        }
    }
}

/// Result of an IK solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IkSolution {
    /// Selected joint angles.
    pub angles: JointAngles,
    /// Branch the angles belong to.
    pub branch: ElbowBranch,
}

/// Both mirror-image solutions for one target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IkCandidates {
    /// Positive elbow root.
    pub up: JointAngles,
    /// Negative elbow root.
    pub down: JointAngles,
}

impl IkCandidates {
    pub const fn get(&self, branch: ElbowBranch) -> JointAngles {
        match branch {
            ElbowBranch::Up => self.up,
            ElbowBranch::Down => self.down,
        }
    }
}

/// Analytic solver for a planar revolute-revolute arm.
#[derive(Debug, Clone, Default)]
pub struct TwoLinkSolver {
    config: SolverConfig,
}

impl TwoLinkSolver {
    /// Create a new solver with the given configuration.
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve for the joint angles that put the end effector on `target`.
    ///
    /// `previous_angle1` is the arm's shoulder angle before this solve; pass
    /// `None` on the very first solve to get the configured default branch.
    ///
    /// # Errors
    ///
    /// [`IkError::Unreachable`] if the target lies outside the closed annulus
    /// `[|L1 - L2|, L1 + L2]`, [`IkError::InvalidGeometry`] if the inputs
    /// produce a law-of-cosines ratio that cannot be clamped (e.g. NaN
    /// coordinates).
    pub fn solve(
        &self,
        pivot: &Point2D,
        target: &Point2D,
        arm: &ArmConfig,
        previous_angle1: Option<f64>,
    ) -> Result<IkSolution, IkError> {
        let delta = target - pivot;
        let distance = delta.norm();
        check_reach(distance, arm)?;

        // Only reachable when L1 == L2: the arm folds back onto the pivot and
        // the shoulder angle is free, so keep it where it was.
        if distance == 0.0 {
            let branch = self.config.default_branch;
            return Ok(IkSolution {
                angles: JointAngles::new(previous_angle1.unwrap_or(0.0), branch.sign() * PI),
                branch,
            });
        }

        let cos_angle2 = self.elbow_cosine(distance, arm)?;
        let candidates = candidates_from(&delta, cos_angle2, arm);
        Ok(self.select_branch(&candidates, previous_angle1))
    }

    /// Compute both branches without selecting one.
    ///
    /// At the pivot (equal segments only) the shoulder angle is reported as 0.
    pub fn candidates(
        &self,
        pivot: &Point2D,
        target: &Point2D,
        arm: &ArmConfig,
    ) -> Result<IkCandidates, IkError> {
        let delta = target - pivot;
        let distance = delta.norm();
        check_reach(distance, arm)?;

        if distance == 0.0 {
            return Ok(IkCandidates {
                up: JointAngles::new(0.0, PI),
                down: JointAngles::new(0.0, -PI),
            });
        }

        let cos_angle2 = self.elbow_cosine(distance, arm)?;
        Ok(candidates_from(&delta, cos_angle2, arm))
    }

    /// Pick the candidate whose shoulder angle is closest to
    /// `previous_angle1`. Ties go to elbow-up.
    pub fn select_branch(
        &self,
        candidates: &IkCandidates,
        previous_angle1: Option<f64>,
    ) -> IkSolution {
        let branch = match previous_angle1 {
            None => self.config.default_branch,
            Some(previous) => {
                let up_jump = (candidates.up.angle1 - previous).abs();
                let down_jump = (candidates.down.angle1 - previous).abs();
                if up_jump <= down_jump {
                    ElbowBranch::Up
                } else {
                    ElbowBranch::Down
                }
            }
        };

        IkSolution {
            angles: candidates.get(branch),
            branch,
        }
    }

    /// Law-of-cosines ratio for the elbow, clamped into `[-1, 1]`.
    fn elbow_cosine(&self, distance: f64, arm: &ArmConfig) -> Result<f64, IkError> {
        let (l1, l2) = (arm.l1(), arm.l2());
        let cos_angle2 = l2.mul_add(-l2, l1.mul_add(-l1, distance * distance)) / (2.0 * l1 * l2);

        if cos_angle2.abs() <= 1.0 + self.config.cos_tolerance {
            Ok(cos_angle2.clamp(-1.0, 1.0))
        } else {
            Err(IkError::InvalidGeometry { cos_angle2 })
        }
    }
}

/// NaN distances pass through to the geometry check.
fn check_reach(distance: f64, arm: &ArmConfig) -> Result<(), IkError> {
    if distance.is_nan() || arm.reaches(distance) {
        return Ok(());
    }
    Err(IkError::Unreachable {
        distance,
        min_reach: arm.min_reach(),
        max_reach: arm.max_reach(),
    })
}

fn candidates_from(delta: &Vector2<f64>, cos_angle2: f64, arm: &ArmConfig) -> IkCandidates {
    let elbow = cos_angle2.acos();
    IkCandidates {
        up: shoulder_for(delta, elbow, arm),
        down: shoulder_for(delta, -elbow, arm),
    }
}

fn shoulder_for(delta: &Vector2<f64>, angle2: f64, arm: &ArmConfig) -> JointAngles {
    let (sin2, cos2) = angle2.sin_cos();
    let bearing = delta.y.atan2(delta.x);
    let offset = (arm.l2() * sin2).atan2(arm.l2().mul_add(cos2, arm.l1()));
    JointAngles::new(bearing - offset, angle2)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use super::*;
    use crate::kinematics::forward_kinematics;
    use approx::assert_relative_eq;

    fn arm(l1: f64, l2: f64) -> ArmConfig {
        ArmConfig::new(l1, l2).unwrap()
    }

    fn assert_reaches(pivot: &Point2D, target: &Point2D, arm: &ArmConfig, angles: &JointAngles) {
        let layout = forward_kinematics(pivot, angles, arm);
        assert_relative_eq!(layout.end_effector.x, target.x, epsilon = 1e-6);
        assert_relative_eq!(layout.end_effector.y, target.y, epsilon = 1e-6);
    }

    #[test]
    fn full_extension_on_outer_boundary() {
        let solver = TwoLinkSolver::with_defaults();
        let solution = solver
            .solve(&Point2D::origin(), &Point2D::new(200.0, 0.0), &arm(100.0, 100.0), None)
            .unwrap();

        assert_relative_eq!(solution.angles.angle1, 0.0, epsilon = 1e-9);
        assert_relative_eq!(solution.angles.angle2, 0.0, epsilon = 1e-9);
        assert_eq!(solution.branch, ElbowBranch::Up);
    }

    #[test]
    fn folded_at_pivot_with_equal_segments() {
        let solver = TwoLinkSolver::with_defaults();
        let a = arm(100.0, 100.0);
        let p = Point2D::origin();
        let solution = solver.solve(&p, &p, &a, None).unwrap();

        assert_relative_eq!(solution.angles.angle2, PI);
        assert_reaches(&p, &p, &a, &solution.angles);
    }

    #[test]
    fn folded_keeps_previous_shoulder_angle() {
        let solver = TwoLinkSolver::with_defaults();
        let p = Point2D::new(400.0, 300.0);
        let solution = solver.solve(&p, &p, &arm(60.0, 60.0), Some(1.25)).unwrap();

        assert_relative_eq!(solution.angles.angle1, 1.25);
        assert_relative_eq!(solution.angles.angle2, PI);
    }

    #[test]
    fn pivot_unreachable_with_unequal_segments() {
        let solver = TwoLinkSolver::with_defaults();
        let p = Point2D::origin();
        let err = solver.solve(&p, &p, &arm(100.0, 60.0), None).unwrap_err();
        assert!(err.is_unreachable());
    }

    #[test]
    fn inside_inner_annulus_is_unreachable() {
        let solver = TwoLinkSolver::with_defaults();
        let err = solver
            .solve(&Point2D::origin(), &Point2D::new(30.0, 0.0), &arm(100.0, 50.0), None)
            .unwrap_err();

        assert_eq!(
            err,
            IkError::Unreachable {
                distance: 30.0,
                min_reach: 50.0,
                max_reach: 150.0,
            }
        );
    }

    #[test]
    fn beyond_outer_boundary_is_unreachable() {
        let solver = TwoLinkSolver::with_defaults();
        let err = solver
            .solve(&Point2D::origin(), &Point2D::new(150.0, 150.0), &arm(100.0, 100.0), None)
            .unwrap_err();
        assert!(matches!(err, IkError::Unreachable { max_reach, .. } if max_reach == 200.0));
    }

    #[test]
    fn inner_boundary_is_reachable() {
        let solver = TwoLinkSolver::with_defaults();
        let a = arm(100.0, 50.0);
        let p = Point2D::origin();
        let t = Point2D::new(0.0, 50.0);
        let solution = solver.solve(&p, &t, &a, None).unwrap();

        assert_relative_eq!(solution.angles.angle2.abs(), PI, epsilon = 1e-9);
        assert_reaches(&p, &t, &a, &solution.angles);
    }

    #[test]
    fn nan_target_is_invalid_geometry() {
        let solver = TwoLinkSolver::with_defaults();
        let err = solver
            .solve(&Point2D::origin(), &Point2D::new(f64::NAN, 0.0), &arm(100.0, 100.0), None)
            .unwrap_err();
        assert!(matches!(err, IkError::InvalidGeometry { .. }));
    }

    #[test]
    fn infinite_target_is_unreachable() {
        let solver = TwoLinkSolver::with_defaults();
        let err = solver
            .solve(
                &Point2D::origin(),
                &Point2D::new(f64::INFINITY, 0.0),
                &arm(100.0, 100.0),
                None,
            )
            .unwrap_err();
        assert!(err.is_unreachable());
    }

    #[test]
    fn cosine_slightly_outside_range_is_clamped() {
        let solver = TwoLinkSolver::with_defaults();
        let a = arm(100.0, 100.0);
        assert_relative_eq!(solver.elbow_cosine(200.0, &a).unwrap(), 1.0);
        assert_relative_eq!(solver.elbow_cosine(0.0, &a).unwrap(), -1.0);
        assert!(solver.elbow_cosine(200.000_000_01, &a).is_ok());
        assert!(matches!(
            solver.elbow_cosine(300.0, &a),
            Err(IkError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn first_solve_defaults_to_elbow_up() {
        let solver = TwoLinkSolver::with_defaults();
        let solution = solver
            .solve(&Point2D::origin(), &Point2D::new(120.0, 40.0), &arm(100.0, 100.0), None)
            .unwrap();
        assert_eq!(solution.branch, ElbowBranch::Up);
        assert!(solution.angles.angle2 > 0.0);
    }

    #[test]
    fn configured_default_branch_is_used_first() {
        let solver = TwoLinkSolver::new(SolverConfig {
            default_branch: ElbowBranch::Down,
            ..SolverConfig::default()
        });
        let solution = solver
            .solve(&Point2D::origin(), &Point2D::new(120.0, 40.0), &arm(100.0, 100.0), None)
            .unwrap();
        assert_eq!(solution.branch, ElbowBranch::Down);
        assert!(solution.angles.angle2 < 0.0);
    }

    #[test]
    fn branch_closest_to_previous_shoulder_angle() {
        let solver = TwoLinkSolver::with_defaults();
        let a = arm(100.0, 100.0);
        let p = Point2D::origin();
        let t = Point2D::new(141.42, 0.0);

        let candidates = solver.candidates(&p, &t, &a).unwrap();
        assert_relative_eq!(candidates.up.angle1, -FRAC_PI_4, epsilon = 1e-3);
        assert_relative_eq!(candidates.down.angle1, FRAC_PI_4, epsilon = 1e-3);

        let solution = solver.solve(&p, &t, &a, Some(0.3)).unwrap();
        assert_eq!(solution.branch, ElbowBranch::Down);
        assert_relative_eq!(solution.angles.angle1, FRAC_PI_4, epsilon = 1e-3);
        assert!(solution.angles.angle2 < 0.0);
        assert_reaches(&p, &t, &a, &solution.angles);

        let solution = solver.solve(&p, &t, &a, Some(-0.3)).unwrap();
        assert_eq!(solution.branch, ElbowBranch::Up);
    }

    #[test]
    fn both_candidates_reach_target() {
        let solver = TwoLinkSolver::with_defaults();
        let a = arm(120.0, 70.0);
        let p = Point2D::new(400.0, 300.0);
        let t = Point2D::new(480.0, 410.0);
        let candidates = solver.candidates(&p, &t, &a).unwrap();

        assert_reaches(&p, &t, &a, &candidates.up);
        assert_reaches(&p, &t, &a, &candidates.down);
        assert_relative_eq!(candidates.up.angle2, -candidates.down.angle2);
    }

    #[test]
    fn candidates_at_pivot_are_folded() {
        let solver = TwoLinkSolver::with_defaults();
        let p = Point2D::origin();
        let candidates = solver.candidates(&p, &p, &arm(10.0, 10.0)).unwrap();
        assert_relative_eq!(candidates.up.angle2, PI);
        assert_relative_eq!(candidates.down.angle2, -PI);
    }

    #[test]
    fn select_branch_tie_prefers_up() {
        let solver = TwoLinkSolver::with_defaults();
        let candidates = IkCandidates {
            up: JointAngles::new(-0.5, 1.0),
            down: JointAngles::new(0.5, -1.0),
        };
        let solution = solver.select_branch(&candidates, Some(0.0));
        assert_eq!(solution.branch, ElbowBranch::Up);
        assert_eq!(solution.angles, candidates.up);
    }

    #[test]
    fn repeated_solves_along_a_path_do_not_flip() {
        let solver = TwoLinkSolver::with_defaults();
        let a = arm(100.0, 80.0);
        let p = Point2D::origin();

        let mut previous = None;
        let mut branches = Vec::new();
        for i in 0..=20 {
            let x = 60.0 + f64::from(i) * 5.0;
            let t = Point2D::new(x, 40.0);
            let solution = solver.solve(&p, &t, &a, previous).unwrap();
            assert_reaches(&p, &t, &a, &solution.angles);
            previous = Some(solution.angles.angle1);
            branches.push(solution.branch);
        }

        assert!(branches.iter().all(|b| *b == branches[0]));
    }
}
