//! One-shot inverse kinematics from the command line.

use std::fmt;

use reacher_core::{ArmConfig, IkError, Point2D};
use reacher_ik::{IkCandidates, IkSolution, TwoLinkSolver, forward_kinematics};

/// Printable summary of one solve.
struct SolveReport<'a> {
    pivot: &'a Point2D,
    target: &'a Point2D,
    arm: &'a ArmConfig,
    candidates: IkCandidates,
    solution: IkSolution,
    tip: Point2D,
}

impl fmt::Display for SolveReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (pivot, target, arm) = (self.pivot, self.target, self.arm);
        writeln!(
            f,
            "pivot ({}, {})  L1={} L2={}  reach [{}, {}]",
            pivot.x,
            pivot.y,
            arm.l1(),
            arm.l2(),
            arm.min_reach(),
            arm.max_reach()
        )?;
        writeln!(
            f,
            "target ({}, {})  distance {:.4}",
            target.x,
            target.y,
            (target - pivot).norm()
        )?;
        for (label, angles) in [
            ("elbow-up", self.candidates.up),
            ("elbow-down", self.candidates.down),
        ] {
            let [a1, a2] = angles.to_degrees();
            writeln!(f, "  {label:<11} angle1 = {a1:>9.3}°  angle2 = {a2:>9.3}°")?;
        }
        writeln!(f, "selected: {}", self.solution.branch)?;
        write!(f, "tip: ({:.4}, {:.4})", self.tip.x, self.tip.y)
    }
}

/// Solve once and describe both branches and the selection.
pub fn describe_solve(
    pivot: &Point2D,
    target: &Point2D,
    arm: &ArmConfig,
    previous_angle1: Option<f64>,
) -> Result<(IkSolution, String), IkError> {
    let solver = TwoLinkSolver::default();
    let candidates = solver.candidates(pivot, target, arm)?;
    let solution = solver.solve(pivot, target, arm, previous_angle1)?;
    let tip = forward_kinematics(pivot, &solution.angles, arm).end_effector;

    let report = SolveReport {
        pivot,
        target,
        arm,
        candidates,
        solution,
        tip,
    };
    Ok((solution, report.to_string()))
}
