//! The arm controller: sole owner of the arm's geometry and pose.
//!
//! [`ArmController`] composes the IK solver, the pose animator and the grid
//! frame. Every mutation goes through it, so a rejected command never leaves
//! a partial update behind.

use std::fmt;

use bevy::prelude::*;
use reacher_anim::{PoseAnimator, Smoothing};
use reacher_core::{
    ArmConfig, ConfigError, IkError, JointAngles, Point2D, ReacherError, SceneConfig,
};
use reacher_ik::{ArmLayout, IkSolution, TwoLinkSolver, forward_kinematics};
use reacher_teleop::{ArmCommand, GridFrame};
use tracing::{debug, info, warn};

use crate::frame::ArmFrame;

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// What happened to the last accepted target after a geometry change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Retarget {
    /// No target has been accepted yet.
    NoTarget,
    /// The target was re-solved against the new geometry.
    Resolved(IkSolution),
    /// The target is out of reach now; the previous target angles remain.
    Kept(IkError),
}

/// Result of an accepted [`ArmCommand`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandOutcome {
    /// A new target was solved and handed to the animator.
    Targeted(IkSolution),
    /// Segment lengths or pivot changed.
    Reconfigured(Retarget),
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Targeted(solution) => write!(f, "Target accepted ({})", solution.branch),
            Self::Reconfigured(Retarget::NoTarget) => write!(f, "Reconfigured"),
            Self::Reconfigured(Retarget::Resolved(solution)) => {
                write!(f, "Reconfigured, target re-solved ({})", solution.branch)
            }
            Self::Reconfigured(Retarget::Kept(_)) => {
                write!(f, "Reconfigured, target out of reach (kept previous pose)")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// ArmController
// ---------------------------------------------------------------------------

/// Bevy resource owning the arm state.
///
/// Built from [`SceneConfig`] when inserted with `init_resource`.
#[derive(Resource, Clone, Debug)]
pub struct ArmController {
    arm: ArmConfig,
    pivot: Point2D,
    grid: GridFrame,
    solver: TwoLinkSolver,
    animator: PoseAnimator,
    target_point: Option<Point2D>,
}

// Inherent rather than `impl Default`: bevy's blanket `FromWorld for T: Default`
// would conflict with the `FromWorld` impl below.
impl ArmController {
    #[allow(clippy::should_implement_trait)]
    fn default() -> Self {
        Self {
            arm: ArmConfig::default(),
            pivot: Point2D::origin(),
            grid: GridFrame::default(),
            solver: TwoLinkSolver::default(),
            animator: PoseAnimator::default(),
            target_point: None,
        }
    }
}

impl FromWorld for ArmController {
    fn from_world(world: &mut World) -> Self {
        let Some(config) = world.get_resource::<SceneConfig>() else {
            return Self::default();
        };
        Self::new(config).unwrap_or_else(|err| {
            warn!("Invalid scene configuration, using defaults: {err}");
            Self::default()
        })
    }
}

impl ArmController {
    /// Build a controller at the zero pose.
    pub fn new(config: &SceneConfig) -> Result<Self, ConfigError> {
        let pivot = config.pivot_point()?;
        Ok(Self {
            arm: config.arm.arm()?,
            pivot,
            grid: GridFrame::from_config(&config.grid, pivot)?,
            solver: TwoLinkSolver::default(),
            animator: PoseAnimator::new(Smoothing::from_config(&config.animation)?),
            target_point: None,
        })
    }

    pub const fn arm(&self) -> &ArmConfig {
        &self.arm
    }

    pub const fn pivot(&self) -> Point2D {
        self.pivot
    }

    /// Grid anchored at the pivot.
    pub const fn grid(&self) -> &GridFrame {
        &self.grid
    }

    pub const fn solver(&self) -> &TwoLinkSolver {
        &self.solver
    }

    pub const fn animator(&self) -> &PoseAnimator {
        &self.animator
    }

    /// Last accepted target in world units.
    pub const fn target_point(&self) -> Option<Point2D> {
        self.target_point
    }

    pub fn is_settled(&self) -> bool {
        self.animator.is_settled()
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Validate and apply one command.
    pub fn apply(&mut self, command: ArmCommand) -> Result<CommandOutcome, ReacherError> {
        match command {
            ArmCommand::MoveTo(target) => Ok(CommandOutcome::Targeted(
                self.set_target_point(target)?,
            )),
            ArmCommand::MoveToGrid { x, y } => {
                Ok(CommandOutcome::Targeted(self.set_grid_target(x, y)?))
            }
            ArmCommand::Resize { l1, l2 } => {
                let arm = ArmConfig::new(l1, l2)?;
                Ok(CommandOutcome::Reconfigured(self.set_arm(arm)))
            }
            ArmCommand::Recentre(pivot) => {
                Ok(CommandOutcome::Reconfigured(self.set_pivot(pivot)?))
            }
        }
    }

    /// Solve for `target` and hand the result to the animator.
    ///
    /// On error nothing changes: the previous target, branch and target
    /// point stay in effect.
    pub fn set_target_point(&mut self, target: Point2D) -> Result<IkSolution, IkError> {
        match self.solve(&target) {
            Ok(solution) => {
                self.animator.set_target(solution.angles, solution.branch);
                self.target_point = Some(target);
                debug!(
                    x = target.x,
                    y = target.y,
                    branch = %solution.branch,
                    "Target accepted"
                );
                Ok(solution)
            }
            Err(err) => {
                warn!(x = target.x, y = target.y, "Target rejected: {err}");
                Err(err)
            }
        }
    }

    /// Target a grid intersection, counted in cells from the pivot.
    pub fn set_grid_target(&mut self, gx: f64, gy: f64) -> Result<IkSolution, IkError> {
        self.set_target_point(self.grid.to_world(gx, gy))
    }

    /// Swap in new segment lengths and re-solve the last target.
    pub fn set_arm(&mut self, arm: ArmConfig) -> Retarget {
        self.arm = arm;
        info!(l1 = arm.l1(), l2 = arm.l2(), "Segment lengths changed");
        self.retarget()
    }

    /// Move the pivot (and the grid with it) and re-solve the last target.
    pub fn set_pivot(&mut self, pivot: Point2D) -> Result<Retarget, ConfigError> {
        if !(pivot.x.is_finite() && pivot.y.is_finite()) {
            return Err(ConfigError::InvalidValue {
                field: "pivot".into(),
                message: format!("({}, {}) must be finite", pivot.x, pivot.y),
            });
        }
        self.pivot = pivot;
        self.grid = self.grid.with_origin(pivot);
        info!(x = pivot.x, y = pivot.y, "Pivot moved");
        Ok(self.retarget())
    }

    /// Return to the zero pose and forget the last target.
    pub fn reset(&mut self) {
        self.animator.reset();
        self.target_point = None;
    }

    // -----------------------------------------------------------------------
    // Per-frame
    // -----------------------------------------------------------------------

    /// Advance the animation by one frame.
    pub fn tick(&mut self) -> JointAngles {
        self.animator.tick()
    }

    /// Joint positions for the current angles.
    pub fn layout(&self) -> ArmLayout {
        forward_kinematics(&self.pivot, &self.animator.current(), &self.arm)
    }

    /// Render snapshot of the current state.
    pub fn frame(&self) -> ArmFrame {
        let layout = self.layout();
        let pose = self.animator.pose();
        ArmFrame {
            pivot: layout.pivot,
            joint2: layout.joint2,
            end_effector: layout.end_effector,
            end_orientation: layout.end_orientation,
            min_reach: self.arm.min_reach(),
            max_reach: self.arm.max_reach(),
            current: pose.current,
            target: pose.target,
            branch: pose.branch,
            target_point: self.target_point,
            settled: self.is_settled(),
        }
    }

    fn solve(&self, target: &Point2D) -> Result<IkSolution, IkError> {
        let previous_angle1 = self
            .target_point
            .map(|_| self.animator.current().angle1);
        self.solver
            .solve(&self.pivot, target, &self.arm, previous_angle1)
    }

    fn retarget(&mut self) -> Retarget {
        let Some(target) = self.target_point else {
            return Retarget::NoTarget;
        };
        match self.solve(&target) {
            Ok(solution) => {
                self.animator.set_target(solution.angles, solution.branch);
                debug!(branch = %solution.branch, "Target re-solved");
                Retarget::Resolved(solution)
            }
            Err(err) => {
                warn!("Target no longer reachable, keeping previous pose: {err}");
                Retarget::Kept(err)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
