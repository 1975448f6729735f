//! Incremental inverse kinematics solver.
//!
//! The solver is called once per simulation tick. Each call takes at most one step of
//! coordinate-wise gradient descent, so the chain converges over many ticks while the target
//! moves. The solution is kept between calls and every step starts from where the previous one
//! ended.
//!
//! On each tick:
//! - If the error is not above the stop threshold, nothing happens (idle).
//! - Otherwise, joints are visited from base to effector. For each joint the gradient is
//!   estimated on the current solution, which already contains the updates made to earlier
//!   joints in this pass, and the angle moves against it.
//! - A platform joint then discards its gradient step and takes the counter-rotation of all
//!   earlier joints sharing its axis, minus [`PLATFORM_BIAS`].
//! - The resulting angle is sent to the actuation sink before moving to the next joint.

use nalgebra::{Point3, UnitQuaternion};
use tracing::{debug, trace, warn};
use crate::actuation::ActuationSink;
use crate::chain::Chain;
use crate::config::SolverConfig;
use crate::debug_draw::{link_segments, DebugSegment, SegmentKind};
use crate::gradient::forward_difference;
use crate::ik_error::IkError;
use crate::joint::Joint;
use crate::kinematic_traits::{Kinematics, Pose, Solution};
use crate::objective::{DistanceFromTarget, ErrorFunction};

/// Fixed mechanical offset (degrees) of platform joints relative to the counter-rotation.
pub const PLATFORM_BIAS: f64 = 90.0;

/// What a single call to [`IncrementalSolver::step`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// The error was within the stop threshold. The solution was not touched and nothing was
    /// actuated.
    Idle { error: f64 },

    /// One descent pass was done. Joints listed in `skipped` produced a non-finite update and
    /// kept their previous angle.
    Descended { error_before: f64, error_after: f64, skipped: Vec<usize> },

    /// The error itself is not finite (for instance, the target is not). The solution was not
    /// touched.
    NoProgress,
}

impl StepOutcome {
    pub fn is_idle(&self) -> bool {
        matches!(self, StepOutcome::Idle { .. })
    }
}

pub struct IncrementalSolver {
    chain: Chain,
    config: SolverConfig,
    solution: Solution,
    objective: Box<dyn ErrorFunction>,
}

impl IncrementalSolver {
    /// Creates the solver with all joints at zero and the distance to target as the objective.
    pub fn new(chain: Chain, config: SolverConfig) -> Result<Self, IkError> {
        let solution = vec![0.0; chain.dof()];
        IncrementalSolver::with_solution(chain, config, solution)
    }

    /// Creates the solver starting from the given angles, for instance a solution saved by a
    /// previous session.
    pub fn with_solution(chain: Chain, config: SolverConfig, solution: Solution) -> Result<Self, IkError> {
        config.validate()?;
        chain.check_solution(&solution)?;
        for warning in config.warnings() {
            warn!("{}", warning);
        }
        Ok(IncrementalSolver {
            chain,
            config,
            solution,
            objective: Box::new(DistanceFromTarget),
        })
    }

    /// Replaces the objective the solver minimizes.
    pub fn with_objective(mut self, objective: impl ErrorFunction + 'static) -> Self {
        self.objective = Box::new(objective);
        self
    }

    pub fn solution(&self) -> &[f64] {
        &self.solution
    }

    pub fn set_solution(&mut self, solution: Solution) -> Result<(), IkError> {
        self.chain.check_solution(&solution)?;
        self.solution = solution;
        Ok(())
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Moves the base of the chain, as when the host carries the whole arm around.
    pub fn move_base(&mut self, position: Point3<f64>, orientation: UnitQuaternion<f64>) -> Result<(), IkError> {
        self.chain.move_base(position, orientation)
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SolverConfig) -> Result<(), IkError> {
        config.validate()?;
        for warning in config.warnings() {
            warn!("{}", warning);
        }
        self.config = config;
        Ok(())
    }

    /// Current value of the objective (by default, the distance from the effector to target).
    pub fn error(&self, target: &Point3<f64>) -> f64 {
        self.objective.error(&self.chain, target, &self.solution)
    }

    /// Current pose of the effector.
    pub fn effector(&self) -> Pose {
        self.chain.forward(&self.solution)
    }

    /// Takes one step towards the target if it is not already close enough.
    pub fn step(&mut self, target: &Point3<f64>, sink: &mut dyn ActuationSink) -> StepOutcome {
        let error_before = self.error(target);
        if !error_before.is_finite() {
            warn!(error = error_before, "Error is not finite, no progress this tick");
            return StepOutcome::NoProgress;
        }
        if error_before <= self.config.stop_threshold {
            return StepOutcome::Idle { error: error_before };
        }

        let skipped = self.approach_target(target, sink);
        let error_after = self.error(target);
        debug!(error_before, error_after, skipped = skipped.len(), "Descent step");
        StepOutcome::Descended { error_before, error_after, skipped }
    }

    /// One pass of sequential coordinate descent. Returns the joints whose update was skipped.
    fn approach_target(&mut self, target: &Point3<f64>, sink: &mut dyn ActuationSink) -> Vec<usize> {
        let joints = self.chain.joints();
        let mut skipped = Vec::new();
        for i in 0..self.solution.len() {
            let gradient = forward_difference(self.objective.as_ref(), &self.chain, target,
                                              &mut self.solution, i, self.config.delta_gradient);
            let updated = self.solution[i] - self.config.learning_rate * gradient;
            if updated.is_finite() {
                trace!(joint = i, gradient, angle = updated, "Joint update");
                self.solution[i] = updated;
            } else {
                warn!(joint = i, gradient, "Non-finite update skipped");
                skipped.push(i);
            }

            if joints[i].platform {
                self.solution[i] = platform_angle(joints, &self.solution, i);
            }
            sink.actuate(i, self.solution[i]);
        }
        skipped
    }

    /// Segments for drawing the current state: links of the chain, effector to target and,
    /// if given, destination to target.
    pub fn debug_segments(&self, target: &Point3<f64>, destination: Option<&Point3<f64>>) -> Vec<DebugSegment> {
        let positions = self.chain.forward_with_joint_positions(&self.solution);
        let mut segments = link_segments(&positions);
        let effector = Point3::from(self.effector().translation.vector);
        segments.push(DebugSegment { from: effector, to: *target, kind: SegmentKind::EffectorToTarget });
        if let Some(destination) = destination {
            segments.push(DebugSegment { from: *destination, to: *target, kind: SegmentKind::DestinationToTarget });
        }
        segments
    }
}

/// Angle of the platform joint at `index`: negated sum of the angles of all earlier joints
/// with exactly the same axis, minus [`PLATFORM_BIAS`]. Joints are summed from `index - 1`
/// down to the base.
pub fn platform_angle(joints: &[Joint], qs: &[f64], index: usize) -> f64 {
    let mut aux = 0.0;
    for j in (0..index).rev() {
        if joints[j].same_axis(&joints[index]) {
            aux -= qs[j];
        }
    }
    aux - PLATFORM_BIAS
}
