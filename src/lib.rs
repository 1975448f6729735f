//! Incremental inverse kinematics for serial chains of rotary joints.
//!
//! The solver is meant to be called once per simulation tick while the effector follows a
//! moving target. Each call takes at most one step of gradient descent from the solution left
//! by the previous call, so the chain converges over many ticks rather than within one. This
//! is a local numerical method: there is no closed-form solution, no collision or torque
//! awareness, and no guarantee of reaching a global minimum or avoiding singularities.
//!
//! # Features
//!
//! - Chains of any length, each joint rotating about its own axis, with an arbitrary base
//!   position and orientation that can be moved between ticks.
//! - Forward difference gradient estimate and sequential (coordinate-wise) descent: each joint
//!   sees the updates already made to the joints before it in the same pass.
//! - Dead zone: no step is taken while the error is within the stop threshold.
//! - Platform joints that keep their attitude by counter-rotating all earlier joints on the same
//!   axis.
//! - Pluggable error function (distance to target by default, closures accepted).
//! - Per-joint actuation callback and optional debug line segments for the host.
//! - Robot description and saved solutions in YAML (feature `allow_filesystem`).
//!
//! # Angles
//!
//! All angles are in degrees. They are never wrapped or clamped by the solver; use
//! [`utils::wrap_degrees`] if the receiving side needs a bounded range.
//!
//! # Example
//!
//! ```
//! use nalgebra::{Point3, Vector3};
//! use rs_gradient_ik::actuation::RecordingSink;
//! use rs_gradient_ik::chain::Chain;
//! use rs_gradient_ik::config::SolverConfig;
//! use rs_gradient_ik::joint::Joint;
//! use rs_gradient_ik::solver::IncrementalSolver;
//!
//! let chain = Chain::at_origin(vec![
//!     Joint::new(Vector3::z(), Vector3::zeros()),
//!     Joint::new(Vector3::z(), Vector3::x()),
//!     Joint::new(Vector3::z(), Vector3::x()),
//! ]).unwrap();
//! let config = SolverConfig { learning_rate: 50.0, ..Default::default() };
//! let mut solver = IncrementalSolver::new(chain, config).unwrap();
//!
//! let target = Point3::new(1.5, 0.8, 0.0);
//! let mut sink = RecordingSink::default();
//! for _tick in 0..1000 {
//!     if solver.step(&target, &mut sink).is_idle() {
//!         break;
//!     }
//! }
//! assert!(solver.error(&target) <= 0.1);
//! ```

pub mod kinematic_traits;
pub mod ik_error;

pub mod joint;
pub mod chain;

pub mod objective;
pub mod gradient;

pub mod config;
pub mod actuation;
pub mod debug_draw;
pub mod solver;

#[path = "utils/utils.rs"]
pub mod utils;

#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;
#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;
#[cfg(feature = "allow_filesystem")]
pub mod solution_file;

#[cfg(test)]
mod tests;
