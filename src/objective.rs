//! Error functions minimized by the solver.
//!
//! An error function maps a target and a candidate solution to a scalar badness of fit. It gets
//! the kinematics to evaluate, so the same objective works for any chain and keeps working
//! when the chain is moved between ticks.

extern crate nalgebra as na;

use na::{Point3, UnitQuaternion};
use crate::kinematic_traits::Kinematics;

pub trait ErrorFunction {
    fn error(&self, robot: &dyn Kinematics, target: &Point3<f64>, qs: &[f64]) -> f64;
}

/// Any closure of the right shape can be used as the error function.
impl<F> ErrorFunction for F
where
    F: Fn(&dyn Kinematics, &Point3<f64>, &[f64]) -> f64,
{
    fn error(&self, robot: &dyn Kinematics, target: &Point3<f64>, qs: &[f64]) -> f64 {
        self(robot, target, qs)
    }
}

/// Euclidean distance between the effector and the target. This is the default objective.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceFromTarget;

impl ErrorFunction for DistanceFromTarget {
    fn error(&self, robot: &dyn Kinematics, target: &Point3<f64>, qs: &[f64]) -> f64 {
        let pose = robot.forward(qs);
        (pose.translation.vector - target.coords).norm()
    }
}

/// Distance to the target plus the weighted angle (radians) between the effector orientation
/// and the desired one. With zero weight this is the same as [`DistanceFromTarget`].
#[derive(Debug, Clone, Copy)]
pub struct WeightedPoseError {
    pub orientation: UnitQuaternion<f64>,
    pub weight: f64,
}

impl ErrorFunction for WeightedPoseError {
    fn error(&self, robot: &dyn Kinematics, target: &Point3<f64>, qs: &[f64]) -> f64 {
        let pose = robot.forward(qs);
        let distance = (pose.translation.vector - target.coords).norm();
        distance + self.weight * pose.rotation.angle_to(&self.orientation)
    }
}
