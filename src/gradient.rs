//! Finite difference estimate of the error function derivative for a single joint.

use nalgebra::Point3;
use crate::ik_error::IkError;
use crate::kinematic_traits::Kinematics;
use crate::objective::ErrorFunction;

/// Estimates the derivative of the error with respect to the angle of one joint (degrees).
///
/// This is a one-sided forward difference: the error is evaluated on the solution as it is and
/// again with `delta` added to the angle of `joint`. The perturbation is undone before return,
/// so the solution leaves this function unchanged. The estimate is biased by roughly
/// `delta / 2` times the second derivative; this is accepted in exchange for a single extra
/// evaluation.
///
/// # Arguments
///
/// * `objective` - Error function to differentiate
/// * `robot` - Kinematics the error function evaluates
/// * `target` - Where the effector should be
/// * `qs` - Current joint angles, one per joint of the robot
/// * `joint` - Index of the joint to differentiate against
/// * `delta` - Perturbation in degrees, must be positive and finite
///
/// # Returns
///
/// The derivative estimate, or the precondition error if `delta`, `joint` or the length of
/// `qs` is not valid. The estimate itself may be non-finite if the objective is; the caller
/// decides what to do about it.
pub fn gradient(objective: &dyn ErrorFunction, robot: &dyn Kinematics, target: &Point3<f64>,
                qs: &mut [f64], joint: usize, delta: f64) -> Result<f64, IkError> {
    check_delta(delta)?;
    if qs.len() != robot.dof() {
        return Err(IkError::SolutionLength { expected: robot.dof(), found: qs.len() });
    }
    if joint >= qs.len() {
        return Err(IkError::JointOutOfRange { joint, joints: qs.len() });
    }
    Ok(forward_difference(objective, robot, target, qs, joint, delta))
}

pub(crate) fn check_delta(delta: f64) -> Result<(), IkError> {
    if delta > 0.0 && delta.is_finite() {
        Ok(())
    } else {
        Err(IkError::InvalidDelta(delta))
    }
}

/// Unchecked version of [`gradient`] for callers that validated their input at setup.
pub(crate) fn forward_difference(objective: &dyn ErrorFunction, robot: &dyn Kinematics,
                                 target: &Point3<f64>, qs: &mut [f64], joint: usize,
                                 delta: f64) -> f64 {
    let f_x = objective.error(robot, target, qs);
    let original = qs[joint];
    qs[joint] += delta;
    let f_x_plus_h = objective.error(robot, target, qs);
    qs[joint] = original;
    (f_x_plus_h - f_x) / delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;
    use crate::chain::Chain;
    use crate::joint::Joint;
    use crate::objective::DistanceFromTarget;

    /// One link of length 1 rotating about z. The effector is at (cos q, sin q, 0).
    fn single_link() -> Chain {
        Chain::at_origin(vec![
            Joint::new(Vector3::z(), Vector3::zeros()),
            Joint::new(Vector3::z(), Vector3::x()),
        ]).unwrap()
    }

    #[test]
    fn test_gradient_matches_analytic_derivative() {
        let chain = single_link();
        // Distance from (cos q, sin q) to (0, 1) is 2 sin((90 - q) / 2), derivative in degrees
        // is -cos((90 - q) / 2) * pi / 180
        let target = Point3::new(0.0, 1.0, 0.0);
        let mut qs = [20.0, 0.0];
        let g = gradient(&DistanceFromTarget, &chain, &target, &mut qs, 0, 1e-4).unwrap();
        let expected = -(35.0_f64.to_radians()).cos() * std::f64::consts::PI / 180.0;
        assert!((g - expected).abs() < 1e-6, "gradient {} expected {}", g, expected);
    }

    #[test]
    fn test_gradient_restores_solution() {
        let chain = single_link();
        let mut qs = [12.5, -3.0];
        gradient(&DistanceFromTarget, &chain, &Point3::new(0.0, 1.0, 0.0), &mut qs, 0, 0.1).unwrap();
        assert_eq!(qs, [12.5, -3.0]);
    }

    #[test]
    fn test_gradient_of_last_joint_is_zero() {
        let chain = single_link();
        let mut qs = [12.5, -3.0];
        let g = gradient(&DistanceFromTarget, &chain, &Point3::new(0.0, 1.0, 0.0), &mut qs, 1, 0.1).unwrap();
        assert_eq!(g, 0.0);
    }

    #[test]
    fn test_forward_difference_is_one_sided() {
        // Quadratic objective of the first angle only: f(q) = q^2, forward difference is 2q + delta
        let chain = single_link();
        let quadratic = |_: &dyn Kinematics, _: &Point3<f64>, qs: &[f64]| qs[0] * qs[0];
        let mut qs = [3.0, 0.0];
        let g = gradient(&quadratic, &chain, &Point3::origin(), &mut qs, 0, 0.5).unwrap();
        assert!((g - 6.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_delta_is_rejected() {
        let chain = single_link();
        let mut qs = [0.0, 0.0];
        let result = gradient(&DistanceFromTarget, &chain, &Point3::new(0.0, 1.0, 0.0), &mut qs, 0, 0.0);
        assert_eq!(result, Err(IkError::InvalidDelta(0.0)));
        assert_eq!(qs, [0.0, 0.0]);
    }

    #[test]
    fn test_negative_and_nan_delta_are_rejected() {
        let chain = single_link();
        let mut qs = [0.0, 0.0];
        let target = Point3::new(0.0, 1.0, 0.0);
        assert!(gradient(&DistanceFromTarget, &chain, &target, &mut qs, 0, -0.1).is_err());
        assert!(gradient(&DistanceFromTarget, &chain, &target, &mut qs, 0, f64::NAN).is_err());
    }

    #[test]
    fn test_bad_index_and_length() {
        let chain = single_link();
        let target = Point3::new(0.0, 1.0, 0.0);
        let mut qs = [0.0, 0.0];
        assert_eq!(gradient(&DistanceFromTarget, &chain, &target, &mut qs, 2, 0.1),
                   Err(IkError::JointOutOfRange { joint: 2, joints: 2 }));
        let mut short = [0.0];
        assert_eq!(gradient(&DistanceFromTarget, &chain, &target, &mut short, 0, 0.1),
                   Err(IkError::SolutionLength { expected: 2, found: 1 }));
    }
}
