extern crate nalgebra as na;

use na::{Isometry3, Point3};

/// Pose is used as a pose of the chain effector. It contains both Cartesian position and rotation quaternion
/// ```
/// extern crate nalgebra as na;
/// use na::{Isometry3, Translation3, UnitQuaternion};
///
/// type Pose = Isometry3<f64>;
///
/// let translation = Translation3::new(1.0, 0.0, 0.0);
/// // The quaternion should be normalized to represent a valid rotation.
/// let rotation = UnitQuaternion::from_quaternion(na::Quaternion::new(1.0, 0.0, 0.0, 1.0).normalize());
/// let transform = Pose::from_parts(translation, rotation);
/// ```
pub type Pose = Isometry3<f64>;

/// Joint angles of the chain, in degrees, index 0 nearest the base.
pub type Solution = Vec<f64>;

/// Target the effector should reach.
pub type Target = Point3<f64>;

/// Forward kinematics of a serial chain with an arbitrary number of rotary joints.
/// Angles are in degrees.
pub trait Kinematics {
    /// Number of joints. Any solution passed to this trait must have exactly this length.
    fn dof(&self) -> usize;

    /// Pose of the effector for the given joint angles.
    fn forward(&self, qs: &[f64]) -> Pose;

    /// World positions of all joints, base first. The last entry is the effector.
    fn forward_with_joint_positions(&self, qs: &[f64]) -> Vec<Point3<f64>>;
}
