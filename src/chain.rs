//! Serial chain of rotary joints and its forward kinematics.
//!
//! The chain is placed in the world by the position of its first joint and by the base
//! orientation (the orientation of the root frame before any joint rotates). Both may be
//! refreshed every tick if the whole chain is carried around by the host scene.
//!
//! Advancing to joint `i` applies the rotation of joint `i - 1` and then the start offset of
//! joint `i`: each joint rotates the link that follows it, not itself. As a result the angle of
//! the last joint never changes the effector pose, and the effector of a one-joint chain is its
//! base position.

use nalgebra::{Point3, Translation3, UnitQuaternion};
use crate::ik_error::IkError;
use crate::joint::Joint;
use crate::kinematic_traits::{Kinematics, Pose};

#[derive(Debug, Clone)]
pub struct Chain {
    /// Joints from base to effector. Order is fixed once the chain is built.
    joints: Vec<Joint>,

    /// World position of joint 0.
    base_position: Point3<f64>,

    /// Orientation of the root frame before any joint rotation is applied.
    base_orientation: UnitQuaternion<f64>,
}

impl Chain {
    /// Builds the chain, checking that it is not empty and that all axes, offsets and the base
    /// are usable.
    pub fn new(joints: Vec<Joint>, base_position: Point3<f64>,
               base_orientation: UnitQuaternion<f64>) -> Result<Self, IkError> {
        if joints.is_empty() {
            return Err(IkError::EmptyChain);
        }
        for (i, joint) in joints.iter().enumerate() {
            if !joint.has_valid_axis() {
                return Err(IkError::InvalidAxis { joint: i });
            }
            if !joint.start_offset.iter().all(|x| x.is_finite()) {
                return Err(IkError::NonFiniteOffset { joint: i });
            }
        }
        check_base(&base_position, &base_orientation)?;
        Ok(Chain { joints, base_position, base_orientation })
    }

    /// Chain with the first joint at the world origin and no base rotation.
    pub fn at_origin(joints: Vec<Joint>) -> Result<Self, IkError> {
        Chain::new(joints, Point3::origin(), UnitQuaternion::identity())
    }

    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn base_position(&self) -> Point3<f64> {
        self.base_position
    }

    pub fn base_orientation(&self) -> UnitQuaternion<f64> {
        self.base_orientation
    }

    /// Repositions the whole chain. Joint descriptions stay as they are.
    pub fn move_base(&mut self, position: Point3<f64>,
                     orientation: UnitQuaternion<f64>) -> Result<(), IkError> {
        check_base(&position, &orientation)?;
        self.base_position = position;
        self.base_orientation = orientation;
        Ok(())
    }

    /// Checks that the solution has one finite angle per joint.
    pub fn check_solution(&self, qs: &[f64]) -> Result<(), IkError> {
        if qs.len() != self.joints.len() {
            return Err(IkError::SolutionLength { expected: self.joints.len(), found: qs.len() });
        }
        if let Some(joint) = qs.iter().position(|q| !q.is_finite()) {
            return Err(IkError::NonFiniteAngle { joint });
        }
        Ok(())
    }

    /// Runs the chain and reports the frame after every joint, base first.
    fn walk(&self, qs: &[f64], mut visit: impl FnMut(&Point3<f64>)) -> Pose {
        let mut position = self.base_position;
        let mut rotation = self.base_orientation;
        visit(&position);
        for i in 1..self.joints.len() {
            let previous = &self.joints[i - 1];
            rotation *= UnitQuaternion::from_axis_angle(&previous.unit_axis(), qs[i - 1].to_radians());
            position += rotation * self.joints[i].start_offset;
            visit(&position);
        }
        Pose::from_parts(Translation3::from(position.coords), rotation)
    }
}

fn check_base(position: &Point3<f64>, orientation: &UnitQuaternion<f64>) -> Result<(), IkError> {
    if position.coords.iter().all(|x| x.is_finite()) && orientation.coords.iter().all(|x| x.is_finite()) {
        Ok(())
    } else {
        Err(IkError::NonFiniteBase)
    }
}

impl Kinematics for Chain {
    fn dof(&self) -> usize {
        self.joints.len()
    }

    fn forward(&self, qs: &[f64]) -> Pose {
        self.walk(qs, |_| {})
    }

    fn forward_with_joint_positions(&self, qs: &[f64]) -> Vec<Point3<f64>> {
        let mut positions = Vec::with_capacity(self.joints.len());
        self.walk(qs, |p| positions.push(*p));
        positions
    }
}
