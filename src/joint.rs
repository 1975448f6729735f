//! Defines the rotary joint of the chain

use nalgebra::{Unit, Vector3};

/// One rigid link and its rotary degree of freedom. The angle is not stored here, it lives in
/// the solution vector owned by the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joint {
    /// Local rotation axis. Expected to be normalized; it must be finite and non-zero,
    /// this is checked when the chain is built.
    pub axis: Vector3<f64>,

    /// Translation from the previous joint's frame to this joint's frame at zero rotation.
    /// Ignored for the first joint, whose world position is the base position of the chain.
    pub start_offset: Vector3<f64>,

    /// Platform joints are not optimized. Their angle counter-rotates all earlier joints that
    /// share the same axis, keeping the platform at its reference attitude.
    pub platform: bool,
}

impl Joint {
    pub fn new(axis: Vector3<f64>, start_offset: Vector3<f64>) -> Self {
        Joint { axis, start_offset, platform: false }
    }

    /// Constructs the joint that is driven by the platform correction rather than by
    /// gradient descent.
    pub fn platform(axis: Vector3<f64>, start_offset: Vector3<f64>) -> Self {
        Joint { axis, start_offset, platform: true }
    }

    pub(crate) fn has_valid_axis(&self) -> bool {
        self.axis.iter().all(|a| a.is_finite()) && self.axis.norm_squared() > 0.0
    }

    /// Axis as a unit vector, for building rotations. Only valid after the axis was checked.
    pub(crate) fn unit_axis(&self) -> Unit<Vector3<f64>> {
        Unit::new_normalize(self.axis)
    }

    /// Axis match used by the platform correction. This is exact equality of the vectors.
    pub fn same_axis(&self, other: &Joint) -> bool {
        self.axis == other.axis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_flag() {
        let plain = Joint::new(Vector3::z(), Vector3::x());
        let platform = Joint::platform(Vector3::z(), Vector3::x());
        assert!(!plain.platform);
        assert!(platform.platform);
    }

    #[test]
    fn test_axis_validity() {
        assert!(Joint::new(Vector3::y(), Vector3::zeros()).has_valid_axis());
        assert!(!Joint::new(Vector3::zeros(), Vector3::zeros()).has_valid_axis());
        assert!(!Joint::new(Vector3::new(f64::NAN, 0.0, 1.0), Vector3::zeros()).has_valid_axis());
    }

    #[test]
    fn test_same_axis_is_exact() {
        let a = Joint::new(Vector3::new(0.0, 0.0, 1.0), Vector3::zeros());
        let b = Joint::new(Vector3::new(0.0, 0.0, 1.0), Vector3::x());
        let nearly = Joint::new(Vector3::new(0.0, 1e-12, 1.0), Vector3::zeros());
        let scaled = Joint::new(Vector3::new(0.0, 0.0, 2.0), Vector3::zeros());
        assert!(a.same_axis(&b));
        assert!(!a.same_axis(&nearly));
        assert!(!a.same_axis(&scaled));
    }
}
