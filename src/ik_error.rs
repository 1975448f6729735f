//! Precondition violations of the solver core

/// Misconfigured chain, solution or solver parameters. These are reported when the chain or
/// solver is built, so that a tick never runs on malformed input.
#[derive(Debug, Clone, PartialEq)]
pub enum IkError {
    EmptyChain,
    InvalidAxis { joint: usize },
    NonFiniteOffset { joint: usize },
    NonFiniteBase,
    SolutionLength { expected: usize, found: usize },
    NonFiniteAngle { joint: usize },
    JointOutOfRange { joint: usize, joints: usize },
    InvalidDelta(f64),
    InvalidParameter { name: &'static str, value: f64 },
}

impl std::fmt::Display for IkError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            IkError::EmptyChain =>
                write!(f, "Chain must contain at least one joint"),
            IkError::InvalidAxis { joint } =>
                write!(f, "Joint {}: rotation axis must be finite and non-zero", joint),
            IkError::NonFiniteOffset { joint } =>
                write!(f, "Joint {}: start offset must be finite", joint),
            IkError::NonFiniteBase =>
                write!(f, "Base position and orientation must be finite"),
            IkError::SolutionLength { expected, found } =>
                write!(f, "Solution length mismatch: expected {}, found {}", expected, found),
            IkError::NonFiniteAngle { joint } =>
                write!(f, "Joint {}: angle must be finite", joint),
            IkError::JointOutOfRange { joint, joints } =>
                write!(f, "Joint index {} out of range for {} joints", joint, joints),
            IkError::InvalidDelta(delta) =>
                write!(f, "Gradient delta must be positive and finite (got {})", delta),
            IkError::InvalidParameter { name, value } =>
                write!(f, "Invalid solver parameter {}: {}", name, value),
        }
    }
}

impl std::error::Error for IkError {}
