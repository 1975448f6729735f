//! Parameters of the incremental solver

use crate::gradient::check_delta;
use crate::ik_error::IkError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Perturbation (degrees) used by the finite difference gradient estimate. Must be positive.
    pub delta_gradient: f64,

    /// Multiplier of the gradient when updating the angle. Gradients are in units of error per
    /// degree, so for chains measured in meters useful values are often well above 1.
    pub learning_rate: f64,

    /// If the error is not above this value, the step does nothing.
    pub stop_threshold: f64,

    /// Declared for hosts that expose it, but the update rule does not consult it. Setting it
    /// produces a configuration warning and has no other effect.
    pub slowdown_threshold: Option<f64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            delta_gradient: 0.1,
            learning_rate: 0.1,
            stop_threshold: 0.1,
            slowdown_threshold: None,
        }
    }
}

/// Non-fatal remarks about the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigWarning {
    SlowdownThresholdUnused(f64),
    NonPositiveLearningRate(f64),
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ConfigWarning::SlowdownThresholdUnused(value) =>
                write!(f, "slowdown_threshold {} is set but does not affect the step", value),
            ConfigWarning::NonPositiveLearningRate(value) =>
                write!(f, "learning_rate {} will not move towards the target", value),
        }
    }
}

impl SolverConfig {
    /// Checks the values that would make the step meaningless.
    pub fn validate(&self) -> Result<(), IkError> {
        check_delta(self.delta_gradient)?;
        if !self.learning_rate.is_finite() {
            return Err(IkError::InvalidParameter { name: "learning_rate", value: self.learning_rate });
        }
        if !(self.stop_threshold.is_finite() && self.stop_threshold >= 0.0) {
            return Err(IkError::InvalidParameter { name: "stop_threshold", value: self.stop_threshold });
        }
        Ok(())
    }

    pub fn warnings(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if let Some(slowdown) = self.slowdown_threshold {
            warnings.push(ConfigWarning::SlowdownThresholdUnused(slowdown));
        }
        if self.learning_rate <= 0.0 {
            warnings.push(ConfigWarning::NonPositiveLearningRate(self.learning_rate));
        }
        warnings
    }

    /// Convert to string yaml representation (quick viewing, saving, etc).
    pub fn to_yaml(&self) -> String {
        let mut yaml = format!(
            "ik_solver:\n  \
              delta_gradient: {:?}\n  \
              learning_rate: {:?}\n  \
              stop_threshold: {:?}\n",
            self.delta_gradient, self.learning_rate, self.stop_threshold
        );
        if let Some(slowdown) = self.slowdown_threshold {
            yaml.push_str(&format!("  slowdown_threshold: {:?}\n", slowdown));
        }
        yaml
    }
}
