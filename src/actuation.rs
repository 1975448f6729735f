//! Receivers of joint angles produced by the solver.
//!
//! The solver calls [`ActuationSink::actuate`] once per joint, in chain order, on every tick
//! where it takes a step. Applying the angle to a physical or simulated joint is up to the
//! receiving side.

pub trait ActuationSink {
    fn actuate(&mut self, joint: usize, angle_degrees: f64);
}

impl<F> ActuationSink for F
where
    F: FnMut(usize, f64),
{
    fn actuate(&mut self, joint: usize, angle_degrees: f64) {
        self(joint, angle_degrees)
    }
}

/// Discards all commands, for callers that only read the solution.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoActuation;

impl ActuationSink for NoActuation {
    fn actuate(&mut self, _joint: usize, _angle_degrees: f64) {}
}

/// Keeps the commands in the order received.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub commands: Vec<(usize, f64)>,
}

impl ActuationSink for RecordingSink {
    fn actuate(&mut self, joint: usize, angle_degrees: f64) {
        self.commands.push((joint, angle_degrees));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let mut sink = RecordingSink::default();
        sink.actuate(0, 1.5);
        sink.actuate(1, -2.0);
        assert_eq!(sink.commands, vec![(0, 1.5), (1, -2.0)]);
    }

    #[test]
    fn test_closure_sink() {
        let mut angles = vec![0.0; 3];
        {
            let mut sink = |joint: usize, angle: f64| angles[joint] = angle;
            sink.actuate(2, 45.0);
            sink.actuate(0, -10.0);
        }
        assert_eq!(angles, vec![-10.0, 0.0, 45.0]);
    }
}
