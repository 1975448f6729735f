use nalgebra::{Point3, Vector3};
use rs_gradient_ik::chain::Chain;
use rs_gradient_ik::config::SolverConfig;
use rs_gradient_ik::joint::Joint;
use rs_gradient_ik::solver::{IncrementalSolver, StepOutcome};
use rs_gradient_ik::utils::{dump_solution, format_solution};

/// Planar arm with a platform following a target that goes round a circle.
fn main() {
    let chain = Chain::at_origin(vec![
        Joint::new(Vector3::z(), Vector3::zeros()),
        Joint::new(Vector3::z(), Vector3::x()),
        Joint::platform(Vector3::z(), Vector3::x()),
        Joint::new(Vector3::z(), Vector3::new(0.5, 0.0, 0.0)), // tool, its angle is never used
    ]).expect("Invalid chain");
    let config = SolverConfig { learning_rate: 50.0, ..Default::default() };
    let mut solver = IncrementalSolver::new(chain, config).expect("Invalid solver parameters");

    let mut applied = vec![0.0; 4];
    let mut idle_ticks = 0;
    for tick in 0..1500 {
        let angle = (0.25 * tick as f64).to_radians();
        let target = Point3::new(1.4 * angle.cos(), 1.4 * angle.sin(), 0.0);

        let mut actuate = |joint: usize, angle: f64| applied[joint] = angle;
        match solver.step(&target, &mut actuate) {
            StepOutcome::Idle { .. } => idle_ticks += 1,
            StepOutcome::Descended { error_after, .. } if tick % 100 == 0 => {
                println!("Tick {:4}: error {:.3}, joints {}", tick, error_after, format_solution(&applied));
            }
            StepOutcome::NoProgress => {
                println!("Tick {:4}: no progress possible", tick);
                break;
            }
            _ => {}
        }
    }

    println!("\nIdle on {} ticks, final solution:", idle_ticks);
    dump_solution(solver.solution());
}
