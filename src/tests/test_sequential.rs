#[cfg(test)]
mod tests {
    use nalgebra::Point3;
    use crate::actuation::NoActuation;
    use crate::config::SolverConfig;
    use crate::gradient::gradient;
    use crate::objective::DistanceFromTarget;
    use crate::solver::IncrementalSolver;
    use crate::tests::test_utils::planar_arm;

    const LEARNING_RATE: f64 = 50.0;
    const DELTA: f64 = 0.1;

    fn start() -> Vec<f64> {
        vec![10.0, 20.0, 0.0]
    }

    /// Joint 1 must see the angle of joint 0 as already updated in the same pass.
    #[test]
    fn test_step_is_sequential() {
        let chain = planar_arm(2);
        let target = Point3::new(1.0, 1.5, 0.0);
        let config = SolverConfig { learning_rate: LEARNING_RATE, delta_gradient: DELTA, ..Default::default() };
        let mut solver = IncrementalSolver::with_solution(chain.clone(), config, start()).unwrap();
        solver.step(&target, &mut NoActuation);

        let mut sequential = start();
        for i in 0..sequential.len() {
            let g = gradient(&DistanceFromTarget, &chain, &target, &mut sequential, i, DELTA).unwrap();
            sequential[i] -= LEARNING_RATE * g;
        }
        assert_eq!(solver.solution(), sequential.as_slice());

        // All gradients taken from the angles before the pass
        let gradients: Vec<f64> = (0..3)
            .map(|i| gradient(&DistanceFromTarget, &chain, &target, &mut start(), i, DELTA).unwrap())
            .collect();
        let batched: Vec<f64> = start().iter().zip(&gradients)
            .map(|(q, g)| q - LEARNING_RATE * g)
            .collect();

        // The first joint has nothing before it, so both agree there
        assert_eq!(batched[0], sequential[0]);
        assert!((batched[1] - sequential[1]).abs() > 1e-4,
                "sequential {:?} batched {:?}", sequential, batched);
    }

    /// The pass does not leave any trace of the gradient perturbation behind.
    #[test]
    fn test_zero_learning_rate_keeps_solution() {
        let config = SolverConfig { learning_rate: 0.0, ..Default::default() };
        let mut solver = IncrementalSolver::with_solution(planar_arm(2), config, start()).unwrap();
        for _ in 0..10 {
            solver.step(&Point3::new(1.0, 1.5, 0.0), &mut NoActuation);
        }
        assert_eq!(solver.solution(), start().as_slice());
    }
}
