use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nalgebra::Point3;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rs_gradient_ik::parameters_from_file::RobotDescription;
use rs_gradient_ik::solution_file::{load_solution, save_solution};
use rs_gradient_ik::solver::{IncrementalSolver, StepOutcome};
use rs_gradient_ik::utils::dump_solution;

/// Drive a chain described in YAML towards a fixed target, one tick at a time.
#[derive(Parser, Debug)]
#[command(name = "rs-gradient-ik", version, about)]
struct Args {
    /// Robot description (ik_solver and chain blocks)
    #[arg(short, long)]
    robot: PathBuf,

    /// Target point in world coordinates
    #[arg(short, long, required = true, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    target: Vec<f64>,

    /// Maximal number of ticks to run
    #[arg(long, default_value_t = 1000)]
    ticks: usize,

    /// Start from the solution saved in this file instead of all zeros
    #[arg(short, long)]
    solution: Option<PathBuf>,

    /// Save the final solution into this file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Print line segments of the final pose
    #[arg(long)]
    debug_segments: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let target = Point3::new(args.target[0], args.target[1], args.target[2]);

    let description = RobotDescription::from_yaml_file(&args.robot)
        .with_context(|| format!("Failed to load robot description from {}", args.robot.display()))?;
    let mut solver = match &args.solution {
        Some(path) => {
            let qs = load_solution(path)
                .with_context(|| format!("Failed to load solution from {}", path.display()))?;
            IncrementalSolver::with_solution(description.chain, description.config, qs)?
        }
        None => IncrementalSolver::new(description.chain, description.config)?,
    };

    let mut ticks = 0;
    let mut commands = 0;
    let mut sink = |_joint: usize, _angle: f64| commands += 1;
    while ticks < args.ticks {
        match solver.step(&target, &mut sink) {
            StepOutcome::Idle { .. } => break,
            StepOutcome::NoProgress => {
                info!("No progress possible at tick {}", ticks);
                break;
            }
            StepOutcome::Descended { .. } => ticks += 1,
        }
    }
    info!("Ran {} ticks, {} actuation commands", ticks, commands);

    println!("Solution (degrees):");
    dump_solution(solver.solution());
    println!("Error: {:.4}", solver.error(&target));

    if args.debug_segments {
        for segment in solver.debug_segments(&target, None) {
            println!("{:?}: [{:.3}, {:.3}, {:.3}] -> [{:.3}, {:.3}, {:.3}]", segment.kind,
                     segment.from.x, segment.from.y, segment.from.z,
                     segment.to.x, segment.to.y, segment.to.z);
        }
    }

    if let Some(path) = &args.save {
        save_solution(path, solver.solution())
            .with_context(|| format!("Failed to save solution to {}", path.display()))?;
        info!("Solution saved to {}", path.display());
    }
    Ok(())
}
