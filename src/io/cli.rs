//! Command-line interface for solving puzzle definition files

use crate::io::configuration::{DEFAULT_MAX_STEPS, DEFAULT_SEED, PROGRESS_REFRESH_STEPS};
use crate::io::error::Result;
use crate::io::loader::load_puzzle;
use crate::io::progress::SolveProgress;
use crate::puzzle::pool::TilePool;
use crate::puzzle::tetrahedron::Tetrahedron;
use crate::solver::core::Solver;
use crate::solver::no_matching::{
    NoMatchingOptions, NoMatchingSolver, PositionSelection, RotationSelection, TileSelection,
};
use crate::solver::strategies::{ExhaustiveSeed, PrunedSeed};
use crate::solver::{BacktrackingSolver, PuzzleChange};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Solving algorithm selected on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SolverChoice {
    /// Try every remaining tile at every rotation
    BruteForce,
    /// Pre-filter candidates against known neighbor constraints
    OnlyValid,
    /// Fill positions without checking matches
    NoMatching,
}

#[derive(Parser)]
#[command(name = "tetratile")]
#[command(
    author,
    version,
    about = "Solve tetrahedral tile-matching puzzles"
)]
/// Command-line arguments for the puzzle solving tool
pub struct Cli {
    /// Puzzle definition JSON file
    #[arg(value_name = "DEFINITION")]
    pub definition: PathBuf,

    /// Solving algorithm
    #[arg(short, long, value_enum, default_value = "only-valid")]
    pub solver: SolverChoice,

    /// Random seed for stochastic draw and placement policies
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Draw and place randomly instead of in listing order
    #[arg(short, long)]
    pub random: bool,

    /// Maximum solver steps before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    pub steps: usize,

    /// Print every change event as a JSON line
    #[arg(short, long)]
    pub trace: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Loads a puzzle, runs the selected solver and reports the outcome
pub struct PuzzleRunner {
    cli: Cli,
}

impl PuzzleRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load, solve and report
    ///
    /// Both `Solved` and `Completed` are normal outcomes; only I/O,
    /// validation and topology failures are errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the definition cannot be loaded or the solver
    /// cannot be constructed.
    pub fn run(&self) -> Result<()> {
        let (tetrahedron, pool) = load_puzzle(&self.cli.definition)?;
        let mut solver = self.build_solver(tetrahedron, pool)?;

        let progress = (!self.cli.quiet).then(|| {
            SolveProgress::new(
                solver.tetrahedron().name(),
                solver.tetrahedron().tile_position_count(),
            )
        });

        let mut outcome = None;
        while solver.steps() < self.cli.steps {
            let change = solver.next_state()?;
            self.trace(&change);

            if let Some(ref bar) = progress {
                if solver.steps() % PROGRESS_REFRESH_STEPS == 0 || change.is_terminal() {
                    bar.update(placed_count(solver.tetrahedron()), solver.steps());
                }
            }

            if change.is_terminal() {
                outcome = Some(change);
                break;
            }
        }

        if let Some(ref bar) = progress {
            bar.finish(match outcome {
                Some(PuzzleChange::Solved) => "solved",
                Some(_) => "completed",
                None => "step limit reached",
            });
        }

        self.report(solver.as_ref(), outcome.as_ref());
        Ok(())
    }

    fn build_solver(&self, tetrahedron: Tetrahedron, pool: TilePool) -> Result<Box<dyn Solver>> {
        Ok(match self.cli.solver {
            SolverChoice::BruteForce if self.cli.random => Box::new(
                BacktrackingSolver::with_random_draw(tetrahedron, pool, ExhaustiveSeed, self.cli.seed)?,
            ),
            SolverChoice::BruteForce => {
                Box::new(BacktrackingSolver::new(tetrahedron, pool, ExhaustiveSeed)?)
            }
            SolverChoice::OnlyValid if self.cli.random => Box::new(
                BacktrackingSolver::with_random_draw(tetrahedron, pool, PrunedSeed, self.cli.seed)?,
            ),
            SolverChoice::OnlyValid => {
                Box::new(BacktrackingSolver::new(tetrahedron, pool, PrunedSeed)?)
            }
            SolverChoice::NoMatching => {
                let options = if self.cli.random {
                    NoMatchingOptions {
                        position_selection: PositionSelection::Random,
                        tile_selection: TileSelection::Random,
                        rotation_selection: RotationSelection::Random,
                        seed: self.cli.seed,
                    }
                } else {
                    NoMatchingOptions {
                        seed: self.cli.seed,
                        ..NoMatchingOptions::default()
                    }
                };
                Box::new(NoMatchingSolver::new(tetrahedron, pool, options)?)
            }
        })
    }

    // Allow print for the event trace requested by the user
    #[allow(clippy::print_stdout)]
    fn trace(&self, change: &PuzzleChange) {
        if self.cli.trace
            && let Ok(line) = serde_json::to_string(change)
        {
            println!("{line}");
        }
    }

    // Allow print for the user-facing outcome report
    #[allow(clippy::print_stdout)]
    fn report(&self, solver: &dyn Solver, outcome: Option<&PuzzleChange>) {
        match outcome {
            Some(PuzzleChange::Solved) => {
                println!(
                    "Solved {} in {} steps",
                    solver.tetrahedron().name(),
                    solver.steps()
                );
                for change in solver.final_state() {
                    println!("  {change}");
                }
            }
            Some(_) => {
                println!(
                    "Completed {} after {} steps ({})",
                    solver.tetrahedron().name(),
                    solver.steps(),
                    if self.cli.solver == SolverChoice::NoMatching {
                        "all positions filled"
                    } else {
                        "no solution exists"
                    }
                );
            }
            None => {
                println!(
                    "Gave up on {} after {} steps",
                    solver.tetrahedron().name(),
                    solver.steps()
                );
            }
        }
    }
}

fn placed_count(tetrahedron: &Tetrahedron) -> usize {
    tetrahedron.tile_position_count() - tetrahedron.empty_positions().len()
}
