use crate::algorithms::a_star::{AStar, SearchConfig};
use crate::algorithms::bfs::Bfs;
use crate::algorithms::common::PathfindingAlgorithm;
use crate::error::{Error, Result};
use crate::grid::{Grid, GridView, Position};
use crate::statistics::BatchSummary;
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub width: usize,
    pub height: usize,
    pub num_walls: usize,
    pub num_simulations: usize,
    /// Seed of the first run; run `i` uses `seed + i`.
    pub seed: u64,
    pub search: SearchConfig,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            width: 20,
            height: 20,
            num_walls: 50,
            num_simulations: 100,
            seed: 0,
            search: SearchConfig::default(),
            output_file: None,
            quiet: false,
        }
    }
}

/// A reproducible random grid with its endpoints.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub seed: u64,
    pub grid: Grid,
    pub start: Position,
    pub goal: Position,
}

impl Scenario {
    /// Start lands in the top-left quadrant, goal in the bottom-right one, and
    /// neither is ever walled.
    pub fn generate(width: usize, height: usize, num_walls: usize, seed: u64) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut rng = StdRng::seed_from_u64(seed);

        let start = Position::new(
            rng.gen_range(0..(width / 2).max(1)),
            rng.gen_range(0..(height / 2).max(1)),
        );
        let goal = Position::new(
            rng.gen_range(width / 2..width),
            rng.gen_range(height / 2..height),
        );
        let grid = Grid::random(width, height, num_walls, &[start, goal], &mut rng);

        Scenario {
            seed,
            grid,
            start,
            goal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub simulation_id: usize,
    pub seed: u64,
    pub width: usize,
    pub height: usize,
    pub num_walls: usize,
    pub found: bool,
    pub a_star_moves: Option<usize>,
    pub bfs_moves: Option<usize>,
    pub expanded: usize,
    pub execution_time_us: u64,
    pub hit_limit: bool,
}

impl BatchResult {
    /// A* and BFS disagree on whether a path exists or on its length.
    pub fn is_mismatch(&self) -> bool {
        !self.hit_limit && self.a_star_moves != self.bfs_moves
    }
}

/// Runs A* against the BFS reference on a series of seeded random grids.
pub struct BatchSimulation {
    config: BatchConfig,
    results: Vec<BatchResult>,
    summary: BatchSummary,
}

impl BatchSimulation {
    pub fn new(config: BatchConfig) -> Self {
        BatchSimulation {
            config,
            results: Vec::new(),
            summary: BatchSummary::default(),
        }
    }

    pub fn results(&self) -> &[BatchResult] {
        &self.results
    }

    pub fn summary(&self) -> &BatchSummary {
        &self.summary
    }

    pub fn run(&mut self) -> Result<()> {
        let start_time = Instant::now();
        if !self.config.quiet {
            println!("=== BATCH SIMULATION STARTED ===");
            println!("Grid size: {}x{}", self.config.width, self.config.height);
            println!("Walls: {}", self.config.num_walls);
            println!("Simulations: {}", self.config.num_simulations);
            println!("First seed: {}", self.config.seed);
            println!();
        }

        for simulation_id in 0..self.config.num_simulations {
            let seed = self.config.seed.wrapping_add(simulation_id as u64);
            let scenario = Scenario::generate(
                self.config.width,
                self.config.height,
                self.config.num_walls,
                seed,
            );
            let result = self.run_scenario(simulation_id, &scenario)?;

            if result.is_mismatch() {
                error!(
                    "seed {}: A* gave {:?} moves but BFS gave {:?}",
                    seed, result.a_star_moves, result.bfs_moves
                );
            }
            self.summary.record(
                result.a_star_moves,
                result.expanded,
                result.execution_time_us,
                result.is_mismatch(),
            );
            self.results.push(result);
        }

        if let Some(path) = self.config.output_file.clone() {
            let mut out = BufWriter::new(File::create(&path)?);
            self.write_csv(&mut out)?;
            out.flush()?;
            info!("wrote {} results to {}", self.results.len(), path.display());
        }

        if !self.config.quiet {
            println!("\n=== BATCH SIMULATION COMPLETED ===");
            println!("Total time: {:.2?}", start_time.elapsed());
        }
        Ok(())
    }

    fn run_scenario(&self, simulation_id: usize, scenario: &Scenario) -> Result<BatchResult> {
        let astar = AStar::with_config(self.config.search);

        let timer = Instant::now();
        let outcome = astar.search(&scenario.grid, scenario.start, scenario.goal);
        let execution_time_us = timer.elapsed().as_micros() as u64;

        let (a_star_moves, expanded, hit_limit) = match outcome {
            Ok(outcome) => (outcome.result.moves(), outcome.stats.expanded, false),
            Err(Error::IterationLimit { limit }) => {
                warn!("seed {}: A* stopped at {} iterations", scenario.seed, limit);
                (None, limit, true)
            }
            Err(e) => return Err(e),
        };
        let bfs_moves = Bfs::new()
            .find_path(&scenario.grid, scenario.start, scenario.goal)?
            .moves();

        Ok(BatchResult {
            simulation_id,
            seed: scenario.seed,
            width: scenario.grid.width(),
            height: scenario.grid.height(),
            num_walls: scenario.grid.wall_count(),
            found: a_star_moves.is_some(),
            a_star_moves,
            bfs_moves,
            expanded,
            execution_time_us,
            hit_limit,
        })
    }

    pub fn write_csv<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "simulation_id,seed,width,height,num_walls,found,a_star_moves,bfs_moves,expanded,execution_time_us,hit_limit"
        )?;
        for result in &self.results {
            writeln!(
                out,
                "{},{},{},{},{},{},{},{},{},{},{}",
                result.simulation_id,
                result.seed,
                result.width,
                result.height,
                result.num_walls,
                result.found,
                csv_option(result.a_star_moves),
                csv_option(result.bfs_moves),
                result.expanded,
                result.execution_time_us,
                result.hit_limit
            )?;
        }
        Ok(())
    }

    pub fn print_summary(&self) {
        if self.results.is_empty() {
            println!("No results to summarize.");
            return;
        }
        println!("\n=== BATCH SIMULATION SUMMARY ===");
        println!("{}", self.summary);
    }
}

fn csv_option(value: Option<usize>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
