use crate::algorithms::a_star::SearchConfig;
use crate::batch::BatchConfig;
use crate::map::MapLegend;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Shortest paths on grid maps with A*", long_about = None)]
pub struct Config {
    /// Text map to solve; the built-in demo map is used when omitted
    #[arg(long)]
    pub map: Option<PathBuf>,

    #[arg(long, default_value_t = 'A')]
    pub start_marker: char,

    #[arg(long, default_value_t = 'B')]
    pub goal_marker: char,

    /// Characters that count as open floor; everything else is a wall
    #[arg(long, default_value = " ")]
    pub open_chars: String,

    #[arg(long, default_value_t = '*')]
    pub path_char: char,

    /// a_star, bfs, or all
    #[arg(long, default_value = "a_star")]
    pub algorithm: String,

    /// Give up after expanding this many nodes
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Compare A* with BFS on random grids instead of solving a map
    #[arg(long, default_value_t = false)]
    pub batch_mode: bool,

    #[arg(long, default_value_t = 100)]
    pub num_simulations: usize,

    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,

    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(1..))]
    pub height: u16,

    #[arg(long, default_value_t = 50)]
    pub num_walls: usize,

    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    #[arg(long, default_value = "batch_results.csv")]
    pub output_file: PathBuf,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

impl Config {
    pub fn legend(&self) -> MapLegend {
        MapLegend {
            start: self.start_marker,
            goal: self.goal_marker,
            open: self.open_chars.clone(),
            path: self.path_char,
        }
    }

    pub fn search(&self) -> SearchConfig {
        SearchConfig {
            max_iterations: self.max_iterations,
        }
    }

    pub fn batch(&self) -> BatchConfig {
        BatchConfig {
            width: self.width as usize,
            height: self.height as usize,
            num_walls: self.num_walls,
            num_simulations: self.num_simulations,
            seed: self.seed,
            search: self.search(),
            output_file: Some(self.output_file.clone()),
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_legend() {
        let config = Config::parse_from(["grid_astar"]);
        assert_eq!(config.legend(), MapLegend::default());
        assert_eq!(config.search(), SearchConfig::default());
        assert_eq!(config.algorithm, "a_star");
        assert!(!config.batch_mode);
    }

    #[test]
    fn flags_flow_into_library_configs() {
        let config = Config::parse_from([
            "grid_astar",
            "--batch-mode",
            "--width",
            "8",
            "--height",
            "6",
            "--seed",
            "3",
            "--max-iterations",
            "50",
            "--open-chars",
            ".",
        ]);
        let batch = config.batch();
        assert_eq!((batch.width, batch.height, batch.seed), (8, 6, 3));
        assert_eq!(batch.search.max_iterations, Some(50));
        assert_eq!(config.legend().open, ".");
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(Config::try_parse_from(["grid_astar", "--width", "0"]).is_err());
    }
}
