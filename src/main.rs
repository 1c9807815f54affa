use clap::Parser;
use env_logger::Env;

use grid_astar::algorithms::{self, ALGORITHM_NAMES};
use grid_astar::batch::BatchSimulation;
use grid_astar::config::Config;
use grid_astar::map::{TextMap, DEMO_MAP};
use grid_astar::{GridView, Result};
use std::time::Instant;

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    if config.batch_mode {
        let mut batch = BatchSimulation::new(config.batch());
        batch.run()?;
        if !config.quiet {
            batch.print_summary();
        }
        return Ok(());
    }

    let text = match &config.map {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEMO_MAP.to_string(),
    };
    let map = TextMap::parse(&text, &config.legend())?;

    let names: Vec<&str> = if config.algorithm == "all" {
        ALGORITHM_NAMES.to_vec()
    } else {
        vec![config.algorithm.as_str()]
    };

    if !config.quiet {
        println!(
            "Start: {}, Goal: {}, Grid: {}x{}",
            map.start(),
            map.goal(),
            map.grid().width(),
            map.grid().height()
        );
        println!();
    }

    for name in names {
        let mut algorithm = algorithms::create(name, config.search())?;

        let timer = Instant::now();
        let result = algorithm.find_path(map.grid(), map.start(), map.goal())?;
        let elapsed = timer.elapsed();

        println!("=== {} ===", algorithm.name());
        match result.path() {
            Some(path) => {
                println!("Path found: {} moves", path.len() - 1);
                if !config.quiet {
                    for step in path {
                        println!("{} : {}", step.x, step.y);
                    }
                }
                println!("Map looks like:");
                println!("{}", map.render(path));
            }
            None => println!("No path found!"),
        }

        if let Some(stats) = algorithm.stats() {
            if !config.quiet {
                print!("{}", stats);
            }
        }
        println!("Time in find_path: {:.2?}", elapsed);
        println!();
    }

    Ok(())
}
