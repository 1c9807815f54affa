pub mod a_star;
pub mod bfs;
pub mod common;

use crate::error::{Error, Result};
use a_star::{AStar, SearchConfig};
use bfs::Bfs;
use common::PathfindingAlgorithm;

/// Names accepted by [`create`].
pub const ALGORITHM_NAMES: [&str; 2] = ["a_star", "bfs"];

/// Builds the algorithm registered under `name`.
pub fn create(name: &str, config: SearchConfig) -> Result<Box<dyn PathfindingAlgorithm>> {
    match name {
        "a_star" => Ok(Box::new(AStar::with_config(config))),
        "bfs" => Ok(Box::new(Bfs::new())),
        _ => Err(Error::UnknownAlgorithm {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_is_constructible() {
        for name in ALGORITHM_NAMES {
            let algorithm = create(name, SearchConfig::default()).unwrap();
            assert_eq!(algorithm.name(), name);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(matches!(
            create("d_star", SearchConfig::default()),
            Err(Error::UnknownAlgorithm { .. })
        ));
    }
}
