use crate::grid::Position;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{position} lies outside the {width}x{height} grid")]
    InvalidInput {
        position: Position,
        width: usize,
        height: usize,
    },
    #[error("Search gave up after {limit} iterations")]
    IterationLimit { limit: usize },
    #[error("Map contains no rows")]
    EmptyMap,
    #[error("Map has no '{marker}' marker")]
    MissingMarker { marker: char },
    #[error("Map marker '{marker}' appears at both {first} and {second}")]
    DuplicateMarker {
        marker: char,
        first: Position,
        second: Position,
    },
    #[error("Unknown algorithm '{name}', select 'a_star', 'bfs', or 'all'")]
    UnknownAlgorithm { name: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
