use thiserror::Error;

/// Configuration problems, surfaced immediately to the caller and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An algorithm identifier outside the supported set.
    #[error("unsupported algorithm {0:?}, expected \"UCS\" or \"A*\"")]
    UnknownAlgorithm(String),
}

/// Failures during random world generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    /// More occupied cells were requested than the grid can hold. Checked up
    /// front so the collision-retry sampling loops cannot run forever.
    #[error("insufficient free cells: requested {requested} occupied cells on a grid of {capacity}")]
    InsufficientFreeCells { requested: usize, capacity: usize },
}
