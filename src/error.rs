//! Error types shared by every layer of the crate.

use thiserror::Error;

/// Main error type for matrix, network and simulation operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A matrix was described with a zero dimension, or with a value count that doesn't fit
    #[error("invalid shape: {rows}x{cols} with {len} values")]
    InvalidShape { rows: usize, cols: usize, len: usize },

    /// Operands of a matrix operation have incompatible shapes
    #[error("dimension mismatch in {op}: {}x{} against {}x{}", left.0, left.1, right.0, right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("invalid topology: every layer needs at least one node (got {input}-{hidden}-{output})")]
    InvalidTopology {
        input: usize,
        hidden: usize,
        output: usize,
    },

    /// Two networks from different lineages were asked to breed
    #[error("topology mismatch: {0} against {1}")]
    TopologyMismatch(String, String),

    #[error("expected {expected} inputs, got {got}")]
    InputLength { expected: usize, got: usize },

    /// Reproduction was asked for children without any parents to draw from
    #[error("too few members to reproduce (wanted to produce {0} from 0)")]
    EmptyPopulation(usize),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("file system error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for pipebird operations.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    #[must_use]
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
