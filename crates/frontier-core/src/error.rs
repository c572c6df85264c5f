use thiserror::Error;

/// Errors raised while building graphs or starting a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Start vertex is not a vertex of the graph.
    #[error("start vertex {start} out of range: graph has {vertex_count} vertices")]
    StartOutOfRange { start: usize, vertex_count: usize },

    /// The visited set was sized for a different graph.
    #[error("visited set tracks {actual} vertices, graph has {expected}")]
    VisitedSizeMismatch { expected: usize, actual: usize },

    /// A matrix row has the wrong length.
    #[error("matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Entries must be 0 or 1.
    #[error("entry ({row}, {col}) is {value}, expected 0 or 1")]
    NonBinaryEntry { row: usize, col: usize, value: u8 },

    #[error("self-loop at vertex {0}")]
    SelfLoop(usize),

    /// The matrix does not describe an undirected graph.
    #[error("matrix is not symmetric at ({row}, {col})")]
    Asymmetric { row: usize, col: usize },

    #[error("vertex count must be between 1 and {max}, got {requested}")]
    InvalidVertexCount { requested: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;
