/// Everything that can abort an analysis run.
///
/// None of these are recoverable: either the input graph is ill-formed or one of
/// the traversals broke its own bookkeeping.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange { vertex: usize, vertex_count: usize },

    #[error("adjacency has {found} rows for a graph with {expected} vertices")]
    RowCount { expected: usize, found: usize },

    #[error("cannot allocate a graph with {vertex_count} vertices")]
    TooLarge { vertex_count: usize },

    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    #[error("adjacency is not symmetric: {from} lists {to} more often than {to} lists {from}")]
    Asymmetric { from: usize, to: usize },

    #[error("self-loop at vertex {0}")]
    SelfLoop(usize),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        Error::InvariantViolation(message.into())
    }
}

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
