use thiserror::Error;

/// Result type alias.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type.
#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum GraphError {
    #[error("Graph has no nodes")]
    EmptyGraph,

    #[error("Graph is not strongly connected")]
    NotStronglyConnected,
}
