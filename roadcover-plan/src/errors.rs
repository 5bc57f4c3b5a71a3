use thiserror::Error;

use roadcover_graph::GraphError;

/// Result type alias.
pub type Result<T> = std::result::Result<T, PlanError>;

/// Error type.
#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum PlanError {
    #[error("Bad input graph: {0}")]
    Graph(#[from] GraphError),

    #[error("Degree imbalance mismatch: {supply} supply units vs {demand} demand units")]
    ImbalanceMismatch { supply: u32, demand: u32 },

    #[error("No feasible start/end pairing for the imbalanced nodes")]
    NoFeasiblePairing,
}
