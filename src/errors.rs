use thiserror::Error;


/// Errors raised by graph construction and search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {0} is not registered in the graph")]
    InvalidReference(String), // Edge or search endpoint was never added

    #[error("node {0} is already registered in the graph")]
    DuplicateNode(String),

    #[error("edge weight {0} is negative")]
    NegativeWeight(String),

    #[error("edge weight {0} is not comparable")]
    InvalidWeight(String), // NaN and friends

    #[error("dequeue called on an empty priority queue")]
    EmptyQueueAccess,

    #[error("search was cancelled")]
    Cancelled,

    #[error("path cost overflows: {0}")]
    CostOverflow(String),

    #[error("no edge connects {0}")]
    DisconnectedPath(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
