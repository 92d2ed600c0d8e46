use thiserror::Error;

/// Top-level error type for the archtopo kernel.
#[derive(Debug, Error)]
pub enum ArchError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
}

/// Errors related to room and layer topology.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("no room record for {0}")]
    MissingRoomInfo(String),

    #[error("layer info accessed before init()")]
    NotInitialized,
}

/// Errors related to operations on valid input.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`ArchError`].
pub type Result<T> = std::result::Result<T, ArchError>;
