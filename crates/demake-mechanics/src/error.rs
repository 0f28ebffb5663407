//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A dice pool size is negative or otherwise unusable.
    #[error("invalid pool: {0}")]
    InvalidPool(String),

    /// A pool formula could not be parsed.
    #[error("invalid formula: {0}")]
    InvalidFormula(String),

    /// A formula referenced a name that is not in the actor's roll data.
    #[error("unknown reference: @{0}")]
    UnknownReference(String),

    /// An item id was not found on the actor.
    #[error("item '{0}' not found")]
    ItemNotFound(String),

    /// An actor snapshot could not be decoded.
    #[error("invalid actor snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
