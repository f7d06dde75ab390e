use crate::types::DbId;

/// Domain-level errors surfaced by handlers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Not enough records for a sample of {needed}: have {available}")]
    InsufficientData { needed: i64, available: i64 },

    #[error("Internal error: {0}")]
    Internal(String),
}
