//! Shared domain primitives for the dinnerlog service.
//!
//! Holds the types and error enum used by both the data layer
//! (`dinnerlog-db`) and the HTTP layer (`dinnerlog-api`).

pub mod error;
pub mod types;
