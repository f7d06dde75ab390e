//! Shared response types for API handlers.

use serde::Serialize;

/// Standard `{ "message": ... }` confirmation payload, used where an
/// endpoint has no entity to return (e.g. delete confirmations).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
