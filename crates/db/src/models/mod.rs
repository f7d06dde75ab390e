//! Model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` row struct matching the database row
//! - A wire-shaped entity struct for API responses
//! - A `Deserialize` input DTO for request bodies

pub mod dinner;
