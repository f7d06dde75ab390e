//! Request handlers.
//!
//! Handlers delegate to the corresponding repository in `dinnerlog_db`
//! and map errors via [`crate::error::AppError`].

pub mod dinners;
