//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod dinner_repo;

pub use dinner_repo::DinnerRepo;
