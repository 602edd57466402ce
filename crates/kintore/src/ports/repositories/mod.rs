//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod workout_repository;

pub use workout_repository::*;
