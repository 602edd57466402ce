//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems (storage, observability).
//!
//! Implementations of these traits live in the adapter layers.

pub mod repositories;
pub mod services;

// Re-exports
pub use repositories::*;
pub use services::*;
