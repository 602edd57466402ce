//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod postgres;
pub mod tracing_sink;

// Re-exports
pub use postgres::PgWorkoutRepository;
pub use tracing_sink::TracingEventSink;
