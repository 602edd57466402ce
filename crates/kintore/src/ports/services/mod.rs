//! Service Ports
//!
//! Interfaces for collaborators that are not storage.

mod event_sink;

pub use event_sink::*;
