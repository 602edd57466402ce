//! Kintore Data Models
//!
//! HTTP request/response DTOs. Domain types live in the `kintore` crate.

mod workout;

pub use workout::*;
