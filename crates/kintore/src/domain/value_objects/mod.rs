//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.
//! Every enum carries a stable integer code used by the persisted row layout.

mod difficulty;
mod exercise_kind;
mod muscle_group;
mod stats_period;
mod workout_id;
mod workout_status;

pub use difficulty::*;
pub use exercise_kind::*;
pub use muscle_group::*;
pub use stats_period::*;
pub use workout_id::*;
pub use workout_status::*;
