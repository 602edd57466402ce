//! WorkoutId - Store-assigned workout identifier

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store when a workout is first persisted.
///
/// Zero means "not yet assigned"; persisted records always carry a positive id.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WorkoutId(pub i64);

impl WorkoutId {
    pub const UNASSIGNED: WorkoutId = WorkoutId(0);

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for WorkoutId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
