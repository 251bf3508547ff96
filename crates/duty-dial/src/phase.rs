//! Time-of-day phase shown on a handle's icon.

use serde::{Deserialize, Serialize};

use crate::interval::Hour;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPhase {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPhase {
    /// Phase for a handle sitting at `hour`.
    ///
    /// Boundary hours belong to the earlier phase: 12 is still morning,
    /// 17 afternoon and 22 evening.
    pub fn of(hour: Hour) -> Self {
        match hour {
            6..=12 => DayPhase::Morning,
            13..=17 => DayPhase::Afternoon,
            18..=22 => DayPhase::Evening,
            _ => DayPhase::Night,
        }
    }
}
