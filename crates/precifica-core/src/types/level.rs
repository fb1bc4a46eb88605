//! Level - complexity/urgency scale (1-5)
//!
//! Raw input is clamped into range at construction, never rejected. Because
//! every `Level` passes through the clamp, no code path can observe an
//! out-of-range complexity or urgency.

use serde::{Deserialize, Serialize};

use crate::{MAX_SERVICE_LEVEL, MIN_SERVICE_LEVEL};

/// A service level on the 1-5 scale, used for both complexity and urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8")]
pub struct Level(u8);

impl Level {
    /// Lowest level
    pub const MIN: Level = Level(MIN_SERVICE_LEVEL);

    /// Highest level
    pub const MAX: Level = Level(MAX_SERVICE_LEVEL);

    /// Create a level, clamping the raw value into [1, 5]
    pub fn new(raw: u8) -> Self {
        Self(raw.clamp(MIN_SERVICE_LEVEL, MAX_SERVICE_LEVEL))
    }

    /// The clamped level value
    #[inline]
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::MIN
    }
}

impl From<u8> for Level {
    fn from(raw: u8) -> Self {
        Level::new(raw)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
