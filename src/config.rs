//! Runtime configuration for calendar rendering.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Calendar grid configuration.
///
/// # Examples
///
/// ```
/// use caseboard::config::CalendarConfig;
/// use chrono::Weekday;
///
/// let config = CalendarConfig::default();
/// assert_eq!(config.display_cap, 3);
/// assert_eq!(config.week_start, Weekday::Sun);
///
/// let iso = CalendarConfig::monday_first();
/// assert_eq!(iso.week_start, Weekday::Mon);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Maximum number of events shown per day cell. Further events are
    /// summarised by a remainder count and stay reachable in full.
    pub display_cap: usize,
    /// Weekday occupying the first grid column.
    pub week_start: Weekday,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            display_cap: 3,
            week_start: Weekday::Sun,
        }
    }
}

impl CalendarConfig {
    /// Creates a configuration whose weeks start on Monday.
    #[must_use]
    pub fn monday_first() -> Self {
        Self {
            week_start: Weekday::Mon,
            ..Default::default()
        }
    }

    /// Replaces the per-day display cap.
    #[must_use]
    pub const fn with_display_cap(mut self, display_cap: usize) -> Self {
        self.display_cap = display_cap;
        self
    }
}
