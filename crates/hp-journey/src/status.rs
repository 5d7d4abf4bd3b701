//! Urgency classification for outstanding passes.

use std::fmt;

use hp_core::Timestamp;

/// Passes with less than this many milliseconds left are flagged.
pub const WARNING_WINDOW_MS: i64 = 30_000;

/// Display urgency of a pass.
///
/// Variants are ordered from most to least urgent so sorting by status puts
/// overdue passes first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PassStatus {
    Overdue,
    Warning,
    OnTime,
}

impl PassStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PassStatus::OnTime  => "on-time",
            PassStatus::Warning => "warning",
            PassStatus::Overdue => "overdue",
        }
    }
}

impl fmt::Display for PassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a pass due at `expected_return` as seen at `now`.
pub fn classify(expected_return: Timestamp, now: Timestamp) -> PassStatus {
    let remaining = expected_return - now;
    if remaining <= 0 {
        PassStatus::Overdue
    } else if remaining < WARNING_WINDOW_MS {
        PassStatus::Warning
    } else {
        PassStatus::OnTime
    }
}

/// Human-readable countdown: `"1m 5s"`, `"42s"`, or `"Overdue"`.
pub fn format_time_remaining(remaining_ms: i64) -> String {
    if remaining_ms <= 0 {
        return "Overdue".to_string();
    }
    let secs = remaining_ms / 1_000;
    let (minutes, seconds) = (secs / 60, secs % 60);
    if minutes == 0 {
        format!("{seconds}s")
    } else {
        format!("{minutes}m {seconds}s")
    }
}
