//! File comparison configuration.
//!
//! A value of `0` for any bound disables it. Search memory grows with the
//! square of the edit distance: a trace slot is 8 bytes and an edit distance
//! of `D` needs `(D + 1)(D + 2) / 2` slots, about 61 MiB at the default
//! bound of 4 000. `max_trace_slots` is a hard ceiling that holds even when
//! the edit-distance bound is raised or disabled.

use std::time::Duration;

use diff_engine::{CancellationToken, DiffLimits};
use serde::Deserialize;

/// Settings for the file comparison tool.
#[derive(Debug, Deserialize, Clone)]
pub struct DiffSettings {
    /// Maximum combined line count of both inputs (default: 200 000)
    #[serde(default = "default_max_input_lines")]
    pub max_input_lines: usize,

    /// Maximum edit distance explored before giving up (default: 4 000)
    #[serde(default = "default_max_edit_distance")]
    pub max_edit_distance: usize,

    /// Maximum number of search trace slots (default: 8 388 608, 64 MiB)
    #[serde(default = "default_max_trace_slots")]
    pub max_trace_slots: usize,

    /// Wall-clock budget for one comparison in milliseconds (default: 10 000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Unchanged lines shown around each unified hunk (default: 3)
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,

    /// Colorize terminal output (default: true)
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for DiffSettings {
    fn default() -> Self {
        Self {
            max_input_lines: default_max_input_lines(),
            max_edit_distance: default_max_edit_distance(),
            max_trace_slots: default_max_trace_slots(),
            timeout_ms: default_timeout_ms(),
            context_lines: default_context_lines(),
            color: default_true(),
        }
    }
}

impl DiffSettings {
    /// Engine limits for these settings, with an optional cancellation token.
    #[must_use]
    pub fn limits(&self, cancel: Option<CancellationToken>) -> DiffLimits {
        DiffLimits {
            max_input_len: non_zero(self.max_input_lines),
            max_edit_distance: non_zero(self.max_edit_distance),
            max_trace_slots: non_zero(self.max_trace_slots),
            cancel,
        }
    }

    /// Comparison timeout, or `None` when disabled.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

fn non_zero(value: usize) -> Option<usize> {
    (value > 0).then_some(value)
}

fn default_max_input_lines() -> usize {
    200_000
}

fn default_max_edit_distance() -> usize {
    4_000
}

fn default_max_trace_slots() -> usize {
    8 * 1024 * 1024
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_context_lines() -> usize {
    3
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_map_zero_to_unbounded() {
        let settings = DiffSettings {
            max_input_lines: 0,
            max_edit_distance: 5,
            ..DiffSettings::default()
        };
        let limits = settings.limits(None);
        assert_eq!(limits.max_input_len, None);
        assert_eq!(limits.max_edit_distance, Some(5));
        assert_eq!(limits.max_trace_slots, Some(8 * 1024 * 1024));
        assert!(limits.cancel.is_none());
    }

    #[test]
    fn test_default_bounds_fit_under_slot_ceiling() {
        let settings = DiffSettings::default();
        assert!(diff_engine::trace_slots(settings.max_edit_distance) <= settings.max_trace_slots);
    }

    #[test]
    fn test_timeout_disabled_by_zero() {
        let settings = DiffSettings {
            timeout_ms: 0,
            ..DiffSettings::default()
        };
        assert_eq!(settings.timeout(), None);
    }
}
