//! Counter State - Animated statistic counters
//!
//! Ramps every statistic element's displayed value linearly from 0 to its
//! target over a fixed duration, grouping digits the way a locale-aware
//! display would, then snaps to the exact target.
//!
//! The ramp is a pure function of elapsed time, so the terminal value is
//! exact regardless of how often (or how irregularly) the host ticks. The
//! once-per-lifetime guard lives in the synchronizer, not here.

use std::time::{Duration, Instant};

use crate::config::SyncConfig;
use crate::engine::arrays::{core, interaction};
use crate::engine::registry;
use crate::types::ElementRole;

// =============================================================================
// Digit Grouping
// =============================================================================

/// Format a value with comma digit grouping: 1500 -> "1,500".
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

// =============================================================================
// Linear Ramp
// =============================================================================

/// A single counter's linear 0-to-target ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterRamp {
    pub target: u64,
    pub duration: Duration,
}

impl CounterRamp {
    pub fn new(target: u64, duration: Duration) -> Self {
        Self { target, duration }
    }

    /// Value shown after `elapsed`. Intermediate values floor; at or past
    /// the duration the exact target is returned.
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        if elapsed >= self.duration {
            return self.target;
        }
        let fraction = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (self.target as f64 * fraction).floor() as u64
    }

    /// Grouped display string after `elapsed`.
    pub fn display_at(&self, elapsed: Duration) -> String {
        format_grouped(self.value_at(elapsed))
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

// =============================================================================
// Display Advancement
// =============================================================================

/// Write the current ramp frame into every statistic element's display.
///
/// Returns true once every counter has reached its exact target. Safe to
/// call past completion; displays simply stay at the target.
pub fn advance_displays(config: &SyncConfig, started_at: Instant, now: Instant) -> bool {
    let elapsed = now.saturating_duration_since(started_at);
    let duration = Duration::from_millis(config.counter_duration_ms);
    let mut all_complete = true;

    for index in registry::indices_with_role(ElementRole::StatCounter) {
        let ramp = CounterRamp::new(core::get_counter_target(index), duration);
        interaction::set_display(index, ramp.display_at(elapsed));
        all_complete &= ramp.is_complete(elapsed);
    }

    all_complete
}
