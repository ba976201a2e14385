//! Engine configuration.
//!
//! Every tuning constant the page behavior depends on lives here, with
//! defaults reproducing the shipped site exactly. Hosts that want different
//! thresholds deserialize their own `SyncConfig`; everyone else takes
//! `SyncConfig::default()`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tuning constants for the scroll-state synchronizer and its peripherals.
///
/// All pixel values are CSS pixels, all durations are milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Scroll offset beyond which the header is elevated. Exclusive:
    /// at exactly this offset the header stays flat.
    pub elevation_threshold: f32,

    /// Extra margin subtracted from a section's top when deciding which
    /// section is current, so the highlight switches slightly early.
    pub section_lookahead: f32,

    /// Distance from the viewport bottom at which an element counts as
    /// having entered the viewport.
    pub reveal_margin: f32,

    /// Parallax speed for the first floating card.
    pub parallax_base: f32,

    /// Additional parallax speed per floating-card position.
    pub parallax_step: f32,

    /// Total counter ramp duration.
    pub counter_duration_ms: u64,

    /// Nominal frame interval for the counter ramp (display granularity
    /// only; the ramp itself is a pure function of elapsed time).
    pub counter_frame_ms: u64,

    /// Delay between the trigger (load or hero visible) and the first
    /// counter frame.
    pub counter_start_delay_ms: u64,

    /// How long a ripple lives before it removes itself.
    pub ripple_lifetime_ms: u64,

    /// Delay before a portal click surfaces its placeholder notice.
    pub notice_delay_ms: u64,

    /// Delay after mount before the page-wide loaded state turns on.
    pub loaded_delay_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            elevation_threshold: 50.0,
            section_lookahead: 100.0,
            reveal_margin: 100.0,
            parallax_base: 0.1,
            parallax_step: 0.05,
            counter_duration_ms: 2000,
            counter_frame_ms: 16,
            counter_start_delay_ms: 500,
            ripple_lifetime_ms: 600,
            notice_delay_ms: 300,
            loaded_delay_ms: 100,
        }
    }
}

impl SyncConfig {
    /// Validate the configuration at the mount boundary.
    ///
    /// Runtime lookups never fail (missing elements are silent no-ops),
    /// so this is the one place a host mistake surfaces as an error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("elevation_threshold", self.elevation_threshold),
            ("section_lookahead", self.section_lookahead),
            ("reveal_margin", self.reveal_margin),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidThreshold { field });
            }
        }
        for (field, value) in [
            ("parallax_base", self.parallax_base),
            ("parallax_step", self.parallax_step),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidSpeed { field });
            }
        }
        for (field, value) in [
            ("counter_duration_ms", self.counter_duration_ms),
            ("counter_frame_ms", self.counter_frame_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroDuration { field });
            }
        }
        Ok(())
    }
}

/// Capabilities the host environment reports at mount.
///
/// Drives the polling-vs-observer selection for viewport visibility.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HostCapabilities {
    /// Host can deliver element-entered-viewport notifications itself.
    pub intersection_observer: bool,
}

/// Configuration rejected at the mount boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A duration that divides or paces time cannot be zero.
    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },

    /// Pixel thresholds must be finite.
    #[error("{field} must be a finite number of pixels")]
    InvalidThreshold { field: &'static str },

    /// Parallax speeds must be finite.
    #[error("{field} must be a finite speed factor")]
    InvalidSpeed { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(SyncConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_matches_shipped_site() {
        let config = SyncConfig::default();
        assert_eq!(config.elevation_threshold, 50.0);
        assert_eq!(config.section_lookahead, 100.0);
        assert_eq!(config.reveal_margin, 100.0);
        assert_eq!(config.counter_duration_ms, 2000);
        assert_eq!(config.counter_start_delay_ms, 500);
        assert_eq!(config.ripple_lifetime_ms, 600);
        assert_eq!(config.notice_delay_ms, 300);
    }

    #[test]
    fn test_zero_counter_duration_rejected() {
        let config = SyncConfig {
            counter_duration_ms: 0,
            ..SyncConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDuration {
                field: "counter_duration_ms"
            })
        );
    }

    #[test]
    fn test_non_finite_threshold_rejected() {
        let config = SyncConfig {
            elevation_threshold: f32::NAN,
            ..SyncConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidThreshold {
                field: "elevation_threshold"
            })
        );
    }

    #[test]
    fn test_config_round_trips_through_serde() {
        let config = SyncConfig {
            elevation_threshold: 64.0,
            ..SyncConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SyncConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: SyncConfig = serde_json::from_str(r#"{"reveal_margin": 40.0}"#).unwrap();
        assert_eq!(config.reveal_margin, 40.0);
        assert_eq!(config.elevation_threshold, 50.0);
    }
}
