use std::time::Duration;

use folio_core::carousel::{CarouselConfig, Easing};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// `[carousel]` table. Durations are in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Advance the featured strip on a timer while it is not hovered.
    pub autoplay: bool,
    pub autoplay_interval_ms: u64,
    /// Quiet time after the last scroll before the strip snaps back into
    /// its middle copy.
    pub snap_debounce_ms: u64,
    /// Length of one animated step.
    pub animation_ms: u64,
    pub easing: Easing,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        let defaults = CarouselConfig::featured_defaults();
        Self {
            autoplay: defaults.autoplay,
            autoplay_interval_ms: millis(defaults.autoplay_interval),
            snap_debounce_ms: millis(defaults.snap_debounce),
            animation_ms: millis(defaults.animation),
            easing: defaults.easing,
        }
    }
}

fn millis(duration: Duration) -> u64 {
    duration.as_millis() as u64
}

impl CarouselSettings {
    pub fn to_config(&self) -> Result<CarouselConfig, ConfigError> {
        if self.autoplay && self.autoplay_interval_ms == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "autoplay_interval_ms",
            });
        }
        if self.snap_debounce_ms == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "snap_debounce_ms",
            });
        }
        if self.animation_ms == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "animation_ms",
            });
        }

        Ok(CarouselConfig {
            autoplay: self.autoplay,
            autoplay_interval: Duration::from_millis(self.autoplay_interval_ms),
            snap_debounce: Duration::from_millis(self.snap_debounce_ms),
            animation: Duration::from_millis(self.animation_ms),
            easing: self.easing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_core_defaults() {
        let config = CarouselSettings::default().to_config().unwrap();
        assert_eq!(config, CarouselConfig::featured_defaults());
    }

    #[test]
    fn zero_durations_are_rejected() {
        let settings = CarouselSettings {
            snap_debounce_ms: 0,
            ..CarouselSettings::default()
        };
        assert_eq!(
            settings.to_config(),
            Err(ConfigError::ZeroDuration {
                field: "snap_debounce_ms"
            })
        );

        let manual = CarouselSettings {
            autoplay: false,
            autoplay_interval_ms: 0,
            ..CarouselSettings::default()
        };
        assert!(manual.to_config().is_ok());
    }
}
