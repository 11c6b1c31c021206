//! Tuning knobs for the looping carousel.

use std::time::Duration;

use super::animator::Easing;

/// Static configuration for a carousel instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Whether the carousel advances on its own.
    pub autoplay: bool,
    /// Period between autoplay advances.
    pub autoplay_interval: Duration,
    /// Idle time after the last scroll event before the offset is snapped
    /// back into the middle copy.
    pub snap_debounce: Duration,
    /// Duration of an animated step between items.
    pub animation: Duration,
    pub easing: Easing,
}

impl CarouselConfig {
    pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(4_000);
    pub const DEFAULT_SNAP_DEBOUNCE: Duration = Duration::from_millis(150);
    pub const DEFAULT_ANIMATION: Duration = Duration::from_millis(450);

    /// Defaults for the featured projects strip.
    pub const fn featured_defaults() -> Self {
        Self {
            autoplay: true,
            autoplay_interval: Self::DEFAULT_AUTOPLAY_INTERVAL,
            snap_debounce: Self::DEFAULT_SNAP_DEBOUNCE,
            animation: Self::DEFAULT_ANIMATION,
            easing: Easing::EaseOut,
        }
    }

    /// Same as the defaults with autoplay switched off.
    pub const fn manual() -> Self {
        let mut config = Self::featured_defaults();
        config.autoplay = false;
        config
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::featured_defaults()
    }
}
