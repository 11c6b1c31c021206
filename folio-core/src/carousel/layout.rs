//! Responsive item sizing for the carousel strip.
//!
//! Cards are sized from the measured viewport rather than assumed, so the
//! item width fed to the controller always comes through here.

/// Breakpoints deciding how many cards fit side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    /// Below this width a single card is shown.
    pub medium: f32,
    /// Below this width two cards are shown; at or above it three.
    pub large: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            medium: 768.0,
            large: 1024.0,
        }
    }
}

impl Breakpoints {
    pub fn items_per_view(&self, viewport_width: f32) -> usize {
        if viewport_width < self.medium {
            1
        } else if viewport_width < self.large {
            2
        } else {
            3
        }
    }
}

/// Width of one carousel slot for a viewport, after removing horizontal
/// padding. Returns `0.0` when the viewport has not been laid out yet, which
/// the controller treats as "not measured".
pub fn item_width(viewport_width: f32, horizontal_padding: f32, breakpoints: &Breakpoints) -> f32 {
    if !viewport_width.is_finite() || viewport_width <= 0.0 {
        return 0.0;
    }
    let usable = (viewport_width - 2.0 * horizontal_padding.max(0.0)).max(0.0);
    let per_view = breakpoints.items_per_view(viewport_width) as f32;
    (usable / per_view).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_per_view_follows_breakpoints() {
        let bp = Breakpoints::default();
        assert_eq!(bp.items_per_view(375.0), 1);
        assert_eq!(bp.items_per_view(768.0), 2);
        assert_eq!(bp.items_per_view(1023.0), 2);
        assert_eq!(bp.items_per_view(1280.0), 3);
    }

    #[test]
    fn item_width_splits_usable_space() {
        let bp = Breakpoints::default();
        assert_eq!(item_width(1280.0, 40.0, &bp), 400.0);
        assert_eq!(item_width(600.0, 0.0, &bp), 600.0);
    }

    #[test]
    fn unmeasured_viewport_yields_zero() {
        let bp = Breakpoints::default();
        assert_eq!(item_width(0.0, 16.0, &bp), 0.0);
        assert_eq!(item_width(f32::NAN, 16.0, &bp), 0.0);
        assert_eq!(item_width(20.0, 16.0, &bp), 0.0);
    }
}
