//! Looping carousel controller.
//!
//! The strip renders three concatenated copies of the `N` items. The middle
//! copy is the "home" region: navigation animates away from it freely and a
//! debounced snap-back silently re-bases the offset into it once scrolling
//! settles, so the list appears to wrap forever without the offset growing.
//!
//! The controller owns all mutable carousel state and is driven entirely by
//! its host: a width measurement after layout, scroll reports, and `poll`
//! calls from a frame clock. Every entry point takes the current `Instant`,
//! so nothing here depends on a rendering framework or a real clock.
//!
//! Internally the offset is the position of the focused slot's left edge.
//! When several cards are visible the host viewport leads that position by
//! half the extra cards, so the active card sits in the middle of the view;
//! every offset exchanged with the host is a viewport offset.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::animator::ScrollAnimator;
use super::config::CarouselConfig;

/// Scroll reports within this many pixels of the last emitted animation frame
/// are treated as the host echoing that frame back.
const ECHO_TOLERANCE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    /// Waiting for the first positive width measurement.
    Uninitialized,
    /// Measured and responding to navigation, scroll and autoplay.
    Idle,
    /// Detached from its view; every operation is a no-op.
    Unmounted,
}

#[derive(Debug, Clone)]
pub struct LoopingCarousel {
    len: usize,
    config: CarouselConfig,
    phase: CarouselPhase,
    item_width: f32,
    /// Cards the host viewport shows side by side.
    visible: usize,
    offset: f32,
    active_index: usize,
    hovered: bool,
    focused: bool,
    animator: ScrollAnimator,
    /// Last offset handed to the host while animating.
    last_frame: Option<f32>,
    snap_due: Option<Instant>,
    next_autoplay: Option<Instant>,
}

impl LoopingCarousel {
    /// Number of concatenated copies rendered in the strip.
    pub const COPIES: usize = 3;

    pub fn new(len: usize, mut config: CarouselConfig) -> Self {
        if config.autoplay && config.autoplay_interval.is_zero() {
            debug!("carousel autoplay disabled: zero interval");
            config.autoplay = false;
        }
        Self {
            len,
            config,
            phase: CarouselPhase::Uninitialized,
            item_width: 0.0,
            visible: 1,
            offset: 0.0,
            active_index: 0,
            hovered: false,
            focused: false,
            animator: ScrollAnimator::new(config.animation, config.easing),
            last_frame: None,
            snap_due: None,
            next_autoplay: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// True when the controller ignores every operation: no items, not yet
    /// measured, or unmounted.
    pub fn is_inert(&self) -> bool {
        self.len == 0 || self.phase != CarouselPhase::Idle
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Offset of the focused slot within the strip, in pixels.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Offset the host viewport scrolls to: [`offset`](Self::offset) minus
    /// the lead that centres the focused card.
    pub fn scroll_offset(&self) -> f32 {
        self.offset - self.lead()
    }

    pub fn visible_items(&self) -> usize {
        self.visible
    }

    /// Width of the host viewport, `visible_items() * item_width()`.
    pub fn viewport_width(&self) -> f32 {
        self.visible as f32 * self.item_width
    }

    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    /// Offset at which the middle copy starts (`N * item_width`). This is
    /// also the width of one copy.
    pub fn middle_base(&self) -> f32 {
        self.len as f32 * self.item_width
    }

    /// Number of slots in the rendered strip.
    pub fn slot_count(&self) -> usize {
        self.len * Self::COPIES
    }

    /// Item rendered in a strip slot.
    pub fn item_for_slot(&self, slot: usize) -> Option<usize> {
        (self.len > 0 && slot < self.slot_count()).then(|| slot % self.len)
    }

    /// Whether a slot shows the currently active item.
    pub fn is_active_slot(&self, slot: usize) -> bool {
        self.item_for_slot(slot) == Some(self.active_index)
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    pub fn snap_pending(&self) -> bool {
        self.snap_due.is_some()
    }

    /// Whether the host should poll at frame rate rather than at the idle
    /// cadence.
    pub fn needs_frames(&self) -> bool {
        !self.is_inert() && (self.is_animating() || self.snap_pending())
    }

    pub fn is_paused(&self) -> bool {
        self.hovered || self.focused
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Set how many cards the viewport shows, clamped to `1..=len`.
    ///
    /// Once measured, a change re-centres the active item and returns the
    /// viewport offset the host must apply immediately.
    pub fn set_visible_items(&mut self, visible: usize) -> Option<f32> {
        let visible = visible.clamp(1, self.len.max(1));
        if visible == self.visible || self.phase == CarouselPhase::Unmounted {
            return None;
        }
        self.visible = visible;
        if self.phase != CarouselPhase::Idle {
            return None;
        }
        self.animator.cancel();
        self.last_frame = None;
        self.snap_due = None;
        self.offset = self.slot_offset(self.active_index);
        debug!(visible, offset = self.offset, "carousel viewport resized");
        Some(self.scroll_offset())
    }

    /// Feed a width measurement taken after layout.
    ///
    /// The first positive measurement initializes the controller at the start
    /// of the middle copy. Later measurements (responsive resizes) keep the
    /// active item and re-derive the offset. Returns the offset the host must
    /// apply immediately, without animation.
    pub fn measure(&mut self, item_width: f32, now: Instant) -> Option<f32> {
        if self.len == 0 || self.phase == CarouselPhase::Unmounted {
            return None;
        }
        if !item_width.is_finite() || item_width <= 0.0 {
            trace!(item_width, "ignoring non-positive carousel measurement");
            return None;
        }

        match self.phase {
            CarouselPhase::Uninitialized => {
                self.item_width = item_width;
                self.active_index = 0;
                self.offset = self.middle_base();
                self.phase = CarouselPhase::Idle;
                if self.config.autoplay {
                    self.next_autoplay = Some(now + self.config.autoplay_interval);
                }
                debug!(
                    items = self.len,
                    item_width,
                    offset = self.offset,
                    "carousel initialized"
                );
                Some(self.scroll_offset())
            }
            CarouselPhase::Idle => {
                if (item_width - self.item_width).abs() < 0.5 {
                    return None;
                }
                self.item_width = item_width;
                self.animator.cancel();
                self.last_frame = None;
                self.snap_due = None;
                self.offset = self.slot_offset(self.active_index);
                debug!(item_width, offset = self.offset, "carousel re-measured");
                Some(self.scroll_offset())
            }
            CarouselPhase::Unmounted => None,
        }
    }

    /// Step `step` items forward (positive) or backward (negative).
    ///
    /// The active index updates immediately to the requested item; the
    /// animation toward it is produced by subsequent [`poll`](Self::poll)
    /// calls. Returns the new active index, or `None` when inert.
    pub fn advance(&mut self, step: isize, now: Instant) -> Option<usize> {
        if self.is_inert() {
            return None;
        }
        if step == 0 {
            return Some(self.active_index);
        }

        let n = self.len as isize;
        let next_index = (self.active_index as isize + step).rem_euclid(n) as usize;

        // Consecutive requests accumulate on the pending target rather than
        // on wherever the animation currently is.
        let from = self
            .animator
            .target()
            .unwrap_or_else(|| self.aligned(self.offset));
        let mut target = from + step as f32 * self.item_width;

        if target < self.min_focus_offset() || target > self.max_focus_offset() {
            let shift = self.normalize(from) - from;
            self.offset += shift;
            target += shift;
            trace!(shift, "carousel re-based before stepping off the strip");
        }

        self.animator.start(self.offset, target, now);
        self.last_frame = Some(self.offset);
        self.snap_due = None;
        self.active_index = next_index;
        trace!(step, index = next_index, target, "carousel advance");
        Some(next_index)
    }

    pub fn next(&mut self, now: Instant) -> Option<usize> {
        self.advance(1, now)
    }

    pub fn previous(&mut self, now: Instant) -> Option<usize> {
        self.advance(-1, now)
    }

    /// Navigate to a specific item, moving the shortest way that keeps the
    /// direction of travel (`index - active`).
    pub fn jump_to(&mut self, index: usize, now: Instant) -> Option<usize> {
        if self.is_inert() || index >= self.len {
            return None;
        }
        let delta = index as isize - self.active_index as isize;
        self.advance(delta, now)
    }

    /// Report the viewport's actual scroll offset.
    ///
    /// Reports that echo the animation's own frames only refresh the
    /// snap-back debounce. Anything else is a user scroll: it cancels a
    /// running animation and the active index is recomputed from the offset.
    pub fn on_scroll(&mut self, scroll_offset: f32, now: Instant) {
        if self.is_inert() || !scroll_offset.is_finite() {
            return;
        }
        let offset = scroll_offset + self.lead();

        if self.animator.is_active() {
            let echoed = self
                .last_frame
                .is_some_and(|frame| (frame - offset).abs() <= ECHO_TOLERANCE);
            if echoed {
                self.snap_due = Some(now + self.config.snap_debounce);
                return;
            }
            self.animator.cancel();
            trace!(offset, "user scroll interrupted carousel animation");
        }

        self.offset = offset;
        self.last_frame = None;
        self.active_index = self.index_at(offset);
        self.snap_due = Some(now + self.config.snap_debounce);
    }

    /// Drive time-based work: animation frames, the debounced snap-back and
    /// autoplay. Returns a viewport offset the host must apply immediately.
    pub fn poll(&mut self, now: Instant) -> Option<f32> {
        if self.is_inert() {
            return None;
        }

        let mut applied = None;
        if self.animator.is_active() {
            if let Some(frame) = self.animator.tick(now) {
                self.offset = frame;
                self.last_frame = Some(frame);
                self.snap_due = Some(now + self.config.snap_debounce);
                applied = Some(frame);
            }
        } else if self.snap_due.is_some_and(|due| now >= due) {
            self.snap_due = None;
            applied = self.snap_back();
        }

        self.run_autoplay(now);
        applied.map(|offset| offset - self.lead())
    }

    /// Detach from the view: clears the autoplay schedule and any pending
    /// debounce, and cancels the animation.
    pub fn unmount(&mut self) {
        if self.phase == CarouselPhase::Unmounted {
            return;
        }
        self.phase = CarouselPhase::Unmounted;
        self.animator.cancel();
        self.last_frame = None;
        self.snap_due = None;
        self.next_autoplay = None;
        debug!("carousel unmounted");
    }

    /// Time until the next scheduled autoplay advance, if any.
    pub fn autoplay_due_in(&self, now: Instant) -> Option<Duration> {
        self.next_autoplay
            .map(|next| next.saturating_duration_since(now))
    }

    fn run_autoplay(&mut self, now: Instant) {
        let Some(next) = self.next_autoplay else {
            return;
        };
        if now < next {
            return;
        }

        if self.is_paused() {
            trace!("carousel autoplay tick skipped while paused");
        } else {
            self.advance(1, now);
        }

        let interval = self.config.autoplay_interval;
        let behind = now.saturating_duration_since(next);
        let periods = (behind.as_nanos() / interval.as_nanos()).min(u32::MAX as u128 - 1) as u32 + 1;
        self.next_autoplay = Some(next + interval * periods);
    }

    /// Move an offset that drifted into the first or third copy back into
    /// the middle copy.
    fn snap_back(&mut self) -> Option<f32> {
        let normalized = self.normalize(self.offset);
        if (normalized - self.offset).abs() <= f32::EPSILON {
            return None;
        }
        trace!(from = self.offset, to = normalized, "carousel snap-back");
        self.offset = normalized;
        Some(normalized)
    }

    /// Equivalent offset in `[N * w, 2 * N * w)`.
    fn normalize(&self, offset: f32) -> f32 {
        let base = self.middle_base();
        let normalized = base + (offset - base).rem_euclid(base);
        // rem_euclid can round up to the divisor for tiny negative inputs.
        if normalized >= 2.0 * base { base } else { normalized }
    }

    /// Halfway between two items counts as the later one, in every copy.
    fn index_at(&self, offset: f32) -> usize {
        let steps = ((offset - self.middle_base()) / self.item_width + 0.5).floor() as isize;
        steps.rem_euclid(self.len as isize) as usize
    }

    fn aligned(&self, offset: f32) -> f32 {
        (offset / self.item_width).round() * self.item_width
    }

    fn slot_offset(&self, index: usize) -> f32 {
        self.middle_base() + index as f32 * self.item_width
    }

    /// Distance between the viewport's left edge and the focused slot.
    fn lead(&self) -> f32 {
        (self.visible - 1) as f32 * self.item_width / 2.0
    }

    /// Smallest focus offset whose viewport starts inside the strip.
    fn min_focus_offset(&self) -> f32 {
        self.lead()
    }

    /// Largest focus offset whose viewport still ends inside the strip.
    fn max_focus_offset(&self) -> f32 {
        (self.slot_count() - self.visible) as f32 * self.item_width + self.lead()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(carousel: &mut LoopingCarousel, now: &mut Instant) {
        let step = Duration::from_millis(16);
        for _ in 0..200 {
            *now += step;
            carousel.poll(*now);
            if !carousel.needs_frames() {
                break;
            }
        }
    }

    fn manual(len: usize) -> LoopingCarousel {
        LoopingCarousel::new(len, CarouselConfig::manual())
    }

    #[test]
    fn empty_carousel_is_inert() {
        let now = Instant::now();
        let mut carousel = LoopingCarousel::new(0, CarouselConfig::default());
        assert_eq!(carousel.measure(300.0, now), None);
        assert_eq!(carousel.next(now), None);
        assert_eq!(carousel.poll(now + Duration::from_secs(60)), None);
        assert_eq!(carousel.phase(), CarouselPhase::Uninitialized);
    }

    #[test]
    fn unmeasured_carousel_ignores_operations() {
        let now = Instant::now();
        let mut carousel = manual(4);
        assert_eq!(carousel.measure(0.0, now), None);
        assert_eq!(carousel.measure(f32::NAN, now), None);
        assert_eq!(carousel.next(now), None);
        carousel.on_scroll(500.0, now);
        assert_eq!(carousel.offset(), 0.0);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn measure_places_offset_at_middle_copy() {
        let now = Instant::now();
        let mut carousel = manual(4);
        assert_eq!(carousel.measure(300.0, now), Some(1200.0));
        assert_eq!(carousel.phase(), CarouselPhase::Idle);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn remeasure_keeps_active_item() {
        let mut now = Instant::now();
        let mut carousel = manual(4);
        carousel.measure(300.0, now);
        carousel.next(now);
        carousel.next(now);
        settle(&mut carousel, &mut now);

        assert_eq!(carousel.measure(200.0, now), Some(800.0 + 400.0));
        assert_eq!(carousel.active_index(), 2);
        assert_eq!(carousel.measure(200.2, now), None);
    }

    #[test]
    fn echoed_frames_keep_optimistic_index() {
        let mut now = Instant::now();
        let mut carousel = manual(4);
        carousel.measure(300.0, now);
        carousel.next(now);

        now += Duration::from_millis(16);
        let frame = carousel.poll(now).unwrap();
        carousel.on_scroll(frame, now);

        assert_eq!(carousel.active_index(), 1);
        assert!(carousel.is_animating());
    }

    #[test]
    fn user_scroll_interrupts_animation() {
        let mut now = Instant::now();
        let mut carousel = manual(4);
        carousel.measure(300.0, now);
        carousel.next(now);

        now += Duration::from_millis(16);
        carousel.poll(now);
        carousel.on_scroll(1200.0 + 2.0 * 300.0 + 40.0, now);

        assert!(!carousel.is_animating());
        assert_eq!(carousel.active_index(), 2);
        assert!(carousel.snap_pending());
    }

    #[test]
    fn scroll_into_first_copy_snaps_after_idle() {
        let start = Instant::now();
        let mut carousel = manual(4);
        carousel.measure(300.0, start);

        carousel.on_scroll(200.0, start);
        assert_eq!(carousel.active_index(), 1);

        // Still within the debounce window: nothing happens yet.
        assert_eq!(carousel.poll(start + Duration::from_millis(100)), None);

        assert_eq!(carousel.poll(start + Duration::from_millis(150)), Some(1400.0));
        assert_eq!(carousel.active_index(), 1);
        assert!(!carousel.snap_pending());
    }

    #[test]
    fn hover_pauses_autoplay() {
        let start = Instant::now();
        let config = CarouselConfig {
            autoplay_interval: Duration::from_secs(3),
            ..CarouselConfig::default()
        };
        let mut carousel = LoopingCarousel::new(3, config);
        carousel.measure(100.0, start);

        carousel.set_hovered(true);
        carousel.poll(start + Duration::from_secs(3));
        assert_eq!(carousel.active_index(), 0);

        carousel.set_hovered(false);
        carousel.poll(start + Duration::from_secs(6));
        assert_eq!(carousel.active_index(), 1);
        assert_eq!(
            carousel.autoplay_due_in(start + Duration::from_secs(6)),
            Some(Duration::from_secs(3))
        );
    }

    #[test]
    fn autoplay_catches_up_without_bursting() {
        let start = Instant::now();
        let config = CarouselConfig {
            autoplay_interval: Duration::from_secs(1),
            ..CarouselConfig::default()
        };
        let mut carousel = LoopingCarousel::new(5, config);
        carousel.measure(100.0, start);

        carousel.poll(start + Duration::from_millis(10_500));
        assert_eq!(carousel.active_index(), 1);
        assert_eq!(
            carousel.autoplay_due_in(start + Duration::from_millis(10_500)),
            Some(Duration::from_millis(500))
        );
    }

    #[test]
    fn unmount_clears_timers() {
        let start = Instant::now();
        let mut carousel = LoopingCarousel::new(4, CarouselConfig::default());
        carousel.measure(300.0, start);
        carousel.on_scroll(100.0, start);
        carousel.unmount();

        assert_eq!(carousel.phase(), CarouselPhase::Unmounted);
        assert!(!carousel.snap_pending());
        assert_eq!(carousel.autoplay_due_in(start), None);
        assert_eq!(carousel.poll(start + Duration::from_secs(30)), None);
        assert_eq!(carousel.offset(), 100.0);
        assert_eq!(carousel.measure(300.0, start), None);
    }

    #[test]
    fn visible_items_centre_the_active_card() {
        let now = Instant::now();
        let mut carousel = manual(3);
        assert_eq!(carousel.set_visible_items(3), None);
        assert_eq!(carousel.measure(400.0, now), Some(1200.0 - 400.0));
        assert_eq!(carousel.offset(), 1200.0);
        assert_eq!(carousel.viewport_width(), 1200.0);

        assert_eq!(carousel.set_visible_items(8), None);
        assert_eq!(carousel.set_visible_items(2), Some(1200.0 - 200.0));
        assert_eq!(carousel.set_visible_items(2), None);

        carousel.on_scroll(1000.0 + 400.0, now);
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn jump_to_selects_item() {
        let mut now = Instant::now();
        let mut carousel = manual(5);
        carousel.measure(100.0, now);

        assert_eq!(carousel.jump_to(3, now), Some(3));
        settle(&mut carousel, &mut now);
        assert_eq!(carousel.offset(), 800.0);
        assert_eq!(carousel.jump_to(5, now), None);
    }

    #[test]
    fn slots_map_onto_items() {
        let now = Instant::now();
        let mut carousel = manual(3);
        carousel.measure(10.0, now);
        assert_eq!(carousel.slot_count(), 9);
        assert_eq!(carousel.item_for_slot(7), Some(1));
        assert_eq!(carousel.item_for_slot(9), None);
        assert!(carousel.is_active_slot(3));
        assert!(carousel.is_active_slot(6));
        assert!(!carousel.is_active_slot(4));
    }
}
