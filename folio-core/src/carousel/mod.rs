//! Infinite-loop carousel for featured items.
//!
//! This module keeps the carousel free of any rendering framework: the state
//! machine lives in [`LoopingCarousel`], time-based motion in
//! [`ScrollAnimator`], and responsive sizing in [`layout`]. A host renders
//! `slot_count()` cards, applies the offsets the controller returns, and
//! reports scroll positions back.

pub mod animator;
pub mod config;
pub mod controller;
pub mod layout;

pub use animator::{Easing, ScrollAnimator};
pub use config::CarouselConfig;
pub use controller::{CarouselPhase, LoopingCarousel};
pub use layout::Breakpoints;
