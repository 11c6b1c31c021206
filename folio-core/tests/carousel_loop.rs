use std::time::{Duration, Instant};

use folio_core::carousel::{CarouselConfig, LoopingCarousel};

const FRAME: Duration = Duration::from_millis(16);

/// Poll until the carousel has no animation or snap pending, echoing every
/// applied offset back as a scroll event like a real host would.
fn settle(carousel: &mut LoopingCarousel, now: &mut Instant) {
    for _ in 0..500 {
        *now += FRAME;
        if let Some(offset) = carousel.poll(*now) {
            carousel.on_scroll(offset, *now);
        }
        if !carousel.needs_frames() {
            return;
        }
    }
    panic!("carousel never settled");
}

fn mounted(len: usize, width: f32, now: Instant) -> LoopingCarousel {
    let mut carousel = LoopingCarousel::new(len, CarouselConfig::manual());
    carousel
        .measure(width, now)
        .expect("first measurement initializes");
    carousel
}

#[test]
fn full_cycles_return_to_the_start_index() {
    for len in 1..=8 {
        for cycles in 1..=3 {
            let mut now = Instant::now();
            let mut carousel = mounted(len, 280.0, now);
            carousel.jump_to(len / 2, now);
            settle(&mut carousel, &mut now);
            let start = carousel.active_index();

            for _ in 0..len * cycles {
                carousel.next(now);
                settle(&mut carousel, &mut now);
            }
            assert_eq!(carousel.active_index(), start, "len {len}, cycles {cycles}");
        }
    }
}

#[test]
fn rapid_cycles_without_settling_still_return_to_start() {
    let mut now = Instant::now();
    let mut carousel = mounted(5, 200.0, now);
    for _ in 0..10 {
        carousel.next(now);
    }
    assert_eq!(carousel.active_index(), 0);
    settle(&mut carousel, &mut now);
    assert_eq!(carousel.active_index(), 0);
    assert_eq!(carousel.offset(), 1000.0);
}

#[test]
fn previous_then_next_restores_the_index() {
    for len in 1..=6 {
        let mut now = Instant::now();
        let mut carousel = mounted(len, 300.0, now);
        for start in 0..len {
            carousel.jump_to(start, now);
            settle(&mut carousel, &mut now);

            carousel.previous(now);
            settle(&mut carousel, &mut now);
            carousel.next(now);
            settle(&mut carousel, &mut now);
            assert_eq!(carousel.active_index(), start);
        }
    }
}

#[test]
fn idle_offset_always_lies_in_the_middle_copy() {
    let mut now = Instant::now();
    let len = 4;
    let width = 300.0;
    let mut carousel = mounted(len, width, now);
    let low = len as f32 * width;
    let high = 2.0 * len as f32 * width;

    let steps: [isize; 10] = [1, 1, -1, -1, -1, -1, -1, 3, -2, 1];
    for step in steps {
        carousel.advance(step, now);
        settle(&mut carousel, &mut now);
        let offset = carousel.offset();
        assert!(
            (low..high).contains(&offset),
            "offset {offset} outside [{low}, {high}) after step {step}"
        );
    }

    // A user drag into the first copy also snaps back once scrolling stops.
    carousel.on_scroll(450.0, now);
    settle(&mut carousel, &mut now);
    assert!((low..high).contains(&carousel.offset()));
    assert_eq!(carousel.offset(), 1650.0);
    assert_eq!(carousel.active_index(), 2);
}

#[test]
fn four_items_three_hundred_wide() {
    let mut now = Instant::now();
    let mut carousel = LoopingCarousel::new(4, CarouselConfig::manual());
    assert_eq!(carousel.measure(300.0, now), Some(1200.0));
    assert_eq!(carousel.active_index(), 0);

    let mut indices = Vec::new();
    let mut peak: f32 = 0.0;
    for _ in 0..4 {
        indices.push(carousel.next(now).expect("measured carousel advances"));
        for _ in 0..500 {
            now += FRAME;
            if let Some(offset) = carousel.poll(now) {
                peak = peak.max(offset);
                carousel.on_scroll(offset, now);
            }
            if !carousel.needs_frames() {
                break;
            }
        }
    }

    assert_eq!(indices, vec![1, 2, 3, 0]);
    assert_eq!(peak, 2400.0);
    assert_eq!(carousel.offset(), 1200.0);
    assert_eq!(carousel.active_index(), 0);
}

#[test]
fn autoplay_advances_until_hovered() {
    let mut now = Instant::now();
    let config = CarouselConfig::featured_defaults();
    let interval = config.autoplay_interval;
    let mut carousel = LoopingCarousel::new(3, config);
    carousel.measure(400.0, now);

    now += interval;
    carousel.poll(now);
    assert_eq!(carousel.active_index(), 1);
    settle(&mut carousel, &mut now);

    carousel.set_hovered(true);
    now += interval * 2;
    carousel.poll(now);
    settle(&mut carousel, &mut now);
    assert_eq!(carousel.active_index(), 1);

    carousel.set_hovered(false);
    now += interval;
    carousel.poll(now);
    assert_eq!(carousel.active_index(), 2);
}

#[test]
fn unmounted_carousel_ignores_everything() {
    let mut now = Instant::now();
    let mut carousel = LoopingCarousel::new(3, CarouselConfig::featured_defaults());
    carousel.measure(400.0, now);
    carousel.next(now);
    carousel.unmount();

    assert!(!carousel.needs_frames());
    assert_eq!(carousel.next(now), None);
    now += Duration::from_secs(30);
    assert_eq!(carousel.poll(now), None);
    assert_eq!(carousel.autoplay_due_in(now), None);
}

#[test]
fn rapid_steps_past_a_wrap_stay_inside_a_three_card_viewport() {
    let len = 3;
    let width = 405.0;
    let mut now = Instant::now();
    let mut carousel = LoopingCarousel::new(len, CarouselConfig::manual());
    carousel.set_visible_items(3);
    assert_eq!(carousel.measure(width, now), Some(3.0 * width - width));

    // Furthest the host can scroll: strip length minus the viewport.
    let max_scroll = (3 * len) as f32 * width - carousel.viewport_width();

    carousel.jump_to(2, now);
    settle(&mut carousel, &mut now);

    let mut applied = Vec::new();
    carousel.next(now);
    for _ in 0..6 {
        now += FRAME;
        if let Some(offset) = carousel.poll(now) {
            applied.push(offset);
            carousel.on_scroll(offset, now);
        }
    }
    carousel.next(now);
    for _ in 0..500 {
        now += FRAME;
        if let Some(offset) = carousel.poll(now) {
            applied.push(offset);
            // A host clamps to its scrollable range before echoing.
            carousel.on_scroll(offset.clamp(0.0, max_scroll), now);
        }
        if !carousel.needs_frames() {
            break;
        }
    }

    assert!(
        applied.iter().all(|offset| (0.0..=max_scroll).contains(offset)),
        "offsets {applied:?} leave [0, {max_scroll}]"
    );
    assert_eq!(carousel.active_index(), 1);
    assert_eq!(carousel.offset(), 4.0 * width);
    assert_eq!(carousel.scroll_offset(), 3.0 * width);
}
