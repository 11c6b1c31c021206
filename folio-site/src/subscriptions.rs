use std::time::Duration;

use iced::keyboard::{self, Key, key::Named};
use iced::{Subscription, time, window};

use crate::message::{CarouselMessage, Message};
use crate::state::State;

/// Frame period while the carousel is animating or waiting to snap back.
const FRAME: Duration = Duration::from_millis(16);
/// Clock period otherwise; only autoplay needs it.
const IDLE: Duration = Duration::from_millis(100);

pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = vec![
        window::resize_events().map(|(_, size)| Message::WindowResized(size)),
        keyboard::on_key_press(key_binding),
    ];

    if let Some(carousel) = state.carousel.as_ref()
        && !carousel.is_inert()
    {
        let period = if carousel.needs_frames() { FRAME } else { IDLE };
        subscriptions.push(time::every(period).map(Message::Tick));
    }

    Subscription::batch(subscriptions)
}

fn key_binding(key: Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(Message::Carousel(CarouselMessage::Previous)),
        Key::Named(Named::ArrowRight) => Some(Message::Carousel(CarouselMessage::Next)),
        Key::Named(Named::Escape) => Some(Message::Back),
        _ => None,
    }
}
