use std::time::Instant;

use folio_core::forms::{BookingField, ContactField};
use folio_core::navigation::Route;
use folio_core::sections::ContentTab;
use iced::Size;
use iced::widget::scrollable::Viewport;

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    Back,
    /// Frame clock. Drives the carousel's animation, snap-back and autoplay.
    Tick(Instant),
    WindowResized(Size),
    Carousel(CarouselMessage),
    ContentTabSelected(ContentTab),
    Contact(ContactMessage),
    Booking(BookingMessage),
    CopyLink(String),
    DismissNotice,
}

#[derive(Debug, Clone)]
pub enum CarouselMessage {
    Previous,
    Next,
    JumpTo(usize),
    Scrolled(Viewport),
    Hovered(bool),
}

#[derive(Debug, Clone)]
pub enum ContactMessage {
    Edited(ContactField, String),
    Submit,
}

#[derive(Debug, Clone)]
pub enum BookingMessage {
    Edited(BookingField, String),
    Submit,
}
