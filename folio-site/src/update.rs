use std::time::Instant;

use folio_core::navigation::Route;
use folio_core::sections::SectionId;
use iced::Task;
use iced::widget::scrollable::{self, AbsoluteOffset, RelativeOffset};

use crate::message::{BookingMessage, CarouselMessage, ContactMessage, Message};
use crate::state::{Notice, State};

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::Navigate(route) => {
            state.shell.navigate_to(route);
            after_navigation(state)
        }
        Message::Back => {
            if state.shell.back() {
                after_navigation(state)
            } else {
                Task::none()
            }
        }
        Message::Tick(now) => {
            let offset = state.carousel.as_mut().and_then(|carousel| carousel.poll(now));
            scroll_carousel(state, offset)
        }
        Message::WindowResized(size) => {
            state.window_size = size;
            let offset = state.measure_carousel(Instant::now());
            scroll_carousel(state, offset)
        }
        Message::Carousel(message) => update_carousel(state, message),
        Message::ContentTabSelected(tab) => {
            state.content_tab = tab;
            Task::none()
        }
        Message::Contact(ContactMessage::Edited(field, value)) => {
            state.contact.set_field(field, value);
            Task::none()
        }
        Message::Contact(ContactMessage::Submit) => {
            match state.contact.submit() {
                Ok(confirmation) => show_notice(state, confirmation.message),
                Err(errors) => log::debug!("contact form has {} invalid fields", errors.len()),
            }
            Task::none()
        }
        Message::Booking(BookingMessage::Edited(field, value)) => {
            state.booking.set_field(field, value, state.catalog.booking());
            Task::none()
        }
        Message::Booking(BookingMessage::Submit) => {
            match state.booking.submit(state.catalog.booking()) {
                Ok(confirmation) => show_notice(state, confirmation.message),
                Err(errors) => log::debug!("booking form has {} invalid fields", errors.len()),
            }
            Task::none()
        }
        Message::CopyLink(url) => {
            show_notice(state, &format!("Link copied: {url}"));
            iced::clipboard::write(url)
        }
        Message::DismissNotice => {
            state.notice = None;
            Task::none()
        }
    }
}

fn update_carousel(state: &mut State, message: CarouselMessage) -> Task<Message> {
    let Some(carousel) = state.carousel.as_mut() else {
        return Task::none();
    };
    let now = Instant::now();
    match message {
        CarouselMessage::Previous => {
            carousel.previous(now);
        }
        CarouselMessage::Next => {
            carousel.next(now);
        }
        CarouselMessage::JumpTo(index) => {
            carousel.jump_to(index, now);
        }
        CarouselMessage::Scrolled(viewport) => {
            carousel.on_scroll(viewport.absolute_offset().x, now);
        }
        CarouselMessage::Hovered(hovered) => carousel.set_hovered(hovered),
    }
    Task::none()
}

pub(crate) fn after_navigation(state: &mut State) -> Task<Message> {
    log::debug!("showing {}", state.shell.current());
    let carousel_offset = state.sync_carousel(Instant::now());

    let page = match state.shell.current() {
        Route::Home {
            anchor: Some(section),
        } => section_offset(*section),
        _ => RelativeOffset::START,
    };

    Task::batch([
        scrollable::snap_to(state.page_id.clone(), page),
        scroll_carousel(state, carousel_offset),
    ])
}

/// Approximate vertical position of a home section.
fn section_offset(section: SectionId) -> RelativeOffset {
    let last = (SectionId::ORDER.len() - 1) as f32;
    let index = SectionId::ORDER
        .iter()
        .position(|candidate| *candidate == section)
        .unwrap_or_default();
    RelativeOffset {
        x: 0.0,
        y: index as f32 / last,
    }
}

fn scroll_carousel(state: &State, offset: Option<f32>) -> Task<Message> {
    match offset {
        Some(x) => scrollable::scroll_to(state.carousel_id.clone(), AbsoluteOffset { x, y: 0.0 }),
        None => Task::none(),
    }
}

fn show_notice(state: &mut State, text: &str) {
    log::info!("{text}");
    state.notice = Some(Notice {
        text: text.to_string(),
    });
}
