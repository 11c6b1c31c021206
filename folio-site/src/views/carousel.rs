//! Featured-project strip driven by [`LoopingCarousel`].

use folio_core::carousel::{CarouselPhase, LoopingCarousel};
use folio_model::Project;
use iced::widget::{Row, Space, button, column, container, mouse_area, row, scrollable, text};
use iced::{Alignment, Element, Length};

use super::projects::featured_card;
use crate::message::{CarouselMessage, Message};
use crate::state::State;
use crate::theme::{self, FolioTheme};

const STRIP_HEIGHT: f32 = 360.0;

pub fn view<'a>(state: &'a State, projects: &[&'a Project]) -> Element<'a, Message> {
    let Some(carousel) = state.carousel.as_ref() else {
        return Space::with_height(0).into();
    };
    if projects.is_empty() {
        return Space::with_height(0).into();
    }

    let strip = if carousel.phase() == CarouselPhase::Idle {
        looping_strip(state, carousel, projects)
    } else {
        // Not measured yet: a static single copy.
        Row::with_children(
            projects
                .iter()
                .map(|&project| {
                    container(featured_card(project, false))
                        .width(Length::FillPortion(1))
                        .into()
                }),
        )
        .spacing(16)
        .height(STRIP_HEIGHT)
        .into()
    };

    let hoverable = mouse_area(strip)
        .on_enter(Message::Carousel(CarouselMessage::Hovered(true)))
        .on_exit(Message::Carousel(CarouselMessage::Hovered(false)));

    column![hoverable, controls(carousel)]
        .spacing(16)
        .width(Length::Fill)
        .into()
}

fn looping_strip<'a>(
    state: &'a State,
    carousel: &LoopingCarousel,
    projects: &[&'a Project],
) -> Element<'a, Message> {
    let width = carousel.item_width();
    let slots = (0..carousel.slot_count()).filter_map(|slot| {
        let project = *projects.get(carousel.item_for_slot(slot)?)?;
        let card = featured_card(project, carousel.is_active_slot(slot));
        Some(container(card).padding([0, 8]).width(Length::Fixed(width)).into())
    });

    // The controller's offsets assume the viewport is exactly this wide.
    let strip = scrollable(Row::with_children(slots))
        .id(state.carousel_id.clone())
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0).scroller_width(0),
        ))
        .on_scroll(|viewport| Message::Carousel(CarouselMessage::Scrolled(viewport)))
        .width(Length::Fixed(carousel.viewport_width()))
        .height(STRIP_HEIGHT);

    container(strip).center_x(Length::Fill).into()
}

fn controls(carousel: &LoopingCarousel) -> Element<'static, Message> {
    let arrow = |label: &'static str, message: CarouselMessage| {
        button(text(label).size(18))
            .padding([6, 14])
            .on_press(Message::Carousel(message))
            .style(theme::Button::Secondary.style())
    };

    let dots = Row::with_children((0..carousel.len()).map(|index| {
        let active = index == carousel.active_index();
        button(
            text(if active { "●" } else { "○" })
                .size(14)
                .color(if active {
                    FolioTheme::TEXT_PRIMARY
                } else {
                    FolioTheme::TEXT_DIMMED
                }),
        )
        .padding([2, 4])
        .on_press(Message::Carousel(CarouselMessage::JumpTo(index)))
        .style(theme::Button::Link.style())
        .into()
    }))
    .spacing(4)
    .align_y(Alignment::Center);

    row![
        arrow("‹", CarouselMessage::Previous),
        Space::with_width(Length::Fill),
        dots,
        Space::with_width(Length::Fill),
        arrow("›", CarouselMessage::Next),
    ]
    .align_y(Alignment::Center)
    .width(Length::Fill)
    .into()
}
