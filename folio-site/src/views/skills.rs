use folio_core::sections::SkillsSection;
use folio_core::sections::skills::{SKILLS_HEADING, SKILLS_INTRO};
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::theme::{self, FolioTheme};

pub fn view(skills: SkillsSection<'_>, window_width: f32) -> Element<'_, Message> {
    let per_row = folio_core::carousel::Breakpoints::default().items_per_view(window_width);

    let cards = skills
        .cards
        .into_iter()
        .map(|card| {
            let body = column![
                container(text(super::skill_glyph(card.icon())).size(24))
                    .padding(12)
                    .style(theme::Container::Glyph.style()),
                text(card.name()).size(24),
                text(card.skill.description.as_str()).color(FolioTheme::TEXT_SECONDARY),
                row![
                    text(card.project_label()).size(14).color(FolioTheme::TEXT_DIMMED),
                    Space::with_width(Length::Fill),
                    text("Learn More →").size(14),
                ]
                .align_y(Alignment::Center),
            ]
            .spacing(12);

            button(body)
                .padding(24)
                .width(Length::Fill)
                .on_press(Message::Navigate(card.route))
                .style(theme::Button::Card.style())
                .into()
        })
        .collect();

    super::section(column![
        super::section_heading(SKILLS_HEADING, SKILLS_INTRO),
        Space::with_height(48),
        super::grid(cards, per_row),
    ])
}
