pub mod carousel;
pub mod contact;
pub mod content;
pub mod header;
pub mod home;
pub mod profile;
pub mod projects;
pub mod skill_page;
pub mod skills;

use folio_model::{Profile, SkillIcon};
use iced::widget::{Column, Row, column, container, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::theme::{self, FolioTheme};

/// Page content never grows wider than this.
pub const MAX_CONTENT_WIDTH: f32 = 1200.0;

/// Centered heading plus intro paragraph opening a section.
pub fn section_heading<'a>(title: &'a str, intro: &'a str) -> Element<'a, Message> {
    column![
        text(title).size(40).color(FolioTheme::TEXT_PRIMARY),
        text(intro)
            .size(18)
            .color(FolioTheme::TEXT_SECONDARY)
            .align_x(Alignment::Center),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

/// Wrap a section body with the page gutters.
pub fn section<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(
        container(content)
            .max_width(MAX_CONTENT_WIDTH)
            .width(Length::Fill),
    )
    .padding([64, 32])
    .center_x(Length::Fill)
    .into()
}

pub fn chip<'a>(label: impl text::IntoFragment<'a>) -> Element<'a, Message> {
    container(text(label).size(13))
        .padding([4, 12])
        .style(theme::Container::Chip.style())
        .into()
}

/// Lay `items` out in rows of `per_row`.
pub fn grid<'a>(items: Vec<Element<'a, Message>>, per_row: usize) -> Element<'a, Message> {
    let per_row = per_row.max(1);
    let mut rows = Vec::new();
    let mut items = items.into_iter().peekable();
    while items.peek().is_some() {
        let cells: Vec<Element<'a, Message>> = items
            .by_ref()
            .take(per_row)
            .map(|item| container(item).width(Length::FillPortion(1)).into())
            .collect();
        let padding = per_row - cells.len();
        let mut row = Row::with_children(cells).spacing(24);
        for _ in 0..padding {
            row = row.push(iced::widget::Space::with_width(Length::FillPortion(1)));
        }
        rows.push(row.into());
    }
    Column::with_children(rows).spacing(24).into()
}

pub fn skill_glyph(icon: SkillIcon) -> &'static str {
    match icon {
        SkillIcon::Cloud => "☁",
        SkillIcon::Terminal => ">_",
        SkillIcon::Settings => "⚙",
        SkillIcon::Container => "▣",
        SkillIcon::Code => "</>",
        SkillIcon::Coffee => "☕",
        SkillIcon::Database => "◫",
    }
}

pub fn footer(profile: &Profile) -> Element<'_, Message> {
    container(
        text(format!("© {} · {}", profile.name, profile.headline))
            .size(13)
            .color(FolioTheme::TEXT_DIMMED),
    )
    .padding(24)
    .center_x(Length::Fill)
    .into()
}
