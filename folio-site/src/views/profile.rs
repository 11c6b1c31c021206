use folio_core::navigation::Route;
use folio_core::sections::ProfileSection;
use folio_core::sections::profile::{RESUME_LABEL, VIEW_WORK_LABEL};
use iced::widget::{Column, Row, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::theme::{self, FolioTheme};

pub fn view(profile: ProfileSection<'_>) -> Element<'_, Message> {
    let initials: String = profile
        .name()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();
    let avatar = container(text(initials).size(48))
        .width(160)
        .height(160)
        .center_x(160)
        .center_y(160)
        .style(theme::Container::ActiveCard.style());

    let badges = Row::with_children(profile.badges().iter().map(|badge| super::chip(badge.as_str())))
        .spacing(12);

    let bio = Column::with_children(profile.bio().iter().enumerate().map(|(index, paragraph)| {
        let color = if index == 0 {
            FolioTheme::TEXT_SECONDARY
        } else {
            FolioTheme::TEXT_DIMMED
        };
        text(paragraph.as_str())
            .size(if index == 0 { 20 } else { 18 })
            .color(color)
            .align_x(Alignment::Center)
            .into()
    }))
    .spacing(16)
    .max_width(800);

    let resume = button(text(RESUME_LABEL))
        .padding([12, 32])
        .on_press_maybe(profile.resume_url().map(|url| Message::CopyLink(url.to_string())))
        .style(theme::Button::Secondary.style());
    let actions = row![
        button(text(VIEW_WORK_LABEL))
            .padding([12, 32])
            .on_press(Message::Navigate(Route::section(profile.primary_target())))
            .style(theme::Button::Primary.style()),
        resume,
    ]
    .spacing(16);

    super::section(
        column![
            avatar,
            text(profile.name()).size(56),
            text(profile.headline()).size(28).color(FolioTheme::ACCENT),
            badges,
            bio,
            actions,
        ]
        .spacing(24)
        .align_x(Alignment::Center)
        .width(Length::Fill),
    )
}
