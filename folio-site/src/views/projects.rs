use folio_core::sections::ProjectsSection;
use folio_core::sections::projects::{PROJECTS_HEADING, PROJECTS_INTRO, VIEW_ALL_LABEL};
use folio_model::Project;
use iced::widget::{Row, Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::state::State;
use crate::theme::{self, FolioTheme};

const GITHUB_PROFILE: &str = "https://github.com";

pub fn view<'a>(state: &'a State, projects: ProjectsSection<'a>) -> Element<'a, Message> {
    let per_row = state.breakpoints.items_per_view(state.window_size.width);

    let tiles = projects
        .grid
        .iter()
        .map(|tile| {
            let mut tags = Row::new().spacing(4);
            for tag in tile.tags.shown {
                tags = tags.push(super::chip(tag.as_str()));
            }
            if let Some(overflow) = tile.tags.overflow_label() {
                tags = tags.push(super::chip(overflow));
            }

            container(
                column![
                    text(tile.project.title.as_str()).size(18),
                    text(tile.project.description.as_str())
                        .size(14)
                        .color(FolioTheme::TEXT_SECONDARY),
                    row![
                        text(format!("★ {}", tile.project.stars))
                            .size(12)
                            .color(FolioTheme::TEXT_DIMMED),
                        Space::with_width(Length::Fill),
                        tags,
                    ]
                    .align_y(Alignment::Center),
                    links(tile.project),
                ]
                .spacing(10),
            )
            .padding(16)
            .width(Length::Fill)
            .style(theme::Container::Card.style())
            .into()
        })
        .collect();

    super::section(
        column![
            super::section_heading(PROJECTS_HEADING, PROJECTS_INTRO),
            Space::with_height(48),
            super::carousel::view(state, &projects.featured),
            Space::with_height(48),
            super::grid(tiles, per_row),
            Space::with_height(32),
            container(
                button(text(VIEW_ALL_LABEL))
                    .padding([12, 32])
                    .on_press(Message::CopyLink(GITHUB_PROFILE.to_string()))
                    .style(theme::Button::Secondary.style()),
            )
            .center_x(Length::Fill),
        ]
        .width(Length::Fill),
    )
}

/// Large card used in the featured carousel.
pub fn featured_card(project: &Project, active: bool) -> Element<'_, Message> {
    let tags = Row::with_children(project.tags.iter().map(|tag| super::chip(tag.as_str()))).spacing(8);
    let style = if active {
        theme::Container::ActiveCard
    } else {
        theme::Container::Card
    };

    container(
        column![
            row![
                text(project.title.as_str()).size(22).width(Length::Fill),
                text(format!("★ {}  ⑂ {}", project.stars, project.forks))
                    .size(14)
                    .color(FolioTheme::TEXT_DIMMED),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
            text(project.description.as_str()).color(FolioTheme::TEXT_SECONDARY),
            Space::with_height(Length::Fill),
            tags,
            links(project),
        ]
        .spacing(14),
    )
    .padding(24)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(style.style())
    .into()
}

fn links(project: &Project) -> Element<'_, Message> {
    let candidates = [
        ("Code", &project.links.github),
        ("Demo", &project.links.demo),
        ("Blog", &project.links.blog),
    ];
    Row::with_children(candidates.into_iter().filter_map(|(label, url)| {
        let url = url.as_ref()?;
        Some(
            button(text(label).size(13))
                .padding([4, 8])
                .on_press(Message::CopyLink(url.clone()))
                .style(theme::Button::Link.style())
                .into(),
        )
    }))
    .spacing(8)
    .into()
}
