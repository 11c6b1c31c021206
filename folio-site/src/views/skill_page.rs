//! `/skill/:name`: detail, related projects and content for one skill.

use folio_core::sections::skill_page::BACK_LABEL;
use folio_core::sections::{ContentTab, SkillPage};
use folio_model::SkillProject;
use iced::widget::{Column, Row, button, column, container, row, text};
use iced::{Alignment, Color, Element, Length};

use super::content;
use crate::message::Message;
use crate::theme::{self, FolioTheme};

const STAT_COLORS: [Color; 3] = [FolioTheme::ACCENT, FolioTheme::EMERALD, FolioTheme::ORANGE];

pub fn view(page: SkillPage<'_>) -> Element<'_, Message> {
    let back = button(text(format!("← {BACK_LABEL}")))
        .padding([8, 0])
        .on_press(Message::Navigate(page.back_route()))
        .style(theme::Button::Link.style());

    let stats = Row::with_children(page.stats().into_iter().zip(STAT_COLORS).map(|(stat, color)| {
        container(
            column![
                text(stat.value).size(28).color(color),
                text(stat.label).size(14).color(FolioTheme::TEXT_SECONDARY),
            ]
            .spacing(6)
            .align_x(Alignment::Center),
        )
        .padding(24)
        .center_x(Length::FillPortion(1))
        .style(theme::Container::Stat(color).style())
        .into()
    }))
    .spacing(24);

    let mut body = Column::new()
        .spacing(32)
        .width(Length::Fill)
        .push(back)
        .push(
            column![
                text(page.name()).size(44),
                text(page.description()).size(18).color(FolioTheme::TEXT_SECONDARY),
            ]
            .spacing(12),
        )
        .push(stats);

    if !page.certifications().is_empty() {
        let certifications = Row::with_children(
            page.certifications()
                .iter()
                .map(|name| super::chip(name.as_str())),
        )
        .spacing(8);
        body = body.push(titled("Certifications", certifications));
    }

    if !page.projects().is_empty() {
        let cards = page.projects().iter().map(project_card).collect();
        body = body.push(titled("Related Projects", super::grid(cards, 2)));
    }

    let related = page.content();
    if !page.videos().is_empty() {
        let videos = content::cards(related.cards(ContentTab::Videos));
        body = body.push(titled("YouTube Tutorials", videos));
    }
    if !page.blogs().is_empty() {
        let blogs = content::cards(related.cards(ContentTab::Blogs));
        body = body.push(titled("Related Blog Posts", blogs));
    }

    body = body.push(call_to_action(&page));

    super::section(body)
}

fn titled<'a>(title: &'a str, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    let content: Element<'a, Message> = content.into();
    column![text(title).size(26), content].spacing(16).into()
}

fn project_card(project: &SkillProject) -> Element<'_, Message> {
    let technologies = Row::with_children(
        project
            .technologies
            .iter()
            .map(|name| super::chip(name.as_str())),
    )
    .spacing(6);

    let mut links = Row::new().spacing(8);
    for (label, url) in [("Code", &project.github), ("Demo", &project.demo)] {
        if let Some(url) = url {
            links = links.push(
                button(text(label).size(13))
                    .padding([4, 8])
                    .on_press(Message::CopyLink(url.clone()))
                    .style(theme::Button::Link.style()),
            );
        }
    }

    container(
        column![
            text(project.title.as_str()).size(18),
            text(project.description.as_str()).color(FolioTheme::TEXT_SECONDARY),
            technologies,
            links,
        ]
        .spacing(10),
    )
    .padding(20)
    .width(Length::Fill)
    .style(theme::Container::Card.style())
    .into()
}

fn call_to_action<'a>(page: &SkillPage<'a>) -> Element<'a, Message> {
    let contact = page.contact_route();
    container(
        column![
            text(page.cta_heading()).size(28),
            text(page.cta_body())
                .color(FolioTheme::TEXT_SECONDARY)
                .align_x(Alignment::Center),
            row![
                button(text("Schedule Consultation"))
                    .padding([10, 24])
                    .on_press(Message::Navigate(contact.clone()))
                    .style(theme::Button::Primary.style()),
                button(text("Get in Touch"))
                    .padding([10, 24])
                    .on_press(Message::Navigate(contact))
                    .style(theme::Button::Secondary.style()),
            ]
            .spacing(16),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(32)
    .center_x(Length::Fill)
    .style(theme::Container::Card.style())
    .into()
}
