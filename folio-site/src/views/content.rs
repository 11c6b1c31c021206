use folio_core::sections::content::{CONTENT_HEADING, CONTENT_INTRO, ContentCards};
use folio_core::sections::{BlogCard, ContentSection, ContentTab, VideoCard};
use iced::widget::{Row, Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::theme::{self, FolioTheme};

const CARDS_PER_ROW: usize = 3;
const YOUTUBE_CHANNEL: &str = "https://youtube.com";
const HASHNODE_BLOG: &str = "https://hashnode.com";

pub fn view<'a>(content: ContentSection<'a>, tab: ContentTab) -> Element<'a, Message> {
    let tabs = Row::with_children(ContentTab::ALL.into_iter().map(|candidate| {
        button(text(candidate.label()))
            .padding([10, 24])
            .on_press(Message::ContentTabSelected(candidate))
            .style(
                theme::Button::Tab {
                    active: candidate == tab,
                }
                .style(),
            )
            .into()
    }))
    .spacing(8);

    super::section(
        column![
            super::section_heading(CONTENT_HEADING, CONTENT_INTRO),
            Space::with_height(32),
            container(tabs).center_x(Length::Fill),
            Space::with_height(32),
            cards(content.cards(tab)),
            Space::with_height(48),
            call_to_action(),
        ]
        .width(Length::Fill),
    )
}

/// Card grid for one list, also used by the skill page.
pub fn cards(cards: ContentCards<'_>) -> Element<'_, Message> {
    let items = match cards {
        ContentCards::Videos(videos) => videos.into_iter().map(video_card).collect(),
        ContentCards::Blogs(posts) => posts.into_iter().map(blog_card).collect(),
    };
    super::grid(items, CARDS_PER_ROW)
}

pub fn video_card(card: VideoCard<'_>) -> Element<'_, Message> {
    let video = card.video;
    let thumbnail = container(
        row![
            text("▶").size(28).color(FolioTheme::ERROR),
            Space::with_width(Length::Fill),
            container(text(card.length_label()).size(12))
                .padding([2, 6])
                .style(theme::Container::Badge.style()),
        ]
        .align_y(Alignment::End),
    )
    .padding(12)
    .height(140)
    .width(Length::Fill)
    .style(theme::Container::Chip.style());

    let body = column![
        thumbnail,
        text(video.title.as_str()).size(16),
        text(video.description.as_str()).size(13).color(FolioTheme::TEXT_SECONDARY),
        row![
            text(card.views_label()).size(12).color(FolioTheme::TEXT_DIMMED),
            Space::with_width(Length::Fill),
            text(card.date_label()).size(12).color(FolioTheme::TEXT_DIMMED),
        ],
    ]
    .spacing(10);

    button(body)
        .padding(16)
        .width(Length::Fill)
        .on_press(Message::CopyLink(video.url.clone()))
        .style(theme::Button::Card.style())
        .into()
}

pub fn blog_card(card: BlogCard<'_>) -> Element<'_, Message> {
    let post = card.post;
    let body = column![
        text(post.title.as_str()).size(16),
        text(post.description.as_str()).size(13).color(FolioTheme::TEXT_SECONDARY),
        row![
            text(card.read_time_label()).size(12).color(FolioTheme::TEXT_DIMMED),
            text(card.views_label()).size(12).color(FolioTheme::TEXT_DIMMED),
            Space::with_width(Length::Fill),
            text(card.date_label()).size(12).color(FolioTheme::TEXT_DIMMED),
        ]
        .spacing(12),
    ]
    .spacing(10);

    button(body)
        .padding(16)
        .width(Length::Fill)
        .on_press(Message::CopyLink(post.url.clone()))
        .style(theme::Button::Card.style())
        .into()
}

fn call_to_action() -> Element<'static, Message> {
    container(
        column![
            text("Stay Updated with Latest Content").size(24),
            text("Subscribe to my YouTube channel and follow my blog for the latest DevOps tutorials and insights.")
                .color(FolioTheme::TEXT_SECONDARY)
                .align_x(Alignment::Center),
            row![
                button(text("Subscribe on YouTube"))
                    .padding([10, 24])
                    .on_press(Message::CopyLink(YOUTUBE_CHANNEL.to_string()))
                    .style(theme::Button::Primary.style()),
                button(text("Follow on Hashnode"))
                    .padding([10, 24])
                    .on_press(Message::CopyLink(HASHNODE_BLOG.to_string()))
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
