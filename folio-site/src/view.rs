use folio_core::navigation::View;
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::State;
use crate::theme;
use crate::views;

pub fn view(state: &State) -> Element<'_, Message> {
    let body = match state.shell.resolve(&state.catalog) {
        View::Home(home) => views::home::view(state, home),
        View::Skill(page) => views::skill_page::view(page),
    };

    let page = scrollable(column![body, views::footer(state.catalog.profile())])
        .id(state.page_id.clone())
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layout = column![views::header::view(state)];
    if let Some(notice) = &state.notice {
        layout = layout.push(
            container(
                row![
                    text(notice.text.as_str()).width(Length::Fill),
                    button(text("Dismiss").size(14))
                        .on_press(Message::DismissNotice)
                        .style(theme::Button::Link.style()),
                ]
                .align_y(iced::Alignment::Center),
            )
            .padding([10, 24])
            .width(Length::Fill)
            .style(theme::Container::Notice.style()),
        );
    }
    layout.push(page).into()
}
