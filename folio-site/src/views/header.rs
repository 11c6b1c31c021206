use folio_core::navigation::Route;
use folio_core::sections::SectionId;
use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::state::State;
use crate::theme::{self, FolioTheme};

pub fn view(state: &State) -> Element<'_, Message> {
    let current = state.shell.current();
    let active_section = match current {
        Route::Home { anchor } => Some(anchor.unwrap_or(SectionId::Profile)),
        Route::Skill(_) => None,
    };

    let brand = button(
        text(state.catalog.profile().name.as_str())
            .size(20)
            .color(FolioTheme::TEXT_PRIMARY),
    )
    .on_press(Message::Navigate(Route::home()))
    .style(theme::Button::Link.style());

    let mut nav = row![].spacing(4).align_y(Alignment::Center);
    if state.shell.can_go_back() {
        nav = nav.push(
            button(text("← Back").size(14))
                .on_press(Message::Back)
                .style(theme::Button::Nav { active: false }.style()),
        );
    }
    for section in SectionId::ORDER {
        nav = nav.push(
            button(text(section.label()).size(14))
                .on_press(Message::Navigate(Route::section(section)))
                .style(
                    theme::Button::Nav {
                        active: active_section == Some(section),
                    }
                    .style(),
                ),
        );
    }

    container(
        row![brand, Space::with_width(Length::Fill), nav]
            .align_y(Alignment::Center)
            .width(Length::Fill),
    )
    .padding([12, 32])
    .width(Length::Fill)
    .style(theme::Container::Header.style())
    .into()
}
