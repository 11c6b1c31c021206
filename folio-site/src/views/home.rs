use folio_core::sections::{HomeView, Section};
use iced::Element;
use iced::widget::Column;

use crate::message::Message;
use crate::state::State;

pub fn view<'a>(state: &'a State, home: HomeView<'a>) -> Element<'a, Message> {
    let sections = home.sections.into_iter().map(|section| match section {
        Section::Profile(profile) => super::profile::view(profile),
        Section::Skills(skills) => super::skills::view(skills, state.window_size.width),
        Section::Projects(projects) => super::projects::view(state, projects),
        Section::Content(content) => super::content::view(content, state.content_tab),
        Section::Contact(contact) => super::contact::view(state, contact),
    });
    Column::with_children(sections).into()
}
