use folio_core::forms::{BookingField, ContactField, ValidationError};
use folio_core::sections::ContactSection;
use folio_core::sections::contact::CONTACT_HEADING;
use iced::widget::{Column, Row, Space, button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::message::{BookingMessage, ContactMessage, Message};
use crate::state::State;
use crate::theme::{self, FolioTheme};

const CONTACT_INTRO: &str = "Have a project in mind or need DevOps consultation? Let's discuss how I can help you achieve your infrastructure goals.";

pub fn view<'a>(state: &'a State, contact: ContactSection<'a>) -> Element<'a, Message> {
    let forms = row![
        container(contact_form(state)).width(Length::FillPortion(1)),
        container(booking_form(state, contact)).width(Length::FillPortion(1)),
    ]
    .spacing(32);

    super::section(
        column![
            super::section_heading(CONTACT_HEADING, CONTACT_INTRO),
            Space::with_height(48),
            forms,
            Space::with_height(32),
            social_links(contact),
        ]
        .width(Length::Fill),
    )
}

fn contact_form(state: &State) -> Element<'_, Message> {
    let form = &state.contact;
    let field = |field: ContactField, placeholder: &'static str| {
        labelled_input(
            placeholder,
            form.value(field),
            form.error(field),
            move |value| Message::Contact(ContactMessage::Edited(field, value)),
        )
    };

    card(
        "General Contact",
        column![
            field(ContactField::Name, "Your Name"),
            field(ContactField::Email, "Your Email"),
            field(ContactField::Message, "Your Message"),
            submit("Send Message", Message::Contact(ContactMessage::Submit)),
        ]
        .spacing(16),
    )
}

fn booking_form<'a>(state: &'a State, contact: ContactSection<'a>) -> Element<'a, Message> {
    let form = &state.booking;
    let input = |field: BookingField, placeholder: &'static str| {
        labelled_input(
            placeholder,
            form.value(field).unwrap_or_default(),
            form.error(field),
            move |value| Message::Booking(BookingMessage::Edited(field, value)),
        )
    };
    let choice = |field: BookingField, options: &'a [String], placeholder: &'static str| {
        let picker = pick_list(
            options,
            form.value(field).map(str::to_string),
            move |value: String| Message::Booking(BookingMessage::Edited(field, value)),
        )
        .placeholder(placeholder)
        .padding(10)
        .width(Length::Fill);
        with_error(picker.into(), form.error(field))
    };

    card(
        "1:1 Consultation",
        column![
            input(BookingField::Name, "Your Name"),
            input(BookingField::Email, "Your Email"),
            choice(BookingField::Purpose, &contact.booking.purposes, "Select purpose"),
            choice(
                BookingField::PreferredTime,
                &contact.booking.time_windows,
                "Select preferred time",
            ),
            input(BookingField::AdditionalInfo, "Additional information (optional)"),
            submit("Book Consultation", Message::Booking(BookingMessage::Submit)),
        ]
        .spacing(16),
    )
}

fn labelled_input<'a>(
    placeholder: &'a str,
    value: &'a str,
    error: Option<ValidationError>,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let input = text_input(placeholder, value)
        .on_input(on_input)
        .padding(10)
        .style(theme::input_style);
    with_error(input.into(), error)
}

fn with_error(field: Element<'_, Message>, error: Option<ValidationError>) -> Element<'_, Message> {
    let mut column = Column::new().spacing(4).push(field);
    if let Some(error) = error {
        column = column.push(text(error.to_string()).size(13).color(FolioTheme::ERROR));
    }
    column.into()
}

fn submit(label: &'static str, message: Message) -> Element<'static, Message> {
    button(text(label).width(Length::Fill).align_x(Alignment::Center))
        .padding(12)
        .width(Length::Fill)
        .on_press(message)
        .style(theme::Button::Primary.style())
        .into()
}

fn card<'a>(title: &'a str, body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    let body: Element<'a, Message> = body.into();
    container(column![text(title).size(22), body].spacing(20))
        .padding(24)
        .width(Length::Fill)
        .style(theme::Container::Card.style())
        .into()
}

fn social_links(contact: ContactSection<'_>) -> Element<'_, Message> {
    let links = Row::with_children(contact.reachable_links().map(|link| {
        button(text(link.platform.to_string()))
            .padding([8, 16])
            .on_press(Message::CopyLink(link.url.clone()))
            .style(theme::Button::Secondary.style())
            .into()
    }))
    .spacing(12);

    container(links).center_x(Length::Fill).into()
}
