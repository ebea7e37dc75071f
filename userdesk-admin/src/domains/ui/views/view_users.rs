use iced::widget::{
    Space, Text, button, column, container, opaque, row, scrollable, stack,
    text,
};
use iced::{Alignment, Element, Length};
use userdesk_model::UserSummary;

use crate::domains::ui::theme;
use crate::domains::ui::views::view_user_forms::{
    view_create_form, view_delete_confirmation, view_edit_form,
};
use crate::domains::users::{UsersDomainState, form::Modal, messages::Message};

const ID_PORTION: u16 = 1;
const NAME_PORTION: u16 = 3;
const USERNAME_PORTION: u16 = 2;
const EMAIL_PORTION: u16 = 3;
const ACTIONS_PORTION: u16 = 3;

/// The list screen, with the active dialog layered over it.
pub fn view_users(users: &UsersDomainState) -> Element<'_, Message> {
    let header = row![
        text("Users").size(24).color(theme::AdminTheme::TEXT_PRIMARY),
        Space::new().width(Length::Fill),
        button("Create User")
            .style(theme::Button::Primary.style())
            .padding([8, 14])
            .on_press(Message::OpenCreate),
    ]
    .align_y(Alignment::Center);

    let body: Element<'_, Message> = if users.is_loading() {
        text("Loading...")
            .size(16)
            .color(theme::AdminTheme::TEXT_SECONDARY)
            .into()
    } else if let Some(message) = users.error_message() {
        container(text(message).size(16))
            .style(theme::Container::ErrorBox.style())
            .padding(12)
            .width(Length::Fill)
            .into()
    } else {
        view_table(&users.users)
    };

    let base = container(
        column![
            container(header)
                .style(theme::Container::Card.style())
                .padding(16)
                .width(Length::Fill),
            body,
        ]
        .spacing(16)
        .padding(20),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let dialog = match &users.modal {
        Modal::None => return base.into(),
        Modal::Create(form) => view_create_form(form),
        Modal::Edit(form) => view_edit_form(form),
        Modal::ConfirmDelete(user) => view_delete_confirmation(user),
    };

    stack![
        base,
        opaque(
            container(dialog)
                .center(Length::Fill)
                .style(theme::Container::ModalOverlay.style()),
        ),
    ]
    .into()
}

fn view_table(list: &[UserSummary]) -> Element<'_, Message> {
    let table_header = container(
        row![
            heading("ID").width(Length::FillPortion(ID_PORTION)),
            heading("Name").width(Length::FillPortion(NAME_PORTION)),
            heading("Username").width(Length::FillPortion(USERNAME_PORTION)),
            heading("Email").width(Length::FillPortion(EMAIL_PORTION)),
            heading("Actions").width(Length::FillPortion(ACTIONS_PORTION)),
        ]
        .spacing(10),
    )
    .style(theme::Container::Header.style())
    .padding([8, 12])
    .width(Length::Fill);

    let rows = list
        .iter()
        .enumerate()
        .fold(column![].spacing(4), |rows, (index, user)| {
            rows.push(user_row(index, user))
        });

    column![
        table_header,
        scrollable(rows).height(Length::Fill),
    ]
    .spacing(8)
    .into()
}

fn heading(label: &'static str) -> Text<'static> {
    text(label)
        .size(14)
        .color(theme::AdminTheme::TEXT_SECONDARY)
}

fn user_row(index: usize, user: &UserSummary) -> Element<'_, Message> {
    let actions = row![
        button("View")
            .style(theme::Button::Link.style())
            .padding([4, 8])
            .on_press(Message::ViewDetails(user.id)),
        button("Edit")
            .style(theme::Button::Secondary.style())
            .padding([4, 8])
            .on_press(Message::OpenEdit(user.clone())),
        button("Delete")
            .style(theme::Button::Destructive.style())
            .padding([4, 8])
            .on_press(Message::RequestDelete(user.clone())),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    container(
        row![
            text(user.id.to_string())
                .size(14)
                .width(Length::FillPortion(ID_PORTION)),
            text(&user.name)
                .size(14)
                .width(Length::FillPortion(NAME_PORTION)),
            text(&user.username)
                .size(14)
                .width(Length::FillPortion(USERNAME_PORTION)),
            text(&user.email)
                .size(14)
                .width(Length::FillPortion(EMAIL_PORTION)),
            container(actions).width(Length::FillPortion(ACTIONS_PORTION)),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .style(theme::Container::row(index).style())
    .padding([8, 12])
    .width(Length::Fill)
    .into()
}
