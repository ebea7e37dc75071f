use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};
use userdesk_model::{NewUser, UserSummary};

use crate::domains::ui::theme;
use crate::domains::users::{
    form::{UserField, UserFields, UserForm},
    messages::Message,
};

const DIALOG_WIDTH: f32 = 420.0;

pub fn view_create_form(form: &UserForm<NewUser>) -> Element<'_, Message> {
    view_user_form("Create User", "Create", Message::SubmitCreate, form)
}

pub fn view_edit_form(form: &UserForm<UserSummary>) -> Element<'_, Message> {
    view_user_form("Edit User", "Save", Message::SubmitEdit, form)
}

fn view_user_form<'a, D: UserFields>(
    title: &'a str,
    submit_label: &'a str,
    submit: Message,
    form: &'a UserForm<D>,
) -> Element<'a, Message> {
    let mut content = column![
        text(title).size(22).color(theme::AdminTheme::TEXT_PRIMARY)
    ]
    .spacing(12);

    if let Some(error) = form.error {
        content = content.push(
            container(text(error.to_string()).size(14))
                .style(theme::Container::ErrorBox.style())
                .padding(8)
                .width(Length::Fill),
        );
    }

    let draft = &form.draft;
    content = content
        .push(field("Name", UserField::Name, draft.name(), &submit))
        .push(field("Username", UserField::Username, draft.username(), &submit))
        .push(field("Email", UserField::Email, draft.email(), &submit))
        .push(
            row![
                Space::new().width(Length::Fill),
                button("Cancel")
                    .style(theme::Button::Secondary.style())
                    .padding([8, 14])
                    .on_press(Message::CancelForm),
                button(submit_label)
                    .style(theme::Button::Primary.style())
                    .padding([8, 14])
                    .on_press(submit),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        );

    container(content)
        .style(theme::Container::Modal.style())
        .padding(20)
        .width(DIALOG_WIDTH)
        .into()
}

fn field<'a>(
    label: &'a str,
    which: UserField,
    value: &'a str,
    submit: &Message,
) -> Element<'a, Message> {
    column![
        text(label)
            .size(14)
            .color(theme::AdminTheme::TEXT_SECONDARY),
        text_input(label, value)
            .on_input(move |value| Message::FieldChanged(which, value))
            .on_submit(submit.clone())
            .style(theme::TextInput::style())
            .padding(8)
            .size(16),
    ]
    .spacing(4)
    .into()
}

pub fn view_delete_confirmation(user: &UserSummary) -> Element<'_, Message> {
    container(
        column![
            text("Delete User")
                .size(22)
                .color(theme::AdminTheme::TEXT_PRIMARY),
            text(format!("Are you sure you want to delete {}?", user.name))
                .size(16),
            row![
                Space::new().width(Length::Fill),
                button("Cancel")
                    .style(theme::Button::Secondary.style())
                    .padding([8, 14])
                    .on_press(Message::CancelDelete),
                button("Delete")
                    .style(theme::Button::Destructive.style())
                    .padding([8, 14])
                    .on_press(Message::ConfirmDelete),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        ]
        .spacing(16),
    )
    .style(theme::Container::Modal.style())
    .padding(20)
    .width(DIALOG_WIDTH)
    .into()
}
