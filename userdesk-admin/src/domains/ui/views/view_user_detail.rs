use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use userdesk_model::UserDetail;

use crate::domains::ui::theme;
use crate::domains::user_detail::{UserDetailDomainState, messages::Message};

pub fn view_user_detail(
    detail: &UserDetailDomainState,
) -> Element<'_, Message> {
    let header = row![
        button("Go Back")
            .style(theme::Button::Secondary.style())
            .padding([8, 14])
            .on_press(Message::Back),
        Space::new().width(16),
        text("User Detail")
            .size(24)
            .color(theme::AdminTheme::TEXT_PRIMARY),
    ]
    .align_y(Alignment::Center);

    let body: Element<'_, Message> = match &detail.user {
        Some(user) => view_record(user),
        // Failed fetches also land here
        None => text("Loading...")
            .size(16)
            .color(theme::AdminTheme::TEXT_SECONDARY)
            .into(),
    };

    container(column![header, body].spacing(20).padding(20))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_record(user: &UserDetail) -> Element<'_, Message> {
    container(
        column![
            text(&user.name).size(22),
            field_line("Email", &user.email),
            field_line("Phone", &user.phone),
            field_line("Address", user.address.display_line()),
        ]
        .spacing(10),
    )
    .style(theme::Container::Card.style())
    .padding(16)
    .width(Length::Fill)
    .into()
}

fn field_line<'a>(label: &str, value: impl Into<String>) -> Element<'a, Message> {
    row![
        text(format!("{label}:"))
            .size(14)
            .color(theme::AdminTheme::TEXT_SECONDARY)
            .width(90),
        text(value.into()).size(16),
    ]
    .spacing(8)
    .into()
}
