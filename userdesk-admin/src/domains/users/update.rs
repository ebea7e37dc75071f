use iced::Task;
use log::debug;

use crate::{
    common::messages::DomainMessage,
    domains::navigation::{self, Route},
    domains::users::{messages::Message, update_handlers},
    state::State,
};

/// Handle user list domain messages
pub fn update_users(state: &mut State, message: Message) -> Task<DomainMessage> {
    debug!("Users update: {}", message.name());

    let users = &mut state.domains.users.state;
    match message {
        // Collection
        Message::LoadUsers => update_handlers::load_users(users),
        Message::UsersLoaded { token, result } => {
            update_handlers::handle_users_loaded(users, token, result)
        }
        Message::ViewDetails(id) => Task::done(DomainMessage::from(
            navigation::messages::Message::Navigate(Route::UserDetail(id)),
        )),

        // Deletion
        Message::RequestDelete(user) => update_handlers::request_delete(users, user),
        Message::ConfirmDelete => update_handlers::confirm_delete(users),
        Message::UserDeleted { token, id, result } => {
            update_handlers::handle_user_deleted(users, token, id, result)
        }
        Message::CancelDelete => update_handlers::cancel_delete(users),

        // Forms
        Message::OpenCreate => update_handlers::open_create(users),
        Message::OpenEdit(user) => update_handlers::open_edit(users, user),
        Message::FieldChanged(field, value) => {
            update_handlers::field_changed(users, field, value)
        }
        Message::SubmitCreate => update_handlers::submit_create(users),
        Message::UserCreated { token, result } => {
            update_handlers::handle_user_created(users, token, result)
        }
        Message::SubmitEdit => update_handlers::submit_edit(users),
        Message::UserUpdated {
            token,
            user,
            result,
        } => update_handlers::handle_user_updated(users, token, user, result),
        Message::CancelForm => update_handlers::cancel_form(users),
    }
}
