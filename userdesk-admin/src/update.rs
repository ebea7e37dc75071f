use iced::Task;
use log::trace;

use crate::common::messages::DomainMessage;
use crate::domains::{navigation, user_detail, users};
use crate::state::State;

/// Route a message to the domain that owns it.
pub fn update(state: &mut State, message: DomainMessage) -> Task<DomainMessage> {
    trace!("Update: {}", message.name());

    match message {
        DomainMessage::Users(msg) => users::update::update_users(state, msg),
        DomainMessage::UserDetail(msg) => {
            user_detail::update::update_user_detail(state, msg)
        }
        DomainMessage::Navigation(msg) => {
            navigation::update::update_navigation(state, msg)
        }
    }
}
