//! Root-level view composition

use iced::Element;

use crate::common::messages::DomainMessage;
use crate::domains::navigation::Route;
use crate::domains::ui::views::{view_user_detail, view_users};
use crate::state::State;

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    match state.domains.navigation.current() {
        Route::Users => {
            view_users(&state.domains.users.state).map(DomainMessage::from)
        }
        Route::UserDetail(_) => {
            view_user_detail(&state.domains.user_detail.state)
                .map(DomainMessage::from)
        }
    }
}
