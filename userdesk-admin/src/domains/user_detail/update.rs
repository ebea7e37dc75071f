use iced::Task;
use log::{debug, error, info};
use userdesk_model::UserId;

use crate::{
    common::messages::DomainMessage,
    domains::navigation,
    domains::user_detail::{UserDetailDomainState, messages::Message},
    state::State,
};

/// Handle user detail domain messages
pub fn update_user_detail(state: &mut State, message: Message) -> Task<DomainMessage> {
    debug!("User detail update: {}", message.name());

    let detail = &mut state.domains.user_detail.state;
    match message {
        Message::Load(id) => show_user(detail, id),

        Message::UserLoaded { token, id, result } => {
            if !detail.requests.complete(token) {
                debug!("Dropping stale detail response {} for user {}", token, id);
                return Task::none();
            }
            if detail.active_request == Some(token) {
                detail.active_request = None;
            }

            match result {
                Ok(user) if detail.user_id == Some(id) => {
                    info!("Loaded details for user {} ({})", id, user.name);
                    detail.user = Some(user);
                }
                Ok(_) => {
                    debug!("Discarding details for user {} no longer shown", id);
                }
                Err(err) => {
                    // Leaves the screen on its loading placeholder
                    error!("Error fetching user details for {}: {}", id, err);
                }
            }
            Task::none()
        }

        Message::Back => Task::done(DomainMessage::from(
            navigation::messages::Message::NavigateBack,
        )),
    }
}

/// Start showing `id`, aborting the fetch for any previously shown user.
pub fn show_user(detail: &mut UserDetailDomainState, id: UserId) -> Task<DomainMessage> {
    if let Some(previous) = detail.active_request.take() {
        debug!("Aborting superseded detail request {}", previous);
        detail.requests.abort(previous);
    }
    if detail.user_id != Some(id) {
        detail.user = None;
    }
    detail.user_id = Some(id);

    info!("Fetching details for user {}", id);
    let service = detail.user_admin_service.clone();
    let (token, task) = detail.requests.perform(
        async move { service.get_user(id).await.map_err(|e| e.to_string()) },
        move |token, result| {
            DomainMessage::from(Message::UserLoaded { token, id, result })
        },
    );
    detail.active_request = Some(token);
    task
}

/// Tear down the screen: abort in-flight fetches and forget the record.
pub fn unmount(detail: &mut UserDetailDomainState) {
    detail.requests.abort_all();
    detail.active_request = None;
    detail.user_id = None;
    detail.user = None;
}
