use iced::Task;
use log::{debug, error, info};
use userdesk_model::UserSummary;

use crate::{
    common::messages::DomainMessage,
    domains::users::{
        LOAD_ERROR_MESSAGE, UsersDomainState, UsersLoadState, form::Modal,
        messages::Message,
    },
    infra::requests::RequestToken,
};

/// Enter the list screen: start from a clean slate and fetch the collection.
pub fn mount(users: &mut UsersDomainState) -> Task<DomainMessage> {
    unmount(users);
    load_users(users)
}

/// Leave the list screen: abort everything in flight and drop drafts.
pub fn unmount(users: &mut UsersDomainState) {
    users.requests.abort_all();
    users.users.clear();
    users.load_state = UsersLoadState::NotStarted;
    users.modal = Modal::None;
}

pub fn load_users(users: &mut UsersDomainState) -> Task<DomainMessage> {
    info!("Loading users from server");
    users.load_state = UsersLoadState::Loading;

    let service = users.user_admin_service.clone();
    let (_, task) = users.requests.perform(
        async move { service.list_users().await.map_err(|e| e.to_string()) },
        |token, result| DomainMessage::from(Message::UsersLoaded { token, result }),
    );
    task
}

pub fn handle_users_loaded(
    users: &mut UsersDomainState,
    token: RequestToken,
    result: Result<Vec<UserSummary>, String>,
) -> Task<DomainMessage> {
    if !users.requests.complete(token) {
        debug!("Dropping stale user list response {}", token);
        return Task::none();
    }

    match result {
        Ok(loaded) => {
            info!("Successfully loaded {} users", loaded.len());
            users.users = loaded;
            users.load_state = UsersLoadState::Loaded;
        }
        Err(err) => {
            error!("Failed to load users: {}", err);
            users.load_state = UsersLoadState::Failed {
                message: LOAD_ERROR_MESSAGE.to_string(),
            };
        }
    }
    Task::none()
}
