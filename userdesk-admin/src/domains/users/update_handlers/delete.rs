use iced::Task;
use log::{debug, error, info};
use userdesk_model::{UserId, UserSummary};

use crate::{
    common::messages::DomainMessage,
    domains::users::{UsersDomainState, form::Modal, messages::Message},
    infra::requests::RequestToken,
};

pub fn request_delete(
    users: &mut UsersDomainState,
    user: UserSummary,
) -> Task<DomainMessage> {
    info!("Requesting deletion confirmation for user {}", user.id);
    users.modal = Modal::ConfirmDelete(user);
    Task::none()
}

pub fn confirm_delete(users: &mut UsersDomainState) -> Task<DomainMessage> {
    let Some(id) = users.pending_delete().map(|user| user.id) else {
        debug!("Delete confirmed with no pending target");
        return Task::none();
    };

    info!("Deleting user {}", id);
    let service = users.user_admin_service.clone();
    let (_, task) = users.requests.perform(
        async move { service.delete_user(id).await.map_err(|e| e.to_string()) },
        move |token, result| {
            DomainMessage::from(Message::UserDeleted { token, id, result })
        },
    );
    task
}

pub fn handle_user_deleted(
    users: &mut UsersDomainState,
    token: RequestToken,
    id: UserId,
    result: Result<(), String>,
) -> Task<DomainMessage> {
    if !users.requests.complete(token) {
        debug!("Dropping stale delete response {} for user {}", token, id);
        return Task::none();
    }

    match result {
        Ok(()) => {
            info!("User {} deleted", id);
            users.users.retain(|user| user.id != id);
            if users.pending_delete().is_some_and(|user| user.id == id) {
                users.modal = Modal::None;
            }
        }
        Err(err) => {
            // The dialog stays up and the record stays listed
            error!("Error deleting user {}: {}", id, err);
        }
    }
    Task::none()
}

pub fn cancel_delete(users: &mut UsersDomainState) -> Task<DomainMessage> {
    if users.pending_delete().is_some() {
        info!("User deletion cancelled");
        users.modal = Modal::None;
    }
    Task::none()
}
