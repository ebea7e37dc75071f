use iced::Task;
use log::{debug, error, info};
use userdesk_model::{NewUser, UserSummary};

use crate::{
    common::messages::DomainMessage,
    domains::users::{
        UsersDomainState,
        form::{Modal, UserField, UserFields, UserForm},
        messages::Message,
    },
    infra::requests::RequestToken,
};

pub fn open_create(users: &mut UsersDomainState) -> Task<DomainMessage> {
    info!("Opening create user form");
    users.modal = Modal::Create(UserForm::new(NewUser::default()));
    Task::none()
}

pub fn open_edit(
    users: &mut UsersDomainState,
    user: UserSummary,
) -> Task<DomainMessage> {
    info!("Opening edit form for user {}", user.id);
    users.modal = Modal::Edit(UserForm::new(user));
    Task::none()
}

/// One handler for both forms: writes into whichever draft is open.
pub fn field_changed(
    users: &mut UsersDomainState,
    field: UserField,
    value: String,
) -> Task<DomainMessage> {
    match &mut users.modal {
        Modal::Edit(form) => form.draft.set_field(field, value),
        Modal::Create(form) => form.draft.set_field(field, value),
        Modal::None | Modal::ConfirmDelete(_) => {
            debug!("Ignoring {:?} change with no form open", field);
        }
    }
    Task::none()
}

pub fn submit_create(users: &mut UsersDomainState) -> Task<DomainMessage> {
    let Modal::Create(form) = &mut users.modal else {
        debug!("Create submitted with no create form open");
        return Task::none();
    };
    if !form.check() {
        info!("Create form rejected: {}", form.error_message());
        return Task::none();
    }

    let draft = form.draft.clone();
    info!("Creating user {}", draft.username);
    let service = users.user_admin_service.clone();
    let (_, task) = users.requests.perform(
        async move { service.create_user(draft).await.map_err(|e| e.to_string()) },
        |token, result| DomainMessage::from(Message::UserCreated { token, result }),
    );
    task
}

pub fn handle_user_created(
    users: &mut UsersDomainState,
    token: RequestToken,
    result: Result<UserSummary, String>,
) -> Task<DomainMessage> {
    if !users.requests.complete(token) {
        debug!("Dropping stale create response {}", token);
        return Task::none();
    }

    match result {
        Ok(created) => {
            info!("User created with id {}", created.id);
            users.users.push(created);
            if matches!(users.modal, Modal::Create(_)) {
                users.modal = Modal::None;
            }
        }
        Err(err) => {
            // Form stays open with its draft; nothing is shown to the user
            error!("Error creating user: {}", err);
        }
    }
    Task::none()
}

pub fn submit_edit(users: &mut UsersDomainState) -> Task<DomainMessage> {
    let Modal::Edit(form) = &mut users.modal else {
        debug!("Edit submitted with no edit form open");
        return Task::none();
    };
    if !form.check() {
        info!("Edit form rejected: {}", form.error_message());
        return Task::none();
    }

    let user = form.draft.clone();
    info!("Updating user {}", user.id);
    let service = users.user_admin_service.clone();
    let submitted = user.clone();
    let (_, task) = users.requests.perform(
        async move { service.update_user(submitted).await.map_err(|e| e.to_string()) },
        move |token, result| {
            DomainMessage::from(Message::UserUpdated {
                token,
                user,
                result,
            })
        },
    );
    task
}

pub fn handle_user_updated(
    users: &mut UsersDomainState,
    token: RequestToken,
    user: UserSummary,
    result: Result<(), String>,
) -> Task<DomainMessage> {
    if !users.requests.complete(token) {
        debug!("Dropping stale update response {} for user {}", token, user.id);
        return Task::none();
    }

    if let Err(err) = result {
        error!("Error updating user {}: {}", user.id, err);
        return Task::none();
    }

    info!("User {} updated", user.id);
    if users
        .edit_form()
        .is_some_and(|form| form.draft.id == user.id)
    {
        users.modal = Modal::None;
    }
    if let Some(existing) = users.users.iter_mut().find(|u| u.id == user.id) {
        *existing = user;
    }
    Task::none()
}

pub fn cancel_form(users: &mut UsersDomainState) -> Task<DomainMessage> {
    if matches!(users.modal, Modal::Create(_) | Modal::Edit(_)) {
        info!("User form cancelled");
        users.modal = Modal::None;
    }
    Task::none()
}
