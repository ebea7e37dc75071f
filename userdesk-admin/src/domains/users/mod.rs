//! User list domain
//!
//! Owns the cached user collection, the create/edit/delete dialogs, and the
//! reconciliation of the collection after each successful remote mutation.

pub mod form;
pub mod messages;
pub mod update;
pub mod update_handlers;
pub mod validation;

use std::sync::Arc;

use userdesk_model::{NewUser, UserSummary};

use self::form::{Modal, UserForm};
use crate::infra::requests::RequestTracker;
use crate::infra::services::UserAdminService;

pub const LOAD_ERROR_MESSAGE: &str = "Error fetching users";

/// Load lifecycle of the collection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UsersLoadState {
    #[default]
    NotStarted,
    Loading,
    Loaded,
    Failed { message: String },
}

/// User list domain state
pub struct UsersDomainState {
    pub user_admin_service: Arc<dyn UserAdminService>,
    /// Server order, plus local appends from successful creates
    pub users: Vec<UserSummary>,
    pub load_state: UsersLoadState,
    pub modal: Modal,
    pub requests: RequestTracker,
}

impl UsersDomainState {
    pub fn new(user_admin_service: Arc<dyn UserAdminService>) -> Self {
        Self {
            user_admin_service,
            users: Vec::new(),
            load_state: UsersLoadState::NotStarted,
            modal: Modal::None,
            requests: RequestTracker::default(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self.load_state,
            UsersLoadState::NotStarted | UsersLoadState::Loading
        )
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.load_state {
            UsersLoadState::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn pending_delete(&self) -> Option<&UserSummary> {
        match &self.modal {
            Modal::ConfirmDelete(user) => Some(user),
            _ => None,
        }
    }

    pub fn create_form(&self) -> Option<&UserForm<NewUser>> {
        match &self.modal {
            Modal::Create(form) => Some(form),
            _ => None,
        }
    }

    pub fn edit_form(&self) -> Option<&UserForm<UserSummary>> {
        match &self.modal {
            Modal::Edit(form) => Some(form),
            _ => None,
        }
    }
}

impl std::fmt::Debug for UsersDomainState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsersDomainState")
            .field("users", &self.users.len())
            .field("load_state", &self.load_state)
            .field("modal", &self.modal)
            .field("requests", &self.requests)
            .finish()
    }
}

#[derive(Debug)]
pub struct UsersDomain {
    pub state: UsersDomainState,
}

impl UsersDomain {
    pub fn new(state: UsersDomainState) -> Self {
        Self { state }
    }
}
