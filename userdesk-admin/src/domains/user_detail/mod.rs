//! User detail domain
//!
//! Shows the full record of one user, fetched by the id in the current route.

pub mod messages;
pub mod update;

use std::sync::Arc;

use userdesk_model::{UserDetail, UserId};

use crate::infra::requests::{RequestToken, RequestTracker};
use crate::infra::services::UserAdminService;

/// User detail domain state
pub struct UserDetailDomainState {
    pub user_admin_service: Arc<dyn UserAdminService>,
    /// Id taken from the route; `None` while the screen is not mounted
    pub user_id: Option<UserId>,
    /// Stays `None` until a fetch succeeds, including after a failed fetch
    pub user: Option<UserDetail>,
    pub active_request: Option<RequestToken>,
    pub requests: RequestTracker,
}

impl UserDetailDomainState {
    pub fn new(user_admin_service: Arc<dyn UserAdminService>) -> Self {
        Self {
            user_admin_service,
            user_id: None,
            user: None,
            active_request: None,
            requests: RequestTracker::default(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.user.is_none()
    }
}

impl std::fmt::Debug for UserDetailDomainState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDetailDomainState")
            .field("user_id", &self.user_id)
            .field("user", &self.user)
            .field("active_request", &self.active_request)
            .field("requests", &self.requests)
            .finish()
    }
}

#[derive(Debug)]
pub struct UserDetailDomain {
    pub state: UserDetailDomainState,
}

impl UserDetailDomain {
    pub fn new(state: UserDetailDomainState) -> Self {
        Self { state }
    }
}
