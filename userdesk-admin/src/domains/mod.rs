//! Domain modules for the admin client
//!
//! Each screen owns its state, messages and update logic; navigation decides
//! which screen is mounted.

pub mod navigation;
pub mod ui;
pub mod user_detail;
pub mod users;

use std::sync::Arc;

use crate::infra::services::UserAdminService;

/// Domain registry that holds every domain's state
#[derive(Debug)]
pub struct DomainRegistry {
    pub navigation: navigation::NavigationDomain,
    pub users: users::UsersDomain,
    pub user_detail: user_detail::UserDetailDomain,
}

impl DomainRegistry {
    pub fn new(user_admin_service: Arc<dyn UserAdminService>) -> Self {
        Self {
            navigation: navigation::NavigationDomain::default(),
            users: users::UsersDomain::new(users::UsersDomainState::new(
                Arc::clone(&user_admin_service),
            )),
            user_detail: user_detail::UserDetailDomain::new(
                user_detail::UserDetailDomainState::new(user_admin_service),
            ),
        }
    }
}
