use std::sync::Arc;

use crate::domains::DomainRegistry;
use crate::infra::services::UserAdminService;

/// Root application state
#[derive(Debug)]
pub struct State {
    pub domains: DomainRegistry,
}

impl State {
    pub fn new(user_admin_service: Arc<dyn UserAdminService>) -> Self {
        Self {
            domains: DomainRegistry::new(user_admin_service),
        }
    }
}
