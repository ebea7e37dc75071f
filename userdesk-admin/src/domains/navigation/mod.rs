//! Navigation domain
//!
//! Maps paths to screens and keeps the back-history.

pub mod messages;
pub mod route;
pub mod update;

pub use route::{Route, RouteError};

/// Navigation domain state
#[derive(Debug, Default)]
pub struct NavigationDomainState {
    pub current: Route,
    pub history: Vec<Route>,
}

#[derive(Debug, Default)]
pub struct NavigationDomain {
    pub state: NavigationDomainState,
}

impl NavigationDomain {
    pub fn current(&self) -> Route {
        self.state.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.state.history.is_empty()
    }
}
