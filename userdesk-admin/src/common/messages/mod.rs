// Message types are defined in their respective domains
use crate::domains::navigation;
use crate::domains::user_detail;
use crate::domains::users;

/// The main domain message router
#[derive(Clone, Debug)]
pub enum DomainMessage {
    /// User list domain
    Users(users::messages::Message),

    /// User detail domain
    UserDetail(user_detail::messages::Message),

    /// Routing and history
    Navigation(navigation::messages::Message),
}

// Automatic routing from domain messages
impl From<users::messages::Message> for DomainMessage {
    fn from(msg: users::messages::Message) -> Self {
        DomainMessage::Users(msg)
    }
}

impl From<user_detail::messages::Message> for DomainMessage {
    fn from(msg: user_detail::messages::Message) -> Self {
        DomainMessage::UserDetail(msg)
    }
}

impl From<navigation::messages::Message> for DomainMessage {
    fn from(msg: navigation::messages::Message) -> Self {
        DomainMessage::Navigation(msg)
    }
}

impl DomainMessage {
    /// Get a human-readable name for debugging
    pub fn name(&self) -> &'static str {
        match self {
            DomainMessage::Users(msg) => msg.name(),
            DomainMessage::UserDetail(msg) => msg.name(),
            DomainMessage::Navigation(msg) => msg.name(),
        }
    }
}
