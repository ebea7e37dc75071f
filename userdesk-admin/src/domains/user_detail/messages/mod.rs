use userdesk_model::{UserDetail, UserId};

use crate::infra::requests::RequestToken;

#[derive(Clone, Debug)]
pub enum Message {
    /// Fetch and show a user, superseding any fetch still in flight
    Load(UserId),
    UserLoaded {
        token: RequestToken,
        id: UserId,
        result: Result<UserDetail, String>,
    },
    /// Return to the previous screen
    Back,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Load(_) => "UserDetail::Load",
            Self::UserLoaded { .. } => "UserDetail::UserLoaded",
            Self::Back => "UserDetail::Back",
        }
    }
}
