use userdesk_model::{UserId, UserSummary};

use crate::domains::users::form::UserField;
use crate::infra::requests::RequestToken;

#[derive(Clone, Debug)]
pub enum Message {
    // Collection
    LoadUsers,
    UsersLoaded {
        token: RequestToken,
        result: Result<Vec<UserSummary>, String>,
    },
    ViewDetails(UserId),

    // Deletion
    RequestDelete(UserSummary),
    ConfirmDelete,
    UserDeleted {
        token: RequestToken,
        id: UserId,
        result: Result<(), String>,
    },
    CancelDelete,

    // Create / edit forms
    OpenCreate,
    OpenEdit(UserSummary),
    FieldChanged(UserField, String),
    SubmitCreate,
    UserCreated {
        token: RequestToken,
        result: Result<UserSummary, String>,
    },
    SubmitEdit,
    UserUpdated {
        token: RequestToken,
        user: UserSummary,
        result: Result<(), String>,
    },
    CancelForm,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            // Collection
            Self::LoadUsers => "Users::LoadUsers",
            Self::UsersLoaded { .. } => "Users::UsersLoaded",
            Self::ViewDetails(_) => "Users::ViewDetails",

            // Deletion
            Self::RequestDelete(_) => "Users::RequestDelete",
            Self::ConfirmDelete => "Users::ConfirmDelete",
            Self::UserDeleted { .. } => "Users::UserDeleted",
            Self::CancelDelete => "Users::CancelDelete",

            // Forms
            Self::OpenCreate => "Users::OpenCreate",
            Self::OpenEdit(_) => "Users::OpenEdit",
            Self::FieldChanged(..) => "Users::FieldChanged",
            Self::SubmitCreate => "Users::SubmitCreate",
            Self::UserCreated { .. } => "Users::UserCreated",
            Self::SubmitEdit => "Users::SubmitEdit",
            Self::UserUpdated { .. } => "Users::UserUpdated",
            Self::CancelForm => "Users::CancelForm",
        }
    }
}
