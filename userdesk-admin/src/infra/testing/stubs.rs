use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use userdesk_model::{Address, NewUser, UserDetail, UserId, UserSummary};

use crate::infra::api_client::{ApiError, ApiResult};
use crate::infra::services::UserAdminService;

/// In-memory stand-in for the remote user service.
///
/// Behaves like a well-mannered REST backend: ids are assigned on create,
/// unknown ids answer 404. Every call is recorded so tests can inspect the
/// sequence of operations.
#[derive(Debug, Default)]
pub struct StubUserAdminService {
    users: Mutex<Vec<UserSummary>>,
    operations: Mutex<Vec<String>>,
    fail_all: bool,
}

impl StubUserAdminService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with a handful of users.
    pub fn with_sample_users() -> Self {
        let users = [
            (1, "Leanne Graham", "Bret", "Sincere@april.biz"),
            (2, "Ervin Howell", "Antonette", "Shanna@melissa.tv"),
            (3, "Clementine Bauch", "Samantha", "Nathan@yesenia.net"),
        ]
        .into_iter()
        .map(|(id, name, username, email)| UserSummary {
            id: UserId(id),
            name: name.to_string(),
            username: username.to_string(),
            email: email.to_string(),
        })
        .collect();

        Self::with_users(users)
    }

    pub fn with_users(users: Vec<UserSummary>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Self::default()
        }
    }

    /// Every call answers with a 500.
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    pub fn operations(&self) -> Vec<String> {
        self.operations.lock().map(|ops| ops.clone()).unwrap_or_default()
    }

    fn record(&self, operation: String) -> ApiResult<()> {
        if let Ok(mut ops) = self.operations.lock() {
            ops.push(operation);
        }
        if self.fail_all {
            return Err(status(StatusCode::INTERNAL_SERVER_ERROR));
        }
        Ok(())
    }

    fn with_users_mut<R>(&self, f: impl FnOnce(&mut Vec<UserSummary>) -> R) -> R {
        let mut guard = match self.users.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }
}

fn status(status: StatusCode) -> ApiError {
    ApiError::Status {
        status,
        body: String::new(),
    }
}

#[async_trait]
impl UserAdminService for StubUserAdminService {
    async fn list_users(&self) -> ApiResult<Vec<UserSummary>> {
        self.record("list_users".to_string())?;
        Ok(self.with_users_mut(|users| users.clone()))
    }

    async fn get_user(&self, user_id: UserId) -> ApiResult<UserDetail> {
        self.record(format!("get_user({user_id})"))?;
        self.with_users_mut(|users| {
            users
                .iter()
                .find(|u| u.id == user_id)
                .map(|u| UserDetail {
                    id: u.id,
                    name: u.name.clone(),
                    email: u.email.clone(),
                    phone: "1-770-736-8031".to_string(),
                    address: Address {
                        street: "Kulas Light".to_string(),
                        city: "Gwenborough".to_string(),
                    },
                })
                .ok_or_else(|| status(StatusCode::NOT_FOUND))
        })
    }

    async fn create_user(&self, req: NewUser) -> ApiResult<UserSummary> {
        self.record(format!("create_user({})", req.username))?;
        Ok(self.with_users_mut(|users| {
            let next = users.iter().map(|u| u.id.get()).max().unwrap_or(0) + 1;
            let created = req.with_id(UserId(next));
            users.push(created.clone());
            created
        }))
    }

    async fn update_user(&self, user: UserSummary) -> ApiResult<()> {
        self.record(format!("update_user({})", user.id))?;
        self.with_users_mut(|users| {
            match users.iter_mut().find(|u| u.id == user.id) {
                Some(existing) => {
                    *existing = user;
                    Ok(())
                }
                None => Err(status(StatusCode::NOT_FOUND)),
            }
        })
    }

    async fn delete_user(&self, user_id: UserId) -> ApiResult<()> {
        self.record(format!("delete_user({user_id})"))?;
        self.with_users_mut(|users| {
            let before = users.len();
            users.retain(|u| u.id != user_id);
            if users.len() == before {
                Err(status(StatusCode::NOT_FOUND))
            } else {
                Ok(())
            }
        })
    }
}
