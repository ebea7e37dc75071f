use async_trait::async_trait;
use std::sync::Arc;
use userdesk_model::{
    NewUser, UserDetail, UserId, UserSummary,
    routes::{users, utils},
};

use crate::infra::api_client::{ApiClient, ApiResult};

#[async_trait]
pub trait UserAdminService: Send + Sync {
    /// List every user in server order
    async fn list_users(&self) -> ApiResult<Vec<UserSummary>>;

    /// Fetch the detail projection of a single user
    async fn get_user(&self, user_id: UserId) -> ApiResult<UserDetail>;

    /// Create a user; the returned record carries the server-assigned id
    async fn create_user(&self, req: NewUser) -> ApiResult<UserSummary>;

    /// Replace a user record. The response body is not used.
    async fn update_user(&self, user: UserSummary) -> ApiResult<()>;

    async fn delete_user(&self, user_id: UserId) -> ApiResult<()>;
}

#[derive(Clone, Debug)]
pub struct UserAdminApiAdapter {
    client: Arc<ApiClient>,
}

impl UserAdminApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn item_path(user_id: UserId) -> String {
        utils::replace_param(users::ITEM, "{id}", user_id.to_string())
    }
}

#[async_trait]
impl UserAdminService for UserAdminApiAdapter {
    async fn list_users(&self) -> ApiResult<Vec<UserSummary>> {
        self.client.get(users::COLLECTION).await
    }

    async fn get_user(&self, user_id: UserId) -> ApiResult<UserDetail> {
        self.client.get(&Self::item_path(user_id)).await
    }

    async fn create_user(&self, req: NewUser) -> ApiResult<UserSummary> {
        self.client.post(users::COLLECTION, &req).await
    }

    async fn update_user(&self, user: UserSummary) -> ApiResult<()> {
        self.client.put(&Self::item_path(user.id), &user).await
    }

    async fn delete_user(&self, user_id: UserId) -> ApiResult<()> {
        self.client.delete(&Self::item_path(user_id)).await
    }
}
