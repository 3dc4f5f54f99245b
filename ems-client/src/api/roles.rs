//! Role endpoints

use shared::models::{Role, RoleInput};

use super::ResourceClient;
use crate::error::ClientResult;

impl ResourceClient {
    pub async fn roles(&self) -> ClientResult<Vec<Role>> {
        self.http().get("/roles").await
    }

    pub async fn role(&self, id: i64) -> ClientResult<Role> {
        self.http().get(&format!("/roles/{id}")).await
    }

    pub async fn create_role(&self, input: &RoleInput) -> ClientResult<Role> {
        self.http().post("/roles", input).await
    }

    pub async fn update_role(&self, id: i64, input: &RoleInput) -> ClientResult<Role> {
        self.http().put(&format!("/roles/{id}"), input).await
    }

    pub async fn delete_role(&self, id: i64) -> ClientResult<()> {
        self.http().delete(&format!("/roles/{id}")).await
    }
}
