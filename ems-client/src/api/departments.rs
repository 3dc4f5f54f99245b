//! Department endpoints

use shared::models::{Department, DepartmentInput};

use super::ResourceClient;
use crate::error::ClientResult;

impl ResourceClient {
    pub async fn departments(&self) -> ClientResult<Vec<Department>> {
        self.http().get("/departments").await
    }

    pub async fn department(&self, id: i64) -> ClientResult<Department> {
        self.http().get(&format!("/departments/{id}")).await
    }

    pub async fn create_department(&self, input: &DepartmentInput) -> ClientResult<Department> {
        self.http().post("/departments", input).await
    }

    pub async fn update_department(
        &self,
        id: i64,
        input: &DepartmentInput,
    ) -> ClientResult<Department> {
        self.http().put(&format!("/departments/{id}"), input).await
    }

    pub async fn delete_department(&self, id: i64) -> ClientResult<()> {
        self.http().delete(&format!("/departments/{id}")).await
    }
}
