//! Department and role collection operations

use shared::models::{Department, DepartmentInput, Role, RoleInput};

use super::{CollectionView, EntityStore};
use crate::error::ClientResult;
use crate::validate;

impl EntityStore {
    // ---- Departments ----

    pub async fn fetch_departments(&self) -> ClientResult<()> {
        self.run_list(&self.departments, self.api.departments())
            .await
    }

    pub async fn fetch_department(&self, id: i64) -> ClientResult<()> {
        self.run_current(&self.departments, self.api.department(id))
            .await
    }

    pub async fn create_department(&self, input: &DepartmentInput) -> ClientResult<()> {
        validate::check(input)?;
        self.run_create(&self.departments, self.api.create_department(input))
            .await
    }

    pub async fn update_department(&self, id: i64, input: &DepartmentInput) -> ClientResult<()> {
        validate::check(input)?;
        self.run_update(&self.departments, self.api.update_department(id, input))
            .await
    }

    pub async fn delete_department(&self, id: i64) -> ClientResult<()> {
        self.run_delete(&self.departments, id, self.api.delete_department(id))
            .await
    }

    pub async fn departments_view(&self) -> CollectionView<Department> {
        self.departments.read().await.view()
    }

    pub async fn clear_department_error(&self) {
        self.departments.write().await.clear_error();
    }

    pub async fn acknowledge_department_operation(&self) {
        self.departments.write().await.acknowledge();
    }

    // ---- Roles ----

    pub async fn fetch_roles(&self) -> ClientResult<()> {
        self.run_list(&self.roles, self.api.roles()).await
    }

    pub async fn fetch_role(&self, id: i64) -> ClientResult<()> {
        self.run_current(&self.roles, self.api.role(id)).await
    }

    pub async fn create_role(&self, input: &RoleInput) -> ClientResult<()> {
        validate::check(input)?;
        self.run_create(&self.roles, self.api.create_role(input))
            .await
    }

    pub async fn update_role(&self, id: i64, input: &RoleInput) -> ClientResult<()> {
        validate::check(input)?;
        self.run_update(&self.roles, self.api.update_role(id, input))
            .await
    }

    pub async fn delete_role(&self, id: i64) -> ClientResult<()> {
        self.run_delete(&self.roles, id, self.api.delete_role(id))
            .await
    }

    pub async fn roles_view(&self) -> CollectionView<Role> {
        self.roles.read().await.view()
    }

    pub async fn clear_role_error(&self) {
        self.roles.write().await.clear_error();
    }

    pub async fn acknowledge_role_operation(&self) {
        self.roles.write().await.acknowledge();
    }
}
