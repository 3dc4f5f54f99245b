//! Employee endpoints

use shared::models::{Employee, EmployeeInput};

use super::ResourceClient;
use crate::error::ClientResult;

impl ResourceClient {
    pub async fn employees(&self) -> ClientResult<Vec<Employee>> {
        self.http().get("/employees").await
    }

    pub async fn employee(&self, id: i64) -> ClientResult<Employee> {
        self.http().get(&format!("/employees/{id}")).await
    }

    pub async fn employees_by_department(&self, department_id: i64) -> ClientResult<Vec<Employee>> {
        self.http()
            .get(&format!("/employees/department/{department_id}"))
            .await
    }

    pub async fn employees_by_role(&self, role_id: i64) -> ClientResult<Vec<Employee>> {
        self.http().get(&format!("/employees/role/{role_id}")).await
    }

    pub async fn create_employee(&self, input: &EmployeeInput) -> ClientResult<Employee> {
        self.http().post("/employees", input).await
    }

    pub async fn update_employee(&self, id: i64, input: &EmployeeInput) -> ClientResult<Employee> {
        self.http().put(&format!("/employees/{id}"), input).await
    }

    /// Toggles the backend status flag, e.g. "ACTIVE" / "INACTIVE".
    pub async fn update_employee_status(&self, id: i64, status: &str) -> ClientResult<Employee> {
        self.http()
            .patch_empty(&format!("/employees/{id}/status?status={status}"))
            .await
    }

    pub async fn delete_employee(&self, id: i64) -> ClientResult<()> {
        self.http().delete(&format!("/employees/{id}")).await
    }
}
