//! Employee collection operations

use shared::models::{Employee, EmployeeInput};

use super::{CollectionView, EntityStore};
use crate::error::ClientResult;
use crate::validate;

impl EntityStore {
    pub async fn fetch_employees(&self) -> ClientResult<()> {
        self.run_list(&self.employees, self.api.employees()).await
    }

    pub async fn fetch_employee(&self, id: i64) -> ClientResult<()> {
        self.run_current(&self.employees, self.api.employee(id))
            .await
    }

    pub async fn fetch_employees_by_department(&self, department_id: i64) -> ClientResult<()> {
        self.run_list(
            &self.employees,
            self.api.employees_by_department(department_id),
        )
        .await
    }

    pub async fn fetch_employees_by_role(&self, role_id: i64) -> ClientResult<()> {
        self.run_list(&self.employees, self.api.employees_by_role(role_id))
            .await
    }

    /// Form-level checks run first; an invalid payload never starts a
    /// request, so the loading flag is untouched on rejection.
    pub async fn create_employee(&self, input: &EmployeeInput) -> ClientResult<()> {
        validate::check(input)?;
        self.run_create(&self.employees, self.api.create_employee(input))
            .await
    }

    pub async fn update_employee(&self, id: i64, input: &EmployeeInput) -> ClientResult<()> {
        validate::check(input)?;
        self.run_update(&self.employees, self.api.update_employee(id, input))
            .await
    }

    /// Active/inactive toggle. Replaces the entity in place without
    /// driving the loading/success flags.
    pub async fn update_employee_status(&self, id: i64, status: &str) -> ClientResult<()> {
        self.run_replace(&self.employees, self.api.update_employee_status(id, status))
            .await
    }

    pub async fn delete_employee(&self, id: i64) -> ClientResult<()> {
        self.run_delete(&self.employees, id, self.api.delete_employee(id))
            .await
    }

    // ---- Selection and feedback ----

    pub async fn set_current_employee(&self, employee: Employee) {
        self.employees.write().await.current = Some(employee);
    }

    pub async fn clear_current_employee(&self) {
        self.employees.write().await.current = None;
    }

    pub async fn employees_view(&self) -> CollectionView<Employee> {
        self.employees.read().await.view()
    }

    pub async fn clear_employee_error(&self) {
        self.employees.write().await.clear_error();
    }

    pub async fn acknowledge_employee_operation(&self) {
        self.employees.write().await.acknowledge();
    }
}
