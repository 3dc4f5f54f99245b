//! Salary collection operations

use shared::models::{Salary, SalaryInput};

use super::{CollectionView, EntityStore};
use crate::error::ClientResult;
use crate::validate;

impl EntityStore {
    pub async fn fetch_salaries(&self) -> ClientResult<()> {
        self.run_list(&self.salaries, self.api.salaries()).await
    }

    pub async fn fetch_salaries_by_employee(&self, employee_id: i64) -> ClientResult<()> {
        self.run_list(&self.salaries, self.api.salaries_by_employee(employee_id))
            .await
    }

    pub async fn create_salary(&self, input: &SalaryInput) -> ClientResult<()> {
        validate::check(input)?;
        self.run_create(&self.salaries, self.api.create_salary(input))
            .await
    }

    pub async fn update_salary(&self, id: i64, input: &SalaryInput) -> ClientResult<()> {
        validate::check(input)?;
        self.run_update(&self.salaries, self.api.update_salary(id, input))
            .await
    }

    /// Marks a salary record inactive; the backend returns the updated
    /// record, which replaces the cached one.
    pub async fn deactivate_salary(&self, id: i64) -> ClientResult<()> {
        self.run_update(&self.salaries, self.api.deactivate_salary(id))
            .await
    }

    pub async fn delete_salary(&self, id: i64) -> ClientResult<()> {
        self.run_delete(&self.salaries, id, self.api.delete_salary(id))
            .await
    }

    pub async fn salaries_view(&self) -> CollectionView<Salary> {
        self.salaries.read().await.view()
    }

    pub async fn clear_salary_error(&self) {
        self.salaries.write().await.clear_error();
    }

    pub async fn acknowledge_salary_operation(&self) {
        self.salaries.write().await.acknowledge();
    }
}
