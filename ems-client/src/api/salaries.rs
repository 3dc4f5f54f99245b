//! Salary endpoints

use shared::models::{Salary, SalaryInput};

use super::ResourceClient;
use crate::error::ClientResult;

impl ResourceClient {
    pub async fn salaries(&self) -> ClientResult<Vec<Salary>> {
        self.http().get("/salaries").await
    }

    pub async fn salary(&self, id: i64) -> ClientResult<Salary> {
        self.http().get(&format!("/salaries/{id}")).await
    }

    pub async fn salaries_by_employee(&self, employee_id: i64) -> ClientResult<Vec<Salary>> {
        self.http()
            .get(&format!("/salaries/employee/{employee_id}"))
            .await
    }

    pub async fn create_salary(&self, input: &SalaryInput) -> ClientResult<Salary> {
        self.http().post("/salaries", input).await
    }

    pub async fn update_salary(&self, id: i64, input: &SalaryInput) -> ClientResult<Salary> {
        self.http().put(&format!("/salaries/{id}"), input).await
    }

    pub async fn deactivate_salary(&self, id: i64) -> ClientResult<Salary> {
        self.http()
            .put_empty(&format!("/salaries/{id}/deactivate"))
            .await
    }

    pub async fn delete_salary(&self, id: i64) -> ClientResult<()> {
        self.http().delete(&format!("/salaries/{id}")).await
    }
}
