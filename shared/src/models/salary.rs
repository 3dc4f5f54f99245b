//! Salary model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::HasId;

/// Salary entity. A single employee can have multiple salary records
/// over time; at most one is active.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Salary {
    pub id: i64,
    pub employee_id: i64,
    pub basic_salary: Decimal,
    #[serde(default)]
    pub allowances: Option<Decimal>,
    #[serde(default)]
    pub deductions: Option<Decimal>,
    /// Computed by the backend.
    #[serde(default)]
    pub net_salary: Option<Decimal>,
    #[serde(default)]
    pub effective_date: Option<NaiveDate>,
    pub active: bool,
}

impl HasId for Salary {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Salary form payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SalaryInput {
    #[validate(required(message = "Employee is required"))]
    pub employee_id: Option<i64>,
    #[validate(required(message = "Basic salary is required"))]
    pub basic_salary: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowances: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deductions: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
}
