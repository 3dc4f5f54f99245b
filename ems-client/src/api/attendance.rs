//! Attendance endpoints

use chrono::NaiveDate;
use shared::models::{Attendance, AttendanceUpdate};

use super::ResourceClient;
use crate::error::ClientResult;

impl ResourceClient {
    pub async fn punch_in(&self, employee_id: i64) -> ClientResult<Attendance> {
        self.http()
            .post_empty(&format!("/attendance/punch-in/{employee_id}"))
            .await
    }

    pub async fn punch_out(&self, employee_id: i64) -> ClientResult<Attendance> {
        self.http()
            .post_empty(&format!("/attendance/punch-out/{employee_id}"))
            .await
    }

    pub async fn attendance_by_employee(&self, employee_id: i64) -> ClientResult<Vec<Attendance>> {
        self.http()
            .get(&format!("/attendance/employee/{employee_id}"))
            .await
    }

    pub async fn attendance_by_date(
        &self,
        employee_id: i64,
        date: NaiveDate,
    ) -> ClientResult<Attendance> {
        self.http()
            .get(&format!("/attendance/employee/{employee_id}/date/{date}"))
            .await
    }

    pub async fn monthly_attendance(
        &self,
        employee_id: i64,
        year: i32,
        month: u32,
    ) -> ClientResult<Vec<Attendance>> {
        self.http()
            .get(&format!(
                "/attendance/employee/{employee_id}/monthly?year={year}&month={month}"
            ))
            .await
    }

    pub async fn daily_attendance(&self, date: NaiveDate) -> ClientResult<Vec<Attendance>> {
        self.http().get(&format!("/attendance/daily/{date}")).await
    }

    pub async fn all_attendance(&self) -> ClientResult<Vec<Attendance>> {
        self.http().get("/attendance/all").await
    }

    pub async fn update_attendance(
        &self,
        id: i64,
        input: &AttendanceUpdate,
    ) -> ClientResult<Attendance> {
        self.http().put(&format!("/attendance/{id}"), input).await
    }

    pub async fn delete_attendance(&self, id: i64) -> ClientResult<()> {
        self.http().delete(&format!("/attendance/{id}")).await
    }
}
