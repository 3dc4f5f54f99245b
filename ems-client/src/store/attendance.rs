//! Attendance collection operations

use chrono::NaiveDate;
use shared::models::{Attendance, AttendanceUpdate};

use super::{CollectionView, EntityStore};
use crate::error::ClientResult;

impl EntityStore {
    /// Records a punch-in. The returned record is appended so today's
    /// view updates without a refetch.
    pub async fn punch_in(&self, employee_id: i64) -> ClientResult<()> {
        self.run_create(&self.attendance, self.api.punch_in(employee_id))
            .await
    }

    /// Records a punch-out, replacing the open record for the day.
    pub async fn punch_out(&self, employee_id: i64) -> ClientResult<()> {
        self.run_update(&self.attendance, self.api.punch_out(employee_id))
            .await
    }

    pub async fn fetch_attendance_by_employee(&self, employee_id: i64) -> ClientResult<()> {
        self.run_list(&self.attendance, self.api.attendance_by_employee(employee_id))
            .await
    }

    pub async fn fetch_monthly_attendance(
        &self,
        employee_id: i64,
        year: i32,
        month: u32,
    ) -> ClientResult<()> {
        self.run_list(
            &self.attendance,
            self.api.monthly_attendance(employee_id, year, month),
        )
        .await
    }

    pub async fn fetch_daily_attendance(&self, date: NaiveDate) -> ClientResult<()> {
        self.run_list(&self.attendance, self.api.daily_attendance(date))
            .await
    }

    pub async fn fetch_all_attendance(&self) -> ClientResult<()> {
        self.run_list(&self.attendance, self.api.all_attendance())
            .await
    }

    pub async fn update_attendance(&self, id: i64, input: &AttendanceUpdate) -> ClientResult<()> {
        self.run_update(&self.attendance, self.api.update_attendance(id, input))
            .await
    }

    pub async fn delete_attendance(&self, id: i64) -> ClientResult<()> {
        self.run_delete(&self.attendance, id, self.api.delete_attendance(id))
            .await
    }

    pub async fn attendance_view(&self) -> CollectionView<Attendance> {
        self.attendance.read().await.view()
    }

    pub async fn clear_attendance_error(&self) {
        self.attendance.write().await.clear_error();
    }

    pub async fn acknowledge_attendance_operation(&self) {
        self.attendance.write().await.acknowledge();
    }
}
