//! Leave type and leave request endpoints

use shared::models::{LeaveRequest, LeaveRequestInput, LeaveType, LeaveTypeInput};

use super::ResourceClient;
use crate::error::ClientResult;

impl ResourceClient {
    // ---- Leave types ----

    pub async fn leave_types(&self) -> ClientResult<Vec<LeaveType>> {
        self.http().get("/leave-types").await
    }

    pub async fn leave_type(&self, id: i64) -> ClientResult<LeaveType> {
        self.http().get(&format!("/leave-types/{id}")).await
    }

    pub async fn create_leave_type(&self, input: &LeaveTypeInput) -> ClientResult<LeaveType> {
        self.http().post("/leave-types", input).await
    }

    pub async fn update_leave_type(
        &self,
        id: i64,
        input: &LeaveTypeInput,
    ) -> ClientResult<LeaveType> {
        self.http().put(&format!("/leave-types/{id}"), input).await
    }

    pub async fn delete_leave_type(&self, id: i64) -> ClientResult<()> {
        self.http().delete(&format!("/leave-types/{id}")).await
    }

    // ---- Leave requests ----

    pub async fn leave_requests(&self) -> ClientResult<Vec<LeaveRequest>> {
        self.http().get("/leave-requests").await
    }

    pub async fn leave_requests_by_employee(
        &self,
        employee_id: i64,
    ) -> ClientResult<Vec<LeaveRequest>> {
        self.http()
            .get(&format!("/leave-requests/employee/{employee_id}"))
            .await
    }

    pub async fn create_leave_request(
        &self,
        input: &LeaveRequestInput,
    ) -> ClientResult<LeaveRequest> {
        self.http().post("/leave-requests", input).await
    }

    pub async fn approve_leave_request(
        &self,
        id: i64,
        approver_id: i64,
    ) -> ClientResult<LeaveRequest> {
        self.http()
            .put_empty(&format!("/leave-requests/{id}/approve/{approver_id}"))
            .await
    }

    pub async fn reject_leave_request(
        &self,
        id: i64,
        approver_id: i64,
    ) -> ClientResult<LeaveRequest> {
        self.http()
            .put_empty(&format!("/leave-requests/{id}/reject/{approver_id}"))
            .await
    }

    pub async fn delete_leave_request(&self, id: i64) -> ClientResult<()> {
        self.http().delete(&format!("/leave-requests/{id}")).await
    }
}
