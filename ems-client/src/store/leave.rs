//! Leave type and leave request collection operations

use shared::models::{LeaveRequest, LeaveRequestInput, LeaveType, LeaveTypeInput};

use super::{CollectionView, EntityStore};
use crate::error::ClientResult;
use crate::validate;

impl EntityStore {
    // ---- Leave types ----

    pub async fn fetch_leave_types(&self) -> ClientResult<()> {
        self.run_list(&self.leave_types, self.api.leave_types())
            .await
    }

    pub async fn create_leave_type(&self, input: &LeaveTypeInput) -> ClientResult<()> {
        validate::check(input)?;
        self.run_create(&self.leave_types, self.api.create_leave_type(input))
            .await
    }

    pub async fn update_leave_type(&self, id: i64, input: &LeaveTypeInput) -> ClientResult<()> {
        validate::check(input)?;
        self.run_update(&self.leave_types, self.api.update_leave_type(id, input))
            .await
    }

    pub async fn delete_leave_type(&self, id: i64) -> ClientResult<()> {
        self.run_delete(&self.leave_types, id, self.api.delete_leave_type(id))
            .await
    }

    pub async fn leave_types_view(&self) -> CollectionView<LeaveType> {
        self.leave_types.read().await.view()
    }

    pub async fn clear_leave_type_error(&self) {
        self.leave_types.write().await.clear_error();
    }

    pub async fn acknowledge_leave_type_operation(&self) {
        self.leave_types.write().await.acknowledge();
    }

    // ---- Leave requests ----

    pub async fn fetch_leave_requests(&self) -> ClientResult<()> {
        self.run_list(&self.leave_requests, self.api.leave_requests())
            .await
    }

    pub async fn fetch_leave_requests_by_employee(&self, employee_id: i64) -> ClientResult<()> {
        self.run_list(
            &self.leave_requests,
            self.api.leave_requests_by_employee(employee_id),
        )
        .await
    }

    pub async fn create_leave_request(&self, input: &LeaveRequestInput) -> ClientResult<()> {
        validate::check(input)?;
        self.run_create(&self.leave_requests, self.api.create_leave_request(input))
            .await
    }

    pub async fn approve_leave_request(&self, id: i64, approver_id: i64) -> ClientResult<()> {
        self.run_update(
            &self.leave_requests,
            self.api.approve_leave_request(id, approver_id),
        )
        .await
    }

    pub async fn reject_leave_request(&self, id: i64, approver_id: i64) -> ClientResult<()> {
        self.run_update(
            &self.leave_requests,
            self.api.reject_leave_request(id, approver_id),
        )
        .await
    }

    pub async fn delete_leave_request(&self, id: i64) -> ClientResult<()> {
        self.run_delete(&self.leave_requests, id, self.api.delete_leave_request(id))
            .await
    }

    pub async fn leave_requests_view(&self) -> CollectionView<LeaveRequest> {
        self.leave_requests.read().await.view()
    }

    pub async fn clear_leave_request_error(&self) {
        self.leave_requests.write().await.clear_error();
    }

    pub async fn acknowledge_leave_request_operation(&self) {
        self.leave_requests.write().await.acknowledge();
    }
}
