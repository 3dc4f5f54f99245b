//! Entity store
//!
//! In-memory collections for every backend resource, updated from
//! request outcomes the same way for each: a request bumps the slot's
//! generation and sets `loading`, the outcome is applied only if no
//! newer request for the same collection has started and the auth
//! context is unchanged. Failed requests keep the cached data and
//! record the error message.

mod attendance;
mod departments;
mod employees;
mod leave;
mod notifications;
mod salaries;
mod slot;

pub use slot::{CollectionView, RequestState};

use std::sync::Arc;

use tokio::sync::RwLock;

use shared::models::{
    Attendance, Department, EmailNotification, Employee, HasId, LeaveRequest, LeaveType, Role,
    Salary,
};

use crate::api::ResourceClient;
use crate::error::ClientResult;
use crate::session::SessionStore;
use slot::Slot;

/// Client-side cache of backend collections.
pub struct EntityStore {
    api: ResourceClient,
    session: Arc<SessionStore>,
    employees: RwLock<Slot<Employee>>,
    departments: RwLock<Slot<Department>>,
    roles: RwLock<Slot<Role>>,
    leave_types: RwLock<Slot<LeaveType>>,
    leave_requests: RwLock<Slot<LeaveRequest>>,
    attendance: RwLock<Slot<Attendance>>,
    salaries: RwLock<Slot<Salary>>,
    notifications: RwLock<Slot<EmailNotification>>,
}

impl EntityStore {
    pub fn new(api: ResourceClient, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            employees: RwLock::new(Slot::default()),
            departments: RwLock::new(Slot::default()),
            roles: RwLock::new(Slot::default()),
            leave_types: RwLock::new(Slot::default()),
            leave_requests: RwLock::new(Slot::default()),
            attendance: RwLock::new(Slot::default()),
            salaries: RwLock::new(Slot::default()),
            notifications: RwLock::new(Slot::default()),
        }
    }

    pub fn api(&self) -> &ResourceClient {
        &self.api
    }

    /// Drops every cached collection, typically on logout. In-flight
    /// requests become stale and their outcomes are discarded.
    pub async fn clear_all(&self) {
        self.employees.write().await.clear();
        self.departments.write().await.clear();
        self.roles.write().await.clear();
        self.leave_types.write().await.clear();
        self.leave_requests.write().await.clear();
        self.attendance.write().await.clear();
        self.salaries.write().await.clear();
        self.notifications.write().await.clear();
    }

    // ---- Generic request drivers ----
    //
    // Each driver snapshots the auth epoch and the slot generation
    // before awaiting the request, then applies the outcome only if
    // both are unchanged. A superseded outcome is returned to the
    // caller but never written into the slot.

    async fn run_list<T>(
        &self,
        slot: &RwLock<Slot<T>>,
        request: impl Future<Output = ClientResult<Vec<T>>>,
    ) -> ClientResult<()> {
        let epoch = self.session.epoch();
        let generation = slot.write().await.begin(false);
        let outcome = request.await;
        let mut guard = slot.write().await;
        if guard.is_stale(generation) {
            tracing::debug!("discarding superseded list response");
            return outcome.map(|_| ());
        }
        if self.session.epoch() != epoch {
            tracing::debug!("discarding list response from a stale auth context");
            guard.abandon();
            return outcome.map(|_| ());
        }
        match outcome {
            Ok(items) => {
                guard.finish_list(items);
                Ok(())
            }
            Err(e) => {
                guard.fail(&e);
                Err(e)
            }
        }
    }

    async fn run_current<T>(
        &self,
        slot: &RwLock<Slot<T>>,
        request: impl Future<Output = ClientResult<T>>,
    ) -> ClientResult<()> {
        let epoch = self.session.epoch();
        let generation = slot.write().await.begin(false);
        let outcome = request.await;
        let mut guard = slot.write().await;
        if guard.is_stale(generation) {
            tracing::debug!("discarding superseded detail response");
            return outcome.map(|_| ());
        }
        if self.session.epoch() != epoch {
            tracing::debug!("discarding detail response from a stale auth context");
            guard.abandon();
            return outcome.map(|_| ());
        }
        match outcome {
            Ok(item) => {
                guard.finish_current(item);
                Ok(())
            }
            Err(e) => {
                guard.fail(&e);
                Err(e)
            }
        }
    }

    async fn run_create<T>(
        &self,
        slot: &RwLock<Slot<T>>,
        request: impl Future<Output = ClientResult<T>>,
    ) -> ClientResult<()> {
        let epoch = self.session.epoch();
        let generation = slot.write().await.begin(true);
        let outcome = request.await;
        let mut guard = slot.write().await;
        if guard.is_stale(generation) {
            tracing::debug!("discarding superseded create response");
            return outcome.map(|_| ());
        }
        if self.session.epoch() != epoch {
            tracing::debug!("discarding create response from a stale auth context");
            guard.abandon();
            return outcome.map(|_| ());
        }
        match outcome {
            Ok(item) => {
                guard.finish_create(item);
                Ok(())
            }
            Err(e) => {
                guard.fail(&e);
                Err(e)
            }
        }
    }

    async fn run_update<T: HasId + Clone>(
        &self,
        slot: &RwLock<Slot<T>>,
        request: impl Future<Output = ClientResult<T>>,
    ) -> ClientResult<()> {
        let epoch = self.session.epoch();
        let generation = slot.write().await.begin(true);
        let outcome = request.await;
        let mut guard = slot.write().await;
        if guard.is_stale(generation) {
            tracing::debug!("discarding superseded update response");
            return outcome.map(|_| ());
        }
        if self.session.epoch() != epoch {
            tracing::debug!("discarding update response from a stale auth context");
            guard.abandon();
            return outcome.map(|_| ());
        }
        match outcome {
            Ok(item) => {
                guard.finish_update(item);
                Ok(())
            }
            Err(e) => {
                guard.fail(&e);
                Err(e)
            }
        }
    }

    async fn run_delete<T: HasId + Clone>(
        &self,
        slot: &RwLock<Slot<T>>,
        id: i64,
        request: impl Future<Output = ClientResult<()>>,
    ) -> ClientResult<()> {
        let epoch = self.session.epoch();
        let generation = slot.write().await.begin(true);
        let outcome = request.await;
        let mut guard = slot.write().await;
        if guard.is_stale(generation) {
            tracing::debug!("discarding superseded delete response");
            return outcome;
        }
        if self.session.epoch() != epoch {
            tracing::debug!("discarding delete response from a stale auth context");
            guard.abandon();
            return outcome;
        }
        match outcome {
            Ok(()) => {
                guard.finish_delete(id);
                Ok(())
            }
            Err(e) => {
                guard.fail(&e);
                Err(e)
            }
        }
    }

    /// Lightweight replacement: applies the returned entity in place
    /// without driving the loading/success flags, so toggles do not
    /// trigger form feedback.
    async fn run_replace<T: HasId + Clone>(
        &self,
        slot: &RwLock<Slot<T>>,
        request: impl Future<Output = ClientResult<T>>,
    ) -> ClientResult<()> {
        let epoch = self.session.epoch();
        let outcome = request.await;
        let mut guard = slot.write().await;
        if self.session.epoch() != epoch {
            tracing::debug!("discarding post-logout replace response");
            return outcome.map(|_| ());
        }
        match outcome {
            Ok(item) => {
                guard.replace_item(item);
                Ok(())
            }
            Err(e) => {
                guard.fail(&e);
                Err(e)
            }
        }
    }
}
