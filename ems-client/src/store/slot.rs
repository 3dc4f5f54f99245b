//! Collection slot: one cached collection plus its request lifecycle.

use shared::models::HasId;

use crate::error::ClientError;

/// Request lifecycle flags for one collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestState {
    /// A request for this collection is in flight.
    pub loading: bool,
    /// Message from the most recent failed request. Cleared when a new
    /// request starts.
    pub error: Option<String>,
    /// Set when a mutation (create/update/delete) succeeds. Stays set
    /// until explicitly acknowledged, so a UI can show a one-shot
    /// confirmation.
    pub operation_success: bool,
}

/// One cached collection: items, an optional detail selection, and the
/// request state, tagged with a generation counter so late responses
/// from superseded requests are discarded.
#[derive(Debug)]
pub struct Slot<T> {
    pub items: Vec<T>,
    pub current: Option<T>,
    pub state: RequestState,
    generation: u64,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            state: RequestState::default(),
            generation: 0,
        }
    }
}

impl<T> Slot<T> {
    /// Marks a new request as started and returns its generation.
    /// Mutations also clear the stale success flag; plain fetches
    /// leave it alone.
    pub fn begin(&mut self, mutating: bool) -> u64 {
        self.generation += 1;
        self.state.loading = true;
        self.state.error = None;
        if mutating {
            self.state.operation_success = false;
        }
        self.generation
    }

    /// True when a newer request has started since `generation` was
    /// issued. Outcomes from stale requests must not be applied.
    pub fn is_stale(&self, generation: u64) -> bool {
        self.generation != generation
    }

    /// Fetch succeeded: replace the collection wholesale.
    pub fn finish_list(&mut self, items: Vec<T>) {
        self.state.loading = false;
        self.items = items;
    }

    /// Detail fetch succeeded: replace the current selection.
    pub fn finish_current(&mut self, item: T) {
        self.state.loading = false;
        self.current = Some(item);
    }

    /// Create succeeded: append without refetching.
    pub fn finish_create(&mut self, item: T) {
        self.state.loading = false;
        self.state.operation_success = true;
        self.items.push(item);
    }

    /// Request failed: keep whatever data is cached, record the error.
    pub fn fail(&mut self, error: &ClientError) {
        self.state.loading = false;
        self.state.error = Some(error.to_string());
    }

    /// The outcome arrived under a different auth context and must not
    /// be applied; only the loading flag is released.
    pub fn abandon(&mut self) {
        self.state.loading = false;
    }

    /// Drops all cached data and lifecycle flags, and bumps the
    /// generation so in-flight requests become stale.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.items.clear();
        self.current = None;
        self.state = RequestState::default();
    }

    pub fn clear_error(&mut self) {
        self.state.error = None;
    }

    pub fn acknowledge(&mut self) {
        self.state.operation_success = false;
    }
}

impl<T: HasId + Clone> Slot<T> {
    /// Update succeeded: replace the matching item in place and refresh
    /// the detail selection when it points at the same entity.
    pub fn finish_update(&mut self, item: T) {
        self.state.loading = false;
        self.state.operation_success = true;
        if let Some(existing) = self.items.iter_mut().find(|e| e.id() == item.id()) {
            *existing = item.clone();
        }
        if self.current.as_ref().is_some_and(|c| c.id() == item.id()) {
            self.current = Some(item);
        }
    }

    /// Delete succeeded: drop the item from the collection.
    pub fn finish_delete(&mut self, id: i64) {
        self.state.loading = false;
        self.state.operation_success = true;
        self.items.retain(|e| e.id() != id);
        if self.current.as_ref().is_some_and(|c| c.id() == id) {
            self.current = None;
        }
    }

    /// In-place replacement without touching the lifecycle flags, for
    /// lightweight toggles that should not drive form feedback.
    pub fn replace_item(&mut self, item: T) {
        if let Some(existing) = self.items.iter_mut().find(|e| e.id() == item.id()) {
            *existing = item;
        }
    }
}

/// Read-only snapshot of a slot, cheap to hand to rendering code.
#[derive(Debug, Clone)]
pub struct CollectionView<T> {
    pub items: Vec<T>,
    pub current: Option<T>,
    pub state: RequestState,
}

impl<T: Clone> Slot<T> {
    pub fn view(&self) -> CollectionView<T> {
        CollectionView {
            items: self.items.clone(),
            current: self.current.clone(),
            state: self.state.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Department;

    fn dept(id: i64, name: &str) -> Department {
        Department {
            id,
            name: name.into(),
            description: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn begin_clears_error_and_sets_loading() {
        let mut slot: Slot<Department> = Slot::default();
        slot.state.error = Some("old failure".into());
        let generation = slot.begin(false);
        assert!(slot.state.loading);
        assert!(slot.state.error.is_none());
        assert!(!slot.is_stale(generation));
    }

    #[test]
    fn fetch_does_not_clear_success_flag() {
        let mut slot: Slot<Department> = Slot::default();
        slot.state.operation_success = true;
        slot.begin(false);
        assert!(slot.state.operation_success);
        slot.begin(true);
        assert!(!slot.state.operation_success);
    }

    #[test]
    fn newer_request_makes_older_generation_stale() {
        let mut slot: Slot<Department> = Slot::default();
        let first = slot.begin(false);
        let second = slot.begin(false);
        assert!(slot.is_stale(first));
        assert!(!slot.is_stale(second));
    }

    #[test]
    fn update_replaces_item_and_current() {
        let mut slot: Slot<Department> = Slot::default();
        slot.items = vec![dept(1, "HR"), dept(2, "IT")];
        slot.current = Some(dept(2, "IT"));
        slot.begin(true);

        slot.finish_update(dept(2, "Engineering"));
        assert_eq!(slot.items[1].name, "Engineering");
        assert_eq!(slot.current.as_ref().map(|c| c.name.as_str()), Some("Engineering"));
        assert!(slot.state.operation_success);
        assert!(!slot.state.loading);
    }

    #[test]
    fn update_leaves_unrelated_current_alone() {
        let mut slot: Slot<Department> = Slot::default();
        slot.items = vec![dept(1, "HR"), dept(2, "IT")];
        slot.current = Some(dept(1, "HR"));
        slot.begin(true);

        slot.finish_update(dept(2, "Engineering"));
        assert_eq!(slot.current.as_ref().map(|c| c.id), Some(1));
    }

    #[test]
    fn delete_removes_item_and_matching_current() {
        let mut slot: Slot<Department> = Slot::default();
        slot.items = vec![dept(1, "HR"), dept(2, "IT")];
        slot.current = Some(dept(1, "HR"));
        slot.begin(true);

        slot.finish_delete(1);
        assert_eq!(slot.items.len(), 1);
        assert_eq!(slot.items[0].id, 2);
        assert!(slot.current.is_none());
    }

    #[test]
    fn failure_preserves_cached_items() {
        let mut slot: Slot<Department> = Slot::default();
        slot.items = vec![dept(1, "HR")];
        slot.begin(false);

        slot.fail(&ClientError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        });
        assert_eq!(slot.items.len(), 1);
        assert_eq!(slot.state.error.as_deref(), Some("Internal Server Error"));
        assert!(!slot.state.loading);
    }

    #[test]
    fn replace_item_skips_lifecycle_flags() {
        let mut slot: Slot<Department> = Slot::default();
        slot.items = vec![dept(1, "HR")];

        slot.replace_item(dept(1, "People Ops"));
        assert_eq!(slot.items[0].name, "People Ops");
        assert!(!slot.state.operation_success);
        assert!(!slot.state.loading);
    }

    #[test]
    fn success_flag_persists_until_acknowledged() {
        let mut slot: Slot<Department> = Slot::default();
        slot.begin(true);
        slot.finish_create(dept(1, "HR"));
        assert!(slot.state.operation_success);

        slot.begin(false);
        slot.finish_list(vec![dept(1, "HR")]);
        assert!(slot.state.operation_success);

        slot.acknowledge();
        assert!(!slot.state.operation_success);
    }
}
