//! Process-wide view state with an explicit update and observer protocol.

use tracing::debug;

use super::filter::{self, CategoryFilter, FilterCriteria};
use super::model::Row;
use super::snapshot::Snapshot;

/// Consumer of the visible set, invoked after every state update.
pub type Observer = Box<dyn Fn(&[Row]) + Send>;

/// Owns the snapshot and the filter criteria.
///
/// The snapshot is only ever replaced as a whole value; criteria fields are
/// updated independently. After each update the holder recomputes the
/// visible set through the filter engine and notifies every registered
/// observer — consumers never invoke the filter themselves.
pub struct DashboardState {
    snapshot: Snapshot,
    criteria: FilterCriteria,
    observers: Vec<Observer>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::with_criteria(FilterCriteria::default())
    }

    pub fn with_criteria(criteria: FilterCriteria) -> Self {
        DashboardState {
            snapshot: Snapshot::empty(),
            criteria,
            observers: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn subscribe(&mut self, observer: impl Fn(&[Row]) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Publishes a fully built snapshot, replacing the previous one.
    pub fn replace_snapshot(&mut self, snapshot: Snapshot) {
        debug!("Replacing snapshot: {} rows", snapshot.len());
        self.snapshot = snapshot;
        self.notify();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.criteria.category = category;
        self.notify();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.criteria.text = text.into();
        self.notify();
    }

    /// The rows currently satisfying the criteria, freshly recomputed.
    pub fn visible(&self) -> Vec<Row> {
        filter::apply(&self.snapshot, &self.criteria)
    }

    fn notify(&self) {
        let visible = self.visible();
        for observer in &self.observers {
            observer(&visible);
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
