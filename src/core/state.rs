//! Application state: the full dataset and the leave set, owned by one
//! controller and passed around explicitly.
//!
//! Lifecycle: starts empty, is loaded from the store, and has its dataset
//! replaced wholesale by each processing run. The leave set lives
//! independently of the dataset.

use crate::core::leave::{LeaveSet, apply_leave_filter};
use crate::db::pool::DbPool;
use crate::db::snapshot::{self, Snapshot};
use crate::errors::AppResult;
use crate::models::metrics::{Dataset, DerivedMetrics};

#[derive(Debug, Clone, Default)]
pub struct AppState {
    dataset: Dataset,
    leave: LeaveSet,
    last_updated: Option<String>,
}

impl AppState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snap: Snapshot) -> Self {
        Self {
            dataset: snap.rows,
            leave: snap.on_leave.iter().collect(),
            last_updated: snap.last_updated,
        }
    }

    /// Restore the persisted state; a store without a snapshot yields the
    /// empty state.
    pub fn load(pool: &DbPool) -> AppResult<Self> {
        Ok(snapshot::load(pool)?
            .map(Self::from_snapshot)
            .unwrap_or_default())
    }

    /// Overwrite the persisted record with the full dataset and leave set.
    pub fn persist(&mut self, pool: &mut DbPool) -> AppResult<()> {
        let written = snapshot::save(pool, &self.dataset, &self.leave.sorted())?;
        self.last_updated = Some(written);
        Ok(())
    }

    pub fn dataset(&self) -> &[DerivedMetrics] {
        &self.dataset
    }

    pub fn leave(&self) -> &LeaveSet {
        &self.leave
    }

    pub fn leave_mut(&mut self) -> &mut LeaveSet {
        &mut self.leave
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    /// Replace the dataset with the result of a new run.
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
    }

    /// Rows to display: the full dataset minus agents on leave.
    pub fn visible(&self) -> Vec<&DerivedMetrics> {
        apply_leave_filter(&self.dataset, &self.leave)
    }
}
