//! On-leave exclusions.
//!
//! The leave set only hides agents from the view. The dataset it is applied
//! to is never shrunk or reordered; every view is re-derived from it.

use crate::models::metrics::DerivedMetrics;
use std::cmp::Ordering;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveSet {
    agents: BTreeSet<String>,
}

impl LeaveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the agent was not already on leave.
    pub fn add(&mut self, agent: &str) -> bool {
        let agent = agent.trim();
        if agent.is_empty() {
            return false;
        }
        self.agents.insert(agent.to_string())
    }

    pub fn remove(&mut self, agent: &str) -> bool {
        self.agents.remove(agent.trim())
    }

    pub fn clear(&mut self) {
        self.agents.clear();
    }

    pub fn contains(&self, agent: &str) -> bool {
        self.agents.contains(agent)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Agents in display order (case-insensitive alphabetical).
    pub fn sorted(&self) -> Vec<String> {
        let mut out: Vec<String> = self.agents.iter().cloned().collect();
        out.sort_by(|a, b| display_order(a, b));
        out
    }
}

impl<S: AsRef<str>> FromIterator<S> for LeaveSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = LeaveSet::new();
        for agent in iter {
            set.add(agent.as_ref());
        }
        set
    }
}

fn display_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Rows of `dataset` whose agent is not on leave, in dataset order.
pub fn apply_leave_filter<'a>(
    dataset: &'a [DerivedMetrics],
    leave: &LeaveSet,
) -> Vec<&'a DerivedMetrics> {
    dataset
        .iter()
        .filter(|row| !leave.contains(&row.agent_name))
        .collect()
}

/// Distinct agents of the full dataset, alphabetically, for picking who is
/// on leave.
pub fn candidates(dataset: &[DerivedMetrics]) -> Vec<String> {
    let unique: BTreeSet<&str> = dataset.iter().map(|r| r.agent_name.as_str()).collect();
    let mut out: Vec<String> = unique.into_iter().map(str::to_string).collect();
    out.sort_by(|a, b| display_order(a, b));
    out
}
