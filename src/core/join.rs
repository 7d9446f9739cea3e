//! Joining the two reports on the agent name.

use crate::core::columns::{ColumnIndex, Field, PerfField, StatusField};
use crate::models::cell::Cell;
use std::collections::HashMap;

/// Both raw rows for one agent; an input the agent is missing from
/// contributes an empty row.
#[derive(Debug, Clone, Copy)]
pub struct AgentRecord<'a> {
    pub agent: &'a str,
    pub perf: &'a [Cell],
    pub status: &'a [Cell],
}

/// Per-input lookup maps plus the union of agent identities.
#[derive(Debug, Default)]
pub struct JoinedAgents<'a> {
    agents: Vec<String>,
    perf: HashMap<String, &'a [Cell]>,
    status: HashMap<String, &'a [Cell]>,
}

impl<'a> JoinedAgents<'a> {
    /// Distinct agents, performance-report order first, then status-only ones.
    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn perf_row(&self, agent: &str) -> Option<&'a [Cell]> {
        self.perf.get(agent).copied()
    }

    pub fn status_row(&self, agent: &str) -> Option<&'a [Cell]> {
        self.status.get(agent).copied()
    }

    pub fn records(&self) -> impl Iterator<Item = AgentRecord<'_>> + '_ {
        self.agents.iter().map(|agent| AgentRecord {
            agent: agent.as_str(),
            perf: self.perf_row(agent).unwrap_or(&[]),
            status: self.status_row(agent).unwrap_or(&[]),
        })
    }
}

/// Map each data row by its agent identity. Rows without an identity are
/// dropped; a repeated identity keeps its last row. Also returns the
/// identities in first-seen order.
fn rows_by_agent<'a, F: Field>(
    rows: &'a [Vec<Cell>],
    index: &ColumnIndex<F>,
    agent_field: F,
) -> (HashMap<String, &'a [Cell]>, Vec<String>) {
    let mut map = HashMap::new();
    let mut order = Vec::new();

    for row in rows {
        let Some(agent) = index.cell(row, agent_field).as_label() else {
            continue;
        };

        if map.insert(agent.clone(), row.as_slice()).is_none() {
            order.push(agent);
        }
    }

    (map, order)
}

pub fn join_by_agent<'a>(
    perf_rows: &'a [Vec<Cell>],
    perf_idx: &ColumnIndex<PerfField>,
    status_rows: &'a [Vec<Cell>],
    status_idx: &ColumnIndex<StatusField>,
) -> JoinedAgents<'a> {
    let (perf, mut agents) = rows_by_agent(perf_rows, perf_idx, PerfField::Agent);
    let (status, status_order) = rows_by_agent(status_rows, status_idx, StatusField::Agent);

    agents.extend(
        status_order
            .into_iter()
            .filter(|agent| !perf.contains_key(agent)),
    );

    log::debug!(
        "join: {} performance agents, {} status agents, {} distinct",
        perf.len(),
        status.len(),
        agents.len()
    );

    JoinedAgents {
        agents,
        perf,
        status,
    }
}
