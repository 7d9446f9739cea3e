use crate::core::leave::candidates;
use crate::core::state::AppState;
use crate::db::lock::RunLock;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Requested changes to the leave set, applied as clear → add → remove.
#[derive(Debug, Default, Clone)]
pub struct LeaveChanges {
    pub add: Vec<String>,
    pub remove: Vec<String>,
    pub clear: bool,
}

impl LeaveChanges {
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty() && !self.clear
    }
}

pub struct OnLeaveLogic;

impl OnLeaveLogic {
    /// Apply the changes and persist dataset + leave set. The dataset itself
    /// is never touched.
    ///
    /// Holds the run lock from load to persist, so a concurrent `process`
    /// cannot interleave with it.
    pub fn update(pool: &mut DbPool, changes: &LeaveChanges) -> AppResult<AppState> {
        if changes.is_empty() {
            return AppState::load(pool);
        }

        let _lock = RunLock::acquire(&pool.path)?;
        let mut state = AppState::load(pool)?;

        let known = candidates(state.dataset());

        if changes.clear {
            state.leave_mut().clear();
        }

        for agent in &changes.add {
            if !known.iter().any(|k| k == agent.trim()) {
                warning(format!(
                    "Agent '{}' is not in the current dataset; kept on leave anyway.",
                    agent.trim()
                ));
            }
            state.leave_mut().add(agent);
        }

        for agent in &changes.remove {
            if !state.leave_mut().remove(agent) {
                warning(format!("Agent '{}' was not on leave.", agent.trim()));
            }
        }

        state.persist(pool)?;

        ttlog_quiet(
            &pool.conn,
            "leave",
            "",
            &format!(
                "Leave set saved: {} agent(s) [{}]",
                state.leave().len(),
                state.leave().sorted().join(", ")
            ),
        );

        Ok(state)
    }
}
