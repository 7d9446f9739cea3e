//! Per-agent output record and its array-of-cells representation.

use crate::core::normalize::{format_duration, parse_hms};
use crate::errors::{AppError, AppResult};
use crate::models::cell::Cell;
use serde_json::Value;

/// Column headers of the summary view, in display order.
pub const HEADERS: [&str; 22] = [
    "Agent Name",
    "Answered",
    "Outbound",
    "Handle",
    "Alert - No Answer",
    "Non Productive",
    "Logged In",
    "Total Break",
    "Exceeded Break",
    "Idle",
    "Total Handle",
    "Total Talk",
    "Total Hold",
    "Total ACW",
    "Away",
    "Break",
    "Meal",
    "Training",
    "Meeting",
    "Mentoring",
    "Dispatch",
    "Productive",
];

/// Position of "Non Productive" in [`HEADERS`].
pub const NON_PRODUCTIVE_COLUMN: usize = 5;

/// Derived metrics for one agent. Durations are whole seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    pub agent_name: String,

    pub answered: Cell,
    pub outbound: Cell,
    pub handle: Cell,
    pub alert_no_answer: Cell,

    pub non_productive: u64,
    pub logged_in: u64,
    pub total_break: u64,
    pub exceeded_break: u64,
    pub idle: u64,
    pub total_handle: u64,
    pub total_talk: u64,
    pub total_hold: u64,
    pub total_acw: u64,
    pub away: u64,
    pub break_time: u64,
    pub meal: u64,
    pub training: u64,
    pub meeting: u64,
    pub mentoring: u64,
    pub dispatch: u64,
    pub productive: u64,
}

/// Full ranked result of one processing run.
pub type Dataset = Vec<DerivedMetrics>;

impl DerivedMetrics {
    fn counts(&self) -> [&Cell; 4] {
        [
            &self.answered,
            &self.outbound,
            &self.handle,
            &self.alert_no_answer,
        ]
    }

    /// Duration columns in [`HEADERS`] order (after the counts).
    pub fn durations(&self) -> [u64; 17] {
        [
            self.non_productive,
            self.logged_in,
            self.total_break,
            self.exceeded_break,
            self.idle,
            self.total_handle,
            self.total_talk,
            self.total_hold,
            self.total_acw,
            self.away,
            self.break_time,
            self.meal,
            self.training,
            self.meeting,
            self.mentoring,
            self.dispatch,
            self.productive,
        ]
    }

    /// Row as rendered in the table: counts raw, durations `HH:MM:SS`.
    pub fn display_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(HEADERS.len());
        row.push(self.agent_name.clone());
        row.extend(self.counts().iter().map(|c| c.to_string()));
        row.extend(self.durations().iter().map(|&s| format_duration(s)));
        row
    }

    /// Array-of-cells form used by the persisted snapshot.
    pub fn to_cells(&self) -> Vec<Value> {
        let mut cells = Vec::with_capacity(HEADERS.len());
        cells.push(Value::String(self.agent_name.clone()));
        for c in self.counts() {
            cells.push(serde_json::to_value(c).unwrap_or(Value::Null));
        }
        for s in self.durations() {
            cells.push(Value::String(format_duration(s)));
        }
        cells
    }

    /// Rebuild a record from its array-of-cells form.
    pub fn from_cells(cells: &[Value]) -> AppResult<Self> {
        if cells.len() != HEADERS.len() {
            return Err(AppError::Snapshot(format!(
                "expected {} cells per row, found {}",
                HEADERS.len(),
                cells.len()
            )));
        }

        let agent_name = match &cells[0] {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        let count = |i: usize| -> AppResult<Cell> {
            let cell: Cell = serde_json::from_value(cells[i].clone())?;
            Ok(cell.or_zero())
        };

        let secs = |i: usize| -> AppResult<u64> {
            let raw = cells[i].as_str().ok_or_else(|| {
                AppError::Snapshot(format!("column '{}' is not a duration", HEADERS[i]))
            })?;
            parse_hms(raw).ok_or_else(|| {
                AppError::Snapshot(format!("invalid duration '{}' in '{}'", raw, HEADERS[i]))
            })
        };

        Ok(Self {
            agent_name,
            answered: count(1)?,
            outbound: count(2)?,
            handle: count(3)?,
            alert_no_answer: count(4)?,
            non_productive: secs(5)?,
            logged_in: secs(6)?,
            total_break: secs(7)?,
            exceeded_break: secs(8)?,
            idle: secs(9)?,
            total_handle: secs(10)?,
            total_talk: secs(11)?,
            total_hold: secs(12)?,
            total_acw: secs(13)?,
            away: secs(14)?,
            break_time: secs(15)?,
            meal: secs(16)?,
            training: secs(17)?,
            meeting: secs(18)?,
            mentoring: secs(19)?,
            dispatch: secs(20)?,
            productive: secs(21)?,
        })
    }
}
