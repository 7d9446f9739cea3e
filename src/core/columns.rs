//! Column resolution: logical fields → positions in an arbitrary header row.
//!
//! Matching is exact after trimming the header cell, case-sensitive, and the
//! first matching column wins. A field that cannot be found is simply absent;
//! every lookup on it yields an empty cell.

use crate::core::normalize::normalize_to_seconds;
use crate::models::cell::{Cell, EMPTY_CELL};
use std::collections::HashMap;
use std::hash::Hash;

/// A logical column of one of the two report schemas.
pub trait Field: Copy + Eq + Hash + 'static {
    /// Header text the column is recognised by.
    fn label(self) -> &'static str;

    /// Every field of the schema.
    fn all() -> &'static [Self];
}

/// Columns of the "Agent Performance Summary" export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerfField {
    Agent,
    Answered,
    Outbound,
    Handle,
    AlertNoAnswer,
    TotalHandle,
    TotalTalk,
    TotalHold,
    TotalAcw,
}

impl Field for PerfField {
    fn label(self) -> &'static str {
        match self {
            PerfField::Agent => "Agent Name",
            PerfField::Answered => "Answered",
            PerfField::Outbound => "Outbound",
            PerfField::Handle => "Handle",
            PerfField::AlertNoAnswer => "Alert - No Answer",
            PerfField::TotalHandle => "Total Handle",
            PerfField::TotalTalk => "Total Talk",
            PerfField::TotalHold => "Total Hold",
            PerfField::TotalAcw => "Total ACW",
        }
    }

    fn all() -> &'static [Self] {
        &[
            PerfField::Agent,
            PerfField::Answered,
            PerfField::Outbound,
            PerfField::Handle,
            PerfField::AlertNoAnswer,
            PerfField::TotalHandle,
            PerfField::TotalTalk,
            PerfField::TotalHold,
            PerfField::TotalAcw,
        ]
    }
}

/// Columns of the "Agent Status Summary" export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusField {
    Agent,
    LoggedIn,
    Idle,
    Busy,
    Away,
    Break,
    Meal,
    Meeting,
    Training,
    Mentoring,
}

impl Field for StatusField {
    fn label(self) -> &'static str {
        match self {
            StatusField::Agent => "Agent Name",
            StatusField::LoggedIn => "Logged In",
            StatusField::Idle => "Idle",
            StatusField::Busy => "Busy",
            StatusField::Away => "Away",
            StatusField::Break => "Break",
            StatusField::Meal => "Meal",
            StatusField::Meeting => "Meeting",
            StatusField::Training => "Training",
            StatusField::Mentoring => "Busy: Mentoring / Coaching",
        }
    }

    fn all() -> &'static [Self] {
        &[
            StatusField::Agent,
            StatusField::LoggedIn,
            StatusField::Idle,
            StatusField::Busy,
            StatusField::Away,
            StatusField::Break,
            StatusField::Meal,
            StatusField::Meeting,
            StatusField::Training,
            StatusField::Mentoring,
        ]
    }
}

/// Resolved positions for one grid.
#[derive(Debug, Clone)]
pub struct ColumnIndex<F: Field> {
    positions: HashMap<F, usize>,
}

impl<F: Field> ColumnIndex<F> {
    pub fn position(&self, field: F) -> Option<usize> {
        self.positions.get(&field).copied()
    }

    /// Cell of `field` in `row`, or the empty cell when the column is
    /// unknown or the row is too short.
    pub fn cell<'a>(&self, row: &'a [Cell], field: F) -> &'a Cell {
        self.position(field)
            .and_then(|i| row.get(i))
            .unwrap_or(&EMPTY_CELL)
    }

    /// Fields of the schema that the header did not provide.
    pub fn missing(&self) -> Vec<F> {
        F::all()
            .iter()
            .copied()
            .filter(|f| !self.positions.contains_key(f))
            .collect()
    }
}

/// Resolve `fields` against `header`, first match wins.
pub fn resolve_columns<F: Field>(header: &[Cell], fields: &[F]) -> ColumnIndex<F> {
    let labels: Vec<Option<String>> = header.iter().map(Cell::as_label).collect();

    let positions = fields
        .iter()
        .filter_map(|&field| {
            labels
                .iter()
                .position(|l| l.as_deref() == Some(field.label()))
                .map(|i| (field, i))
        })
        .collect();

    ColumnIndex { positions }
}

/// One data row read through its grid's column index.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a, F: Field> {
    row: &'a [Cell],
    index: &'a ColumnIndex<F>,
}

impl<'a, F: Field> RowView<'a, F> {
    pub fn new(row: &'a [Cell], index: &'a ColumnIndex<F>) -> Self {
        Self { row, index }
    }

    pub fn cell(&self, field: F) -> &'a Cell {
        self.index.cell(self.row, field)
    }

    pub fn seconds(&self, field: F) -> u64 {
        normalize_to_seconds(self.cell(field))
    }

    pub fn count(&self, field: F) -> Cell {
        self.cell(field).or_zero()
    }
}
