//! Metric engine: per-agent durations and the productive / non-productive
//! split.
//!
//! `productive` is the sum of talk, break, idle, training, meeting, dispatch
//! and mentoring time, minus whatever break time exceeds the allowance.
//! `non_productive` is logged-in time not covered by `productive`, floored
//! at zero.

use crate::config::Config;
use crate::core::columns::{ColumnIndex, Field, PerfField, RowView, StatusField, resolve_columns};
use crate::core::join::{AgentRecord, join_by_agent};
use crate::core::ranking::{is_ranked, rank};
use crate::models::cell::RawGrid;
use crate::models::metrics::{Dataset, DerivedMetrics};

/// 70 minutes of combined away/break/meal time per shift.
pub const DEFAULT_BREAK_ALLOWANCE_SECS: u64 = 4200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricPolicy {
    pub break_allowance_secs: u64,
    /// Subtract the exceeded break from productive time.
    pub deduct_exceeded_break: bool,
}

impl Default for MetricPolicy {
    fn default() -> Self {
        Self {
            break_allowance_secs: DEFAULT_BREAK_ALLOWANCE_SECS,
            deduct_exceeded_break: true,
        }
    }
}

impl MetricPolicy {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            break_allowance_secs: cfg.break_allowance_secs,
            deduct_exceeded_break: cfg.deduct_exceeded_break,
        }
    }
}

pub fn derive_metrics(
    agent: &str,
    perf: RowView<'_, PerfField>,
    status: RowView<'_, StatusField>,
    policy: &MetricPolicy,
) -> DerivedMetrics {
    let away = status.seconds(StatusField::Away);
    let break_time = status.seconds(StatusField::Break);
    let meal = status.seconds(StatusField::Meal);

    let total_break = away.saturating_add(break_time).saturating_add(meal);
    let exceeded_break = total_break.saturating_sub(policy.break_allowance_secs);

    let total_talk = perf.seconds(PerfField::TotalTalk);
    let idle = status.seconds(StatusField::Idle);
    let training = status.seconds(StatusField::Training);
    let meeting = status.seconds(StatusField::Meeting);
    let dispatch = status.seconds(StatusField::Busy);
    let mentoring = status.seconds(StatusField::Mentoring);

    let credited = [total_break, idle, training, meeting, dispatch, mentoring]
        .into_iter()
        .fold(total_talk, u64::saturating_add);
    let productive = if policy.deduct_exceeded_break {
        credited.saturating_sub(exceeded_break)
    } else {
        credited
    };

    let logged_in = status.seconds(StatusField::LoggedIn);
    let non_productive = logged_in.saturating_sub(productive);

    DerivedMetrics {
        agent_name: agent.to_string(),
        answered: perf.count(PerfField::Answered),
        outbound: perf.count(PerfField::Outbound),
        handle: perf.count(PerfField::Handle),
        alert_no_answer: perf.count(PerfField::AlertNoAnswer),
        non_productive,
        logged_in,
        total_break,
        exceeded_break,
        idle,
        total_handle: perf.seconds(PerfField::TotalHandle),
        total_talk,
        total_hold: perf.seconds(PerfField::TotalHold),
        total_acw: perf.seconds(PerfField::TotalAcw),
        away,
        break_time,
        meal,
        training,
        meeting,
        mentoring,
        dispatch,
        productive,
    }
}

fn derive_record(
    record: &AgentRecord<'_>,
    perf_idx: &ColumnIndex<PerfField>,
    status_idx: &ColumnIndex<StatusField>,
    policy: &MetricPolicy,
) -> DerivedMetrics {
    derive_metrics(
        record.agent,
        RowView::new(record.perf, perf_idx),
        RowView::new(record.status, status_idx),
        policy,
    )
}

/// Whole pipeline for one run: resolve columns, join, derive, rank.
pub fn build_dataset(perf: &RawGrid, status: &RawGrid, policy: &MetricPolicy) -> Dataset {
    let perf_idx = resolve_columns(perf.header(), PerfField::all());
    let status_idx = resolve_columns(status.header(), StatusField::all());

    for field in perf_idx.missing() {
        log::warn!("performance report has no '{}' column", field.label());
    }
    for field in status_idx.missing() {
        log::warn!("status report has no '{}' column", field.label());
    }

    let joined = join_by_agent(perf.data_rows(), &perf_idx, status.data_rows(), &status_idx);
    if joined.is_empty() {
        log::warn!("neither report contains an agent row");
    }

    let mut dataset: Dataset = joined
        .records()
        .map(|r| derive_record(&r, &perf_idx, &status_idx, policy))
        .collect();

    rank(&mut dataset);
    debug_assert!(is_ranked(&dataset));

    log::debug!(
        "dataset built: {} of {} joined agents, allowance {}s",
        dataset.len(),
        joined.len(),
        policy.break_allowance_secs
    );

    dataset
}
