//! Ranking of the dataset by non-productive time.

use crate::models::metrics::DerivedMetrics;
use std::cmp::Ordering;

fn by_non_productive_desc(a: &DerivedMetrics, b: &DerivedMetrics) -> Ordering {
    b.non_productive
        .cmp(&a.non_productive)
        .then_with(|| a.agent_name.cmp(&b.agent_name))
}

/// Sort descending by non-productive seconds; ties fall back to agent name.
pub fn rank(rows: &mut [DerivedMetrics]) {
    rows.sort_by(by_non_productive_desc);
}

pub fn is_ranked(rows: &[DerivedMetrics]) -> bool {
    rows.windows(2).all(|w| w[0].non_productive >= w[1].non_productive)
}
