//! Terminal rendering of the summary view.

use crate::models::metrics::{DerivedMetrics, HEADERS, NON_PRODUCTIVE_COLUMN};
use crate::utils::colors::{GREY, color_for_exceeded_break, color_for_non_productive};
use crate::utils::table::{Align, Column, Table};

const EXCEEDED_BREAK_COLUMN: usize = 8;

fn columns() -> Vec<Column> {
    HEADERS
        .iter()
        .enumerate()
        .map(|(i, h)| Column::new(h, if i == 0 { Align::Left } else { Align::Right }))
        .collect()
}

/// Build the fixed-column table for the given rows, in the given order.
pub fn metrics_table(rows: &[&DerivedMetrics]) -> Table {
    let mut table = Table::new(columns());

    for row in rows {
        let cells = row
            .display_row()
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let color = match i {
                    NON_PRODUCTIVE_COLUMN => Some(color_for_non_productive(row.non_productive)),
                    EXCEEDED_BREAK_COLUMN => Some(color_for_exceeded_break(row.exceeded_break)),
                    _ if text == "00:00:00" || text == "0" => Some(GREY),
                    _ => None,
                };
                (text, color)
            })
            .collect();
        table.add_colored_row(cells);
    }

    table
}

pub fn render_metrics(rows: &[&DerivedMetrics]) -> String {
    metrics_table(rows).render()
}
