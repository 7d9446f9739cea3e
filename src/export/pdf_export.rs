use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::export::notify_export_success;
use crate::export::pdf::{PdfRow, PdfTableWriter, Rgb};
use crate::models::metrics::{DerivedMetrics, NON_PRODUCTIVE_COLUMN};
use crate::ui::messages::info;
use crate::utils::table::Align;
use std::path::Path;

const WARN_FILL: Rgb = Rgb(1.0, 0.95, 0.75);
const ALERT_FILL: Rgb = Rgb(0.98, 0.80, 0.80);

/// Same thresholds as the terminal view: above an hour is an alert.
fn non_productive_fill(secs: u64) -> Option<Rgb> {
    match secs {
        0 => None,
        1..=3600 => Some(WARN_FILL),
        _ => Some(ALERT_FILL),
    }
}

/// Export the view as a paginated PDF table.
pub(crate) fn export_pdf(rows: &[&DerivedMetrics], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let aligns: Vec<Align> = (0..headers.len())
        .map(|i| if i == 0 { Align::Left } else { Align::Right })
        .collect();

    let pdf_rows: Vec<PdfRow> = rows
        .iter()
        .map(|m| PdfRow {
            cells: m.display_row(),
            highlight: non_productive_fill(m.non_productive)
                .map(|fill| (NON_PRODUCTIVE_COLUMN, fill)),
        })
        .collect();

    let mut pdf = PdfTableWriter::new();
    pdf.write_table(title, &headers, &aligns, &pdf_rows);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
