use crate::core::state::AppState;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::MetricsExport;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::metrics::DerivedMetrics;
use crate::ui::messages::warning;
use crate::utils::fs::ensure_writable;
use crate::utils::path::expand_tilde;
use std::path::Path;

/// High-level export of the summary view.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the rows currently displayed (agents on leave excluded), or
    /// the full dataset when `include_leave` is set.
    ///
    /// - `format`: csv | json | xlsx | pdf
    /// - `file`: absolute output path (`~/` is expanded)
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        include_leave: bool,
        force: bool,
    ) -> AppResult<()> {
        let path_buf = expand_tilde(file);
        let path = path_buf.as_path();

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let state = AppState::load(pool)?;
        let rows: Vec<&DerivedMetrics> = if include_leave {
            state.dataset().iter().collect()
        } else {
            state.visible()
        };

        if rows.is_empty() {
            warning("No processed data to export. Run `process` first.");
            return Ok(());
        }

        ensure_writable(path, force)?;

        write_rows(format, &rows, path, &build_title(&state, include_leave))?;

        ttlog_quiet(
            &pool.conn,
            "export",
            &path.display().to_string(),
            &format!("Exported {} rows as {}", rows.len(), format.as_str()),
        );

        Ok(())
    }
}

fn write_rows(
    format: ExportFormat,
    rows: &[&DerivedMetrics],
    path: &Path,
    title: &str,
) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(&to_export(rows), path),
        ExportFormat::Json => export_json(&to_export(rows), path),
        ExportFormat::Xlsx => export_xlsx(rows, path),
        ExportFormat::Pdf => export_pdf(rows, path, title),
    }
}

fn to_export(rows: &[&DerivedMetrics]) -> Vec<MetricsExport> {
    rows.iter().map(|r| MetricsExport::from(*r)).collect()
}

/// PDF title: when the data was computed and whether leave is applied.
fn build_title(state: &AppState, include_leave: bool) -> String {
    let scope = if include_leave || state.leave().is_empty() {
        "all agents".to_string()
    } else {
        format!("{} agent(s) on leave excluded", state.leave().len())
    };

    match state.last_updated() {
        Some(ts) => format!("Agent summary ({scope}) - updated {ts}"),
        None => format!("Agent summary ({scope})"),
    }
}
