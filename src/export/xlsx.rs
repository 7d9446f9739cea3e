use crate::core::normalize::SECONDS_PER_DAY;
use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::export::notify_export_success;
use crate::models::cell::Cell;
use crate::models::metrics::DerivedMetrics;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Durations are written as day fractions so spreadsheets can sum them.
const DURATION_FORMAT: &str = "[hh]:mm:ss";

/// Export XLSX with a styled header, banded rows and fitted column widths.
pub(crate) fn export_xlsx(rows: &[&DerivedMetrics], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Agent Summary").map_err(to_app_error)?;

    // ---------------------------
    // Empty dataset
    // ---------------------------
    if rows.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_app_error)?;
        workbook.save(path).map_err(to_app_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 1).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, metrics) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };
        let text_fmt = base_format(band);
        let count_fmt = base_format(band).set_align(FormatAlign::Right);
        let duration_fmt = base_format(band).set_num_format(DURATION_FORMAT);

        worksheet
            .write_with_format(row, 0, metrics.agent_name.as_str(), &text_fmt)
            .map_err(to_app_error)?;

        let counts = [
            &metrics.answered,
            &metrics.outbound,
            &metrics.handle,
            &metrics.alert_no_answer,
        ];
        for (i, cell) in counts.iter().enumerate() {
            let col = (i + 1) as u16;
            match cell {
                Cell::Number(n) => worksheet.write_with_format(row, col, *n, &count_fmt),
                other => worksheet.write_with_format(row, col, other.to_string(), &count_fmt),
            }
            .map_err(to_app_error)?;
        }

        for (i, secs) in metrics.durations().iter().enumerate() {
            let col = (i + 5) as u16;
            worksheet
                .write_with_format(row, col, *secs as f64 / SECONDS_PER_DAY, &duration_fmt)
                .map_err(to_app_error)?;
        }

        for (col, value) in metrics.display_row().iter().enumerate() {
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    // ---------------------------
    // Column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn base_format(band: Color) -> Format {
    Format::new()
        .set_background_color(band)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

