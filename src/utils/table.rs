//! Table rendering utilities for CLI outputs.

use crate::utils::colors::RESET;
use crate::utils::formatting::bold;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn new(header: &str, align: Align) -> Self {
        Self {
            header: header.to_string(),
            align,
        }
    }
}

/// A cell of text plus an optional ANSI color applied after padding.
struct Styled {
    text: String,
    color: Option<&'static str>,
}

pub struct Table {
    pub columns: Vec<Column>,
    rows: Vec<Vec<Styled>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_colored_row(&mut self, row: Vec<(String, Option<&'static str>)>) {
        self.rows.push(
            row.into_iter()
                .map(|(text, color)| Styled { text, color })
                .collect(),
        );
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column widths measured on visible text (headers included).
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| UnicodeWidthStr::width(c.header.as_str()))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(UnicodeWidthStr::width(cell.text.as_str()));
            }
        }

        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, &w)| pad(&col.header, w, col.align))
            .collect();
        out.push_str(&bold(&header.join(" | ")));
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (col, &w))| {
                    let (text, color) = row
                        .get(i)
                        .map(|c| (c.text.as_str(), c.color))
                        .unwrap_or(("", None));
                    let padded = pad(text, w, col.align);
                    match color {
                        Some(c) => format!("{c}{padded}{RESET}"),
                        None => padded,
                    }
                })
                .collect();
            out.push_str(&cells.join(" | "));
            out.push('\n');
        }

        out
    }
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(text)));
    match align {
        Align::Left => format!("{text}{fill}"),
        Align::Right => format!("{fill}{text}"),
    }
}
