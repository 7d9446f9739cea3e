//! Paginated table writer on top of `pdf-writer`.
//!
//! Pages are A4 landscape: the summary view is 22 columns wide, so text is
//! small and every column is scaled to share the printable width.

use crate::utils::table::Align;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs;
use std::path::Path;

const PAGE_W: f32 = 842.0;
const PAGE_H: f32 = 595.0;
const MARGIN: f32 = 28.0;
const ROW_H: f32 = 14.0;
const FONT_SIZE: f32 = 6.0;
const TITLE_SIZE: f32 = 12.0;
/// Average Helvetica glyph width relative to the font size.
const GLYPH_RATIO: f32 = 0.55;
/// Room left between the title and the header row.
const TITLE_GAP: f32 = 30.0;

const HEADER_FILL: Rgb = Rgb(0.85, 0.87, 0.90);
const BAND_FILL: Rgb = Rgb(0.96, 0.96, 0.96);
const BORDER: Rgb = Rgb(0.65, 0.65, 0.65);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

/// One body row: its cells plus an optional fill for a single highlighted
/// column.
#[derive(Debug, Clone)]
pub struct PdfRow {
    pub cells: Vec<String>,
    pub highlight: Option<(usize, Rgb)>,
}

/// Table layout shared by every page.
struct Layout {
    widths: Vec<f32>,
    aligns: Vec<Align>,
    rows_per_page: usize,
}

impl Layout {
    fn new(headers: &[&str], aligns: &[Align], rows: &[PdfRow]) -> Self {
        let glyph = FONT_SIZE * GLYPH_RATIO;
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.chars().count() as f32 * glyph + 4.0)
            .collect();

        for row in rows {
            for (w, cell) in widths.iter_mut().zip(&row.cells) {
                *w = w.max(cell.chars().count() as f32 * glyph + 4.0);
            }
        }

        let available = PAGE_W - 2.0 * MARGIN;
        let total: f32 = widths.iter().sum();
        if total > available {
            let scale = available / total;
            widths.iter_mut().for_each(|w| *w *= scale);
        }

        let usable_h = PAGE_H - 2.0 * MARGIN - TITLE_GAP - ROW_H;
        let rows_per_page = ((usable_h / ROW_H).floor() as usize).max(1);

        let aligns = (0..widths.len())
            .map(|i| aligns.get(i).copied().unwrap_or(Align::Left))
            .collect();

        Self {
            widths,
            aligns,
            rows_per_page,
        }
    }

    fn table_width(&self) -> f32 {
        self.widths.iter().sum()
    }

    /// Left edge of column `col`.
    fn column_x(&self, col: usize) -> f32 {
        MARGIN + self.widths[..col].iter().sum::<f32>()
    }
}

pub struct PdfTableWriter {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,
}

impl Default for PdfTableWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfTableWriter {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // object ids are assigned by hand
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            page_refs: Vec::new(),
            next_id: 4,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Register a page and write its finished content stream.
    fn add_page(&mut self, content: Content) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
                .contents(content_id);
            page.resources().fonts().pair(Name(b"F1"), self.font_id);
        }

        self.pdf.stream(content_id, &content.finish());
    }

    /// Title on every page, a repeated header row, banded body rows.
    /// Without rows a single page with just the header is produced.
    pub fn write_table(
        &mut self,
        title: &str,
        headers: &[&str],
        aligns: &[Align],
        rows: &[PdfRow],
    ) {
        let layout = Layout::new(headers, aligns, rows);
        let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

        let chunks: Vec<&[PdfRow]> = if rows.is_empty() {
            vec![rows]
        } else {
            rows.chunks(layout.rows_per_page).collect()
        };
        let page_count = chunks.len();

        for (page_idx, chunk) in chunks.into_iter().enumerate() {
            let mut content = Content::new();

            draw_text(&mut content, MARGIN, PAGE_H - MARGIN + 8.0, TITLE_SIZE, title);
            draw_text(
                &mut content,
                PAGE_W - MARGIN - 60.0,
                MARGIN - 18.0,
                FONT_SIZE,
                &format!("Page {} / {}", page_idx + 1, page_count),
            );

            let mut y = PAGE_H - MARGIN - TITLE_GAP;
            fill_rect(&mut content, MARGIN, y, layout.table_width(), HEADER_FILL);
            draw_cells(&mut content, &layout, y, &header_cells, false);

            for (i, row) in chunk.iter().enumerate() {
                y -= ROW_H;

                if i % 2 == 0 {
                    fill_rect(&mut content, MARGIN, y, layout.table_width(), BAND_FILL);
                }
                if let Some((col, color)) = row.highlight
                    && col < layout.widths.len()
                {
                    fill_rect(&mut content, layout.column_x(col), y, layout.widths[col], color);
                }

                draw_cells(&mut content, &layout, y, &row.cells, true);
            }

            self.add_page(content);
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let count = self.page_refs.len() as i32;
        self.pdf
            .pages(self.pages_id)
            .count(count)
            .kids(self.page_refs.iter().copied());

        fs::write(path, self.pdf.finish())
    }
}

fn draw_text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
    content.begin_text();
    content.set_font(Name(b"F1"), size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(text.as_bytes()));
    content.end_text();
}

fn fill_rect(content: &mut Content, x: f32, y: f32, w: f32, color: Rgb) {
    content.save_state();
    content.set_fill_rgb(color.0, color.1, color.2);
    content.rect(x, y, w, ROW_H);
    content.fill_nonzero();
    content.restore_state();
}

/// One row of bordered cells. Header cells are always left aligned.
fn draw_cells(content: &mut Content, layout: &Layout, y: f32, cells: &[String], body: bool) {
    for (col, (text, &w)) in cells.iter().zip(&layout.widths).enumerate() {
        let x = layout.column_x(col);
        let text = fit(text, w);

        let text_x = match layout.aligns[col] {
            Align::Right if body => {
                x + w - 2.0 - text.chars().count() as f32 * FONT_SIZE * GLYPH_RATIO
            }
            _ => x + 2.0,
        };
        draw_text(content, text_x, y + 4.0, FONT_SIZE, &text);

        content.save_state();
        content.set_stroke_rgb(BORDER.0, BORDER.1, BORDER.2);
        content.rect(x, y, w, ROW_H);
        content.stroke();
        content.restore_state();
    }
}

/// Truncate text that would overflow its cell.
fn fit(text: &str, width: f32) -> String {
    let max_chars = ((width - 3.0) / (FONT_SIZE * GLYPH_RATIO)).floor().max(1.0) as usize;
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut s: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        s.push('~');
        s
    }
}
