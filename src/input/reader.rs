//! Decoding of CSV exports into raw grids.

use crate::errors::AppResult;
use crate::models::cell::{Cell, RawGrid};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read every record of a CSV source, header included, without assuming a
/// fixed number of columns per row.
pub fn read_grid_from<R: Read>(source: R) -> AppResult<RawGrid> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(Cell::from_raw).collect());
    }

    Ok(RawGrid::new(rows))
}

pub fn read_grid(path: &Path) -> AppResult<RawGrid> {
    let file = File::open(path)?;
    let grid = read_grid_from(file)?;
    log::debug!(
        "read {} data rows from {}",
        grid.data_rows().len(),
        path.display()
    );
    Ok(grid)
}
