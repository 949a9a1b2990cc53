//! CSV export of summary tables.
//!
//! Files use a comma delimiter, a header row of [`COLUMNS`] and the
//! [`dalal_core::ABSENT`] marker for missing fields.

use std::io;
use std::path::Path;

use dalal_core::{COLUMNS, DalalError, SummaryRow, SummaryTable};

/// Default file name for the unsorted export.
pub const EXPORT_FILE: &str = "nifty_50_stocks.csv";
/// Default file name for the export sorted by sector.
pub const SORTED_EXPORT_FILE: &str = "nifty_50_sorted_by_sector.csv";

/// Write `table` as CSV to any writer.
///
/// # Errors
/// Returns the underlying `csv` error if a record cannot be written or flushed.
pub fn write_csv<W: io::Write>(table: &SummaryTable, out: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(COLUMNS)?;
    for row in table {
        wtr.write_record(row.cells())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render `table` as a CSV string.
///
/// # Errors
/// Returns `Data` if the CSV writer fails.
pub fn render_csv(table: &SummaryTable) -> Result<String, DalalError> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf).map_err(|e| DalalError::Data(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| DalalError::Data(e.to_string()))
}

/// Write `table` to `dest`, replacing any existing file. Returns the number of data rows.
///
/// The CSV is written to a temporary file next to `dest` and renamed over it,
/// so a failed export leaves any previous file intact. The table itself is
/// never modified, so a failed export can be retried.
///
/// # Errors
/// Returns `Export { path, msg }` when the destination cannot be created or written.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(target = "dalal::export", skip(table), fields(rows = table.len(), path = %dest.display()))
)]
pub fn export(table: &SummaryTable, dest: &Path) -> Result<usize, DalalError> {
    let dir = dest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| DalalError::export(dest, e))?;
    write_csv(table, io::BufWriter::new(&mut tmp)).map_err(|e| DalalError::export(dest, e))?;
    tmp.persist(dest)
        .map_err(|e| DalalError::export(dest, e.error))?;
    Ok(table.len())
}

/// Parse a CSV export from any reader; absent-marker cells become `None`.
///
/// # Errors
/// Returns `Data` if the header does not match [`COLUMNS`] or a record is malformed.
pub fn parse_csv<R: io::Read>(input: R) -> Result<SummaryTable, DalalError> {
    let mut rdr = csv::Reader::from_reader(input);
    let header = rdr
        .headers()
        .map_err(|e| DalalError::Data(e.to_string()))?
        .clone();
    if header.iter().ne(COLUMNS.iter().copied()) {
        return Err(DalalError::Data(format!(
            "unexpected header: {}",
            header.iter().collect::<Vec<_>>().join(",")
        )));
    }
    rdr.records()
        .map(|rec| {
            let rec = rec.map_err(|e| DalalError::Data(e.to_string()))?;
            let cells: Vec<&str> = rec.iter().collect();
            SummaryRow::from_cells(&cells)
        })
        .collect()
}

/// Read back a file written by [`export`].
///
/// # Errors
/// Returns `Export` if the file cannot be opened and `Data` if its contents are malformed.
pub fn read_export(source: &Path) -> Result<SummaryTable, DalalError> {
    let file = std::fs::File::open(source).map_err(|e| DalalError::export(source, e))?;
    parse_csv(io::BufReader::new(file))
}
