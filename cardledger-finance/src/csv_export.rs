//! CSV writer for ledger rows.
//!
//! Output header is `Item,category,price,range`; prices carry exactly two
//! fraction digits. Records end in CRLF.

use anyhow::{Context, Result};
use cardledger_core::Row;
use std::io::Write;
use std::path::Path;

pub const CSV_HEADER: [&str; 4] = ["Item", "category", "price", "range"];

/// Write rows as CSV into any writer
pub fn write_rows<W: Write>(out: W, rows: &[Row]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);

    wtr.write_record(CSV_HEADER)?;
    for row in rows {
        let price = row.price_text();
        wtr.write_record([
            row.item.as_str(),
            row.category.as_str(),
            price.as_str(),
            row.range.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write rows to a CSV file, replacing it
pub fn write_csv(path: impl AsRef<Path>, rows: &[Row]) -> Result<()> {
    let path = path.as_ref();
    let file =
        std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_rows(file, rows).with_context(|| format!("write {}", path.display()))
}
