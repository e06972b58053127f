//! CSV export for the session history log.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::estimator::HistoryEntry;

/// Column header for history CSV export.
const HEADER: [&str; 3] = ["date", "units", "cost"];

/// Exports history entries to a CSV file at the given path.
///
/// Writes a header row followed by one row per entry, in log order.
///
/// # Errors
///
/// Returns an error if file creation or writing fails.
pub fn export_csv(entries: &[HistoryEntry], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv(entries, io::BufWriter::new(file))?;
    info!(path = %path.display(), rows = entries.len(), "history exported");
    Ok(())
}

/// Writes history entries as CSV to any writer.
///
/// Dates are ISO `YYYY-MM-DD`; units and cost carry two decimals.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_csv(entries: &[HistoryEntry], writer: impl Write) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(HEADER)?;
    for e in entries {
        wtr.write_record(&[
            e.date.format("%Y-%m-%d").to_string(),
            format!("{:.2}", e.units),
            format!("{:.2}", e.cost),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn make_entry(day: u32) -> HistoryEntry {
        HistoryEntry {
            date: NaiveDate::from_ymd_opt(2024, 2, day).unwrap_or_default(),
            units: 100.0,
            cost: 830.72,
        }
    }

    fn render(entries: &[HistoryEntry]) -> String {
        let mut buf = Vec::new();
        write_csv(entries, &mut buf).ok();
        String::from_utf8(buf).unwrap_or_default()
    }

    #[test]
    fn header_and_row_format() {
        let output = render(&[make_entry(7)]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["date,units,cost", "2024-02-07,100.00,830.72"]);
    }

    #[test]
    fn row_count_matches_entry_count() {
        let entries: Vec<HistoryEntry> = (1..=12).map(make_entry).collect();
        assert_eq!(render(&entries).lines().count(), 13);
    }

    #[test]
    fn empty_log_writes_header_only() {
        assert_eq!(render(&[]), "date,units,cost\n");
    }

    #[test]
    fn rows_parse_back() {
        let entries: Vec<HistoryEntry> = (1..=3).map(make_entry).collect();
        let output = render(&entries);
        let mut rdr = csv::ReaderBuilder::new().from_reader(output.as_bytes());
        let mut rows = 0;
        for record in rdr.records() {
            let rec = record.ok();
            let cost = rec.as_ref().and_then(|r| r[2].parse::<f64>().ok());
            assert_eq!(cost, Some(830.72));
            rows += 1;
        }
        assert_eq!(rows, 3);
    }
}
