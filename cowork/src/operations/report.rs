//! Daily reports and export.
//!
//! A daily report lists every reservation of one date, joined with
//! client and room names. Reports can be exported to CSV, JSON or a
//! tab-separated spreadsheet file; export filenames embed the report
//! date so consecutive exports of different days never collide.

use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::ReservationSummary;

/// A report of all reservations on a single date.
#[derive(Debug, Clone, Copy)]
pub struct DailyReport {
    /// The date the report covers.
    pub date: NaiveDate,
}

impl DailyReport {
    /// Queries the report rows, ordered by folio.
    ///
    /// An empty result is not an error; a day without reservations
    /// produces an empty report.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn query(&self, conn: &Connection) -> Result<Vec<ReservationSummary>> {
        Database::daily_summaries(conn, self.date)
    }
}

/// Supported export file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// A JSON array of report rows.
    Json,
    /// Tab-separated values, importable by spreadsheet tools.
    Tsv,
}

impl ExportFormat {
    /// All supported formats.
    pub const ALL: [Self; 3] = [Self::Csv, Self::Json, Self::Tsv];

    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Tsv => "tsv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "tsv" => Ok(Self::Tsv),
            other => Err(Error::Validation {
                field: "export_format".into(),
                message: format!("unsupported format '{other}': expected csv, json or tsv"),
            }),
        }
    }
}

/// Writes report rows to `dir` and returns the created file's path.
///
/// The filename is `reservations_MMDDYYYY.<ext>` for the report date.
/// An existing file of the same name is overwritten.
///
/// # Errors
///
/// Returns an error if the file cannot be created or serialization
/// fails.
pub fn export_report(
    rows: &[ReservationSummary],
    date: NaiveDate,
    format: ExportFormat,
    dir: &Path,
) -> Result<PathBuf> {
    let filename = format!(
        "reservations_{}.{}",
        date.format("%m%d%Y"),
        format.extension()
    );
    let path = dir.join(filename);

    match format {
        ExportFormat::Csv => write_delimited(rows, &path, b',')?,
        ExportFormat::Tsv => write_delimited(rows, &path, b'\t')?,
        ExportFormat::Json => {
            let file = File::create(&path)?;
            serde_json::to_writer_pretty(file, rows).map_err(|e| Error::Validation {
                field: "export".into(),
                message: format!("cannot serialize report: {e}"),
            })?;
        }
    }

    log::info!("exported {} report rows to {}", rows.len(), path.display());
    Ok(path)
}

fn write_delimited(rows: &[ReservationSummary], path: &Path, delimiter: u8) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|e| Error::Io(std::io::Error::other(e)))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| Error::Io(std::io::Error::other(e)))?;
    }
    writer.flush()?;
    Ok(())
}
