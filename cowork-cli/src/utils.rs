//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI
//! commands, including configuration loading, database management and
//! output formatting.

use std::path::PathBuf;

use chrono::NaiveDate;
use cowork::{Config, Database, ReservationSummary};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Not every command consults every flag
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Load the user configuration.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    Config::load(global.data_dir.as_deref()).map_err(|e| CliError::Config(e.to_string()))
}

/// Open the database with configuration and global overrides.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and
/// auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let mut db_config = config
        .database_config(global.data_dir.as_deref())
        .map_err(|e| CliError::Config(e.to_string()))?;

    if !db_config.path.exists() && global.disable_autoinit {
        return Err(CliError::NoDataDirectory);
    }

    if let Some(timeout_seconds) = global.busy_timeout {
        db_config =
            db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds.into()));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Returns today's date in the local timezone.
///
/// All lead-time checks measure from this date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Column headers for the daily report table.
pub const REPORT_HEADERS: [&str; 5] = ["FOLIO", "CLIENT", "ROOM", "SHIFT", "EVENT"];

/// Writes report rows as a tab-separated table.
pub fn write_report_table(
    out: &mut impl std::io::Write,
    rows: &[ReservationSummary],
) -> Result<(), CliError> {
    writeln!(out, "{}", REPORT_HEADERS.join("\t"))?;
    for row in rows {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            row.folio, row.client_name, row.room_name, row.shift, row.event_name
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cowork::{Folio, Shift};

    #[test]
    fn test_write_report_table() {
        let rows = vec![ReservationSummary {
            folio: Folio::try_from(1234u16).unwrap(),
            client_name: "Ada Lovelace".to_string(),
            room_name: "Boardroom".to_string(),
            shift: Shift::Morning,
            event_name: "Kickoff".to_string(),
        }];

        let mut buf = Vec::new();
        write_report_table(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("FOLIO\tCLIENT\tROOM\tSHIFT\tEVENT\n"));
        assert!(text.contains("1234\tAda Lovelace\tBoardroom\tMorning\tKickoff"));
    }
}
