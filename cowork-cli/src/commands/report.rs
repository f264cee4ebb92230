//! Report command implementation.
//!
//! Prints the daily report as a tab-separated table, and optionally
//! exports it to a file named after the report date.

use std::path::PathBuf;

use clap::Args;

use cowork::date::parse_input_date;
use cowork::operations::{export_report, DailyReport, ExportFormat};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, today, write_report_table, GlobalOptions};

/// Show or export the daily report.
#[derive(Args)]
pub struct ReportCommand {
    /// Report date (mm-dd-yyyy); defaults to today
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Export the report in the given format (csv, json or tsv)
    #[arg(long, value_name = "FORMAT")]
    pub export: Option<String>,

    /// Directory to write the export to (defaults to the configured
    /// export directory)
    #[arg(long, value_name = "PATH", requires = "export")]
    pub output_dir: Option<PathBuf>,
}

impl ReportCommand {
    /// Execute the report command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let date = match &self.date {
            Some(input) => parse_input_date(input)
                .map_err(|e| CliError::InvalidArguments(e.to_string()))?,
            None => today(),
        };
        let rows = DailyReport { date }.query(db.connection())?;

        let mut stdout = std::io::stdout().lock();
        write_report_table(&mut stdout, &rows)?;

        if let Some(format) = self.export {
            let format = format
                .parse::<ExportFormat>()
                .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
            let dir = self.output_dir.unwrap_or_else(|| config.export_dir());
            let path = export_report(&rows, date, format, &dir)?;
            println!("Exported to {}", path.display());
        }

        Ok(())
    }
}
