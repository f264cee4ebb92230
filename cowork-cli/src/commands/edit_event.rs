//! Edit-event command implementation.
//!
//! Two modes: `--list` with a date window prints the reservations that
//! can be edited; `--folio` with `--event` renames one of them. The
//! folio itself never changes.

use clap::Args;

use cowork::date::{format_input_date, parse_input_date};
use cowork::operations::{rename_event, EditWindow};
use cowork::Folio;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Edit the event name of a reservation.
#[derive(Args)]
pub struct EditEventCommand {
    /// List reservations in the window instead of editing
    #[arg(long, requires = "from", requires = "to")]
    pub list: bool,

    /// Start of the date window (mm-dd-yyyy)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// End of the date window (mm-dd-yyyy)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Folio of the reservation to edit
    #[arg(long, value_name = "FOLIO", conflicts_with = "list")]
    pub folio: Option<u16>,

    /// The new event name
    #[arg(long, value_name = "NAME", requires = "folio")]
    pub event: Option<String>,
}

impl EditEventCommand {
    /// Execute the edit-event command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        if self.list {
            let (from, to) = match (self.from.as_deref(), self.to.as_deref()) {
                (Some(from), Some(to)) => (from, to),
                _ => {
                    return Err(CliError::InvalidArguments(
                        "--list requires --from and --to".to_string(),
                    ))
                }
            };
            let start = parse_input_date(from)
                .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
            let end =
                parse_input_date(to).map_err(|e| CliError::InvalidArguments(e.to_string()))?;
            let window = EditWindow::new(start, end)
                .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

            let rows = window.reservations(db.connection())?;
            println!("FOLIO\tDATE\tSHIFT\tEVENT");
            for row in rows {
                println!(
                    "{}\t{}\t{}\t{}",
                    row.folio(),
                    format_input_date(row.date()),
                    row.shift(),
                    row.event_name()
                );
            }
            return Ok(());
        }

        let (folio, event) = match (self.folio, self.event) {
            (Some(folio), Some(event)) => (folio, event),
            _ => {
                return Err(CliError::InvalidArguments(
                    "either --list or both --folio and --event are required".to_string(),
                ))
            }
        };
        let folio =
            Folio::try_from(folio).map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        rename_event(&mut db, folio, &event)?;
        println!("Updated event name for folio {folio}");
        Ok(())
    }
}
