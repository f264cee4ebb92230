//! Book command implementation.
//!
//! Non-interactive booking: all parameters are supplied as arguments.
//! A date falling on a Sunday is only accepted together with
//! `--accept-substitute`, which books the following Monday instead.

use clap::Args;

use cowork::date::{parse_input_date, sunday_substitute};
use cowork::operations::BookingRequest;
use cowork::{ClientId, RoomId, Shift};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, today, GlobalOptions};

/// Book a room for a client.
#[derive(Args)]
pub struct BookCommand {
    /// Id of the registered client
    #[arg(long, value_name = "ID")]
    pub client: i64,

    /// Id of the room to book
    #[arg(long, value_name = "ID")]
    pub room: i64,

    /// Reservation date (mm-dd-yyyy)
    #[arg(long, value_name = "DATE")]
    pub date: String,

    /// Shift to book (morning, afternoon or evening)
    #[arg(long, value_name = "SHIFT")]
    pub shift: String,

    /// Name of the event
    #[arg(long, value_name = "NAME")]
    pub event: String,

    /// If the date is a Sunday, book the following Monday instead
    #[arg(long)]
    pub accept_substitute: bool,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let mut date = parse_input_date(&self.date)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        if let Some(monday) = sunday_substitute(date) {
            if self.accept_substitute {
                if !global.quiet {
                    println!("{date} is a Sunday; booking {monday} instead");
                }
                date = monday;
            } else {
                return Err(CliError::InvalidArguments(format!(
                    "{date} is a Sunday; pass --accept-substitute to book {monday} instead"
                )));
            }
        }

        let shift = self
            .shift
            .parse::<Shift>()
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let request = BookingRequest {
            client_id: ClientId::new(self.client),
            room_id: RoomId::new(self.room),
            date,
            shift,
            event_name: self.event,
        };

        let folio = request.execute(&mut db, &mut rand::thread_rng(), today())?;
        println!("Folio: {folio}");
        Ok(())
    }
}
