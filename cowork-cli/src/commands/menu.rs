//! The interactive menu.
//!
//! This is the default mode of the binary: a numbered menu looping over
//! the daily workflows. Every flow can be cancelled with `C` at any
//! text prompt, invalid input re-prompts instead of aborting, and
//! leaving the menu asks for confirmation.

use std::io::{BufRead, Write};
use std::path::Path;

use chrono::NaiveDate;
use clap::Args;

use cowork::date::{check_lead_time, format_input_date, parse_input_date, sunday_substitute};
use cowork::operations::{
    export_report, rename_event, BookingRequest, DailyReport, EditWindow, ExportFormat,
};
use cowork::{available_rooms, ClientId, Database, Error, Folio, RoomAvailability, Shift};

use crate::error::CliError;
use crate::prompt::Prompter;
use crate::utils::{load_configuration, open_database, today, write_report_table, GlobalOptions};

const MENU: &str = "\n=== Coworking Reservations ===\n\
    1. Book a room\n\
    2. Edit an event name\n\
    3. Daily report\n\
    4. Register a client\n\
    5. Register a room\n\
    6. Exit";

/// Open the interactive menu.
#[derive(Args, Default)]
pub struct MenuCommand {}

impl MenuCommand {
    /// Execute the menu command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
        run_menu(&mut prompter, &mut db, today(), &config.export_dir())
    }
}

/// Runs the menu loop until the user confirms exit.
///
/// Separated from [`MenuCommand::execute`] so sessions can be scripted
/// over in-memory buffers in tests.
pub fn run_menu<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    db: &mut Database,
    today: NaiveDate,
    export_dir: &Path,
) -> Result<(), CliError> {
    loop {
        p.say(MENU)?;
        let choice = p.line("Select an option: ")?;
        match choice.as_str() {
            "1" => book_flow(p, db, today)?,
            "2" => edit_flow(p, db)?,
            "3" => report_flow(p, db, today, export_dir)?,
            "4" => register_client_flow(p, db)?,
            "5" => register_room_flow(p, db)?,
            "6" => {
                if p.confirm("Exit? [y/N]: ")? {
                    p.say("Goodbye.")?;
                    return Ok(());
                }
            }
            other => p.say(&format!("'{other}' is not a menu option"))?,
        }
    }
}

/// The interactive booking flow.
///
/// Prompts for client, date, room, shift and event name in turn. A
/// Sunday date triggers a Monday substitution offer; declined offers
/// and policy violations re-prompt for a new date.
fn book_flow<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    db: &mut Database,
    today: NaiveDate,
) -> Result<(), CliError> {
    let clients = Database::list_clients(db.connection())?;
    if clients.is_empty() {
        p.say("No clients registered; register a client first.")?;
        return Ok(());
    }

    p.say("Registered clients:")?;
    for client in &clients {
        p.say(&format!("  {}\t{}", client.id(), client.full_name()))?;
    }

    let client_id = loop {
        let Some(input) = p.line_or_cancel("Client id (C to cancel): ")? else {
            return cancelled(p);
        };
        match input.parse::<i64>() {
            Ok(id) if clients.iter().any(|c| c.id().value() == id) => break ClientId::new(id),
            Ok(id) => p.say(&format!("No client with id {id}"))?,
            Err(_) => p.say("Enter a numeric client id")?,
        }
    };

    let date = loop {
        let Some(input) = p.line_or_cancel("Date (mm-dd-yyyy, C to cancel): ")? else {
            return cancelled(p);
        };
        let mut date = match parse_input_date(&input) {
            Ok(date) => date,
            Err(e) => {
                p.say(&e.to_string())?;
                continue;
            }
        };
        if let Some(monday) = sunday_substitute(date) {
            p.say(&format!(
                "{} is a Sunday; reservations are not taken on Sundays.",
                format_input_date(date)
            ))?;
            if !p.confirm(&format!("Book {} instead? [y/N]: ", format_input_date(monday)))? {
                continue;
            }
            date = monday;
        }
        match check_lead_time(date, today) {
            Ok(()) => break date,
            Err(e) => p.say(&e.to_string())?,
        }
    };

    let availability = match available_rooms(db.connection(), date) {
        Ok(availability) => availability,
        Err(Error::NoAvailability { .. }) => {
            p.say(&format!(
                "No rooms available on {}.",
                format_input_date(date)
            ))?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    p.say("Available rooms:")?;
    for entry in &availability {
        let shifts: Vec<&str> = entry.open_shifts.iter().map(|s| s.as_str()).collect();
        p.say(&format!(
            "  {}\t{} (capacity {})\t{}",
            entry.room.id(),
            entry.room.name(),
            entry.room.capacity(),
            shifts.join(", ")
        ))?;
    }

    let room: &RoomAvailability = loop {
        let Some(input) = p.line_or_cancel("Room id (C to cancel): ")? else {
            return cancelled(p);
        };
        match input.parse::<i64>() {
            Ok(id) => {
                if let Some(entry) = availability.iter().find(|a| a.room.id().value() == id) {
                    break entry;
                }
                p.say(&format!("No available room with id {id}"))?;
            }
            Err(_) => p.say("Enter a numeric room id")?,
        }
    };

    let shift = loop {
        let Some(input) = p.line_or_cancel("Shift (morning/afternoon/evening, C to cancel): ")?
        else {
            return cancelled(p);
        };
        match input.parse::<Shift>() {
            Ok(shift) if room.open_shifts.contains(&shift) => break shift,
            Ok(shift) => p.say(&format!("{shift} is already booked for that room"))?,
            Err(e) => p.say(&e.to_string())?,
        }
    };

    // Unlike the earlier stages, an empty event name discards the
    // whole attempt instead of re-prompting.
    let event_name = {
        let Some(input) = p.line_or_cancel("Event name (C to cancel): ")? else {
            return cancelled(p);
        };
        if input.is_empty() {
            p.say("Event name must be non-empty; booking discarded.")?;
            return Ok(());
        }
        input
    };

    let request = BookingRequest {
        client_id,
        room_id: room.room.id(),
        date,
        shift,
        event_name,
    };
    match request.execute(db, &mut rand::thread_rng(), today) {
        Ok(folio) => p.say(&format!("Reserved. Folio: {folio}")),
        // Lost the shift between display and commit
        Err(Error::ShiftUnavailable { .. }) => {
            p.say("That shift was just taken; please start over.")
        }
        Err(e) => Err(e.into()),
    }
}

/// The interactive event-edit flow.
fn edit_flow<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    db: &mut Database,
) -> Result<(), CliError> {
    let window = loop {
        let Some(start) = p.line_or_cancel("Start date (mm-dd-yyyy, C to cancel): ")? else {
            return cancelled(p);
        };
        let Some(end) = p.line_or_cancel("End date (mm-dd-yyyy, C to cancel): ")? else {
            return cancelled(p);
        };
        let parsed = parse_input_date(&start)
            .and_then(|s| parse_input_date(&end).map(|e| (s, e)))
            .and_then(|(s, e)| EditWindow::new(s, e));
        match parsed {
            Ok(window) => break window,
            Err(e) => p.say(&e.to_string())?,
        }
    };

    let rows = window.reservations(db.connection())?;
    if rows.is_empty() {
        p.say("No reservations in that range.")?;
        return Ok(());
    }

    p.say("FOLIO\tDATE\tSHIFT\tEVENT")?;
    for row in &rows {
        p.say(&format!(
            "{}\t{}\t{}\t{}",
            row.folio(),
            format_input_date(row.date()),
            row.shift(),
            row.event_name()
        ))?;
    }

    let folio = loop {
        let Some(input) = p.line_or_cancel("Folio to edit (C to cancel): ")? else {
            return cancelled(p);
        };
        match input.parse::<u16>().ok().and_then(|v| Folio::try_from(v).ok()) {
            Some(folio) if rows.iter().any(|r| r.folio() == folio) => break folio,
            Some(folio) => p.say(&format!("Folio {folio} is not in the listed range"))?,
            None => p.say("Enter one of the listed folios")?,
        }
    };

    // An empty replacement aborts without touching storage.
    let new_name = {
        let Some(input) = p.line_or_cancel("New event name (C to cancel): ")? else {
            return cancelled(p);
        };
        if input.is_empty() {
            p.say("Event name must be non-empty; nothing updated.")?;
            return Ok(());
        }
        input
    };

    rename_event(db, folio, &new_name)?;
    p.say("Event name updated.")
}

/// Prints the daily report for a prompted date (blank input reports
/// today), then offers to export the listed rows.
fn report_flow<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    db: &mut Database,
    today: NaiveDate,
    export_dir: &Path,
) -> Result<(), CliError> {
    let Some(date) = prompt_date(p, today)? else {
        return cancelled(p);
    };

    let rows = DailyReport { date }.query(db.connection())?;
    if rows.is_empty() {
        p.say(&format!(
            "No reservations on {}.",
            format_input_date(date)
        ))?;
        return Ok(());
    }
    write_report_table(p.writer(), &rows)?;

    if !p.confirm("Export this report? [y/N]: ")? {
        return Ok(());
    }
    let format = loop {
        let Some(input) = p.line_or_cancel("Format (csv/json/tsv, C to cancel): ")? else {
            return cancelled(p);
        };
        match input.parse::<ExportFormat>() {
            Ok(format) => break format,
            Err(e) => p.say(&e.to_string())?,
        }
    };

    let path = export_report(&rows, date, format, export_dir)?;
    p.say(&format!("Exported {} rows to {}", rows.len(), path.display()))
}

/// The interactive client registration flow.
fn register_client_flow<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    db: &mut Database,
) -> Result<(), CliError> {
    let first_name = loop {
        let Some(input) = p.line_or_cancel("First name (C to cancel): ")? else {
            return cancelled(p);
        };
        if input.is_empty() {
            p.say("First name must be non-empty")?;
        } else {
            break input;
        }
    };
    let last_name = loop {
        let Some(input) = p.line_or_cancel("Last name (C to cancel): ")? else {
            return cancelled(p);
        };
        if input.is_empty() {
            p.say("Last name must be non-empty")?;
        } else {
            break input;
        }
    };

    let client = db.create_client(&first_name, &last_name)?;
    p.say(&format!(
        "Registered client {} with id {}",
        client.full_name(),
        client.id()
    ))
}

/// The interactive room registration flow.
fn register_room_flow<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    db: &mut Database,
) -> Result<(), CliError> {
    let name = loop {
        let Some(input) = p.line_or_cancel("Room name (C to cancel): ")? else {
            return cancelled(p);
        };
        if input.is_empty() {
            p.say("Room name must be non-empty")?;
        } else {
            break input;
        }
    };
    let capacity = loop {
        let Some(input) = p.line_or_cancel("Capacity (C to cancel): ")? else {
            return cancelled(p);
        };
        match input.parse::<u32>() {
            Ok(capacity) if capacity > 0 => break capacity,
            _ => p.say("Capacity must be a positive number")?,
        }
    };

    let room = db.create_room(&name, capacity)?;
    p.say(&format!(
        "Registered room {} with id {}",
        room.name(),
        room.id()
    ))
}

/// Prompts for a date until one parses. Blank input selects `today`;
/// `None` means cancelled.
fn prompt_date<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    today: NaiveDate,
) -> Result<Option<NaiveDate>, CliError> {
    loop {
        let Some(input) =
            p.line_or_cancel("Date (mm-dd-yyyy, blank for today, C to cancel): ")?
        else {
            return Ok(None);
        };
        if input.is_empty() {
            return Ok(Some(today));
        }
        match parse_input_date(&input) {
            Ok(date) => return Ok(Some(date)),
            Err(e) => p.say(&e.to_string())?,
        }
    }
}

fn cancelled<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<(), CliError> {
    p.say("Cancelled.")
}
