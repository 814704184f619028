//! Operator-facing menu loop. Reads from any `BufRead` and writes to any
//! `Write`, so the binary runs it on stdin/stdout and tests on buffers.

use crate::{
    config::Config,
    error::{BookingError, Result},
    ledger::BookingId,
    position::parse_seat_position,
    render::render_seating_map,
    venue::{Venue, VenueSpec},
};
use log::{debug, warn};
use std::io::{BufRead, Write};

pub const CINEMA_NAME: &str = "Rocket Cinemas";

pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Greets, sets up the venue unless configured, and serves the menu until
    /// the operator exits. Returns the venue in its final state.
    pub fn run(&mut self, config: &Config) -> Result<Venue> {
        writeln!(self.output, "Welcome to {CINEMA_NAME}")?;
        let spec = match &config.venue {
            Some(spec) => spec.clone(),
            None => self.setup_venue()?,
        };
        let mut venue = Venue::new(&spec);
        self.main_menu(&mut venue)?;
        Ok(venue)
    }

    /// Next input line without its line ending and surrounding whitespace, or
    /// `None` once input is exhausted. Bytes that are not UTF-8 are replaced,
    /// so a garbled line is rejected by the prompt instead of ending the session.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    fn prompt(&mut self) -> Result<Option<String>> {
        write!(self.output, "> ")?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn setup_venue(&mut self) -> Result<VenueSpec> {
        loop {
            writeln!(self.output, "Please define movie title and seating map in")?;
            writeln!(self.output, "[Title][Row][SeatsPerRow] format:")?;
            let Some(line) = self.prompt()? else {
                return Err(BookingError::InputClosed("venue setup"));
            };
            match VenueSpec::parse(&line) {
                Ok(spec) => return Ok(spec),
                Err(e) => writeln!(self.output, "Error: {e}")?,
            }
        }
    }

    pub fn main_menu(&mut self, venue: &mut Venue) -> Result<()> {
        loop {
            writeln!(
                self.output,
                "[1] Book tickets for {} ({} seats available)",
                venue.title(),
                venue.available_seats()
            )?;
            writeln!(self.output, "[2] Check bookings")?;
            writeln!(self.output, "[3] Exit")?;
            writeln!(self.output, "Please enter your selection:")?;

            match self.prompt()?.as_deref() {
                Some("1") => {
                    self.book_tickets(venue)?;
                }
                Some("2") => self.check_booking(venue)?,
                Some("3") | None => {
                    writeln!(self.output)?;
                    writeln!(self.output, "Thank you for using {CINEMA_NAME} system. Bye!")?;
                    return Ok(());
                }
                Some(other) => {
                    debug!("Unknown menu selection {other:?}");
                    writeln!(self.output, "Invalid selection. Please try again.")?;
                    writeln!(self.output)?;
                }
            }
        }
    }

    /// Runs one booking. Returns the committed id, or `None` if the operator
    /// backed out or the request was rejected.
    pub fn book_tickets(&mut self, venue: &mut Venue) -> Result<Option<BookingId>> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Enter the number of tickets to book, or enter blank to go back to"
        )?;
        writeln!(self.output, "the main menu:")?;
        let Some(answer) = self.prompt()? else {
            return Ok(None);
        };
        writeln!(self.output)?;
        if answer.is_empty() {
            return Ok(None);
        }

        let Ok(requested) = answer.parse::<i64>() else {
            writeln!(self.output, "Please enter a valid number.")?;
            writeln!(self.output)?;
            return Ok(None);
        };
        if requested <= 0 {
            writeln!(self.output, "Please enter a positive number of tickets.")?;
            writeln!(self.output)?;
            return Ok(None);
        }
        let available = venue.available_seats();
        let count = match usize::try_from(requested) {
            Ok(n) if n <= available => n,
            _ => {
                writeln!(self.output, "Sorry, only {available} seats available.")?;
                writeln!(self.output)?;
                return Ok(None);
            }
        };

        // issued before the operator accepts, so an abandoned booking burns it
        let id = venue.issue_booking_id();
        let Some(mut selected) = venue.propose(count, None) else {
            warn!("No default placement for {count} seats, booking {id} dropped");
            writeln!(self.output, "Sorry, unable to allocate {count} seats.")?;
            writeln!(self.output)?;
            return Ok(None);
        };

        loop {
            writeln!(self.output, "Booking id: {id}")?;
            writeln!(self.output, "Selected seats:")?;
            write!(
                self.output,
                "{}",
                render_seating_map(venue.seating(), &selected)
            )?;
            writeln!(
                self.output,
                "Enter blank to accept seat selection, or enter a new seating"
            )?;
            writeln!(self.output, "position")?;

            let Some(label) = self.prompt()? else {
                warn!("Input closed during booking {id}; id left unused");
                return Ok(None);
            };
            if label.is_empty() {
                break;
            }

            let seating = venue.seating();
            let Some(anchor) = parse_seat_position(&label, seating.rows(), seating.seats_per_row())
            else {
                writeln!(self.output, "Invalid position. Please try again.")?;
                writeln!(self.output)?;
                continue;
            };
            if !seating.is_available(anchor) {
                writeln!(
                    self.output,
                    "Sorry, this position is already taken. Please select another position."
                )?;
                continue;
            }
            match venue.propose(count, Some(anchor)) {
                Some(seats) => selected = seats,
                None => {
                    writeln!(
                        self.output,
                        "Cannot allocate seats from that position. Please try again."
                    )?;
                }
            }
        }

        venue.commit(&id, &selected)?;
        writeln!(
            self.output,
            "Successfully reserved {count} {} tickets.",
            venue.title()
        )?;
        writeln!(self.output, "Booking id: {id} confirmed")?;
        writeln!(self.output)?;
        Ok(Some(id))
    }

    pub fn check_booking(&mut self, venue: &Venue) -> Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(
                self.output,
                "Enter booking id, or enter blank to go back to the main menu:"
            )?;
            let Some(answer) = self.prompt()? else {
                return Ok(());
            };
            writeln!(self.output)?;
            if answer.is_empty() {
                return Ok(());
            }

            let id = BookingId::from(answer.as_str());
            let seats = venue.seats_for(&id);
            if seats.is_empty() {
                writeln!(self.output, "No booking found with id: {id}")?;
                writeln!(self.output)?;
                continue;
            }

            writeln!(self.output, "Booking id: {id}:")?;
            writeln!(self.output, "Selected seats:")?;
            write!(self.output, "{}", render_seating_map(venue.seating(), &seats))?;
            writeln!(self.output)?;
        }
    }
}
