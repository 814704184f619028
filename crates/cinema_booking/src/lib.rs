pub mod allocator;
pub mod config;
pub mod constants;
pub mod error;
pub mod grid;
pub mod ledger;
pub mod position;
pub mod render;
pub mod report;
pub mod shell;
pub mod venue;

pub use allocator::find_seats;
pub use config::Config;
pub use error::{BookingError, Result};
pub use grid::{Cell, SeatingMap};
pub use ledger::{BookingId, BookingLedger};
pub use position::{Position, parse_seat_position};
pub use render::render_seating_map;
pub use shell::Shell;
pub use venue::{Venue, VenueSpec};
