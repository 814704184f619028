/// Venue limits
pub const MIN_ROWS: usize = 1;
pub const MAX_ROWS: usize = 26; // one row per letter A..Z
pub const MIN_SEATS_PER_ROW: usize = 1;
pub const MAX_SEATS_PER_ROW: usize = 50;

/// Booking id format: prefix + zero padded sequence
pub const BOOKING_ID_PREFIX: &str = "HKG";
pub const BOOKING_ID_WIDTH: usize = 4;

/// Seating chart glyphs
pub const GLYPH_SELECTED: char = '#';
pub const GLYPH_BOOKED: char = 'o';
pub const GLYPH_AVAILABLE: char = '•';

/// Report CSV headers
pub const REPORT_HEADERS: [&str; 3] = ["BookingId", "Seats", "Count"];
