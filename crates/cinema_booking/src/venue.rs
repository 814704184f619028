use crate::{
    allocator,
    constants::{MAX_ROWS, MAX_SEATS_PER_ROW, MIN_ROWS, MIN_SEATS_PER_ROW},
    error::{BookingError, Result},
    grid::{Cell, SeatingMap},
    ledger::{BookingId, BookingLedger},
    position::Position,
};
use log::info;
use serde::Deserialize;
use std::{collections::BTreeMap, str::FromStr};

/// Movie title and seating map dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VenueSpec {
    pub title: String,
    pub rows: usize,
    pub seats_per_row: usize,
}

impl VenueSpec {
    /// Parses the `[Title] [Rows] [SeatsPerRow]` setup line.
    pub fn parse(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let [title, rows, seats] = parts.as_slice() else {
            return Err(BookingError::MissingSetupValues);
        };

        let rows: i64 = rows.parse().map_err(|_| BookingError::NonNumericDimensions)?;
        let seats: i64 = seats.parse().map_err(|_| BookingError::NonNumericDimensions)?;

        let spec = Self {
            title: title.to_string(),
            rows: usize::try_from(rows).map_err(|_| BookingError::RowsOutOfRange(rows))?,
            seats_per_row: usize::try_from(seats)
                .map_err(|_| BookingError::SeatsOutOfRange(seats))?,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&self.rows) {
            return Err(BookingError::RowsOutOfRange(self.rows as i64));
        }
        if !(MIN_SEATS_PER_ROW..=MAX_SEATS_PER_ROW).contains(&self.seats_per_row) {
            return Err(BookingError::SeatsOutOfRange(self.seats_per_row as i64));
        }
        if self.title.trim().is_empty() {
            return Err(BookingError::MissingSetupValues);
        }
        Ok(())
    }
}

impl FromStr for VenueSpec {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// One screening: the seating map plus the ledger that names its bookings.
#[derive(Debug, Clone)]
pub struct Venue {
    title: String,
    seating: SeatingMap,
    ledger: BookingLedger,
}

impl Venue {
    pub fn new(spec: &VenueSpec) -> Self {
        info!(
            "Venue '{}' with {} rows x {} seats",
            spec.title, spec.rows, spec.seats_per_row
        );
        Self {
            title: spec.title.clone(),
            seating: SeatingMap::new(spec.rows, spec.seats_per_row),
            ledger: BookingLedger::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn seating(&self) -> &SeatingMap {
        &self.seating
    }

    pub fn available_seats(&self) -> usize {
        self.seating.available_seats()
    }

    pub fn issue_booking_id(&mut self) -> BookingId {
        self.ledger.next_id()
    }

    /// Ids handed out so far, committed or not.
    pub fn issued_ids(&self) -> u64 {
        self.ledger.issued()
    }

    pub fn propose(&self, count: usize, anchor: Option<Position>) -> Option<Vec<Position>> {
        allocator::find_seats(&self.seating, count, anchor)
    }

    /// Writes `id` into every seat of `seats`. All seats are checked first, so
    /// either the whole booking lands or nothing changes.
    pub fn commit(&mut self, id: &BookingId, seats: &[Position]) -> Result<()> {
        for (i, &pos) in seats.iter().enumerate() {
            match self.seating.get(pos) {
                None => {
                    return Err(BookingError::SeatOutOfBounds {
                        row: pos.row,
                        col: pos.col,
                    });
                }
                Some(Cell::Booked(_)) => {
                    return Err(BookingError::SeatTaken {
                        seat: pos.to_string(),
                    });
                }
                Some(Cell::Empty) if seats[..i].contains(&pos) => {
                    return Err(BookingError::SeatTaken {
                        seat: pos.to_string(),
                    });
                }
                Some(Cell::Empty) => {}
            }
        }

        for &pos in seats {
            self.seating.assign(pos, id)?;
        }
        info!("Committed booking {id} for {} seats", seats.len());
        Ok(())
    }

    pub fn seats_for(&self, id: &BookingId) -> Vec<Position> {
        self.seating.seats_for(id)
    }

    /// Committed bookings keyed by id, seats row-major.
    pub fn bookings(&self) -> BTreeMap<BookingId, Vec<Position>> {
        let mut out: BTreeMap<BookingId, Vec<Position>> = BTreeMap::new();
        for r in 0..self.seating.rows() {
            for (c, cell) in self.seating.row(r).iter().enumerate() {
                if let Cell::Booked(id) = cell {
                    out.entry(id.clone()).or_default().push(Position::new(r, c));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue() -> Venue {
        Venue::new(&VenueSpec::parse("Inception 5 10").unwrap())
    }

    #[test]
    fn test_parse_setup_line() {
        let spec = VenueSpec::parse("Movie 5 10").unwrap();
        assert_eq!(spec.title, "Movie");
        assert_eq!(spec.rows, 5);
        assert_eq!(spec.seats_per_row, 10);
    }

    #[test]
    fn test_parse_setup_limits() {
        assert!(VenueSpec::parse("Movie 26 50").is_ok());
        assert!(VenueSpec::parse("Movie 1 1").is_ok());
        assert!(matches!(
            VenueSpec::parse("Movie 27 10"),
            Err(BookingError::RowsOutOfRange(27))
        ));
        assert!(matches!(
            VenueSpec::parse("Movie 0 10"),
            Err(BookingError::RowsOutOfRange(0))
        ));
        assert!(matches!(
            VenueSpec::parse("Movie -3 10"),
            Err(BookingError::RowsOutOfRange(-3))
        ));
        assert!(matches!(
            VenueSpec::parse("Movie 5 51"),
            Err(BookingError::SeatsOutOfRange(51))
        ));
    }

    #[test]
    fn test_parse_setup_shape_errors() {
        assert!(matches!(
            VenueSpec::parse("Movie 5"),
            Err(BookingError::MissingSetupValues)
        ));
        assert!(matches!(
            VenueSpec::parse("Long Movie 5 10"),
            Err(BookingError::MissingSetupValues)
        ));
        assert!(matches!(
            VenueSpec::parse("Movie five 10"),
            Err(BookingError::NonNumericDimensions)
        ));
    }

    #[test]
    fn test_setup_error_messages() {
        let msg = VenueSpec::parse("Movie 27 10").unwrap_err().to_string();
        assert_eq!(msg, "Number of rows must be between 1 and 26");
        let msg = VenueSpec::parse("Movie 5 51").unwrap_err().to_string();
        assert_eq!(msg, "Seats per row must be between 1 and 50");
    }

    #[test]
    fn test_from_str() {
        let spec: VenueSpec = "Dune 3 4".parse().unwrap();
        assert_eq!(spec.rows, 3);
    }

    #[test]
    fn test_initial_available_seats() {
        assert_eq!(venue().available_seats(), 50);
    }

    #[test]
    fn test_commit_fills_seats() {
        let mut venue = venue();
        let id = venue.issue_booking_id();
        let seats = venue.propose(3, None).unwrap();
        venue.commit(&id, &seats).unwrap();

        assert_eq!(venue.available_seats(), 47);
        assert_eq!(venue.seats_for(&id), seats);
    }

    #[test]
    fn test_commit_is_all_or_nothing() {
        let mut venue = venue();
        let first = venue.issue_booking_id();
        venue.commit(&first, &[Position::new(0, 5)]).unwrap();

        let second = venue.issue_booking_id();
        let clash = [Position::new(0, 4), Position::new(0, 5), Position::new(0, 6)];
        let err = venue.commit(&second, &clash).unwrap_err();

        assert!(matches!(err, BookingError::SeatTaken { ref seat } if seat == "A6"));
        assert!(venue.seats_for(&second).is_empty());
        assert_eq!(venue.available_seats(), 49);
    }

    #[test]
    fn test_commit_rejects_duplicates_and_out_of_bounds() {
        let mut venue = venue();
        let id = venue.issue_booking_id();

        let dup = [Position::new(1, 1), Position::new(1, 1)];
        assert!(venue.commit(&id, &dup).is_err());

        let outside = [Position::new(1, 1), Position::new(5, 0)];
        assert!(matches!(
            venue.commit(&id, &outside),
            Err(BookingError::SeatOutOfBounds { row: 5, col: 0 })
        ));
        assert_eq!(venue.available_seats(), 50);
    }

    #[test]
    fn test_bookings_groups_by_id() {
        let mut venue = venue();
        let a = venue.issue_booking_id();
        let a_seats = venue.propose(3, None).unwrap();
        venue.commit(&a, &a_seats).unwrap();

        // issued but never committed
        let _burned = venue.issue_booking_id();

        let c = venue.issue_booking_id();
        let c_seats = venue.propose(2, Some(Position::new(2, 0))).unwrap();
        venue.commit(&c, &c_seats).unwrap();

        let bookings = venue.bookings();
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[&a], a_seats);
        assert_eq!(bookings[&c], c_seats);
        assert_eq!(c.as_str(), "HKG0003");
        assert_eq!(venue.issued_ids(), 3);
    }
}
