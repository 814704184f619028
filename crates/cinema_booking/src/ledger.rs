use crate::constants::{BOOKING_ID_PREFIX, BOOKING_ID_WIDTH};
use log::debug;
use std::fmt;

/// Occupant identifier written into every seat of a booking.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookingId(String);

impl BookingId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookingId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Issues `HKG0001`, `HKG0002`, ... for the lifetime of one venue.
#[derive(Debug, Clone)]
pub struct BookingLedger {
    next_sequence: u64,
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self { next_sequence: 1 }
    }
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the next sequence number. Ids are never handed out twice,
    /// whether or not the booking is later committed.
    pub fn next_id(&mut self) -> BookingId {
        let id = BookingId(format!(
            "{BOOKING_ID_PREFIX}{:0width$}",
            self.next_sequence,
            width = BOOKING_ID_WIDTH
        ));
        self.next_sequence += 1;
        debug!("Issued booking id {id}");
        id
    }

    pub fn issued(&self) -> u64 {
        self.next_sequence - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_id_generation() {
        let mut ledger = BookingLedger::new();
        assert_eq!(ledger.next_id().as_str(), "HKG0001");
        assert_eq!(ledger.next_id().as_str(), "HKG0002");
        assert_eq!(ledger.issued(), 2);
    }

    #[test]
    fn test_ids_are_strictly_increasing() {
        let mut ledger = BookingLedger::new();
        let ids: Vec<BookingId> = (0..20).map(|_| ledger.next_id()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sequence_wider_than_padding() {
        let mut ledger = BookingLedger { next_sequence: 10_000 };
        assert_eq!(ledger.next_id().to_string(), "HKG10000");
    }

    #[test]
    fn test_independent_ledgers() {
        let mut a = BookingLedger::new();
        let mut b = BookingLedger::new();
        a.next_id();
        assert_eq!(b.next_id().as_str(), "HKG0001");
    }
}
