use std::fmt;

/// Zero based seat coordinate. Row 0 is the row farthest from the screen.
///
/// Ordering is row-major, so a sorted `Vec<Position>` reads left to right,
/// back row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row letter, `A` for row 0.
    pub fn row_letter(&self) -> char {
        row_letter(self.row)
    }
}

/// `A5` style label: row letter plus 1-based seat number.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.col + 1)
    }
}

pub fn row_letter(row: usize) -> char {
    (b'A' + (row % 26) as u8) as char
}

/// Decodes a seat label such as `C5` into a position inside a
/// `rows` x `seats_per_row` map. Returns `None` for anything malformed or
/// out of bounds.
pub fn parse_seat_position(label: &str, rows: usize, seats_per_row: usize) -> Option<Position> {
    let mut chars = label.chars();
    let row_char = chars.next()?;
    let rest = chars.as_str();
    if rest.is_empty() {
        return None;
    }

    let row = i64::from(u32::from(row_char.to_ascii_uppercase())) - i64::from(b'A');
    let col = rest.trim().parse::<i64>().ok()? - 1;

    let row = usize::try_from(row).ok().filter(|&r| r < rows)?;
    let col = usize::try_from(col).ok().filter(|&c| c < seats_per_row)?;
    Some(Position::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_labels() {
        assert_eq!(parse_seat_position("A1", 5, 10), Some(Position::new(0, 0)));
        assert_eq!(parse_seat_position("C5", 5, 10), Some(Position::new(2, 4)));
        assert_eq!(parse_seat_position("E10", 5, 10), Some(Position::new(4, 9)));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(parse_seat_position("d7", 5, 10), Some(Position::new(3, 6)));
    }

    #[test]
    fn test_parse_accepts_leading_plus() {
        assert_eq!(parse_seat_position("B+3", 5, 10), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_parse_rejects_out_of_bounds() {
        assert_eq!(parse_seat_position("Z1", 5, 10), None);
        assert_eq!(parse_seat_position("F1", 5, 10), None);
        assert_eq!(parse_seat_position("A11", 5, 10), None);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for label in ["", "A", "AA1", "12", "A0", "A-1", "A1.5", "#3"] {
            assert_eq!(parse_seat_position(label, 5, 10), None, "label {label:?}");
        }
    }

    #[test]
    fn test_parse_rejects_multibyte_row() {
        assert_eq!(parse_seat_position("é1", 5, 10), None);
    }

    #[test]
    fn test_display_label() {
        assert_eq!(Position::new(0, 0).to_string(), "A1");
        assert_eq!(Position::new(3, 9).to_string(), "D10");
        assert_eq!(Position::new(25, 49).to_string(), "Z50");
    }

    #[test]
    fn test_label_round_trip_through_parser() {
        let pos = Position::new(2, 7);
        assert_eq!(parse_seat_position(&pos.to_string(), 5, 10), Some(pos));
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut seats = vec![
            Position::new(1, 0),
            Position::new(0, 9),
            Position::new(0, 2),
        ];
        seats.sort();
        assert_eq!(
            seats,
            vec![Position::new(0, 2), Position::new(0, 9), Position::new(1, 0)]
        );
    }
}
