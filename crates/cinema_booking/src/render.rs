use crate::{
    constants::{GLYPH_AVAILABLE, GLYPH_BOOKED, GLYPH_SELECTED},
    grid::SeatingMap,
    position::{Position, row_letter},
};
use std::fmt::Write;

/// Draws the seating chart with the screen on top, so the row closest to the
/// screen comes first and row A last. Seats in `highlighted` are drawn as `#`.
pub fn render_seating_map(map: &SeatingMap, highlighted: &[Position]) -> String {
    let width = map.seats_per_row() * 2;
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "{:^w$}", "SCREEN", w = width + 2);
    let _ = writeln!(out, "—{}", "-".repeat(width));

    for r in (0..map.rows()).rev() {
        let glyphs: Vec<String> = (0..map.seats_per_row())
            .map(|c| {
                let pos = Position::new(r, c);
                let glyph = if highlighted.contains(&pos) {
                    GLYPH_SELECTED
                } else if map.occupant(pos).is_some() {
                    GLYPH_BOOKED
                } else {
                    GLYPH_AVAILABLE
                };
                glyph.to_string()
            })
            .collect();
        let _ = writeln!(out, "{} {}", row_letter(r), glyphs.join(" "));
    }

    let numbers: Vec<String> = (1..=map.seats_per_row()).map(|n| n.to_string()).collect();
    let _ = writeln!(out, "  {}", numbers.join(" "));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::BookingId;

    #[test]
    fn test_render_empty_map() {
        let map = SeatingMap::new(2, 3);
        let chart = render_seating_map(&map, &[]);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1].trim(), "SCREEN");
        assert_eq!(lines[2], "—------");
        assert_eq!(lines[3], "B • • •");
        assert_eq!(lines[4], "A • • •");
        assert_eq!(lines[5], "  1 2 3");
    }

    #[test]
    fn test_render_marks_booked_and_selected() {
        let mut map = SeatingMap::new(2, 4);
        map.assign(Position::new(0, 0), &BookingId::from("HKG0001"))
            .unwrap();
        let chart = render_seating_map(&map, &[Position::new(0, 2), Position::new(1, 3)]);

        assert!(chart.contains("B • • • #\n"));
        assert!(chart.contains("A o • # •\n"));
    }

    #[test]
    fn test_selection_wins_over_booked_glyph() {
        let mut map = SeatingMap::new(1, 2);
        let id = BookingId::from("HKG0001");
        map.assign(Position::new(0, 1), &id).unwrap();

        let chart = render_seating_map(&map, &map.seats_for(&id));
        assert!(chart.contains("A • #\n"));
    }

    #[test]
    fn test_screen_is_centered() {
        let map = SeatingMap::new(1, 10);
        let chart = render_seating_map(&map, &[]);
        let screen = chart.lines().nth(1).unwrap();
        assert_eq!(screen.chars().count(), 22);
        assert_eq!(screen, format!("{:^22}", "SCREEN"));
    }
}
