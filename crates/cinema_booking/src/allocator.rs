//! Seat placement policy.
//!
//! Rows are filled from the back (row 0) toward the screen. An empty row gets
//! a block centred on the middle seat, a partially booked row gets the
//! consecutive run whose start is closest to the middle, falling back to a
//! middle-outward sweep. An anchor overrides the first row only: seats are
//! taken rightward from the anchor, then leftward, and any overflow continues
//! in the following rows with the default policy.

use crate::{grid::SeatingMap, position::Position};
use log::debug;

/// Proposes `count` empty seats, sorted row-major, or `None` when the rows
/// from the starting row onward cannot hold them. The map is never modified.
pub fn find_seats(
    map: &SeatingMap,
    count: usize,
    anchor: Option<Position>,
) -> Option<Vec<Position>> {
    let mut seats = Vec::with_capacity(count);

    let first_default_row = match anchor {
        Some(anchor) => {
            fill_from_anchor(map, anchor, count, &mut seats);
            anchor.row + 1
        }
        None => 0,
    };

    for row in first_default_row..map.rows() {
        if seats.len() >= count {
            break;
        }
        let remaining = count - seats.len();
        if map.is_row_empty(row) {
            fill_centered(map, row, remaining, &mut seats);
        } else {
            fill_partial(map, row, remaining, &mut seats);
        }
    }

    if seats.len() < count {
        debug!(
            "Cannot place {count} seats (found {}, anchor {:?})",
            seats.len(),
            anchor
        );
        return None;
    }

    seats.sort_unstable();
    Some(seats)
}

#[inline]
fn middle_of(seats_per_row: usize) -> usize {
    seats_per_row.saturating_sub(1) / 2
}

fn fill_from_anchor(map: &SeatingMap, anchor: Position, count: usize, out: &mut Vec<Position>) {
    let row = anchor.row;
    let rightward = anchor.col..map.seats_per_row();
    let leftward = (0..anchor.col).rev();

    for col in rightward.chain(leftward) {
        if out.len() >= count {
            break;
        }
        let pos = Position::new(row, col);
        if map.is_available(pos) {
            out.push(pos);
        }
    }
    debug!("Anchor {anchor} yielded {} of {count} seats", out.len());
}

/// Takes a block of `remaining` seats centred on the middle of an empty row,
/// clamped to the row edges.
fn fill_centered(map: &SeatingMap, row: usize, remaining: usize, out: &mut Vec<Position>) {
    let width = map.seats_per_row() as isize;
    let need = remaining as isize;
    let middle = middle_of(map.seats_per_row()) as isize;

    let mut left = middle - (need - 1) / 2;
    let mut right = left + need - 1;
    if left < 0 {
        left = 0;
        right = (width - 1).min(need - 1);
    }
    if right >= width {
        right = width - 1;
        left = (right - need + 1).max(0);
    }

    let before = out.len();
    out.extend((left as usize..=right as usize).map(|col| Position::new(row, col)));
    debug!(
        "Row {} empty, centred block {}..={} ({} seats)",
        row,
        left,
        right,
        out.len() - before
    );
}

fn fill_partial(map: &SeatingMap, row: usize, remaining: usize, out: &mut Vec<Position>) {
    let middle = middle_of(map.seats_per_row());

    if let Some(start) = best_consecutive_start(map, row, remaining, middle) {
        debug!("Row {row}: consecutive run of {remaining} at column {start}");
        out.extend((start..start + remaining).map(|col| Position::new(row, col)));
        return;
    }

    let target = out.len() + remaining;
    let rightward = middle..map.seats_per_row();
    let leftward = (0..middle).rev();
    for col in rightward.chain(leftward) {
        if out.len() >= target {
            break;
        }
        let pos = Position::new(row, col);
        if map.is_available(pos) {
            out.push(pos);
        }
    }
    debug!("Row {row}: no run of {remaining}, filled outward from column {middle}");
}

/// Start column of the run of exactly `len` empty seats closest to `middle`.
/// Starts are visited in ascending order and only a strictly closer one wins,
/// so ties go to the lower column.
fn best_consecutive_start(map: &SeatingMap, row: usize, len: usize, middle: usize) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (run_start, run_len) in map.free_runs(row) {
        if run_len < len {
            continue;
        }
        for start in run_start..=run_start + run_len - len {
            let distance = start.abs_diff(middle);
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((start, distance));
            }
        }
    }
    best.map(|(start, _)| start)
}
