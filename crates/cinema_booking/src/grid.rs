use crate::{
    error::{BookingError, Result},
    ledger::BookingId,
    position::Position,
};

/// One bookable seat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Booked(BookingId),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Rectangular seat matrix, `cells[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingMap {
    cells: Vec<Vec<Cell>>,
    seats_per_row: usize,
}

impl SeatingMap {
    pub fn new(rows: usize, seats_per_row: usize) -> Self {
        Self {
            cells: vec![vec![Cell::Empty; seats_per_row]; rows],
            seats_per_row,
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    pub fn capacity(&self) -> usize {
        self.rows() * self.seats_per_row
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row]
    }

    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.cells.get(pos.row)?.get(pos.col)
    }

    /// True only for an in-bounds empty seat.
    pub fn is_available(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Cell::is_empty)
    }

    pub fn occupant(&self, pos: Position) -> Option<&BookingId> {
        match self.get(pos)? {
            Cell::Booked(id) => Some(id),
            Cell::Empty => None,
        }
    }

    pub fn is_row_empty(&self, row: usize) -> bool {
        self.cells[row].iter().all(Cell::is_empty)
    }

    pub fn occupied_seats(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    pub fn available_seats(&self) -> usize {
        self.capacity() - self.occupied_seats()
    }

    /// Maximal runs of consecutive empty seats in `row` as `(start, len)`,
    /// in ascending start order.
    pub fn free_runs(&self, row: usize) -> Vec<(usize, usize)> {
        let cells = &self.cells[row];
        let mut runs = vec![];
        let mut c = 0usize;
        while c < cells.len() {
            while c < cells.len() && !cells[c].is_empty() {
                c += 1;
            }
            let start = c;
            while c < cells.len() && cells[c].is_empty() {
                c += 1;
            }
            let len = c - start;
            if len > 0 {
                runs.push((start, len));
            }
        }
        runs
    }

    /// Every seat held by `id`, row-major.
    pub fn seats_for(&self, id: &BookingId) -> Vec<Position> {
        let mut seats = vec![];
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if matches!(cell, Cell::Booked(owner) if owner == id) {
                    seats.push(Position::new(r, c));
                }
            }
        }
        seats
    }

    /// Writes `id` into an empty seat. A booked seat is never overwritten.
    pub(crate) fn assign(&mut self, pos: Position, id: &BookingId) -> Result<()> {
        let cell = self
            .cells
            .get_mut(pos.row)
            .and_then(|row| row.get_mut(pos.col))
            .ok_or(BookingError::SeatOutOfBounds {
                row: pos.row,
                col: pos.col,
            })?;
        if !cell.is_empty() {
            return Err(BookingError::SeatTaken {
                seat: pos.to_string(),
            });
        }
        *cell = Cell::Booked(id.clone());
        Ok(())
    }
}
