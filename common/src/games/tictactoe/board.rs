use std::fmt;

use super::types::{BOARD_SIZE, CELL_COUNT, GameOutcome, Mark, Position, WinningLine};
use super::win_detector::check_win_with_line;

/// A 3x3 grid plus the number of marked cells.
///
/// `Board` is `Copy`: search code explores hypothetical moves on copies and
/// never touches the board it was handed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
    marked: usize,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from row-major contents. Used by tests and replays of fixed positions.
    pub fn from_cells(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let marked = cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Mark::Empty)
            .count();
        Self { cells, marked }
    }

    /// Marks an empty cell. Callers check `is_empty` first.
    pub fn mark(&mut self, row: usize, col: usize, player: Mark) {
        debug_assert!(self.cells[row][col] == Mark::Empty, "cell ({}, {}) is already marked", row, col);
        debug_assert!(player != Mark::Empty);
        self.cells[row][col] = player;
        self.marked += 1;
    }

    /// Copy of the board with `pos` set to `mark`, whatever it held before.
    pub(crate) fn probe(&self, pos: Position, mark: Mark) -> Board {
        let mut probed = *self;
        let previous = probed.cells[pos.row][pos.col];
        probed.cells[pos.row][pos.col] = mark;
        match (previous == Mark::Empty, mark == Mark::Empty) {
            (true, false) => probed.marked += 1,
            (false, true) => probed.marked -= 1,
            _ => {}
        }
        probed
    }

    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == Mark::Empty
    }

    pub fn cell(&self, pos: Position) -> Mark {
        self.cells[pos.row][pos.col]
    }

    pub fn cells(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn marked_count(&self) -> usize {
        self.marked
    }

    /// Empty cells in row-major order. Engines rely on this order to break ties.
    pub fn empty_cells(&self) -> Vec<Position> {
        let mut moves = Vec::with_capacity(CELL_COUNT - self.marked);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.marked == CELL_COUNT
    }

    pub fn is_empty_board(&self) -> bool {
        self.marked == 0
    }

    /// Only reports completed lines; a full board without one is `NoWinner` here.
    pub fn winner(&self) -> GameOutcome {
        match check_win_with_line(&self.cells) {
            Some(line) => GameOutcome::from_winner(line.mark),
            None => GameOutcome::NoWinner,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            let line: String = cells.iter().map(Mark::symbol).collect();
            if row + 1 < BOARD_SIZE {
                writeln!(f, "{}", line)?;
            } else {
                write!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}
