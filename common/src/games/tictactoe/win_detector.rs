use super::types::{BOARD_SIZE, LineKind, Mark, WinningLine};

pub fn check_win(cells: &[[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Option<Mark> {
    check_win_with_line(cells).map(|line| line.mark)
}

/// Columns first, then rows, then the descending and ascending diagonals.
pub fn check_win_with_line(cells: &[[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Option<WinningLine> {
    for col in 0..BOARD_SIZE {
        if let Some(mark) = same_mark(cells[0][col], cells[1][col], cells[2][col]) {
            return Some(WinningLine::new(mark, LineKind::Column(col)));
        }
    }

    for row in 0..BOARD_SIZE {
        if let Some(mark) = same_mark(cells[row][0], cells[row][1], cells[row][2]) {
            return Some(WinningLine::new(mark, LineKind::Row(row)));
        }
    }

    if let Some(mark) = same_mark(cells[0][0], cells[1][1], cells[2][2]) {
        return Some(WinningLine::new(mark, LineKind::DescendingDiagonal));
    }

    if let Some(mark) = same_mark(cells[2][0], cells[1][1], cells[0][2]) {
        return Some(WinningLine::new(mark, LineKind::AscendingDiagonal));
    }

    None
}

#[inline(always)]
fn same_mark(a: Mark, b: Mark, c: Mark) -> Option<Mark> {
    if a != Mark::Empty && a == b && b == c {
        Some(a)
    } else {
        None
    }
}
