use common::games::tictactoe::{
    BOARD_SIZE, Board, GameOutcome, LineKind, Mark, Position, WinningLine,
};

/// Text grid with row and column indices. Cells on `line` are bracketed.
pub fn render_board(board: &Board, line: Option<&WinningLine>) -> String {
    let highlighted: Vec<Position> = line.map(|l| l.cells().to_vec()).unwrap_or_default();

    let mut out = String::from("    0  1  2\n");
    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{} ", row));
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            let symbol = board.cell(pos).symbol();
            if highlighted.contains(&pos) {
                out.push_str(&format!("[{}]", symbol));
            } else {
                out.push_str(&format!(" {} ", symbol));
            }
        }
        out.push('\n');
    }
    out
}

pub fn describe_line(line: &WinningLine) -> String {
    match line.kind {
        LineKind::Column(col) => format!("column {}", col),
        LineKind::Row(row) => format!("row {}", row),
        LineKind::DescendingDiagonal => "descending diagonal".to_string(),
        LineKind::AscendingDiagonal => "ascending diagonal".to_string(),
    }
}

pub fn describe_outcome(outcome: GameOutcome, line: Option<&WinningLine>) -> String {
    let winner = |mark: Mark| match line {
        Some(line) => format!("{} wins on the {}", mark.symbol(), describe_line(line)),
        None => format!("{} wins", mark.symbol()),
    };
    match outcome {
        GameOutcome::NoWinner => "Game in progress".to_string(),
        GameOutcome::PlayerOneWins => winner(Mark::PlayerOne),
        GameOutcome::PlayerTwoWins => winner(Mark::PlayerTwo),
        GameOutcome::Draw => "Draw".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        let rendered = render_board(&Board::new(), None);
        assert_eq!(rendered, "    0  1  2\n0  .  .  . \n1  .  .  . \n2  .  .  . \n");
    }

    #[test]
    fn test_render_highlights_winning_line() {
        let board = Board::from_cells([
            [Mark::PlayerTwo, Mark::PlayerOne, Mark::Empty],
            [Mark::PlayerOne, Mark::PlayerTwo, Mark::Empty],
            [Mark::PlayerOne, Mark::Empty, Mark::PlayerTwo],
        ]);
        let line = board.winning_line().unwrap();
        let rendered = render_board(&board, Some(&line));
        assert!(rendered.contains("0 [O] X  . "));
        assert!(rendered.contains("2  X  . [O]"));
    }

    #[test]
    fn test_describe_outcome() {
        let line = WinningLine::new(Mark::PlayerOne, LineKind::Column(2));
        assert_eq!(
            describe_outcome(GameOutcome::PlayerOneWins, Some(&line)),
            "X wins on the column 2"
        );
        assert_eq!(describe_outcome(GameOutcome::Draw, None), "Draw");
        assert_eq!(
            describe_line(&WinningLine::new(Mark::PlayerTwo, LineKind::AscendingDiagonal)),
            "ascending diagonal"
        );
    }
}
