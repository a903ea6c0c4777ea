use super::board::Board;
use super::bot_controller::{
    MAX_PLY_START, MIN_PLY_START, Ply, PlyBest, SearchEngine, log_choice, require_player,
    terminal_score,
};
use super::types::{GameOutcome, Mark, SearchResult};

pub const DEFAULT_ALPHA_BETA_DEPTH: u32 = 3;

/// Depth-limited minimax with alpha-beta pruning and a static evaluation at
/// the horizon.
#[derive(Debug, Clone, Copy)]
pub struct AlphaBetaMinimax {
    player: Mark,
    depth: u32,
}

impl AlphaBetaMinimax {
    pub fn new(player: Mark) -> Self {
        Self {
            player,
            depth: DEFAULT_ALPHA_BETA_DEPTH,
        }
    }

    /// A depth of 9 or more never reaches the static evaluation. Depth 0
    /// would only score the board and never pick a move.
    pub fn with_depth(player: Mark, depth: u32) -> Result<Self, String> {
        if depth == 0 {
            return Err("Alpha-beta search needs a depth of at least 1".to_string());
        }
        let player = require_player(player)?;
        Ok(Self { player, depth })
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    fn alpha_beta(
        &self,
        board: &Board,
        depth: u32,
        ply: Ply,
        mut alpha: i32,
        mut beta: i32,
    ) -> SearchResult {
        if let Some(score) = terminal_score(board) {
            return SearchResult::leaf(score);
        }
        if depth == 0 {
            return SearchResult::leaf(static_evaluation(board));
        }

        let mut best = PlyBest::new(ply);
        for pos in board.empty_cells() {
            let mut child = *board;
            child.mark(pos.row, pos.col, ply.mark());
            let eval = self.alpha_beta(&child, depth - 1, ply.next(), alpha, beta);
            best.offer(pos, eval.score, eval.nodes_visited);

            match ply {
                Ply::Max => alpha = alpha.max(eval.score),
                Ply::Min => beta = beta.min(eval.score),
            }
            if beta <= alpha {
                break;
            }
        }
        best.finish()
    }
}

/// Horizon score: +/-10 for a decided board, otherwise the first empty cell
/// (row-major) where PlayerOne would complete a line gives +1, or where
/// PlayerTwo would gives -1. No threat scores 0.
pub fn static_evaluation(board: &Board) -> i32 {
    match board.winner() {
        GameOutcome::PlayerOneWins => return 10,
        GameOutcome::PlayerTwoWins => return -10,
        _ => {}
    }

    for pos in board.empty_cells() {
        let with_one = board.probe(pos, Mark::PlayerOne);
        if with_one.winner() == GameOutcome::PlayerOneWins {
            return 1;
        }
        // Probed on top of PlayerOne's mark, as if both had played there.
        if with_one.probe(pos, Mark::PlayerTwo).winner() == GameOutcome::PlayerTwoWins {
            return -1;
        }
    }

    0
}

impl Default for AlphaBetaMinimax {
    fn default() -> Self {
        Self::new(Mark::PlayerTwo)
    }
}

impl SearchEngine for AlphaBetaMinimax {
    fn name(&self) -> &'static str {
        "AI_AlphaBeta"
    }

    fn player(&self) -> Mark {
        self.player
    }

    fn evaluate(&self, board: &Board) -> SearchResult {
        let result = self.alpha_beta(
            board,
            self.depth,
            Ply::for_player(self.player),
            MAX_PLY_START,
            MIN_PLY_START,
        );
        log_choice(self.name(), &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use crate::games::tictactoe::{Minimax, Position};

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::PlayerOne;
    const O: Mark = Mark::PlayerTwo;

    fn side_to_move(board: &Board) -> Mark {
        if board.marked_count() % 2 == 0 { X } else { O }
    }

    fn collect_reachable(board: Board, seen: &mut HashSet<Board>, open: &mut Vec<Board>) {
        if !seen.insert(board) {
            return;
        }
        if terminal_score(&board).is_some() {
            return;
        }
        open.push(board);
        let mark = side_to_move(&board);
        for pos in board.empty_cells() {
            let mut child = board;
            child.mark(pos.row, pos.col, mark);
            collect_reachable(child, seen, open);
        }
    }

    #[test]
    fn test_default_depth_is_three() {
        assert_eq!(AlphaBetaMinimax::default().depth(), DEFAULT_ALPHA_BETA_DEPTH);
        assert_eq!(AlphaBetaMinimax::with_depth(O, 9).unwrap().depth(), 9);
    }

    #[test]
    fn test_zero_depth_and_empty_player_are_rejected() {
        assert!(AlphaBetaMinimax::with_depth(O, 0).is_err());
        assert!(AlphaBetaMinimax::with_depth(E, 3).is_err());
        let shallow = AlphaBetaMinimax::with_depth(O, 1).unwrap();
        let board = Board::from_cells([[X, E, E], [E, E, E], [E, E, E]]);
        assert!(shallow.evaluate(&board).best_move.is_some());
    }

    #[test]
    fn test_blocks_open_row() {
        let board = Board::from_cells([
            [X, X, E],
            [E, E, E],
            [E, E, E],
        ]);
        for depth in [1, 2, 3, 9] {
            let result = AlphaBetaMinimax::with_depth(O, depth).unwrap().evaluate(&board);
            assert_eq!(result.best_move, Some(Position::new(0, 2)), "depth {}", depth);
        }
    }

    #[test]
    fn test_static_evaluation_of_decided_boards() {
        let won = Board::from_cells([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(static_evaluation(&won), 10);
        let lost = Board::from_cells([[O, X, X], [O, X, E], [O, E, E]]);
        assert_eq!(static_evaluation(&lost), -10);
    }

    #[test]
    fn test_static_evaluation_scans_in_row_major_order() {
        let player_one_threat = Board::from_cells([[X, E, E], [X, O, E], [E, E, O]]);
        assert_eq!(static_evaluation(&player_one_threat), 1);

        // PlayerTwo's cell (0,2) is scanned before PlayerOne's (2,2).
        let both_threaten = Board::from_cells([[O, O, E], [E, E, E], [X, X, E]]);
        assert_eq!(static_evaluation(&both_threaten), -1);

        let quiet = Board::from_cells([[X, E, E], [E, O, E], [E, E, E]]);
        assert_eq!(static_evaluation(&quiet), 0);
    }

    #[test]
    fn test_full_depth_matches_minimax_on_every_reachable_board() {
        let mut seen = HashSet::new();
        let mut open = Vec::new();
        collect_reachable(Board::new(), &mut seen, &mut open);
        assert_eq!(seen.len(), 5478);

        for board in open {
            let player = side_to_move(&board);
            let expected = Minimax::new(player).evaluate(&board);
            let pruned = AlphaBetaMinimax::with_depth(player, 9).unwrap().evaluate(&board);
            assert_eq!(pruned.score, expected.score, "board\n{}", board);
            assert!(pruned.nodes_visited <= expected.nodes_visited);
        }
    }

    #[test]
    fn test_pruning_visits_fewer_nodes_from_empty_board() {
        let board = Board::new();
        let full = Minimax::new(X).evaluate(&board);
        let pruned = AlphaBetaMinimax::with_depth(X, 9).unwrap().evaluate(&board);
        assert_eq!(full.score, 0);
        assert_eq!(pruned.score, 0);
        assert!(pruned.nodes_visited < full.nodes_visited / 5);
    }
}
