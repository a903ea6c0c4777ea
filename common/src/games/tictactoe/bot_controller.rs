use crate::log;
use super::board::Board;
use super::types::{GameOutcome, Mark, Position, SearchResult};

/// Starting score of a maximizing ply; every reachable evaluation beats it.
pub const MAX_PLY_START: i32 = -100;
/// Starting score of a minimizing ply.
pub const MIN_PLY_START: i32 = 100;

/// A computer opponent that picks a move for a board.
///
/// Engines never mutate the board they are given and keep no state between
/// calls besides their configuration.
pub trait SearchEngine {
    fn name(&self) -> &'static str;

    fn player(&self) -> Mark;

    /// Scores `board` from PlayerOne's point of view (positive is good for
    /// PlayerOne) and picks the move for `self.player()`.
    fn evaluate(&self, board: &Board) -> SearchResult;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Ply {
    Max,
    Min,
}

impl Ply {
    pub(crate) fn for_player(player: Mark) -> Self {
        if player == Mark::PlayerOne { Ply::Max } else { Ply::Min }
    }

    /// Mark placed by the side moving at this ply.
    pub(crate) fn mark(self) -> Mark {
        match self {
            Ply::Max => Mark::PlayerOne,
            Ply::Min => Mark::PlayerTwo,
        }
    }

    pub(crate) fn next(self) -> Self {
        match self {
            Ply::Max => Ply::Min,
            Ply::Min => Ply::Max,
        }
    }

    pub(crate) fn start_score(self) -> i32 {
        match self {
            Ply::Max => MAX_PLY_START,
            Ply::Min => MIN_PLY_START,
        }
    }

    /// Strict comparison, so the first enumerated move keeps ties.
    pub(crate) fn improves(self, candidate: i32, best: i32) -> bool {
        match self {
            Ply::Max => candidate > best,
            Ply::Min => candidate < best,
        }
    }
}

/// Accumulates the best child of one ply.
pub(crate) struct PlyBest {
    ply: Ply,
    result: SearchResult,
}

impl PlyBest {
    pub(crate) fn new(ply: Ply) -> Self {
        Self {
            ply,
            result: SearchResult {
                score: ply.start_score(),
                best_move: None,
                nodes_visited: 1,
            },
        }
    }

    pub(crate) fn offer(&mut self, pos: Position, score: i32, nodes_visited: u64) {
        self.result.nodes_visited += nodes_visited;
        if self.ply.improves(score, self.result.score) {
            self.result.score = score;
            self.result.best_move = Some(pos);
        }
    }

    pub(crate) fn finish(self) -> SearchResult {
        self.result
    }
}

/// Engines and the controller only play for one of the two real marks.
pub(crate) fn require_player(player: Mark) -> Result<Mark, String> {
    match player {
        Mark::Empty => Err("An opponent must play PlayerOne or PlayerTwo".to_string()),
        mark => Ok(mark),
    }
}

/// +1 / -1 for a completed line, 0 for a full board, `None` while play goes on.
pub(crate) fn terminal_score(board: &Board) -> Option<i32> {
    match board.winner() {
        GameOutcome::PlayerOneWins => Some(1),
        GameOutcome::PlayerTwoWins => Some(-1),
        _ if board.is_full() => Some(0),
        _ => None,
    }
}

pub(crate) fn log_choice(engine: &str, result: &SearchResult) {
    match result.best_move {
        Some(pos) => log!(
            "{} has chosen to mark the square in pos {} with an eval of: {} ({} nodes)",
            engine,
            pos,
            result.score,
            result.nodes_visited
        ),
        None => log!("{} found no move, board eval is {}", engine, result.score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ply_for_player() {
        assert_eq!(Ply::for_player(Mark::PlayerOne), Ply::Max);
        assert_eq!(Ply::for_player(Mark::PlayerTwo), Ply::Min);
        assert_eq!(Ply::Max.next(), Ply::Min);
        assert_eq!(Ply::Min.mark(), Mark::PlayerTwo);
    }

    #[test]
    fn test_ties_keep_first_move() {
        let mut best = PlyBest::new(Ply::Max);
        best.offer(Position::new(0, 0), 0, 1);
        best.offer(Position::new(0, 1), 0, 1);
        best.offer(Position::new(0, 2), -1, 1);
        let result = best.finish();
        assert_eq!(result.best_move, Some(Position::new(0, 0)));
        assert_eq!(result.score, 0);
        assert_eq!(result.nodes_visited, 4);
    }

    #[test]
    fn test_require_player_rejects_empty() {
        assert!(require_player(Mark::Empty).is_err());
        assert_eq!(require_player(Mark::PlayerTwo), Ok(Mark::PlayerTwo));
    }

    #[test]
    fn test_terminal_score() {
        let mut board = Board::new();
        assert_eq!(terminal_score(&board), None);
        board.mark(0, 0, Mark::PlayerTwo);
        board.mark(1, 1, Mark::PlayerTwo);
        board.mark(2, 2, Mark::PlayerTwo);
        assert_eq!(terminal_score(&board), Some(-1));
    }
}
