use super::board::Board;
use super::bot_controller::{
    Ply, PlyBest, SearchEngine, log_choice, require_player, terminal_score,
};
use super::types::{GameOutcome, Mark, Position, SearchResult};

pub const WIN_BONUS: i32 = 10;
pub const BLOCK_BONUS: i32 = 9;

/// Minimax cut off after a fixed number of plies, with a bonus for moves
/// that complete or block a line.
#[derive(Debug, Clone, Copy)]
pub struct DepthLimitedSearch {
    player: Mark,
    depth: u32,
}

impl DepthLimitedSearch {
    pub fn new(player: Mark, depth: u32) -> Result<Self, String> {
        if depth == 0 {
            return Err("Depth-limited search needs a depth of at least 1".to_string());
        }
        let player = require_player(player)?;
        Ok(Self { player, depth })
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    fn dls(&self, board: &Board, depth: u32, ply: Ply) -> SearchResult {
        if let Some(score) = terminal_score(board) {
            return SearchResult::leaf(score);
        }
        // The cut-off scores like a draw.
        if depth == 0 {
            return SearchResult::leaf(0);
        }

        let mut best = PlyBest::new(ply);
        for pos in board.empty_cells() {
            let mut child = *board;
            child.mark(pos.row, pos.col, ply.mark());
            let eval = self.dls(&child, depth - 1, ply.next());
            // Applied on both plies, so the minimizer is pushed by the same bonus.
            let score = eval.score + move_bonus(&child, pos);
            best.offer(pos, score, eval.nodes_visited);
        }
        best.finish()
    }
}

/// Bonus for the cell at `pos` on `board`, whatever it currently holds:
/// [`WIN_BONUS`] if PlayerOne would complete a line there, otherwise
/// [`BLOCK_BONUS`] if PlayerTwo would.
pub fn move_bonus(board: &Board, pos: Position) -> i32 {
    if board.probe(pos, Mark::PlayerOne).winner() == GameOutcome::PlayerOneWins {
        return WIN_BONUS;
    }
    if board.probe(pos, Mark::PlayerTwo).winner() == GameOutcome::PlayerTwoWins {
        return BLOCK_BONUS;
    }
    0
}

impl SearchEngine for DepthLimitedSearch {
    fn name(&self) -> &'static str {
        "AI_DLS"
    }

    fn player(&self) -> Mark {
        self.player
    }

    fn evaluate(&self, board: &Board) -> SearchResult {
        let result = self.dls(board, self.depth, Ply::for_player(self.player));
        log_choice(self.name(), &result);
        result
    }
}
