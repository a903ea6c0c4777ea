use super::board::Board;
use super::bot_controller::{Ply, PlyBest, SearchEngine, log_choice, terminal_score};
use super::types::{Mark, SearchResult};

/// Exhaustive minimax down to the end of the game.
#[derive(Debug, Clone, Copy)]
pub struct Minimax {
    player: Mark,
}

impl Minimax {
    pub fn new(player: Mark) -> Self {
        Self { player }
    }

    fn minimax(&self, board: &Board, ply: Ply) -> SearchResult {
        if let Some(score) = terminal_score(board) {
            return SearchResult::leaf(score);
        }

        let mut best = PlyBest::new(ply);
        for pos in board.empty_cells() {
            let mut child = *board;
            child.mark(pos.row, pos.col, ply.mark());
            let eval = self.minimax(&child, ply.next());
            best.offer(pos, eval.score, eval.nodes_visited);
        }
        best.finish()
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(Mark::PlayerTwo)
    }
}

impl SearchEngine for Minimax {
    fn name(&self) -> &'static str {
        "AI_minimax"
    }

    fn player(&self) -> Mark {
        self.player
    }

    fn evaluate(&self, board: &Board) -> SearchResult {
        let result = self.minimax(board, Ply::for_player(self.player));
        log_choice(self.name(), &result);
        result
    }
}
