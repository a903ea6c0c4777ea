use crate::log;
use super::board::Board;
use super::bot_controller::{SearchEngine, require_player};
use super::types::{GameOutcome, Mark, Position, WinningLine};

/// One game between the human (PlayerOne) and a computer opponent.
///
/// Owns the only authoritative `Board`; engines see it by reference and
/// the controller applies their answer after the search returns.
pub struct GameController {
    board: Board,
    opponent: Box<dyn SearchEngine>,
    human: Mark,
    current_player: Mark,
    running: bool,
}

impl GameController {
    /// Fails for an engine playing `Mark::Empty`, which could never take a turn.
    pub fn new(opponent: Box<dyn SearchEngine>) -> Result<Self, String> {
        let engine_player = require_player(opponent.player())?;
        let human = engine_player.opponent().ok_or("Opponent has no counterpart")?;
        Ok(Self {
            board: Board::new(),
            opponent,
            human,
            current_player: Mark::PlayerOne,
            running: true,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    pub fn human_player(&self) -> Mark {
        self.human
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_human_turn(&self) -> bool {
        self.running && self.current_player == self.human
    }

    pub fn engine_name(&self) -> &'static str {
        self.opponent.name()
    }

    /// Like `Board::winner`, but a full board without a line is a `Draw`.
    pub fn outcome(&self) -> GameOutcome {
        match self.board.winner() {
            GameOutcome::NoWinner if self.board.is_full() => GameOutcome::Draw,
            outcome => outcome,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<(), String> {
        if !self.is_human_turn() {
            return Err(if self.running {
                "Not your turn".to_string()
            } else {
                "Game is already over".to_string()
            });
        }
        self.make_move(Position::new(row, col))
    }

    /// The opponent's choice for the current board, without applying it.
    pub fn evaluate_opponent_turn(&self) -> Option<Position> {
        if !self.running || self.current_player != self.opponent.player() {
            return None;
        }
        self.opponent.evaluate(&self.board).best_move
    }

    pub fn play_opponent_turn(&mut self) -> Result<Position, String> {
        let pos = self
            .evaluate_opponent_turn()
            .ok_or_else(|| format!("{} has no move to play", self.opponent.name()))?;
        self.make_move(pos)?;
        Ok(pos)
    }

    fn make_move(&mut self, pos: Position) -> Result<(), String> {
        if !pos.is_on_board() {
            return Err(format!("Position {} is out of bounds", pos));
        }
        if !self.board.is_empty(pos.row, pos.col) {
            return Err(format!("Cell {} is already marked", pos));
        }

        self.board.mark(pos.row, pos.col, self.current_player);

        let outcome = self.outcome();
        if outcome.is_over() {
            self.running = false;
            log!("Game over after {} moves: {:?}", self.board.marked_count(), outcome);
        } else {
            self.next_turn();
        }
        Ok(())
    }

    fn next_turn(&mut self) {
        if let Some(next) = self.current_player.opponent() {
            self.current_player = next;
        }
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Mark::PlayerOne;
        self.running = true;
    }
}
