mod alpha_beta;
mod board;
mod bot_controller;
mod depth_limited;
mod game_controller;
mod minimax;
mod settings;
mod types;
mod win_detector;

pub use alpha_beta::{AlphaBetaMinimax, DEFAULT_ALPHA_BETA_DEPTH, static_evaluation};
pub use board::Board;
pub use bot_controller::{MAX_PLY_START, MIN_PLY_START, SearchEngine};
pub use depth_limited::{BLOCK_BONUS, DepthLimitedSearch, WIN_BONUS, move_bonus};
pub use game_controller::GameController;
pub use minimax::Minimax;
pub use settings::{OpponentKind, OpponentSettings};
pub use types::{
    BOARD_SIZE, CELL_COUNT, GameOutcome, LineKind, Mark, Position, SearchResult, WinningLine,
};
pub use win_detector::{check_win, check_win_with_line};
