use std::fmt;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::PlayerOne => Some(Mark::PlayerTwo),
            Mark::PlayerTwo => Some(Mark::PlayerOne),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::PlayerOne => 'X',
            Mark::PlayerTwo => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    NoWinner,
    PlayerOneWins,
    PlayerTwoWins,
    Draw,
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        *self != GameOutcome::NoWinner
    }

    pub(crate) fn from_winner(mark: Mark) -> Self {
        match mark {
            Mark::PlayerOne => GameOutcome::PlayerOneWins,
            Mark::PlayerTwo => GameOutcome::PlayerTwoWins,
            Mark::Empty => GameOutcome::NoWinner,
        }
    }
}

/// Geometry category of a completed line, as needed to draw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Column(usize),
    Row(usize),
    /// (0,0) to (2,2)
    DescendingDiagonal,
    /// (2,0) to (0,2)
    AscendingDiagonal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub kind: LineKind,
}

impl WinningLine {
    pub fn new(mark: Mark, kind: LineKind) -> Self {
        Self { mark, kind }
    }

    pub fn cells(&self) -> [Position; BOARD_SIZE] {
        match self.kind {
            LineKind::Column(col) => [0, 1, 2].map(|row| Position::new(row, col)),
            LineKind::Row(row) => [0, 1, 2].map(|col| Position::new(row, col)),
            LineKind::DescendingDiagonal => [0, 1, 2].map(|i| Position::new(i, i)),
            LineKind::AscendingDiagonal => [0, 1, 2].map(|i| Position::new(2 - i, i)),
        }
    }
}

/// Score and chosen move of one search call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    /// `None` only for terminal and cut-off leaves.
    pub best_move: Option<Position>,
    pub nodes_visited: u64,
}

impl SearchResult {
    pub fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
            nodes_visited: 1,
        }
    }
}
