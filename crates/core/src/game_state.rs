//! Game state module - the immutable aggregate snapshot
//!
//! A [`GameState`] is a plain value: the rules engine reads one and returns a
//! new one, and the session publishes whole values. Nothing edits a state
//! that has already been published.

use crate::board::Board;
use crate::pieces::Piece;
use crate::rng::PieceRandomizer;
use crate::scoring::level_for_score;
use crate::snapshot::GameSnapshot;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Lifecycle phase, derived from the state flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Freshly reset, nothing spawned yet
    Empty,
    /// A piece is falling
    Falling,
    /// The last piece locked and the next one has not spawned
    AwaitingSpawn,
    /// A spawn failed; only a reset leaves this phase
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Empty => "empty",
            Phase::Falling => "falling",
            Phase::AwaitingSpawn => "awaiting_spawn",
            Phase::GameOver => "game_over",
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_piece: Option<Piece>,
    /// Single look-ahead slot
    pub next_piece: Option<Piece>,
    pub game_over: bool,
    pub score: u32,
    /// Set by a lock; cleared by the next successful spawn
    pub needs_new_piece: bool,
    pub soft_drop_active: bool,
    pub randomizer: PieceRandomizer,
}

impl GameState {
    /// Create an empty 20x10 game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board(Board::new(BOARD_WIDTH, BOARD_HEIGHT), PieceRandomizer::new(seed))
    }

    /// Create an empty game on a board of the given dimensions
    pub fn with_size(width: u8, height: u8, seed: u32) -> Self {
        Self::with_board(Board::new(width, height), PieceRandomizer::new(seed))
    }

    /// Create a game around an existing board and randomizer
    pub fn with_board(board: Board, randomizer: PieceRandomizer) -> Self {
        Self {
            board,
            current_piece: None,
            next_piece: None,
            game_over: false,
            score: 0,
            needs_new_piece: false,
            soft_drop_active: false,
            randomizer,
        }
    }

    /// Empty state for a new game on the same board size
    ///
    /// The randomizer keeps its random stream but starts a fresh bag, so
    /// consecutive games deal different sequences.
    pub fn reset(&self) -> Self {
        Self::with_board(
            Board::new(self.board.width(), self.board.height()),
            self.randomizer.refilled(),
        )
    }

    /// `score / 1000 + 1`
    pub fn level(&self) -> u32 {
        level_for_score(self.score)
    }

    pub fn board_width(&self) -> u8 {
        self.board.width()
    }

    pub fn board_height(&self) -> u8 {
        self.board.height()
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.current_piece.is_some() {
            Phase::Falling
        } else if self.needs_new_piece {
            Phase::AwaitingSpawn
        } else {
            Phase::Empty
        }
    }

    /// Whether piece-steering commands can have any effect
    pub fn is_playable(&self) -> bool {
        !self.game_over && self.current_piece.is_some()
    }

    /// Renderer-facing copy of this state
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
