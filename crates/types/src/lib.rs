//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental value types used throughout the workspace.
//! They are plain data with no game logic attached, so they can be shared by the
//! rules engine, the session runtime and the terminal front-end alike.
//!
//! # Coordinates
//!
//! Positions are `(row, col)` pairs. Row 0 is the top of the board and
//! row `height - 1` is the bottom; column 0 is the left edge.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn offset**: row 0, column `width / 2 - 1` (column 4 on a 10-wide board),
//!   pulled left to column 0 on a 4-wide board so the I piece fits
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_FALL_DELAY_MS` | 1000 | Fall delay before the first milestone |
//! | `LEVEL_SPEED_MULTIPLIER` | 0.9 | Delay factor applied per 1000-point milestone |
//! | `SOFT_DROP_INTERVAL_MS` | 50 | Period of the soft-drop timer |
//! | `SOFT_DROP_GRACE_MS` | 150 | Hold timeout for terminals without key release events |
//!
//! # Examples
//!
//! ```
//! use quantum_blocks_types::{GameAction, Position, Shape, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let p = Position::new(1, 2) + Position::new(3, -1);
//! assert_eq!(p, Position::new(4, 1));
//!
//! assert_eq!(Shape::from_str("t"), Some(Shape::T));
//! assert_eq!(GameAction::from_str("softDropStart"), Some(GameAction::SoftDropStart));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fall delay at level 1, in milliseconds
pub const INITIAL_FALL_DELAY_MS: u64 = 1000;

/// Factor applied to the fall delay for every scoring milestone
pub const LEVEL_SPEED_MULTIPLIER: f64 = 0.9;

/// Soft-drop period in milliseconds, independent of level
pub const SOFT_DROP_INTERVAL_MS: u64 = 50;

/// Soft-drop hold timeout for terminals that never report key releases
pub const SOFT_DROP_GRACE_MS: u32 = 150;

/// Points per level (and per fall-speed milestone)
pub const POINTS_PER_LEVEL: u32 = 1000;

/// Base points for clearing N lines with a single lock
///
/// - 1 line: 100
/// - 2 lines: 300
/// - 3 lines: 500
/// - 4 lines: 800
///
/// Points are multiplied by the current level. Index 0 (and anything past 4)
/// is worth nothing.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// A cell coordinate or a movement delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// One row down
    pub const DOWN: Position = Position::new(1, 0);
    /// One column left
    pub const LEFT: Position = Position::new(0, -1);
    /// One column right
    pub const RIGHT: Position = Position::new(0, 1);
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.row - rhs.row, self.col - rhs.col)
    }
}

/// The seven tetromino shapes
///
/// - **I**: straight bar
/// - **O**: 2x2 square (does not rotate)
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Shape {
    /// Every shape, in canonical bag order
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::O,
        Shape::T,
        Shape::S,
        Shape::Z,
        Shape::J,
        Shape::L,
    ];

    /// Parse shape from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use quantum_blocks_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("i"), Some(Shape::I));
    /// assert_eq!(Shape::from_str("O"), Some(Shape::O));
    /// assert_eq!(Shape::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(Shape::I),
            "o" => Some(Shape::O),
            "t" => Some(Shape::T),
            "s" => Some(Shape::S),
            "z" => Some(Shape::Z),
            "j" => Some(Shape::J),
            "l" => Some(Shape::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::I => "i",
            Shape::O => "o",
            Shape::T => "t",
            Shape::S => "s",
            Shape::Z => "z",
            Shape::J => "j",
            Shape::L => "l",
        }
    }
}

/// Discrete player intents produced by the input layer
///
/// The session forwards these to the rules engine as commands. Timer-driven
/// commands (`Tick`) and piece spawns never originate here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell (locks it if it cannot move)
    MoveDown,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Begin the rapid soft-drop fall
    SoftDropStart,
    /// End the rapid soft-drop fall
    SoftDropStop,
    /// Start a new game
    StartGame,
    /// Throw away the current game and start over
    ResetGame,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use quantum_blocks_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            "rotate" => Some(GameAction::Rotate),
            "softdropstart" => Some(GameAction::SoftDropStart),
            "softdropstop" => Some(GameAction::SoftDropStop),
            "startgame" => Some(GameAction::StartGame),
            "resetgame" => Some(GameAction::ResetGame),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
            GameAction::SoftDropStart => "softDropStart",
            GameAction::SoftDropStop => "softDropStop",
            GameAction::StartGame => "startGame",
            GameAction::ResetGame => "resetGame",
        }
    }

    /// Whether the action starts a fresh game rather than steering a piece
    pub fn restarts(&self) -> bool {
        matches!(self, GameAction::StartGame | GameAction::ResetGame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing_and_scoring() {
        assert_eq!(INITIAL_FALL_DELAY_MS, 1000);
        assert_eq!(SOFT_DROP_INTERVAL_MS, 50);
        assert_eq!(POINTS_PER_LEVEL, 1000);
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
        assert!((LEVEL_SPEED_MULTIPLIER - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn position_arithmetic_is_component_wise() {
        let a = Position::new(3, 7);
        let b = Position::new(-1, 2);
        assert_eq!(a + b, Position::new(2, 9));
        assert_eq!(a - b, Position::new(4, 5));
        assert_eq!((a + b) - b, a);
        assert_eq!(Position::default() + Position::DOWN, Position::new(1, 0));
    }

    #[test]
    fn shape_names_cover_every_variant() {
        for shape in Shape::ALL {
            assert_eq!(Shape::from_str(shape.as_str()), Some(shape));
        }
    }

    #[test]
    fn action_names_cover_every_variant() {
        let all = [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::MoveDown,
            GameAction::Rotate,
            GameAction::SoftDropStart,
            GameAction::SoftDropStop,
            GameAction::StartGame,
            GameAction::ResetGame,
        ];
        for action in all {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
        assert!(GameAction::ResetGame.restarts());
        assert!(!GameAction::Rotate.restarts());
    }
}
