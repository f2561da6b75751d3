//! Pieces module - tetromino geometry and rotation
//!
//! A [`Piece`] carries its four blocks in absolute board coordinates together
//! with the pivot it rotates around. Rotation is a plain 90° clockwise turn
//! about that pivot; there are no wall kicks. The board decides whether the
//! result is legal.

use crate::types::{Position, Shape};

/// Four block positions of a piece
pub type Blocks = [Position; 4];

/// Local-frame blocks and rotation center for a shape
pub fn local_geometry(shape: Shape) -> (Blocks, Position) {
    let p = Position::new;
    match shape {
        Shape::I => ([p(0, 0), p(0, 1), p(0, 2), p(0, 3)], p(0, 1)),
        Shape::O => ([p(0, 0), p(0, 1), p(1, 0), p(1, 1)], p(0, 0)),
        Shape::T => ([p(0, 1), p(1, 0), p(1, 1), p(1, 2)], p(1, 1)),
        Shape::S => ([p(0, 1), p(0, 2), p(1, 0), p(1, 1)], p(1, 1)),
        Shape::Z => ([p(0, 0), p(0, 1), p(1, 1), p(1, 2)], p(1, 1)),
        Shape::J => ([p(0, 0), p(1, 0), p(1, 1), p(1, 2)], p(1, 1)),
        Shape::L => ([p(0, 2), p(1, 0), p(1, 1), p(1, 2)], p(1, 1)),
    }
}

/// Spawn offset for a board of the given width
///
/// Row 0, column `width / 2 - 1`, pulled left on narrow boards so the
/// four-wide I still fits.
pub fn spawn_offset(board_width: u8) -> Position {
    let col = (board_width / 2).saturating_sub(1).min(board_width.saturating_sub(4));
    Position::new(0, col as i8)
}

/// A tetromino placed on (or near) the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    shape: Shape,
    blocks: Blocks,
    center: Position,
}

impl Piece {
    /// Create a piece in its local frame (top-left at the origin)
    pub fn new(shape: Shape) -> Self {
        let (blocks, center) = local_geometry(shape);
        Self {
            shape,
            blocks,
            center,
        }
    }

    /// Create a piece translated to the spawn offset of a board
    pub fn spawn(shape: Shape, board_width: u8) -> Self {
        Self::new(shape).move_by(spawn_offset(board_width))
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn blocks(&self) -> &Blocks {
        &self.blocks
    }

    pub fn center(&self) -> Position {
        self.center
    }

    /// Translate every block and the center by `delta`
    ///
    /// No validity check: legality is the board's call.
    pub fn move_by(&self, delta: Position) -> Self {
        Self {
            shape: self.shape,
            blocks: self.blocks.map(|b| b + delta),
            center: self.center + delta,
        }
    }

    /// Rotate 90° clockwise about the center
    ///
    /// Each block offset `(Δrow, Δcol)` becomes `(Δcol, -Δrow)`. The O piece
    /// keeps its blocks unchanged.
    pub fn rotate(&self) -> Self {
        match self.shape {
            Shape::O => *self,
            Shape::I | Shape::T | Shape::S | Shape::Z | Shape::J | Shape::L => {
                let center = self.center;
                Self {
                    shape: self.shape,
                    blocks: self.blocks.map(|b| {
                        let rel = b - center;
                        center + Position::new(rel.col, -rel.row)
                    }),
                    center,
                }
            }
        }
    }

    /// Blocks sorted row-major, for comparing occupancy independent of order
    pub fn sorted_blocks(&self) -> Blocks {
        let mut blocks = self.blocks;
        blocks.sort_by_key(|b| (b.row, b.col));
        blocks
    }
}
