//! Board tests: bounds, placement and line clearing

use quantum_blocks::core::{Board, Piece};
use quantum_blocks::types::{Position, Shape, BOARD_HEIGHT, BOARD_WIDTH};

/// Row `r` is partial with a single gap at column `r % width`
fn partial_row(r: usize, width: usize) -> Vec<bool> {
    (0..width).map(|c| c != r % width).collect()
}

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for row in 0..BOARD_HEIGHT as i8 {
        for col in 0..BOARD_WIDTH as i8 {
            assert!(board.is_valid_cell(Position::new(row, col)));
        }
    }
}

#[test]
fn test_out_of_bounds_cells_are_invalid() {
    let board = Board::default();
    for pos in [
        Position::new(-1, 0),
        Position::new(0, -1),
        Position::new(20, 0),
        Position::new(0, 10),
    ] {
        assert!(!board.is_valid_cell(pos), "{pos:?}");
    }
}

#[test]
fn test_place_leaves_original_untouched() {
    let board = Board::default();
    let piece = Piece::spawn(Shape::L, 10);
    let placed = board.place(&piece);

    for b in piece.blocks() {
        assert!(placed.is_occupied(*b));
        assert!(!board.is_occupied(*b));
    }
    assert!(!placed.can_place(&piece));
    assert!(placed.can_place(&piece.move_by(Position::new(2, 0))));
}

#[test]
fn test_clear_two_full_rows_in_the_middle() {
    let width = 10;
    let mut rows: Vec<Vec<bool>> = (0..20).map(|r| partial_row(r, width)).collect();
    rows[5] = vec![true; width];
    rows[6] = vec![true; width];
    let board = Board::with_cells(10, &rows);

    let (cleared, count) = board.clear_full_lines();
    assert_eq!(count, 2);

    // Two fresh empty rows on top
    assert_eq!(cleared.row(0), Some(&[false; 10][..]));
    assert_eq!(cleared.row(1), Some(&[false; 10][..]));
    // Rows 0-4 shifted down by two
    for r in 0..5 {
        assert_eq!(cleared.row(r + 2), Some(&rows[r][..]), "old row {r}");
    }
    // Rows below the cleared block stay put
    for r in 7..20 {
        assert_eq!(cleared.row(r), Some(&rows[r][..]), "row {r}");
    }
}

#[test]
fn test_clear_without_full_rows_is_identity() {
    let rows: Vec<Vec<bool>> = (0..20).map(|r| partial_row(r, 10)).collect();
    let board = Board::with_cells(10, &rows);
    let (cleared, count) = board.clear_full_lines();
    assert_eq!(count, 0);
    assert_eq!(cleared, board);
}

#[test]
fn test_clear_four_bottom_rows() {
    let rows: Vec<Vec<bool>> = (0..20).map(|r| vec![r >= 16; 10]).collect();
    let (cleared, count) = Board::with_cells(10, &rows).clear_full_lines();
    assert_eq!(count, 4);
    assert_eq!(cleared, Board::default());
}
