//! Tests for the grid encoder.

use strictly_wins::{Board, Player, Square, encode};

#[test]
fn test_encoding_is_deterministic() {
    let grid = [*b"xo.", *b".x.", *b"o.x"];
    assert_eq!(encode(&grid), encode(&grid));
}

#[test]
fn test_case_does_not_change_encoding() {
    let upper = [*b"XO.", *b".X.", *b"O.X"];
    let lower = [*b"xo.", *b".x.", *b"o.x"];
    assert_eq!(Board::encode(&upper), Board::encode(&lower));
}

#[test]
fn test_unknown_markers_are_empty() {
    let grid = [*b"X?#", *b" 1-", [0, 0xff, b'O']];
    let board = Board::encode(&grid);
    assert_eq!(board.bits(), (1 << 16) | (1 << 8));
    assert_eq!(board.square(1), Some(Square::Empty));
}

#[test]
fn test_x_in_high_field_o_in_low_field() {
    let board = Board::encode(&[*b"...", *b".X.", *b"..."]);
    assert_eq!(board.bits(), 1 << 20);
    assert_eq!(board.occupancy(Player::X), 1 << 4);
    assert_eq!(board.occupancy(Player::O), 0);

    let board = Board::encode(&[*b"...", *b".O.", *b"..."]);
    assert_eq!(board.bits(), 1 << 4);
}

#[test]
fn test_unused_bits_stay_clear() {
    let board = Board::encode(&[*b"XXX", *b"XXX", *b"XXX"]);
    assert_eq!(board.bits(), 0x01ff_0000);
    let board = Board::encode(&[*b"OOO", *b"OOO", *b"OOO"]);
    assert_eq!(board.bits(), 0x0000_01ff);
}

#[test]
fn test_grid_round_trip_normalizes_markers() {
    let board = Board::from([*b"x.o", *b"...", *b"o?x"]);
    assert_eq!(board.to_grid(), [*b"X.O", *b"...", *b"O.X"]);
}
