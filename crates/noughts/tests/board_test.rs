//! Tests for the board model and engine entry points.

use noughts::{
    Board, GameOutcome, Move, MoveError, Player, Position, apply_move, new_game, outcome,
};

#[test]
fn test_new_game_is_empty() {
    let board = new_game();
    assert_eq!(board, Board::new());
    assert_eq!(board.move_count(), 0);
    assert_eq!(outcome(&board), GameOutcome::Ongoing);
}

#[test]
fn test_apply_on_occupied_fails_and_leaves_board_unchanged() {
    let board = apply_move(&new_game(), Player::Human, 4).unwrap();
    let before = board;

    let err = apply_move(&board, Player::Computer, 4).unwrap_err();
    assert_eq!(err, MoveError::InvalidMove { position: Position::Center });
    assert_eq!(err.to_string(), "Square Center is already occupied");
    assert_eq!(board, before);
}

#[test]
fn test_is_occupied_tracks_moves() {
    let board = apply_move(&new_game(), Player::Human, 0).unwrap();
    for pos in Position::ALL {
        assert_eq!(board.is_occupied(pos), pos == Position::TopLeft);
    }
}

#[test]
fn test_full_board() {
    let board = Position::ALL.iter().enumerate().fold(new_game(), |b, (i, &pos)| {
        let player = if i % 2 == 0 { Player::Human } else { Player::Computer };
        b.apply(Move::new(player, pos)).unwrap()
    });
    assert!(board.is_full());
    assert!(board.empty_positions().is_empty());
    assert_eq!(board.positions_of(Player::Human).len(), 5);
    assert_eq!(board.positions_of(Player::Computer).len(), 4);
}

#[test]
fn test_board_serializes_slots() {
    let board = apply_move(&new_game(), Player::Computer, 2).unwrap();
    let json = serde_json::to_value(board).unwrap();
    let slots = json["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 9);
    assert!(slots[0].is_null());
    assert_eq!(slots[2]["player"], "Computer");
    assert_eq!(slots[2]["position"], "TopRight");
}
