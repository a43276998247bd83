//! Tests for win, draw and outcome rules.

use noughts::{
    Board, GameOutcome, Move, Player, Position, WIN_PATTERNS, has_won, is_draw, outcome,
    outcome_after, winner,
};

fn board_from(marks: &[(Player, usize)]) -> Board {
    marks.iter().fold(Board::new(), |board, &(player, idx)| {
        let pos = Position::from_index(idx).expect("index in range");
        board.apply(Move::new(player, pos)).expect("free square")
    })
}

#[test]
fn test_every_pattern_wins_for_both_players() {
    for pattern in WIN_PATTERNS {
        for player in [Player::Human, Player::Computer] {
            let board = pattern
                .iter()
                .fold(Board::new(), |b, pos| b.apply(Move::new(player, pos)).unwrap());
            assert!(has_won(&board, player), "{pattern:?} should win for {player}");
            assert!(!has_won(&board, player.opponent()));
            assert_eq!(winner(&board), Some(player));

            let expected = match player {
                Player::Human => GameOutcome::HumanWin,
                Player::Computer => GameOutcome::ComputerWin,
            };
            assert_eq!(outcome(&board), expected, "{pattern:?}");
            assert_eq!(outcome_after(&board, player), expected);
            assert_eq!(outcome_after(&board, player.opponent()), expected);
        }
    }
}

#[test]
fn test_non_winning_configurations() {
    use Player::{Computer as C, Human as H};
    let cases: &[&[(Player, usize)]] = &[
        &[],
        &[(H, 0), (H, 1)],
        &[(H, 0), (H, 1), (C, 2)],
        // L-shape and knight-shape never form a line.
        &[(H, 0), (H, 3), (H, 7)],
        &[(H, 0), (H, 5), (H, 7)],
        &[(H, 1), (H, 3), (H, 5), (H, 7)],
        // Mixed marks along a row.
        &[(H, 3), (C, 4), (H, 5)],
    ];

    for &marks in cases {
        let board = board_from(marks);
        assert!(!has_won(&board, Player::Human), "{marks:?}");
        assert!(!has_won(&board, Player::Computer), "{marks:?}");
        assert_eq!(outcome(&board), GameOutcome::Ongoing);
    }
}

#[test]
fn test_draw_only_when_full_and_unwon() {
    use Player::{Computer as C, Human as H};
    let partial = board_from(&[(H, 0), (C, 4), (H, 8)]);
    assert!(!is_draw(&partial));

    // X O X / X O O / O X X
    let drawn = board_from(&[
        (H, 0),
        (C, 1),
        (H, 2),
        (H, 3),
        (C, 4),
        (C, 5),
        (C, 6),
        (H, 7),
        (H, 8),
    ]);
    assert!(is_draw(&drawn));
    assert_eq!(outcome(&drawn), GameOutcome::Draw);

    // Last square completes the computer's column: a win, not a draw.
    let won = board_from(&[
        (H, 0),
        (C, 1),
        (H, 2),
        (C, 3),
        (C, 4),
        (H, 5),
        (H, 6),
        (C, 8),
        (C, 7),
    ]);
    assert!(won.is_full());
    assert!(!is_draw(&won));
    assert_eq!(outcome_after(&won, Player::Computer), GameOutcome::ComputerWin);
}

#[test]
fn test_rules_are_pure() {
    use Player::{Computer as C, Human as H};
    let board = board_from(&[(H, 0), (C, 4), (H, 8), (C, 2)]);
    let snapshot = board;

    let first = (
        has_won(&board, H),
        has_won(&board, C),
        is_draw(&board),
        outcome(&board),
    );
    for _ in 0..10 {
        assert_eq!(
            first,
            (
                has_won(&board, H),
                has_won(&board, C),
                is_draw(&board),
                outcome(&board),
            )
        );
    }
    assert_eq!(board, snapshot);
}
