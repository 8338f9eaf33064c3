//! Tests for move history, time travel and win detection.

use tictactoe_timeline::{
    Board, GameState, GameStatus, HistoryError, InvariantSet, MoveError, MoveLabel, Player,
    Position, TicTacToeInvariants, check_winner, move_label,
};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn play(indices: &[usize]) -> GameState {
    indices
        .iter()
        .fold(GameState::new(), |state, &i| state.apply_move(i))
}

fn board_with(marks: &[(usize, Player)]) -> Board {
    marks.iter().fold(Board::new(), |board, &(i, player)| {
        board.with_mark(Position::from_index(i).expect("index on board"), player)
    })
}

#[test]
fn test_every_line_filled_with_x_wins() {
    for line in LINES {
        let marks: Vec<(usize, Player)> = line.iter().map(|&i| (i, Player::X)).collect();
        assert_eq!(check_winner(&board_with(&marks)), Some(Player::X), "line {line:?}");
    }
}

#[test]
fn test_boards_without_three_in_a_row_have_no_winner() {
    let boards = [
        Board::new(),
        board_with(&[(0, Player::X), (1, Player::X), (2, Player::O)]),
        board_with(&[(0, Player::X), (4, Player::X), (8, Player::O)]),
        // X O X / X O O / O X X
        board_with(&[
            (0, Player::X),
            (1, Player::O),
            (2, Player::X),
            (3, Player::X),
            (4, Player::O),
            (5, Player::O),
            (6, Player::O),
            (7, Player::X),
            (8, Player::X),
        ]),
    ];
    for board in boards {
        assert_eq!(check_winner(&board), None, "{}", board.display());
    }
}

#[test]
fn test_current_player_alternates() {
    let mut state = GameState::new();
    let mut expected = Player::X;
    for index in [4, 0, 8, 2, 6] {
        assert_eq!(state.current_player(), expected);
        state = state.apply_move(index);
        expected = expected.opponent();
    }
    assert_eq!(state.current_player(), Player::O);
}

#[test]
fn test_rejected_move_is_idempotent() {
    let state = play(&[4, 0]);
    let once = state.apply_move(4);
    let twice = once.apply_move(4);
    assert_eq!(once, state);
    assert_eq!(twice, state);
}

#[test]
fn test_jump_then_move_truncates_history() {
    let state = play(&[0, 4, 1, 5]);
    assert_eq!(state.history().len(), 5);
    assert_eq!(state.step(), 4);

    let rewound = state.jump_to_step(2).expect("step 2 exists");
    let branched = rewound.apply_move(8);
    assert_eq!(branched.history().len(), 4);
    assert_eq!(&branched.history()[..3], &state.history()[..3]);

    // Placing into the rewound board but the same square as before is refused.
    assert_eq!(rewound.apply_move(0), rewound);
}

#[test]
fn test_branch_from_step_one() {
    let state = play(&[0, 4, 1, 5]);
    let branched = state
        .jump_to_step(2)
        .expect("step 2 exists")
        .jump_to_step(1)
        .expect("step 1 exists")
        .apply_move(8);
    assert_eq!(branched.history().len(), 3);
    assert_eq!(branched.step(), 2);
}

#[test]
fn test_top_row_win_scenario() {
    let state = play(&[0, 4, 1, 5, 2]);
    assert_eq!(state.winner(), Some(Player::X));
    assert_eq!(state.status(), GameStatus::Won(Player::X));
    assert_eq!(state.status().to_string(), "Winner: X");

    for index in 0..9 {
        assert_eq!(state.apply_move(index), state, "index {index}");
    }
    assert!(matches!(state.try_apply_move(3), Err(MoveError::GameOver(Player::X))));
}

#[test]
fn test_revisiting_win_in_history() {
    let won = play(&[0, 4, 1, 5, 2]);
    let earlier = won.jump_to_step(3).expect("step 3 exists");
    assert_eq!(earlier.winner(), None);
    assert_eq!(earlier.status().to_string(), "Next player: O");

    let back = earlier.jump_to_step(5).expect("step 5 exists");
    assert_eq!(back, won);
}

#[test]
fn test_jump_out_of_range_is_error() {
    let state = play(&[0]);
    let err = state.jump_to_step(2).unwrap_err();
    assert_eq!(err, HistoryError::OutOfRange { step: 2, len: 2 });
    assert_eq!(err.to_string(), "Step 2 is outside the recorded history (2 entries)");
}

#[test]
fn test_move_labels() {
    assert_eq!(move_label(0), MoveLabel::GameStart);
    assert_eq!(move_label(0).to_string(), "Go to game start");
    assert_eq!(move_label(3), MoveLabel::Move(3));
    assert_eq!(move_label(3).to_string(), "Go to move #3");
}

#[test]
fn test_draw_scenario() {
    let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(state.status(), GameStatus::Draw);
    assert!(state.valid_moves().is_empty());
    assert_eq!(state.apply_move(0), state);
}

#[test]
fn test_invariants_hold_along_a_branching_game() {
    let mut state = GameState::new();
    for index in [4, 0, 8] {
        state = state.apply_move(index);
        assert!(TicTacToeInvariants::check_all(&state).is_ok());
    }
    state = state.jump_to_step(1).expect("step 1 exists").apply_move(2);
    assert!(TicTacToeInvariants::check_all(&state).is_ok());
    assert_eq!(state.history().len(), 3);
}
