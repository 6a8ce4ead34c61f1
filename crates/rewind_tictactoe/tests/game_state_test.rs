//! Tests for move application and status reporting.

use rewind_tictactoe::{Board, GameError, GameState, Mark, Position, Square, Status};

#[test]
fn test_new_game_starts_with_empty_board() {
    let game = GameState::new();
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.step_number(), 0);
    assert!(game.x_is_next());
    assert_eq!(*game.current_board(), Board::new());
    assert_eq!(game.status(), Status::NextPlayer(Mark::X));
}

#[test]
fn test_moves_alternate_marks() {
    let game = GameState::new().apply_move(4).expect("legal move");
    assert_eq!(game.current_board().get(Position::Center), Square::Occupied(Mark::X));
    assert!(!game.x_is_next());

    let game = game.apply_move(0).expect("legal move");
    assert_eq!(game.current_board().get(Position::TopLeft), Square::Occupied(Mark::O));
    assert!(game.x_is_next());
    assert_eq!(game.step_number(), 2);
}

#[test]
fn test_apply_move_leaves_previous_state_untouched() {
    let before = GameState::new();
    let after = before.apply_move(4).expect("legal move");
    assert_eq!(before, GameState::new());
    assert_ne!(before, after);
}

#[test]
fn test_occupied_cell_rejected() {
    let game = GameState::new().apply_move(4).expect("legal move");
    assert_eq!(game.apply_move(4), Err(GameError::CellOccupied(Position::Center)));
    assert!(!game.is_legal_move(4));
}

#[test]
fn test_click_on_occupied_cell_is_noop() {
    let game = GameState::replay(&[4, 0]).expect("valid sequence");
    let clicked = game.clone().handle_click(0);
    assert_eq!(clicked, game);
}

#[test]
fn test_rejected_click_after_rewind_keeps_future() {
    let rewound = GameState::replay(&[0, 4, 1])
        .and_then(|g| g.jump_to(1))
        .expect("valid sequence");

    let clicked = rewound.clone().handle_click(0);
    assert_eq!(clicked, rewound);
    assert_eq!(clicked.history().len(), 4);
    assert_eq!(clicked.step_number(), 1);
}

#[test]
fn test_rejected_move_after_rewind_keeps_future() {
    let rewound = GameState::replay(&[0, 4, 1])
        .and_then(|g| g.jump_to(1))
        .expect("valid sequence");

    assert_eq!(rewound.apply_move(0), Err(GameError::CellOccupied(Position::TopLeft)));
    assert_eq!(rewound.apply_move(9), Err(GameError::CellOutOfRange(9)));
    assert_eq!(rewound.history().len(), 4);
    assert_eq!(rewound.current_board().get(Position::TopCenter), Square::Empty);

    // The recorded future is still reachable.
    let tip = rewound.jump_to(3).expect("recorded step");
    assert_eq!(tip.current_board().get(Position::TopCenter), Square::Occupied(Mark::X));
}

#[test]
fn test_out_of_range_cell_rejected() {
    assert_eq!(GameState::new().apply_move(9), Err(GameError::CellOutOfRange(9)));
    assert_eq!(GameState::new().handle_click(42), GameState::new());
}

#[test]
fn test_x_wins_top_row_scenario() {
    let game = [0, 4, 1, 3, 2]
        .into_iter()
        .fold(GameState::new(), GameState::handle_click);

    assert_eq!(game.status(), Status::WinnerDeclared(Mark::X));
    assert_eq!(game.history().len(), 6);

    let after = game.clone().handle_click(5);
    assert_eq!(after, game);
    assert_eq!(game.apply_move(5), Err(GameError::GameOver(Mark::X)));
    assert!(game.valid_moves().is_empty());
}

#[test]
fn test_o_wins_column() {
    let game = GameState::replay(&[0, 1, 3, 4, 8, 7]).expect("valid sequence");
    assert_eq!(game.status(), Status::WinnerDeclared(Mark::O));
    assert_eq!(game.winner(), Some(Mark::O));
}

#[test]
fn test_full_board_keeps_reporting_next_player() {
    // X O X / X O O / O X X
    let game = GameState::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).expect("valid sequence");
    assert_eq!(game.winner(), None);
    assert!(game.is_draw());
    assert_eq!(game.status(), Status::NextPlayer(Mark::O));
    assert!(game.valid_moves().is_empty());
}

#[test]
fn test_replay_stops_at_first_rejection() {
    let result = GameState::replay(&[0, 4, 0, 8]);
    assert_eq!(result, Err(GameError::CellOccupied(Position::TopLeft)));
}

#[test]
fn test_x_is_next_tracks_parity_through_any_sequence() {
    let mut game = GameState::new();
    for (index, jump) in [(4, None), (0, None), (8, Some(1)), (2, None), (6, Some(0)), (1, None)] {
        game = game.handle_click(index);
        assert_eq!(game.x_is_next(), game.step_number() % 2 == 0);
        if let Some(step) = jump {
            game = game.jump_to(step).expect("recorded step");
            assert_eq!(game.x_is_next(), game.step_number() % 2 == 0);
        }
    }
}

#[test]
fn test_status_display() {
    assert_eq!(Status::NextPlayer(Mark::O).to_string(), "Next player: O");
    assert_eq!(Status::WinnerDeclared(Mark::X).to_string(), "Winner: X");
}

#[test]
fn test_state_serializes_history_and_step() {
    let game = GameState::replay(&[4]).expect("valid sequence");
    let json = serde_json::to_value(&game).expect("serializable");
    assert_eq!(json["step_number"], 1);
    assert_eq!(json["history"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["history"][1]["board"][4]["Occupied"], "X");

    let back: GameState = serde_json::from_value(json).expect("deserializable");
    assert_eq!(back, game);
}

#[test]
fn test_deserialize_rejects_dangling_step() {
    let mut json = serde_json::to_value(GameState::new()).expect("serializable");
    json["step_number"] = serde_json::json!(3);

    let result: Result<GameState, _> = serde_json::from_value(json);
    assert!(result.unwrap_err().to_string().contains("Step number points at a recorded history entry"));
}

#[test]
fn test_deserialize_rejects_move_after_win() {
    let won = GameState::replay(&[0, 4, 1, 3, 2]).expect("valid sequence");
    let mut json = serde_json::to_value(&won).expect("serializable");

    let mut extra = json["history"][5].clone();
    extra["board"][5] = serde_json::json!({ "Occupied": "O" });
    json["history"]
        .as_array_mut()
        .expect("history is an array")
        .push(extra);
    json["step_number"] = serde_json::json!(6);

    let result: Result<GameState, _> = serde_json::from_value(json);
    assert!(result.unwrap_err().to_string().contains("stops at a win"));
}
