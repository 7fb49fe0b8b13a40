//! Tests for loading a game state from serialized form.

use tutorial_tictactoe::{GameState, Mark, Position, Status};

const EMPTY_BOARD: &str = r#"squares = ["Empty", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty"]"#;

#[test]
fn test_empty_history_rejected() {
    let err = toml::from_str::<GameState>("current_step = 5\nboards = []\n").unwrap_err();
    assert!(err.to_string().contains("Invalid game state"));
}

#[test]
fn test_step_past_end_rejected() {
    let content = format!("current_step = 3\n\n[[boards]]\n{EMPTY_BOARD}\n");
    let err = toml::from_str::<GameState>(&content).unwrap_err();
    assert!(err.to_string().contains("Invalid game state"));
}

#[test]
fn test_fresh_game_loads() {
    let content = format!("current_step = 0\n\n[[boards]]\n{EMPTY_BOARD}\n");
    let state: GameState = toml::from_str(&content).expect("Parse failed");
    assert_eq!(state, GameState::new());
    assert_eq!(state.status(), Status::NextPlayer(Mark::X));
}

#[test]
fn test_played_game_survives_serialization() {
    let state = GameState::new()
        .apply_move(Position::TopLeft)
        .apply_move(Position::Center)
        .jump_to(1)
        .unwrap();

    let content = toml::to_string(&state).expect("Serialize failed");
    let loaded: GameState = toml::from_str(&content).expect("Parse failed");
    assert_eq!(loaded, state);
    assert_eq!(loaded.next_mark(), Mark::O);
}

#[test]
fn test_from_snapshots_reports_every_violation() {
    let violations = GameState::from_snapshots(Vec::new(), 5).unwrap_err();
    assert_eq!(violations.len(), 2);
}
