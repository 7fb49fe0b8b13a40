//! Tests for the tic-tac-toe screen: key handling and rendering.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tutorial_games::{Focus, Screen, ScreenTransition, TicTacToeScreen};
use tutorial_tictactoe::{Mark, Position, Square, Status};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press_all(screen: &mut TicTacToeScreen, keys: &str) {
    for c in keys.chars() {
        assert_eq!(screen.handle_key(key(KeyCode::Char(c))), ScreenTransition::Stay);
    }
}

fn render(screen: &TicTacToeScreen) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
    terminal.draw(|f| screen.render(f)).expect("draw");
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_digits_play_moves() {
    let mut screen = TicTacToeScreen::new();
    press_all(&mut screen, "15");

    let game = screen.game();
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current().get(Position::TopLeft), Square::Occupied(Mark::X));
    assert_eq!(game.current().get(Position::Center), Square::Occupied(Mark::O));
    assert_eq!(game.status(), Status::NextPlayer(Mark::X));
}

#[test]
fn test_cursor_and_enter_play() {
    let mut screen = TicTacToeScreen::new();
    assert_eq!(screen.cursor(), Position::Center);
    screen.handle_key(key(KeyCode::Up));
    screen.handle_key(key(KeyCode::Left));
    assert_eq!(screen.cursor(), Position::TopLeft);
    screen.handle_key(key(KeyCode::Enter));
    assert_eq!(
        screen.game().current().get(Position::TopLeft),
        Square::Occupied(Mark::X)
    );

    // Same square again is ignored.
    screen.handle_key(key(KeyCode::Char(' ')));
    assert_eq!(screen.game().history().len(), 2);
}

#[test]
fn test_history_jump_then_branch() {
    let mut screen = TicTacToeScreen::new();
    press_all(&mut screen, "15");

    screen.handle_key(key(KeyCode::Tab));
    assert_eq!(screen.focus(), Focus::History);
    assert_eq!(screen.selected_step(), 2);

    screen.handle_key(key(KeyCode::Up));
    screen.handle_key(key(KeyCode::Enter));
    assert_eq!(screen.game().current_step(), 1);
    assert_eq!(screen.game().next_mark(), Mark::O);
    assert_eq!(screen.game().history().len(), 3);

    screen.handle_key(key(KeyCode::Tab));
    assert_eq!(screen.focus(), Focus::Board);
    press_all(&mut screen, "9");

    let game = screen.game();
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_step(), 2);
    assert_eq!(game.current().get(Position::Center), Square::Empty);
    assert_eq!(
        game.current().get(Position::BottomRight),
        Square::Occupied(Mark::O)
    );
}

#[test]
fn test_history_selection_is_bounded() {
    let mut screen = TicTacToeScreen::new();
    press_all(&mut screen, "1");
    screen.handle_key(key(KeyCode::Tab));
    for _ in 0..5 {
        screen.handle_key(key(KeyCode::Down));
    }
    assert_eq!(screen.selected_step(), 1);
    for _ in 0..5 {
        screen.handle_key(key(KeyCode::Up));
    }
    assert_eq!(screen.selected_step(), 0);
}

#[test]
fn test_win_blocks_further_moves() {
    let mut screen = TicTacToeScreen::new();
    press_all(&mut screen, "14253");
    assert_eq!(screen.game().status(), Status::Winner(Mark::X));

    let before = screen.game().clone();
    press_all(&mut screen, "9");
    assert_eq!(screen.game(), &before);
}

#[test]
fn test_navigation_keys() {
    let mut screen = TicTacToeScreen::new();
    assert_eq!(screen.handle_key(key(KeyCode::Esc)), ScreenTransition::GoToMenu);
    assert_eq!(
        screen.handle_key(key(KeyCode::Char('q'))),
        ScreenTransition::Quit
    );
}

#[test]
fn test_render_status_and_history() {
    let mut screen = TicTacToeScreen::new();
    let text = render(&screen);
    assert!(text.contains("Next player: X"));
    assert!(text.contains("Go to game start"));
    assert!(!text.contains("Go to move #1"));

    press_all(&mut screen, "12");
    let text = render(&screen);
    assert!(text.contains("Next player: X"));
    assert!(text.contains("Go to move #1"));
    assert!(text.contains("Go to move #2"));
}

#[test]
fn test_render_winner() {
    let mut screen = TicTacToeScreen::new();
    press_all(&mut screen, "14253");
    let text = render(&screen);
    assert!(text.contains("Winner: X"));
    assert!(text.contains("Go to move #5"));
}
