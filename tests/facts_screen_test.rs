//! Tests for the animal facts screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::TestBackend};
use tutorial_facts::{Catalog, DEFAULT_HEADING};
use tutorial_games::{FactsScreen, Screen, ScreenTransition};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn screen() -> FactsScreen {
    FactsScreen::with_rng(Catalog::builtin(), StdRng::seed_from_u64(1))
}

#[test]
fn test_enter_shows_fact_for_selected_animal() {
    let mut screen = screen();
    assert_eq!(screen.selected_animal(), Some("dolphin"));
    assert_eq!(screen.fact(), None);

    screen.handle_key(key(KeyCode::Down));
    assert_eq!(screen.selected_animal(), Some("lobster"));
    assert_eq!(screen.handle_key(key(KeyCode::Enter)), ScreenTransition::Stay);

    let catalog = Catalog::builtin();
    let lobster = catalog.animal("lobster").unwrap();
    let fact = screen.fact().expect("fact shown");
    assert!(lobster.facts().iter().any(|f| f == fact));
}

#[test]
fn test_selection_wraps() {
    let mut screen = screen();
    screen.handle_key(key(KeyCode::Up));
    assert_eq!(screen.selected_animal(), Some("starfish"));
    screen.handle_key(key(KeyCode::Down));
    assert_eq!(screen.selected_animal(), Some("dolphin"));
}

#[test]
fn test_navigation_keys() {
    let mut screen = screen();
    assert_eq!(screen.handle_key(key(KeyCode::Esc)), ScreenTransition::GoToMenu);
    assert_eq!(
        screen.handle_key(key(KeyCode::Char('q'))),
        ScreenTransition::Quit
    );
}

#[test]
fn test_render_heading_and_fact() {
    let mut screen = screen();
    screen.handle_key(key(KeyCode::Enter));

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
    terminal.draw(|f| screen.render(f)).expect("draw");
    let text: String = terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect();

    assert!(text.contains(DEFAULT_HEADING));
    assert!(text.contains("starfish"));
    assert!(text.contains(screen.fact().unwrap()));
}
