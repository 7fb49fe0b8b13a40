//! App controller: the state machine driving the multi-screen TUI.

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument};
use tutorial_facts::Catalog;

use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{FactsScreen, MenuScreen, TicTacToeScreen};

/// Active screen in the state machine.
#[derive(Debug)]
pub enum ActiveScreen {
    /// Main menu.
    Menu(MenuScreen),
    /// Tic-tac-toe game.
    TicTacToe(TicTacToeScreen),
    /// Animal facts.
    Facts(FactsScreen),
}

impl ActiveScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::Menu(s) => s,
            ActiveScreen::TicTacToe(s) => s,
            ActiveScreen::Facts(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Menu(s) => s,
            ActiveScreen::TicTacToe(s) => s,
            ActiveScreen::Facts(s) => s,
        }
    }
}

/// Controller that owns the active screen and applies transitions.
///
/// Call [`AppController::run`] to start the event loop.
#[derive(Debug)]
pub struct AppController {
    catalog: Catalog,
    tick: Duration,
    screen: ActiveScreen,
}

impl AppController {
    /// Creates a controller starting on the screen named by `start`.
    #[instrument(skip(catalog))]
    pub fn new(catalog: Catalog, start: ScreenTransition, tick: Duration) -> Self {
        info!("Creating AppController");
        let screen = ActiveScreen::Menu(MenuScreen::new());
        let mut controller = Self {
            catalog,
            tick,
            screen,
        };
        controller.apply(start);
        controller
    }

    /// Returns the active screen.
    pub fn screen(&self) -> &ActiveScreen {
        &self.screen
    }

    /// Routes a key to the active screen and applies the resulting transition.
    ///
    /// Returns `false` when the application should quit.
    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> bool {
        let transition = self.screen.as_screen_mut().handle_key(key);
        self.apply(transition)
    }

    /// Applies a screen transition. Returns `false` on [`ScreenTransition::Quit`].
    #[instrument(skip(self))]
    pub fn apply(&mut self, transition: ScreenTransition) -> bool {
        debug!(transition = ?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::GoToMenu => {
                info!("Navigating to Menu");
                self.screen = ActiveScreen::Menu(MenuScreen::new());
            }
            ScreenTransition::GoToTicTacToe => {
                info!("Navigating to TicTacToe");
                self.screen = ActiveScreen::TicTacToe(TicTacToeScreen::new());
            }
            ScreenTransition::GoToFacts => {
                info!("Navigating to Facts");
                self.screen = ActiveScreen::Facts(FactsScreen::new(self.catalog.clone()));
            }
            ScreenTransition::Quit => return false,
        }
        true
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        loop {
            terminal.draw(|f| self.screen.as_screen().render(f))?;

            // Poll for input with short timeout to keep the loop responsive.
            if event::poll(self.tick)?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if !self.handle_key(key) {
                    info!("Quitting");
                    return Ok(());
                }
            }

            sleep(Duration::from_millis(10)).await;
        }
    }
}
