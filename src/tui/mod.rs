//! Terminal UI: screens, rendering and the event loop.

mod board;
mod controller;
mod input;
mod screen;
mod screens;
mod terminal;

pub use board::{center_rect, draw_board};
pub use controller::{ActiveScreen, AppController};
pub use input::{digit_position, move_cursor};
pub use screen::{Screen, ScreenTransition};
pub use screens::{FactsScreen, Focus, MenuScreen, TicTacToeScreen};
pub use terminal::TerminalGuard;

use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::time::Duration;
use tracing::{error, info, instrument};
use tutorial_facts::Catalog;

use crate::AppConfig;

/// Sets up the terminal, runs the controller and restores the terminal.
///
/// Restoration is held by a [`TerminalGuard`], so it also runs on early
/// returns and on panic.
#[instrument(skip(config, catalog))]
pub async fn run_tui(
    config: &AppConfig,
    catalog: Catalog,
    start: ScreenTransition,
) -> anyhow::Result<()> {
    info!("Starting Tutorial Games TUI");

    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut controller =
        AppController::new(catalog, start, Duration::from_millis(*config.tick_millis()));
    let res = controller.run(&mut terminal).await;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}
