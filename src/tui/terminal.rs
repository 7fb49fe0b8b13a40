//! Raw mode and alternate screen setup with teardown on every exit path.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use std::panic;
use std::sync::Once;
use tracing::{debug, warn};

static PANIC_HOOK: Once = Once::new();

/// Holds the terminal in raw mode on the alternate screen until dropped.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enables raw mode and enters the alternate screen.
    ///
    /// A failure after raw mode is enabled drops the guard, which restores the
    /// terminal before the error is returned.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen)?;
        debug!("Terminal in raw mode on alternate screen");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Every step runs even when an earlier one fails; the first error is returned.
pub fn restore() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// Restores the terminal before the default panic message is printed.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let original = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = restore();
            original(info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_without_setup_is_ok() {
        assert!(restore().is_ok());
    }

    #[test]
    fn test_panic_hook_installed_once_and_panics_propagate() {
        install_panic_hook();
        install_panic_hook();
        let result = panic::catch_unwind(|| panic!("render failed"));
        assert!(result.is_err());
    }
}
