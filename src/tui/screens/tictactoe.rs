//! Tic-tac-toe screen with board, status line and move history.
//!
//! The screen owns the single [`GameState`] and replaces it with the state
//! returned by each transition.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument, warn};
use tutorial_tictactoe::{GameState, Position, Status, winning_line};

use crate::tui::board::draw_board;
use crate::tui::input::{digit_position, move_cursor};
use crate::tui::screen::{Screen, ScreenTransition};

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor; Enter plays.
    #[default]
    Board,
    /// Arrows select a history entry; Enter jumps to it.
    History,
}

/// State for the tic-tac-toe screen.
#[derive(Debug)]
pub struct TicTacToeScreen {
    game: GameState,
    cursor: Position,
    focus: Focus,
    history_state: ListState,
}

impl TicTacToeScreen {
    /// Creates a screen with a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::with_game(GameState::new())
    }

    /// Creates a screen around an existing game.
    pub fn with_game(game: GameState) -> Self {
        let mut history_state = ListState::default();
        history_state.select(Some(game.current_step()));
        Self {
            game,
            cursor: Position::Center,
            focus: Focus::Board,
            history_state,
        }
    }

    /// Returns the current game state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Returns the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the highlighted history entry.
    pub fn selected_step(&self) -> usize {
        self.history_state.selected().unwrap_or(0)
    }

    /// Plays at `position`; guarded moves leave the game as it is.
    #[instrument(skip(self))]
    fn play(&mut self, position: Position) {
        match self.game.try_apply_move(position) {
            Ok(next) => {
                info!(%position, status = %next.status(), "Move played");
                self.game = next;
                self.history_state.select(Some(self.game.current_step()));
            }
            Err(rejected) => debug!(%rejected, "Move ignored"),
        }
    }

    #[instrument(skip(self))]
    fn jump(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(next) => {
                info!(step, "Jumped to step");
                self.game = next;
            }
            Err(e) => warn!(error = %e, "Jump rejected"),
        }
    }

    fn select_history(&mut self, delta: isize) {
        let last = self.game.history().len() - 1;
        let next = self.selected_step().saturating_add_signed(delta).min(last);
        self.history_state.select(Some(next));
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.history_state.select(Some(self.game.current_step()));
                Focus::History
            }
            Focus::History => Focus::Board,
        };
        debug!(focus = ?self.focus, "Focus changed");
    }
}

impl Default for TicTacToeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TicTacToeScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(13),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Tic-Tac-Toe")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, rows[0]);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(44), Constraint::Length(28)])
            .split(rows[1]);

        let game_pane = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(11), Constraint::Length(3)])
            .split(panes[0]);

        let board = self.game.current().board();
        let highlight = winning_line(board)
            .map(|(_, line)| line.to_vec())
            .unwrap_or_default();
        let cursor = (self.focus == Focus::Board).then_some(self.cursor);
        draw_board(frame, game_pane[0], board, cursor, &highlight);

        let status = self.game.status();
        let status_color = match status {
            Status::Winner(_) => Color::Green,
            Status::NextPlayer(_) => Color::Yellow,
        };
        let status_line = Paragraph::new(status.to_string())
            .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status_line, game_pane[1]);

        let current_step = self.game.current_step();
        let items: Vec<ListItem> = self
            .game
            .moves()
            .iter()
            .map(|entry| {
                let style = if *entry.step() == current_step {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(Span::styled(entry.label().clone(), style)))
            })
            .collect();

        let border_style = match self.focus {
            Focus::History => Style::default().fg(Color::Yellow),
            Focus::Board => Style::default(),
        };
        let history = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title("History"),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut history_state = self.history_state;
        if self.focus == Focus::Board {
            history_state.select(None);
        }
        frame.render_stateful_widget(history, panes[1], &mut history_state);

        let help = Paragraph::new(
            "←↑↓→: Move | Enter/Space: Play/Jump | 1-9: Play | Tab: History | Esc: Menu | q: Quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, rows[2]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return ScreenTransition::Quit,
            KeyCode::Esc => return ScreenTransition::GoToMenu,
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            code => {
                if let Some(position) = digit_position(code) {
                    self.play(position);
                    return ScreenTransition::Stay;
                }
                match (self.focus, code) {
                    (Focus::Board, KeyCode::Enter | KeyCode::Char(' ')) => self.play(self.cursor),
                    (Focus::Board, _) => self.cursor = move_cursor(self.cursor, code),
                    (Focus::History, KeyCode::Up) => self.select_history(-1),
                    (Focus::History, KeyCode::Down) => self.select_history(1),
                    (Focus::History, KeyCode::Enter | KeyCode::Char(' ')) => {
                        self.jump(self.selected_step())
                    }
                    (Focus::History, _) => {}
                }
            }
        }
        ScreenTransition::Stay
    }
}
