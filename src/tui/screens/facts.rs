//! Animal facts screen. Pick an animal, read a random fun fact.

use crossterm::event::{KeyCode, KeyEvent};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use tracing::{debug, info, instrument, warn};
use tutorial_facts::Catalog;

use crate::tui::screen::{Screen, ScreenTransition};

/// State for the animal facts screen.
#[derive(Debug)]
pub struct FactsScreen {
    catalog: Catalog,
    list_state: ListState,
    fact: Option<String>,
    rng: StdRng,
}

impl FactsScreen {
    /// Creates a screen over `catalog` with an entropy-seeded RNG.
    #[instrument(skip(catalog))]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Creates a screen with a caller-supplied RNG.
    pub fn with_rng(catalog: Catalog, rng: StdRng) -> Self {
        debug!(animals = catalog.animals().len(), "Initializing FactsScreen");
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            catalog,
            list_state,
            fact: None,
            rng,
        }
    }

    /// Returns the fact currently shown, if any.
    pub fn fact(&self) -> Option<&str> {
        self.fact.as_deref()
    }

    /// Returns the name of the selected animal.
    pub fn selected_animal(&self) -> Option<&str> {
        let names = self.catalog.names();
        let idx = self.list_state.selected()?;
        names.get(idx).copied()
    }

    fn select_previous(&mut self) {
        let count = self.catalog.animals().len();
        if count == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = self.catalog.animals().len();
        if count == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    #[instrument(skip(self))]
    fn show_fact(&mut self) {
        let Some(name) = self.selected_animal().map(str::to_string) else {
            return;
        };
        match self.catalog.random_fact(&name, &mut self.rng) {
            Ok(fact) => {
                info!(animal = %name, "Fact shown");
                self.fact = Some(fact.to_string());
            }
            Err(e) => warn!(error = %e, "No fact to show"),
        }
    }
}

impl Screen for FactsScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(5),
                Constraint::Length(3),
            ])
            .split(area);

        let heading = Paragraph::new(self.catalog.heading())
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(heading, chunks[0]);

        let items: Vec<ListItem> = self
            .catalog
            .names()
            .into_iter()
            .map(ListItem::new)
            .collect();

        let mut animals_block = Block::default().borders(Borders::ALL).title("Animals");
        if *self.catalog.show_background() {
            animals_block = animals_block.style(Style::default().bg(Color::Blue));
        }
        let animals = List::new(items)
            .block(animals_block)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        frame.render_stateful_widget(animals, chunks[1], &mut list_state);

        let fact = Paragraph::new(self.fact.as_deref().unwrap_or(""))
            .style(Style::default().fg(Color::Green))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Fun fact"));
        frame.render_widget(fact, chunks[2]);

        let help = Paragraph::new("↑↓: Navigate | Enter: Show fact | Esc: Menu | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.show_fact(),
            KeyCode::Esc => return ScreenTransition::GoToMenu,
            KeyCode::Char('q') | KeyCode::Char('Q') => return ScreenTransition::Quit,
            _ => {}
        }
        ScreenTransition::Stay
    }
}
