//! TUI application state and logic

use crate::core::Word;
use crate::display::DisplayInstruction;
use crate::game::{Action, Game, GameConfig, GameError, KnownLadders, PuzzleState};
use anyhow::{Result, anyhow};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::prelude::IndexedRandom;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub finder: &'a KnownLadders,
    pub config: GameConfig,
    pub game: Game<&'a KnownLadders>,
    /// Rows for the current state, rebuilt after every action
    pub rows: Vec<DisplayInstruction>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub undo_stack: Vec<PuzzleState>,
    /// Whether the current puzzle's result is already in `stats`
    pub recorded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub total_penalties: usize,
}

impl<'a> App<'a> {
    /// App playing the puzzle from `start` to `target`
    ///
    /// # Errors
    /// Returns `GameError::NoSolution` if no known ladder joins the words.
    pub fn new(
        finder: &'a KnownLadders,
        config: GameConfig,
        start: Word,
        target: Word,
    ) -> Result<Self, GameError> {
        let game = Game::new(finder, start, target, config)?;
        let mut app = Self {
            finder,
            config,
            game,
            rows: Vec::new(),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Playing,
            undo_stack: Vec::new(),
            recorded: false,
        };
        app.announce();
        app.refresh_rows();
        Ok(app)
    }

    /// App playing a random known ladder
    ///
    /// # Errors
    /// Returns an error if the catalogue is empty.
    pub fn random(finder: &'a KnownLadders, config: GameConfig) -> Result<Self> {
        let ladder = finder
            .ladders()
            .choose(&mut rand::rng())
            .ok_or_else(|| anyhow!("No ladders to play"))?;
        Ok(Self::new(
            finder,
            config,
            ladder.start().clone(),
            ladder.target().clone(),
        )?)
    }

    pub fn new_game(&mut self) {
        let Some(ladder) = self.finder.ladders().choose(&mut rand::rng()) else {
            self.add_message("No ladders to play", MessageStyle::Error);
            return;
        };
        match Game::new(
            self.finder,
            ladder.start().clone(),
            ladder.target().clone(),
            self.config,
        ) {
            Ok(game) => {
                self.game = game;
                self.undo_stack.clear();
                self.recorded = false;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Playing;
                self.announce();
                self.refresh_rows();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn announce(&mut self) {
        let state = self.game.state();
        let text = format!(
            "{} → {} in {} steps",
            state.start(),
            state.target(),
            state.initial_solution().len() - 1
        );
        self.add_message(&text, MessageStyle::Info);
    }

    /// Parse and apply the action typed so far
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        match input.parse::<Action>() {
            Ok(action) => self.apply(action),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn apply(&mut self, action: Action) {
        let snapshot = self.game.state().clone();
        match self.game.apply(action) {
            Ok(rating) => {
                self.undo_stack.push(snapshot);
                if rating.is_penalty() {
                    self.add_message(&format!("{action}: {rating} move"), MessageStyle::Error);
                } else {
                    self.add_message(&format!("{action}: {rating}"), MessageStyle::Info);
                }
                self.refresh_rows();
                self.check_finished();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn check_finished(&mut self) {
        let state = self.game.state();
        if !state.is_over() {
            return;
        }
        let won = state.is_winner();
        let penalties = state.num_penalties();
        let target = state.target().clone();

        // a puzzle finished again after an undo counts once
        if !self.recorded {
            self.recorded = true;
            self.stats.total_games += 1;
            self.stats.total_penalties += penalties;
            if won {
                self.stats.games_won += 1;
            }
        }
        self.input_mode = InputMode::GameOver;
        if won {
            self.add_message(
                &format!("🎉 Reached {target} with {penalties} penalties!"),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("Too many penalties. The target was {target}"),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn undo_last(&mut self) {
        if let Some(state) = self.undo_stack.pop() {
            self.game = Game::from_state(self.finder, state);
            self.input_mode = InputMode::Playing;
            self.refresh_rows();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    fn refresh_rows(&mut self) {
        match self.game.instructions() {
            Ok(rows) => self.rows = rows,
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    KeyCode::Char('u') => app.undo_last(),
                    _ => {}
                },
                InputMode::Playing => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_game();
                    }
                    KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.undo_last();
                    }
                    KeyCode::Tab => app.apply(Action::ShowNext),
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit_input(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ladders::Ladder;

    fn finder() -> KnownLadders {
        KnownLadders::new(vec![Ladder::parse("corn acorn adorn adore").unwrap()])
    }

    fn app(finder: &KnownLadders) -> App<'_> {
        App::new(
            finder,
            GameConfig::default(),
            Word::new("corn").unwrap(),
            Word::new("adore").unwrap(),
        )
        .unwrap()
    }

    fn type_action(app: &mut App, text: &str) {
        app.input_buffer = text.to_string();
        app.submit_input();
    }

    #[test]
    fn typed_actions_play_the_ladder() {
        let finder = finder();
        let mut app = app(&finder);
        assert_eq!(app.rows.len(), 4);

        for text in ["+0", "1=a", "2=d", "5=e"] {
            type_action(&mut app, text);
        }
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.total_games, 1);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn undo_after_finishing_counts_game_once() {
        let finder = finder();
        let mut app = app(&finder);
        for text in ["+0", "1=a", "2=d", "5=e"] {
            type_action(&mut app, text);
        }
        app.undo_last();
        assert_eq!(app.input_mode, InputMode::Playing);

        type_action(&mut app, "5=e");
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);

        app.new_game();
        assert!(!app.recorded);
    }

    #[test]
    fn bad_input_reports_error() {
        let finder = finder();
        let mut app = app(&finder);
        type_action(&mut app, "zz");
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));

        type_action(&mut app, "1=b");
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
        assert!(app.undo_stack.is_empty());
    }

    #[test]
    fn undo_restores_previous_state() {
        let finder = finder();
        let mut app = app(&finder);
        app.apply(Action::AddSpace(0));
        assert!(app.game.state().has_pending_hole());

        app.undo_last();
        assert!(!app.game.state().has_pending_hole());
        assert_eq!(app.rows.len(), 4);

        app.undo_last();
        assert_eq!(app.messages.last().map(|m| m.text.as_str()), Some("Nothing to undo!"));
    }

    #[test]
    fn messages_are_capped() {
        let finder = finder();
        let mut app = app(&finder);
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "5");
    }

    #[test]
    fn random_app_uses_catalogue() {
        let finder = finder();
        let app = App::random(&finder, GameConfig::default()).unwrap();
        assert_eq!(app.game.state().start(), &Word::new("corn").unwrap());

        let empty = KnownLadders::new(vec![]);
        assert!(App::random(&empty, GameConfig::default()).is_err());
    }
}
