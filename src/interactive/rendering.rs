//! TUI rendering with ratatui
//!
//! Draws the ladder rows built for the current state, plus messages and status.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{HOLE_CHAR, MoveRating};
use crate::display::{DisplayInstruction, DisplayType};
use crate::output::formatters::HIDDEN_CHAR;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Ladder and side panel
            Constraint::Length(3), // Input
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_ladder(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪜 WORD CHAIN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_ladder(f: &mut Frame, app: &App, area: Rect) {
    let in_play = !app.game.state().is_over();
    let mut lines = Vec::with_capacity(app.rows.len() * 2);
    for row in &app.rows {
        lines.push(row_line(row, in_play));
        if row.show_par_line {
            lines.push(Line::from(Span::styled(
                "─".repeat(row.word.len() * 4 + 1),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let ladder = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Ladder ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(ladder, area);
}

/// One cell per slot; the highlighted cell is underlined
fn row_line(row: &DisplayInstruction, in_play: bool) -> Line<'static> {
    let style = row_style(row, in_play);
    let cells = (0..row.word.len()).map(|slot| {
        let letter = match row.word.slot(slot) {
            _ if row.display_type == DisplayType::Future => HIDDEN_CHAR,
            Some(letter) => letter,
            None => HOLE_CHAR,
        };
        let cell_style = if slot + 1 == row.change_position {
            style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
        } else {
            style
        };
        Span::styled(format!(" {letter} "), cell_style)
    });

    let mut spans: Vec<Span> = Vec::with_capacity(row.word.len() * 2);
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(cell);
    }
    Line::from(spans)
}

/// Target is purple until the game ends, then takes its rating colour
fn row_style(row: &DisplayInstruction, in_play: bool) -> Style {
    let background = match row.display_type {
        DisplayType::Future | DisplayType::WordAfterAdd | DisplayType::WordAfterChange => None,
        DisplayType::Target if in_play => Some(Color::Magenta),
        _ => rating_color(row.move_rating),
    };

    let style = background.map_or_else(
        || Style::default().fg(Color::White),
        |bg| Style::default().fg(Color::Black).bg(bg),
    );
    if row.display_type.is_active() {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

const fn rating_color(rating: MoveRating) -> Option<Color> {
    match rating {
        MoveRating::NoRating => None,
        MoveRating::GoodMove => Some(Color::Green),
        MoveRating::WrongMove => Some(Color::Yellow),
        MoveRating::DodoMove => Some(Color::Red),
        MoveRating::GeniusMove => Some(Color::Cyan),
        MoveRating::ScrabbleMove => Some(Color::Blue),
        MoveRating::ShownMove => Some(Color::Gray),
    }
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Penalties
            Constraint::Length(8), // Help
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_penalties(f, app, chunks[0]);
    render_help(f, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_penalties(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();
    let penalties = state.num_penalties();
    let max = state.config().max_penalties.max(1);
    let pct = u16::try_from(penalties * 100 / max).unwrap_or(100).min(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Penalties ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Red))
        .percent(pct)
        .label(format!("{penalties}/{max}"));

    f.render_widget(gauge, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = vec![
        Line::from("+N   open a space before slot N (0 = front)"),
        Line::from("-N   delete letter N"),
        Line::from("N=X  put letter X at position N"),
        Line::from("?    show next word (TAB)"),
        Line::from("!    show every word"),
    ];
    let paragraph = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .title(" Moves ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | 'n' new game, 'u' undo, 'q' quit ",
            "",
            Color::Green,
        ),
        InputMode::Playing => (
            " Enter a move | Enter to play ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let state = app.game.state();
    let puzzle = Paragraph::new(format!("{} → {}", state.start(), state.target()))
        .alignment(Alignment::Center);
    f.render_widget(puzzle, chunks[0]);

    let stats = Paragraph::new(format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game | u: Undo",
        InputMode::Playing => "Esc: Quit | ^N: New Game | ^U: Undo | TAB: Hint",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
