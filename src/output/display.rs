//! Display functions for puzzles and command results

use super::formatters::{change_marker, create_progress_bar, par_line, rating_color, row_cells};
use crate::commands::{ListResult, ReplayResult};
use crate::display::{DisplayInstruction, DisplayType};
use crate::game::PuzzleState;
use crate::ladders::Ladder;
use colored::{ColoredString, Colorize};

/// Print one line per row, with change markers and the par line
///
/// The target stays purple while some row is still active.
pub fn print_instructions(rows: &[DisplayInstruction]) {
    let in_play = rows.iter().any(|r| r.display_type.is_active());
    let width = rows
        .iter()
        .map(|r| r.word.len() * 2 + 1)
        .max()
        .unwrap_or(0);

    for row in rows {
        let cells = row_cells(row);
        let label = format!("{:>12}", row.display_type.label()).bright_black();
        println!("{label}  {}", paint(row, &cells, in_play));

        if let Some(marker) = change_marker(row) {
            println!("{:>12}  {}", "", marker.bright_yellow());
        }
        if row.show_par_line {
            println!("{:>12}  {}", "par", par_line(width).bright_black());
        }
    }
}

fn paint(row: &DisplayInstruction, cells: &str, in_play: bool) -> ColoredString {
    let text = if in_play && row.display_type == DisplayType::Target {
        cells.magenta()
    } else {
        rating_color(row.move_rating).map_or_else(|| cells.normal(), |color| cells.color(color))
    };
    if row.display_type.is_active() {
        text.bold().underline()
    } else {
        text
    }
}

/// Print penalties and, once the game ends, the result
pub fn print_game_status(state: &PuzzleState) {
    let max = state.config().max_penalties;
    let penalties = state.num_penalties();
    println!(
        "\nPenalties: {} {penalties}/{max}",
        create_progress_bar(penalties, max, max.max(1) * 2).red()
    );

    if !state.is_over() {
        return;
    }
    if state.is_winner() {
        let over_par = state.steps_over_par();
        let summary = match over_par {
            0 => "at par".to_string(),
            n if n < 0 => format!("{} under par", -n),
            n => format!("{n} over par"),
        };
        println!("{}", format!("✅ Solved, {summary}!").green().bold());
    } else {
        println!(
            "{}",
            format!("❌ Too many penalties. The target was {}", state.target())
                .red()
                .bold()
        );
    }
}

/// Print every step of a replay
pub fn print_replay_result(result: &ReplayResult) {
    let state = &result.state;
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle: {} → {}",
        state.start().to_string().bright_yellow().bold(),
        state.target().to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    print_instructions(&result.initial);

    for (i, step) in result.steps.iter().enumerate() {
        let outcome = match &step.outcome {
            Ok(rating) => rating.label().green(),
            Err(err) => err.to_string().red(),
        };
        println!("\nMove {}: {} {outcome}", i + 1, step.action.to_string().bold());
        if step.outcome.is_ok() {
            print_instructions(&step.rows);
        }
    }

    print_game_status(state);
}

/// Print a catalogue summary followed by its ladders
pub fn print_ladders(summary: &ListResult, ladders: &[Ladder]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LADDERS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\n📊 {} ladders, {} words, {}-{} steps\n",
        summary.ladders, summary.words, summary.shortest, summary.longest
    );

    for (i, ladder) in ladders.iter().enumerate() {
        println!(
            "{:3}. {} → {} ({} steps)",
            i + 1,
            ladder.start().to_string().bright_yellow().bold(),
            ladder.target().to_string().bright_yellow().bold(),
            ladder.steps()
        );
        println!("     {}", ladder.to_string().bright_black());
    }
}
