//! Word Chain - CLI
//!
//! Word-ladder puzzle with a TUI, a scripted replay mode, and a catalogue listing.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordchain::{
    commands::{ReplayConfig, list_ladders, replay_actions},
    core::Word,
    game::{Action, DEFAULT_MAX_PENALTIES, GameConfig, KnownLadders},
    ladders::{LADDERS, Ladder, loader::ladders_from_slice},
    logging,
    output::{print_ladders, print_replay_result},
};

#[derive(Parser)]
#[command(
    name = "wordchain",
    about = "Word-ladder puzzle: change one letter at a time from start to target",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Ladder catalogue file (default: the built-in ladders)
    #[arg(short, long, global = true)]
    ladders: Option<String>,

    /// Penalties (wrong, dodo, and shown moves) that end the game
    #[arg(
        short = 'p',
        long,
        global = true,
        default_value_t = DEFAULT_MAX_PENALTIES,
        value_parser = parse_max_penalties
    )]
    max_penalties: usize,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Start word (default: a random ladder)
        #[arg(short, long, requires = "target")]
        start: Option<String>,

        /// Target word
        #[arg(short, long, requires = "start")]
        target: Option<String>,
    },

    /// Play a list of moves and print the ladder after each one
    ///
    /// Moves: +N opens a space before slot N (0 = front), -N deletes letter N,
    /// N=X puts letter X at position N, ? shows the next word, ! shows them all.
    Replay {
        /// Start word
        #[arg(short, long)]
        start: String,

        /// Target word
        #[arg(short, long)]
        target: String,

        /// Moves to play, in order
        #[arg(allow_hyphen_values = true)]
        actions: Vec<Action>,
    },

    /// List the known ladders
    List,
}

fn parse_max_penalties(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Load the ladder catalogue from the --ladders flag
fn load_ladders(path: Option<&str>) -> Result<Vec<Ladder>> {
    use wordchain::ladders::loader::load_from_file;

    match path {
        Some(path) => load_from_file(path),
        None => Ok(ladders_from_slice(LADDERS)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let finder = KnownLadders::new(load_ladders(cli.ladders.as_deref())?);
    log::debug!(
        "{} ladders, {} words",
        finder.ladders().len(),
        finder.word_count()
    );
    let config = GameConfig::new(cli.max_penalties);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        start: None,
        target: None,
    });

    match command {
        Commands::Play { start, target } => run_play_command(&finder, config, start, target),
        Commands::Replay {
            start,
            target,
            actions,
        } => run_replay_command(&finder, config, start, target, actions),
        Commands::List => {
            let summary = list_ladders(&finder);
            print_ladders(&summary, finder.ladders());
            Ok(())
        }
    }
}

fn run_play_command(
    finder: &KnownLadders,
    config: GameConfig,
    start: Option<String>,
    target: Option<String>,
) -> Result<()> {
    use wordchain::interactive::{App, run_tui};

    let app = match (start, target) {
        (Some(start), Some(target)) => {
            let start = Word::new(&start).context("start word")?;
            let target = Word::new(&target).context("target word")?;
            App::new(finder, config, start, target)?
        }
        _ => App::random(finder, config)?,
    };
    run_tui(app)
}

fn run_replay_command(
    finder: &KnownLadders,
    config: GameConfig,
    start: String,
    target: String,
    actions: Vec<Action>,
) -> Result<()> {
    let mut replay = ReplayConfig::new(start, target, actions);
    replay.game = config;
    let result = replay_actions(replay, finder).map_err(|e| anyhow::anyhow!(e))?;

    print_replay_result(&result);
    Ok(())
}
