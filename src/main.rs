//! Wordle Variants - CLI
//!
//! Play classic, speed, hard, chain, backwards, double, crosswordle and
//! waffle games in the terminal, and check the embedded puzzle data.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use wordle_variants::{
    commands::{
        PlayOptions, check_puzzles, daily_report, new_waffle, run_play, run_stress, run_waffle,
        score_guess,
    },
    daily::InMemoryHistory,
    output::{
        print_banner, print_check_report, print_daily_report, print_score_result,
        print_stress_report, print_waffle_outcome, print_waffle_solution,
    },
    rules::BackwardsWin,
    session::{CachedDictionary, GameMode, WordSetDictionary},
    waffle::WaffleGame,
    wordlists::{GridPuzzle, Puzzle, WordBank, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_variants",
    about = "Wordle variants in the terminal: classic, speed, hard, chain, backwards, double, crosswordle and waffle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for random puzzles (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Extra dictionary words, one per line
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (default: classic)
    Play {
        /// Mode: classic, speed, hard, chain, backwards, double, crosswordle, waffle
        #[arg(short, long, default_value = "classic")]
        mode: GameMode,

        /// Puzzle number; random when omitted
        #[arg(short, long)]
        puzzle: Option<usize>,

        /// Backwards win rule: reversed-target (default) or any-valid-word
        #[arg(long, default_value = "reversed-target")]
        backwards_win: BackwardsWin,
    },

    /// Score a guess against a target
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,

        /// Crossing word for crosswordle scoring
        #[arg(short, long)]
        other: Option<String>,
    },

    /// Generate a waffle and play it
    Waffle {
        /// Print the solution instead of playing
        #[arg(long)]
        solution: bool,

        /// Puzzle number; uses --seed or a random seed when omitted
        #[arg(short, long)]
        puzzle: Option<usize>,
    },

    /// List today's puzzle and the past week
    Daily {
        /// Mode to list puzzles for
        #[arg(short, long, default_value = "classic")]
        mode: GameMode,

        /// Date to treat as today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Check the embedded double and crosswordle puzzles
    CheckPuzzles,

    /// Generate many waffles in parallel and verify them
    Stress {
        /// Number of waffles to generate
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

/// Embedded dictionary plus words from `extra`, if given
fn load_dictionary(bank: &WordBank, extra: Option<&Path>) -> Result<WordSetDictionary> {
    let mut dictionary = bank.dictionary();
    if let Some(path) = extra {
        let words = load_from_file(path)
            .with_context(|| format!("Failed to read dictionary {}", path.display()))?;
        debug!("loaded {} extra words from {}", words.len(), path.display());
        dictionary.extend(&words);
    }
    Ok(dictionary)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(rand::random);
    debug!("seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let bank = WordBank::embedded();

    // Default to a classic game if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        mode: GameMode::Classic,
        puzzle: None,
        backwards_win: BackwardsWin::default(),
    });

    match command {
        Commands::Play {
            mode,
            puzzle,
            backwards_win,
        } => {
            let dictionary =
                CachedDictionary::new(load_dictionary(&bank, cli.dictionary.as_deref())?);
            let options = PlayOptions {
                mode,
                puzzle,
                backwards_rule: backwards_win,
            };
            run_play(&bank, &dictionary, &options, &mut rng)
        }
        Commands::Score {
            guess,
            target,
            other,
        } => {
            let scored = score_guess(&guess, &target, other.as_deref())?;
            print_score_result(&scored);
            Ok(())
        }
        Commands::Waffle { solution, puzzle } => run_waffle_command(&bank, seed, puzzle, solution),
        Commands::Daily { mode, date } => {
            let today = date.unwrap_or_else(|| Local::now().date_naive());
            let history = InMemoryHistory::new();
            print_daily_report(&daily_report(&bank, mode, today, &history));
            Ok(())
        }
        Commands::CheckPuzzles => {
            let report = check_puzzles();
            print_check_report(&report);
            Ok(())
        }
        Commands::Stress { count } => {
            println!(
                "🎯 Generating {count} waffles from {} words (seeds {seed}..)",
                bank.waffle_pool().len()
            );
            let report = run_stress(bank.waffle_pool(), count, seed);
            print_stress_report(&report);
            Ok(())
        }
    }
}

fn run_waffle_command(
    bank: &WordBank,
    seed: u64,
    puzzle: Option<usize>,
    show_solution: bool,
) -> Result<()> {
    let grid = match puzzle.and_then(|n| bank.puzzle(GameMode::Waffle, n)) {
        Some(Puzzle::Grid(grid)) => grid,
        _ => GridPuzzle { seed },
    };
    let waffle = new_waffle(bank, grid)?;

    if show_solution {
        print_waffle_solution(&waffle);
        return Ok(());
    }

    print_banner("Wordle Variants - WAFFLE");
    let mut game = WaffleGame::new(waffle);
    let status = run_waffle(&mut game)?;
    print_waffle_outcome(status, game.swaps_left());
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}
