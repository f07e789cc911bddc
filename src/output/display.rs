//! Display functions for game boards and command results

use super::formatters::{create_progress_bar, empty_row, guess_row, keyboard_rows, waffle_rows};
use crate::commands::{CheckReport, DailyReport, ScoreResult, StressReport};
use crate::core::{LetterStatus, Word};
use crate::keyboard::KeyboardState;
use crate::session::{CrosswordleSession, DoubleSession, GameStatus, ScoredGuess, Session};
use crate::waffle::{GeneratedWaffle, WaffleGame, WaffleStatus};
use colored::Colorize;
use std::time::Instant;

/// Boxed title banner
pub fn print_banner(title: &str) {
    let width = 62;
    println!("\n╔{}╗", "═".repeat(width));
    println!("║{title:^width$}║");
    println!("╚{}╝\n", "═".repeat(width));
}

fn print_keyboard(keyboard: &KeyboardState) {
    println!();
    for row in keyboard_rows(keyboard) {
        println!("  {row}");
    }
    println!();
}

fn board_row(guess: Option<&ScoredGuess>, length: usize) -> String {
    guess.map_or_else(
        || empty_row(length),
        |scored| guess_row(&scored.word, &scored.result),
    )
}

/// Print a single-word board with its keyboard and clock
pub fn print_session(session: &Session) {
    let config = session.config();
    println!("{}", "─".repeat(60).cyan());

    for i in 0..config.max_attempts {
        println!("  {}", board_row(session.guesses().get(i), config.word_length));
    }
    print_keyboard(session.keyboard());

    if let Some(timer) = session.timer().filter(|t| t.started_at().is_some()) {
        let remaining = timer.remaining(Instant::now());
        let bar = create_progress_bar(
            remaining.as_secs_f64(),
            timer.limit().as_secs_f64(),
            30,
        );
        println!("  ⏱  [{}] {}s", bar.yellow(), remaining.as_secs());
    }
}

/// Print both double-mode boards side by side with the merged keyboard
pub fn print_double(session: &DoubleSession) {
    let [first, second] = session.boards();
    let length = session.word_length();
    println!("{}", "─".repeat(60).cyan());

    for i in 0..first.config().max_attempts {
        println!(
            "  {}    {}",
            board_row(first.guesses().get(i), length),
            board_row(second.guesses().get(i), length)
        );
    }
    print_keyboard(&session.keyboard());
}

/// Print every crosswordle round and the shared keyboard
pub fn print_crosswordle(session: &CrosswordleSession) {
    let puzzle = session.puzzle();
    println!("{}", "─".repeat(60).cyan());
    println!(
        "  Crosswordle #{}  {}",
        puzzle.id,
        format!("Hint: {}", puzzle.relation).bright_black()
    );
    println!("  Horizontal        Vertical");

    for round in session.rounds() {
        println!(
            "  {}   {}",
            guess_row(&round.horizontal.word, &round.horizontal.result),
            guess_row(&round.vertical.word, &round.vertical.result)
        );
    }
    for _ in 0..session.rounds_left() {
        println!(
            "  {}   {}",
            empty_row(puzzle.horizontal.len()),
            empty_row(puzzle.vertical.len())
        );
    }
    print_keyboard(session.keyboard());
}

/// Print the waffle grid and the swaps left
pub fn print_waffle(game: &WaffleGame) {
    println!("{}", "─".repeat(60).cyan());
    for row in waffle_rows(game.grid(), game.solution(), game.selected()) {
        println!("  {row}");
    }
    println!(
        "\n  Swaps left: {}\n",
        game.swaps_left().to_string().bright_yellow().bold()
    );
}

/// Print a generated waffle's solution and words
pub fn print_waffle_solution(waffle: &GeneratedWaffle) {
    if let Some(seed) = waffle.seed {
        println!("Seed: {seed}");
    }
    for row in waffle_rows(&waffle.solution, &waffle.solution, None) {
        println!("  {row}");
    }
    let words = |list: &[Word]| {
        list.iter()
            .map(|w| w.text().to_uppercase())
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("\n  Across: {}", words(&waffle.horizontal));
    println!("  Down:   {}\n", words(&waffle.vertical));
}

/// Celebrate a win or reveal the answer
pub fn print_outcome(status: GameStatus, answer: &str) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match status {
        GameStatus::Won => println!(
            "  {}  {}",
            "🎉 Solved!".bright_green().bold(),
            answer.bright_white().bold()
        ),
        GameStatus::Lost => println!(
            "  {}  {}",
            "❌ Out of luck.".red().bold(),
            answer.bright_white().bold()
        ),
        GameStatus::Playing => {}
    }
    println!("{}\n", "═".repeat(60).bright_cyan());
}

/// Waffle result, once the game has ended
pub fn print_waffle_outcome(status: WaffleStatus, swaps_left: u32) {
    let game_status = match status {
        WaffleStatus::Solved => GameStatus::Won,
        WaffleStatus::OutOfSwaps => GameStatus::Lost,
        WaffleStatus::Unsolved => return,
    };
    print_outcome(game_status, &format!("{swaps_left} swaps left"));
}

/// Print the feedback for a scored guess
pub fn print_score_result(scored: &ScoreResult) {
    println!(
        "\n  {}  {}",
        guess_row(&scored.guess, &scored.result),
        scored.result.to_emoji()
    );
    println!("  Symbols: {}", scored.result.to_symbols().bright_yellow());
    match &scored.other {
        Some(other) => println!(
            "  Target:  {} (crossing {})",
            scored.target.text().to_uppercase(),
            other.text().to_uppercase()
        ),
        None => println!("  Target:  {}", scored.target.text().to_uppercase()),
    }

    let counts: Vec<String> = LetterStatus::ALL
        .iter()
        .rev()
        .filter(|&&status| scored.result.count(status) > 0)
        .map(|&status| format!("{} {status}", scored.result.count(status)))
        .collect();
    println!("  {}\n", counts.join(", "));
}

/// Print the daily picker
pub fn print_daily_report(report: &DailyReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "DAILY PUZZLES:".bright_cyan().bold(),
        report.mode.name().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!("\n  {} puzzles in rotation\n", report.total);

    for entry in &report.entries {
        let mark = if entry.completed { "✅" } else { "  " };
        let line = format!("{mark} {}", entry.puzzle);
        if entry.puzzle == report.current {
            println!("  {}", line.bright_green().bold());
        } else {
            println!("  {line}");
        }
    }
    println!(
        "\n  Play it with: play --mode {} --puzzle {}\n",
        report.mode, report.current.number
    );
}

/// Print the puzzle check results
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for check in &report.checks {
        match &check.outcome {
            Ok(common) => {
                let first = common
                    .first()
                    .map_or_else(String::new, |c| format!(" - first common letter {c}"));
                println!(
                    "  {} {:<12} #{:<3} {}{}",
                    "✓".green(),
                    check.mode.name(),
                    check.id,
                    check.label,
                    first.bright_black()
                );
            }
            Err(e) => println!(
                "  {} {:<12} #{:<3} {}",
                "✗".red(),
                check.mode.name(),
                check.id,
                e.to_string().red()
            ),
        }
    }

    let summary = format!("{} of {} passed", report.passed(), report.checks.len());
    if report.is_clean() {
        println!("\n  {}\n", summary.green().bold());
    } else {
        println!("\n  {}\n", summary.yellow().bold());
    }
}

/// Print the result of a stress run
pub fn print_stress_report(report: &StressReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WAFFLE STRESS RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Waffles generated: {}", report.requested);
    println!(
        "   Passed:            {}",
        report.passed().to_string().green().bold()
    );
    println!("   Time taken:        {:.2}s", report.duration.as_secs_f64());
    println!("   Waffles/second:    {:.1}", report.waffles_per_second);

    if !report.failures.is_empty() {
        println!("\n❌ {}", "Failures:".red().bold());
        for failure in report.failures.iter().take(20) {
            println!("   seed {:<20} {}", failure.seed, failure.reason);
        }
        if report.failures.len() > 20 {
            println!("   ... and {} more", report.failures.len() - 20);
        }
    }
    println!();
}
