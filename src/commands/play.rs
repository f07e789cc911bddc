//! Play command
//!
//! Text-based game loop for every mode.

use super::input::{confirm, get_user_input, is_quit};
use super::waffle::{new_waffle, run_waffle};
use crate::output::{
    print_banner, print_crosswordle, print_double, print_outcome, print_session,
    print_waffle_outcome,
};
use crate::rules::BackwardsWin;
use crate::session::{
    CrosswordleSession, Dictionary, DoubleSession, GameConfig, GameMode, GuessError, Session,
};
use crate::waffle::{WaffleGame, WaffleStatus};
use crate::wordlists::{Puzzle, WordBank};
use anyhow::{Result, anyhow, bail};
use chrono::Local;
use log::debug;
use rand::Rng;

/// Options for an interactive game
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    pub mode: GameMode,
    /// Puzzle number for the first game; random when absent
    pub puzzle: Option<usize>,
    pub backwards_rule: BackwardsWin,
}

impl PlayOptions {
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            puzzle: None,
            backwards_rule: BackwardsWin::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.mode.config().with_backwards_rule(self.backwards_rule)
    }
}

/// A game of any mode, ready to play
#[derive(Debug, Clone)]
pub enum Game {
    Single(Session),
    Double(DoubleSession),
    Crosswordle(CrosswordleSession),
    Waffle(WaffleGame),
}

/// Pick puzzle `number`, or a random one
///
/// # Errors
///
/// Returns an error if the mode has no puzzles.
pub fn resolve_puzzle<R: Rng + ?Sized>(
    bank: &WordBank,
    mode: GameMode,
    number: Option<usize>,
    rng: &mut R,
) -> Result<Puzzle> {
    let puzzle = match number {
        Some(number) => bank.puzzle(mode, number),
        None => bank.random_puzzle(mode, rng),
    };
    puzzle.ok_or_else(|| anyhow!("No puzzles available for {mode} mode"))
}

/// Set up the session for a resolved puzzle
///
/// # Errors
///
/// Returns an error if the puzzle does not belong to the configured mode,
/// its words do not fit the mode, or a waffle cannot be generated.
pub fn start_game(bank: &WordBank, config: GameConfig, puzzle: Puzzle) -> Result<Game> {
    let game = match (config.mode, puzzle) {
        (GameMode::Double, Puzzle::DualWord(pair)) => {
            Game::Double(DoubleSession::new(config, pair.horizontal, pair.vertical)?)
        }
        (GameMode::Crosswordle, Puzzle::DualWord(definition)) => {
            Game::Crosswordle(CrosswordleSession::new(definition))
        }
        (GameMode::Waffle, Puzzle::Grid(grid)) => {
            Game::Waffle(WaffleGame::new(new_waffle(bank, grid)?))
        }
        (
            GameMode::Classic
            | GameMode::Speed
            | GameMode::Hard
            | GameMode::Chain
            | GameMode::Backwards,
            Puzzle::SingleWord(solution),
        ) => Game::Single(Session::new(config, solution)?),
        (mode, puzzle) => bail!("{mode} mode cannot play {puzzle:?}"),
    };
    Ok(game)
}

/// Run the interactive game loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a
/// puzzle cannot be set up.
pub fn run_play<D: Dictionary + ?Sized, R: Rng + ?Sized>(
    bank: &WordBank,
    dictionary: &D,
    options: &PlayOptions,
    rng: &mut R,
) -> Result<()> {
    print_banner(&format!("Wordle Variants - {}", options.mode.name().to_uppercase()));
    print_rules(options);

    let mut number = options.puzzle;
    loop {
        let puzzle = resolve_puzzle(bank, options.mode, number.take(), rng)?;
        debug!("starting {} with {puzzle:?}", options.mode);

        let finished = match start_game(bank, options.config(), puzzle)? {
            Game::Single(mut session) => play_single(&mut session, dictionary)?,
            Game::Double(mut session) => play_double(&mut session, dictionary)?,
            Game::Crosswordle(mut session) => play_crosswordle(&mut session, dictionary)?,
            Game::Waffle(mut game) => {
                let status = run_waffle(&mut game)?;
                print_waffle_outcome(status, game.swaps_left());
                status != WaffleStatus::Unsolved
            }
        };

        if !finished || !confirm("Play again? (yes/no)")? {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
        println!("\n🔄 New game started!\n");
    }
}

fn print_rules(options: &PlayOptions) {
    let config = options.config();
    match config.mode {
        GameMode::Waffle => {}
        GameMode::Crosswordle => {
            println!("Guess both words each round: type the horizontal word, then the vertical one.");
            println!("🟧 marks a letter that belongs to the other word.\n");
        }
        mode => {
            println!(
                "Guess the {}-letter word in {} tries.",
                config.word_length, config.max_attempts
            );
            match mode {
                GameMode::Speed => println!("The clock starts with your first guess."),
                GameMode::Chain => {
                    println!("Each guess must start with the last letter of the one before.");
                }
                GameMode::Backwards => {
                    println!("Type your guesses backwards: they are reversed before scoring.");
                }
                GameMode::Double => println!("Every guess is played on both boards."),
                _ => {}
            }
            println!();
        }
    }
    println!("Commands: 'quit' to leave the game\n");
}

fn report_error(err: &GuessError) {
    println!("❌ {err}\n");
}

fn play_single<D: Dictionary + ?Sized>(session: &mut Session, dictionary: &D) -> Result<bool> {
    loop {
        print_session(session);
        if session.is_over() {
            print_outcome(session.status(), &session.solution().text().to_uppercase());
            return Ok(true);
        }

        let prompt = match session.required_letter() {
            Some(letter) => format!("Guess (starts with {})", letter.to_ascii_uppercase()),
            None => "Guess".to_string(),
        };
        let Some(input) = get_user_input(&prompt)? else {
            return Ok(false);
        };
        if is_quit(&input) {
            return Ok(false);
        }

        match session.submit(&input, dictionary) {
            Ok(_) | Err(GuessError::GameOver) => {}
            Err(e) => report_error(&e),
        }
    }
}

fn play_double<D: Dictionary + ?Sized>(
    session: &mut DoubleSession,
    dictionary: &D,
) -> Result<bool> {
    loop {
        print_double(session);
        if session.is_over() {
            let [first, second] = session.boards();
            let answers = format!(
                "{} and {}",
                first.solution().text().to_uppercase(),
                second.solution().text().to_uppercase()
            );
            print_outcome(session.status(), &answers);
            return Ok(true);
        }

        let Some(input) = get_user_input("Guess")? else {
            return Ok(false);
        };
        if is_quit(&input) {
            return Ok(false);
        }

        if let Err(e) = session.submit(&input, dictionary) {
            report_error(&e);
        }
    }
}

fn play_crosswordle<D: Dictionary + ?Sized>(
    session: &mut CrosswordleSession,
    dictionary: &D,
) -> Result<bool> {
    loop {
        print_crosswordle(session);
        if session.is_over() {
            let puzzle = session.puzzle();
            let answers = format!(
                "{} and {}",
                puzzle.horizontal.text().to_uppercase(),
                puzzle.vertical.text().to_uppercase()
            );
            print_outcome(session.status(), &answers);
            println!("{}\n", session.share_text(Local::now().date_naive()));
            return Ok(true);
        }

        let Some(horizontal) = get_user_input("Horizontal")? else {
            return Ok(false);
        };
        if is_quit(&horizontal) {
            return Ok(false);
        }
        let Some(vertical) = get_user_input("Vertical")? else {
            return Ok(false);
        };
        if is_quit(&vertical) {
            return Ok(false);
        }

        if let Err(e) = session.submit(&horizontal, &vertical, dictionary) {
            report_error(&e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_mode_starts_from_its_first_puzzle() {
        let bank = WordBank::embedded();
        let mut rng = StdRng::seed_from_u64(0);

        for mode in GameMode::ALL {
            let puzzle = resolve_puzzle(&bank, mode, Some(1), &mut rng).unwrap();
            let game = start_game(&bank, mode.config(), puzzle).unwrap();
            let matches_mode = match game {
                Game::Single(session) => session.config().mode == mode,
                Game::Double(_) => mode == GameMode::Double,
                Game::Crosswordle(_) => mode == GameMode::Crosswordle,
                Game::Waffle(_) => mode == GameMode::Waffle,
            };
            assert!(matches_mode, "{mode}");
        }
    }

    #[test]
    fn random_puzzles_resolve() {
        let bank = WordBank::embedded();
        let mut rng = StdRng::seed_from_u64(42);
        for mode in GameMode::ALL {
            assert!(resolve_puzzle(&bank, mode, None, &mut rng).is_ok());
        }
    }

    #[test]
    fn puzzle_from_another_mode_is_rejected() {
        let bank = WordBank::embedded();
        let classic = bank.puzzle(GameMode::Classic, 1).unwrap();
        assert!(start_game(&bank, GameMode::Waffle.config(), classic.clone()).is_err());
        assert!(start_game(&bank, GameMode::Hard.config(), classic).is_err());
    }

    #[test]
    fn backwards_rule_only_applies_to_backwards_mode() {
        let options = PlayOptions {
            backwards_rule: BackwardsWin::AnyValidWord,
            ..PlayOptions::new(GameMode::Backwards)
        };
        assert_eq!(options.config().backwards, Some(BackwardsWin::AnyValidWord));

        let classic = PlayOptions {
            backwards_rule: BackwardsWin::AnyValidWord,
            ..PlayOptions::new(GameMode::Classic)
        };
        assert_eq!(classic.config().backwards, None);
    }
}
