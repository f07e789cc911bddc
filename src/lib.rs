//! Wordle Variants
//!
//! Scoring engine and session logic for Wordle variants: classic, speed,
//! hard, chain, backwards, double, crosswordle and waffle.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_variants::core::{GuessResult, Word};
//! use wordle_variants::session::{GameMode, GameStatus, Session};
//! use wordle_variants::wordlists::WordBank;
//!
//! // Score a guess directly
//! let guess = Word::new("trace").unwrap();
//! let target = Word::new("react").unwrap();
//! let result = GuessResult::calculate(&guess, &target).unwrap();
//! assert_eq!(result.to_symbols(), "YYGGY");
//!
//! // Or play a session against the embedded dictionary
//! let bank = WordBank::embedded();
//! let dictionary = bank.dictionary();
//! let mut session = Session::new(GameMode::Classic.config(), target).unwrap();
//! session.submit("react", &dictionary).unwrap();
//! assert_eq!(session.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Keyboard hint aggregation
pub mod keyboard;

// Chain and backwards rules
pub mod rules;

// Waffle grid, generator and game
pub mod waffle;

// Game sessions and dictionaries
pub mod session;

// Word lists and puzzles
pub mod wordlists;

// Daily rotation
pub mod daily;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
