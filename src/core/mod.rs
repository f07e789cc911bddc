//! Core domain types for word games
//!
//! Words, letter-frequency counts, per-letter statuses and the comparators
//! that turn a guess into feedback. Everything here is pure and
//! synchronous.

mod counts;
mod feedback;
mod status;
mod word;

pub use counts::LetterCounts;
pub use feedback::{CompareError, GuessResult};
pub use status::LetterStatus;
pub use word::{MAX_WORD_LENGTH, Word, WordError};
