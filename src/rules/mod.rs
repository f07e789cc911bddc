//! Turn rules layered on top of the comparators
//!
//! - [`chain`]: each guess must start with the previous guess's last letter
//! - [`backwards`]: guesses are typed in reverse and judged by a configurable win rule

pub mod backwards;
pub mod chain;

pub use backwards::{BackwardsWin, entered_form, is_backwards_win};
pub use chain::{ChainState, is_valid_chain_start};

use thiserror::Error;

/// A guess broke a mode rule; the turn is not consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("Guess must start with \"{}\"", .0.to_ascii_uppercase())]
    WrongStart(char),
}
