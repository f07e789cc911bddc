//! Backwards entry
//!
//! In backwards mode the player types the answer in reverse. What counts as
//! a win is a choice: [`BackwardsWin::ReversedTarget`] requires the reversed
//! entry to be the answer, while [`BackwardsWin::AnyValidWord`] accepts any
//! dictionary word that got past validation.

use crate::core::Word;
use std::fmt;
use std::str::FromStr;

/// Win rule for backwards mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BackwardsWin {
    /// The typed word read backwards must equal the target
    #[default]
    ReversedTarget,
    /// Any accepted word wins, regardless of the target
    AnyValidWord,
}

impl FromStr for BackwardsWin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reversed-target" | "target" => Ok(Self::ReversedTarget),
            "any-valid-word" | "any" => Ok(Self::AnyValidWord),
            _ => Err(format!("Unknown backwards rule: {s}")),
        }
    }
}

impl fmt::Display for BackwardsWin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReversedTarget => f.write_str("reversed-target"),
            Self::AnyValidWord => f.write_str("any-valid-word"),
        }
    }
}

/// The word the player meant, given what they typed
#[must_use]
pub fn entered_form(typed: &Word) -> Word {
    typed.reversed()
}

/// Decide whether a typed (reversed) guess wins
///
/// # Examples
/// ```
/// use wordle_variants::core::Word;
/// use wordle_variants::rules::{BackwardsWin, is_backwards_win};
///
/// let target = Word::new("smart").unwrap();
/// let typed = Word::new("trams").unwrap();
/// let other = Word::new("crane").unwrap();
///
/// assert!(is_backwards_win(BackwardsWin::ReversedTarget, &typed, &target));
/// assert!(!is_backwards_win(BackwardsWin::ReversedTarget, &other, &target));
/// assert!(is_backwards_win(BackwardsWin::AnyValidWord, &other, &target));
/// ```
#[must_use]
pub fn is_backwards_win(rule: BackwardsWin, typed: &Word, target: &Word) -> bool {
    match rule {
        BackwardsWin::ReversedTarget => entered_form(typed) == *target,
        BackwardsWin::AnyValidWord => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn entered_form_reverses() {
        assert_eq!(entered_form(&word("eman")), word("name"));
    }

    #[test]
    fn typing_the_target_forwards_does_not_win() {
        let target = word("smart");
        assert!(!is_backwards_win(BackwardsWin::ReversedTarget, &target, &target));
    }

    #[test]
    fn palindromes_win_either_way() {
        let target = word("level");
        assert!(is_backwards_win(BackwardsWin::ReversedTarget, &target, &target));
    }

    #[test]
    fn default_rule_is_reversed_target() {
        assert_eq!(BackwardsWin::default(), BackwardsWin::ReversedTarget);
    }

    #[test]
    fn parse_rule_names() {
        assert_eq!("any".parse::<BackwardsWin>(), Ok(BackwardsWin::AnyValidWord));
        assert_eq!(
            BackwardsWin::ReversedTarget.to_string().parse::<BackwardsWin>(),
            Ok(BackwardsWin::ReversedTarget)
        );
        assert!("sideways".parse::<BackwardsWin>().is_err());
    }
}
