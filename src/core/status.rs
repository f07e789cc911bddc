//! Per-letter feedback status
//!
//! Variants are declared worst to best so the derived ordering is the
//! ranking used for keyboard hints: `Correct > Present > OtherWord > Absent`.

use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    /// Not in the target (nor in the crossing word, for crosswordle)
    Absent,
    /// Not in the target, but somewhere in the crossing word
    OtherWord,
    /// In the target at a different position
    Present,
    /// In the target at this position
    Correct,
}

impl LetterStatus {
    /// All statuses, worst first
    pub const ALL: [Self; 4] = [Self::Absent, Self::OtherWord, Self::Present, Self::Correct];

    /// Share-text square for this status
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::OtherWord => '🟧',
            Self::Absent => '⬜',
        }
    }

    /// Single ASCII symbol: `G`reen, `Y`ellow, `O`range or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::OtherWord => 'O',
            Self::Absent => '-',
        }
    }

    /// Parse a symbol or emoji square
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - 'O'/'o'/🟧 for other word
    /// - '-'/'_'/⬜ for absent
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'O' | 'o' | '🟧' => Some(Self::OtherWord),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    /// True for any status other than `Absent`
    #[must_use]
    pub const fn is_hit(self) -> bool {
        !matches!(self, Self::Absent)
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::OtherWord => "other word",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_is_total() {
        assert!(LetterStatus::Correct > LetterStatus::Present);
        assert!(LetterStatus::Present > LetterStatus::OtherWord);
        assert!(LetterStatus::OtherWord > LetterStatus::Absent);
        assert_eq!(
            LetterStatus::Present.max(LetterStatus::OtherWord),
            LetterStatus::Present
        );
    }

    #[test]
    fn symbols_round_trip() {
        for status in LetterStatus::ALL {
            assert_eq!(LetterStatus::from_symbol(status.symbol()), Some(status));
            assert_eq!(LetterStatus::from_symbol(status.to_emoji()), Some(status));
        }
        assert_eq!(LetterStatus::from_symbol('x'), None);
    }
}
