//! Game modes and their presets

use crate::rules::BackwardsWin;
use crate::waffle::MAX_SWAPS;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Speed mode clock
pub const SPEED_LIMIT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    Classic,
    Speed,
    Hard,
    Chain,
    Backwards,
    Double,
    Crosswordle,
    Waffle,
}

impl GameMode {
    pub const ALL: [Self; 8] = [
        Self::Classic,
        Self::Speed,
        Self::Hard,
        Self::Chain,
        Self::Backwards,
        Self::Double,
        Self::Crosswordle,
        Self::Waffle,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Speed => "speed",
            Self::Hard => "hard",
            Self::Chain => "chain",
            Self::Backwards => "backwards",
            Self::Double => "double",
            Self::Crosswordle => "crosswordle",
            Self::Waffle => "waffle",
        }
    }

    #[must_use]
    pub fn config(self) -> GameConfig {
        GameConfig::for_mode(self)
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|m| m.name()).collect();
                format!("Unknown mode '{s}'. Use one of: {}", names.join(", "))
            })
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rules a session is played under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    pub word_length: usize,
    /// Guesses per board, or swaps for waffle
    pub max_attempts: usize,
    /// Speed mode clock, started by the first accepted guess
    pub time_limit: Option<Duration>,
    /// Guesses must start with the previous guess's last letter
    pub chain: bool,
    /// Guesses are typed reversed and judged by this rule
    pub backwards: Option<BackwardsWin>,
}

impl GameConfig {
    /// Preset for a mode
    ///
    /// # Examples
    /// ```
    /// use wordle_variants::session::{GameConfig, GameMode};
    ///
    /// let speed = GameConfig::for_mode(GameMode::Speed);
    /// assert_eq!(speed.word_length, 4);
    /// assert!(speed.time_limit.is_some());
    /// ```
    #[must_use]
    pub fn for_mode(mode: GameMode) -> Self {
        let base = Self {
            mode,
            word_length: 5,
            max_attempts: 6,
            time_limit: None,
            chain: false,
            backwards: None,
        };

        match mode {
            GameMode::Classic | GameMode::Crosswordle => base,
            GameMode::Speed => Self {
                word_length: 4,
                time_limit: Some(SPEED_LIMIT),
                ..base
            },
            GameMode::Hard => Self {
                word_length: 6,
                ..base
            },
            GameMode::Chain => Self {
                chain: true,
                ..base
            },
            GameMode::Backwards => Self {
                backwards: Some(BackwardsWin::default()),
                ..base
            },
            GameMode::Double => Self {
                max_attempts: 7,
                ..base
            },
            GameMode::Waffle => Self {
                max_attempts: MAX_SWAPS as usize,
                ..base
            },
        }
    }

    /// Replace the backwards win rule (backwards mode only)
    #[must_use]
    pub fn with_backwards_rule(mut self, rule: BackwardsWin) -> Self {
        if self.backwards.is_some() {
            self.backwards = Some(rule);
        }
        self
    }
}
