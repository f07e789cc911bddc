//! Speed mode clock

use std::time::{Duration, Instant};

/// Countdown that starts on the first accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedTimer {
    limit: Duration,
    started: Option<Instant>,
}

impl SpeedTimer {
    #[must_use]
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            started: None,
        }
    }

    /// Start the clock; later calls keep the first start time
    pub fn start(&mut self, now: Instant) {
        self.started.get_or_insert(now);
    }

    #[must_use]
    pub fn started_at(&self) -> Option<Instant> {
        self.started
    }

    #[must_use]
    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Time left at `now`; the full limit before the clock starts
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.started {
            Some(start) => self.limit.saturating_sub(now.saturating_duration_since(start)),
            None => self.limit,
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.started.is_some() && self.remaining(now).is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_waits_for_first_guess() {
        let timer = SpeedTimer::new(Duration::from_secs(60));
        let later = Instant::now() + Duration::from_secs(3600);
        assert!(!timer.is_expired(later));
        assert_eq!(timer.remaining(later), Duration::from_secs(60));
    }

    #[test]
    fn clock_counts_down_from_start() {
        let mut timer = SpeedTimer::new(Duration::from_secs(60));
        let start = Instant::now();
        timer.start(start);
        timer.start(start + Duration::from_secs(30));
        assert_eq!(timer.started_at(), Some(start));

        assert_eq!(
            timer.remaining(start + Duration::from_secs(45)),
            Duration::from_secs(15)
        );
        assert!(!timer.is_expired(start + Duration::from_secs(59)));
        assert!(timer.is_expired(start + Duration::from_secs(60)));
        assert_eq!(timer.remaining(start + Duration::from_secs(90)), Duration::ZERO);
    }
}
