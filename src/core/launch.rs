//! Post-launch redirect countdown

/// Where visitors are sent once the countdown ends
pub const PRODUCT_URL: &str = "https://www.coxistai.com/";

/// Seconds shown before redirecting
pub const DEFAULT_COUNTDOWN_SECS: u32 = 5;

/// Result of one countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    /// Seconds still to wait
    Waiting(u32),
    /// Time is up; navigate away
    Redirect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    finished: bool,
}

impl Countdown {
    pub fn new(secs: u32) -> Self {
        Self {
            remaining: secs,
            finished: false,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by one second
    pub fn tick(&mut self) -> CountdownStep {
        if self.finished || self.remaining <= 1 {
            self.remaining = 0;
            self.finished = true;
            return CountdownStep::Redirect;
        }
        self.remaining -= 1;
        CountdownStep::Waiting(self.remaining)
    }

    /// Stop waiting and redirect now
    pub fn skip(&mut self) -> CountdownStep {
        self.remaining = 0;
        self.finished = true;
        CountdownStep::Redirect
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTDOWN_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_then_redirects() {
        let mut countdown = Countdown::default();
        let steps: Vec<_> = (0..5).map(|_| countdown.tick()).collect();
        assert_eq!(
            steps,
            vec![
                CountdownStep::Waiting(4),
                CountdownStep::Waiting(3),
                CountdownStep::Waiting(2),
                CountdownStep::Waiting(1),
                CountdownStep::Redirect,
            ]
        );
        assert!(countdown.is_finished());
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_zero_redirects_on_first_tick() {
        let mut countdown = Countdown::new(0);
        assert_eq!(countdown.tick(), CountdownStep::Redirect);
    }

    #[test]
    fn test_skip() {
        let mut countdown = Countdown::new(5);
        assert_eq!(countdown.skip(), CountdownStep::Redirect);
        assert!(countdown.is_finished());
        assert_eq!(countdown.tick(), CountdownStep::Redirect);
    }
}
