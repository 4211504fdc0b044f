use crate::sign::{Difficulty, Sign};

pub const SESSION_SECS: u32 = 60;
pub const SIGN_SECS: u32 = 10;

/// Time budgets for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub session_secs: u32,
    pub sign_secs: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_secs: SESSION_SECS,
            sign_secs: SIGN_SECS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

/// Live state of a running round. Dropped when the session clock hits zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub difficulty: Difficulty,
    pub score: u32,
    pub session_seconds_remaining: u32,
    pub sign_seconds_remaining: u32,
    pub sign_budget: u32,
    pub current_sign: Sign,
    pub last_feedback: Option<Feedback>,
}

impl SessionState {
    pub fn new(difficulty: Difficulty, config: SessionConfig, first_sign: Sign) -> Self {
        Self {
            difficulty,
            score: 0,
            session_seconds_remaining: config.session_secs,
            sign_seconds_remaining: config.sign_secs,
            sign_budget: config.sign_secs,
            current_sign: first_sign,
            last_feedback: None,
        }
    }

    /// Share of the per-sign budget still left, in `0.0..=1.0`.
    pub fn sign_fraction(&self) -> f64 {
        if self.sign_budget == 0 {
            return 0.0;
        }
        (self.sign_seconds_remaining as f64 / self.sign_budget as f64).clamp(0.0, 1.0)
    }
}
