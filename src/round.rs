use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::clock::SecondClock;
use crate::selector::pick_next;
use crate::session::{Feedback, SessionConfig, SessionState};
use crate::sign::{Catalog, Difficulty, SignId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Idle,
    Running,
}

/// Something the caller may want to react to (a sound cue, a screen switch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    SignChanged(SignId),
    RoundEnded { difficulty: Difficulty, score: u32 },
}

/// Result of feeding one key token to the round.
///
/// `feedback == None` means the key was ignored and nothing changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    pub feedback: Option<Feedback>,
    pub score_delta: u32,
    pub sign_changed: bool,
}

impl KeyOutcome {
    fn ignored() -> Self {
        Self::default()
    }
}

/// Owns the timers and score of a play session.
pub struct RoundController<R: Rng = StdRng> {
    catalog: Catalog,
    config: SessionConfig,
    rng: R,
    clock: SecondClock,
    session: Option<SessionState>,
}

impl RoundController<StdRng> {
    pub fn from_entropy(catalog: Catalog, config: SessionConfig) -> Self {
        Self::new(catalog, config, StdRng::from_entropy())
    }

    pub fn with_seed(catalog: Catalog, config: SessionConfig, seed: u64) -> Self {
        Self::new(catalog, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RoundController<R> {
    pub fn new(catalog: Catalog, config: SessionConfig, rng: R) -> Self {
        Self {
            catalog,
            config,
            rng,
            clock: SecondClock::new(),
            session: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn state(&self) -> RoundState {
        if self.session.is_some() {
            RoundState::Running
        } else {
            RoundState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// Read-only view for rendering. `None` while idle.
    pub fn session(&self) -> Option<&SessionState> {
        self.session.as_ref()
    }

    /// Begin a fresh round, discarding any round in progress.
    pub fn start(&mut self, difficulty: Difficulty) -> RoundEvent {
        // tear the old clock down before arming the new one
        self.clock.disarm();

        let first = pick_next(self.catalog.pool(difficulty), None, &mut self.rng).clone();
        let id = first.id;
        self.session = Some(SessionState::new(difficulty, self.config, first));
        self.clock.arm();

        info!(%difficulty, first_sign = %id, "round started");
        RoundEvent::SignChanged(id)
    }

    /// Cancel the round. No tick is observed after this returns.
    pub fn stop(&mut self) {
        self.clock.disarm();
        if let Some(session) = self.session.take() {
            info!(
                difficulty = %session.difficulty,
                score = session.score,
                "round stopped"
            );
        }
    }

    /// Apply one elapsed second to both countdowns.
    ///
    /// Both counters drop before either is checked. When they run out on the
    /// same tick the round ends and the sign change is not reported.
    pub fn tick(&mut self) -> Option<RoundEvent> {
        let session = self.session.as_mut()?;
        session.session_seconds_remaining = session.session_seconds_remaining.saturating_sub(1);
        session.sign_seconds_remaining = session.sign_seconds_remaining.saturating_sub(1);

        if session.session_seconds_remaining == 0 {
            let event = RoundEvent::RoundEnded {
                difficulty: session.difficulty,
                score: session.score,
            };
            self.stop();
            return Some(event);
        }

        if session.sign_seconds_remaining == 0 {
            return self.advance_sign().map(RoundEvent::SignChanged);
        }

        None
    }

    /// Feed wall-clock time; fires one `tick` per whole second crossed.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<RoundEvent> {
        let seconds = self.clock.advance(elapsed);
        let mut events = Vec::new();
        for _ in 0..seconds {
            if !self.is_running() {
                break;
            }
            events.extend(self.tick());
        }
        events
    }

    pub fn handle_key(&mut self, key: &str) -> KeyOutcome {
        let Some(session) = self.session.as_mut() else {
            return KeyOutcome::ignored();
        };

        if session.current_sign.accepts(key) {
            session.last_feedback = Some(Feedback::Correct);
            session.score += 1;
            self.advance_sign();
            return KeyOutcome {
                feedback: Some(Feedback::Correct),
                score_delta: 1,
                sign_changed: true,
            };
        }

        if self.catalog.pool(session.difficulty).recognizes(key) {
            session.last_feedback = Some(Feedback::Incorrect);
            return KeyOutcome {
                feedback: Some(Feedback::Incorrect),
                score_delta: 0,
                sign_changed: false,
            };
        }

        KeyOutcome::ignored()
    }

    /// Drop the transient correct/incorrect flag. Nothing else changes.
    pub fn clear_feedback(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.last_feedback = None;
        }
    }

    fn advance_sign(&mut self) -> Option<SignId> {
        let session = self.session.as_mut()?;
        let pool = self.catalog.pool(session.difficulty);
        let next = pick_next(pool, Some(session.current_sign.id), &mut self.rng).clone();
        debug!(from = %session.current_sign.id, to = %next.id, "sign changed");

        let id = next.id;
        session.current_sign = next;
        session.sign_seconds_remaining = self.config.sign_secs;
        Some(id)
    }
}
