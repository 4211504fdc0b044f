use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use tracing::info;

use crate::audio::Cue;
use crate::flash::FeedbackFlash;
use crate::keys::key_token;
use crate::round::{RoundController, RoundEvent};
use crate::sign::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Start,
    Playing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastRound {
    pub difficulty: Difficulty,
    pub score: u32,
}

/// Screen switching and presentation timers around a `RoundController`.
pub struct App<R: Rng = rand::rngs::StdRng> {
    pub state: AppState,
    pub selected: Difficulty,
    pub round: RoundController<R>,
    pub flash: FeedbackFlash,
    pub last_round: Option<LastRound>,
    cue: Box<dyn Cue>,
    last_tick: Instant,
}

impl<R: Rng> App<R> {
    pub fn new(
        round: RoundController<R>,
        selected: Difficulty,
        cue: Box<dyn Cue>,
        feedback_window: Duration,
        now: Instant,
    ) -> Self {
        Self {
            state: AppState::Start,
            selected,
            round,
            flash: FeedbackFlash::new(feedback_window),
            last_round: None,
            cue,
            last_tick: now,
        }
    }

    pub fn start_round(&mut self, now: Instant) {
        self.flash.cancel();
        let event = self.round.start(self.selected);
        self.last_tick = now;
        self.state = AppState::Playing;
        self.dispatch(event);
    }

    /// Abandon the current round and go back to the start screen.
    pub fn abort_round(&mut self) {
        self.round.stop();
        self.flash.cancel();
        self.state = AppState::Start;
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Instant) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.round.stop();
            return Action::Quit;
        }

        match self.state {
            AppState::Start => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => return Action::Quit,
                KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                    self.selected = self.selected.toggle();
                }
                KeyCode::Char('1') => self.selected = Difficulty::Normal,
                KeyCode::Char('2') => self.selected = Difficulty::Hard,
                KeyCode::Enter | KeyCode::Char(' ') => self.start_round(now),
                _ => {}
            },
            AppState::Playing => {
                if key.code == KeyCode::Esc {
                    info!("round abandoned");
                    self.abort_round();
                    return Action::Continue;
                }
                if let Some(token) = key_token(&key) {
                    let outcome = self.round.handle_key(&token);
                    if outcome.feedback.is_some() {
                        self.flash.show(now);
                    }
                    if outcome.sign_changed {
                        self.cue.sign_changed();
                    }
                }
            }
        }

        Action::Continue
    }

    pub fn on_tick(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        for event in self.round.advance(elapsed) {
            self.dispatch(event);
        }

        if self.flash.expire(now) {
            self.round.clear_feedback();
        }
    }

    fn dispatch(&mut self, event: RoundEvent) {
        match event {
            RoundEvent::SignChanged(_) => {
                if self.round.is_running() {
                    self.cue.sign_changed();
                }
            }
            RoundEvent::RoundEnded { difficulty, score } => {
                info!(%difficulty, score, "round finished");
                self.last_round = Some(LastRound { difficulty, score });
                self.flash.cancel();
                self.state = AppState::Start;
            }
        }
    }
}
