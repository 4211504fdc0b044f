use std::time::{Duration, Instant};

pub const FEEDBACK_WINDOW_MS: u64 = 200;

/// Display timer for the correct/incorrect flash.
///
/// Lives outside the round on purpose: expiring it only clears the flag.
#[derive(Debug, Clone)]
pub struct FeedbackFlash {
    window: Duration,
    shown_at: Option<Instant>,
}

impl Default for FeedbackFlash {
    fn default() -> Self {
        Self::new(Duration::from_millis(FEEDBACK_WINDOW_MS))
    }
}

impl FeedbackFlash {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            shown_at: None,
        }
    }

    /// (Re)start the window. A second flash inside the window extends it.
    pub fn show(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    pub fn cancel(&mut self) {
        self.shown_at = None;
    }

    pub fn is_active(&self) -> bool {
        self.shown_at.is_some()
    }

    /// Returns true exactly once, when the window has run out.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.shown_at {
            Some(at) if now.saturating_duration_since(at) >= self.window => {
                self.shown_at = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_once_after_window() {
        let mut flash = FeedbackFlash::default();
        let t0 = Instant::now();
        flash.show(t0);

        assert!(!flash.expire(t0 + Duration::from_millis(150)));
        assert!(flash.expire(t0 + Duration::from_millis(200)));
        assert!(!flash.expire(t0 + Duration::from_millis(400)));
        assert!(!flash.is_active());
    }

    #[test]
    fn reshow_extends_the_window() {
        let mut flash = FeedbackFlash::new(Duration::from_millis(100));
        let t0 = Instant::now();
        flash.show(t0);
        flash.show(t0 + Duration::from_millis(80));

        assert!(!flash.expire(t0 + Duration::from_millis(120)));
        assert!(flash.expire(t0 + Duration::from_millis(180)));
    }

    #[test]
    fn idle_flash_never_fires() {
        let mut flash = FeedbackFlash::default();
        assert!(!flash.expire(Instant::now() + Duration::from_secs(10)));
        flash.show(Instant::now());
        flash.cancel();
        assert!(!flash.expire(Instant::now() + Duration::from_secs(10)));
    }
}
