use std::time::Duration;

const ONE_SECOND: Duration = Duration::from_secs(1);

/// Turns arbitrary elapsed time into whole one-second ticks.
///
/// A disarmed clock swallows all time. Arming always starts from zero, so a
/// partial second left over from an earlier session cannot fire later.
#[derive(Debug, Clone, Default)]
pub struct SecondClock {
    carry: Duration,
    armed: bool,
}

impl SecondClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self) {
        self.carry = Duration::ZERO;
        self.armed = true;
    }

    pub fn disarm(&mut self) {
        self.carry = Duration::ZERO;
        self.armed = false;
    }

    /// Feed elapsed time; returns how many whole seconds completed.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.armed {
            return 0;
        }

        self.carry += elapsed;
        let mut ticks = 0;
        while self.carry >= ONE_SECOND {
            self.carry -= ONE_SECOND;
            ticks += 1;
        }
        ticks
    }
}
