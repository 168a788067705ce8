use std::sync::{Arc, Weak};
use std::time::Duration;

/// Identifies one scheduled completion. A completion may only act on the
/// state that issued it while its epoch is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Epoch(u64);

#[derive(Debug, Default)]
pub struct EpochClock {
    current: u64,
    closed: bool,
}

impl EpochClock {
    pub fn advance(&mut self) -> Epoch {
        self.current += 1;
        Epoch(self.current)
    }

    pub fn current(&self) -> Epoch {
        Epoch(self.current)
    }

    pub fn is_current(&self, epoch: Epoch) -> bool {
        !self.closed && epoch.0 == self.current
    }

    pub fn close(&mut self) {
        self.closed = true;
        self.current += 1;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Waits `delay` once, then hands the state back only if its owner still
/// holds it.
pub async fn wake_after<S>(delay: Duration, state: &Weak<S>) -> Option<Arc<S>> {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    state.upgrade()
}
