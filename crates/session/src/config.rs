use std::env;
use std::time::Duration;

pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_CONFIRMATION_WINDOW: Duration = Duration::from_millis(3000);
pub const DEFAULT_TYPING_DELAY: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTiming {
    pub submit_delay: Duration,
    pub confirmation_window: Duration,
    pub typing_delay: Duration,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            submit_delay: DEFAULT_SUBMIT_DELAY,
            confirmation_window: DEFAULT_CONFIRMATION_WINDOW,
            typing_delay: DEFAULT_TYPING_DELAY,
        }
    }
}

impl SessionTiming {
    pub fn from_env() -> Self {
        Self {
            submit_delay: millis_from_env("AGENCY_SUBMIT_DELAY_MS", DEFAULT_SUBMIT_DELAY),
            confirmation_window: millis_from_env(
                "AGENCY_CONFIRMATION_WINDOW_MS",
                DEFAULT_CONFIRMATION_WINDOW,
            ),
            typing_delay: millis_from_env("AGENCY_TYPING_DELAY_MS", DEFAULT_TYPING_DELAY),
        }
    }

    pub fn immediate() -> Self {
        Self {
            submit_delay: Duration::ZERO,
            confirmation_window: Duration::ZERO,
            typing_delay: Duration::ZERO,
        }
    }
}

fn millis_from_env(key: &str, fallback: Duration) -> Duration {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(fallback)
}
