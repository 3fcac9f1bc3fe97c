use std::env;

use chrono::{DateTime, NaiveDate, Utc};
use pocket_core::Clock;

/// Pins the shell's notion of "today" (`YYYY-MM-DD`). Ids still follow the
/// real time.
pub const TODAY_ENV: &str = "POCKETBOOK_TODAY";

/// Real-time clock backed by the system UTC time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock {
    today: Option<NaiveDate>,
}

impl SystemClock {
    /// Honours [`TODAY_ENV`] when it holds a valid date.
    pub fn from_env() -> Self {
        let today = env::var(TODAY_ENV).ok().and_then(|raw| {
            match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(err) => {
                    tracing::warn!(value = %raw, error = %err, "ignoring invalid {}", TODAY_ENV);
                    None
                }
            }
        });
        Self { today }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| self.now().date_naive())
    }
}
