//! Time left until kickoff.

use std::fmt;

use chrono::{DateTime, Utc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Countdown {
    Remaining { days: i64, hours: i64, minutes: i64, seconds: i64 },
    Started,
}

impl Countdown {
    pub fn until(match_time: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let delta = match_time - now;
        if delta.num_milliseconds() <= 0 {
            return Countdown::Started;
        }
        let left = delta.num_seconds();
        Countdown::Remaining {
            days: left / 86_400,
            hours: (left / 3_600) % 24,
            minutes: (left / 60) % 60,
            seconds: left % 60,
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self, Countdown::Started)
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Remaining { days, hours, minutes, seconds } => {
                write!(f, "{}d {}h {}m {}s", days, hours, minutes, seconds)
            }
            Countdown::Started => f.write_str("Match Started!"),
        }
    }
}
