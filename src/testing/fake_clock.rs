use chrono::{DateTime, TimeZone, Utc};

use crate::ports::Clock;

pub struct FixedClock {
    pub instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new() -> Self {
        Self { instant: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
