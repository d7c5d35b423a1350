//! Unit tests for the dashboard module.
//!
//! Tests are organised by query, covering status counts, billing queues,
//! deadline windows, and filtering.


use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to one instant, so date-derived behaviour is deterministic.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub(super) fn at(date: NaiveDate) -> Self {
        Self(Utc.from_utc_datetime(&date.and_hms_opt(9, 0, 0).expect("valid time")))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
