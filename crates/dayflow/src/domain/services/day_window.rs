//! Day Window - Half-open `[midnight today, midnight tomorrow)` range
//!
//! Midnights are taken in the caller's timezone and stored as UTC instants,
//! which is what the attendance listing filters on.

use chrono::{DateTime, NaiveDate, NaiveTime, Offset, TimeDelta, TimeZone, Utc};
use serde::Serialize;

use crate::domain::errors::DomainError;

/// Half-open instant range covering one local calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DayWindow {
    /// Window for the local day that contains `now`
    pub fn containing<Tz: TimeZone>(now: &DateTime<Tz>) -> Result<Self, DomainError> {
        let tz = now.timezone();
        let today = now.date_naive();
        let tomorrow = today
            .succ_opt()
            .ok_or_else(|| DomainError::Validation(format!("No calendar day after {today}")))?;

        Ok(Self {
            start: local_midnight(&tz, today),
            end: local_midnight(&tz, tomorrow),
        })
    }

    /// Explicit window; `start` must be strictly before `end`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, DomainError> {
        if start >= end {
            return Err(DomainError::Validation(format!(
                "Window start {start} must be before end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight).earliest() {
        Some(dt) => dt.with_timezone(&Utc),
        None => {
            // Midnight skipped by a DST jump: the day starts where the old offset hits midnight
            let before = midnight
                .checked_sub_signed(TimeDelta::days(1))
                .unwrap_or(midnight);
            let offset = tz.offset_from_utc_datetime(&before).fix();
            DateTime::<Utc>::from_naive_utc_and_offset(midnight - offset, Utc)
        }
    }
}
