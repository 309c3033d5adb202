//! Friday archive window.
//!
//! The sweep may only run on Friday at or after the cutoff (15:00) in the
//! reference timezone, and it only touches rows created on that local
//! calendar day. Everything here is pure: callers pass the instant in.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, Utc, Weekday};

/// Fixed-offset timezone plus the local time the sweep opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceZone {
    offset: FixedOffset,
    cutoff: NaiveTime,
}

impl ReferenceZone {
    const JAKARTA_OFFSET_SECS: i32 = 7 * 3600;

    pub fn new(offset: FixedOffset, cutoff: NaiveTime) -> Self {
        Self { offset, cutoff }
    }

    /// Asia/Jakarta (UTC+7, no DST) with a 15:00 cutoff
    pub fn jakarta() -> Self {
        // +7h is inside FixedOffset's +-24h range
        let offset = FixedOffset::east_opt(Self::JAKARTA_OFFSET_SECS).expect("UTC+7");
        Self::new(offset, NaiveTime::MIN + Duration::hours(15))
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn cutoff(&self) -> NaiveTime {
        self.cutoff
    }

    /// Local calendar date of `at`
    pub fn local_date(&self, at: DateTime<Utc>) -> NaiveDate {
        at.with_timezone(&self.offset).date_naive()
    }

    /// UTC instant of local midnight starting `date`
    fn start_of_day_utc(&self, date: NaiveDate) -> DateTime<Utc> {
        let local_midnight = date.and_time(NaiveTime::MIN);
        (local_midnight - Duration::seconds(i64::from(self.offset.local_minus_utc()))).and_utc()
    }
}

/// Result of evaluating the archive window at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveWindow {
    /// Friday and at or after the cutoff, local time
    pub eligible: bool,
    /// Local calendar date; becomes the archive date label
    pub iso_date: NaiveDate,
    /// Local 00:00:00.000 as UTC
    pub range_start_utc: DateTime<Utc>,
    /// Local 23:59:59.999 as UTC
    pub range_end_utc: DateTime<Utc>,
}

impl ArchiveWindow {
    pub fn compute(now: DateTime<Utc>, zone: &ReferenceZone) -> Self {
        let local = now.with_timezone(&zone.offset);
        let iso_date = local.date_naive();

        let eligible = local.weekday() == Weekday::Fri && local.time() >= zone.cutoff;

        let range_start_utc = zone.start_of_day_utc(iso_date);
        let range_end_utc = range_start_utc + Duration::days(1) - Duration::milliseconds(1);

        Self {
            eligible,
            iso_date,
            range_start_utc,
            range_end_utc,
        }
    }
}
