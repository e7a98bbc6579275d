//! Clock pinned to a calendar date.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use mockable::Clock;

/// A [`Clock`] that always reports noon (local time) of one calendar date.
///
/// Used to render reports "as of" a given day and to pin "today" in
/// tests. Noon keeps the local and UTC calendar dates aligned for every
/// common offset.
///
/// # Examples
///
/// ```
/// use atas::clock::FixedClock;
/// use atas::deadline::status::today;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap_or_default();
/// assert_eq!(today(&FixedClock::at_date(date)), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Local>,
}

impl FixedClock {
    /// Creates a clock fixed at noon of `date` in the local time zone.
    #[must_use]
    pub fn at_date(date: NaiveDate) -> Self {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN);
        let naive = date.and_time(noon);
        let instant = Local
            .from_local_datetime(&naive)
            .earliest()
            .unwrap_or_else(|| Utc.from_utc_datetime(&naive).with_timezone(&Local));
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.instant
    }

    fn utc(&self) -> DateTime<Utc> {
        self.instant.with_timezone(&Utc)
    }
}
