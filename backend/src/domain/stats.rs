//! Calendar windows and count groups for the admin statistics dashboard.
//!
//! Windows are anchored to a calendar date and closed on both ends: a row
//! counts towards a window when its creation date lies in `[start, end]`.
//! All dates are UTC.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::role::Role;

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Half-open timestamp bounds `[start 00:00, end + 1 day 00:00)`.
    ///
    /// The upper bound is `None` when `end` is the last representable date.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use jobboard::domain::DateWindow;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
    /// let (from, until) = DateWindow { start: day, end: day }.timestamp_bounds();
    /// assert_eq!(from.to_string(), "2024-05-15 00:00:00");
    /// assert_eq!(until.unwrap().to_string(), "2024-05-16 00:00:00");
    /// ```
    pub fn timestamp_bounds(&self) -> (NaiveDateTime, Option<NaiveDateTime>) {
        let from = self.start.and_time(NaiveTime::MIN);
        let until = self.end.succ_opt().map(|next| next.and_time(NaiveTime::MIN));
        (from, until)
    }

    /// Whether `date` falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The four reporting windows, all ending on the anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsWindows {
    pub daily: DateWindow,
    pub weekly: DateWindow,
    pub monthly: DateWindow,
    pub yearly: DateWindow,
}

impl StatsWindows {
    /// Build windows for `today`: the day itself, the ISO week from Monday,
    /// the month from the 1st and the year from January 1st.
    pub fn anchored_at(today: NaiveDate) -> Self {
        let week_start = today - Days::new(u64::from(today.weekday().num_days_from_monday()));
        let month_start = today - Days::new(u64::from(today.day0()));
        let year_start = today - Days::new(u64::from(today.ordinal0()));
        let ending_today = |start| DateWindow { start, end: today };
        Self {
            daily: ending_today(today),
            weekly: ending_today(week_start),
            monthly: ending_today(month_start),
            yearly: ending_today(year_start),
        }
    }
}

/// Entity kinds the dashboard counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatsEntity {
    /// Every job row.
    Jobs,
    /// Users with the employer role.
    Employers,
    /// Users with the jobseeker role.
    Jobseekers,
}

impl StatsEntity {
    /// Role filter applied to the users table, or `None` for jobs.
    pub const fn role(self) -> Option<Role> {
        match self {
            Self::Jobs => None,
            Self::Employers => Some(Role::Employer),
            Self::Jobseekers => Some(Role::Jobseeker),
        }
    }
}

/// Lifetime and windowed counts for one entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityCounts {
    pub total: u64,
    pub daily: u64,
    pub weekly: u64,
    pub monthly: u64,
    pub yearly: u64,
}

/// Dashboard payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub jobs: EntityCounts,
    pub employers: EntityCounts,
    pub jobseekers: EntityCounts,
}
