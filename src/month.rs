//! Calendar month buckets used to filter and aggregate purchases.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month+year grouping key.
///
/// Two purchases belong to the same bucket iff their timestamps fall in the
/// same calendar month, which is exactly when they render to the same
/// `Display` label ("March 2024").
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
}

impl MonthKey {
    /// Bucket containing the given instant.
    pub fn of(timestamp: DateTime<Utc>) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
        }
    }

    /// Bucket containing the given calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Bucket containing now.
    pub fn current() -> Self {
        Self::of(Utc::now())
    }

    /// The immediately preceding month.
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// First day of the bucket. The day is pinned to the 1st, so month
    /// arithmetic can never overflow across months of different lengths.
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = (self.month as usize)
            .checked_sub(1)
            .and_then(|index| MONTH_NAMES.get(index))
            .copied()
            .unwrap_or("Unknown");
        write!(f, "{} {}", name, self.year)
    }
}

/// The `n` consecutive month buckets ending with the current one, oldest
/// first. Backs the month selector, which shows a year of history.
pub fn recent_months(n: usize) -> Vec<MonthKey> {
    recent_months_from(MonthKey::current(), n)
}

/// Same as [`recent_months`], anchored at an explicit newest bucket.
pub fn recent_months_from(newest: MonthKey, n: usize) -> Vec<MonthKey> {
    let mut months = Vec::with_capacity(n);
    let mut key = newest;
    for _ in 0..n {
        months.push(key);
        key = key.previous();
    }
    months.reverse();
    months
}
