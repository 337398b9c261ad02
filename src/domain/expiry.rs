//! License expiry classification.
//!
//! Expiry dates are calendar dates taken at 00:00 UTC; the distance to `now`
//! is rounded up to whole days.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default warning window in days.
pub const DEFAULT_WARNING_DAYS: i64 = 30;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpiryStatus {
    NoExpiry,
    Active,
    ExpiringSoon,
    Expired,
}

impl ExpiryStatus {
    pub fn label(self) -> &'static str {
        match self {
            ExpiryStatus::NoExpiry => "No expiry",
            ExpiryStatus::Active => "Active",
            ExpiryStatus::ExpiringSoon => "Expiring soon",
            ExpiryStatus::Expired => "Expired",
        }
    }

    /// True for statuses that should be highlighted.
    pub fn needs_attention(self) -> bool {
        matches!(self, ExpiryStatus::ExpiringSoon | ExpiryStatus::Expired)
    }
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whole days from `now` until `expiry` (00:00 UTC), rounded up.
///
/// Negative once the expiry instant is more than a day behind `now`; zero for
/// any `now` in `(expiry - 1 day, expiry]`.
pub fn days_until(expiry: NaiveDate, now: DateTime<Utc>) -> i64 {
    let expiry_at = expiry.and_time(NaiveTime::default()).and_utc();
    let millis = (expiry_at - now).num_milliseconds();
    let whole = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        whole
    } else {
        whole + 1
    }
}

/// Maps an optional expiry date to an [`ExpiryStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryClassifier {
    warning_days: i64,
}

impl ExpiryClassifier {
    /// Classifier with a custom warning window. Non-positive windows fall back
    /// to [`DEFAULT_WARNING_DAYS`].
    pub fn new(warning_days: i64) -> Self {
        let warning_days = if warning_days > 0 {
            warning_days
        } else {
            DEFAULT_WARNING_DAYS
        };
        Self { warning_days }
    }

    pub fn warning_days(&self) -> i64 {
        self.warning_days
    }

    /// `days < 0` is expired, `0 < days <= window` is expiring soon, anything
    /// else (including exactly zero) is active.
    pub fn classify(&self, expiry: Option<NaiveDate>, now: DateTime<Utc>) -> ExpiryStatus {
        let Some(expiry) = expiry else {
            return ExpiryStatus::NoExpiry;
        };
        let days = days_until(expiry, now);
        if days < 0 {
            ExpiryStatus::Expired
        } else if days > 0 && days <= self.warning_days {
            ExpiryStatus::ExpiringSoon
        } else {
            ExpiryStatus::Active
        }
    }
}

impl Default for ExpiryClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_WARNING_DAYS)
    }
}

/// Classify with the default 30-day window.
pub fn classify(expiry: Option<NaiveDate>, now: DateTime<Utc>) -> ExpiryStatus {
    ExpiryClassifier::default().classify(expiry, now)
}
