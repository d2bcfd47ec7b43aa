//! Domain model for spending limits.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Identifiable;

/// Category sentinel used for the dashboard-wide limit. Per-category limits
/// are representable but the dashboard only ever reads this one.
pub const TOTAL_CATEGORY: &str = "Total";

/// A spending ceiling for one budgeting cadence. At most one record exists
/// per (category, period) pair; the store's upsert enforces that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpendingLimit {
    pub id: Uuid,
    pub category: String,
    pub limit: f64,
    pub period: LimitPeriod,
    pub created_at: DateTime<Utc>,
}

impl SpendingLimit {
    pub fn new(category: impl Into<String>, limit: f64, period: LimitPeriod) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            limit,
            period,
            created_at: Utc::now(),
        }
    }

    /// Fallback record served when no limit is persisted for a period.
    pub fn default_for(period: LimitPeriod) -> Self {
        Self::new(TOTAL_CATEGORY, period.default_limit(), period)
    }
}

impl Identifiable for SpendingLimit {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Budgeting cadence a spending limit applies to.
pub enum LimitPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl LimitPeriod {
    /// Hardcoded dashboard defaults used when no record is stored.
    pub fn default_limit(self) -> f64 {
        match self {
            LimitPeriod::Daily => 1000.0,
            LimitPeriod::Weekly => 5000.0,
            LimitPeriod::Monthly => 20000.0,
        }
    }
}

impl fmt::Display for LimitPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LimitPeriod::Daily => "daily",
            LimitPeriod::Weekly => "weekly",
            LimitPeriod::Monthly => "monthly",
        };
        f.write_str(label)
    }
}

impl FromStr for LimitPeriod {
    type Err = ParseLimitPeriodError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(LimitPeriod::Daily),
            "weekly" => Ok(LimitPeriod::Weekly),
            "monthly" => Ok(LimitPeriod::Monthly),
            other => Err(ParseLimitPeriodError(other.to_string())),
        }
    }
}

/// Raised when a period string is not one of daily/weekly/monthly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLimitPeriodError(pub String);

impl fmt::Display for ParseLimitPeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Period must be daily, weekly, or monthly (got `{}`)", self.0)
    }
}

impl std::error::Error for ParseLimitPeriodError {}

/// Partial update applied to an existing spending limit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingLimitUpdate {
    pub category: Option<String>,
    pub limit: Option<f64>,
    pub period: Option<LimitPeriod>,
}

impl SpendingLimitUpdate {
    pub fn apply(self, record: &mut SpendingLimit) {
        if let Some(category) = self.category {
            record.category = category;
        }
        if let Some(limit) = self.limit {
            record.limit = limit;
        }
        if let Some(period) = self.period {
            record.period = period;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dashboard_fallbacks() {
        assert_eq!(LimitPeriod::Daily.default_limit(), 1000.0);
        assert_eq!(LimitPeriod::Weekly.default_limit(), 5000.0);
        assert_eq!(LimitPeriod::Monthly.default_limit(), 20000.0);
        let fallback = SpendingLimit::default_for(LimitPeriod::Weekly);
        assert_eq!(fallback.category, TOTAL_CATEGORY);
        assert_eq!(fallback.limit, 5000.0);
    }

    #[test]
    fn parses_period_case_insensitively() {
        assert_eq!("Weekly".parse::<LimitPeriod>(), Ok(LimitPeriod::Weekly));
        assert!("hourly".parse::<LimitPeriod>().is_err());
    }
}
