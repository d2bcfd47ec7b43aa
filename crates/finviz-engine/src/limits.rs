//! Spending-limit consumption: percentage used, remaining amount, and the
//! progress tier behind the dashboard's colour coding.

use chrono::{DateTime, Utc};
use serde::Serialize;

use finviz_domain::{LimitPeriod, SpendingLimit, Transaction, TransactionKind};

use crate::balance::sum_of_kind;
use crate::window::spending_window;

/// Presentation tiers at the fixed 50/75 thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressTier {
    Ok,
    Warning,
    Critical,
}

impl ProgressTier {
    pub fn for_percentage(percentage: u8) -> Self {
        if percentage < 50 {
            ProgressTier::Ok
        } else if percentage < 75 {
            ProgressTier::Warning
        } else {
            ProgressTier::Critical
        }
    }
}

/// Consumption of one spending limit over its current period.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitStatus {
    pub period: LimitPeriod,
    pub limit: f64,
    pub spent: f64,
    /// Rounded and clamped to [0, 100] for the progress bar; `spent` keeps
    /// the unclamped amount.
    pub percentage_used: u8,
    pub remaining: f64,
    pub tier: ProgressTier,
}

/// Expenses that fall inside the period's current window.
pub fn period_spending(
    transactions: &[Transaction],
    period: LimitPeriod,
    now: DateTime<Utc>,
) -> f64 {
    sum_of_kind(
        transactions,
        TransactionKind::Expense,
        Some(spending_window(period, now)),
    )
}

pub fn percentage_used(spent: f64, limit: f64) -> u8 {
    if limit <= 0.0 {
        return 100;
    }
    (spent / limit * 100.0).round().clamp(0.0, 100.0) as u8
}

pub fn amount_remaining(spent: f64, limit: f64) -> f64 {
    (limit - spent).max(0.0)
}

pub fn limit_status(
    transactions: &[Transaction],
    limit: &SpendingLimit,
    now: DateTime<Utc>,
) -> LimitStatus {
    let spent = period_spending(transactions, limit.period, now);
    let percentage = percentage_used(spent, limit.limit);
    LimitStatus {
        period: limit.period,
        limit: limit.limit,
        spent,
        percentage_used: percentage,
        remaining: amount_remaining(spent, limit.limit),
        tier: ProgressTier::for_percentage(percentage),
    }
}
