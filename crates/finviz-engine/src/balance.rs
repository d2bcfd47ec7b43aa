//! Scalar balance and income/expense aggregation over transaction lists.

use chrono::{DateTime, Utc};
use serde::Serialize;

use finviz_domain::{LimitPeriod, Transaction, TransactionKind};

use crate::window::{previous_window, spending_window, Window};

/// Whole-history totals behind the balance card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSummary {
    pub balance: f64,
    pub total_income: f64,
    pub total_expenses: f64,
}

/// Sums one side of the ledger over an optional window.
pub fn sum_of_kind(
    transactions: &[Transaction],
    kind: TransactionKind,
    window: Option<Window>,
) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.kind == kind)
        .filter(|txn| window.map_or(true, |w| w.contains(txn.date)))
        .map(|txn| txn.amount)
        .sum()
}

/// `Σ income − Σ expense` over the entire list, no time window.
pub fn total_balance(transactions: &[Transaction]) -> f64 {
    sum_of_kind(transactions, TransactionKind::Income, None)
        - sum_of_kind(transactions, TransactionKind::Expense, None)
}

pub fn balance_summary(transactions: &[Transaction]) -> BalanceSummary {
    let total_income = sum_of_kind(transactions, TransactionKind::Income, None);
    let total_expenses = sum_of_kind(transactions, TransactionKind::Expense, None);
    BalanceSummary {
        balance: total_income - total_expenses,
        total_income,
        total_expenses,
    }
}

/// Period-over-period change. The conventions for an empty previous period
/// are part of the dashboard contract: 100 when the current period has any
/// activity, 0 when both are empty.
pub fn percentage_change(current: f64, previous: f64) -> f64 {
    if previous > 0.0 {
        (current - previous) / previous * 100.0
    } else if current > 0.0 {
        100.0
    } else {
        0.0
    }
}

/// Income for the current period compared against the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeTrend {
    pub current: f64,
    pub previous: f64,
    pub percentage_change: f64,
}

pub fn income_trend(
    transactions: &[Transaction],
    period: LimitPeriod,
    now: DateTime<Utc>,
) -> IncomeTrend {
    let current = sum_of_kind(
        transactions,
        TransactionKind::Income,
        Some(spending_window(period, now)),
    );
    let previous = sum_of_kind(
        transactions,
        TransactionKind::Income,
        Some(previous_window(period, now)),
    );
    IncomeTrend {
        current,
        previous,
        percentage_change: percentage_change(current, previous),
    }
}

/// Savings health tiers at the fixed 15%/0% thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SavingsHealth {
    Healthy,
    Moderate,
    Low,
}

impl SavingsHealth {
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage > 15.0 {
            SavingsHealth::Healthy
        } else if percentage > 0.0 {
            SavingsHealth::Moderate
        } else {
            SavingsHealth::Low
        }
    }
}

/// Income retained after expenses for one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsRate {
    pub amount: f64,
    pub percentage: f64,
    pub health: SavingsHealth,
}

pub fn savings_rate(
    transactions: &[Transaction],
    period: LimitPeriod,
    now: DateTime<Utc>,
) -> SavingsRate {
    let window = Some(spending_window(period, now));
    let income = sum_of_kind(transactions, TransactionKind::Income, window);
    let expense = sum_of_kind(transactions, TransactionKind::Expense, window);
    let amount = income - expense;
    let percentage = if income > 0.0 {
        amount / income * 100.0
    } else {
        0.0
    };
    SavingsRate {
        amount,
        percentage,
        health: SavingsHealth::for_percentage(percentage),
    }
}
