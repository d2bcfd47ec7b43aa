//! Assembles the full dashboard view model from one snapshot of the
//! fetched record lists. Everything here is a pure function of its inputs
//! plus the supplied `now`; the refresh controller re-runs it after every
//! mutation.

use chrono::{DateTime, Utc};
use serde::Serialize;

use finviz_domain::{SavingsPlan, SpendingLimit, Transaction};

use crate::balance::{balance_summary, income_trend, savings_rate, BalanceSummary, IncomeTrend, SavingsRate};
use crate::limits::{limit_status, LimitStatus};
use crate::savings::{savings_overview, SavingsOverview};
use crate::window::{expense_chart, ChartBucket, ChartPeriod};

/// Everything the dashboard renders in one refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub balance: BalanceSummary,
    pub spending: LimitStatus,
    pub income_trend: IncomeTrend,
    pub savings_rate: SavingsRate,
    pub chart_period: ChartPeriod,
    pub chart: Vec<ChartBucket>,
    pub chart_total: f64,
    pub chart_max: f64,
    pub savings: SavingsOverview,
}

pub fn dashboard_view(
    transactions: &[Transaction],
    plans: &[SavingsPlan],
    limit: &SpendingLimit,
    chart_period: ChartPeriod,
    now: DateTime<Utc>,
) -> DashboardView {
    let chart = expense_chart(chart_period, transactions, now);
    let chart_total = chart.iter().map(|bucket| bucket.total).sum();
    let chart_max = chart
        .iter()
        .map(|bucket| bucket.total)
        .fold(0.0_f64, f64::max);
    DashboardView {
        balance: balance_summary(transactions),
        spending: limit_status(transactions, limit, now),
        income_trend: income_trend(transactions, limit.period, now),
        savings_rate: savings_rate(transactions, limit.period, now),
        chart_period,
        chart,
        chart_total,
        chart_max,
        savings: savings_overview(plans),
    }
}
