//! Time-window derivation: period boundaries, previous-period comparison
//! windows, and the chart bucket partitions.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use finviz_domain::{LimitPeriod, Transaction};

/// Inclusive time interval used to scope aggregation. Membership is
/// `start <= date <= end`, with `end` sitting at the now-timestamp for
/// comparison windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Window {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Period selector for the expense chart; one more cadence than the
/// spending-limit periods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartPeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// One chart segment (a day-of-week, an hour range, a week, a month) with
/// the summed expense amount that fell into it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBucket {
    pub label: String,
    pub total: f64,
}

const DAY_SEGMENTS: [&str; 4] = ["Morning", "Afternoon", "Evening", "Night"];
const DAYS_OF_WEEK: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn day_end(date: NaiveDate) -> DateTime<Utc> {
    let last_instant = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("valid clock time");
    date.and_time(last_instant).and_utc()
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("first of month exists")
}

/// Walks back whole calendar months, landing on the first of the month.
fn months_back(date: NaiveDate, months: i32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 - months;
    let year = total.div_euclid(12);
    let month0 = total.rem_euclid(12) as u32;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).expect("derived month exists")
}

fn most_recent_sunday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Current comparison window for a spending period: period start through
/// `now` itself.
pub fn spending_window(period: LimitPeriod, now: DateTime<Utc>) -> Window {
    let today = now.date_naive();
    let start = match period {
        LimitPeriod::Daily => day_start(today),
        LimitPeriod::Weekly => day_start(most_recent_sunday(today)),
        LimitPeriod::Monthly => day_start(first_of_month(today)),
    };
    Window::new(start, now)
}

/// Window immediately preceding [`spending_window`], ending one millisecond
/// before the current window opens. For monthly that is the whole previous
/// calendar month, not a fixed day count.
pub fn previous_window(period: LimitPeriod, now: DateTime<Utc>) -> Window {
    let current = spending_window(period, now);
    let start = match period {
        LimitPeriod::Daily => current.start - Duration::days(1),
        LimitPeriod::Weekly => current.start - Duration::days(7),
        LimitPeriod::Monthly => day_start(months_back(now.date_naive(), 1)),
    };
    Window::new(start, current.start - Duration::milliseconds(1))
}

/// Partitions expenses into chart buckets for the selected period.
///
/// Only expense transactions contribute; income is never charted.
pub fn expense_chart(
    period: ChartPeriod,
    transactions: &[Transaction],
    now: DateTime<Utc>,
) -> Vec<ChartBucket> {
    match period {
        ChartPeriod::Daily => daily_chart(transactions, now),
        ChartPeriod::Weekly => weekly_chart(transactions, now),
        ChartPeriod::Monthly => monthly_chart(transactions, now),
        ChartPeriod::Yearly => yearly_chart(transactions, now),
    }
}

/// Today's expenses split into four named hour-of-day segments.
fn daily_chart(transactions: &[Transaction], now: DateTime<Utc>) -> Vec<ChartBucket> {
    let today = now.date_naive();
    let window = Window::new(day_start(today), day_end(today));
    let mut totals = [0.0_f64; 4];
    for txn in expenses_in(transactions, window) {
        let hour = txn.date.hour();
        let segment = match hour {
            5..=11 => 0,
            12..=16 => 1,
            17..=21 => 2,
            _ => 3,
        };
        totals[segment] += txn.amount;
    }
    labelled(&DAY_SEGMENTS, &totals)
}

/// This week's expenses by day, Sunday first.
fn weekly_chart(transactions: &[Transaction], now: DateTime<Utc>) -> Vec<ChartBucket> {
    let week_start = most_recent_sunday(now.date_naive());
    let window = Window::new(day_start(week_start), day_end(week_start + Duration::days(6)));
    let mut totals = [0.0_f64; 7];
    for txn in expenses_in(transactions, window) {
        let day = txn.date.weekday().num_days_from_sunday() as usize;
        totals[day] += txn.amount;
    }
    labelled(&DAYS_OF_WEEK, &totals)
}

/// Last 28 days as four 7-day buckets, oldest first.
fn monthly_chart(transactions: &[Transaction], now: DateTime<Utc>) -> Vec<ChartBucket> {
    let start = day_start(now.date_naive() - Duration::days(28));
    let window = Window::new(start, now);
    let mut totals = [0.0_f64; 4];
    for txn in expenses_in(transactions, window) {
        let days_diff = (now - txn.date).num_days();
        let week = ((days_diff / 7) as usize).min(3);
        totals[week] += txn.amount;
    }
    // Bucket 0 collects the most recent week, so reverse for chronology.
    totals.reverse();
    totals
        .iter()
        .enumerate()
        .map(|(index, &total)| ChartBucket {
            label: format!("Week {}", index + 1),
            total,
        })
        .collect()
}

/// Last 12 months bucketed by the transaction's calendar month number.
///
/// Buckets are always presented Jan..Dec rather than chronologically from
/// the window start; indexing by month number is kept as observed in the
/// dashboard, not rebased onto the window offset.
fn yearly_chart(transactions: &[Transaction], now: DateTime<Utc>) -> Vec<ChartBucket> {
    let start = day_start(months_back(now.date_naive(), 11));
    let window = Window::new(start, now);
    let mut totals = [0.0_f64; 12];
    for txn in expenses_in(transactions, window) {
        totals[txn.date.month0() as usize] += txn.amount;
    }
    labelled(&MONTH_NAMES, &totals)
}

fn expenses_in(transactions: &[Transaction], window: Window) -> impl Iterator<Item = &Transaction> {
    transactions
        .iter()
        .filter(move |txn| txn.is_expense() && window.contains(txn.date))
}

fn labelled(labels: &[&str], totals: &[f64]) -> Vec<ChartBucket> {
    labels
        .iter()
        .zip(totals)
        .map(|(label, &total)| ChartBucket {
            label: (*label).to_string(),
            total,
        })
        .collect()
}
