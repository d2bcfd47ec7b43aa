//! Multi-record search over transactions and savings plans.
//!
//! Matching is case-insensitive substring containment; results keep store
//! order and are capped at 5 transactions followed by 3 plans. Queries
//! shorter than two characters mean "no search performed", which callers
//! must distinguish from a search that found nothing.

use finviz_domain::{SavingsPlan, Transaction};

pub const MIN_QUERY_LEN: usize = 2;
const TRANSACTION_CAP: usize = 5;
const PLAN_CAP: usize = 3;

/// One matched record, borrowed from the searched lists.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchHit<'a> {
    Transaction(&'a Transaction),
    Plan(&'a SavingsPlan),
}

/// Runs the search, or returns `None` when the query is too short to
/// count as a search at all.
pub fn search<'a>(
    query: &str,
    transactions: &'a [Transaction],
    plans: &'a [SavingsPlan],
) -> Option<Vec<SearchHit<'a>>> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_LEN {
        return None;
    }
    let needle = trimmed.to_lowercase();

    let mut hits: Vec<SearchHit<'a>> = transactions
        .iter()
        .filter(|txn| transaction_matches(txn, &needle))
        .take(TRANSACTION_CAP)
        .map(SearchHit::Transaction)
        .collect();
    hits.extend(
        plans
            .iter()
            .filter(|plan| plan_matches(plan, &needle))
            .take(PLAN_CAP)
            .map(SearchHit::Plan),
    );
    Some(hits)
}

fn transaction_matches(txn: &Transaction, needle: &str) -> bool {
    txn.description.to_lowercase().contains(needle)
        || txn.category.to_lowercase().contains(needle)
        || format!("{}", txn.amount).contains(needle)
}

fn plan_matches(plan: &SavingsPlan, needle: &str) -> bool {
    plan.name.to_lowercase().contains(needle)
        || plan.category.label().to_lowercase().contains(needle)
        || format!("{}", plan.target_amount).contains(needle)
}
