pub mod balance;
pub mod dashboard;
pub mod savings_plans;
pub mod search;
pub mod spending_limits;
pub mod transactions;
