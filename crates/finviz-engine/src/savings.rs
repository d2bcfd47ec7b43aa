//! Savings-goal progress aggregation.

use serde::Serialize;
use uuid::Uuid;

use finviz_domain::SavingsPlan;

/// Progress for a single plan. `raw_remaining` may go negative when a plan
/// is overfunded; only the display fields clamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanProgress {
    pub plan_id: Uuid,
    pub name: String,
    pub current_amount: f64,
    pub target_amount: f64,
    /// Unclamped percentage; exceeds 100 when overfunded.
    pub raw_percent: f64,
    /// Clamped to 100 for bar width.
    pub display_percent: f64,
    /// `target − current`; negative when overfunded.
    pub raw_remaining: f64,
    /// Floored at 0 for display.
    pub display_remaining: f64,
}

pub fn plan_progress(plan: &SavingsPlan) -> PlanProgress {
    let raw_percent = if plan.target_amount > 0.0 {
        plan.current_amount / plan.target_amount * 100.0
    } else {
        0.0
    };
    let raw_remaining = plan.target_amount - plan.current_amount;
    PlanProgress {
        plan_id: plan.id,
        name: plan.name.clone(),
        current_amount: plan.current_amount,
        target_amount: plan.target_amount,
        raw_percent,
        display_percent: raw_percent.min(100.0),
        raw_remaining,
        display_remaining: raw_remaining.max(0.0),
    }
}

/// Totals across every plan plus per-plan progress rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsOverview {
    pub total_saved: f64,
    pub total_target: f64,
    /// `Σ current / Σ target × 100`; 0 when there is nothing to save toward.
    pub overall_progress: f64,
    pub plans: Vec<PlanProgress>,
}

pub fn savings_overview(plans: &[SavingsPlan]) -> SavingsOverview {
    let total_saved: f64 = plans.iter().map(|plan| plan.current_amount).sum();
    let total_target: f64 = plans.iter().map(|plan| plan.target_amount).sum();
    let overall_progress = if total_target > 0.0 {
        total_saved / total_target * 100.0
    } else {
        0.0
    };
    SavingsOverview {
        total_saved,
        total_target,
        overall_progress,
        plans: plans.iter().map(plan_progress).collect(),
    }
}
