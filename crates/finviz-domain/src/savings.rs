//! Domain model for savings plans and their category catalogue.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Identifiable;

/// A savings goal with a target and the amount saved toward it so far.
///
/// `icon`/`icon_bg` are presentation hints derived from `category` at
/// creation time but stored independently, so they can drift from the
/// category if a caller overrides them. That matches the stored contract;
/// the store does not enforce consistency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsPlan {
    pub id: Uuid,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    #[serde(default)]
    pub category: SavingsCategory,
    pub icon: String,
    pub icon_bg: String,
    pub created_at: DateTime<Utc>,
}

impl SavingsPlan {
    pub fn new(name: impl Into<String>, target_amount: f64, category: SavingsCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            current_amount: 0.0,
            category,
            icon: category.icon().to_string(),
            icon_bg: category.icon_bg().to_string(),
            created_at: Utc::now(),
        }
    }
}

impl Identifiable for SavingsPlan {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
/// Fixed catalogue of savings goal categories; each maps to a default icon
/// and icon background used by the dashboard.
pub enum SavingsCategory {
    Car,
    House,
    Vacation,
    Education,
    Electronics,
    Gift,
    Health,
    #[default]
    Other,
}

impl SavingsCategory {
    pub fn icon(self) -> &'static str {
        match self {
            SavingsCategory::Car => "ti ti-car",
            SavingsCategory::House => "ti ti-home",
            SavingsCategory::Vacation => "ti ti-plane",
            SavingsCategory::Education => "ti ti-book",
            SavingsCategory::Electronics => "ti ti-device-laptop",
            SavingsCategory::Gift => "ti ti-gift",
            SavingsCategory::Health => "ti ti-heart",
            SavingsCategory::Other => "ti ti-piggy-bank",
        }
    }

    pub fn icon_bg(self) -> &'static str {
        match self {
            SavingsCategory::Car => "bg-blue-500",
            SavingsCategory::House => "bg-green-500",
            SavingsCategory::Vacation => "bg-yellow-500",
            SavingsCategory::Education => "bg-red-500",
            SavingsCategory::Electronics => "bg-purple-500",
            SavingsCategory::Gift => "bg-pink-500",
            SavingsCategory::Health => "bg-orange-500",
            SavingsCategory::Other => "bg-indigo-500",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SavingsCategory::Car => "Car",
            SavingsCategory::House => "House",
            SavingsCategory::Vacation => "Vacation",
            SavingsCategory::Education => "Education",
            SavingsCategory::Electronics => "Electronics",
            SavingsCategory::Gift => "Gift",
            SavingsCategory::Health => "Health",
            SavingsCategory::Other => "Other",
        }
    }
}

impl fmt::Display for SavingsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Partial update applied to an existing savings plan.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsPlanUpdate {
    pub name: Option<String>,
    pub target_amount: Option<f64>,
    pub current_amount: Option<f64>,
    pub category: Option<SavingsCategory>,
    pub icon: Option<String>,
    pub icon_bg: Option<String>,
}

impl SavingsPlanUpdate {
    pub fn apply(self, plan: &mut SavingsPlan) {
        if let Some(name) = self.name {
            plan.name = name;
        }
        if let Some(target) = self.target_amount {
            plan.target_amount = target;
        }
        if let Some(current) = self.current_amount {
            plan.current_amount = current;
        }
        if let Some(category) = self.category {
            plan.category = category;
        }
        if let Some(icon) = self.icon {
            plan.icon = icon;
        }
        if let Some(icon_bg) = self.icon_bg {
            plan.icon_bg = icon_bg;
        }
    }
}
