use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domains::transaction::types::Category;
use crate::errors::ValidationResult;
use crate::validation::{validate_positive_amount, Validate, ValidationBuilder};

/// A per-category monthly spending cap with server-tracked actual spend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub category: Category,
    #[serde(with = "rust_decimal::serde::float")]
    pub limit_amount: Decimal,
    /// Computed by the server from the month's transactions.
    #[serde(with = "rust_decimal::serde::float")]
    pub current_spent: Decimal,
    /// Calendar month in `YYYY-MM` form.
    pub month: String,
    pub year: i32,
}

/// Three-tier classification of how far along a budget is. Drives badge
/// color, alert banners, and progress-bar fill everywhere a budget shows up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    OnTrack,
    NearLimit,
    OverBudget,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::OnTrack => "On Track",
            BudgetStatus::NearLimit => "Near Limit",
            BudgetStatus::OverBudget => "Over Budget",
        }
    }
}

const NEAR_LIMIT_THRESHOLD: Decimal = dec!(80);
const OVER_BUDGET_THRESHOLD: Decimal = dec!(100);

impl Budget {
    /// Percentage of the limit spent. `None` when the limit is zero, where
    /// the ratio is undefined; callers that need a number should go through
    /// [`Budget::progress_percent`].
    pub fn percent_used(&self) -> Option<Decimal> {
        if self.limit_amount.is_zero() {
            return None;
        }
        Some(self.current_spent / self.limit_amount * dec!(100))
    }

    /// Classify the budget: `[0, 80)` on track, `[80, 100)` near limit,
    /// `[100, ∞)` over budget. A zero limit never divides: any spend against
    /// it is over budget, no spend is on track.
    pub fn status(&self) -> BudgetStatus {
        match self.percent_used() {
            None => {
                if self.current_spent > Decimal::ZERO {
                    BudgetStatus::OverBudget
                } else {
                    BudgetStatus::OnTrack
                }
            }
            Some(percent) if percent >= OVER_BUDGET_THRESHOLD => BudgetStatus::OverBudget,
            Some(percent) if percent >= NEAR_LIMIT_THRESHOLD => BudgetStatus::NearLimit,
            Some(_) => BudgetStatus::OnTrack,
        }
    }

    /// Amount left before the limit; negative once the budget is exceeded.
    pub fn remaining(&self) -> Decimal {
        self.limit_amount - self.current_spent
    }

    /// Progress-bar fill in `[0, 100]`. An overdrawn zero-limit budget fills
    /// the whole bar.
    pub fn progress_percent(&self) -> f64 {
        let percent = match self.percent_used() {
            Some(p) => p,
            None if self.current_spent > Decimal::ZERO => OVER_BUDGET_THRESHOLD,
            None => Decimal::ZERO,
        };
        percent
            .min(OVER_BUDGET_THRESHOLD)
            .max(Decimal::ZERO)
            .to_f64()
            .unwrap_or(0.0)
    }

    /// Whether this budget belongs in the alert banner.
    pub fn needs_alert(&self) -> bool {
        self.status() != BudgetStatus::OnTrack
    }
}

/// Budgets that are near or over their limit, in listing order.
pub fn alert_budgets(budgets: &[Budget]) -> Vec<&Budget> {
    budgets.iter().filter(|b| b.needs_alert()).collect()
}

/// True when there is at least one budget and none needs an alert.
pub fn all_on_track(budgets: &[Budget]) -> bool {
    !budgets.is_empty() && budgets.iter().all(|b| !b.needs_alert())
}

/// Payload for creating or updating a budget. Uniqueness per
/// (category, month) is enforced by the backend, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub category: Category,
    #[serde(with = "rust_decimal::serde::float")]
    pub limit_amount: Decimal,
    pub month: String,
}

impl Validate for NewBudget {
    fn validate(&self) -> ValidationResult<()> {
        validate_positive_amount("limitAmount", self.limit_amount)?;
        ValidationBuilder::new("month", Some(&self.month))
            .required()
            .month()
            .validate()?;
        Ok(())
    }
}
