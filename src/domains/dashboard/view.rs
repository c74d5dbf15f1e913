use rust_decimal::Decimal;
use serde::Serialize;

use crate::domains::budget::types::{all_on_track, alert_budgets, Budget, BudgetStatus};

use super::types::{ChartSeries, DashboardStats, MonthlyPoint, MonthlySeries, OrderedTotals};

/// How many payment methods the overview card shows.
const TOP_PAYMENT_METHODS_SHOWN: usize = 6;

/// Build an ordered label/value series from an aggregate mapping. An empty
/// mapping yields no series at all, so the view skips the chart instead of
/// rendering an empty one. Non-numeric values count as zero.
pub fn series_from_totals(totals: &OrderedTotals) -> Option<ChartSeries> {
    if totals.is_empty() {
        return None;
    }
    Some(ChartSeries {
        labels: totals.keys().cloned().collect(),
        values: totals.values().map(|v| v.as_f64().unwrap_or(0.0)).collect(),
    })
}

/// Build the monthly trend series. The income and net datasets appear only
/// when at least one point carries them; points without a value fill in zero
/// so the series stay aligned with the labels.
pub fn monthly_series(points: &[MonthlyPoint]) -> Option<MonthlySeries> {
    if points.is_empty() {
        return None;
    }
    let labels = points.iter().map(|p| p.month.clone()).collect();
    let expenses = points.iter().map(|p| p.amount).collect();
    let income = points
        .iter()
        .any(|p| p.income.is_some())
        .then(|| points.iter().map(|p| p.income.unwrap_or(0.0)).collect());
    let net = points
        .iter()
        .any(|p| p.net.is_some())
        .then(|| points.iter().map(|p| p.net.unwrap_or(0.0)).collect());
    Some(MonthlySeries { labels, expenses, income, net })
}

/// One row of the budget alert banner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetAlert {
    pub category: String,
    pub status: BudgetStatus,
    /// Percent used, where defined; a zero-limit overdraw has none.
    pub percent_used: Option<Decimal>,
    /// Positive while something is left, negative once exceeded.
    pub remaining: Decimal,
}

/// Everything the dashboard page renders, derived in one place.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub total_spent: f64,
    pub total_income: Option<f64>,
    pub net_amount: Option<f64>,
    pub top_category: Option<String>,
    pub top_income_category: Option<String>,
    pub top_payment_methods: Vec<String>,
    pub alerts: Vec<BudgetAlert>,
    pub all_budgets_on_track: bool,
    pub expense_categories: Option<ChartSeries>,
    pub income_categories: Option<ChartSeries>,
    pub payment_methods: Option<ChartSeries>,
    pub monthly: Option<MonthlySeries>,
}

impl DashboardView {
    pub fn build(stats: &DashboardStats, budgets: &[Budget]) -> Self {
        let alerts = alert_budgets(budgets)
            .into_iter()
            .map(|b| BudgetAlert {
                category: b.category.as_str().to_string(),
                status: b.status(),
                percent_used: b.percent_used(),
                remaining: b.remaining(),
            })
            .collect();

        Self {
            total_spent: stats.total_spent,
            total_income: stats.total_income,
            net_amount: stats.net_amount,
            top_category: stats.top_category.clone(),
            top_income_category: stats.top_income_category.clone(),
            top_payment_methods: stats
                .top_payment_methods
                .iter()
                .take(TOP_PAYMENT_METHODS_SHOWN)
                .cloned()
                .collect(),
            alerts,
            all_budgets_on_track: all_on_track(budgets),
            expense_categories: series_from_totals(&stats.category_data),
            income_categories: series_from_totals(&stats.income_category_data),
            payment_methods: series_from_totals(&stats.payment_method_data),
            monthly: monthly_series(&stats.monthly_data),
        }
    }
}
