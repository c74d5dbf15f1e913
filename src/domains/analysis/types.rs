use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domains::dashboard::types::ChartSeries;

/// Ordered category -> details mapping from the analysis backend.
pub type CategoryBreakdown = serde_json::Map<String, Value>;

/// Full spending analysis for the default period. Every field tolerates
/// absence; the backend trims sections it could not compute.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisReport {
    pub expense_count: u64,
    pub total_expenses: f64,
    pub period: Option<String>,
    pub analysis_date: Option<String>,
    pub trends: Option<TrendSummary>,
    pub category_analysis: CategoryBreakdown,
    pub suggestions: Vec<Suggestion>,
}

impl AnalysisReport {
    /// Chart series over the per-category totals, in backend order. Each
    /// breakdown entry is an object carrying a `total_amount` field.
    pub fn category_series(&self) -> Option<ChartSeries> {
        if self.category_analysis.is_empty() {
            return None;
        }
        Some(ChartSeries {
            labels: self.category_analysis.keys().cloned().collect(),
            values: self
                .category_analysis
                .values()
                .map(|v| v.get("total_amount").and_then(Value::as_f64).unwrap_or(0.0))
                .collect(),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendSummary {
    /// "increasing", "decreasing" or "stable".
    pub trend: Option<String>,
    pub daily_average: f64,
    pub recent_weekly_avg: f64,
    pub earlier_weekly_avg: f64,
    pub highest_spending_day: Option<DaySpend>,
    pub lowest_spending_day: Option<DaySpend>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DaySpend {
    pub date: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Suggestion {
    pub message: String,
    pub category: Option<String>,
}

/// Rolled-up figures for the three standard windows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpendingSummary {
    pub last_7_days: Option<PeriodSummary>,
    pub last_30_days: Option<PeriodSummary>,
    pub last_90_days: Option<PeriodSummary>,
}

impl SpendingSummary {
    /// The windows that actually came back, labelled for display.
    pub fn periods(&self) -> Vec<(&'static str, &PeriodSummary)> {
        [
            ("Last 7 days", self.last_7_days.as_ref()),
            ("Last 30 days", self.last_30_days.as_ref()),
            ("Last 90 days", self.last_90_days.as_ref()),
        ]
        .into_iter()
        .filter_map(|(label, p)| p.map(|p| (label, p)))
        .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodSummary {
    pub total_spent: f64,
    pub transaction_count: u64,
    pub average_transaction: f64,
    pub top_category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpendingTrends {
    pub period_days: u32,
    pub trends: serde_json::Map<String, Value>,
}

/// Per-category drilldown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryInsights {
    pub category: String,
    pub total_spent: f64,
    pub transaction_count: u64,
    pub average_transaction: f64,
    pub daily_average: f64,
    pub highest_expense: f64,
    pub lowest_expense: f64,
    pub recent_transactions: Vec<RecentTransaction>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentTransaction {
    pub description: Option<String>,
    pub date: Option<String>,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_report_tolerates_sparse_payload() {
        let report: AnalysisReport =
            serde_json::from_value(json!({"expense_count": 12, "total_expenses": 340.5})).unwrap();
        assert_eq!(report.expense_count, 12);
        assert!(report.trends.is_none());
        assert!(report.suggestions.is_empty());
        assert!(report.category_series().is_none());
    }

    #[test]
    fn test_category_series_reads_total_amount_in_order() {
        let report: AnalysisReport = serde_json::from_value(json!({
            "category_analysis": {
                "Food": {"total_amount": 120.0, "count": 4},
                "Rent": {"total_amount": 900.0, "count": 1},
                "Other": {"count": 2}
            }
        }))
        .unwrap();
        let series = report.category_series().unwrap();
        assert_eq!(series.labels, ["Food", "Rent", "Other"]);
        assert_eq!(series.values, [120.0, 900.0, 0.0]);
    }

    #[test]
    fn test_summary_periods_skip_missing_windows() {
        let summary: SpendingSummary = serde_json::from_value(json!({
            "last_7_days": {"total_spent": 50.0, "transaction_count": 3, "average_transaction": 16.67},
            "last_90_days": {"total_spent": 700.0, "transaction_count": 31, "average_transaction": 22.58}
        }))
        .unwrap();
        let periods = summary.periods();
        assert_eq!(periods.len(), 2);
        assert_eq!(periods[0].0, "Last 7 days");
        assert_eq!(periods[1].0, "Last 90 days");
        assert_eq!(periods[1].1.transaction_count, 31);
    }
}
