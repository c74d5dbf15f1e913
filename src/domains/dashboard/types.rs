use serde::{Deserialize, Serialize};

/// Category/method → amount mapping as sent by the server. Backed by a map
/// that keeps insertion order, since chart label order follows key order.
pub type OrderedTotals = serde_json::Map<String, serde_json::Value>;

/// One point of the monthly history series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net: Option<f64>,
}

/// Server-computed dashboard aggregates. Every field is optional on the wire;
/// older backends omit the income side entirely and the view renders a
/// degraded dashboard from whatever is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_spent: f64,
    pub total_income: Option<f64>,
    pub net_amount: Option<f64>,
    pub top_category: Option<String>,
    pub top_income_category: Option<String>,
    pub top_payment_methods: Vec<String>,
    pub category_data: OrderedTotals,
    pub income_category_data: OrderedTotals,
    pub payment_method_data: OrderedTotals,
    pub monthly_data: Vec<MonthlyPoint>,
}

/// Ordered label/value pairs ready for a pie or bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// The monthly trend chart: expenses always, income and net only when the
/// backend sent them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySeries {
    pub labels: Vec<String>,
    pub expenses: Vec<f64>,
    pub income: Option<Vec<f64>>,
    pub net: Option<Vec<f64>>,
}
