pub mod service;
pub mod types;

pub use service::{AnalysisOverview, AnalysisService, DEFAULT_TREND_DAYS, TREND_PERIODS};
pub use types::{
    AnalysisReport, CategoryInsights, PeriodSummary, SpendingSummary, SpendingTrends, Suggestion,
    TrendSummary,
};
