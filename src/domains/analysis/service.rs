use std::sync::Arc;

use futures::join;
use log::warn;

use crate::api::AnalyticsApi;
use crate::errors::{ServiceError, ServiceResult};

use super::types::{AnalysisReport, CategoryInsights, SpendingSummary, SpendingTrends};

/// Trend window used when the caller does not pick one.
pub const DEFAULT_TREND_DAYS: u32 = 30;

/// Trend windows offered in the UI.
pub const TREND_PERIODS: [u32; 4] = [7, 30, 60, 90];

/// Everything the analysis screen shows at once. Sections that failed to load
/// are simply absent so the rest can still render.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOverview {
    pub comprehensive: Option<AnalysisReport>,
    pub summary: Option<SpendingSummary>,
    pub trends: Option<SpendingTrends>,
}

impl AnalysisOverview {
    pub fn is_empty(&self) -> bool {
        self.comprehensive.is_none() && self.summary.is_none() && self.trends.is_none()
    }
}

pub struct AnalysisService {
    api: Arc<dyn AnalyticsApi>,
}

impl AnalysisService {
    pub fn new(api: Arc<dyn AnalyticsApi>) -> Self {
        Self { api }
    }

    /// Fetch the three overview sections concurrently. A single failing
    /// section is logged and dropped; the call errors only when nothing at
    /// all came back.
    pub async fn fetch_overview(&self) -> ServiceResult<AnalysisOverview> {
        let (comprehensive, summary, trends) = join!(
            self.api.comprehensive_analysis(),
            self.api.spending_summary(),
            self.api.spending_trends(DEFAULT_TREND_DAYS),
        );

        let overview = AnalysisOverview {
            comprehensive: ok_or_warn("comprehensive analysis", comprehensive),
            summary: ok_or_warn("spending summary", summary),
            trends: ok_or_warn("spending trends", trends),
        };

        if overview.is_empty() {
            return Err(ServiceError::ExternalService(
                "analysis service unavailable".to_string(),
            ));
        }
        Ok(overview)
    }

    pub async fn trends(&self, days: u32) -> ServiceResult<SpendingTrends> {
        self.api.spending_trends(days).await
    }

    pub async fn category_insights(&self, category: &str) -> ServiceResult<CategoryInsights> {
        self.api.category_insights(category).await
    }
}

fn ok_or_warn<T>(section: &str, result: ServiceResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to load {}: {}", section, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    struct PartialApi;

    #[async_trait]
    impl AnalyticsApi for PartialApi {
        async fn comprehensive_analysis(&self) -> ServiceResult<AnalysisReport> {
            Ok(AnalysisReport {
                expense_count: 8,
                total_expenses: 412.0,
                ..AnalysisReport::default()
            })
        }

        async fn spending_summary(&self) -> ServiceResult<SpendingSummary> {
            Err(ServiceError::ExternalService("summary timed out".to_string()))
        }

        async fn spending_trends(&self, days: u32) -> ServiceResult<SpendingTrends> {
            Ok(SpendingTrends { period_days: days, trends: Default::default() })
        }

        async fn category_insights(&self, category: &str) -> ServiceResult<CategoryInsights> {
            Ok(CategoryInsights { category: category.to_string(), ..CategoryInsights::default() })
        }
    }

    struct DownApi;

    #[async_trait]
    impl AnalyticsApi for DownApi {
        async fn comprehensive_analysis(&self) -> ServiceResult<AnalysisReport> {
            Err(ServiceError::Network("connection refused".to_string()))
        }

        async fn spending_summary(&self) -> ServiceResult<SpendingSummary> {
            Err(ServiceError::Network("connection refused".to_string()))
        }

        async fn spending_trends(&self, _days: u32) -> ServiceResult<SpendingTrends> {
            Err(ServiceError::Network("connection refused".to_string()))
        }

        async fn category_insights(&self, _category: &str) -> ServiceResult<CategoryInsights> {
            Err(ServiceError::Network("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_overview_survives_one_failing_section() {
        let service = AnalysisService::new(Arc::new(PartialApi));
        let overview = service.fetch_overview().await.unwrap();
        assert!(overview.comprehensive.is_some());
        assert!(overview.summary.is_none());
        assert_eq!(overview.trends.unwrap().period_days, DEFAULT_TREND_DAYS);
    }

    #[tokio::test]
    async fn test_overview_errors_when_everything_fails() {
        let service = AnalysisService::new(Arc::new(DownApi));
        let err = service.fetch_overview().await.unwrap_err();
        assert!(matches!(err, ServiceError::ExternalService(_)));
    }

    #[tokio::test]
    async fn test_trends_passes_requested_window() {
        let service = AnalysisService::new(Arc::new(PartialApi));
        let trends = service.trends(90).await.unwrap();
        assert_eq!(trends.period_days, 90);
    }
}
