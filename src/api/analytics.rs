use async_trait::async_trait;
use log::debug;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::auth::context::SessionHandle;
use crate::config::ClientConfig;
use crate::domains::analysis::types::{
    AnalysisReport, CategoryInsights, SpendingSummary, SpendingTrends,
};
use crate::errors::{ServiceError, ServiceResult};

use super::{error_from_response, network_error, AnalyticsApi};

/// Response envelope used by every analytics endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
}

/// Client for the analytics API (a separate origin from the primary API).
/// Every endpoint requires bearer auth and wraps its payload in a
/// `{ success, data }` envelope.
pub struct AnalyticsClient {
    client: Client,
    base_url: String,
    session: SessionHandle,
}

impl AnalyticsClient {
    pub fn new(config: &ClientConfig, session: SessionHandle) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: config.clone().normalized().analytics_base_url,
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/analysis{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> ServiceResult<RequestBuilder> {
        let token = self
            .session
            .token()
            .ok_or_else(|| ServiceError::Authentication("no active session".to_string()))?;
        Ok(request.header(AUTHORIZATION, format!("Bearer {}", token)))
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> ServiceResult<T> {
        let response = request.send().await.map_err(network_error)?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))?;
        if !envelope.success {
            return Err(ServiceError::ExternalService(
                "analysis request was not successful".to_string(),
            ));
        }
        envelope
            .data
            .ok_or_else(|| ServiceError::Parse("envelope is missing its data field".to_string()))
    }
}

#[async_trait]
impl AnalyticsApi for AnalyticsClient {
    async fn comprehensive_analysis(&self) -> ServiceResult<AnalysisReport> {
        debug!("Fetching comprehensive analysis");
        let request = self.authorize(self.client.get(self.url("/comprehensive")))?;
        self.fetch(request).await
    }

    async fn spending_summary(&self) -> ServiceResult<SpendingSummary> {
        let request = self.authorize(self.client.get(self.url("/summary")))?;
        self.fetch(request).await
    }

    async fn spending_trends(&self, days: u32) -> ServiceResult<SpendingTrends> {
        debug!("Fetching spending trends for the last {} days", days);
        let request = self
            .authorize(self.client.get(self.url("/trends")))?
            .query(&[("days", days)]);
        self.fetch(request).await
    }

    async fn category_insights(&self, category: &str) -> ServiceResult<CategoryInsights> {
        let path = format!("/category/{}", urlencoding::encode(category));
        let request = self.authorize(self.client.get(self.url(&path)))?;
        self.fetch(request).await
    }
}
