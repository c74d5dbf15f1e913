pub mod analytics;
pub mod client;

pub use analytics::AnalyticsClient;
pub use client::ApiClient;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::auth::service::{AuthResponse, Credentials, Registration};
use crate::domains::analysis::types::{
    AnalysisReport, CategoryInsights, SpendingSummary, SpendingTrends,
};
use crate::domains::budget::types::{Budget, NewBudget};
use crate::domains::dashboard::types::DashboardStats;
use crate::domains::transaction::filter::TransactionFilter;
use crate::domains::transaction::types::{NewTransaction, Transaction, TransactionsPage};
use crate::errors::{ServiceError, ServiceResult};
use crate::types::User;

/// Authentication endpoints of the primary API.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> ServiceResult<AuthResponse>;
    async fn register(&self, registration: &Registration) -> ServiceResult<AuthResponse>;
    async fn logout(&self) -> ServiceResult<()>;
    async fn current_user(&self) -> ServiceResult<User>;
}

/// Transaction endpoints of the primary API.
#[async_trait]
pub trait TransactionsApi: Send + Sync {
    async fn list_transactions(&self, filter: &TransactionFilter) -> ServiceResult<TransactionsPage>;
    async fn create_transaction(&self, transaction: &NewTransaction) -> ServiceResult<Transaction>;
    async fn update_transaction(&self, id: &str, transaction: &NewTransaction) -> ServiceResult<Transaction>;
    async fn delete_transaction(&self, id: &str) -> ServiceResult<()>;
    async fn dashboard_stats(&self) -> ServiceResult<DashboardStats>;
}

/// Budget endpoints of the primary API.
#[async_trait]
pub trait BudgetsApi: Send + Sync {
    async fn list_budgets(&self) -> ServiceResult<Vec<Budget>>;
    async fn save_budget(&self, budget: &NewBudget) -> ServiceResult<Budget>;
}

/// Spending-analysis endpoints of the analytics API.
#[async_trait]
pub trait AnalyticsApi: Send + Sync {
    async fn comprehensive_analysis(&self) -> ServiceResult<AnalysisReport>;
    async fn spending_summary(&self) -> ServiceResult<SpendingSummary>;
    async fn spending_trends(&self, days: u32) -> ServiceResult<SpendingTrends>;
    async fn category_insights(&self, category: &str) -> ServiceResult<CategoryInsights>;
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub(crate) fn network_error(err: reqwest::Error) -> ServiceError {
    ServiceError::Network(err.to_string())
}

/// Turn a non-2xx response into an error carrying the server-provided
/// `message` when the body has one, or the raw body text otherwise.
pub(crate) async fn error_from_response(response: reqwest::Response) -> ServiceError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or(text);
    ServiceError::Api { status, message }
}

/// Parse a 2xx JSON body, or map the failure to a service error.
pub(crate) async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> ServiceResult<T> {
    if response.status().is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))
    } else {
        Err(error_from_response(response).await)
    }
}

/// For endpoints whose body carries nothing useful on success.
pub(crate) async fn expect_success(response: reqwest::Response) -> ServiceResult<()> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}
