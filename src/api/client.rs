use async_trait::async_trait;
use log::debug;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;

use crate::auth::context::SessionHandle;
use crate::auth::service::{AuthResponse, Credentials, Registration};
use crate::config::ClientConfig;
use crate::domains::budget::types::{Budget, NewBudget};
use crate::domains::dashboard::types::DashboardStats;
use crate::domains::transaction::filter::TransactionFilter;
use crate::domains::transaction::types::{NewTransaction, Transaction, TransactionsPage};
use crate::errors::ServiceResult;
use crate::types::User;

use super::{expect_success, network_error, read_json, AuthApi, BudgetsApi, TransactionsApi};

/// Client for the primary API (auth, transactions, budgets, dashboard).
/// Attaches the bearer token from the session handle at request time.
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: SessionHandle,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: SessionHandle) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: config.clone().normalized().api_base_url,
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }
}

#[derive(Deserialize)]
struct MeResponse {
    user: User,
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> ServiceResult<AuthResponse> {
        debug!("Logging in {}", credentials.email);
        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(credentials)
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    async fn register(&self, registration: &Registration) -> ServiceResult<AuthResponse> {
        debug!("Registering {}", registration.email);
        let response = self
            .client
            .post(self.url("/api/auth/register"))
            .json(registration)
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    async fn logout(&self) -> ServiceResult<()> {
        let response = self
            .authorize(self.client.post(self.url("/api/auth/logout")))
            .send()
            .await
            .map_err(network_error)?;
        expect_success(response).await
    }

    async fn current_user(&self) -> ServiceResult<User> {
        let response = self
            .authorize(self.client.get(self.url("/api/auth/me")))
            .send()
            .await
            .map_err(network_error)?;
        let me: MeResponse = read_json(response).await?;
        Ok(me.user)
    }
}

#[async_trait]
impl TransactionsApi for ApiClient {
    async fn list_transactions(&self, filter: &TransactionFilter) -> ServiceResult<TransactionsPage> {
        debug!("Listing transactions page {} (limit {})", filter.page, filter.limit);
        let response = self
            .authorize(self.client.get(self.url("/api/transactions")))
            .query(&filter.query_params())
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    async fn create_transaction(&self, transaction: &NewTransaction) -> ServiceResult<Transaction> {
        let response = self
            .authorize(self.client.post(self.url("/api/transactions")))
            .json(transaction)
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    async fn update_transaction(
        &self,
        id: &str,
        transaction: &NewTransaction,
    ) -> ServiceResult<Transaction> {
        let response = self
            .authorize(self.client.put(self.url(&format!("/api/transactions/{}", id))))
            .json(transaction)
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    async fn delete_transaction(&self, id: &str) -> ServiceResult<()> {
        let response = self
            .authorize(self.client.delete(self.url(&format!("/api/transactions/{}", id))))
            .send()
            .await
            .map_err(network_error)?;
        expect_success(response).await
    }

    async fn dashboard_stats(&self) -> ServiceResult<DashboardStats> {
        let response = self
            .authorize(self.client.get(self.url("/api/transactions/dashboard")))
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }
}

#[async_trait]
impl BudgetsApi for ApiClient {
    async fn list_budgets(&self) -> ServiceResult<Vec<Budget>> {
        let response = self
            .authorize(self.client.get(self.url("/api/budgets")))
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    async fn save_budget(&self, budget: &NewBudget) -> ServiceResult<Budget> {
        let response = self
            .authorize(self.client.post(self.url("/api/budgets")))
            .json(budget)
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }
}
