//! Client core for a personal spending tracker.
//!
//! Talks to two HTTP backends: the main API (auth, transactions, budgets,
//! dashboard aggregates) and an analysis service that computes spending
//! insights. On top of the typed clients it derives the state each screen
//! renders: a paginated transaction list with filters, budget health, chart
//! series and the analysis overview.
//!
//! Nothing here touches a UI toolkit. A frontend owns rendering and calls
//! into [`AppContext`], which wires the clients and services around one
//! shared [`auth::SessionHandle`].

pub mod api;
pub mod auth;
pub mod config;
pub mod domains;
pub mod errors;
pub mod types;
pub mod validation;

use std::sync::Arc;

pub use config::ClientConfig;
pub use errors::{ServiceError, ServiceResult};
pub use types::{PageItem, PaginationInfo, User};

use std::sync::Once;

use api::analytics::AnalyticsClient;
use api::client::ApiClient;
use auth::{AuthService, SessionHandle};
use domains::analysis::AnalysisService;
use domains::budget::BudgetService;
use domains::transaction::TransactionListStore;

static LOGGING: Once = Once::new();

/// Set up env_logger for host shells without a logger of their own.
/// Honors `RUST_LOG`; defaults to `info`. Safe to call more than once.
pub fn init_logging() {
    LOGGING.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();
    });
}

/// One fully wired client instance. Everything shares the same session, so a
/// login through [`AppContext::auth`] authorizes every later request.
pub struct AppContext {
    pub session: SessionHandle,
    pub auth: AuthService,
    pub transactions: TransactionListStore,
    pub budgets: BudgetService,
    pub analysis: AnalysisService,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        let config = config.normalized();
        let session = SessionHandle::new();
        let api = Arc::new(ApiClient::new(&config, session.clone()));
        let analytics = Arc::new(AnalyticsClient::new(&config, session.clone()));

        Self {
            auth: AuthService::new(api.clone(), session.clone()),
            transactions: TransactionListStore::new(api.clone()),
            budgets: BudgetService::new(api),
            analysis: AnalysisService::new(analytics),
            session,
        }
    }

    /// Wire against the environment, falling back to local defaults.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }
}
