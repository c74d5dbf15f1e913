use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use log::{debug, warn};

use crate::api::TransactionsApi;
use crate::errors::ServiceResult;
use crate::types::PaginationInfo;

use super::filter::TransactionFilter;
use super::types::{Transaction, TransactionKind};

/// Rendered state of the transaction listing.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub transactions: Vec<Transaction>,
    pub pagination: PaginationInfo,
    pub loading: bool,
    pub error: Option<String>,
}

/// Monotonic ticket dispenser for in-flight fetches. A response is applied
/// only while its ticket is still the newest one issued.
struct FetchGuard {
    latest: AtomicU64,
}

impl FetchGuard {
    fn new() -> Self {
        Self { latest: AtomicU64::new(0) }
    }

    fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

/// Holds the listing filter and state, and refetches through the API seam on
/// every filter transition. Overlapping fetches resolve last-writer-wins: a
/// response from a superseded request is dropped without touching state.
pub struct TransactionListStore {
    api: Arc<dyn TransactionsApi>,
    filter: RwLock<TransactionFilter>,
    state: RwLock<ListState>,
    guard: FetchGuard,
}

impl TransactionListStore {
    pub fn new(api: Arc<dyn TransactionsApi>) -> Self {
        Self {
            api,
            filter: RwLock::new(TransactionFilter::default()),
            state: RwLock::new(ListState::default()),
            guard: FetchGuard::new(),
        }
    }

    pub fn filter(&self) -> TransactionFilter {
        self.filter.read().expect("filter lock poisoned").clone()
    }

    pub fn state(&self) -> ListState {
        self.state.read().expect("state lock poisoned").clone()
    }

    /// Fetch the listing for the current filter. Locks are never held across
    /// the network await; the loading flag is released on success and on
    /// failure, while a stale response leaves state to the newer request.
    pub async fn refresh(&self) -> ServiceResult<()> {
        let ticket = self.guard.issue();
        let filter = self.filter();
        {
            let mut state = self.state.write().expect("state lock poisoned");
            state.loading = true;
            state.error = None;
        }

        let result = self.api.list_transactions(&filter).await;

        if !self.guard.is_current(ticket) {
            debug!("Dropping stale transaction response (ticket {})", ticket);
            return Ok(());
        }

        let mut state = self.state.write().expect("state lock poisoned");
        state.loading = false;
        match result {
            Ok(page) => {
                state.transactions = page.transactions;
                state.pagination = page.pagination;
                Ok(())
            }
            Err(err) => {
                warn!("Transaction listing failed: {}", err);
                state.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    pub async fn set_page(&self, page: u32) -> ServiceResult<()> {
        self.filter.write().expect("filter lock poisoned").set_page(page);
        self.refresh().await
    }

    pub async fn set_limit(&self, limit: u32) -> ServiceResult<()> {
        self.filter.write().expect("filter lock poisoned").set_limit(limit)?;
        self.refresh().await
    }

    pub async fn apply_date_filter(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> ServiceResult<()> {
        self.filter
            .write()
            .expect("filter lock poisoned")
            .apply_date_filter(start, end);
        self.refresh().await
    }

    pub async fn set_kind(&self, kind: Option<TransactionKind>) -> ServiceResult<()> {
        self.filter.write().expect("filter lock poisoned").set_kind(kind);
        self.refresh().await
    }

    pub async fn clear_filter(&self) -> ServiceResult<()> {
        self.filter.write().expect("filter lock poisoned").clear_filter();
        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    use crate::domains::transaction::types::{
        Category, NewTransaction, PaymentMethod, TransactionsPage,
    };
    use crate::domains::dashboard::types::DashboardStats;
    use crate::errors::ServiceError;

    use super::*;

    /// Listing stub whose response delay depends on the requested page, so
    /// tests can force out-of-order completion.
    struct SlowPagesApi;

    fn page_marker(page: u32) -> Transaction {
        Transaction {
            id: Some(format!("tx-{}", page)),
            amount: dec!(10),
            category: Category::Food,
            date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            payment_method: PaymentMethod::Cash,
            notes: Some(format!("page-{}", page)),
            kind: Default::default(),
            from: None,
            to: None,
            created_at: None,
        }
    }

    #[async_trait]
    impl TransactionsApi for SlowPagesApi {
        async fn list_transactions(
            &self,
            filter: &TransactionFilter,
        ) -> ServiceResult<TransactionsPage> {
            // page 2 is the slow straggler
            let delay = if filter.page == 2 { 80 } else { 10 };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(TransactionsPage {
                transactions: vec![page_marker(filter.page)],
                pagination: PaginationInfo {
                    current_page: filter.page,
                    total_pages: 5,
                    total_items: 50,
                    items_per_page: filter.limit,
                    has_next: filter.page < 5,
                    has_prev: filter.page > 1,
                },
            })
        }

        async fn create_transaction(&self, _: &NewTransaction) -> ServiceResult<Transaction> {
            unimplemented!()
        }

        async fn update_transaction(&self, _: &str, _: &NewTransaction) -> ServiceResult<Transaction> {
            unimplemented!()
        }

        async fn delete_transaction(&self, _: &str) -> ServiceResult<()> {
            unimplemented!()
        }

        async fn dashboard_stats(&self) -> ServiceResult<DashboardStats> {
            unimplemented!()
        }
    }

    struct FailingApi;

    #[async_trait]
    impl TransactionsApi for FailingApi {
        async fn list_transactions(&self, _: &TransactionFilter) -> ServiceResult<TransactionsPage> {
            Err(ServiceError::Api { status: 500, message: "boom".to_string() })
        }

        async fn create_transaction(&self, _: &NewTransaction) -> ServiceResult<Transaction> {
            unimplemented!()
        }

        async fn update_transaction(&self, _: &str, _: &NewTransaction) -> ServiceResult<Transaction> {
            unimplemented!()
        }

        async fn delete_transaction(&self, _: &str) -> ServiceResult<()> {
            unimplemented!()
        }

        async fn dashboard_stats(&self) -> ServiceResult<DashboardStats> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_refresh_applies_response() {
        let store = TransactionListStore::new(Arc::new(SlowPagesApi));
        store.refresh().await.unwrap();

        let state = store.state();
        assert!(!state.loading);
        assert_eq!(state.transactions[0].notes.as_deref(), Some("page-1"));
        assert_eq!(state.pagination.current_page, 1);
    }

    #[tokio::test]
    async fn test_stale_response_is_dropped() {
        let store = Arc::new(TransactionListStore::new(Arc::new(SlowPagesApi)));

        // request A: page 2, slow
        let slow = {
            let store = store.clone();
            tokio::spawn(async move { store.set_page(2).await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        // request B: page 3, fast, issued while A is still in flight
        store.set_page(3).await.unwrap();
        slow.await.unwrap().unwrap();

        // A resolved last but B's result must win
        let state = store.state();
        assert_eq!(state.pagination.current_page, 3);
        assert_eq!(state.transactions[0].notes.as_deref(), Some("page-3"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_failure_releases_loading_flag() {
        let store = TransactionListStore::new(Arc::new(FailingApi));
        let result = store.refresh().await;
        assert!(result.is_err());

        let state = store.state();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(state.transactions.is_empty());
    }

    #[tokio::test]
    async fn test_set_limit_refetches_page_one() {
        let store = TransactionListStore::new(Arc::new(SlowPagesApi));
        store.set_page(3).await.unwrap();
        store.set_limit(20).await.unwrap();

        let state = store.state();
        assert_eq!(state.pagination.current_page, 1);
        assert_eq!(state.pagination.items_per_page, 20);
        assert_eq!(store.filter().page, 1);
    }
}
