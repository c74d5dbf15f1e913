use std::sync::Arc;

use log::debug;

use crate::api::BudgetsApi;
use crate::errors::ServiceResult;
use crate::validation::Validate;

use super::types::{Budget, NewBudget};

/// Budget operations over the API seam. Payloads are validated before they
/// leave the client; after a save, callers re-fetch the list since
/// `current_spent` is server-computed.
pub struct BudgetService {
    api: Arc<dyn BudgetsApi>,
}

impl BudgetService {
    pub fn new(api: Arc<dyn BudgetsApi>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ServiceResult<Vec<Budget>> {
        self.api.list_budgets().await
    }

    pub async fn save(&self, budget: &NewBudget) -> ServiceResult<Budget> {
        budget.validate()?;
        debug!("Saving budget for {} ({})", budget.category.as_str(), budget.month);
        self.api.save_budget(budget).await
    }
}
