pub mod service;
pub mod types;

pub use service::BudgetService;
pub use types::{alert_budgets, all_on_track, Budget, BudgetStatus, NewBudget};
