pub mod types;
pub mod view;

pub use types::{ChartSeries, DashboardStats, MonthlyPoint, MonthlySeries, OrderedTotals};
pub use view::{monthly_series, series_from_totals, BudgetAlert, DashboardView};
