use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};

use super::types::TransactionKind;

/// Page sizes the listing accepts.
pub const ROWS_PER_PAGE: [u32; 5] = [5, 10, 20, 50, 100];

const DEFAULT_LIMIT: u32 = 10;

/// Query state for the transaction listing. Every transition resets or keeps
/// the page deliberately: changing what is shown per page, or which rows
/// match, always jumps back to page 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    pub page: u32,
    pub limit: u32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub kind: Option<TransactionKind>,
}

impl Default for TransactionFilter {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
            start_date: None,
            end_date: None,
            kind: None,
        }
    }
}

impl TransactionFilter {
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Change the page size. Values outside [`ROWS_PER_PAGE`] are rejected
    /// and leave the filter untouched.
    pub fn set_limit(&mut self, limit: u32) -> ValidationResult<()> {
        if !ROWS_PER_PAGE.contains(&limit) {
            return Err(ValidationError::invalid_value(
                "limit",
                "must be one of 5, 10, 20, 50, 100",
            ));
        }
        self.limit = limit;
        self.page = 1;
        Ok(())
    }

    pub fn apply_date_filter(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.start_date = start;
        self.end_date = end;
        self.page = 1;
    }

    pub fn set_kind(&mut self, kind: Option<TransactionKind>) {
        self.kind = kind;
        self.page = 1;
    }

    /// Drop the date range and kind filters; the page size is kept.
    pub fn clear_filter(&mut self) {
        self.start_date = None;
        self.end_date = None;
        self.kind = None;
        self.page = 1;
    }

    /// Query string parameters for the listing endpoint. Unset filters are
    /// omitted entirely rather than sent empty.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(start) = self.start_date {
            params.push(("startDate", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            params.push(("endDate", end.format("%Y-%m-%d").to_string()));
        }
        if let Some(kind) = self.kind {
            params.push(("type", kind.as_str().to_string()));
        }
        params
    }
}
