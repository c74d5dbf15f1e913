pub mod filter;
pub mod store;
pub mod types;

pub use filter::{TransactionFilter, ROWS_PER_PAGE};
pub use store::{ListState, TransactionListStore};
pub use types::{
    Category, NewTransaction, PaymentMethod, Transaction, TransactionKind, TransactionsPage,
};
