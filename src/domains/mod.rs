pub mod analysis;
pub mod budget;
pub mod dashboard;
pub mod transaction;
