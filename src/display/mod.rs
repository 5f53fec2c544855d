pub mod account;
pub mod expense;
pub mod report;
