//! Pocketbook - flat-file expense ledger
//!
//! This library provides the core functionality for the pocketbook expense
//! tracker. Each user has an account with a balance, an optional daily
//! spending limit, and reward points earned at 5% of net spending. Expenses
//! are soft-deleted and kept on file so they can be restored.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (users, expenses, categories, money)
//! - `storage`: Flat delimited-text storage layer
//! - `services`: Business logic layer (credentials, ledger, reporting)
//! - `cli`: Command handlers
//! - `display`: Terminal output formatting
//! - `export`: CSV report export
//!
//! # Example
//!
//! ```rust,ignore
//! use pocketbook::config::{paths::PocketbookPaths, settings::Settings};
//!
//! let paths = PocketbookPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::PocketbookError;
