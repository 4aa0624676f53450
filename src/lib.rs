//! SmartBudget Backend Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod providers;
pub mod routes;

pub use config::Config;
pub use error::{AppError, Result};

use std::sync::Arc;

use db::Store;
use providers::{AnalysisProvider, BankingProvider, PricingProvider};

/// Application state shared across all handlers
///
/// Every collaborator is constructed once at startup and injected here;
/// handlers never reach for globals. Tests substitute the in-memory store and
/// deterministic provider stubs through the same fields.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub banking: Arc<dyn BankingProvider>,
    pub pricing: Arc<dyn PricingProvider>,
    pub analysis: Arc<dyn AnalysisProvider>,
}
