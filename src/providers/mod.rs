//! Outbound clients for the external services the backend depends on
//!
//! Each provider is a stateless remote-call wrapper with a bounded timeout:
//! serialize the request, issue the call, deserialize the response. No retry,
//! no backoff, no circuit breaking; callers must treat every call as
//! at-most-once.

pub mod analysis;
pub mod numbeo;
pub mod plaid;

pub use analysis::AnalysisClient;
pub use numbeo::NumbeoClient;
pub use plaid::PlaidClient;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Failure modes shared by every provider call
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(StatusCode),

    #[error("access token rejected by the provider")]
    InvalidCredential,
}

/// One transaction as reported by the banking aggregator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderTransaction {
    pub amount: f64,
    #[serde(default)]
    pub category: Vec<String>,
    pub name: String,
    pub date: NaiveDate,
}

/// Classification returned by the AI analysis service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub category: String,
    pub confidence: f64,
    pub description: String,
}

/// Fetches a user's recent transactions from the account aggregator
#[async_trait]
pub trait BankingProvider: Send + Sync {
    async fn fetch_transactions(
        &self,
        access_token: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> std::result::Result<Vec<ProviderTransaction>, GatewayError>;
}

/// Fetches a city's price document from the pricing API
#[async_trait]
pub trait PricingProvider: Send + Sync {
    async fn fetch_city_prices(&self, city: &str) -> std::result::Result<Value, GatewayError>;
}

/// Classifies a free-text transaction description
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn analyze_transaction(
        &self,
        description: &str,
    ) -> std::result::Result<AnalysisResult, GatewayError>;
}
