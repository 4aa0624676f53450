//! Banking aggregator client (Plaid-compatible transactions API)

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;

use super::{BankingProvider, GatewayError, ProviderTransaction};
use crate::constants::PROVIDER_TIMEOUT_SECS;

#[derive(Debug, Deserialize)]
struct TransactionsGetResponse {
    transactions: Vec<ProviderTransaction>,
}

/// Client for the aggregator's `/transactions/get` endpoint
pub struct PlaidClient {
    base_url: String,
    client: Client,
}

impl PlaidClient {
    pub fn new(base_url: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(PROVIDER_TIMEOUT_SECS))
            .build()?;

        Ok(Self { base_url, client })
    }
}

#[async_trait]
impl BankingProvider for PlaidClient {
    async fn fetch_transactions(
        &self,
        access_token: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<ProviderTransaction>, GatewayError> {
        let body = json!({
            "access_token": access_token,
            "start_date": start_date.to_string(),
            "end_date": end_date.to_string(),
        });

        let response = self
            .client
            .post(format!("{}/transactions/get", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(GatewayError::InvalidCredential);
        }
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }

        let parsed: TransactionsGetResponse = response.json().await?;
        Ok(parsed.transactions)
    }
}
