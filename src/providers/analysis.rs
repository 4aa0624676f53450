//! Client for the AI transaction analysis service

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use super::{AnalysisProvider, AnalysisResult, GatewayError};
use crate::constants::PROVIDER_TIMEOUT_SECS;

/// Client for the analysis service's `/analyze` endpoint
pub struct AnalysisClient {
    base_url: String,
    client: Client,
}

impl AnalysisClient {
    pub fn new(base_url: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(PROVIDER_TIMEOUT_SECS))
            .build()?;

        Ok(Self { base_url, client })
    }

    /// Probe the analysis service's health endpoint
    pub async fn health_check(&self) -> Result<(), GatewayError> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }

        Ok(())
    }
}

#[async_trait]
impl AnalysisProvider for AnalysisClient {
    async fn analyze_transaction(
        &self,
        description: &str,
    ) -> Result<AnalysisResult, GatewayError> {
        let response = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .json(&json!({ "description": description }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }

        Ok(response.json().await?)
    }
}
