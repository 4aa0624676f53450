//! Cost-of-living client for the Numbeo city prices API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{GatewayError, PricingProvider};
use crate::constants::PROVIDER_TIMEOUT_SECS;

/// Client for the pricing API's `/api/city_prices` endpoint
///
/// The API key is fixed at construction; the city varies per call.
pub struct NumbeoClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl NumbeoClient {
    pub fn new(base_url: String, api_key: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(PROVIDER_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }
}

#[async_trait]
impl PricingProvider for NumbeoClient {
    async fn fetch_city_prices(&self, city: &str) -> Result<Value, GatewayError> {
        let response = self
            .client
            .get(format!("{}/api/city_prices", self.base_url))
            .query(&[("api_key", self.api_key.as_str()), ("city", city)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }

        // The price document is passed through opaquely; only valid JSON is
        // required of it.
        Ok(response.json().await?)
    }
}
