use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::RowSource;
use crate::core::{Category, DataSourceError, Row};

const PROVIDER: &str = "exchange-rate";

/// Number of rate entries carried into the dashboard.
const TOP_RATES: usize = 10;

/// Fetches currency exchange rates for a fixed base currency.
pub struct ExchangeRateSource {
    base_url: String,
    base_currency: String,
}

impl ExchangeRateSource {
    pub fn new(base_url: &str, base_currency: &str) -> Self {
        ExchangeRateSource {
            base_url: base_url.to_string(),
            base_currency: base_currency.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    // serde_json's preserve_order keeps the provider's own entry order, so
    // "first 10 rates" means the provider's first 10.
    rates: serde_json::Map<String, serde_json::Value>,
}

#[async_trait]
impl RowSource for ExchangeRateSource {
    async fn fetch_rows(&self) -> Result<Vec<Row>, DataSourceError> {
        let url = format!("{}/v4/latest/{}", self.base_url, self.base_currency);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("findash/0.1")
            .build()
            .map_err(|source| DataSourceError::Request {
                provider: PROVIDER,
                source,
            })?;

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|source| DataSourceError::Request {
                provider: PROVIDER,
                source,
            })?;

        if !response.status().is_success() {
            return Err(DataSourceError::Status {
                provider: PROVIDER,
                status: response.status(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|source| DataSourceError::Request {
                provider: PROVIDER,
                source,
            })?;

        let data: RatesResponse =
            serde_json::from_str(&text).map_err(|e| DataSourceError::Decode {
                provider: PROVIDER,
                message: e.to_string(),
            })?;

        let mut rows = Vec::with_capacity(TOP_RATES);
        for (code, rate) in data.rates.iter().take(TOP_RATES) {
            let value = rate.as_f64().ok_or_else(|| DataSourceError::Decode {
                provider: PROVIDER,
                message: format!("non-numeric rate for {code}"),
            })?;
            rows.push(Row::new(code.clone(), value, Category::Currency));
        }

        debug!("Normalized {} currency rows", rows.len());
        Ok(rows)
    }
}
