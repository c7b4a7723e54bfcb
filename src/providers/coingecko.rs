use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::RowSource;
use crate::core::{Category, DataSourceError, Row};

const PROVIDER: &str = "coingecko";

/// Fetches the top crypto assets by market rank, denominated in USD.
pub struct CoinGeckoSource {
    base_url: String,
}

impl CoinGeckoSource {
    pub fn new(base_url: &str) -> Self {
        CoinGeckoSource {
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MarketEntry {
    name: String,
    current_price: f64,
}

#[async_trait]
impl RowSource for CoinGeckoSource {
    async fn fetch_rows(&self) -> Result<Vec<Row>, DataSourceError> {
        let url = format!("{}/api/v3/coins/markets", self.base_url);
        debug!("Requesting crypto markets from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("findash/0.1")
            .build()
            .map_err(|source| DataSourceError::Request {
                provider: PROVIDER,
                source,
            })?;

        let response = client
            .get(&url)
            .query(&[("vs_currency", "usd"), ("per_page", "10"), ("page", "1")])
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

        let entries: Vec<MarketEntry> =
            serde_json::from_str(&text).map_err(|e| DataSourceError::Decode {
                provider: PROVIDER,
                message: e.to_string(),
            })?;

        let rows: Vec<Row> = entries
            .into_iter()
            .map(|entry| Row::new(entry.name, entry.current_price, Category::Crypto))
            .collect();

        debug!("Normalized {} crypto rows", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server(mock_response: &str, status: u16) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/coins/markets"))
            .respond_with(ResponseTemplate::new(status).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn test_successful_markets_fetch() {
        let mock_response = r#"[
            { "name": "Bitcoin", "current_price": 60000.0, "market_cap": 1 },
            { "name": "Ethereum", "current_price": 2900.5 }
        ]"#;
        let mock_server = create_mock_server(mock_response, 200).await;

        let source = CoinGeckoSource::new(&mock_server.uri());
        let rows = source.fetch_rows().await.unwrap();

        assert_eq!(
            rows,
            vec![
                Row::new("Bitcoin", 60000.0, Category::Crypto),
                Row::new("Ethereum", 2900.5, Category::Crypto),
            ]
        );
    }

    #[tokio::test]
    async fn test_request_carries_market_query_params() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/coins/markets"))
            .and(query_param("vs_currency", "usd"))
            .and(query_param("per_page", "10"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let source = CoinGeckoSource::new(&mock_server.uri());
        let rows = source.fetch_rows().await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_fails_the_fetch() {
        let mock_server = create_mock_server("too many requests", 429).await;

        let source = CoinGeckoSource::new(&mock_server.uri());
        let result = source.fetch_rows().await;

        match result {
            Err(DataSourceError::Status { provider, status }) => {
                assert_eq!(provider, "coingecko");
                assert_eq!(status.as_u16(), 429);
            }
            other => panic!("Expected a status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_payload_fails_the_fetch() {
        // An object where an array is expected.
        let mock_server = create_mock_server(r#"{ "error": "nope" }"#, 200).await;

        let source = CoinGeckoSource::new(&mock_server.uri());
        let result = source.fetch_rows().await;

        assert!(matches!(
            result,
            Err(DataSourceError::Decode { provider: "coingecko", .. })
        ));
    }
}
