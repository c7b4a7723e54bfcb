pub mod coingecko;
pub mod exchange_rate;
pub mod static_rows;

use crate::core::{DataSourceError, Row};
use async_trait::async_trait;

/// A live provider that yields normalized rows for one asset class.
///
/// Implementations either return every row they were asked for or fail the
/// whole fetch; partial results are never surfaced.
#[async_trait]
pub trait RowSource: Send + Sync {
    async fn fetch_rows(&self) -> Result<Vec<Row>, DataSourceError>;
}
