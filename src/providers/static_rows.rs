//! Fixed rows for asset classes without a live provider.

use crate::core::{Category, Row};

/// Stock figures shown alongside the live data.
pub fn equities() -> Vec<Row> {
    vec![
        Row::new("AAPL", 185.0, Category::Equity),
        Row::new("GOOGL", 135.0, Category::Equity),
        Row::new("AMZN", 120.0, Category::Equity),
    ]
}

/// Commodity figures shown alongside the live data.
pub fn commodities() -> Vec<Row> {
    vec![
        Row::new("Gold", 2000.0, Category::Commodity),
        Row::new("Oil", 85.0, Category::Commodity),
        Row::new("Corn", 6.5, Category::Commodity),
    ]
}
