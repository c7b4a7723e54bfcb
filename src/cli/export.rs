use anyhow::Result;
use std::path::PathBuf;
use tokio::sync::watch;

use super::ui;
use crate::core::config::AppConfig;
use crate::core::{DashboardState, ExportError, FilterCriteria, snapshot};
use crate::export::{DEFAULT_EXPORT_FILE, Exporter, PdfExporter};
use crate::providers::{
    RowSource, coingecko::CoinGeckoSource, exchange_rate::ExchangeRateSource, static_rows,
};

/// Fetches a fresh snapshot and writes the filtered view to a PDF file.
pub async fn run(
    config: &AppConfig,
    criteria: FilterCriteria,
    output: Option<PathBuf>,
) -> Result<()> {
    let currency = ExchangeRateSource::new(config.exchange_rate_base_url(), &config.base_currency);
    let crypto = CoinGeckoSource::new(config.coingecko_base_url());
    let live: [&dyn RowSource; 2] = [&currency, &crypto];

    let (_cancel_tx, cancel_rx) = watch::channel(false);

    let pb = ui::new_spinner("Fetching market data...");
    let result = snapshot::refresh(
        &live,
        vec![static_rows::equities(), static_rows::commodities()],
        cancel_rx,
    )
    .await;
    pb.finish_and_clear();

    let mut state = DashboardState::with_criteria(criteria);
    state.replace_snapshot(result?);
    let visible = state.visible();

    let path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));
    match PdfExporter.export(&visible, &path) {
        Ok(()) => {
            println!("Exported {} rows to {}", visible.len(), path.display());
            Ok(())
        }
        Err(ExportError::Empty) => {
            // An empty view is a user-level condition, not a process failure.
            println!(
                "{}",
                ui::style_text(
                    "Nothing to export: the current filter matches no rows.",
                    ui::StyleType::Error
                )
            );
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
