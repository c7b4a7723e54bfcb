use anyhow::Result;
use tokio::sync::watch;

use super::ui;
use crate::core::config::AppConfig;
use crate::core::{DashboardState, FilterCriteria, snapshot};
use crate::providers::{
    RowSource, coingecko::CoinGeckoSource, exchange_rate::ExchangeRateSource, static_rows,
};

/// Fetches a fresh snapshot and renders the filtered view in the terminal.
pub async fn run(config: &AppConfig, criteria: FilterCriteria) -> Result<()> {
    let currency = ExchangeRateSource::new(config.exchange_rate_base_url(), &config.base_currency);
    let crypto = CoinGeckoSource::new(config.coingecko_base_url());
    let live: [&dyn RowSource; 2] = [&currency, &crypto];

    // The sender stays alive for the whole command, so the fetch only stops
    // when a source fails or completes.
    let (_cancel_tx, cancel_rx) = watch::channel(false);

    let pb = ui::new_spinner("Fetching market data...");
    let result = snapshot::refresh(
        &live,
        vec![static_rows::equities(), static_rows::commodities()],
        cancel_rx,
    )
    .await;
    pb.finish_and_clear();
    let snapshot = result?;

    println!(
        "Market data as of {}\n",
        ui::style_text(
            &snapshot.fetched_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            ui::StyleType::Subtle
        )
    );

    let mut state = DashboardState::with_criteria(criteria);
    state.subscribe(|visible| {
        if visible.is_empty() {
            println!(
                "{}",
                ui::style_text("No rows match the current filter.", ui::StyleType::Subtle)
            );
            return;
        }
        println!("{}", ui::rows_table(visible));
        println!("\n{}", ui::rows_bars(visible));
    });
    state.replace_snapshot(snapshot);

    Ok(())
}
