pub mod cli;
pub mod core;
pub mod export;
pub mod providers;

use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::core::FilterCriteria;
use crate::core::config::AppConfig;

/// A dashboard operation selected on the command line.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Show {
        criteria: FilterCriteria,
    },
    Export {
        criteria: FilterCriteria,
        output: Option<PathBuf>,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Dashboard starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Show { criteria } => cli::show::run(&config, criteria).await,
        AppCommand::Export { criteria, output } => {
            cli::export::run(&config, criteria, output).await
        }
    }
}
