use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use findash::core::log::init_logging;
use findash::core::{Category, CategoryFilter, FilterCriteria};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Category selector, mirroring the dashboard dropdown.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CategoryArg {
    All,
    Currency,
    Crypto,
    Equity,
    Commodity,
}

impl From<CategoryArg> for CategoryFilter {
    fn from(arg: CategoryArg) -> CategoryFilter {
        match arg {
            CategoryArg::All => CategoryFilter::All,
            CategoryArg::Currency => CategoryFilter::Only(Category::Currency),
            CategoryArg::Crypto => CategoryFilter::Only(Category::Crypto),
            CategoryArg::Equity => CategoryFilter::Only(Category::Equity),
            CategoryArg::Commodity => CategoryFilter::Only(Category::Commodity),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Fetch market data and display the filtered dashboard
    Show {
        /// Keep only rows of one asset class
        #[arg(long, value_enum, default_value = "all")]
        category: CategoryArg,
        /// Keep only rows whose name contains this text (case-insensitive)
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Fetch market data and export the filtered table to a PDF document
    Export {
        /// Keep only rows of one asset class
        #[arg(long, value_enum, default_value = "all")]
        category: CategoryArg,
        /// Keep only rows whose name contains this text (case-insensitive)
        #[arg(long, default_value = "")]
        name: String,
        /// Output file path (defaults to financial-data.pdf)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

impl From<Commands> for findash::AppCommand {
    fn from(cmd: Commands) -> findash::AppCommand {
        match cmd {
            Commands::Show { category, name } => findash::AppCommand::Show {
                criteria: FilterCriteria::new(category.into(), name),
            },
            Commands::Export {
                category,
                name,
                output,
            } => findash::AppCommand::Export {
                criteria: FilterCriteria::new(category.into(), name),
                output,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => findash::cli::setup::setup(),
        Some(cmd) => findash::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
