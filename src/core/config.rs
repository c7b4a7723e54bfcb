use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_EXCHANGE_RATE_URL: &str = "https://api.exchangerate-api.com";
pub const DEFAULT_COINGECKO_URL: &str = "https://api.coingecko.com";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExchangeRateProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CoinGeckoProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub exchange_rate: Option<ExchangeRateProviderConfig>,
    pub coingecko: Option<CoinGeckoProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            exchange_rate: Some(ExchangeRateProviderConfig {
                base_url: DEFAULT_EXCHANGE_RATE_URL.to_string(),
            }),
            coingecko: Some(CoinGeckoProviderConfig {
                base_url: DEFAULT_COINGECKO_URL.to_string(),
            }),
        }
    }
}

fn default_base_currency() -> String {
    "USD".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// Base currency for the exchange-rate request.
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            providers: ProvidersConfig::default(),
            base_currency: default_base_currency(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to built-in
    /// defaults when no file has been set up yet.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(AppConfig::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "findash", "findash")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn exchange_rate_base_url(&self) -> &str {
        self.providers
            .exchange_rate
            .as_ref()
            .map_or(DEFAULT_EXCHANGE_RATE_URL, |p| &p.base_url)
    }

    pub fn coingecko_base_url(&self) -> &str {
        self.providers
            .coingecko
            .as_ref()
            .map_or(DEFAULT_COINGECKO_URL, |p| &p.base_url)
    }
}
