//! Benchmark source configuration.
//!
//! ```toml
//! provider = "sie"
//! token_env = "BANXICO_TOKEN"
//! timeout_secs = 10
//! ```
//!
//! ```toml
//! provider = "static"
//!
//! [rates]
//! cetes_28 = 10.25
//! cetes_91 = 10.40
//! cetes_182 = 10.55
//! ```

use std::path::Path;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MarketDataError, MarketResult};
use crate::legacy::{LegacyPageSource, CF107_URL};
use crate::sie::{SieApiSource, SIE_BASE_URL};
use crate::source::{BenchmarkSource, JsonFileBenchmarkSource, StaticBenchmarkSource};
use crate::table::BenchmarkTable;

/// Which source to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Banxico SIE REST API
    #[default]
    Sie,
    /// CF107 HTML page scraper
    LegacyPage,
    /// Rates given inline under `[rates]`
    Static,
    /// JSON file named by `file`
    File,
}

/// Inline yields for the `static` provider, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticRates {
    /// 28-day yield
    pub cetes_28: Decimal,
    /// 91-day yield
    pub cetes_91: Decimal,
    /// 182-day yield
    pub cetes_182: Decimal,
}

/// Benchmark source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Source to use
    #[serde(default)]
    pub provider: ProviderKind,

    /// Override for the provider's URL (SIE base URL or CF107 page URL)
    pub url: Option<String>,

    /// SIE query token
    pub token: Option<String>,

    /// Environment variable consulted when `token` is not set
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Table file for the `file` provider
    pub file: Option<String>,

    /// Yields for the `static` provider
    pub rates: Option<StaticRates>,
}

fn default_token_env() -> String {
    "BANXICO_TOKEN".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            url: None,
            token: None,
            token_env: default_token_env(),
            timeout_secs: default_timeout_secs(),
            file: None,
            rates: None,
        }
    }
}

impl BenchmarkConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> MarketResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> MarketResult<Self> {
        toml::from_str(content).map_err(|e| MarketDataError::Config(e.to_string()))
    }

    /// HTTP timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The SIE token, from `token` or else the `token_env` variable.
    pub fn resolve_token(&self) -> MarketResult<String> {
        if let Some(token) = self.token.as_ref().filter(|t| !t.is_empty()) {
            return Ok(token.clone());
        }
        std::env::var(&self.token_env)
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                MarketDataError::Config(format!(
                    "SIE token missing: set `token` or ${}",
                    self.token_env
                ))
            })
    }

    /// Build the configured source.
    pub fn build_source(&self) -> MarketResult<Box<dyn BenchmarkSource>> {
        debug!(provider = ?self.provider, "Building benchmark source");
        match self.provider {
            ProviderKind::Sie => {
                let url = self.url.as_deref().unwrap_or(SIE_BASE_URL);
                let source = SieApiSource::new(url, self.resolve_token()?, self.timeout())?;
                Ok(Box::new(source))
            }
            ProviderKind::LegacyPage => {
                let url = self.url.as_deref().unwrap_or(CF107_URL);
                Ok(Box::new(LegacyPageSource::new(url, self.timeout())?))
            }
            ProviderKind::Static => {
                let rates = self.rates.as_ref().ok_or_else(|| {
                    MarketDataError::Config("static provider requires [rates]".into())
                })?;
                let table = BenchmarkTable::new(
                    rates.cetes_28,
                    rates.cetes_91,
                    rates.cetes_182,
                    "config",
                );
                Ok(Box::new(StaticBenchmarkSource::new(table)))
            }
            ProviderKind::File => {
                let file = self.file.as_ref().ok_or_else(|| {
                    MarketDataError::Config("file provider requires `file`".into())
                })?;
                Ok(Box::new(JsonFileBenchmarkSource::new(file)))
            }
        }
    }
}
