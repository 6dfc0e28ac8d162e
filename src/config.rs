use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub parser: ParserConfig,
}

#[derive(Debug, Deserialize)]
pub struct ParserConfig {
    pub provider: ProviderKind,
    #[serde(default)]
    pub yahoo: Option<YahooConfig>,
    #[serde(default)]
    pub cotoha: Option<CotohaConfig>,
}

#[derive(Debug, Deserialize)]
pub struct YahooConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CotohaConfig {
    pub base_url: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Yahoo,
    Cotoha,
    #[cfg(feature = "mock")]
    Mock,
}

impl Config {
    /// Load configuration from a TOML file with env var overrides.
    ///
    /// Falls back to defaults when the file does not exist. Credentials
    /// are never read from the file; they come from the environment at
    /// parser construction time.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str::<Self>(&content).context("failed to parse config file")?
        } else {
            Self::default()
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        if let Ok(v) = std::env::var("AKARI_PARSER_PROVIDER") {
            self.parser.provider = match v.as_str() {
                "yahoo" => ProviderKind::Yahoo,
                "cotoha" => ProviderKind::Cotoha,
                #[cfg(feature = "mock")]
                "mock" => ProviderKind::Mock,
                other => anyhow::bail!("unknown parser provider: {other}"),
            };
        }
        Ok(())
    }

    fn default() -> Self {
        Self {
            parser: ParserConfig {
                provider: ProviderKind::Yahoo,
                yahoo: None,
                cotoha: None,
            },
        }
    }
}
