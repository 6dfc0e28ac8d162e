use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use akari_core::Akari;
use akari_parse::any::AnyParser;
use akari_parse::cotoha::CotohaParser;
#[cfg(feature = "mock")]
use akari_parse::mock::MockParser;
use akari_parse::yahoo::YahooParser;

use crate::config::{Config, ProviderKind};

mod config;

/// Generates Akari's favorite statement from Japanese text.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Text to inspect; read from stdin when omitted.
    text: Vec<String>,

    /// Path to the configuration file.
    #[arg(long, value_name = "PATH", default_value = "config/default.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    let text = if cli.text.is_empty() {
        std::io::read_to_string(std::io::stdin()).context("failed to read text from stdin")?
    } else {
        cli.text.join(" ")
    };
    let text = text.trim();
    if text.is_empty() {
        return Ok(());
    }

    let parser = create_parser(&config)?;
    tracing::debug!(provider = ?config.parser.provider, "parser configured");

    let akari = Akari::new(parser);
    let statement = akari.say(text).await?;
    if !statement.is_empty() {
        println!("{statement}");
    }

    Ok(())
}

fn create_parser(config: &Config) -> anyhow::Result<AnyParser> {
    match config.parser.provider {
        ProviderKind::Yahoo => {
            let app_id = std::env::var("AKARI_YAHOO_APP_ID")
                .context("AKARI_YAHOO_APP_ID required for the yahoo provider")?;
            let mut parser = YahooParser::new(app_id);
            if let Some(url) = config
                .parser
                .yahoo
                .as_ref()
                .and_then(|y| y.base_url.clone())
            {
                parser = parser.with_base_url(url);
            }
            Ok(AnyParser::Yahoo(parser))
        }
        ProviderKind::Cotoha => {
            let token = std::env::var("AKARI_COTOHA_ACCESS_TOKEN")
                .context("AKARI_COTOHA_ACCESS_TOKEN required for the cotoha provider")?;
            let mut parser = CotohaParser::new(token);
            if let Some(url) = config
                .parser
                .cotoha
                .as_ref()
                .and_then(|c| c.base_url.clone())
            {
                parser = parser.with_base_url(url);
            }
            Ok(AnyParser::Cotoha(parser))
        }
        #[cfg(feature = "mock")]
        ProviderKind::Mock => Ok(AnyParser::Mock(MockParser::default())),
    }
}
