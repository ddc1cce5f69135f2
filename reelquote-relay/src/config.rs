//! Relay configuration
//!
//! Resolution priority per key, highest first:
//! 1. Command-line argument
//! 2. Environment variable (via clap's env fallback)
//! 3. TOML config file (when a path is supplied)
//! 4. Compiled default

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Default bind address
pub const DEFAULT_BIND: &str = "127.0.0.1:5750";

/// Default upstream webhook (the production Zapier catch URL)
pub const DEFAULT_WEBHOOK_URL: &str = "https://hooks.zapier.com/hooks/catch/12401881/2ho0hmw/";

/// Command-line arguments
#[derive(Parser, Debug, Default)]
#[command(name = "reelquote-relay", about = "Quote submission relay service")]
pub struct Args {
    /// Bind address (host:port)
    #[arg(long, env = "REELQUOTE_BIND")]
    pub bind: Option<String>,

    /// Upstream webhook URL quotes are forwarded to
    #[arg(long, env = "REELQUOTE_WEBHOOK_URL")]
    pub webhook_url: Option<String>,

    /// Path to a TOML config file with `bind` / `webhook_url` keys
    #[arg(long, env = "REELQUOTE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Resolved relay configuration
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub bind: String,
    pub webhook_url: String,
}

impl RelayConfig {
    /// Resolve configuration from arguments, an optional config
    /// file, and compiled defaults
    pub fn resolve(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                toml::from_str::<toml::Value>(&content)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => toml::Value::Table(Default::default()),
        };

        let file_str = |key: &str| {
            file.get(key)
                .and_then(toml::Value::as_str)
                .map(str::to_string)
        };

        Ok(Self {
            bind: args
                .bind
                .clone()
                .or_else(|| file_str("bind"))
                .unwrap_or_else(|| DEFAULT_BIND.to_string()),
            webhook_url: args
                .webhook_url
                .clone()
                .or_else(|| file_str("webhook_url"))
                .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string()),
        })
    }
}
