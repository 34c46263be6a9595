//! Configuration management
//!
//! Three path settings — nothing else tunes the core. Loaded from
//! environment variables with sensible defaults.

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_input_path")]
    pub input_path: String,

    #[serde(default = "default_orderbook_out_path")]
    pub orderbook_out_path: String,

    #[serde(default = "default_trades_out_path")]
    pub trades_out_path: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_input_path() -> String {
    "commands.json".to_string()
}

fn default_orderbook_out_path() -> String {
    "orderbook.json".to_string()
}

fn default_trades_out_path() -> String {
    "trades.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::default().separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
