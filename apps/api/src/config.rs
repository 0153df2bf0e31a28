use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. Without one the catalog lives in memory.
    pub database_url: Option<String>,
    /// Directory the chart PNGs are written to and served from.
    pub media_root: PathBuf,
    pub port: u16,
    pub rust_log: String,
    /// Load the demo dataset at startup when the catalog is empty.
    pub seed_on_start: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            database_url: lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()),
            media_root: lookup("MEDIA_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("media")),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            seed_on_start: match lookup("SEED_ON_START") {
                Some(v) => parse_flag(&v).context("SEED_ON_START must be true or false")?,
                None => true,
            },
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognized flag value '{other}'"),
    }
}
