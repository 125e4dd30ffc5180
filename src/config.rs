use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub seed_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            seed_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(addr) = get("WEATHER_BIND_ADDR") {
            cfg.bind_addr = addr
                .parse()
                .with_context(|| format!("invalid WEATHER_BIND_ADDR {addr:?}"))?;
        }
        cfg.seed_file = get("WEATHER_SEED_FILE")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Ok(cfg)
    }
}
