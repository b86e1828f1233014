use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

/// Runtime settings, read from the environment with sane defaults.
pub struct Config {
    pub addr: SocketAddr,
    pub cache_dir: PathBuf,
    pub source_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let addr = env::var("VLRMATCH_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .context("VLRMATCH_ADDR is not a valid socket address")?;
        let cache_dir = env::var("VLRMATCH_CACHE_DIR")
            .unwrap_or_else(|_| "data".to_string())
            .into();
        let source_url = env::var("VLRMATCH_SOURCE_URL")
            .unwrap_or_else(|_| "https://www.vlr.gg".to_string());
        Ok(Config { addr, cache_dir, source_url })
    }
}
