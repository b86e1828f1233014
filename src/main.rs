mod config;
mod routes;

use std::sync::Arc;

use log::info;
use tokio::net::TcpListener;
use vlr_api::cache::RecordCache;
use vlr_api::client::VlrApi;

use crate::config::Config;
use crate::routes::{AppState, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let state = AppState {
        api: Arc::new(VlrApi::with_base_url(config.source_url.clone())),
        cache: Arc::new(RecordCache::new(config.cache_dir.clone())),
    };

    let listener = TcpListener::bind(config.addr).await?;
    info!(
        "serving match reports on http://{} (cache dir: {})",
        config.addr,
        config.cache_dir.display()
    );
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
