use anyhow::Context;
use tracing_subscriber::{fmt, EnvFilter};

use navfunnel_service::{build_router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cfg = Config::from_env();
    let addr = cfg.addr();
    let app = build_router(AppState::new(cfg.clone()));
    tracing::info!(core_version=%navfunnel_core::version(), addr=%addr, shrink_min=cfg.shrink.min, shrink_max=cfg.shrink.max, "starting navfunnel-service");
    let listener = tokio::net::TcpListener::bind(&addr).await.with_context(|| format!("bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
