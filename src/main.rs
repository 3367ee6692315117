use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use activities::config::ServerConfig;
use activities::web;

const BUILD_ID: &str = env!("ACTIVITIES_BUILD_ID");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("activities=info")))
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();

    // 2. Config + seed catalog
    let config = ServerConfig::from_env().context("reading configuration")?;
    let directory = activities::load_directory(&config).context("loading seed catalog")?;
    info!(
        activities = directory.len().await,
        capacity = directory.policy().as_str(),
        build = BUILD_ID,
        "activity directory ready"
    );

    // 3. Router
    let app = web::build_router(directory, &config.static_dir);

    // 4. Bind, with one fallback port
    let addr = config.socket_addr(config.port)?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback_port = config.port.checked_add(1).context("no fallback port")?;
            let fallback = config.socket_addr(fallback_port)?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback");
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("binding {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("listening on http://{}", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
