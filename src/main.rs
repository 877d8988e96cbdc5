//! Student records API server
//!
//! Environment:
//!   JWT_SECRET     - Token signing secret (required)
//!   PORT           - Listen port (default: 3000)
//!   HOST           - Bind address (default: 0.0.0.0)
//!   TOKEN_TTL_SECS - Token lifetime (default: 3600)
//!   BCRYPT_COST    - Password hashing work factor (default: 10)
//!   RUST_LOG       - Log filter

use alunos_api::{build_router, AppState, Config};
use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment and logging
    let _ = dotenv();
    init_tracing();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;
    let addr = config.bind_addr()?;

    let state = AppState::from_config(&config);
    info!(
        "🔐 Authentication initialized (token ttl {}s, bcrypt cost {})",
        config.token_ttl_secs, config.bcrypt_cost
    );
    info!("📚 Student store seeded with {} records", state.students.len());

    let app = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("🎯 API server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alunos_api=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
