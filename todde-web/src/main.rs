//! todde-web - Todde car marketplace service
//!
//! Resolves configuration, opens the marketplace database read-only and
//! serves the page contexts and lookup APIs until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todde_common::config::SiteConfig;
use todde_common::db::{connect_readonly, init_database};
use todde_web::cli::Args;
use todde_web::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todde_web=info,todde_common=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting todde-web v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config = SiteConfig::resolve(&args.overrides()).context("Failed to load configuration")?;
    info!("Database path: {}", config.database_path.display());

    if !config.database_path.exists() {
        if config.create_database_if_missing {
            warn!("Database missing; creating empty schema");
            let pool = init_database(&config.database_path)
                .await
                .context("Failed to initialize database")?;
            pool.close().await;
        } else {
            error!(
                "Database not found and creation disabled: {}",
                config.database_path.display()
            );
        }
    }

    let pool = connect_readonly(&config.database_path)
        .await
        .context("Failed to open database")?;

    let state = AppState::new(pool, &config.placeholder_image_url);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("todde-web listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("todde-web stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
