//! Smart Fitness Planner Backend
//!
//! Generates weekly workout and meal plans from a user profile and tracks
//! which exercises and meals have been completed.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! - Routes: HTTP request handling and routing
//! - Services: Plan generation, completion tracking, progress aggregation
//! - Repositories: Data access
//! - Database: PostgreSQL with SQLx

use anyhow::Result;
use fitness_planner_backend::error::set_expose_error_details;
use fitness_planner_backend::{config, db, routes, state::AppState};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        "Starting Smart Fitness Planner backend"
    );

    if config::AppConfig::is_production() {
        validate_production_config(&config)?;
    }

    set_expose_error_details(config.planner.expose_error_details);

    info!("Connecting to database...");
    let db_pool = db::create_pool(&config.database).await?;

    // Production runs migrations as a separate job
    if !config::AppConfig::is_production() {
        db::run_migrations(&db_pool).await?;
    }

    let mut state = AppState::new(db_pool, config.clone());
    if config.metrics.enabled {
        if let Some(handle) = install_metrics_recorder() {
            state = state.with_metrics(handle);
        }
    }

    let app = routes::create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Install the global Prometheus recorder; metrics stay disabled on failure
fn install_metrics_recorder() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            info!("Prometheus metrics recorder installed");
            Some(handle)
        }
        Err(e) => {
            warn!("Failed to install metrics recorder: {}. Metrics will be disabled.", e);
            None
        }
    }
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "fitness_planner_backend=info,tower_http=info,sqlx=warn".into()
        } else {
            "fitness_planner_backend=debug,tower_http=debug,sqlx=warn".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Validate configuration for production deployment
fn validate_production_config(config: &config::AppConfig) -> Result<()> {
    let errors = config.production_violations();

    if config.database.url.contains("localhost") || config.database.url.contains("127.0.0.1") {
        warn!("Database URL contains localhost - ensure this is intentional for production");
    }

    if !errors.is_empty() {
        for err in &errors {
            error!("Configuration error: {}", err);
        }
        anyhow::bail!("Invalid production configuration");
    }

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
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
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
