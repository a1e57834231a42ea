pub mod config;
pub mod crew;
pub mod db_mongo;
pub mod health;

use anyhow::Result;
use axum::{Router, routing::get};
use mongodb::Database;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::health::health_check;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::Config::from_env()?;

    let client = db_mongo::create_client(&config).await?;
    let db = db_mongo::get_database(&client, &config.db_name);

    let state = AppState { db };

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api/crew", crew::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = TcpListener::bind(&config.server_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
