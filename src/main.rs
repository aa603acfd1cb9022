use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use donor_club_server::config::{Config, StoreBackend};
use donor_club_server::routes::create_routes;
use donor_club_server::state::AppState;
use donor_club_server::store::{MemoryStore, PgStore, RecordStore};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().expect("Invalid configuration");

    let store: Arc<dyn RecordStore> = match config.store_backend {
        StoreBackend::Postgres => Arc::new(
            PgStore::connect(&config.database_url, config.database_max_connections)
                .await
                .expect("Failed to connect to database"),
        ),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, data is lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    let addr = config.bind_addr;
    let app: Router = create_routes(AppState::new(store, config));

    tracing::info!("Server running at http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
