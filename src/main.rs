//! Bookshelf Server - Library Catalog Web Application

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookshelf_server::{api, config::AppConfig, repository::Repository, AppState, MIGRATOR};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "bookshelf_server={},tower_http=debug",
            config.logging.level
        )
        .into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bookshelf Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool; the engine enforces referential
    // integrity, so foreign keys must be on for every connection
    let options = SqliteConnectOptions::from_str(&config.database.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    MIGRATOR.run(&pool).await?;

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    // Create repository and application state
    let repository = Repository::new(pool);
    let state = AppState {
        config: Arc::new(config),
        repository: Arc::new(repository),
    };

    // Build router
    let app = api::router(state).layer(TraceLayer::new_for_http());

    // Start server
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
