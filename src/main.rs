use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod db;
mod error;
mod models;
mod routes;

use config::Config;
use db::PlayerDao;

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Initializing runtime environment...");

    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => fatal("Invalid configuration", e),
    };

    let dao = match PlayerDao::connect(&config.database_url).await {
        Ok(dao) => dao,
        Err(e) => fatal("Failed to connect to database", e),
    };

    if let Err(e) = dao.init_schema().await {
        fatal("Failed to prepare players collection", e);
    }

    tracing::info!("Database connection established.");

    let addr = config.addr();
    let app = routes::router(dao);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => fatal("Failed to bind to address", e),
    };

    tracing::info!("Server listening on {}", addr);

    // ConnectInfo feeds the remote address into request logs
    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        fatal("Server stopped", e);
    }
}

fn fatal(context: &str, err: impl std::fmt::Display) -> ! {
    tracing::error!("{}: {}", context, err);
    std::process::exit(1)
}
