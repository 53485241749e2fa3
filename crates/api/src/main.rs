use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dinefind_api::config::ServerConfig;
use dinefind_api::router::build_app_router;
use dinefind_api::state::AppState;
use dinefind_maps::{GoogleGeocoder, GooglePlaces};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dinefind_api=debug,dinefind_maps=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Refusing to start");
            std::process::exit(1);
        }
    };
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let pool = dinefind_db::create_pool(&config.database_url)
        .await
        .expect("Failed to open database");
    tracing::info!(database_url = %config.database_url, "Database connection pool created");

    dinefind_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    {
        let mut conn = pool.acquire().await.expect("Failed to acquire connection");
        dinefind_db::ensure_schema(&mut conn)
            .await
            .expect("Failed to prepare search log schema");
    }
    tracing::info!("Search log schema ready");

    // --- Map providers ---
    let http_client = config
        .maps
        .http_client()
        .expect("Failed to build HTTP client");
    let geocoder = GoogleGeocoder::new(http_client.clone(), &config.maps)
        .expect("Geocoding client misconfigured");
    let places =
        GooglePlaces::new(http_client, &config.maps).expect("Places client misconfigured");
    tracing::info!(base_url = %config.maps.base_url, "Map provider clients ready");

    // --- App state ---
    let state = AppState {
        pool: pool.clone(),
        geocoder: Arc::new(geocoder),
        places: Arc::new(places),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Server error");

    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT or (on Unix) SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
