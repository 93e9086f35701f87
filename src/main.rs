use fantasy_api::{config::Config, espn::EspnClient, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting fantasy api server...");

    let config = Config::from_env().expect("Invalid configuration");

    let espn = EspnClient::new(&config.espn).expect("Failed to build ESPN client");

    tracing::info!(
        "Proxying league {} from {}",
        config.espn.league_id,
        config.espn.base_url
    );

    let app = fantasy_api::app(AppState::new(espn));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
