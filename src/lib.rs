use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod espn;
pub mod mappings;
pub mod models;
pub mod routes;
pub mod scoring;
pub mod state;

use state::AppState;

/// Builds the full router. CORS answers preflight requests for every route.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // CorsLayer only sets allow-methods on preflight responses.
    let allow_methods = SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );

    Router::new()
        // Root and health
        .route("/", get(routes::health::banner))
        .route("/health", get(routes::health::health_check))

        // League endpoints
        .route("/api/teams", get(routes::teams::get_teams))
        .route("/api/standings", get(routes::standings::get_standings))
        .route("/api/standingsfull", get(routes::standings::get_standings_full))
        .route("/api/schedule", get(routes::schedule::get_schedule))
        .route("/api/roster", get(routes::roster::get_roster))
        .route("/api/scoreboard", get(routes::scoreboard::get_scoreboard))
        .route("/api/history", get(routes::history::get_history))
        .route("/api/kona", get(routes::kona::get_players))

        .layer(cors)
        .layer(allow_methods)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
