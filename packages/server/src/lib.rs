#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the traffic flow dashboard.
//!
//! Serves hourly traffic forecasts from `/forecast` (also reachable as
//! `/api/traffic/predict`) plus the dashboard's static signal, route and
//! analytics data under `/api`.

pub mod config;
pub mod error;
mod handlers;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use traffic_flow_forecast::{Clock, Forecaster, SystemClock};

pub use config::ServerConfig;
pub use error::ApiError;

/// Shared application state.
pub struct AppState {
    /// Forecaster reading time from [`Self::clock`].
    pub forecaster: Forecaster,
    /// Clock used for forecasts and dashboard timestamps.
    pub clock: Arc<dyn Clock>,
    /// When set, every forecast is drawn from a generator with this seed.
    pub forecast_seed: Option<u64>,
    /// Largest forecast window accepted.
    pub max_forecast_hours: i64,
}

impl AppState {
    /// Builds the state for `config`, reading time from `clock`.
    #[must_use]
    pub fn new(config: &ServerConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            forecaster: Forecaster::new(clock.clone()),
            clock,
            forecast_seed: config.forecast_seed,
            max_forecast_hours: config.max_forecast_hours,
        }
    }
}

/// Registers every route of the API.
///
/// Query strings that fail to deserialize are answered with the same JSON
/// error body as every other rejected request.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .route("/", web::get().to(handlers::welcome))
    .route("/forecast", web::get().to(handlers::forecast))
    .service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/status", web::get().to(handlers::status))
            .route("/traffic/current", web::get().to(handlers::current_traffic))
            .route("/traffic/predict", web::get().to(handlers::forecast))
            .route("/signals", web::get().to(handlers::signals))
            .route(
                "/signals/{id}/optimize",
                web::post().to(handlers::optimize_signal),
            )
            .route("/routes/optimize", web::post().to(handlers::optimize_route))
            .route(
                "/analytics/summary",
                web::get().to(handlers::analytics_summary),
            ),
    );
}

/// Starts the traffic flow API server.
///
/// This is a regular async function; the caller is responsible for
/// providing the async runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    match config.forecast_seed {
        Some(seed) => log::info!("Forecasts are reproducible with seed {seed}"),
        None => log::info!("Forecasts draw fresh entropy per request"),
    }

    let state = web::Data::new(AppState::new(&config, Arc::new(SystemClock)));

    log::info!("Starting server on {}:{}", config.bind_addr, config.port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((config.bind_addr.as_str(), config.port))?
    .run()
    .await
}
