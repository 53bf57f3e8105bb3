//! HTTP handler functions for the traffic flow API.

use actix_web::{HttpResponse, web};
use serde::de::DeserializeOwned;
use traffic_flow_dashboard::RouteRequest;
use traffic_flow_forecast::{DEFAULT_WINDOW_HOURS, RngNoise};
use traffic_flow_server_models::{
    AnalyticsQueryParams, ApiForecast, ApiHealth, ApiWelcome, ForecastQueryParams,
    SignalOptimizeRequest,
};

use crate::{AppState, error::ApiError};

/// `GET /`
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok().json(ApiWelcome {
        message: "Welcome to the Traffic Flow API!".to_string(),
    })
}

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/status`
pub async fn status() -> HttpResponse {
    HttpResponse::Ok().json(traffic_flow_dashboard::status())
}

/// `GET /forecast`, `GET /api/traffic/predict`
///
/// Forecasts `hours` hours (default 2) past the current one.
pub async fn forecast(
    state: web::Data<AppState>,
    params: web::Query<ForecastQueryParams>,
) -> Result<HttpResponse, ApiError> {
    let hours = parse_hours(params.hours.as_deref(), state.max_forecast_hours)?;
    let location_id = params.location_id.as_deref();

    let result = match state.forecast_seed {
        Some(seed) => {
            state
                .forecaster
                .forecast(location_id, hours, &mut RngNoise::seeded(seed))
        }
        None => state
            .forecaster
            .forecast(location_id, hours, &mut RngNoise::from_entropy()),
    }?;

    Ok(HttpResponse::Ok().json(ApiForecast::from(result)))
}

/// Parses the `hours` query parameter.
///
/// Negative values are passed through so the forecaster can reject them.
fn parse_hours(raw: Option<&str>, max: i64) -> Result<i64, ApiError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_WINDOW_HOURS);
    };

    let hours: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("hours must be an integer, got {raw:?}")))?;

    if hours > max {
        return Err(ApiError::BadRequest(format!(
            "hours must be at most {max}, got {hours}"
        )));
    }

    Ok(hours)
}

/// `GET /api/traffic/current`
pub async fn current_traffic(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(traffic_flow_dashboard::current_traffic(state.clock.now()))
}

/// `GET /api/signals`
pub async fn signals() -> HttpResponse {
    HttpResponse::Ok().json(traffic_flow_dashboard::signals())
}

/// `POST /api/signals/{id}/optimize`
///
/// Accepts an optional `{ "mode": ... }` body.
pub async fn optimize_signal(
    state: web::Data<AppState>,
    path: web::Path<u32>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let SignalOptimizeRequest { mode } = parse_optional_body(&body)?;
    log::info!("Optimizing signal {id} (mode={mode:?})");

    Ok(
        HttpResponse::Ok().json(traffic_flow_dashboard::optimize_signal(
            id,
            mode.as_deref(),
            state.clock.now(),
        )),
    )
}

/// `POST /api/routes/optimize`
pub async fn optimize_route(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let request: RouteRequest = parse_optional_body(&body)?;
    log::info!(
        "Optimizing route {:?} -> {:?}",
        request.origin,
        request.destination
    );

    Ok(
        HttpResponse::Ok().json(traffic_flow_dashboard::optimize_route(
            request,
            state.clock.now(),
        )),
    )
}

/// Decodes a JSON body that may be omitted.
///
/// An empty body yields the default value. Anything else must be JSON of
/// the expected shape.
fn parse_optional_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {e}")))
}

/// `GET /api/analytics/summary`
pub async fn analytics_summary(params: web::Query<AnalyticsQueryParams>) -> HttpResponse {
    HttpResponse::Ok().json(traffic_flow_dashboard::analytics_summary(
        params.period.as_deref(),
    ))
}
