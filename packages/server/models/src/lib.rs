#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the traffic flow server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the forecaster's domain types to allow independent evolution of
//! the API contract. Field names are `snake_case` to match what the
//! dashboard frontend consumes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use traffic_flow_forecast_models::{
    CongestionLevel, ForecastResult, TrafficState, Trend, timestamp,
};

/// A traffic estimate as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiTrafficState {
    /// Wall-clock time as `HH:MM`.
    pub time: String,
    /// Congestion level name.
    pub congestion: CongestionLevel,
    /// Congestion index (0-2).
    pub congestion_index: u8,
    /// Expected direction of congestion.
    pub trend: Trend,
    /// Average speed in km/h.
    pub avg_speed: u32,
    /// Expected delay in minutes.
    pub delay_minutes: u32,
}

impl From<&TrafficState> for ApiTrafficState {
    fn from(state: &TrafficState) -> Self {
        Self {
            time: state.time_label(),
            congestion: state.level,
            congestion_index: state.congestion_index(),
            trend: state.trend,
            avg_speed: state.average_speed_kph,
            delay_minutes: state.delay_minutes,
        }
    }
}

/// Response body of the forecast endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiForecast {
    /// Estimate for the current hour.
    pub current: ApiTrafficState,
    /// Estimates for the following hours, oldest first.
    pub predictions: Vec<ApiTrafficState>,
    /// When the forecast was computed.
    #[serde(with = "timestamp")]
    pub updated_at: NaiveDateTime,
}

impl From<ForecastResult> for ApiForecast {
    fn from(result: ForecastResult) -> Self {
        Self {
            current: ApiTrafficState::from(&result.current),
            predictions: result.predictions.iter().map(ApiTrafficState::from).collect(),
            updated_at: result.generated_at,
        }
    }
}

/// Query parameters for the forecast endpoint.
///
/// `hours` is kept as a string so that non-numeric input can be reported
/// as a JSON error instead of the framework's plain-text rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastQueryParams {
    /// Location to forecast for.
    pub location_id: Option<String>,
    /// Number of hours to forecast beyond the current one.
    pub hours: Option<String>,
}

/// Query parameters for the analytics summary endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsQueryParams {
    /// Reporting period, e.g. `week` or `month`.
    pub period: Option<String>,
}

/// Body of the signal optimization endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignalOptimizeRequest {
    /// Optimization mode.
    pub mode: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Root greeting.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiWelcome {
    /// Greeting text.
    pub message: String,
}

/// Error payload returned with every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable description of what went wrong.
    pub error: String,
}
