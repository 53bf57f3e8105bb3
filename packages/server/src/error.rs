//! Mapping of request failures onto HTTP responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use traffic_flow_forecast::ForecastError;
use traffic_flow_server_models::ApiErrorBody;

/// Errors a handler can return to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A query parameter or request body could not be used as given.
    #[error("Invalid argument: {0}")]
    BadRequest(String),

    /// The forecaster rejected the request.
    #[error(transparent)]
    Forecast(#[from] ForecastError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Forecast(ForecastError::InvalidArgument { .. }) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        log::warn!("Rejecting request: {self}");
        HttpResponse::build(self.status_code()).json(ApiErrorBody {
            error: self.to_string(),
        })
    }
}
