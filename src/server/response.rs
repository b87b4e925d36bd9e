use crate::error::VisibilityError;
use crate::types::visibility::Visibility;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::error::Error;

/// JSON body of every `/visibility` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VisibilityResponse {
    Found { min_visibility: u32 },
    Failed { error: String },
}

impl VisibilityResponse {
    pub fn found(visibility: Visibility) -> Self {
        VisibilityResponse::Found {
            min_visibility: visibility.meters(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        VisibilityResponse::Failed {
            error: error.into(),
        }
    }
}

/// A failed query, rendered as `{"error": ...}` with a status matching its cause.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<VisibilityError> for ApiError {
    fn from(err: VisibilityError) -> Self {
        let status = match &err {
            VisibilityError::Query(_) => StatusCode::BAD_REQUEST,
            VisibilityError::NoData { .. } => StatusCode::NOT_FOUND,
            VisibilityError::Extraction(_) | VisibilityError::ForecastPage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = match &err {
            // Upstream failures carry their cause chain, the rest are self-describing.
            VisibilityError::ForecastPage(_) => error_chain(&err),
            _ => err.to_string(),
        };
        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(VisibilityResponse::failed(self.message))).into_response()
    }
}

/// Last-resort response for a panicking handler.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "Unexpected internal failure".to_string()
    };
    log::error!("Handler panicked: {}", message);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(VisibilityResponse::failed(message)),
    )
        .into_response()
}

fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
