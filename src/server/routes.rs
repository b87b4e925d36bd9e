use crate::error::VisibilityError;
use crate::server::response::{ApiError, VisibilityResponse};
use crate::server::AppState;
use crate::types::query_error::QueryError;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VisibilityQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl VisibilityQuery {
    /// Both bounds, or [`QueryError::MissingParameter`] if either is absent or blank.
    fn bounds(self) -> Result<(String, String), QueryError> {
        match (non_blank(self.start), non_blank(self.end)) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(QueryError::MissingParameter),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// `GET /visibility?start=..&end=..`
///
/// Returns `{"min_visibility": meters}` or `{"error": message}`:
/// 400 for missing or unparseable bounds, 404 when the window holds no readings and 500 when
/// the page cannot be fetched or has no forecast table.
pub async fn visibility_handler(
    State(state): State<AppState>,
    query: Result<Query<VisibilityQuery>, QueryRejection>,
) -> Result<Json<VisibilityResponse>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let (start, end) = query.bounds().map_err(VisibilityError::from)?;

    let lowest = state
        .forecast
        .min_visibility()
        .start(start)
        .end(end)
        .call()
        .await?;

    Ok(Json(VisibilityResponse::found(lowest)))
}
