//! HTTP API for playtime estimates
//!
//! Endpoints:
//! - GET /api/heroplaytime - Estimated playtime per hero (milliseconds)
//! - GET /api/heroplaytime/check - Consistency verdicts per hero (-1/0/1)
//! - GET /health - Health check
//!
//! Both playtime endpoints take `battletag`, `region`, `platform` and
//! `queue` query parameters; omitted ones fall back to the configured defaults.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::core::{
    validate_query, ConsistencyChecker, DurationReconstructor, QueryDefaults, QueryParams,
    RecordSource, ServiceConfig,
};
use crate::types::{CheckReport, EstimateError, Estimates, QueryError, SourceError};

/// App state
pub struct AppState {
    pub source: Arc<dyn RecordSource>,
    pub defaults: QueryDefaults,
    pub reconstructor: DurationReconstructor,
    pub checker: ConsistencyChecker,
    pub started_at: DateTime<Utc>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub started_at: DateTime<Utc>,
}

/// Request failures mapped onto HTTP statuses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Estimate(#[from] EstimateError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Query(_) => StatusCode::BAD_REQUEST,
            ApiError::Source(SourceError::ProfileNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Source(_) => StatusCode::BAD_GATEWAY,
            ApiError::Estimate(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            warn!("Request rejected: {}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Create the API router
pub fn create_router(source: Arc<dyn RecordSource>, defaults: QueryDefaults) -> Router {
    let state = Arc::new(AppState {
        source,
        defaults,
        reconstructor: DurationReconstructor::new(),
        checker: ConsistencyChecker::new(),
        started_at: Utc::now(),
    });

    Router::new()
        .route("/health", get(health))
        .route("/api/heroplaytime", get(get_playtime))
        .route("/api/heroplaytime/check", get(check_playtime))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        started_at: state.started_at,
    })
}

/// Estimated playtime per hero
async fn get_playtime(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Estimates>, ApiError> {
    let query = validate_query(&params, &state.defaults)?;
    info!(%query, "Playtime request");

    let records = state.source.fetch_raw_records(&query).await?;
    let estimates = state.reconstructor.estimate_all(&records)?;

    Ok(Json(estimates))
}

/// Consistency verdicts per hero
async fn check_playtime(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryParams>,
) -> Result<Json<CheckReport>, ApiError> {
    let query = validate_query(&params, &state.defaults)?;
    info!(%query, "Consistency check request");

    let records = state.source.fetch_raw_records(&query).await?;
    let report = state.checker.check(&records)?;

    Ok(Json(report))
}

/// Run the API server
pub async fn run_server(config: &ServiceConfig, source: Arc<dyn RecordSource>) -> std::io::Result<()> {
    let router = create_router(source, config.defaults.clone());
    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!("Playtime API running on {}", config.addr);
    info!("  GET /api/heroplaytime       - Estimated playtime");
    info!("  GET /api/heroplaytime/check - Consistency check");
    info!("  GET /health                 - Health check");
    axum::serve(listener, router).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecordsError;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::from(QueryError::UnknownQueue("x".into())), StatusCode::BAD_REQUEST),
            (ApiError::from(SourceError::ProfileNotFound("pc/eu/A-1234".into())), StatusCode::NOT_FOUND),
            (
                ApiError::from(SourceError::Records(RecordsError::DuplicateCategory("Mei".into()))),
                StatusCode::BAD_GATEWAY,
            ),
            (ApiError::from(EstimateError::EmptyInput), StatusCode::INTERNAL_SERVER_ERROR),
            (
                ApiError::from(EstimateError::ZeroAnchorPercent { category: "A".into() }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::from(EstimateError::EstimateOverflow { category: "B".into() }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status(), expected, "{}", err);
        }
    }
}
