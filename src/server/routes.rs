//! HTTP API routes
//!
//! Implements the backend contract the page depends on.

use crate::api::{ErrorBody, StreetsResponse};
use crate::constants::api::{ANALYZE_PATH, STREETS_PATH};
use crate::server::mock::risk_assessment;
use crate::server::state::AppState;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::{info, warn};

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route(STREETS_PATH, get(streets_handler))
        .route(
            ANALYZE_PATH,
            post(analyze_handler).fallback(method_not_allowed_handler),
        );

    if let Some(dir) = &state.static_dir {
        router = router.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true));
    }

    router.with_state(state)
}

/// API error response
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
}

impl ApiError {
    fn bad_request(error: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(status = %self.status, error = %self.error, "Rejecting request");
        (self.status, Json(ErrorBody { error: self.error })).into_response()
    }
}

/// Street list endpoint
///
/// GET /api/streets/
async fn streets_handler(State(state): State<Arc<AppState>>) -> Json<StreetsResponse> {
    Json(StreetsResponse {
        streets: state.streets.clone(),
    })
}

/// Whether a request value counts as filled in
///
/// `null`, `false`, zero, and empty strings, arrays and objects are all
/// treated as missing.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Filled-in field of the request, if present
fn text_field<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    body.get(key).filter(|v| is_truthy(v))
}

/// Address analysis endpoint
///
/// POST /api/analyze/
async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Vec<Value>>, ApiError> {
    let request: Value =
        serde_json::from_slice(&body).map_err(|_| ApiError::bad_request("Invalid JSON"))?;

    let street = text_field(&request, "street")
        .ok_or_else(|| ApiError::bad_request("Missing 'street' field"))?;
    let house_number = text_field(&request, "houseNumber")
        .ok_or_else(|| ApiError::bad_request("Missing 'house number' field"))?;

    info!(%street, %house_number, radius = ?request.get("radius"), "Analyzing address");

    Ok(Json(risk_assessment(&state.places)))
}

async fn method_not_allowed_handler() -> ApiError {
    ApiError {
        status: StatusCode::METHOD_NOT_ALLOWED,
        error: "Only POST requests allowed".to_string(),
    }
}
