//! REST API response helpers.

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::PipelineError;

/// Error tuple returned by handlers.
pub type ApiError = (StatusCode, Json<Value>);

/// HTTP status for a failed pipeline run.
///
/// Upstream failures are the gateway's fault (502); rows SIDRA sent but we
/// could not parse are ours (500).
pub fn status_for(err: &PipelineError) -> StatusCode {
    match err {
        PipelineError::Fetch(_) => StatusCode::BAD_GATEWAY,
        PipelineError::Transform(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Map a pipeline error to a handler error.
pub fn pipeline_error(err: &PipelineError) -> ApiError {
    (status_for(err), Json(error_response(&err.to_string())))
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({
        "requestId": Uuid::new_v4().to_string(),
        "status": "error",
        "error": error,
    })
}
