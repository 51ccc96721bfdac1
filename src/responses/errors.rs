use crate::errors::ServerError;
use crate::responses::json::json_with_status;
use astra::{Body, Response};
use http::StatusCode;
use serde_json::json;

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a JSON error response.
///
/// Store failures are logged in full but reported to the caller generically.
pub fn error_to_response(err: &ServerError) -> Response {
    let message = match err {
        ServerError::DbError(detail) => {
            tracing::error!(error = %detail, "record store failure");
            "Internal Server Error".to_string()
        }
        ServerError::BadRequest(msg) => msg.clone(),
        other => other.to_string(),
    };

    json_with_status(err.status(), &json!({ "error": message }))
        .unwrap_or_else(|_| bare_response(err.status()))
}

/// Body-less response carrying `status`, for when the JSON body can't be built.
fn bare_response(status: u16) -> Response {
    let mut resp = Response::new(Body::empty());
    *resp.status_mut() = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    resp
}
