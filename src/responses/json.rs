// responses/json.rs
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde::Serialize;

/// Serialize `value` into a 200 JSON response.
pub fn json_response<T: Serialize + ?Sized>(value: &T) -> ResultResp {
    json_with_status(200, value)
}

pub fn json_with_status<T: Serialize + ?Sized>(status: u16, value: &T) -> ResultResp {
    let body = serde_json::to_vec(value)?;

    let resp = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        // Browser front-ends call this service cross-origin.
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::from(body))
        .map_err(|_| crate::errors::ServerError::InternalError)?;

    Ok(resp)
}
