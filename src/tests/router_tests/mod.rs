mod distinct_tests;
mod health_tests;

use crate::db::connection::Database;
use crate::router::respond;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// Issue a GET through the full router and return the response with its body.
pub fn get(db: &Database, uri: &str) -> (Response, String) {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();

    let mut resp = respond(req, db);

    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    let body = String::from_utf8(body_bytes).unwrap();

    (resp, body)
}

pub fn get_json(db: &Database, uri: &str) -> (u16, serde_json::Value) {
    let (resp, body) = get(db, uri);
    let value = serde_json::from_str(&body)
        .unwrap_or_else(|e| panic!("body for {uri} was not JSON ({e}): {body}"));
    (resp.status().as_u16(), value)
}
