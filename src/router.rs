use crate::db::Database;
use crate::errors::ServerError;
use crate::responses::{error_to_response, json_response, ResultResp};
use crate::search;
use crate::search::facets::{self, FacetField};
use crate::search::request::SearchRequest;
use astra::{Request, Response};
use serde_json::json;
use std::collections::HashMap;
use std::time::Instant;

/// Entry point for the server loop: route, render errors, log the outcome.
pub fn respond(req: Request, db: &Database) -> Response {
    let started = Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let resp = match handle(req, db) {
        Ok(resp) => resp,
        Err(err) => error_to_response(&err),
    };

    tracing::info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    resp
}

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/health") => json_response(&json!({ "ok": true })),
        ("GET", "/search") => {
            let params = parse_query(&req);
            let request = SearchRequest::from_query(&params);
            let result = search::run(db, &request)?;
            json_response(&result)
        }
        ("GET", "/distinct") => {
            let params = parse_query(&req);
            let field = FacetField::parse(params.get("field").map(String::as_str))?;
            json_response(&facets::distinct(db, field)?)
        }
        _ => Err(ServerError::NotFound),
    }
}

/// Decode the query string. `+` is a space; the first occurrence of a key wins.
fn parse_query(req: &Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for (k, v) in url::form_urlencoded::parse(q.as_bytes()) {
            map.entry(k.into_owned()).or_insert_with(|| v.into_owned());
        }
    }

    map
}
