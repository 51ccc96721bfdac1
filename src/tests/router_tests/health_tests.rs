use super::{get, get_json};
use crate::db::connection::Database;
use crate::tests::utils::seed_store;
use astra::{Body, Request};
use http::Method;
use serde_json::json;

#[test]
fn health_reports_ok() {
    let store = seed_store(&[]);

    let (status, body) = get_json(&store.db, "/health");
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "ok": true }));
}

#[test]
fn health_does_not_touch_the_store() {
    let db = Database::new("/nonexistent/dir/missing.db");

    let (status, body) = get_json(&db, "/health");
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "ok": true }));
}

#[test]
fn responses_are_json_with_cors() {
    let store = seed_store(&[]);

    let (resp, _) = get(&store.db, "/health");
    let header = |name: &str| {
        resp.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string()
    };
    assert_eq!(header("Content-Type"), "application/json");
    assert_eq!(header("Access-Control-Allow-Origin"), "*");
}

#[test]
fn unknown_path_is_not_found() {
    let store = seed_store(&[]);

    let (status, body) = get_json(&store.db, "/listings");
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "error": "Not Found" }));
}

#[test]
fn non_get_is_not_found() {
    let store = seed_store(&[]);

    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::POST;
    *req.uri_mut() = "/search".parse().unwrap();

    let resp = crate::router::respond(req, &store.db);
    assert_eq!(resp.status(), 404);
}
