use super::get_json;
use crate::tests::utils::{seed_store, Seed};
use serde_json::json;

#[test]
fn distinct_lists_sorted_values() {
    let store = seed_store(&[
        Seed::new("1 Main St", "Toronto", "ON", "M5V 2T6").agent("Zed"),
        Seed::new("2 Main St", "Cooksville", "ON", "L5B 1A1").agent("Amy"),
        Seed::new("3 Main St", "Toronto", "ON", "M5V 2T7").agent(" "),
    ]);

    let (status, body) = get_json(&store.db, "/distinct?field=city");
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({ "field": "city", "values": ["Cooksville", "Toronto"], "count": 2 })
    );

    let (_, body) = get_json(&store.db, "/distinct?field=agent");
    assert_eq!(body["values"], json!(["Amy", "Zed"]));
}

#[test]
fn distinct_rejects_unknown_field() {
    let store = seed_store(&[]);

    for uri in ["/distinct", "/distinct?field=price"] {
        let (status, body) = get_json(&store.db, uri);
        assert_eq!(status, 400);
        assert_eq!(
            body,
            json!({ "error": "field must be one of city, agent, broker, state, postal" })
        );
    }
}
