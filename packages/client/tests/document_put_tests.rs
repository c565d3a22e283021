//! Write tests for the document client

mod common;

use common::{FIELD, client_with, record_key, stored};
use docpath_client::prelude::*;
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_replaces_list_element() {
        let (client, key) = client_with(json!({"a": [1, 2, 3]}));
        client
            .put(&key, FIELD, "$.a[1]", json!(9), None)
            .expect("Failed to put element");
        assert_eq!(stored(&client, &key), Some(json!({"a": [1, 9, 3]})));
    }

    #[test]
    fn test_put_inserts_map_entry() {
        let (client, key) = client_with(json!({"m": {"x": 1}}));
        client
            .put(&key, FIELD, "$.m.y", json!({"nested": true}), None)
            .expect("Failed to put nested entry");
        client
            .put(&key, FIELD, "$.top", json!("level"), None)
            .expect("Failed to put top-level entry");
        assert_eq!(
            stored(&client, &key),
            Some(json!({"m": {"x": 1, "y": {"nested": true}}, "top": "level"}))
        );
    }

    #[test]
    fn test_put_root_replaces_document() {
        let (client, key) = client_with(json!({"old": true}));
        client
            .put(&key, FIELD, "$", json!([1, 2]), None)
            .expect("Failed to put root");
        assert_eq!(stored(&client, &key), Some(json!([1, 2])));
    }

    #[test]
    fn test_put_creates_missing_record() {
        init();
        let client = DocumentClient::new(MemoryStore::new());
        let key = record_key();
        client
            .put(&key, FIELD, "$.fresh", json!(1), None)
            .expect("Failed to create record");
        assert_eq!(client.store().field(&key, FIELD), Some(json!({"fresh": 1})));
    }

    #[test]
    fn test_put_round_trip() {
        let (client, key) = client_with(json!({"a": [1, {"b": [0, 0]}], "m": {}}));
        for (path, value) in [
            ("$.a[0]", json!("one")),
            ("$.a[1].b[-1]", json!({"deep": [1]})),
            ("$.m['with space']", json!(null)),
            ("$.m.list", json!([true, false])),
        ] {
            client
                .put(&key, FIELD, path, value.clone(), None)
                .expect("Failed to put");
            assert_eq!(client.get(&key, FIELD, path, None).expect("Failed to get"), value);
        }
    }

    #[test]
    fn test_put_advanced_updates_every_match() {
        let (client, key) = client_with(json!({"a": [1, 2, 3], "keep": 0}));
        client
            .put(&key, FIELD, "$.a[*]", json!(0), None)
            .expect("Failed to put wildcard");
        assert_eq!(stored(&client, &key), Some(json!({"a": [0, 0, 0], "keep": 0})));
    }

    #[test]
    fn test_put_advanced_filter() {
        let (client, key) = client_with(json!({
            "tasks": [
                {"name": "a", "done": false},
                {"name": "b", "done": true},
                {"name": "c", "done": false}
            ]
        }));
        client
            .put(&key, FIELD, "$.tasks[?(@.done == false)].done", json!(true), None)
            .expect("Failed to put filtered");
        let done = client
            .get_all(&key, FIELD, "$.tasks[*].done", None)
            .expect("Failed to read flags");
        assert_eq!(done, vec![json!(true), json!(true), json!(true)]);
    }

    #[test]
    fn test_put_advanced_recursive() {
        let (client, key) = client_with(json!({"x": {"id": 1, "y": {"id": 2}}, "id": 3}));
        client
            .put(&key, FIELD, "$.x..id", json!(0), None)
            .expect("Failed to put descendants");
        assert_eq!(
            stored(&client, &key),
            Some(json!({"x": {"id": 0, "y": {"id": 0}}, "id": 3}))
        );
    }

    #[test]
    fn test_put_errors() {
        let (client, key) = client_with(json!({"a": [1, 2, 3], "n": 5}));
        let kind = |path: &str| {
            client
                .put(&key, FIELD, path, json!(0), None)
                .expect_err(path)
                .kind()
        };

        assert_eq!(kind("a"), ErrorKind::MissingRoot);
        assert_eq!(kind("$.a[1"), ErrorKind::PathSyntax);
        // Write-back target missing or wrongly shaped
        assert_eq!(kind("$.missing.x"), ErrorKind::WriteNotApplicable);
        assert_eq!(kind("$.a[10]"), ErrorKind::WriteNotApplicable);
        assert_eq!(kind("$.a.key"), ErrorKind::WriteNotApplicable);
        assert_eq!(kind("$.n[0]"), ErrorKind::WriteNotApplicable);
        // Advanced prefix that cannot be fetched
        assert_eq!(kind("$.missing[*]"), ErrorKind::ObjectNotFound);

        assert_eq!(stored(&client, &key), Some(json!({"a": [1, 2, 3], "n": 5})));
    }

    #[test]
    fn test_put_index_at_length_appends() {
        let (client, key) = client_with(json!({"a": [1]}));
        client
            .put(&key, FIELD, "$.a[1]", json!(2), None)
            .expect("Failed to put at end");
        assert_eq!(stored(&client, &key), Some(json!({"a": [1, 2]})));
    }

    #[test]
    fn test_put_round_trips() {
        let (client, key) = client_with(json!({"a": [1, 2, 3]}));
        client.put(&key, FIELD, "$.a[0]", json!(0), None).expect("simple");
        assert_eq!(client.store().stats().fetches, 0);
        assert_eq!(client.store().stats().applies, 1);

        client.put(&key, FIELD, "$.a[*]", json!(0), None).expect("advanced");
        assert_eq!(client.store().stats().fetches, 1);
        assert_eq!(client.store().stats().applies, 2);
    }

    fn init() {
        common::init_logging();
    }
}
