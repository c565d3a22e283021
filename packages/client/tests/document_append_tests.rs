//! Append tests for the document client

mod common;

use common::{FIELD, client_with, stored};
use docpath_client::prelude::*;
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_to_list() {
        let (client, key) = client_with(json!({"a": [1, 2, 3]}));
        client
            .append(&key, FIELD, "$.a", json!(7), None)
            .expect("Failed to append");
        assert_eq!(stored(&client, &key), Some(json!({"a": [1, 2, 3, 7]})));
    }

    #[test]
    fn test_append_to_root_list() {
        let (client, key) = client_with(json!([]));
        client
            .append(&key, FIELD, "$", json!({"x": 1}), None)
            .expect("Failed to append to root");
        assert_eq!(stored(&client, &key), Some(json!([{"x": 1}])));
    }

    #[test]
    fn test_append_to_nested_list() {
        let (client, key) = client_with(json!({"m": {"lists": [[1], [2]]}}));
        client
            .append(&key, FIELD, "$.m.lists[1]", json!(3), None)
            .expect("Failed to append");
        assert_eq!(stored(&client, &key), Some(json!({"m": {"lists": [[1], [2, 3]]}})));
    }

    #[test]
    fn test_append_to_every_matching_list() {
        let (client, key) = client_with(json!({"groups": [{"tags": ["a"]}, {"tags": []}]}));
        client
            .append(&key, FIELD, "$.groups[*].tags", json!("z"), None)
            .expect("Failed to append to matches");
        assert_eq!(
            stored(&client, &key),
            Some(json!({"groups": [{"tags": ["a", "z"]}, {"tags": ["z"]}]}))
        );
    }

    #[test]
    fn test_append_to_non_list_fails() {
        let (client, key) = client_with(json!({"n": 5, "groups": [{"tags": []}, {"tags": 1}]}));
        let error = client
            .append(&key, FIELD, "$.n", json!(1), None)
            .expect_err("append to number");
        assert_eq!(error.kind(), ErrorKind::WriteNotApplicable);

        let error = client
            .append(&key, FIELD, "$.groups[*].tags", json!(1), None)
            .expect_err("append to mixed matches");
        assert_eq!(error.kind(), ErrorKind::WriteNotApplicable);

        assert_eq!(
            stored(&client, &key),
            Some(json!({"n": 5, "groups": [{"tags": []}, {"tags": 1}]}))
        );
    }

    #[test]
    fn test_append_to_missing_path_fails() {
        let (client, key) = client_with(json!({"a": []}));
        let error = client
            .append(&key, FIELD, "$.nope", json!(1), None)
            .expect_err("missing list");
        assert_eq!(error.kind(), ErrorKind::ObjectNotFound);
    }

    #[test]
    fn test_append_with_no_matches_writes_back_unchanged() {
        let (client, key) = client_with(json!({"a": [1, 2]}));
        client
            .append(&key, FIELD, "$.a[?(@ > 5)]", json!(0), None)
            .expect("append with no matches");
        assert_eq!(stored(&client, &key), Some(json!({"a": [1, 2]})));
        assert_eq!(client.store().stats().applies, 1);
    }

    #[test]
    fn test_append_round_trips() {
        let (client, key) = client_with(json!({"a": []}));
        client.append(&key, FIELD, "$.a", json!(1), None).expect("append");
        let stats = client.store().stats();
        assert_eq!(stats.fetches, 1);
        assert_eq!(stats.applies, 1);
    }
}
