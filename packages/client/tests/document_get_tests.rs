//! Read tests for the document client
//!
//! Simple paths resolve natively; advanced suffixes run against the fetched
//! sub-document.

mod common;

use common::{FIELD, client_with, sorted_array};
use docpath_client::prelude::*;
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> serde_json::Value {
        json!({
            "store": {
                "book": [
                    {"title": "Sayings", "price": 8, "tags": ["old"]},
                    {"title": "Sword", "price": 12, "isbn": "0-553"},
                    {"title": "Moby", "price": 5}
                ],
                "bicycle": {"color": "red", "price": 20}
            },
            "a.b": {"c": 1},
            "[*]": "quoted"
        })
    }

    #[test]
    fn test_get_scalar_leaf() {
        let (client, key) = client_with(catalog());
        let title = client
            .get(&key, FIELD, "$.store.book[1].title", None)
            .expect("Failed to read title");
        assert_eq!(title, json!("Sword"));
    }

    #[test]
    fn test_get_negative_index() {
        let (client, key) = client_with(catalog());
        let title = client
            .get(&key, FIELD, "$.store.book[-1].title", None)
            .expect("Failed to read last title");
        assert_eq!(title, json!("Moby"));
    }

    #[test]
    fn test_get_root_and_trailing_wildcard_return_document() {
        let (client, key) = client_with(catalog());
        assert_eq!(client.get(&key, FIELD, "$", None).expect("root"), catalog());
        assert_eq!(client.get(&key, FIELD, "$.*", None).expect("$.*"), catalog());
        assert_eq!(
            client.get(&key, FIELD, "$.store.bicycle.*", None).expect("bicycle.*"),
            json!({"color": "red", "price": 20})
        );
    }

    #[test]
    fn test_get_quoted_keys() {
        let (client, key) = client_with(catalog());
        assert_eq!(
            client.get(&key, FIELD, "$['a.b'].c", None).expect("dotted key"),
            json!(1)
        );
        assert_eq!(
            client.get(&key, FIELD, "$['[*]']", None).expect("operator-like key"),
            json!("quoted")
        );
        assert_eq!(
            client.get(&key, FIELD, "$[\"store\"]['bicycle'].color", None).expect("double quotes"),
            json!("red")
        );
    }

    #[test]
    fn test_get_wildcard_returns_all_matches() {
        let (client, key) = client_with(catalog());
        let titles = client
            .get(&key, FIELD, "$.store.book[*].title", None)
            .expect("Failed to read titles");
        assert_eq!(
            sorted_array(titles),
            vec![json!("Moby"), json!("Sayings"), json!("Sword")]
        );
    }

    #[test]
    fn test_get_recursive_descent() {
        let (client, key) = client_with(catalog());
        let prices = client
            .get(&key, FIELD, "$..price", None)
            .expect("Failed to read prices");
        assert_eq!(
            sorted_array(prices),
            vec![json!(12), json!(20), json!(5), json!(8)]
        );
    }

    #[test]
    fn test_get_filter() {
        let (client, key) = client_with(catalog());
        let cheap = client
            .get(&key, FIELD, "$.store.book[?(@.price < 10)].title", None)
            .expect("Failed to filter");
        assert_eq!(sorted_array(cheap), vec![json!("Moby"), json!("Sayings")]);

        let with_isbn = client
            .get(&key, FIELD, "$.store.book[?(@.isbn)].title", None)
            .expect("Failed to filter on existence");
        assert_eq!(with_isbn, json!("Sword"));

        let ranged = client
            .get(&key, FIELD, "$.store.book[?(@.price > 6 && @.price <= 12)].title", None)
            .expect("Failed to filter on range");
        assert_eq!(sorted_array(ranged), vec![json!("Sayings"), json!("Sword")]);
    }

    #[test]
    fn test_get_slices_and_unions() {
        let (client, key) = client_with(json!({"a": [0, 1, 2, 3, 4, 5]}));
        assert_eq!(
            client.get(&key, FIELD, "$.a[1:3]", None).expect("slice"),
            json!([1, 2])
        );
        assert_eq!(
            client.get(&key, FIELD, "$.a[::2]", None).expect("stepped slice"),
            json!([0, 2, 4])
        );
        assert_eq!(
            client.get(&key, FIELD, "$.a[-2:]", None).expect("tail slice"),
            json!([4, 5])
        );
        assert_eq!(
            sorted_array(client.get(&key, FIELD, "$.a[0,5]", None).expect("union")),
            vec![json!(0), json!(5)]
        );
    }

    #[test]
    fn test_get_spaced_and_mixed_brackets() {
        let (client, key) = client_with(json!({"a": [0, 1, 2, 3]}));
        let get = |path: &str| client.get(&key, FIELD, path, None).expect(path);

        assert_eq!(sorted_array(get("$.a[0, 2]")), vec![json!(0), json!(2)]);
        assert_eq!(get("$.a[1::]"), json!([1, 2, 3]));
        assert_eq!(get("$.a[ 0 : 2 ]"), json!([0, 1]));
        assert_eq!(get("$.a[0,'x']"), json!(0));
        assert_eq!(get("$.a[ * ]"), json!([0, 1, 2, 3]));
    }

    #[test]
    fn test_get_slice_with_huge_step() {
        let (client, key) = client_with(json!({"a": [1, 2, 3]}));
        let value = client
            .get(&key, FIELD, "$.a[1::9223372036854775807]", None)
            .expect("Failed to read stepped slice");
        assert_eq!(value, json!(2));
    }

    #[test]
    fn test_get_single_match_collapses() {
        let (client, key) = client_with(json!({"a": [1, 2, 3]}));
        let value = client
            .get(&key, FIELD, "$.a[?(@ == 2)]", None)
            .expect("Failed to filter");
        assert_eq!(value, json!(2));
    }

    #[test]
    fn test_get_no_matches_is_empty_array() {
        let (client, key) = client_with(json!({"a": [1, 2, 3]}));
        let value = client
            .get(&key, FIELD, "$.a[?(@ > 10)]", None)
            .expect("Failed to filter");
        assert_eq!(value, json!([]));
    }

    #[test]
    fn test_get_length() {
        let (client, key) = client_with(json!({"arr": [1, 2, 3, 4], "name": "héllo"}));
        assert_eq!(
            client.get(&key, FIELD, "$.arr.length()", None).expect("array length"),
            json!(4)
        );
        assert_eq!(
            client.get(&key, FIELD, "$.name.length()", None).expect("string length"),
            json!(5)
        );
        assert_eq!(
            client.get(&key, FIELD, "$.length()", None).expect("root length"),
            json!(2)
        );
    }

    #[test]
    fn test_get_length_over_wildcard_is_a_sequence() {
        let (client, key) = client_with(json!({"x": [1, 2], "y": "abc", "z": {"k": 1}}));
        let lengths = client
            .get(&key, FIELD, "$[*].length()", None)
            .expect("Failed to read lengths");
        assert_eq!(sorted_array(lengths), vec![json!(1), json!(2), json!(3)]);
    }

    #[test]
    fn test_get_length_of_scalar_is_not_found() {
        let (client, key) = client_with(json!({"n": 5}));
        let error = client
            .get(&key, FIELD, "$.n.length()", None)
            .expect_err("length of a number");
        assert_eq!(error.kind(), ErrorKind::ObjectNotFound);
    }

    #[test]
    fn test_get_all_never_collapses() {
        let (client, key) = client_with(json!({"a": [1, 2, 3]}));
        assert_eq!(
            client.get_all(&key, FIELD, "$.a[1]", None).expect("simple"),
            vec![json!(2)]
        );
        assert_eq!(
            client.get_all(&key, FIELD, "$.a[?(@ == 2)]", None).expect("one match"),
            vec![json!(2)]
        );
        assert_eq!(
            client.get_all(&key, FIELD, "$.a.length()", None).expect("length"),
            vec![json!(3)]
        );
    }

    #[test]
    fn test_get_errors() {
        let (client, key) = client_with(json!({"a": [1, 2, 3], "m": {"k": 1}}));
        let kind = |path: &str| {
            client
                .get(&key, FIELD, path, None)
                .expect_err(path)
                .kind()
        };

        assert_eq!(kind(""), ErrorKind::MissingRoot);
        assert_eq!(kind("a.b"), ErrorKind::MissingRoot);
        assert_eq!(kind("$."), ErrorKind::PathSyntax);
        assert_eq!(kind("$.a["), ErrorKind::PathSyntax);
        assert_eq!(kind("$[]"), ErrorKind::PathSyntax);
        assert_eq!(kind("$]"), ErrorKind::PathSyntax);
        assert_eq!(kind("$.a]"), ErrorKind::PathSyntax);
        assert_eq!(kind("$.a."), ErrorKind::PathSyntax);

        // Missing container, missing key, key on list, index on map, out of range
        assert_eq!(kind("$.missing.x"), ErrorKind::ObjectNotFound);
        assert_eq!(kind("$.missing"), ErrorKind::ObjectNotFound);
        assert_eq!(kind("$.a.x"), ErrorKind::ObjectNotFound);
        assert_eq!(kind("$.m[0]"), ErrorKind::ObjectNotFound);
        assert_eq!(kind("$.a[3]"), ErrorKind::ObjectNotFound);
        assert_eq!(kind("$.missing[*]"), ErrorKind::ObjectNotFound);
    }

    #[test]
    fn test_get_error_carries_path() {
        let (client, key) = client_with(json!({}));
        let error = client
            .get(&key, FIELD, "$.missing.x", None)
            .expect_err("missing path");
        assert_eq!(error.path(), "$.missing.x");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_get_missing_record() {
        let (client, _) = client_with(json!({}));
        let other = RecordKey::new("test", "documents", 404_i64);
        let error = client.get(&other, FIELD, "$", None).expect_err("no record");
        assert_eq!(error.kind(), ErrorKind::ObjectNotFound);
    }

    #[test]
    fn test_syntax_errors_never_reach_the_store() {
        let (client, key) = client_with(json!({"a": 1}));
        let _ = client.get(&key, FIELD, "$..", None);
        let _ = client.get(&key, FIELD, "nope", None);
        assert_eq!(client.store().stats().round_trips(), 0);
        assert_eq!(client.stats().failures, 2);
    }

    #[test]
    fn test_get_round_trips() {
        let (client, key) = client_with(catalog());
        client.get(&key, FIELD, "$.store.bicycle.color", None).expect("simple");
        client.get(&key, FIELD, "$.store.book[*].price", None).expect("advanced");

        let store = client.store().stats();
        assert_eq!(store.fetches, 2);
        assert_eq!(store.applies, 0);

        let stats = client.stats();
        assert_eq!(stats.native_fetches, 2);
        assert_eq!(stats.evaluations, 1);
        assert_eq!(stats.operations, 2);
    }
}
