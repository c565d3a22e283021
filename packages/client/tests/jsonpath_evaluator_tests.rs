//! JSONPath evaluator tests: compilation, matching and in-place mutation

mod common;

use common::sorted;
use docpath_client::jsonpath::{
    CoreJsonPathEvaluator, JsonPathExpression, JsonPathError, PathEvaluator, error::ErrorKind,
};
use serde_json::{Value, json};

fn evaluator() -> CoreJsonPathEvaluator {
    common::init_logging();
    CoreJsonPathEvaluator::new()
}

fn compile(expression: &str) -> JsonPathExpression {
    evaluator()
        .compile(expression)
        .unwrap_or_else(|error| panic!("{expression} should compile: {error}"))
}

fn bookstore() -> Value {
    json!({
        "store": {
            "book": [
                {"category": "reference", "author": "Rees", "price": 8.95},
                {"category": "fiction", "author": "Waugh", "price": 12.99},
                {"category": "fiction", "author": "Melville", "isbn": "0-553", "price": 8.99},
                {"category": "fiction", "author": "Tolkien", "isbn": "0-395", "price": 22.99}
            ],
            "bicycle": {"color": "red", "price": 19.95}
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_rejects_malformed_expressions() {
        let evaluator = evaluator();
        for expression in [
            "",
            "a.b",
            "@.a",
            "$.",
            "$..",
            "$[",
            "$.a[1",
            "$.a[1:2:0]",
            "$.a.length().b",
        ] {
            let error: JsonPathError = evaluator
                .compile(expression)
                .expect_err(expression);
            assert!(error.is_syntax(), "{expression}: {error}");
        }
    }

    #[test]
    fn test_compile_keeps_expression_text() {
        let expression = compile("$.store.book[?(@.price < 10)].author");
        assert_eq!(expression.as_str(), "$.store.book[?(@.price < 10)].author");
        assert_eq!(expression.to_string(), expression.as_str());
        assert!(expression.function().is_none());
    }

    #[test]
    fn test_singular_and_length_expressions() {
        assert!(compile("$.a['b'][0]").is_singular());
        assert!(!compile("$.a[*]").is_singular());
        assert!(compile("$.a.b.length()").is_plain_length());
        assert!(!compile("$.a[*].length()").is_plain_length());
        assert!(!compile("$.a.b").is_plain_length());
    }

    #[test]
    fn test_find_matches() {
        let evaluator = evaluator();
        let document = bookstore();
        let find = |expression: &str| sorted(evaluator.find(&compile(expression), &document));

        assert_eq!(
            find("$.store.book[*].author"),
            vec![json!("Melville"), json!("Rees"), json!("Tolkien"), json!("Waugh")]
        );
        assert_eq!(find("$.store.book[?(@.isbn)].isbn"), vec![json!("0-395"), json!("0-553")]);
        assert_eq!(
            find("$.store.book[?(@.category == 'reference' || @.price > 20)].author"),
            vec![json!("Rees"), json!("Tolkien")]
        );
        assert_eq!(find("$..color"), vec![json!("red")]);
        assert_eq!(find("$.store..price").len(), 5);
        assert_eq!(find("$.store.book[-1:].author"), vec![json!("Tolkien")]);
        assert_eq!(find("$.store.book.length()"), vec![json!(4)]);
        assert!(find("$.store.nothing[*]").is_empty());
    }

    #[test]
    fn test_locate_reports_normalized_paths() {
        let evaluator = evaluator();
        let document = bookstore();

        let located = evaluator
            .locate(&compile("$.store.book[0]"), &document)
            .expect("node expression");
        assert_eq!(located.len(), 1);
        assert_eq!(located[0].to_string(), "$['store']['book'][0]");
        assert_eq!(located[0].resolve(&document), Some(&document["store"]["book"][0]));

        let mut paths: Vec<String> = evaluator
            .locate(&compile("$.store.book[?(@.price < 9)]"), &document)
            .expect("filter expression")
            .iter()
            .map(ToString::to_string)
            .collect();
        paths.sort();
        assert_eq!(paths, vec!["$['store']['book'][0]", "$['store']['book'][2]"]);
    }

    #[test]
    fn test_locate_rejects_computed_values() {
        let error = evaluator()
            .locate(&compile("$.store.book.length()"), &bookstore())
            .expect_err("length() has no location");
        assert_eq!(error.kind, ErrorKind::Unsupported);
        assert!(!error.is_syntax());
    }

    #[test]
    fn test_update_replaces_every_match() {
        let evaluator = evaluator();
        let mut document = json!({"a": [1, 2, 3], "b": {"c": 1}});

        let updated = evaluator
            .update(&compile("$.a[*]"), &mut document, &json!(0))
            .expect("update list");
        assert_eq!(updated, 3);

        let updated = evaluator
            .update(&compile("$.b.c"), &mut document, &json!({"d": true}))
            .expect("update member");
        assert_eq!(updated, 1);

        let updated = evaluator
            .update(&compile("$.missing[*]"), &mut document, &json!(0))
            .expect("update nothing");
        assert_eq!(updated, 0);
        assert_eq!(document, json!({"a": [0, 0, 0], "b": {"c": {"d": true}}}));
    }

    #[test]
    fn test_remove_all_keeps_indices_stable() {
        let evaluator = evaluator();
        let mut document = json!({"a": [1, 5, 2, 7, 3]});

        let removed = evaluator
            .remove_all(&compile("$.a[?(@ > 2)]"), &mut document)
            .expect("remove filtered");
        assert_eq!(removed, 3);
        assert_eq!(document, json!({"a": [1, 2]}));

        let removed = evaluator
            .remove_all(&compile("$.a[0,1,0]"), &mut document)
            .expect("remove union with duplicates");
        assert_eq!(removed, 2);
        assert_eq!(document, json!({"a": []}));
    }

    #[test]
    fn test_remove_all_root_leaves_empty_object() {
        let mut document = json!([1, 2, 3]);
        let removed = evaluator()
            .remove_all(&compile("$"), &mut document)
            .expect("remove root");
        assert_eq!(removed, 1);
        assert_eq!(document, json!({}));
    }

    #[test]
    fn test_for_each_match_mut_visits_each_node_once() {
        let evaluator = evaluator();
        let mut document = json!({"groups": [{"tags": []}, {"tags": ["x"]}]});

        let visited = evaluator
            .for_each_match_mut(&compile("$.groups[*].tags"), &mut document, &mut |node: &mut Value| {
                if let Value::Array(items) = node {
                    items.push(json!("new"));
                }
                Ok(())
            })
            .expect("visit lists");
        assert_eq!(visited, 2);
        assert_eq!(
            document,
            json!({"groups": [{"tags": ["new"]}, {"tags": ["x", "new"]}]})
        );

        let error = evaluator
            .for_each_match_mut(&compile("$.groups[*]"), &mut document, &mut |_: &mut Value| {
                Err(JsonPathError::unsupported("refused"))
            })
            .expect_err("callback failure propagates");
        assert_eq!(error.kind, ErrorKind::Unsupported);
    }
}
