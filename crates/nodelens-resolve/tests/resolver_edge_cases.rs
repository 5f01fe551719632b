use nodelens_resolve::{
    format_path, parse_path, resolve, resolve_str, ResolveError, Selector,
};
use nodelens_value::Value;
use proptest::prelude::*;

fn deep_tree() -> Value {
    Value::record(
        "LazyStack",
        [(
            "tree",
            Value::record(
                "Tree",
                [
                    (
                        "content",
                        Value::record(
                            "Text",
                            [(
                                "storage",
                                Value::record(
                                    "TextStorage",
                                    [("verbatim", Value::from("leaf"))],
                                ),
                            )],
                        ),
                    ),
                    (
                        "root",
                        Value::record(
                            "Layout",
                            [(
                                "base",
                                Value::record("Base", [("spacing", Value::none())]),
                            )],
                        ),
                    ),
                ],
            ),
        )],
    )
}

#[test]
fn first_selector_resolves_second_does_not() {
    let root = deep_tree();
    // "tree" exists, "missing" does not; the failure names the second
    // selector and nothing partial comes back.
    let err = resolve(&root, &parse_path("tree|missing|verbatim")).unwrap_err();
    assert_eq!(
        err,
        ResolveError::NotFound {
            path: "tree|missing|verbatim".to_string(),
            selector: "missing".to_string(),
        },
    );
}

#[test]
fn no_matching_shape_at_root() {
    let root = Value::from("not a record");
    let err = resolve(&root, &parse_path("storage|verbatim")).unwrap_err();
    assert!(matches!(err, ResolveError::NotFound { selector, .. } if selector == "storage"));
}

#[test]
fn four_level_descent() {
    let root = deep_tree();
    assert_eq!(
        resolve_str(&root, &parse_path("tree|content|storage|verbatim")).unwrap(),
        "leaf",
    );
}

#[test]
fn label_selector_does_not_match_case_name() {
    let root = Value::record(
        "Node",
        [("mode", Value::case("Mode", "compact", [("width", Value::from(320i64))]))],
    );
    // The label enumeration exposes payload labels, not the case name.
    assert!(resolve(&root, &parse_path("mode|@compact")).is_err());
    assert!(resolve(&root, &parse_path("mode|@width")).is_ok());
}

#[test]
fn field_selector_skips_label_only_members() {
    let root = Value::record(
        "Node",
        [("mode", Value::case("Mode", "compact", [("width", Value::from(320i64))]))],
    );
    // A case has no fields; the field selector misses where the label hits.
    let err = resolve(&root, &parse_path("mode|width")).unwrap_err();
    assert!(matches!(err, ResolveError::NotFound { selector, .. } if selector == "width"));
}

#[test]
fn absent_optional_in_layout_path() {
    let root = deep_tree();
    let err = resolve(&root, &parse_path("tree|root|base|spacing|units")).unwrap_err();
    assert!(matches!(err, ResolveError::NotFound { selector, .. } if selector == "units"));
}

fn selector_strategy() -> impl Strategy<Value = Selector> {
    ("[A-Za-z][A-Za-z0-9_]{0,12}", any::<bool>()).prop_map(|(name, is_label)| {
        if is_label {
            Selector::label(name)
        } else {
            Selector::field(name)
        }
    })
}

proptest! {
    #[test]
    fn path_parse_format_roundtrip(path in prop::collection::vec(selector_strategy(), 1..8)) {
        let formatted = format_path(&path);
        prop_assert_eq!(parse_path(&formatted), path);
    }
}
