//! The attribute resolver.

use nodelens_value::Value;
use thiserror::Error;

use crate::path::{format_path, Selector};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A selector had no match at some step of the walk. Resolution is
    /// atomic, so no partial value is ever returned alongside this.
    #[error("no value at {path:?}: selector {selector:?} did not resolve")]
    NotFound { path: String, selector: String },
    /// The resolved value's dynamic type does not match the expected one.
    #[error("expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

fn not_found(path: &[Selector], selector: &Selector) -> ResolveError {
    ResolveError::NotFound {
        path: format_path(path),
        selector: selector.to_string(),
    }
}

/// Expected shape of a resolved value.
///
/// Structural expectations name a value shape; `Named` requires an exact
/// dynamic type name (used for records like `"SystemProvider"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect<'a> {
    Str,
    Bool,
    Int,
    Float,
    Seq,
    Record,
    Case,
    Named(&'a str),
}

impl Expect<'_> {
    fn matches(&self, value: &Value) -> bool {
        match self {
            Expect::Str => matches!(value, Value::Str(_)),
            Expect::Bool => matches!(value, Value::Bool(_)),
            Expect::Int => matches!(value, Value::Int(_)),
            // Integers widen to float
            Expect::Float => matches!(value, Value::Float(_) | Value::Int(_)),
            Expect::Seq => matches!(value, Value::Seq(_)),
            Expect::Record => matches!(value, Value::Record(_)),
            Expect::Case => matches!(value, Value::Case(_)),
            Expect::Named(name) => value.type_name() == *name,
        }
    }

    fn expected_name(&self) -> String {
        match self {
            Expect::Str => "String".to_string(),
            Expect::Bool => "Bool".to_string(),
            Expect::Int => "Int64".to_string(),
            Expect::Float => "Float64".to_string(),
            Expect::Seq => "Array".to_string(),
            Expect::Record => "Record".to_string(),
            Expect::Case => "Case".to_string(),
            Expect::Named(name) => name.to_string(),
        }
    }
}

/// Resolve a value at a selector path.
///
/// Consumes the path selector by selector. Field selectors look up named
/// record members; label selectors enumerate the current value's labeled
/// members. Absent/present wrappers are transparent: a present wrapper
/// unwraps before the next selector applies, an absent wrapper fails the
/// walk with [`ResolveError::NotFound`] naming the selector. The literal
/// selector `some` addresses the wrapper itself, so paths written against
/// optional storage (`"weight|@some"`) keep working.
///
/// # Example
///
/// ```
/// use nodelens_resolve::{parse_path, resolve};
/// use nodelens_value::Value;
///
/// let root = Value::record("LazyStack", [
///     ("tree", Value::record("Tree", [("content", Value::from("child"))])),
/// ]);
/// let v = resolve(&root, &parse_path("tree|content")).unwrap();
/// assert_eq!(v, &Value::from("child"));
/// ```
pub fn resolve<'a>(root: &'a Value, path: &[Selector]) -> Result<&'a Value, ResolveError> {
    let mut current = root;
    for selector in path {
        if let Value::Option(opt) = current {
            match opt {
                None => return Err(not_found(path, selector)),
                Some(inner) => {
                    current = inner;
                    if selector.name() == "some" {
                        continue;
                    }
                }
            }
        }
        let next = match selector {
            Selector::Field(name) => current.field(name),
            Selector::Label(name) => current.label(name),
        };
        current = next.ok_or_else(|| not_found(path, selector))?;
    }
    Ok(current)
}

/// Resolve a value at a path and coerce it to an expected shape.
///
/// Coercion is a direct match, or one optional-unwrap then a match. An
/// absent optional at the end of the path is `NotFound` (the value is
/// missing, not wrongly typed); everything else that fails to match is
/// `TypeMismatch` carrying both type names.
pub fn resolve_expect<'a>(
    root: &'a Value,
    path: &[Selector],
    expect: Expect,
) -> Result<&'a Value, ResolveError> {
    let value = resolve(root, path)?;
    if expect.matches(value) {
        return Ok(value);
    }
    if let Value::Option(opt) = value {
        return match opt {
            None => {
                let selector = path.last().cloned().unwrap_or_else(|| Selector::field(""));
                Err(not_found(path, &selector))
            }
            Some(inner) if expect.matches(inner) => Ok(inner),
            Some(inner) => Err(ResolveError::TypeMismatch {
                expected: expect.expected_name(),
                actual: inner.type_name().to_string(),
            }),
        };
    }
    Err(ResolveError::TypeMismatch {
        expected: expect.expected_name(),
        actual: value.type_name().to_string(),
    })
}

/// Resolve a string at a path.
pub fn resolve_str<'a>(root: &'a Value, path: &[Selector]) -> Result<&'a str, ResolveError> {
    let value = resolve_expect(root, path, Expect::Str)?;
    Ok(value.as_str().unwrap_or_default())
}

/// Resolve a boolean at a path.
pub fn resolve_bool(root: &Value, path: &[Selector]) -> Result<bool, ResolveError> {
    let value = resolve_expect(root, path, Expect::Bool)?;
    Ok(value.as_bool().unwrap_or_default())
}

/// Resolve an integer at a path.
pub fn resolve_i64(root: &Value, path: &[Selector]) -> Result<i64, ResolveError> {
    let value = resolve_expect(root, path, Expect::Int)?;
    Ok(value.as_i64().unwrap_or_default())
}

/// Resolve a float at a path; stored integers widen.
pub fn resolve_f64(root: &Value, path: &[Selector]) -> Result<f64, ResolveError> {
    let value = resolve_expect(root, path, Expect::Float)?;
    Ok(value.as_f64().unwrap_or_default())
}

/// Resolve an ordered sequence at a path.
pub fn resolve_seq<'a>(root: &'a Value, path: &[Selector]) -> Result<&'a [Value], ResolveError> {
    let value = resolve_expect(root, path, Expect::Seq)?;
    Ok(value.as_seq().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::parse_path;

    fn text_node(verbatim: &str) -> Value {
        Value::record(
            "Text",
            [(
                "storage",
                Value::record("TextStorage", [("verbatim", Value::from(verbatim))]),
            )],
        )
    }

    #[test]
    fn test_resolve_empty_path_is_root() {
        let root = Value::from(42i64);
        assert_eq!(resolve(&root, &[]).unwrap(), &root);
    }

    #[test]
    fn test_resolve_field_walk() {
        let root = text_node("Hi");
        let v = resolve(&root, &parse_path("storage|verbatim")).unwrap();
        assert_eq!(v, &Value::from("Hi"));
    }

    #[test]
    fn test_resolve_label_walk() {
        let root = Value::record(
            "Text",
            [(
                "key",
                Value::case(
                    "LocalizedStringKey",
                    "key",
                    [("key", Value::from("fmt")), ("hasFormatting", Value::from(false))],
                ),
            )],
        );
        let v = resolve(&root, &parse_path("key|@hasFormatting")).unwrap();
        assert_eq!(v, &Value::from(false));
    }

    #[test]
    fn test_not_found_names_failing_selector() {
        let root = text_node("Hi");
        let err = resolve(&root, &parse_path("storage|missing")).unwrap_err();
        assert_eq!(
            err,
            ResolveError::NotFound {
                path: "storage|missing".to_string(),
                selector: "missing".to_string(),
            },
        );
    }

    #[test]
    fn test_transparent_optional_unwrap_mid_path() {
        let root = Value::record(
            "Layout",
            [(
                "base",
                Value::some(Value::record("Base", [("spacing", Value::from(8.0))])),
            )],
        );
        let v = resolve(&root, &parse_path("base|spacing")).unwrap();
        assert_eq!(v, &Value::from(8.0));
    }

    #[test]
    fn test_absent_optional_short_circuits() {
        let root = Value::record("Layout", [("base", Value::none())]);
        let err = resolve(&root, &parse_path("base|spacing")).unwrap_err();
        assert!(matches!(err, ResolveError::NotFound { selector, .. } if selector == "spacing"));
    }

    #[test]
    fn test_explicit_some_selector() {
        let root = Value::record(
            "Modifier",
            [("weight", Value::some(Value::unit_case("Weight", "bold")))],
        );
        let v = resolve(&root, &parse_path("weight|@some")).unwrap();
        assert_eq!(v.describe(), "bold");
    }

    #[test]
    fn test_expect_direct_match() {
        let root = text_node("Hi");
        assert_eq!(resolve_str(&root, &parse_path("storage|verbatim")).unwrap(), "Hi");
    }

    #[test]
    fn test_expect_mismatch_carries_both_names() {
        let root = text_node("Hi");
        let err = resolve_bool(&root, &parse_path("storage|verbatim")).unwrap_err();
        assert_eq!(
            err,
            ResolveError::TypeMismatch {
                expected: "Bool".to_string(),
                actual: "String".to_string(),
            },
        );
    }

    #[test]
    fn test_expect_unwraps_final_optional() {
        let root = Value::record("Layout", [("spacing", Value::some(Value::from(8.0)))]);
        assert_eq!(resolve_f64(&root, &parse_path("spacing")).unwrap(), 8.0);
    }

    #[test]
    fn test_expect_absent_final_optional_is_not_found() {
        let root = Value::record("Layout", [("spacing", Value::none())]);
        let err = resolve_f64(&root, &parse_path("spacing")).unwrap_err();
        assert!(matches!(err, ResolveError::NotFound { selector, .. } if selector == "spacing"));
    }

    #[test]
    fn test_expect_named_record() {
        let root = Value::record(
            "Font",
            [("provider", Value::record("SystemProvider", [("size", Value::from(17.0))]))],
        );
        let v = resolve_expect(&root, &parse_path("provider"), Expect::Named("SystemProvider"));
        assert!(v.is_ok());
        let err =
            resolve_expect(&root, &parse_path("provider"), Expect::Named("NamedProvider"))
                .unwrap_err();
        assert_eq!(
            err,
            ResolveError::TypeMismatch {
                expected: "NamedProvider".to_string(),
                actual: "SystemProvider".to_string(),
            },
        );
    }

    #[test]
    fn test_float_widens_stored_int() {
        let root = Value::record("Layout", [("spacing", Value::from(8i64))]);
        assert_eq!(resolve_f64(&root, &parse_path("spacing")).unwrap(), 8.0);
    }

    #[test]
    fn test_idempotent_reads() {
        let root = text_node("Hi");
        let path = parse_path("storage|verbatim");
        let first = resolve(&root, &path).unwrap().clone();
        let second = resolve(&root, &path).unwrap().clone();
        assert_eq!(first, second);
    }
}
