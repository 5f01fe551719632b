//! Selector paths.

use std::fmt;

/// A single step into an opaque value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Named storage member of a record.
    Field(String),
    /// Name matched against the generic label/value enumeration (case
    /// payloads, or record fields seen through the enumeration).
    Label(String),
}

/// An ordered sequence of selectors.
pub type Path = Vec<Selector>;

impl Selector {
    pub fn field(name: impl Into<String>) -> Selector {
        Selector::Field(name.into())
    }

    pub fn label(name: impl Into<String>) -> Selector {
        Selector::Label(name.into())
    }

    /// The selector's bare name, without the label marker.
    pub fn name(&self) -> &str {
        match self {
            Selector::Field(name) | Selector::Label(name) => name,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Field(name) => f.write_str(name),
            Selector::Label(name) => write!(f, "@{name}"),
        }
    }
}

/// Parse a path string into selectors.
///
/// Steps are separated by `|`; a step prefixed with `@` is a label selector.
///
/// # Example
///
/// ```
/// use nodelens_resolve::{parse_path, Selector};
///
/// assert_eq!(parse_path(""), Vec::<Selector>::new());
/// assert_eq!(
///     parse_path("storage|@key"),
///     vec![Selector::field("storage"), Selector::label("key")],
/// );
/// ```
pub fn parse_path(path: &str) -> Path {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('|')
        .map(|step| match step.strip_prefix('@') {
            Some(label) => Selector::label(label),
            None => Selector::field(step),
        })
        .collect()
}

/// Format selectors back into a path string.
///
/// # Example
///
/// ```
/// use nodelens_resolve::{format_path, Selector};
///
/// let path = vec![Selector::field("storage"), Selector::label("key")];
/// assert_eq!(format_path(&path), "storage|@key");
/// ```
pub fn format_path(path: &[Selector]) -> String {
    path.iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_path(""), Vec::<Selector>::new());
    }

    #[test]
    fn test_parse_fields() {
        assert_eq!(
            parse_path("storage|anyTextStorage|first"),
            vec![
                Selector::field("storage"),
                Selector::field("anyTextStorage"),
                Selector::field("first"),
            ],
        );
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(
            parse_path("storage|anyTextStorage|@key"),
            vec![
                Selector::field("storage"),
                Selector::field("anyTextStorage"),
                Selector::label("key"),
            ],
        );
    }

    #[test]
    fn test_format() {
        assert_eq!(format_path(&[]), "");
        assert_eq!(
            format_path(&[Selector::field("tree"), Selector::field("content")]),
            "tree|content",
        );
        assert_eq!(
            format_path(&[Selector::field("weight"), Selector::label("some")]),
            "weight|@some",
        );
    }

    #[test]
    fn test_roundtrip() {
        let paths = vec![
            "storage|verbatim",
            "storage|anyTextStorage|first",
            "tree|root",
            "base|alignment",
            "@pinnedViews",
            "font|@some|provider|base",
        ];
        for p in paths {
            assert_eq!(format_path(&parse_path(p)), p, "roundtrip failed for {p:?}");
        }
    }
}
