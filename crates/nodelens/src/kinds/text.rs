//! The `Text` node kind: content reconstruction and style extraction.
//!
//! Text storage has no explicit discriminant; the UI layer exposes shape
//! implicitly through which paths resolve. Reconstruction probes the three
//! known shapes top-to-bottom: a binary merge of two nested text nodes, a
//! verbatim string, and a localization-key record with substitutable
//! arguments.

use nodelens_resolve::{parse_path, resolve, resolve_bool, resolve_f64, resolve_seq, resolve_str};
use nodelens_value::Value;

use crate::attributed::{AttributedText, TextAttribute};
use crate::error::InspectError;
use crate::font::{FontDescriptor, FontDesign, FontWeight};
use crate::view::{classify, KnownKind, MultipleChildContent, NodeView, SingleChildContent};

#[derive(Debug)]
pub struct Text;

impl KnownKind for Text {
    const TYPE_PREFIX: &'static str = "Text";
    const NAME: &'static str = "Text";
}

// Path table for the Text kind's internal storage.
const MERGE_FIRST: &str = "storage|anyTextStorage|first";
const MERGE_SECOND: &str = "storage|anyTextStorage|second";
const VERBATIM: &str = "storage|verbatim";
const ANY_STORAGE: &str = "storage|anyTextStorage";
const MODIFIERS: &str = "modifiers";
const FONT_PROVIDER: &str = "@font|@some|provider|base";
const WEIGHT_OVERRIDE: &str = "@weight|@some";

// Extraction from a single-child parent
impl<'a, K: SingleChildContent> NodeView<'a, K> {
    pub fn text(&self) -> Result<NodeView<'a, Text>, InspectError> {
        self.child()?.classify()
    }
}

// Extraction from a multi-child parent
impl<'a, K: MultipleChildContent> NodeView<'a, K> {
    pub fn text_at(&self, index: usize) -> Result<NodeView<'a, Text>, InspectError> {
        self.child_at(index)?.classify()
    }
}

impl<'a> NodeView<'a, Text> {
    /// Reconstruct the node's plain text content.
    ///
    /// Returns `Ok(None)` when the node holds none of the known text shapes;
    /// callers probe "has text" this way. Format tokens outside the
    /// recognized numeric set (`%lld`, `%ld`, `%d`, `%lf`, `%f`) pass
    /// through literally and may not substitute correctly; this is a known
    /// limitation of the localization shape.
    pub fn string(&self) -> Result<Option<String>, InspectError> {
        let node = self.value();
        if let Some((first, second)) = merge_halves(node) {
            let first = classify::<Text>(first)?.string()?.unwrap_or_default();
            let second = classify::<Text>(second)?.string()?.unwrap_or_default();
            return Ok(Some(first + &second));
        }
        if let Ok(verbatim) = resolve_str(node, &parse_path(VERBATIM)) {
            return Ok(Some(verbatim.to_string()));
        }
        localized_string(node)
    }

    /// Reconstruct the node's text with its style attributes.
    ///
    /// Merged fragments keep their own attributes, ranges shifted past the
    /// first fragment's end. The style pass is all-or-nothing per node: one
    /// modifier with no recognized shape fails the whole call with
    /// [`InspectError::NotSupported`], while [`string`](Self::string) on the
    /// same node is unaffected.
    pub fn attributed_string(&self) -> Result<Option<AttributedText>, InspectError> {
        let node = self.value();
        if let Some((first, second)) = merge_halves(node) {
            let mut combined = classify::<Text>(first)?
                .attributed_string()?
                .unwrap_or_default();
            let second = classify::<Text>(second)?
                .attributed_string()?
                .unwrap_or_default();
            combined.append(second);
            return Ok(Some(combined));
        }
        let Some(string) = self.string()? else {
            return Ok(None);
        };
        let mut attributed = AttributedText::new(string);
        let modifiers = resolve_seq(node, &parse_path(MODIFIERS)).unwrap_or_default();
        for modifier in modifiers {
            if let Some(attribute) = recognize_modifier(modifier)? {
                attributed.add_attribute(attribute);
            }
        }
        Ok(Some(attributed))
    }
}

/// The binary-merge shape: both halves resolve as nested text values.
fn merge_halves(node: &Value) -> Option<(&Value, &Value)> {
    let first = resolve(node, &parse_path(MERGE_FIRST)).ok()?;
    let second = resolve(node, &parse_path(MERGE_SECOND)).ok()?;
    Some((first, second))
}

/// The localization-key shape: a key record with a base format string, a
/// formatting flag, and an ordered typed argument list.
fn localized_string(node: &Value) -> Result<Option<String>, InspectError> {
    let Ok(storage) = resolve(node, &parse_path(ANY_STORAGE)) else {
        return Ok(None);
    };
    let Ok(key_record) = resolve(storage, &parse_path("key")) else {
        return Ok(None);
    };
    let Ok(base) = resolve_str(key_record, &parse_path("@key")) else {
        return Ok(None);
    };
    let Ok(has_formatting) = resolve_bool(key_record, &parse_path("@hasFormatting")) else {
        return Ok(None);
    };
    if !has_formatting {
        return Ok(Some(base.to_string()));
    }
    let Ok(arguments) = resolve_seq(key_record, &parse_path("@arguments")) else {
        return Ok(None);
    };
    let mut values = Vec::with_capacity(arguments.len());
    for argument in arguments {
        values.push(resolve(argument, &parse_path("@value"))?.stringify());
    }
    Ok(Some(apply_format(&rewrite_format(base), &values)))
}

/// The recognized numeric format tokens. Order matters: longer tokens must
/// rewrite before their prefixes.
const ARG_PATTERNS: [&str; 5] = ["%lld", "%ld", "%d", "%lf", "%f"];
const SUBSTITUTION: &str = "%@";

/// Rewrite every recognized numeric token to the generic substitution token.
fn rewrite_format(base: &str) -> String {
    ARG_PATTERNS
        .iter()
        .fold(base.to_string(), |format, pattern| {
            format.replace(pattern, SUBSTITUTION)
        })
}

/// Substitute arguments positionally for each substitution token. Tokens
/// beyond the argument list stay literal.
fn apply_format(format: &str, values: &[String]) -> String {
    let mut out = String::with_capacity(format.len());
    let mut rest = format;
    let mut values = values.iter();
    while let Some(pos) = rest.find(SUBSTITUTION) {
        out.push_str(&rest[..pos]);
        match values.next() {
            Some(value) => out.push_str(value),
            None => out.push_str(SUBSTITUTION),
        }
        rest = &rest[pos + SUBSTITUTION.len()..];
    }
    out.push_str(rest);
    out
}

/// Match one view-level modifier against the recognized shapes.
///
/// `Ok(None)` means the modifier matched a known shape that carries no flat
/// attribute (a non-system font provider). A modifier matching no shape at
/// all is `NotSupported` with its description.
fn recognize_modifier(modifier: &Value) -> Result<Option<TextAttribute>, InspectError> {
    let description = modifier.describe();
    if description == "bold" {
        return Ok(Some(TextAttribute::Bold(true)));
    }
    if description == "italic" {
        return Ok(Some(TextAttribute::Italic(true)));
    }
    if let Ok(provider) = resolve(modifier, &parse_path(FONT_PROVIDER)) {
        if provider.type_name() == "SystemProvider" {
            let size = resolve_f64(provider, &parse_path("size"))?;
            let weight = resolve(provider, &parse_path("weight"))?;
            let weight = FontWeight::from_value(weight)
                .ok_or_else(|| InspectError::NotSupported(weight.describe()))?;
            let design = resolve(provider, &parse_path("design"))?;
            let design = FontDesign::from_value(design)
                .ok_or_else(|| InspectError::NotSupported(design.describe()))?;
            return Ok(Some(TextAttribute::Font(FontDescriptor {
                size,
                weight,
                design,
            })));
        }
        return Ok(None);
    }
    if let Ok(weight) = resolve(modifier, &parse_path(WEIGHT_OVERRIDE)) {
        if let Some(weight) = FontWeight::from_value(weight) {
            return Ok(Some(TextAttribute::FontWeight(weight)));
        }
    }
    Err(InspectError::NotSupported(description))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_format_order() {
        assert_eq!(rewrite_format("%lld items"), "%@ items");
        assert_eq!(rewrite_format("%ld of %d"), "%@ of %@");
        assert_eq!(rewrite_format("%lf %f"), "%@ %@");
        // Unrecognized tokens stay literal
        assert_eq!(rewrite_format("%s and %x"), "%s and %x");
    }

    #[test]
    fn test_apply_format_positional() {
        assert_eq!(
            apply_format("Count: %@ items", &["5".to_string()]),
            "Count: 5 items",
        );
        assert_eq!(
            apply_format("%@ + %@", &["1".to_string(), "2".to_string()]),
            "1 + 2",
        );
    }

    #[test]
    fn test_apply_format_exhausted_arguments() {
        assert_eq!(apply_format("%@ %@", &["1".to_string()]), "1 %@");
    }
}
