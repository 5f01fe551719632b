//! Style-annotated strings.
//!
//! A minimal flat attribute model: named attributes over byte ranges of the
//! reconstructed string. Ranges are byte offsets into the UTF-8 string, the
//! usual Rust convention for `str` ranges.

use std::ops::Range;

use crate::font::{FontDescriptor, FontWeight};

/// A single attribute recognized from a view-level modifier.
#[derive(Debug, Clone, PartialEq)]
pub enum TextAttribute {
    Bold(bool),
    Italic(bool),
    Font(FontDescriptor),
    FontWeight(FontWeight),
}

impl TextAttribute {
    /// The attribute's name as reported to callers.
    pub fn name(&self) -> &'static str {
        match self {
            TextAttribute::Bold(_) => "Bold",
            TextAttribute::Italic(_) => "Italic",
            TextAttribute::Font(_) => "Font",
            TextAttribute::FontWeight(_) => "FontWeight",
        }
    }
}

/// One attribute applied over one range of the string.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributedRun {
    pub range: Range<usize>,
    pub attribute: TextAttribute,
}

/// A string plus its ordered attribute runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributedText {
    string: String,
    runs: Vec<AttributedRun>,
}

impl AttributedText {
    /// An attributed string with no attributes yet.
    pub fn new(string: impl Into<String>) -> AttributedText {
        AttributedText {
            string: string.into(),
            runs: Vec::new(),
        }
    }

    pub fn string(&self) -> &str {
        &self.string
    }

    pub fn runs(&self) -> &[AttributedRun] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.string.is_empty()
    }

    /// Apply an attribute over the full string range.
    pub fn add_attribute(&mut self, attribute: TextAttribute) {
        self.runs.push(AttributedRun {
            range: 0..self.string.len(),
            attribute,
        });
    }

    /// Append another attributed string, shifting its runs past this
    /// string's end. Runs are kept in append order; no merging.
    ///
    /// # Example
    ///
    /// ```
    /// use nodelens::attributed::{AttributedText, TextAttribute};
    ///
    /// let mut a = AttributedText::new("Hello, ");
    /// a.add_attribute(TextAttribute::Bold(true));
    /// let mut b = AttributedText::new("World!");
    /// b.add_attribute(TextAttribute::Italic(true));
    /// a.append(b);
    ///
    /// assert_eq!(a.string(), "Hello, World!");
    /// assert_eq!(a.runs()[0].range, 0..7);
    /// assert_eq!(a.runs()[1].range, 7..13);
    /// ```
    pub fn append(&mut self, other: AttributedText) {
        let offset = self.string.len();
        self.string.push_str(&other.string);
        self.runs.extend(other.runs.into_iter().map(|run| AttributedRun {
            range: run.range.start + offset..run.range.end + offset,
            attribute: run.attribute,
        }));
    }

    /// The attributes whose run covers the given byte position.
    pub fn attributes_at(&self, index: usize) -> impl Iterator<Item = &TextAttribute> {
        self.runs
            .iter()
            .filter(move |run| run.range.contains(&index))
            .map(|run| &run.attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_attribute_covers_full_range() {
        let mut text = AttributedText::new("abc");
        text.add_attribute(TextAttribute::Bold(true));
        assert_eq!(text.runs().len(), 1);
        assert_eq!(text.runs()[0].range, 0..3);
    }

    #[test]
    fn test_append_shifts_ranges() {
        let mut first = AttributedText::new("Hello, ");
        first.add_attribute(TextAttribute::Bold(true));
        let mut second = AttributedText::new("World!");
        second.add_attribute(TextAttribute::Italic(true));
        first.append(second);

        assert_eq!(first.string(), "Hello, World!");
        assert_eq!(first.runs()[0].range, 0..7);
        assert_eq!(first.runs()[1].range, 7..13);
    }

    #[test]
    fn test_append_empty() {
        let mut text = AttributedText::new("abc");
        text.append(AttributedText::new(""));
        assert_eq!(text.string(), "abc");
        assert!(text.runs().is_empty());
    }

    #[test]
    fn test_attributes_at() {
        let mut first = AttributedText::new("ab");
        first.add_attribute(TextAttribute::Bold(true));
        first.append({
            let mut t = AttributedText::new("cd");
            t.add_attribute(TextAttribute::Italic(true));
            t
        });

        let at_start: Vec<&str> = first.attributes_at(0).map(|a| a.name()).collect();
        assert_eq!(at_start, vec!["Bold"]);
        let at_tail: Vec<&str> = first.attributes_at(3).map(|a| a.name()).collect();
        assert_eq!(at_tail, vec!["Italic"]);
    }
}
