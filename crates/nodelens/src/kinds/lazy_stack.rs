//! The `LazyStack` node kind: a lazily-rendered stack container.
//!
//! Stores its child subtree and its layout parameters in an internal `tree`
//! record; the accessors only read the stored parameters, never compute
//! layout.

use nodelens_resolve::{parse_path, resolve, resolve_i64};
use nodelens_value::Value;

use crate::error::InspectError;
use crate::view::{AnyNode, KnownKind, MultipleChildContent, NodeView, SingleChildContent};

pub struct LazyStack;

impl KnownKind for LazyStack {
    const TYPE_PREFIX: &'static str = "LazyStack";
    const NAME: &'static str = "LazyStack";
}

impl SingleChildContent for LazyStack {
    const CHILD_PATH: &'static str = "tree|content";
}

// Path table for the LazyStack kind's internal storage.
const LAYOUT: &str = "tree|root";
const ALIGNMENT: &str = "base|alignment";
const SPACING: &str = "base|spacing";
const PINNED_VIEWS: &str = "@pinnedViews|rawValue";

/// Horizontal alignment of stacked children, parsed from the stored case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlignment {
    Leading,
    Center,
    Trailing,
}

impl HorizontalAlignment {
    fn from_value(value: &Value) -> Option<HorizontalAlignment> {
        match value {
            Value::Case(c) => match c.case_name.as_str() {
                "leading" => Some(HorizontalAlignment::Leading),
                "center" => Some(HorizontalAlignment::Center),
                "trailing" => Some(HorizontalAlignment::Trailing),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Which scrollable accessory views stay pinned while the stack scrolls.
/// A bitset over the stored raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinnedViews(pub u32);

impl PinnedViews {
    pub const NONE: PinnedViews = PinnedViews(0);
    pub const HEADERS: PinnedViews = PinnedViews(1);
    pub const FOOTERS: PinnedViews = PinnedViews(2);

    pub fn contains(self, other: PinnedViews) -> bool {
        self.0 & other.0 == other.0
    }
}

// Extraction from a single-child parent
impl<'a, K: SingleChildContent> NodeView<'a, K> {
    pub fn lazy_stack(&self) -> Result<NodeView<'a, LazyStack>, InspectError> {
        self.child()?.classify()
    }
}

// Extraction from a multi-child parent
impl<'a, K: MultipleChildContent> NodeView<'a, K> {
    pub fn lazy_stack_at(&self, index: usize) -> Result<NodeView<'a, LazyStack>, InspectError> {
        self.child_at(index)?.classify()
    }
}

impl<'a> NodeView<'a, LazyStack> {
    /// The stack's content subtree, unclassified.
    pub fn content_view(&self) -> Result<NodeView<'a, AnyNode>, InspectError> {
        self.child()
    }

    /// Stored horizontal alignment of the stack's children.
    pub fn alignment(&self) -> Result<HorizontalAlignment, InspectError> {
        let value = resolve(self.layout()?, &parse_path(ALIGNMENT))?;
        HorizontalAlignment::from_value(value)
            .ok_or_else(|| InspectError::NotSupported(value.describe()))
    }

    /// Stored inter-child spacing; `None` when the stack uses the platform
    /// default.
    pub fn spacing(&self) -> Result<Option<f64>, InspectError> {
        let value = resolve(self.layout()?, &parse_path(SPACING))?;
        match value {
            Value::Option(None) => Ok(None),
            Value::Option(Some(inner)) => Ok(Some(expect_float(inner)?)),
            other => Ok(Some(expect_float(other)?)),
        }
    }

    /// Which accessory views the stack keeps pinned while scrolling.
    pub fn pinned_views(&self) -> Result<PinnedViews, InspectError> {
        let raw = resolve_i64(self.layout()?, &parse_path(PINNED_VIEWS))?;
        Ok(PinnedViews(raw as u32))
    }

    fn layout(&self) -> Result<&'a Value, InspectError> {
        Ok(resolve(self.value(), &parse_path(LAYOUT))?)
    }
}

fn expect_float(value: &Value) -> Result<f64, InspectError> {
    value.as_f64().ok_or_else(|| {
        InspectError::Resolve(nodelens_resolve::ResolveError::TypeMismatch {
            expected: "Float64".to_string(),
            actual: value.type_name().to_string(),
        })
    })
}
