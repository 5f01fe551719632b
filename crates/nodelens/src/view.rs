//! Node classification and typed views.
//!
//! A [`NodeView`] pairs a kind tag with one opaque value believed to satisfy
//! it. Construction through [`classify`] is the single validation point: the
//! value's dynamic type name must start with the kind's declared prefix.
//! Child access is capability-typed: a container kind declares either a
//! single-child path or a multi-child path, never both discovered at runtime.

use std::marker::PhantomData;

use nodelens_resolve::{parse_path, resolve};
use nodelens_value::Value;

use crate::error::InspectError;

/// A declared node classification, identified by dynamic-type-name prefix.
///
/// Matching is exact-prefix against the concrete dynamic type name, never
/// substring-anywhere. Kinds are marker types; the set is closed per release
/// of the catalog.
pub trait KnownKind {
    /// The dynamic type name of a matching value must start with this.
    const TYPE_PREFIX: &'static str;
    /// Kind name used in failure reports.
    const NAME: &'static str;
}

/// A container kind holding exactly one child, at a documented path into its
/// internal storage.
pub trait SingleChildContent: KnownKind {
    const CHILD_PATH: &'static str;
}

/// A container kind holding an ordered list of children. The stored
/// representation may nest further composite lists; extraction flattens them.
pub trait MultipleChildContent: KnownKind {
    const CHILDREN_PATH: &'static str;
}

/// The unclassified kind: matches any node. Entry point for descent before
/// the caller re-classifies to a concrete kind.
#[derive(Debug)]
pub struct AnyNode;

impl KnownKind for AnyNode {
    const TYPE_PREFIX: &'static str = "";
    const NAME: &'static str = "AnyNode";
}

/// A statically-typed handle over one opaque node.
///
/// Borrowed from the inspected root for the duration of the inspection call;
/// never persisted across tree mutations.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a, K: KnownKind> {
    value: &'a Value,
    kind: PhantomData<K>,
}

/// Position a view at the root of an opaque render tree.
///
/// # Example
///
/// ```
/// use nodelens::{inspect, kinds::Text};
/// use nodelens_value::Value;
///
/// let root = Value::record("Text", [
///     ("storage", Value::record("TextStorage", [("verbatim", Value::from("Hi"))])),
/// ]);
/// let text = inspect(&root).classify::<Text>().unwrap();
/// assert_eq!(text.string().unwrap(), Some("Hi".to_string()));
/// ```
pub fn inspect(root: &Value) -> NodeView<'_, AnyNode> {
    NodeView {
        value: root,
        kind: PhantomData,
    }
}

/// Classify a value against a known kind.
///
/// The single validation point: succeeds iff the value's dynamic type name
/// starts with `K::TYPE_PREFIX`.
pub fn classify<K: KnownKind>(value: &Value) -> Result<NodeView<'_, K>, InspectError> {
    let actual = value.type_name();
    if !actual.starts_with(K::TYPE_PREFIX) {
        return Err(InspectError::KindMismatch {
            expected_prefix: K::TYPE_PREFIX.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(NodeView {
        value,
        kind: PhantomData,
    })
}

impl<'a, K: KnownKind> NodeView<'a, K> {
    /// The underlying opaque value.
    pub fn value(&self) -> &'a Value {
        self.value
    }
}

impl<'a> NodeView<'a, AnyNode> {
    /// Re-classify an unclassified node to a concrete kind.
    pub fn classify<T: KnownKind>(&self) -> Result<NodeView<'a, T>, InspectError> {
        classify::<T>(self.value)
    }

    pub(crate) fn unclassified(value: &'a Value) -> NodeView<'a, AnyNode> {
        NodeView {
            value,
            kind: PhantomData,
        }
    }
}

impl<'a, K: SingleChildContent> NodeView<'a, K> {
    /// The container's one child, unclassified.
    pub fn child(&self) -> Result<NodeView<'a, AnyNode>, InspectError> {
        let path = parse_path(K::CHILD_PATH);
        let value =
            resolve(self.value, &path).map_err(|_| InspectError::ChildNotFound {
                kind: K::NAME,
                path: K::CHILD_PATH,
            })?;
        Ok(NodeView::unclassified(value))
    }
}

impl<'a, K: MultipleChildContent> NodeView<'a, K> {
    /// The container's children in render order, flattened through any
    /// nested composite storage.
    pub fn children(&self) -> Result<Vec<NodeView<'a, AnyNode>>, InspectError> {
        let path = parse_path(K::CHILDREN_PATH);
        let missing = || InspectError::ChildNotFound {
            kind: K::NAME,
            path: K::CHILDREN_PATH,
        };
        let mut stored = resolve(self.value, &path).map_err(|_| missing())?;
        if let Value::Option(opt) = stored {
            stored = opt.as_deref().ok_or_else(missing)?;
        }
        let Value::Seq(items) = stored else {
            return Err(missing());
        };
        let mut flat = Vec::with_capacity(items.len());
        for item in items {
            flatten_into(item, &mut flat);
        }
        Ok(flat.into_iter().map(NodeView::unclassified).collect())
    }

    /// The child at `index` in the flattened render order.
    pub fn child_at(&self, index: usize) -> Result<NodeView<'a, AnyNode>, InspectError> {
        self.children()?
            .into_iter()
            .nth(index)
            .ok_or(InspectError::ChildNotFound {
                kind: K::NAME,
                path: K::CHILDREN_PATH,
            })
    }
}

/// Depth-first, order-preserving flattening of composite child storage.
/// Nested sequences are inlined; present optionals unwrap; absent optionals
/// contribute nothing.
fn flatten_into<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
    match value {
        Value::Seq(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
        Value::Option(Some(inner)) => flatten_into(inner, out),
        Value::Option(None) => {}
        other => out.push(other),
    }
}
