//! Inspection failure taxonomy.

use nodelens_resolve::ResolveError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InspectError {
    /// A declared path or selector is absent, or a resolved value has the
    /// wrong dynamic type. Most often caused by UI-layer internal-layout
    /// drift, or by calling an accessor on the wrong node kind.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// The value's dynamic type name does not start with the kind's prefix.
    #[error("expected a node with type prefix {expected_prefix:?}, found {actual:?}")]
    KindMismatch {
        expected_prefix: String,
        actual: String,
    },
    /// A container's documented child-holding path resolved to nothing.
    /// Signals that the UI layer's internal layout changed under the path
    /// constants; the primary maintenance failure mode of the whole system.
    #[error("{kind}: no child at {path:?}")]
    ChildNotFound {
        kind: &'static str,
        path: &'static str,
    },
    /// An encountered shape has no recognized handler.
    #[error("not supported: {0}")]
    NotSupported(String),
}
