//! The node-kind catalog.
//!
//! Each kind is a thin instance of the same pattern: a marker type with a
//! declared type-name prefix, a documented path table into the UI layer's
//! internal storage, and kind-specific accessors built on the resolver.
//! This is the in-scope slice of a much larger catalog.

mod group;
mod lazy_stack;
mod text;

pub use group::Group;
pub use lazy_stack::{HorizontalAlignment, LazyStack, PinnedViews};
pub use text::Text;
