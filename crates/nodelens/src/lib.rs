//! Reflective inspection of opaque render-node trees.
//!
//! Test code positions a typed [`NodeView`] at a node of a live render tree,
//! classifies it against a known kind, and extracts structural and
//! attribute-level facts: child nodes, stored layout parameters, text
//! content. The inspected tree stays read-only throughout; every accessor is
//! a pure function of already-materialized state.
//!
//! # Example
//!
//! ```
//! use nodelens::{inspect, kinds::{LazyStack, Text}};
//! use nodelens_value::Value;
//!
//! let tree = Value::record("LazyStack<Content>", [
//!     ("tree", Value::record("Tree", [
//!         ("content", Value::record("Text", [
//!             ("storage", Value::record("TextStorage", [
//!                 ("verbatim", Value::from("Hello")),
//!             ])),
//!         ])),
//!         ("root", Value::unit("LazyStackLayout")),
//!     ])),
//! ]);
//!
//! let stack = inspect(&tree).classify::<LazyStack>().unwrap();
//! let text = stack.content_view().unwrap().classify::<Text>().unwrap();
//! assert_eq!(text.string().unwrap(), Some("Hello".to_string()));
//! ```

pub mod attributed;
pub mod error;
pub mod font;
pub mod kinds;
pub mod view;

pub use attributed::{AttributedRun, AttributedText, TextAttribute};
pub use error::InspectError;
pub use font::{FontDescriptor, FontDesign, FontWeight};
pub use view::{
    classify, inspect, AnyNode, KnownKind, MultipleChildContent, NodeView, SingleChildContent,
};
