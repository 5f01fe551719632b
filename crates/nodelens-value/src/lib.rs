//! Opaque render-node value model.
//!
//! A declarative UI layer materializes its render tree as opaque,
//! heterogeneously-typed values. This crate models such values as a dynamic
//! [`Value`] tree carrying dynamic type names, named storage fields, and
//! labeled case payloads, so the rest of the workspace can inspect them by
//! name without the UI layer exposing a public inspection API.
//!
//! # Example
//!
//! ```
//! use nodelens_value::Value;
//!
//! let node = Value::record("Text", [
//!     ("storage", Value::record("TextStorage", [
//!         ("verbatim", Value::from("Hello")),
//!     ])),
//! ]);
//!
//! assert_eq!(node.type_name(), "Text");
//! assert_eq!(node.field("storage").unwrap().type_name(), "TextStorage");
//! ```

pub mod from_json;
pub mod value;

pub use from_json::{from_json, FromJsonError};
pub use value::{Case, Record, Value};
