//! Path-based attribute resolution over opaque values.
//!
//! The resolver walks an opaque [`Value`](nodelens_value::Value) tree by a
//! caller-declared path of field/label selectors and coerces the result to an
//! expected shape. Paths are the contract surface against the UI layer's
//! internal storage layout: when that layout drifts across releases, a path
//! stops resolving and the failure names the selector that broke.
//!
//! # Example
//!
//! ```
//! use nodelens_resolve::{parse_path, resolve_str};
//! use nodelens_value::Value;
//!
//! let node = Value::record("Text", [
//!     ("storage", Value::record("TextStorage", [
//!         ("verbatim", Value::from("Hello")),
//!     ])),
//! ]);
//!
//! let path = parse_path("storage|verbatim");
//! assert_eq!(resolve_str(&node, &path).unwrap(), "Hello");
//! ```

pub mod path;
pub mod resolve;

pub use path::{format_path, parse_path, Path, Selector};
pub use resolve::{
    resolve, resolve_bool, resolve_expect, resolve_f64, resolve_i64, resolve_seq, resolve_str,
    Expect, ResolveError,
};
