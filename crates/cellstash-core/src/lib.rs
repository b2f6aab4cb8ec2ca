//! # cellstash Core
//!
//! Core primitives for cellstash: the tagged value model, records, and
//! scope tags.
//!
//! ## Overview
//!
//! A cellstash store keeps typed settings inside a tabular document. This
//! crate defines the data that flows through it, with no dependency on any
//! document API:
//!
//! - [`Value`] - tagged union over the supported value kinds
//! - [`Record`] - one key/value pair together with its owning scope
//! - [`Scope`] - a named partition of the store (empty tag = whole document)
//!
//! ## Value coercion
//!
//! Stored values are coerced to concrete Rust types through [`FromValue`],
//! which fails with a typed [`ValueError`] on a kind mismatch instead of
//! panicking:
//!
//! ```rust
//! use cellstash_core::{FromValue, Value};
//!
//! let v = Value::from(42i64);
//! assert_eq!(i64::from_value(&v).unwrap(), 42);
//! assert!(bool::from_value(&v).is_err());
//! ```

pub mod error;
pub mod record;
pub mod scope;
pub mod value;

pub use error::ValueError;
pub use record::Record;
pub use scope::Scope;
pub use value::{FromValue, Value, ValueKind};
