//! The tagged value model.
//!
//! Values are a closed sum over the kinds the store supports. Coercion to a
//! concrete Rust type is always explicit; there are no dynamic casts.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;

use crate::error::ValueError;

/// The kind of a [`Value`], used in mismatch diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    Bool,
    Text,
    Blob,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Int => "int",
            ValueKind::Bool => "bool",
            ValueKind::Text => "text",
            ValueKind::Blob => "blob",
        };
        f.write_str(name)
    }
}

/// A stored value: 64-bit integer, boolean, UTF-8 text, or an opaque
/// CBOR-encoded blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// The kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Bool(_) => ValueKind::Bool,
            Value::Text(_) => ValueKind::Text,
            Value::Blob(_) => ValueKind::Blob,
        }
    }

    /// Encode an arbitrary serde value into a `Blob` via CBOR.
    pub fn from_object<T: Serialize>(object: &T) -> Result<Self, ValueError> {
        let mut buf = Vec::new();
        ciborium::ser::into_writer(object, &mut buf)
            .map_err(|e| ValueError::Encode(e.to_string()))?;
        Ok(Value::Blob(buf))
    }

    /// Decode a `Blob` back into a typed object.
    ///
    /// Fails with a kind mismatch if the value is not a blob, and with a
    /// decode error if the CBOR payload does not fit `T`.
    pub fn to_object<T: DeserializeOwned>(&self) -> Result<T, ValueError> {
        match self {
            Value::Blob(bytes) => ciborium::de::from_reader(bytes.as_slice())
                .map_err(|e| ValueError::Decode(e.to_string())),
            other => Err(ValueError::KindMismatch {
                expected: ValueKind::Blob,
                found: other.kind(),
            }),
        }
    }

    /// Render this value into its single-cell string form.
    ///
    /// The rendering is sigil-tagged so that [`Value::parse_cell`] can
    /// recover the kind: `i:` integer, `b:` boolean, `s:` text, `x:` blob
    /// as hex.
    pub fn render_cell(&self) -> String {
        match self {
            Value::Int(n) => format!("i:{n}"),
            Value::Bool(b) => format!("b:{b}"),
            Value::Text(s) => format!("s:{s}"),
            Value::Blob(bytes) => format!("x:{}", hex::encode(bytes)),
        }
    }

    /// Parse a cell string produced by [`Value::render_cell`].
    ///
    /// Lenient on purpose: an untagged or malformed cell (e.g. hand-edited
    /// through the document UI) comes back as `Text` of the raw contents
    /// rather than an error.
    pub fn parse_cell(cell: &str) -> Value {
        let fallback = || Value::Text(cell.to_string());
        match cell.split_once(':') {
            Some(("i", rest)) => rest.parse::<i64>().map(Value::Int).unwrap_or_else(|_| fallback()),
            Some(("b", "true")) => Value::Bool(true),
            Some(("b", "false")) => Value::Bool(false),
            Some(("b", _)) => fallback(),
            Some(("s", rest)) => Value::Text(rest.to_string()),
            Some(("x", rest)) => hex::decode(rest).map(Value::Blob).unwrap_or_else(|_| fallback()),
            _ => fallback(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(s) => f.write_str(s),
            Value::Blob(bytes) => write!(f, "<blob {} bytes>", bytes.len()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Blob(bytes)
    }
}

/// Explicit coercion from a stored [`Value`] to a concrete Rust type.
///
/// Each target type accepts exactly one kind; anything else is a
/// [`ValueError::KindMismatch`].
pub trait FromValue: Sized {
    /// The kind this type coerces from.
    const KIND: ValueKind;

    /// Coerce, failing cleanly on a kind mismatch.
    fn from_value(value: &Value) -> Result<Self, ValueError>;
}

fn mismatch(expected: ValueKind, value: &Value) -> ValueError {
    ValueError::KindMismatch {
        expected,
        found: value.kind(),
    }
}

impl FromValue for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Int(n) => Ok(*n),
            other => Err(mismatch(Self::KIND, other)),
        }
    }
}

impl FromValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch(Self::KIND, other)),
        }
    }
}

impl FromValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            other => Err(mismatch(Self::KIND, other)),
        }
    }
}

impl FromValue for Vec<u8> {
    const KIND: ValueKind = ValueKind::Blob;

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Blob(bytes) => Ok(bytes.clone()),
            other => Err(mismatch(Self::KIND, other)),
        }
    }
}
