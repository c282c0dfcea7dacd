//! Runtime-value model for literal freezing.
//!
//! A [`Value`] is a fully owned description of a piece of runtime data:
//! the structural kind plus everything needed to spell it as a Go source
//! literal. Callers build the tree from their own introspection of live
//! data; this crate never mutates it.
//!
//! Because children are owned (`Box`/`Vec`), a value graph is always a
//! tree. Self-referential structures cannot be expressed, so translation
//! recursion is bounded by tree depth.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A runtime value tagged with its structural kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// The erroneous no-data, no-kind state. Not a zero value of any kind;
    /// translating it (at any depth) fails.
    Invalid,
    /// A string; emitted as a quoted, escaped literal.
    Str(String),
    /// A signed integer. All declared widths collapse to `i64`; emission
    /// is plain decimal either way.
    Int(i64),
    /// An unsigned integer, same treatment as `Int`.
    Uint(u64),
    /// A named composite record with ordered fields.
    Struct(StructValue),
    /// An array or slice.
    Slice(SliceValue),
    /// An associative map.
    Map(MapValue),
    /// A nullable indirection. `None` freezes to `nil`; `Some` freezes to
    /// `&` followed by the referent's literal.
    Pointer(Option<Box<Value>>),
    /// A function-valued datum. Only the nil case can be frozen.
    Func { is_nil: bool },
    /// Any kind outside the closed set above, best-effort.
    Scalar(ScalarValue),
}

impl Value {
    /// Shorthand for a present pointer.
    pub fn pointer_to(value: Value) -> Self {
        Value::Pointer(Some(Box::new(value)))
    }

    /// Shorthand for an absent pointer.
    pub fn nil_pointer() -> Self {
        Value::Pointer(None)
    }
}

/// A composite record: bare type name, owning package import path
/// (empty means locally defined), and fields in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructValue {
    pub name: String,
    pub package: String,
    pub fields: Vec<(String, Value)>,
}

/// A sequence with its declared element type's display name.
///
/// `elem_type` is emitted verbatim inside `[]...{`; it is not routed
/// through package qualification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceValue {
    pub elem_type: String,
    pub elements: Vec<Value>,
}

/// A map with declared key/value type display names. Entries are emitted
/// in exactly the order given here; the engine never reorders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapValue {
    pub key_type: String,
    pub elem_type: String,
    pub entries: Vec<(Value, Value)>,
}

/// Fallback payload for kinds with no dedicated literal syntax handling.
///
/// `Bool` and finite `Float` values render to text that parses back as the
/// same value. Everything else (`Verbatim`, non-finite floats) is emitted
/// as-is with no guarantee the result parses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScalarValue {
    Bool(bool),
    Float(f64),
    /// A pre-rendered native form supplied by the caller.
    Verbatim(String),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Bool(b) => write!(f, "{b}"),
            ScalarValue::Float(x) => write!(f, "{x}"),
            ScalarValue::Verbatim(s) => f.write_str(s),
        }
    }
}
