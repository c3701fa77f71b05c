//! Parameter values handed to tests.
//!
//! The engine treats parameter values as opaque slots: it stores them in
//! declaration order, binds one per invocation, and never interprets them.
//! `Value` exists so bindings and frontends share a concrete, printable type.

use serde::Serialize;
use std::fmt;

/// An opaque parameter value slot.
///
/// # Examples
///
/// ```rust
/// use vigil::value::Value;
/// let v = Value::Int(42);
/// assert_eq!(v.type_name(), "Int");
/// assert_eq!(v.to_string(), "42");
/// assert!(Value::Nil.is_nil());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub enum Value {
    #[default]
    Nil,
    Int(i64),
    Number(f64),
    Bool(bool),
    Str(String),
}

impl Value {
    /// Returns the type name of the value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "Nil",
            Value::Int(_) => "Int",
            Value::Number(_) => "Number",
            Value::Bool(_) => "Bool",
            Value::Str(_) => "Str",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Returns the contained integer if this is an `Int` value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Int(n) => write!(f, "{}", n),
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
