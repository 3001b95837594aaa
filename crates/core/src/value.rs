//! Runtime values held by containers
//!
//! Plain data (null, bool, int, float, string, bytes, arrays, untyped
//! objects) sits next to class instances and zipped pairs. Constraints are
//! checked against the variant, never against a converted value: `Int(1)`
//! is not a `Float`, `Bytes` are not a `String`.

use crate::class::Instance;
use crate::pair::Pair;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Runtime value stored in a typed container
///
/// Values of different variants never compare equal. Floats follow IEEE-754,
/// so `NaN != NaN` and `-0.0 == 0.0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Array of values
    Array(Vec<Value>),
    /// Untyped object with string keys
    Object(HashMap<String, Value>),
    /// Instance of a registered class
    Instance(Instance),
    /// Left/right tuple produced by zip
    Pair(Box<Pair>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len() && a.iter().all(|(k, v)| b.get(k) == Some(v))
            }
            (Value::Instance(a), Value::Instance(b)) => a == b,
            (Value::Pair(a), Value::Pair(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Name reported in `InvalidType` errors; instances report their class
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
            Value::Instance(instance) => instance.class().name(),
            Value::Pair(_) => "Pair",
        }
    }

    /// The integer, if this is `Int`
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The string, if this is `String`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The instance, if this is `Instance`
    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Value::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    /// The pair, if this is `Pair`
    pub fn as_pair(&self) -> Option<&Pair> {
        match self {
            Value::Pair(pair) => Some(pair),
            _ => None,
        }
    }

    /// Unbox the pair, if this is `Pair`
    pub fn into_pair(self) -> Option<Pair> {
        match self {
            Value::Pair(pair) => Some(*pair),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Value::Instance(instance)
    }
}

impl From<Pair> for Value {
    fn from(pair: Pair) -> Self {
        Value::Pair(Box::new(pair))
    }
}
