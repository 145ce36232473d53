// used to print out readable forms of a value
use std::fmt;

use serde::Serialize;

/// The variant tag of a [`Value`]. Its display form is the name used in
/// type-mismatch messages.
#[derive(Eq, PartialEq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize)]
pub enum ValueType {
    Bool,
    Int,
    Float,
    Str,
}

impl ValueType {
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Bool => "Bool",
            ValueType::Int => "Int",
            ValueType::Float => "Float",
            ValueType::Str => "Str",
        }
    }
}
impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The only legal property payload. There is no implicit coercion
/// between variants.
#[derive(PartialEq, Clone, Debug)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Str(_) => ValueType::Str,
        }
    }
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}
impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Int(i)
    }
}
impl From<i32> for Value {
    fn from(i: i32) -> Value {
        Value::Int(i64::from(i))
    }
}
impl From<f64> for Value {
    fn from(x: f64) -> Value {
        Value::Float(x)
    }
}
impl From<f32> for Value {
    fn from(x: f32) -> Value {
        Value::Float(f64::from(x))
    }
}
impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Str(s)
    }
}
impl<'a> From<&'a str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(String::from(s))
    }
}

/// A Rust type that can be declared as a trait property.
///
/// Widening into a [`Value`] goes through `Into<Value>`; narrowing back
/// only succeeds when the stored variant is exactly `VALUE_TYPE`.
pub trait PropertyType: Sized + Into<Value> {
    // static stuff which needs to be implemented downstream
    const VALUE_TYPE: ValueType;
    fn narrow(value: Value) -> Option<Self>;
    // instance callable with pre-made implementation
    fn value_type(&self) -> ValueType {
        Self::VALUE_TYPE
    }
}

// ------------- Property Types --------------
impl PropertyType for bool {
    const VALUE_TYPE: ValueType = ValueType::Bool;
    fn narrow(value: Value) -> Option<bool> {
        value.as_bool()
    }
}
impl PropertyType for i64 {
    const VALUE_TYPE: ValueType = ValueType::Int;
    fn narrow(value: Value) -> Option<i64> {
        value.as_int()
    }
}
impl PropertyType for f64 {
    const VALUE_TYPE: ValueType = ValueType::Float;
    fn narrow(value: Value) -> Option<f64> {
        value.as_float()
    }
}
impl PropertyType for String {
    const VALUE_TYPE: ValueType = ValueType::Str;
    fn narrow(value: Value) -> Option<String> {
        match value {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}
