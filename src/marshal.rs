//! Getting host values in and out of `f64` buffers.
//!
//! The host hands over "a sequence of numbers" whose elements may turn out
//! not to be numbers at all. [`Numeric`] is the one question the kernel asks
//! of each element. [`to_buffer`] asks it of every element up front, so a
//! bad element fails the whole call before any arithmetic runs.

use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, MtrxError, Op, Operand, Result};

/// Anything that may be read as an `f64`.
pub trait Numeric {
    fn to_f64(&self) -> std::result::Result<f64, ConversionError>;
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn to_f64(&self) -> std::result::Result<f64, ConversionError> {
        (**self).to_f64()
    }
}

macro_rules! impl_numeric_as {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn to_f64(&self) -> std::result::Result<f64, ConversionError> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

impl_numeric_as!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Numeric for bool {
    fn to_f64(&self) -> std::result::Result<f64, ConversionError> {
        Ok(if *self { 1.0 } else { 0.0 })
    }
}

/// A dynamically typed element, as a scripting host would pass it.
///
/// Deserializes from any JSON value, so `serde_json::from_str::<Vec<Value>>`
/// reads a host-produced array directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
    Null,
}

impl Value {
    /// Host-side type name, used in conversion errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "str",
            Value::List(_) => "list",
            Value::Null => "None",
        }
    }
}

impl Numeric for Value {
    fn to_f64(&self) -> std::result::Result<f64, ConversionError> {
        match self {
            Value::Bool(b) => b.to_f64(),
            Value::Int(i) => i.to_f64(),
            Value::Float(x) => Ok(*x),
            other => Err(ConversionError::new(other.type_name())),
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl Numeric for serde_json::Value {
    fn to_f64(&self) -> std::result::Result<f64, ConversionError> {
        use serde_json::Value as Json;

        match self {
            Json::Number(n) => n
                .as_f64()
                .ok_or_else(|| ConversionError::new("number out of range")),
            Json::Bool(b) => b.to_f64(),
            Json::String(_) => Err(ConversionError::new("str")),
            Json::Array(_) => Err(ConversionError::new("list")),
            Json::Object(_) => Err(ConversionError::new("dict")),
            Json::Null => Err(ConversionError::new("None")),
        }
    }
}

/// Converts `items` into a fresh buffer, stopping at the first element that
/// is not numeric.
pub fn to_buffer<T: Numeric>(op: Op, operand: Operand, items: &[T]) -> Result<Vec<f64>> {
    let mut buf = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let x = item.to_f64().map_err(|source| MtrxError::Conversion {
            op,
            operand,
            index,
            source,
        })?;
        buf.push(x);
    }
    Ok(buf)
}
