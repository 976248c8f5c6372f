//! FromValue trait for converting database values to Rust types

use crate::error::{Error, Result};
use crate::value::Value;

/// Trait for types that can be constructed from a database value.
///
/// Catalog queries run over the text protocol, so integer conversions also
/// accept decimal strings.
pub trait FromValue: Sized {
    /// Convert a database value to this type.
    fn from_value(value: Value) -> Result<Self>;
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl FromValue for i64 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Int(v) => Ok(v),
            Value::UInt(v) => v.try_into().map_err(|_| Error::TypeConversion {
                expected: "i64",
                actual: format!("uint({}) out of range", v),
            }),
            Value::String(s) => s.trim().parse().map_err(|_| Error::TypeConversion {
                expected: "i64",
                actual: format!("string({})", s),
            }),
            _ => Err(Error::TypeConversion {
                expected: "i64",
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl FromValue for u64 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::UInt(v) => Ok(v),
            Value::Int(v) => v.try_into().map_err(|_| Error::TypeConversion {
                expected: "u64",
                actual: format!("int({}) out of range", v),
            }),
            Value::String(s) => s.trim().parse().map_err(|_| Error::TypeConversion {
                expected: "u64",
                actual: format!("string({})", s),
            }),
            _ => Err(Error::TypeConversion {
                expected: "u64",
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Int(v) => Ok(v != 0),
            Value::UInt(v) => Ok(v != 0),
            Value::String(ref s) if s == "0" || s == "1" => Ok(s == "1"),
            _ => Err(Error::TypeConversion {
                expected: "bool",
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            Value::Bytes(b) => String::from_utf8(b).map_err(|e| Error::TypeConversion {
                expected: "string",
                actual: format!("invalid UTF-8: {}", e),
            }),
            Value::Int(v) => Ok(v.to_string()),
            Value::UInt(v) => Ok(v.to_string()),
            Value::Null => Err(Error::UnexpectedNull("string".to_string())),
            _ => Err(Error::TypeConversion {
                expected: "string",
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            v => T::from_value(v).map(Some),
        }
    }
}
