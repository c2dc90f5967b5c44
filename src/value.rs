/*
    Dynamically-typed call surface
*/

use crate::{parse, stringify, ConvertError};

/// A dynamically-typed argument.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Value {
    /// Returns the name of this value's type, as reported in errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

// Returns the only argument, or an arity error.
fn single(args: &[Value]) -> Result<&Value, ConvertError> {
    match args {
        [arg] => Ok(arg),
        _ => Err(ConvertError::Arity {
            received: args.len(),
        }),
    }
}

/// Calls [`stringify`] with a single number argument.
pub fn call_stringify(args: &[Value]) -> Result<String, ConvertError> {
    match single(args)? {
        Value::Number(n) => Ok(stringify(*n)),
        other => Err(ConvertError::Type {
            expected: "number",
            received: other.type_name(),
        }),
    }
}

/// Calls [`parse`] with a single string argument.
pub fn call_parse(args: &[Value]) -> Result<f64, ConvertError> {
    match single(args)? {
        Value::String(s) => parse(s),
        other => Err(ConvertError::Type {
            expected: "string",
            received: other.type_name(),
        }),
    }
}
