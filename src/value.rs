use std::fmt;

use smallvec::SmallVec;

/// Argument list passed to a callable. Exported functions take at most two.
pub type Args = SmallVec<[HostValue; 4]>;

/// 2^63. Floats with magnitude at or above this do not fit in an `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Drops trailing `undefined` arguments, which a host passes for parameters
/// the caller left out.
pub fn trim_undefined(args: &mut Args) {
    while args.last().is_some_and(HostValue::is_undefined) {
        args.pop();
    }
}

/// A primitive value crossing the host boundary.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HostValue {
    /// The value of an argument the caller did not supply.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Any host object or function. Its contents never cross the boundary.
    Object,
}

impl HostValue {
    /// Classifies a host number: integral values that fit are `Int`.
    pub fn from_number(number: f64) -> Self {
        if number.fract() == 0.0 && number.abs() < I64_BOUND {
            HostValue::Int(number as i64)
        } else {
            HostValue::Float(number)
        }
    }

    /// Integer view of a numeric value. Floats truncate toward zero; floats
    /// outside the `i64` range have no integer view.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            HostValue::Int(value) => Some(*value),
            HostValue::Float(value) => {
                let truncated = value.trunc();
                (truncated >= -I64_BOUND && truncated < I64_BOUND).then_some(truncated as i64)
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostValue::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, HostValue::Undefined)
    }

    /// Host-facing type name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            HostValue::Undefined => "undefined",
            HostValue::Null | HostValue::Object => "object",
            HostValue::Bool(_) => "boolean",
            HostValue::Int(_) | HostValue::Float(_) => "number",
            HostValue::Str(_) => "string",
        }
    }
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Undefined => f.write_str("undefined"),
            HostValue::Null => f.write_str("null"),
            HostValue::Object => f.write_str("[object Object]"),
            HostValue::Bool(value) => write!(f, "{value}"),
            HostValue::Int(value) => write!(f, "{value}"),
            HostValue::Float(value) => write!(f, "{value}"),
            HostValue::Str(value) => f.write_str(value),
        }
    }
}

impl From<i64> for HostValue {
    fn from(value: i64) -> Self {
        HostValue::Int(value)
    }
}

impl From<bool> for HostValue {
    fn from(value: bool) -> Self {
        HostValue::Bool(value)
    }
}

impl From<String> for HostValue {
    fn from(value: String) -> Self {
        HostValue::Str(value)
    }
}

impl From<&str> for HostValue {
    fn from(value: &str) -> Self {
        HostValue::Str(value.to_string())
    }
}
