use crate::binding::entry::CallableEntry;
use crate::binding::error::{BindingError, CallError};
use crate::binding::namespace::Namespace;
use crate::value::HostValue;

pub const ADD: &str = "add";
pub const REVERSE_STRING: &str = "reverseString";
pub const COMPILER_AND_VERSION: &str = "compilerAndVersion";

const RUSTC_VERSION: &str = env!("HOSTBIND_RUSTC_VERSION");
const TARGET: &str = env!("HOSTBIND_TARGET");

pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Reverses `s` by Unicode scalar value.
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

pub fn compiler_and_version() -> String {
    format!("{RUSTC_VERSION} ({TARGET})")
}

/// The functions every namespace exposes.
#[derive(Debug, Default)]
pub struct HostFunctions;

impl HostFunctions {
    pub fn entries() -> [CallableEntry; 3] {
        [
            CallableEntry::from_fn(ADD, 2, call_add),
            CallableEntry::from_fn(REVERSE_STRING, 1, call_reverse_string),
            CallableEntry::from_fn(COMPILER_AND_VERSION, 0, |_| {
                Ok(HostValue::Str(compiler_and_version()))
            }),
        ]
    }

    pub fn register_all(namespace: &mut Namespace) -> Result<(), BindingError> {
        for entry in Self::entries() {
            namespace.register(entry)?;
        }
        Ok(())
    }
}

fn call_add(args: &[HostValue]) -> Result<HostValue, CallError> {
    let [a, b] = args else {
        return Err(CallError::Arity {
            expected: 2,
            got: args.len(),
        });
    };
    Ok(HostValue::Int(add(int_arg(0, a)?, int_arg(1, b)?)))
}

fn call_reverse_string(args: &[HostValue]) -> Result<HostValue, CallError> {
    match args.first() {
        None | Some(HostValue::Undefined) => Ok(HostValue::Str(String::new())),
        Some(HostValue::Str(s)) => Ok(HostValue::Str(reverse_string(s))),
        Some(other) => Err(CallError::Type {
            index: 0,
            expected: "string",
            got: other.type_name(),
        }),
    }
}

fn int_arg(index: usize, value: &HostValue) -> Result<i64, CallError> {
    value.as_int().ok_or(CallError::Type {
        index,
        expected: "number",
        got: value.type_name(),
    })
}
