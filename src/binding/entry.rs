use std::fmt;
use std::sync::Arc;

use crate::binding::error::{BindingError, CallError};
use crate::value::HostValue;

/// A function the host can invoke by name.
///
/// Implementations receive at most `arity()` arguments; a caller may supply
/// fewer, in which case the missing trailing arguments are simply absent.
pub trait Callable: Send + Sync {
    fn arity(&self) -> usize;

    fn invoke(&self, args: &[HostValue]) -> Result<HostValue, CallError>;
}

/// Adapts a plain function or closure into a [`Callable`].
pub struct FnCallable<F> {
    arity: usize,
    func: F,
}

impl<F> FnCallable<F>
where
    F: Fn(&[HostValue]) -> Result<HostValue, CallError> + Send + Sync,
{
    pub fn new(arity: usize, func: F) -> Self {
        Self { arity, func }
    }
}

impl<F> Callable for FnCallable<F>
where
    F: Fn(&[HostValue]) -> Result<HostValue, CallError> + Send + Sync,
{
    fn arity(&self) -> usize {
        self.arity
    }

    fn invoke(&self, args: &[HostValue]) -> Result<HostValue, CallError> {
        (self.func)(args)
    }
}

/// A named handle onto a [`Callable`]. Cloning shares the underlying function.
#[derive(Clone)]
pub struct CallableEntry {
    name: String,
    callable: Arc<dyn Callable>,
}

impl CallableEntry {
    pub fn new(name: impl Into<String>, callable: impl Callable + 'static) -> Self {
        Self {
            name: name.into(),
            callable: Arc::new(callable),
        }
    }

    pub fn from_fn<F>(name: impl Into<String>, arity: usize, func: F) -> Self
    where
        F: Fn(&[HostValue]) -> Result<HostValue, CallError> + Send + Sync + 'static,
    {
        Self::new(name, FnCallable::new(arity, func))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.callable.arity()
    }

    /// Invokes the entry. Arguments beyond the declared arity are ignored.
    pub fn invoke(&self, args: &[HostValue]) -> Result<HostValue, BindingError> {
        let args = &args[..args.len().min(self.arity())];
        self.callable
            .invoke(args)
            .map_err(|source| BindingError::Call {
                name: self.name.clone(),
                source,
            })
    }
}

impl fmt::Debug for CallableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallableEntry")
            .field("name", &self.name)
            .field("arity", &self.arity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo_len() -> CallableEntry {
        CallableEntry::from_fn("len", 2, |args| Ok(HostValue::Int(args.len() as i64)))
    }

    #[test]
    fn extra_arguments_are_dropped() {
        let entry = echo_len();
        let args = [HostValue::Int(1), HostValue::Int(2), HostValue::Int(3)];
        assert_eq!(entry.invoke(&args), Ok(HostValue::Int(2)));
    }

    #[test]
    fn errors_carry_the_entry_name() {
        let entry = CallableEntry::from_fn("fail", 0, |_| {
            Err(CallError::Arity {
                expected: 1,
                got: 0,
            })
        });
        let err = entry.invoke(&[]).unwrap_err();
        assert_eq!(err.to_string(), "fail: expected 1 argument(s), got 0");
    }

    #[test]
    fn clones_share_the_callable() {
        let entry = echo_len();
        let copy = entry.clone();
        assert_eq!(copy.name(), "len");
        assert_eq!(copy.arity(), entry.arity());
    }
}
