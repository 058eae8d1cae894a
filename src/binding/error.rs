use thiserror::Error;

/// Failure inside a single call, before the entry name is known.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("expected {expected} argument(s), got {got}")]
    Arity { expected: usize, got: usize },
    #[error("argument {index} must be a {expected}, got {got}")]
    Type {
        index: usize,
        expected: &'static str,
        got: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("{name}: {source}")]
    Call {
        name: String,
        #[source]
        source: CallError,
    },
    #[error("entry already registered: {0}")]
    DuplicateEntry(String),
    #[error("no such entry: {0}")]
    UnknownEntry(String),
}
