pub mod call;
#[cfg(target_arch = "wasm32")]
pub mod js;
pub mod local;

use thiserror::Error;

use crate::binding::{BindingError, CallableEntry, Namespace};

pub use local::LocalHost;

/// A value published on the host's global object.
#[derive(Debug, Clone)]
pub enum Global {
    Namespace(Namespace),
    Function(CallableEntry),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("global already published: {0}")]
    AlreadyPublished(String),
    #[error("no such global: {0}")]
    UnknownGlobal(String),
    #[error("{0} is not a function")]
    NotAFunction(String),
    #[error(transparent)]
    Binding(#[from] BindingError),
    #[error("host rejected binding: {0}")]
    Js(String),
}

/// The environment that owns published globals and calls into them.
pub trait Host {
    /// Makes `global` reachable under `name`. A name is published at most once.
    fn publish(&mut self, name: &str, global: Global) -> Result<(), HostError>;
}
