//! Exposes a fixed set of named functions to a host environment.
//!
//! The functions live in a [`binding::Namespace`] that is published onto the
//! host's global object under a configurable name. On `wasm32` the host is
//! the JavaScript global object; elsewhere it is an in-process
//! [`host::LocalHost`].

pub mod binding;
pub mod host;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod model;
pub mod register;
pub mod value;

pub use register::{RegisterError, register_callbacks};
