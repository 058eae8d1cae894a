pub mod entry;
pub mod error;
pub mod host_fns;
pub mod namespace;

pub use entry::{Callable, CallableEntry, FnCallable};
pub use error::{BindingError, CallError};
pub use host_fns::HostFunctions;
pub use namespace::Namespace;
