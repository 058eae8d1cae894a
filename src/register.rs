use thiserror::Error;

use crate::binding::{BindingError, HostFunctions, Namespace};
use crate::host::{Global, Host, HostError};
use crate::model::config::ShimConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error(transparent)]
    Binding(#[from] BindingError),
    #[error(transparent)]
    Host(#[from] HostError),
    #[error("flat binding {0} is not in the namespace")]
    UnknownFlatBinding(String),
}

/// Builds the namespace and publishes it, plus any flat bindings, on `host`.
///
/// Runs once per host: a second call fails because the namespace name is
/// already taken.
pub fn register_callbacks<H: Host>(host: &mut H, config: &ShimConfig) -> Result<(), RegisterError> {
    let mut namespace = Namespace::new();
    HostFunctions::register_all(&mut namespace)?;

    let flat = config
        .namespace
        .flat
        .iter()
        .map(|name| {
            namespace
                .get(name)
                .cloned()
                .ok_or_else(|| RegisterError::UnknownFlatBinding(name.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let names = namespace.names().join(", ");
    host.publish(&config.namespace.name, Global::Namespace(namespace))?;
    tracing::info!("published {} with [{names}]", config.namespace.name);

    for entry in flat {
        let name = entry.name().to_string();
        host.publish(&name, Global::Function(entry))?;
        tracing::info!("published flat binding {name}");
    }

    Ok(())
}
