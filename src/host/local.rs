use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::binding::CallableEntry;
use crate::host::{Global, Host, HostError};
use crate::value::HostValue;

/// In-process global environment. Globals live as long as the host.
#[derive(Debug, Default)]
pub struct LocalHost {
    globals: HashMap<String, Global>,
}

impl LocalHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global(&self, name: &str) -> Option<&Global> {
        self.globals.get(name)
    }

    /// Resolves `name` or `namespace.name` to a callable entry.
    pub fn resolve(&self, target: &str) -> Result<&CallableEntry, HostError> {
        if let Some((namespace, name)) = target.split_once('.') {
            return match self.globals.get(namespace) {
                Some(Global::Namespace(ns)) => ns
                    .get(name)
                    .ok_or_else(|| HostError::NotAFunction(target.to_string())),
                Some(Global::Function(_)) => Err(HostError::NotAFunction(target.to_string())),
                None => Err(HostError::UnknownGlobal(namespace.to_string())),
            };
        }

        match self.globals.get(target) {
            Some(Global::Function(entry)) => Ok(entry),
            Some(Global::Namespace(_)) => Err(HostError::NotAFunction(target.to_string())),
            None => Err(HostError::UnknownGlobal(target.to_string())),
        }
    }

    pub fn invoke(&self, target: &str, args: &[HostValue]) -> Result<HostValue, HostError> {
        let entry = self.resolve(target)?;
        tracing::debug!("host call {target} with {} argument(s)", args.len());
        Ok(entry.invoke(args)?)
    }

    /// Published global names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.globals.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Host for LocalHost {
    fn publish(&mut self, name: &str, global: Global) -> Result<(), HostError> {
        match self.globals.entry(name.to_string()) {
            Entry::Occupied(_) => Err(HostError::AlreadyPublished(name.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(global);
                Ok(())
            }
        }
    }
}
