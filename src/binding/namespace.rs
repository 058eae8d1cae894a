use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::binding::entry::CallableEntry;
use crate::binding::error::BindingError;
use crate::value::HostValue;

/// Registry of named entries published to the host as one object.
#[derive(Debug, Default, Clone)]
pub struct Namespace {
    entries: HashMap<String, CallableEntry>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry under its own name. Existing entries are never replaced.
    pub fn register(&mut self, entry: CallableEntry) -> Result<(), BindingError> {
        match self.entries.entry(entry.name().to_string()) {
            Entry::Occupied(slot) => Err(BindingError::DuplicateEntry(slot.key().clone())),
            Entry::Vacant(slot) => {
                tracing::debug!("registered entry {} (arity {})", entry.name(), entry.arity());
                slot.insert(entry);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&CallableEntry> {
        self.entries.get(name)
    }

    pub fn call(&self, name: &str, args: &[HostValue]) -> Result<HostValue, BindingError> {
        self.get(name)
            .ok_or_else(|| BindingError::UnknownEntry(name.to_string()))?
            .invoke(args)
    }

    /// Entry names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn entries(&self) -> impl Iterator<Item = &CallableEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(name: &str, value: i64) -> CallableEntry {
        CallableEntry::from_fn(name, 0, move |_| Ok(HostValue::Int(value)))
    }

    #[test]
    fn duplicate_names_are_rejected_and_original_kept() {
        let mut ns = Namespace::new();
        ns.register(constant("one", 1)).unwrap();

        let err = ns.register(constant("one", 2)).unwrap_err();
        assert_eq!(err, BindingError::DuplicateEntry("one".to_string()));
        assert_eq!(ns.call("one", &[]), Ok(HostValue::Int(1)));
        assert_eq!(ns.len(), 1);
    }

    #[test]
    fn unknown_names_fail() {
        let ns = Namespace::new();
        assert!(ns.is_empty());
        assert_eq!(
            ns.call("missing", &[]),
            Err(BindingError::UnknownEntry("missing".to_string()))
        );
    }

    #[test]
    fn names_are_sorted() {
        let mut ns = Namespace::new();
        ns.register(constant("b", 0)).unwrap();
        ns.register(constant("a", 0)).unwrap();
        assert_eq!(ns.names(), vec!["a", "b"]);
    }
}
