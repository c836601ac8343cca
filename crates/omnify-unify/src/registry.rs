//! Mapping table registry
//!
//! Maps each (provider, object type) pair to its default mapping table.
//! Adding a provider means registering a table, not editing a branch
//! chain. The registry is immutable once built, so one instance can be
//! shared across concurrent transformations.

use std::collections::HashMap;

use crate::error::{UnifyError, UnifyResult};
use crate::mapping::MappingTable;
use crate::providers;
use crate::types::ObjectTypeKey;

/// Registry of default mapping tables keyed by (provider, object type).
#[derive(Debug, Clone, Default)]
pub struct MappingRegistry {
    tables: HashMap<ObjectTypeKey, MappingTable>,
}

impl MappingRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in provider table registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for table in providers::default_tables() {
            registry.register(table);
        }
        registry
    }

    /// Register a table for its (provider, object type) pair, replacing any
    /// existing table for the same pair.
    pub fn register(&mut self, table: MappingTable) {
        self.tables.insert(table.key, table);
    }

    /// Look up the table for a pair.
    ///
    /// # Errors
    ///
    /// Returns [`UnifyError::MissingMappingTable`] when no table exists;
    /// the pipeline fails fast rather than producing a partially-mapped
    /// object.
    pub fn get(&self, key: ObjectTypeKey) -> UnifyResult<&MappingTable> {
        self.tables
            .get(&key)
            .ok_or(UnifyError::MissingMappingTable { key })
    }

    /// Check whether a pair has a registered table.
    #[must_use]
    pub fn contains(&self, key: ObjectTypeKey) -> bool {
        self.tables.contains_key(&key)
    }

    /// Number of registered tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::SourcePath;
    use crate::types::{ObjectType, Provider};

    #[test]
    fn test_empty_registry_fails_fast() {
        let registry = MappingRegistry::new();
        let key = ObjectTypeKey::new(Provider::Linear, ObjectType::TicketUser);
        let err = registry.get(key).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_MAPPING_TABLE");
        assert!(err.is_configuration());
    }

    #[test]
    fn test_register_and_lookup() {
        let key = ObjectTypeKey::new(Provider::Linear, ObjectType::TicketUser);
        let mut registry = MappingRegistry::new();
        registry.register(MappingTable::new(key).rule("name", SourcePath::key("name")));

        assert!(registry.contains(key));
        let table = registry.get(key).unwrap();
        assert_eq!(table.rules.len(), 1);
    }

    #[test]
    fn test_register_replaces_existing_table() {
        let key = ObjectTypeKey::new(Provider::Linear, ObjectType::TicketUser);
        let mut registry = MappingRegistry::new();
        registry.register(MappingTable::new(key).rule("name", SourcePath::key("name")));
        registry.register(MappingTable::new(key).rule("email", SourcePath::key("email")));

        assert_eq!(registry.len(), 1);
        let table = registry.get(key).unwrap();
        assert!(table.rule_for("email").is_some());
        assert!(table.rule_for("name").is_none());
    }

    #[test]
    fn test_defaults_cover_every_provider() {
        let registry = MappingRegistry::with_defaults();
        assert!(!registry.is_empty());
        for provider in Provider::all() {
            let covered = ObjectType::all()
                .iter()
                .any(|t| registry.contains(ObjectTypeKey::new(*provider, *t)));
            assert!(covered, "no default tables for provider {provider}");
        }
    }

    #[test]
    fn test_defaults_do_not_cover_unsupported_pairs() {
        let registry = MappingRegistry::with_defaults();
        // Slack has no CRM deal objects.
        let key = ObjectTypeKey::new(Provider::Slack, ObjectType::Deal);
        assert!(!registry.contains(key));
        assert!(registry.get(key).is_err());
    }
}
