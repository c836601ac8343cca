//! Field mapping types
//!
//! Defines how provider-specific source fields map to canonical fields:
//! the built-in per-(provider, object type) mapping tables, and the
//! tenant-owned configuration that overrides them field by field.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use omnify_core::{ConnectionId, SchemaMappingId, TenantAware, TenantId};

use crate::canonical::is_canonical_field;
use crate::error::{UnifyError, UnifyResult};
use crate::types::{ObjectType, ObjectTypeKey};
use crate::value::{FieldValue, RawObject};

/// Where a canonical field's value comes from in the raw payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourcePath {
    /// A direct top-level key.
    Key {
        /// The source field name.
        key: String,
    },
    /// A dotted path into nested objects; numeric segments index arrays.
    Path {
        /// The dotted path (e.g. `"state.name"`, `"emails.0.value"`).
        path: String,
    },
    /// Multiple sources rendered as strings and joined with a separator
    /// (e.g. combining first and last name).
    Compose {
        /// The component sources, in order.
        sources: Vec<SourcePath>,
        /// Separator between rendered components.
        #[serde(default)]
        separator: String,
    },
    /// A fixed value independent of the payload.
    Constant {
        /// The constant value.
        value: FieldValue,
    },
}

impl SourcePath {
    /// Create a direct-key source.
    pub fn key(key: impl Into<String>) -> Self {
        SourcePath::Key { key: key.into() }
    }

    /// Create a dotted-path source.
    pub fn path(path: impl Into<String>) -> Self {
        SourcePath::Path { path: path.into() }
    }

    /// Create a composed source joined with a separator.
    #[must_use]
    pub fn compose(sources: Vec<SourcePath>, separator: impl Into<String>) -> Self {
        SourcePath::Compose {
            sources,
            separator: separator.into(),
        }
    }

    /// Create a constant source.
    pub fn constant(value: impl Into<FieldValue>) -> Self {
        SourcePath::Constant {
            value: value.into(),
        }
    }

    /// Extract this source's value from a raw object.
    ///
    /// Returns `None` when the source is absent; an absent source is not an
    /// error. Top-level keys consumed by a successful extraction are
    /// recorded into `claimed`.
    pub fn resolve(&self, raw: &RawObject, claimed: &mut IndexSet<String>) -> Option<FieldValue> {
        match self {
            SourcePath::Key { key } => {
                let value = raw.get(key).cloned()?;
                claimed.insert(key.clone());
                Some(value)
            }
            SourcePath::Path { path } => {
                let value = raw.get_path(path).cloned()?;
                if let Some(head) = path.split('.').next() {
                    claimed.insert(head.to_string());
                }
                Some(value)
            }
            SourcePath::Compose { sources, separator } => {
                let mut parts = Vec::new();
                for source in sources {
                    // A component claims its keys only when it contributed a
                    // rendered part; a null or non-scalar component must stay
                    // visible to the reconciliation pass.
                    let mut component = IndexSet::new();
                    let Some(part) = source
                        .resolve(raw, &mut component)
                        .as_ref()
                        .and_then(FieldValue::render)
                    else {
                        continue;
                    };
                    if part.is_empty() {
                        continue;
                    }
                    parts.push(part);
                    claimed.extend(component);
                }
                if parts.is_empty() {
                    None
                } else {
                    Some(FieldValue::String(parts.join(separator)))
                }
            }
            SourcePath::Constant { value } => Some(value.clone()),
        }
    }

    /// The write location for the reverse (canonical → provider) direction,
    /// if this source is invertible.
    ///
    /// Direct keys and dotted paths invert; composed and constant sources
    /// do not.
    #[must_use]
    pub fn invert(&self) -> Option<&str> {
        match self {
            SourcePath::Key { key } => Some(key),
            SourcePath::Path { path } => Some(path),
            SourcePath::Compose { .. } | SourcePath::Constant { .. } => None,
        }
    }
}

/// A single canonical-field → source-path rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingRule {
    /// The canonical field this rule populates.
    pub canonical_field: String,
    /// Where the value comes from.
    pub source: SourcePath,
}

impl MappingRule {
    /// Create a new rule.
    pub fn new(canonical_field: impl Into<String>, source: SourcePath) -> Self {
        Self {
            canonical_field: canonical_field.into(),
            source,
        }
    }
}

/// The default static mapping table for one (provider, object type) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingTable {
    /// The pair this table applies to.
    pub key: ObjectTypeKey,
    /// The canonical-field → source rules, in canonical-schema order.
    pub rules: Vec<MappingRule>,
}

impl MappingTable {
    /// Create an empty table for a pair.
    #[must_use]
    pub fn new(key: ObjectTypeKey) -> Self {
        Self {
            key,
            rules: Vec::new(),
        }
    }

    /// Add a rule using builder pattern.
    #[must_use]
    pub fn rule(mut self, canonical_field: impl Into<String>, source: SourcePath) -> Self {
        self.rules.push(MappingRule::new(canonical_field, source));
        self
    }

    /// Look up the rule for a canonical field.
    #[must_use]
    pub fn rule_for(&self, canonical_field: &str) -> Option<&MappingRule> {
        self.rules
            .iter()
            .find(|r| r.canonical_field == canonical_field)
    }
}

/// A tenant's single field override: use `source` for `canonical_field`
/// instead of the default table's rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOverride {
    /// The canonical field being overridden. Must belong to the canonical
    /// schema of the configuration's object type.
    pub canonical_field: String,
    /// The provider-specific source to read instead of the default.
    pub source: SourcePath,
}

/// Tenant-owned field-mapping configuration.
///
/// Created and edited by tenant administrators outside the pipeline;
/// read-only here. Overrides apply field by field: any canonical field
/// without an override keeps the default rule. Absence of the whole record
/// means "use defaults only".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMappingConfig {
    /// Identifier of the stored mapping record.
    pub id: SchemaMappingId,
    /// The tenant that owns this configuration.
    pub tenant_id: TenantId,
    /// The provider connection this configuration was saved for. Overrides
    /// never leak across a tenant's other connections.
    pub connection_id: ConnectionId,
    /// The canonical object type these overrides apply to.
    pub object_type: ObjectType,
    /// The per-field overrides.
    pub overrides: Vec<FieldOverride>,
}

impl FieldMappingConfig {
    /// Create a new configuration with no overrides.
    #[must_use]
    pub fn new(
        id: SchemaMappingId,
        tenant_id: TenantId,
        connection_id: ConnectionId,
        object_type: ObjectType,
    ) -> Self {
        Self {
            id,
            tenant_id,
            connection_id,
            object_type,
            overrides: Vec::new(),
        }
    }

    /// Add an override using builder pattern.
    #[must_use]
    pub fn with_override(mut self, canonical_field: impl Into<String>, source: SourcePath) -> Self {
        self.overrides.push(FieldOverride {
            canonical_field: canonical_field.into(),
            source,
        });
        self
    }

    /// Validate that every override targets a field of the canonical schema.
    ///
    /// # Errors
    ///
    /// Returns [`UnifyError::InvalidFieldOverride`] for the first override
    /// naming a field outside the schema.
    pub fn validate(&self) -> UnifyResult<()> {
        for entry in &self.overrides {
            if !is_canonical_field(self.object_type, &entry.canonical_field) {
                return Err(UnifyError::InvalidFieldOverride {
                    field: entry.canonical_field.clone(),
                    object_type: self.object_type,
                });
            }
        }
        Ok(())
    }
}

impl TenantAware for FieldMappingConfig {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }
}

/// The effective mapping for one transformation: default table rules with
/// tenant overrides applied field by field.
#[derive(Debug, Clone)]
pub struct ResolvedMapping {
    rules: Vec<MappingRule>,
}

impl ResolvedMapping {
    /// Merge a default table with an optional tenant configuration.
    ///
    /// Tenant customization takes precedence over defaults per canonical
    /// field, not wholesale: an override replaces the default rule for its
    /// field, and an override for a canonical field the default table does
    /// not map augments the rule set.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the tenant configuration is for a
    /// different object type or names a non-canonical field.
    pub fn resolve(
        table: &MappingTable,
        config: Option<&FieldMappingConfig>,
    ) -> UnifyResult<Self> {
        let mut rules = table.rules.clone();

        if let Some(config) = config {
            if config.object_type != table.key.object_type {
                return Err(UnifyError::ObjectTypeMismatch {
                    config: config.object_type,
                    requested: table.key.object_type,
                });
            }
            config.validate()?;

            for entry in &config.overrides {
                match rules
                    .iter_mut()
                    .find(|r| r.canonical_field == entry.canonical_field)
                {
                    Some(rule) => rule.source = entry.source.clone(),
                    None => rules.push(MappingRule::new(
                        entry.canonical_field.clone(),
                        entry.source.clone(),
                    )),
                }
            }
        }

        Ok(Self { rules })
    }

    /// The effective rules, default-table order first, augmented overrides
    /// last.
    #[must_use]
    pub fn rules(&self) -> &[MappingRule] {
        &self.rules
    }
}
