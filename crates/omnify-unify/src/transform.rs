//! Model transformation
//!
//! Applies a resolved field mapping to a preprocessed raw object, producing
//! a canonical object and the set of source keys the mapping claimed. Also
//! provides the reverse projection from a canonical object back to a
//! provider-shaped payload.

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::canonical::CanonicalObject;
use crate::error::UnifyResult;
use crate::mapping::{FieldMappingConfig, ResolvedMapping, SourcePath};
use crate::registry::MappingRegistry;
use crate::types::ObjectTypeKey;
use crate::value::{FieldValue, RawObject};

/// Output of the transformation step: the canonical object (with an empty
/// `additional` container) and the raw keys the mapping consumed.
#[derive(Debug, Clone)]
pub struct Transformed {
    /// The canonical object with resolved fields populated.
    pub object: CanonicalObject,
    /// Top-level raw keys consumed by value extraction.
    pub claimed_keys: IndexSet<String>,
}

/// Apply the effective mapping for `key` to a preprocessed raw object.
///
/// For each canonical field in the resolved mapping the value is extracted
/// at the mapped source; an absent source leaves the canonical field unset.
/// Tenant overrides in `config` take precedence over the default table
/// field by field.
///
/// # Errors
///
/// Fails fast with a configuration error when no mapping table exists for
/// the pair, or when the tenant configuration is invalid.
pub fn transform(
    raw: &RawObject,
    key: ObjectTypeKey,
    config: Option<&FieldMappingConfig>,
    registry: &MappingRegistry,
) -> UnifyResult<Transformed> {
    let table = registry.get(key)?;
    let mapping = ResolvedMapping::resolve(table, config)?;

    let mut object = CanonicalObject::new(key.object_type);
    let mut claimed_keys = IndexSet::new();

    for rule in mapping.rules() {
        if let Some(value) = rule.source.resolve(raw, &mut claimed_keys) {
            object.set_field(rule.canonical_field.clone(), value);
        }
    }

    Ok(Transformed {
        object,
        claimed_keys,
    })
}

/// Project a canonical object back into a provider-shaped payload.
///
/// Inverts the effective mapping: each populated canonical field is written
/// at its rule's source location (direct keys and dotted paths; composed
/// and constant sources are not invertible and are skipped). `additional`
/// entries are merged back verbatim without overwriting mapped keys.
///
/// # Errors
///
/// Fails with the same configuration errors as [`transform`].
pub fn project(
    canonical: &CanonicalObject,
    key: ObjectTypeKey,
    config: Option<&FieldMappingConfig>,
    registry: &MappingRegistry,
) -> UnifyResult<RawObject> {
    let table = registry.get(key)?;
    let mapping = ResolvedMapping::resolve(table, config)?;

    let mut raw = RawObject::new();
    for rule in mapping.rules() {
        let Some(value) = canonical.field(&rule.canonical_field) else {
            continue;
        };
        match rule.source.invert() {
            Some(location) => write_path(&mut raw, location, value.clone()),
            None => {
                debug!(
                    key = %key,
                    canonical_field = %rule.canonical_field,
                    "skipping non-invertible rule during projection"
                );
            }
        }
    }

    for (name, value) in &canonical.additional {
        if !raw.contains_key(name) {
            raw.set(name.clone(), value.clone());
        }
    }

    Ok(raw)
}

/// Write a value at a dotted location, creating intermediate objects.
///
/// Numeric segments would require array synthesis; such locations fall back
/// to writing under the literal dotted key.
fn write_path(raw: &mut RawObject, location: &str, value: FieldValue) {
    let segments: Vec<&str> = location.split('.').collect();
    if segments.len() == 1 {
        raw.set(location.to_string(), value);
        return;
    }
    if segments.iter().any(|s| s.parse::<usize>().is_ok()) {
        raw.set(location.to_string(), value);
        return;
    }

    let root = segments[0].to_string();
    let mut existing = match raw.remove(&root) {
        Some(FieldValue::Object(map)) => map,
        _ => IndexMap::new(),
    };
    insert_nested(&mut existing, &segments[1..], value);
    raw.set(root, FieldValue::Object(existing));
}

fn insert_nested(map: &mut IndexMap<String, FieldValue>, segments: &[&str], value: FieldValue) {
    match segments {
        [] => {}
        [last] => {
            map.insert((*last).to_string(), value);
        }
        [head, rest @ ..] => {
            let entry = map
                .entry((*head).to_string())
                .or_insert_with(|| FieldValue::Object(IndexMap::new()));
            if !matches!(entry, FieldValue::Object(_)) {
                *entry = FieldValue::Object(IndexMap::new());
            }
            if let FieldValue::Object(inner) = entry {
                insert_nested(inner, rest, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::MappingTable;
    use crate::types::{ObjectType, Provider};
    use omnify_core::{ConnectionId, SchemaMappingId, TenantId};
    use serde_json::json;

    fn ticket_user_key() -> ObjectTypeKey {
        ObjectTypeKey::new(Provider::Linear, ObjectType::TicketUser)
    }

    fn registry_with(table: MappingTable) -> MappingRegistry {
        let mut registry = MappingRegistry::new();
        registry.register(table);
        registry
    }

    #[test]
    fn test_transform_populates_resolved_fields() {
        let registry = registry_with(
            MappingTable::new(ticket_user_key())
                .rule("name", SourcePath::key("name"))
                .rule("email", SourcePath::key("email"))
                .rule("remote_id", SourcePath::key("id")),
        );
        let raw = RawObject::from_value(json!({
            "id": "u-1",
            "name": "Bob",
            "email": "bob@x.co",
            "customField7": "vip",
        }))
        .unwrap();

        let transformed = transform(&raw, ticket_user_key(), None, &registry).unwrap();
        let object = &transformed.object;

        assert_eq!(object.field("name").and_then(FieldValue::as_str), Some("Bob"));
        assert_eq!(
            object.field("remote_id").and_then(FieldValue::as_str),
            Some("u-1")
        );
        // The additional container starts empty; reconciliation is the
        // orchestrator's job.
        assert!(object.additional.is_empty());

        let claimed: Vec<&str> = transformed.claimed_keys.iter().map(String::as_str).collect();
        assert_eq!(claimed, vec!["name", "email", "id"]);
    }

    #[test]
    fn test_absent_source_leaves_field_unset() {
        let registry = registry_with(
            MappingTable::new(ticket_user_key())
                .rule("name", SourcePath::key("name"))
                .rule("avatar", SourcePath::key("avatarUrl")),
        );
        let raw = RawObject::new().with("name", "Bob");

        let transformed = transform(&raw, ticket_user_key(), None, &registry).unwrap();
        assert!(transformed.object.has_field("name"));
        assert!(!transformed.object.has_field("avatar"));
    }

    #[test]
    fn test_unknown_pair_fails_fast() {
        let registry = MappingRegistry::new();
        let raw = RawObject::new().with("name", "Bob");

        let err = transform(&raw, ticket_user_key(), None, &registry).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_MAPPING_TABLE");
    }

    #[test]
    fn test_tenant_override_precedence() {
        // Default maps canonical "name" from x; tenant overrides to y.
        let registry = registry_with(
            MappingTable::new(ticket_user_key()).rule("name", SourcePath::key("x")),
        );
        let config = FieldMappingConfig::new(
            SchemaMappingId::new(),
            TenantId::new(),
            ConnectionId::new(),
            ObjectType::TicketUser,
        )
        .with_override("name", SourcePath::key("y"));

        let raw = RawObject::new().with("x", "from-default").with("y", "from-override");
        let transformed =
            transform(&raw, ticket_user_key(), Some(&config), &registry).unwrap();

        assert_eq!(
            transformed.object.field("name").and_then(FieldValue::as_str),
            Some("from-override")
        );
        assert!(transformed.claimed_keys.contains("y"));
        assert!(!transformed.claimed_keys.contains("x"));
    }

    #[test]
    fn test_transform_with_dotted_path() {
        let key = ObjectTypeKey::new(Provider::Jira, ObjectType::TicketTask);
        let registry = registry_with(
            MappingTable::new(key).rule("status", SourcePath::path("status.name")),
        );
        let raw = RawObject::from_value(json!({
            "status": { "name": "Done", "id": "3" },
        }))
        .unwrap();

        let transformed = transform(&raw, key, None, &registry).unwrap();
        assert_eq!(
            transformed.object.field("status").and_then(FieldValue::as_str),
            Some("Done")
        );
        assert!(transformed.claimed_keys.contains("status"));
    }

    #[test]
    fn test_project_inverts_direct_keys() {
        let registry = registry_with(
            MappingTable::new(ticket_user_key())
                .rule("name", SourcePath::key("name"))
                .rule("remote_id", SourcePath::key("id")),
        );

        let mut canonical = CanonicalObject::new(ObjectType::TicketUser);
        canonical.set_field("name", "Bob");
        canonical.set_field("remote_id", "u-1");
        canonical.set_additional("customField7", "vip");

        let raw = project(&canonical, ticket_user_key(), None, &registry).unwrap();
        assert_eq!(raw.get_str("name"), Some("Bob"));
        assert_eq!(raw.get_str("id"), Some("u-1"));
        assert_eq!(raw.get_str("customField7"), Some("vip"));
    }

    #[test]
    fn test_project_writes_nested_paths() {
        let key = ObjectTypeKey::new(Provider::Jira, ObjectType::TicketTask);
        let registry = registry_with(
            MappingTable::new(key)
                .rule("status", SourcePath::path("status.name"))
                .rule("assignee_id", SourcePath::path("assignee.accountId")),
        );

        let mut canonical = CanonicalObject::new(ObjectType::TicketTask);
        canonical.set_field("status", "Done");
        canonical.set_field("assignee_id", "acc-9");

        let raw = project(&canonical, key, None, &registry).unwrap();
        assert_eq!(
            raw.get_path("status.name").and_then(FieldValue::as_str),
            Some("Done")
        );
        assert_eq!(
            raw.get_path("assignee.accountId").and_then(FieldValue::as_str),
            Some("acc-9")
        );
    }

    #[test]
    fn test_project_skips_composed_rules() {
        let registry = registry_with(MappingTable::new(ticket_user_key()).rule(
            "name",
            SourcePath::compose(
                vec![SourcePath::key("firstName"), SourcePath::key("lastName")],
                " ",
            ),
        ));

        let mut canonical = CanonicalObject::new(ObjectType::TicketUser);
        canonical.set_field("name", "John Doe");

        let raw = project(&canonical, ticket_user_key(), None, &registry).unwrap();
        assert!(raw.is_empty());
    }

    #[test]
    fn test_project_additional_does_not_overwrite_mapped_keys() {
        let registry = registry_with(
            MappingTable::new(ticket_user_key()).rule("name", SourcePath::key("name")),
        );

        let mut canonical = CanonicalObject::new(ObjectType::TicketUser);
        canonical.set_field("name", "Canonical");
        canonical.set_additional("name", "Stale");

        let raw = project(&canonical, ticket_user_key(), None, &registry).unwrap();
        assert_eq!(raw.get_str("name"), Some("Canonical"));
    }
}
