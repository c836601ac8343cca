//! Canonical schema and canonical object container
//!
//! The canonical schema is the unified object shape exposed to API
//! consumers regardless of provider. Each object type has a fixed set of
//! known canonical fields; provider data not covered by the schema is
//! preserved verbatim under the `additional` container.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::ObjectType;
use crate::value::{FieldValue, RawObject};

/// Get the known canonical field names for an object type.
#[must_use]
pub fn canonical_fields(object_type: ObjectType) -> &'static [&'static str] {
    match object_type {
        ObjectType::Company => &[
            "name",
            "industry",
            "website",
            "phone",
            "city",
            "country",
            "remote_id",
            "created_at",
            "updated_at",
        ],
        ObjectType::Contact => &[
            "first_name",
            "last_name",
            "email",
            "phone",
            "remote_id",
            "created_at",
            "updated_at",
        ],
        ObjectType::Deal => &[
            "name",
            "amount",
            "stage",
            "probability",
            "close_date",
            "is_won",
            "remote_id",
            "created_at",
            "updated_at",
        ],
        ObjectType::Event => &[
            "subject",
            "start_time",
            "end_time",
            "location",
            "description",
            "remote_id",
            "created_at",
            "updated_at",
        ],
        ObjectType::Lead => &[
            "first_name",
            "last_name",
            "email",
            "phone",
            "company_name",
            "remote_id",
            "created_at",
            "updated_at",
        ],
        ObjectType::Note => &["content", "remote_id", "created_at", "updated_at"],
        ObjectType::Task => &[
            "subject",
            "body",
            "status",
            "priority",
            "due_date",
            "remote_id",
            "created_at",
            "updated_at",
        ],
        ObjectType::User => &["name", "email", "remote_id", "created_at", "updated_at"],
        ObjectType::Channel => &["name", "remote_id", "created_at"],
        ObjectType::Message => &["text", "author_id", "channel_id", "remote_id", "created_at"],
        ObjectType::ChatUser => &["name", "email", "remote_id"],
        ObjectType::TicketTask => &[
            "title",
            "description",
            "status",
            "priority",
            "assignee_id",
            "due_date",
            "remote_id",
            "created_at",
            "updated_at",
        ],
        ObjectType::TicketUser => &[
            "name",
            "email",
            "is_active",
            "avatar",
            "remote_id",
            "created_at",
            "updated_at",
        ],
        ObjectType::TicketComment => &[
            "body",
            "author_id",
            "remote_id",
            "created_at",
            "updated_at",
        ],
    }
}

/// Check whether a field name belongs to an object type's canonical schema.
#[must_use]
pub fn is_canonical_field(object_type: ObjectType, field: &str) -> bool {
    canonical_fields(object_type).contains(&field)
}

/// A unified object: populated canonical fields plus the `additional`
/// container holding provider data the canonical schema does not cover.
///
/// Serializes with canonical fields at the top level and `additional`
/// nested, matching the unified API response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalObject {
    /// The canonical object type this instance conforms to.
    #[serde(skip)]
    object_type: Option<ObjectType>,

    /// Populated canonical fields, in schema order.
    #[serde(flatten)]
    fields: IndexMap<String, FieldValue>,

    /// Provider-specific fields preserved verbatim.
    pub additional: IndexMap<String, FieldValue>,
}

impl CanonicalObject {
    /// Create a new empty canonical object for an object type.
    #[must_use]
    pub fn new(object_type: ObjectType) -> Self {
        Self {
            object_type: Some(object_type),
            fields: IndexMap::new(),
            additional: IndexMap::new(),
        }
    }

    /// The object type this instance was built for, when known.
    ///
    /// Deserialized instances carry no object type; the pipeline always
    /// constructs objects through [`CanonicalObject::new`].
    #[must_use]
    pub fn object_type(&self) -> Option<ObjectType> {
        self.object_type
    }

    /// Set a canonical field.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Get a populated canonical field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Check if a canonical field is populated.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterate over populated canonical fields.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    /// Number of populated canonical fields.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Insert a provider-specific field into the `additional` container.
    pub fn set_additional(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.additional.insert(name.into(), value.into());
    }

    /// Get a preserved provider-specific field.
    #[must_use]
    pub fn additional(&self, name: &str) -> Option<&FieldValue> {
        self.additional.get(name)
    }

    /// Reconstitute a raw-shaped object: canonical fields merged with the
    /// `additional` entries.
    ///
    /// Canonical fields win on a (rare) name collision, mirroring how the
    /// serialized form flattens canonical fields at the top level.
    #[must_use]
    pub fn into_raw(self) -> RawObject {
        let mut merged = self.fields;
        for (key, value) in self.additional {
            merged.entry(key).or_insert(value);
        }
        RawObject::from(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_object_type_has_a_schema() {
        for object_type in ObjectType::all() {
            let fields = canonical_fields(*object_type);
            assert!(!fields.is_empty(), "{object_type} has an empty schema");
            assert!(
                fields.contains(&"remote_id"),
                "{object_type} schema lacks remote_id"
            );
        }
    }

    #[test]
    fn test_is_canonical_field() {
        assert!(is_canonical_field(ObjectType::Contact, "first_name"));
        assert!(is_canonical_field(ObjectType::TicketUser, "is_active"));
        assert!(!is_canonical_field(ObjectType::Contact, "favorite_color"));
        assert!(!is_canonical_field(ObjectType::Contact, "title"));
    }

    #[test]
    fn test_serialization_flattens_fields() {
        let mut object = CanonicalObject::new(ObjectType::TicketUser);
        object.set_field("name", "Bob");
        object.set_additional("customField7", "vip");

        let json = serde_json::to_value(&object).unwrap();
        assert_eq!(
            json,
            json!({
                "name": "Bob",
                "additional": { "customField7": "vip" },
            })
        );
    }

    #[test]
    fn test_deserialization_routes_unknown_keys_to_fields() {
        let object: CanonicalObject = serde_json::from_value(json!({
            "name": "Bob",
            "email": "bob@x.co",
            "additional": { "id": "1" },
        }))
        .unwrap();

        assert_eq!(object.field("name").and_then(FieldValue::as_str), Some("Bob"));
        assert_eq!(
            object.additional("id").and_then(FieldValue::as_str),
            Some("1")
        );
        assert!(object.object_type().is_none());
    }

    #[test]
    fn test_into_raw_merges_fields_and_additional() {
        let mut object = CanonicalObject::new(ObjectType::TicketUser);
        object.set_field("name", "Bob");
        object.set_additional("id", "1");
        object.set_additional("customField7", "vip");

        let raw = object.into_raw();
        let keys: Vec<&str> = raw.keys().collect();
        assert_eq!(keys, vec!["name", "id", "customField7"]);
    }

    #[test]
    fn test_into_raw_prefers_canonical_on_collision() {
        let mut object = CanonicalObject::new(ObjectType::TicketUser);
        object.set_field("name", "Canonical");
        object.set_additional("name", "Raw");

        let raw = object.into_raw();
        assert_eq!(raw.get_str("name"), Some("Canonical"));
        assert_eq!(raw.len(), 1);
    }
}
