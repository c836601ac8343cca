//! Provider payload preprocessing
//!
//! Structural normalization applied before any mapping: unwrapping nested
//! field containers, collapsing provider-specific list shapes. Pure: the
//! same input and (provider, object type) always yield the same output,
//! and the caller's object is never mutated. Unknown pairs pass through
//! unchanged.
//!
//! Preprocessing may drop or rename keys freely; the orchestrator's
//! reconciliation pass works from the original object, so nothing dropped
//! here is lost from the final result.

use crate::types::{ObjectType, ObjectTypeKey, Provider};
use crate::value::{FieldValue, RawObject};

/// Normalize a raw provider payload into the shape the mapping step
/// expects.
#[must_use]
pub fn preprocess(raw: &RawObject, key: ObjectTypeKey) -> RawObject {
    match (key.provider, key.object_type) {
        // HubSpot nests canonical properties under a "properties" container.
        (Provider::Hubspot, _) => flatten_container(raw, "properties"),
        // Jira issues nest everything under "fields".
        (Provider::Jira, ObjectType::TicketTask) => flatten_container(raw, "fields"),
        // ClickUp member payloads wrap the user object.
        (Provider::Clickup, ObjectType::TicketUser) => unwrap_container(raw, "user"),
        // Zoho decorates payloads with "$"-prefixed metadata keys that are
        // never mapping sources.
        (Provider::Zohocrm, _) => strip_meta_keys(raw, '$'),
        // Pipedrive contacts carry email/phone as labeled value lists.
        (Provider::Pipedrive, ObjectType::Contact) => {
            let collapsed = collapse_primary_entry(raw, "email", "value");
            collapse_primary_entry(&collapsed, "phone", "value")
        }
        // Close contacts use the same shape with differently named fields.
        (Provider::Closecrm, ObjectType::Contact) => {
            let collapsed = collapse_primary_entry(raw, "emails", "email");
            collapse_primary_entry(&collapsed, "phones", "phone")
        }
        _ => raw.clone(),
    }
}

/// Spread a nested object container's entries over the top level.
///
/// Container entries win on a key collision (they are the provider's
/// authoritative field values); the container key itself is removed from
/// the mapping view.
fn flatten_container(raw: &RawObject, container: &str) -> RawObject {
    let Some(FieldValue::Object(inner)) = raw.get(container) else {
        return raw.clone();
    };
    let inner = inner.clone();

    let mut out = RawObject::new();
    for (key, value) in raw.iter() {
        if key != container && !inner.contains_key(key) {
            out.set(key.clone(), value.clone());
        }
    }
    for (key, value) in inner {
        out.set(key, value);
    }
    out
}

/// Replace the payload with the object nested under `container`, keeping
/// sibling keys that do not collide.
fn unwrap_container(raw: &RawObject, container: &str) -> RawObject {
    // Same spread semantics; separate name because the container is the
    // whole object rather than a property bag.
    flatten_container(raw, container)
}

/// Drop keys starting with a metadata sigil from the mapping view.
fn strip_meta_keys(raw: &RawObject, sigil: char) -> RawObject {
    raw.iter()
        .filter(|(key, _)| !key.starts_with(sigil))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Collapse a labeled value list (`[{label, value, primary}, ...]`) to the
/// primary entry's scalar, under the same key.
///
/// The primary entry is the one flagged `primary: true`, falling back to
/// the first entry. Keys that are not arrays of objects are untouched.
fn collapse_primary_entry(raw: &RawObject, key: &str, value_field: &str) -> RawObject {
    let Some(FieldValue::Array(entries)) = raw.get(key) else {
        return raw.clone();
    };

    let primary = entries
        .iter()
        .find(|entry| {
            entry
                .as_object()
                .and_then(|o| o.get("primary"))
                .and_then(FieldValue::as_bool)
                .unwrap_or(false)
        })
        .or_else(|| entries.first());

    let scalar = primary
        .and_then(FieldValue::as_object)
        .and_then(|o| o.get(value_field))
        .cloned();

    let Some(scalar) = scalar else {
        return raw.clone();
    };

    let mut out = raw.clone();
    out.set(key.to_string(), scalar);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawObject {
        RawObject::from_value(value).unwrap()
    }

    #[test]
    fn test_unknown_pair_passes_through() {
        let input = raw(json!({ "id": "1", "name": "Bob" }));
        let key = ObjectTypeKey::new(Provider::Linear, ObjectType::TicketUser);
        assert_eq!(preprocess(&input, key), input);
    }

    #[test]
    fn test_hubspot_properties_are_flattened() {
        let input = raw(json!({
            "id": "512",
            "properties": { "firstname": "Jane", "email": "jane@x.co" },
            "archived": false,
        }));
        let key = ObjectTypeKey::new(Provider::Hubspot, ObjectType::Contact);
        let out = preprocess(&input, key);

        assert_eq!(out.get_str("firstname"), Some("Jane"));
        assert_eq!(out.get_str("email"), Some("jane@x.co"));
        assert_eq!(out.get_str("id"), Some("512"));
        assert!(!out.contains_key("properties"));
    }

    #[test]
    fn test_hubspot_container_entry_wins_collision() {
        let input = raw(json!({
            "email": "top-level@x.co",
            "properties": { "email": "authoritative@x.co" },
        }));
        let key = ObjectTypeKey::new(Provider::Hubspot, ObjectType::Contact);
        let out = preprocess(&input, key);
        assert_eq!(out.get_str("email"), Some("authoritative@x.co"));
    }

    #[test]
    fn test_hubspot_without_properties_is_unchanged() {
        let input = raw(json!({ "id": "512" }));
        let key = ObjectTypeKey::new(Provider::Hubspot, ObjectType::Contact);
        assert_eq!(preprocess(&input, key), input);
    }

    #[test]
    fn test_jira_fields_are_flattened_for_issues_only() {
        let input = raw(json!({
            "id": "10002",
            "fields": { "summary": "Fix login", "duedate": "2026-09-01" },
        }));
        let issue_key = ObjectTypeKey::new(Provider::Jira, ObjectType::TicketTask);
        let out = preprocess(&input, issue_key);
        assert_eq!(out.get_str("summary"), Some("Fix login"));
        assert!(!out.contains_key("fields"));

        let user_key = ObjectTypeKey::new(Provider::Jira, ObjectType::TicketUser);
        assert_eq!(preprocess(&input, user_key), input);
    }

    #[test]
    fn test_clickup_user_wrapper_is_unwrapped() {
        let input = raw(json!({
            "user": { "id": 183, "username": "Jo", "email": "jo@x.co" },
        }));
        let key = ObjectTypeKey::new(Provider::Clickup, ObjectType::TicketUser);
        let out = preprocess(&input, key);
        assert_eq!(out.get_str("username"), Some("Jo"));
        assert!(!out.contains_key("user"));
    }

    #[test]
    fn test_zoho_meta_keys_are_stripped() {
        let input = raw(json!({
            "id": "321",
            "$approved": true,
            "$editable": true,
            "Email": "z@x.co",
        }));
        let key = ObjectTypeKey::new(Provider::Zohocrm, ObjectType::Contact);
        let out = preprocess(&input, key);
        assert!(!out.contains_key("$approved"));
        assert!(!out.contains_key("$editable"));
        assert_eq!(out.get_str("Email"), Some("z@x.co"));
    }

    #[test]
    fn test_pipedrive_primary_email_is_collapsed() {
        let input = raw(json!({
            "id": 9,
            "email": [
                { "label": "home", "value": "h@x.co", "primary": false },
                { "label": "work", "value": "w@x.co", "primary": true },
            ],
            "phone": [
                { "label": "mobile", "value": "555-1234", "primary": true },
            ],
        }));
        let key = ObjectTypeKey::new(Provider::Pipedrive, ObjectType::Contact);
        let out = preprocess(&input, key);
        assert_eq!(out.get_str("email"), Some("w@x.co"));
        assert_eq!(out.get_str("phone"), Some("555-1234"));
    }

    #[test]
    fn test_pipedrive_falls_back_to_first_entry() {
        let input = raw(json!({
            "email": [
                { "label": "home", "value": "first@x.co" },
                { "label": "work", "value": "second@x.co" },
            ],
        }));
        let key = ObjectTypeKey::new(Provider::Pipedrive, ObjectType::Contact);
        let out = preprocess(&input, key);
        assert_eq!(out.get_str("email"), Some("first@x.co"));
    }

    #[test]
    fn test_closecrm_email_list_is_collapsed() {
        let input = raw(json!({
            "emails": [ { "type": "office", "email": "office@x.co" } ],
            "phones": [ { "type": "office", "phone": "555-9876" } ],
        }));
        let key = ObjectTypeKey::new(Provider::Closecrm, ObjectType::Contact);
        let out = preprocess(&input, key);
        assert_eq!(out.get_str("emails"), Some("office@x.co"));
        assert_eq!(out.get_str("phones"), Some("555-9876"));
    }

    #[test]
    fn test_preprocess_does_not_mutate_input() {
        let input = raw(json!({
            "properties": { "email": "jane@x.co" },
        }));
        let before = input.clone();
        let key = ObjectTypeKey::new(Provider::Hubspot, ObjectType::Contact);
        let _ = preprocess(&input, key);
        assert_eq!(input, before);
    }
}
