//! Pipedrive default mapping tables.
//!
//! Contact `email`/`phone` are the primary values collapsed by
//! preprocessing. Leads have no table; the registry fails fast for them.

use crate::mapping::{MappingTable, SourcePath};
use crate::types::{ObjectType, ObjectTypeKey, Provider};

fn table(object_type: ObjectType) -> MappingTable {
    MappingTable::new(ObjectTypeKey::new(Provider::Pipedrive, object_type))
}

pub(super) fn tables() -> Vec<MappingTable> {
    vec![
        table(ObjectType::Contact)
            .rule("first_name", SourcePath::key("first_name"))
            .rule("last_name", SourcePath::key("last_name"))
            .rule("email", SourcePath::key("email"))
            .rule("phone", SourcePath::key("phone"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("add_time"))
            .rule("updated_at", SourcePath::key("update_time")),
        table(ObjectType::Company)
            .rule("name", SourcePath::key("name"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("add_time"))
            .rule("updated_at", SourcePath::key("update_time")),
        table(ObjectType::Deal)
            .rule("name", SourcePath::key("title"))
            .rule("amount", SourcePath::key("value"))
            .rule("stage", SourcePath::key("stage_id"))
            .rule("probability", SourcePath::key("probability"))
            .rule("close_date", SourcePath::key("expected_close_date"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("add_time"))
            .rule("updated_at", SourcePath::key("update_time")),
        table(ObjectType::User)
            .rule("name", SourcePath::key("name"))
            .rule("email", SourcePath::key("email"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("created"))
            .rule("updated_at", SourcePath::key("modified")),
    ]
}
