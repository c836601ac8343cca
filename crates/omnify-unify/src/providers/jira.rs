//! Jira default mapping tables.
//!
//! Issue payloads have their `fields` container flattened by preprocessing,
//! so issue sources below are the flattened names.

use crate::mapping::{MappingTable, SourcePath};
use crate::types::{ObjectType, ObjectTypeKey, Provider};

fn table(object_type: ObjectType) -> MappingTable {
    MappingTable::new(ObjectTypeKey::new(Provider::Jira, object_type))
}

pub(super) fn tables() -> Vec<MappingTable> {
    vec![
        table(ObjectType::TicketUser)
            .rule("name", SourcePath::key("displayName"))
            .rule("email", SourcePath::key("emailAddress"))
            .rule("is_active", SourcePath::key("active"))
            .rule("avatar", SourcePath::path("avatarUrls.48x48"))
            .rule("remote_id", SourcePath::key("accountId")),
        table(ObjectType::TicketTask)
            .rule("title", SourcePath::key("summary"))
            .rule("description", SourcePath::key("description"))
            .rule("status", SourcePath::path("status.name"))
            .rule("priority", SourcePath::path("priority.name"))
            .rule("assignee_id", SourcePath::path("assignee.accountId"))
            .rule("due_date", SourcePath::key("duedate"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("created"))
            .rule("updated_at", SourcePath::key("updated")),
        table(ObjectType::TicketComment)
            .rule("body", SourcePath::key("body"))
            .rule("author_id", SourcePath::path("author.accountId"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("created"))
            .rule("updated_at", SourcePath::key("updated")),
    ]
}
