//! ClickUp default mapping tables.
//!
//! User payloads arrive wrapped in a `user` container that preprocessing
//! unwraps before these tables apply.

use crate::mapping::{MappingTable, SourcePath};
use crate::types::{ObjectType, ObjectTypeKey, Provider};

fn table(object_type: ObjectType) -> MappingTable {
    MappingTable::new(ObjectTypeKey::new(Provider::Clickup, object_type))
}

pub(super) fn tables() -> Vec<MappingTable> {
    vec![
        table(ObjectType::TicketUser)
            .rule("name", SourcePath::key("username"))
            .rule("email", SourcePath::key("email"))
            .rule("avatar", SourcePath::key("profilePicture"))
            .rule("remote_id", SourcePath::key("id")),
        table(ObjectType::TicketTask)
            .rule("title", SourcePath::key("name"))
            .rule("description", SourcePath::key("description"))
            .rule("status", SourcePath::path("status.status"))
            .rule("priority", SourcePath::path("priority.priority"))
            .rule("assignee_id", SourcePath::path("assignees.0.id"))
            .rule("due_date", SourcePath::key("due_date"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("date_created"))
            .rule("updated_at", SourcePath::key("date_updated")),
        table(ObjectType::TicketComment)
            .rule("body", SourcePath::key("comment_text"))
            .rule("author_id", SourcePath::path("user.id"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("date")),
    ]
}
