//! Linear default mapping tables.

use crate::mapping::{MappingTable, SourcePath};
use crate::types::{ObjectType, ObjectTypeKey, Provider};

fn table(object_type: ObjectType) -> MappingTable {
    MappingTable::new(ObjectTypeKey::new(Provider::Linear, object_type))
}

pub(super) fn tables() -> Vec<MappingTable> {
    vec![
        table(ObjectType::TicketUser)
            .rule("name", SourcePath::key("name"))
            .rule("email", SourcePath::key("email"))
            .rule("is_active", SourcePath::key("active"))
            .rule("avatar", SourcePath::key("avatarUrl"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("createdAt"))
            .rule("updated_at", SourcePath::key("updatedAt")),
        // Issues embed workflow state and assignee as nested objects.
        table(ObjectType::TicketTask)
            .rule("title", SourcePath::key("title"))
            .rule("description", SourcePath::key("description"))
            .rule("status", SourcePath::path("state.name"))
            .rule("priority", SourcePath::key("priority"))
            .rule("assignee_id", SourcePath::path("assignee.id"))
            .rule("due_date", SourcePath::key("dueDate"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("createdAt"))
            .rule("updated_at", SourcePath::key("updatedAt")),
        table(ObjectType::TicketComment)
            .rule("body", SourcePath::key("body"))
            .rule("author_id", SourcePath::path("user.id"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("createdAt"))
            .rule("updated_at", SourcePath::key("updatedAt")),
    ]
}
