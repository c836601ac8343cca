//! Discord default mapping tables.

use crate::mapping::{MappingTable, SourcePath};
use crate::types::{ObjectType, ObjectTypeKey, Provider};

fn table(object_type: ObjectType) -> MappingTable {
    MappingTable::new(ObjectTypeKey::new(Provider::Discord, object_type))
}

pub(super) fn tables() -> Vec<MappingTable> {
    vec![
        table(ObjectType::ChatUser)
            .rule("name", SourcePath::key("username"))
            .rule("email", SourcePath::key("email"))
            .rule("remote_id", SourcePath::key("id")),
        table(ObjectType::Channel)
            .rule("name", SourcePath::key("name"))
            .rule("remote_id", SourcePath::key("id")),
        table(ObjectType::Message)
            .rule("text", SourcePath::key("content"))
            .rule("author_id", SourcePath::path("author.id"))
            .rule("channel_id", SourcePath::key("channel_id"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("timestamp")),
    ]
}
