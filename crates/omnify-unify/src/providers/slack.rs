//! Slack default mapping tables.

use crate::mapping::{MappingTable, SourcePath};
use crate::types::{ObjectType, ObjectTypeKey, Provider};

fn table(object_type: ObjectType) -> MappingTable {
    MappingTable::new(ObjectTypeKey::new(Provider::Slack, object_type))
}

pub(super) fn tables() -> Vec<MappingTable> {
    vec![
        table(ObjectType::ChatUser)
            .rule("name", SourcePath::key("real_name"))
            .rule("email", SourcePath::path("profile.email"))
            .rule("remote_id", SourcePath::key("id")),
        table(ObjectType::Channel)
            .rule("name", SourcePath::key("name"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("created")),
        // Messages have no id of their own; the ts doubles as identifier.
        table(ObjectType::Message)
            .rule("text", SourcePath::key("text"))
            .rule("author_id", SourcePath::key("user"))
            .rule("channel_id", SourcePath::key("channel"))
            .rule("remote_id", SourcePath::key("ts"))
            .rule("created_at", SourcePath::key("ts")),
    ]
}
