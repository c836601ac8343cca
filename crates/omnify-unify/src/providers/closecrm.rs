//! Close default mapping tables.
//!
//! Close models companies as "leads"; the lead object carries the company
//! name. The contact `emails`/`phones` arrays are collapsed to their
//! primary entry's scalar by preprocessing, still under the plural keys.

use crate::mapping::{MappingTable, SourcePath};
use crate::types::{ObjectType, ObjectTypeKey, Provider};

fn table(object_type: ObjectType) -> MappingTable {
    MappingTable::new(ObjectTypeKey::new(Provider::Closecrm, object_type))
}

pub(super) fn tables() -> Vec<MappingTable> {
    vec![
        table(ObjectType::Contact)
            .rule("email", SourcePath::key("emails"))
            .rule("phone", SourcePath::key("phones"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("date_created"))
            .rule("updated_at", SourcePath::key("date_updated")),
        table(ObjectType::Lead)
            .rule("company_name", SourcePath::key("name"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("date_created"))
            .rule("updated_at", SourcePath::key("date_updated")),
        table(ObjectType::Deal)
            .rule("name", SourcePath::key("lead_name"))
            .rule("amount", SourcePath::key("value"))
            .rule("probability", SourcePath::key("confidence"))
            .rule("stage", SourcePath::key("status_label"))
            .rule("close_date", SourcePath::key("date_won"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("date_created"))
            .rule("updated_at", SourcePath::key("date_updated")),
        table(ObjectType::User)
            .rule(
                "name",
                SourcePath::compose(
                    vec![SourcePath::key("first_name"), SourcePath::key("last_name")],
                    " ",
                ),
            )
            .rule("email", SourcePath::key("email"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("date_created"))
            .rule("updated_at", SourcePath::key("date_updated")),
    ]
}
