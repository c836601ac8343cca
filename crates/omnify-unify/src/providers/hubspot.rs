//! HubSpot default mapping tables.
//!
//! Source keys are the flattened `properties` names produced by
//! preprocessing.

use crate::mapping::{MappingTable, SourcePath};
use crate::types::{ObjectType, ObjectTypeKey, Provider};

fn table(object_type: ObjectType) -> MappingTable {
    MappingTable::new(ObjectTypeKey::new(Provider::Hubspot, object_type))
}

pub(super) fn tables() -> Vec<MappingTable> {
    vec![
        table(ObjectType::Contact)
            .rule("first_name", SourcePath::key("firstname"))
            .rule("last_name", SourcePath::key("lastname"))
            .rule("email", SourcePath::key("email"))
            .rule("phone", SourcePath::key("phone"))
            .rule("remote_id", SourcePath::key("hs_object_id"))
            .rule("created_at", SourcePath::key("createdate"))
            .rule("updated_at", SourcePath::key("lastmodifieddate")),
        table(ObjectType::Company)
            .rule("name", SourcePath::key("name"))
            .rule("industry", SourcePath::key("industry"))
            .rule("website", SourcePath::key("website"))
            .rule("phone", SourcePath::key("phone"))
            .rule("city", SourcePath::key("city"))
            .rule("country", SourcePath::key("country"))
            .rule("remote_id", SourcePath::key("hs_object_id"))
            .rule("created_at", SourcePath::key("createdate"))
            .rule("updated_at", SourcePath::key("hs_lastmodifieddate")),
        table(ObjectType::Deal)
            .rule("name", SourcePath::key("dealname"))
            .rule("amount", SourcePath::key("amount"))
            .rule("stage", SourcePath::key("dealstage"))
            .rule("probability", SourcePath::key("hs_deal_stage_probability"))
            .rule("close_date", SourcePath::key("closedate"))
            .rule("is_won", SourcePath::key("hs_is_closed_won"))
            .rule("remote_id", SourcePath::key("hs_object_id"))
            .rule("created_at", SourcePath::key("createdate"))
            .rule("updated_at", SourcePath::key("hs_lastmodifieddate")),
        table(ObjectType::Lead)
            .rule("first_name", SourcePath::key("firstname"))
            .rule("last_name", SourcePath::key("lastname"))
            .rule("email", SourcePath::key("email"))
            .rule("phone", SourcePath::key("phone"))
            .rule("company_name", SourcePath::key("company"))
            .rule("remote_id", SourcePath::key("hs_object_id"))
            .rule("created_at", SourcePath::key("createdate"))
            .rule("updated_at", SourcePath::key("lastmodifieddate")),
        // Owners API returns camelCase fields and no property bag.
        table(ObjectType::User)
            .rule(
                "name",
                SourcePath::compose(
                    vec![SourcePath::key("firstName"), SourcePath::key("lastName")],
                    " ",
                ),
            )
            .rule("email", SourcePath::key("email"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("createdAt"))
            .rule("updated_at", SourcePath::key("updatedAt")),
        table(ObjectType::Note)
            .rule("content", SourcePath::key("hs_note_body"))
            .rule("remote_id", SourcePath::key("hs_object_id"))
            .rule("created_at", SourcePath::key("hs_createdate"))
            .rule("updated_at", SourcePath::key("hs_lastmodifieddate")),
        table(ObjectType::Task)
            .rule("subject", SourcePath::key("hs_task_subject"))
            .rule("body", SourcePath::key("hs_task_body"))
            .rule("status", SourcePath::key("hs_task_status"))
            .rule("priority", SourcePath::key("hs_task_priority"))
            .rule("due_date", SourcePath::key("hs_timestamp"))
            .rule("remote_id", SourcePath::key("hs_object_id"))
            .rule("created_at", SourcePath::key("hs_createdate"))
            .rule("updated_at", SourcePath::key("hs_lastmodifieddate")),
        table(ObjectType::Event)
            .rule("subject", SourcePath::key("hs_meeting_title"))
            .rule("start_time", SourcePath::key("hs_meeting_start_time"))
            .rule("end_time", SourcePath::key("hs_meeting_end_time"))
            .rule("location", SourcePath::key("hs_meeting_location"))
            .rule("description", SourcePath::key("hs_meeting_body"))
            .rule("remote_id", SourcePath::key("hs_object_id"))
            .rule("created_at", SourcePath::key("hs_createdate"))
            .rule("updated_at", SourcePath::key("hs_lastmodifieddate")),
    ]
}
