//! Zoho CRM default mapping tables.
//!
//! `$`-prefixed metadata keys are removed by preprocessing and never
//! appear as sources here.

use crate::mapping::{MappingTable, SourcePath};
use crate::types::{ObjectType, ObjectTypeKey, Provider};

fn table(object_type: ObjectType) -> MappingTable {
    MappingTable::new(ObjectTypeKey::new(Provider::Zohocrm, object_type))
}

pub(super) fn tables() -> Vec<MappingTable> {
    vec![
        table(ObjectType::Contact)
            .rule("first_name", SourcePath::key("First_Name"))
            .rule("last_name", SourcePath::key("Last_Name"))
            .rule("email", SourcePath::key("Email"))
            .rule("phone", SourcePath::key("Phone"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("Created_Time"))
            .rule("updated_at", SourcePath::key("Modified_Time")),
        table(ObjectType::Company)
            .rule("name", SourcePath::key("Account_Name"))
            .rule("industry", SourcePath::key("Industry"))
            .rule("website", SourcePath::key("Website"))
            .rule("phone", SourcePath::key("Phone"))
            .rule("city", SourcePath::key("Billing_City"))
            .rule("country", SourcePath::key("Billing_Country"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("Created_Time"))
            .rule("updated_at", SourcePath::key("Modified_Time")),
        table(ObjectType::Deal)
            .rule("name", SourcePath::key("Deal_Name"))
            .rule("amount", SourcePath::key("Amount"))
            .rule("stage", SourcePath::key("Stage"))
            .rule("probability", SourcePath::key("Probability"))
            .rule("close_date", SourcePath::key("Closing_Date"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("Created_Time"))
            .rule("updated_at", SourcePath::key("Modified_Time")),
        table(ObjectType::Lead)
            .rule("first_name", SourcePath::key("First_Name"))
            .rule("last_name", SourcePath::key("Last_Name"))
            .rule("email", SourcePath::key("Email"))
            .rule("phone", SourcePath::key("Phone"))
            .rule("company_name", SourcePath::key("Company"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("Created_Time"))
            .rule("updated_at", SourcePath::key("Modified_Time")),
        table(ObjectType::User)
            .rule("name", SourcePath::key("full_name"))
            .rule("email", SourcePath::key("email"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("created_time"))
            .rule("updated_at", SourcePath::key("Modified_Time")),
        table(ObjectType::Note)
            .rule("content", SourcePath::key("Note_Content"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("Created_Time"))
            .rule("updated_at", SourcePath::key("Modified_Time")),
        table(ObjectType::Task)
            .rule("subject", SourcePath::key("Subject"))
            .rule("body", SourcePath::key("Description"))
            .rule("status", SourcePath::key("Status"))
            .rule("priority", SourcePath::key("Priority"))
            .rule("due_date", SourcePath::key("Due_Date"))
            .rule("remote_id", SourcePath::key("id"))
            .rule("created_at", SourcePath::key("Created_Time"))
            .rule("updated_at", SourcePath::key("Modified_Time")),
    ]
}
