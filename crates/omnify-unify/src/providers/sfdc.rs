//! Salesforce default mapping tables.

use crate::mapping::{MappingTable, SourcePath};
use crate::types::{ObjectType, ObjectTypeKey, Provider};

fn table(object_type: ObjectType) -> MappingTable {
    MappingTable::new(ObjectTypeKey::new(Provider::Sfdc, object_type))
}

pub(super) fn tables() -> Vec<MappingTable> {
    vec![
        table(ObjectType::Contact)
            .rule("first_name", SourcePath::key("FirstName"))
            .rule("last_name", SourcePath::key("LastName"))
            .rule("email", SourcePath::key("Email"))
            .rule("phone", SourcePath::key("Phone"))
            .rule("remote_id", SourcePath::key("Id"))
            .rule("created_at", SourcePath::key("CreatedDate"))
            .rule("updated_at", SourcePath::key("LastModifiedDate")),
        // Accounts are the canonical companies.
        table(ObjectType::Company)
            .rule("name", SourcePath::key("Name"))
            .rule("industry", SourcePath::key("Industry"))
            .rule("website", SourcePath::key("Website"))
            .rule("phone", SourcePath::key("Phone"))
            .rule("city", SourcePath::key("BillingCity"))
            .rule("country", SourcePath::key("BillingCountry"))
            .rule("remote_id", SourcePath::key("Id"))
            .rule("created_at", SourcePath::key("CreatedDate"))
            .rule("updated_at", SourcePath::key("LastModifiedDate")),
        // Opportunities are the canonical deals.
        table(ObjectType::Deal)
            .rule("name", SourcePath::key("Name"))
            .rule("amount", SourcePath::key("Amount"))
            .rule("stage", SourcePath::key("StageName"))
            .rule("probability", SourcePath::key("Probability"))
            .rule("close_date", SourcePath::key("CloseDate"))
            .rule("is_won", SourcePath::key("IsWon"))
            .rule("remote_id", SourcePath::key("Id"))
            .rule("created_at", SourcePath::key("CreatedDate"))
            .rule("updated_at", SourcePath::key("LastModifiedDate")),
        table(ObjectType::Lead)
            .rule("first_name", SourcePath::key("FirstName"))
            .rule("last_name", SourcePath::key("LastName"))
            .rule("email", SourcePath::key("Email"))
            .rule("phone", SourcePath::key("Phone"))
            .rule("company_name", SourcePath::key("Company"))
            .rule("remote_id", SourcePath::key("Id"))
            .rule("created_at", SourcePath::key("CreatedDate"))
            .rule("updated_at", SourcePath::key("LastModifiedDate")),
        table(ObjectType::User)
            .rule("name", SourcePath::key("Name"))
            .rule("email", SourcePath::key("Email"))
            .rule("remote_id", SourcePath::key("Id"))
            .rule("created_at", SourcePath::key("CreatedDate"))
            .rule("updated_at", SourcePath::key("LastModifiedDate")),
        table(ObjectType::Note)
            .rule("content", SourcePath::key("Body"))
            .rule("remote_id", SourcePath::key("Id"))
            .rule("created_at", SourcePath::key("CreatedDate"))
            .rule("updated_at", SourcePath::key("LastModifiedDate")),
        table(ObjectType::Task)
            .rule("subject", SourcePath::key("Subject"))
            .rule("body", SourcePath::key("Description"))
            .rule("status", SourcePath::key("Status"))
            .rule("priority", SourcePath::key("Priority"))
            .rule("due_date", SourcePath::key("ActivityDate"))
            .rule("remote_id", SourcePath::key("Id"))
            .rule("created_at", SourcePath::key("CreatedDate"))
            .rule("updated_at", SourcePath::key("LastModifiedDate")),
        table(ObjectType::Event)
            .rule("subject", SourcePath::key("Subject"))
            .rule("start_time", SourcePath::key("StartDateTime"))
            .rule("end_time", SourcePath::key("EndDateTime"))
            .rule("location", SourcePath::key("Location"))
            .rule("description", SourcePath::key("Description"))
            .rule("remote_id", SourcePath::key("Id"))
            .rule("created_at", SourcePath::key("CreatedDate"))
            .rule("updated_at", SourcePath::key("LastModifiedDate")),
    ]
}
