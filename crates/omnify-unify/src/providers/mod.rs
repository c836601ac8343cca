//! Built-in default mapping tables
//!
//! One module per provider, each contributing tables for the canonical
//! object types it supports. Field names follow what each provider's API
//! returns after preprocessing (e.g. HubSpot tables read the flattened
//! `properties` keys). Pairs with no table here are unsupported and fail
//! fast at registry lookup.

mod clickup;
mod closecrm;
mod discord;
mod hubspot;
mod jira;
mod linear;
mod pipedrive;
mod sfdc;
mod slack;
mod zohocrm;

use crate::mapping::MappingTable;

/// All built-in default tables, used by
/// [`MappingRegistry::with_defaults`](crate::registry::MappingRegistry::with_defaults).
#[must_use]
pub fn default_tables() -> Vec<MappingTable> {
    let mut tables = Vec::new();
    tables.extend(hubspot::tables());
    tables.extend(sfdc::tables());
    tables.extend(zohocrm::tables());
    tables.extend(pipedrive::tables());
    tables.extend(closecrm::tables());
    tables.extend(linear::tables());
    tables.extend(clickup::tables());
    tables.extend(jira::tables());
    tables.extend(slack::tables());
    tables.extend(discord::tables());
    tables
}
