//! Provider and canonical object type definitions
//!
//! Enums identifying the third-party provider and the canonical object type
//! a payload belongs to. The pair of the two selects the mapping and
//! preprocessing rules that apply.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported third-party provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// HubSpot CRM
    Hubspot,
    /// Salesforce
    Sfdc,
    /// Zoho CRM
    Zohocrm,
    /// Pipedrive
    Pipedrive,
    /// Close CRM
    Closecrm,
    /// Linear
    Linear,
    /// ClickUp
    Clickup,
    /// Jira
    Jira,
    /// Slack
    Slack,
    /// Discord
    Discord,
}

impl Provider {
    /// Get all supported providers.
    #[must_use]
    pub fn all() -> &'static [Provider] {
        &[
            Provider::Hubspot,
            Provider::Sfdc,
            Provider::Zohocrm,
            Provider::Pipedrive,
            Provider::Closecrm,
            Provider::Linear,
            Provider::Clickup,
            Provider::Jira,
            Provider::Slack,
            Provider::Discord,
        ]
    }

    /// Get the string representation used in routing metadata.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Hubspot => "hubspot",
            Provider::Sfdc => "sfdc",
            Provider::Zohocrm => "zohocrm",
            Provider::Pipedrive => "pipedrive",
            Provider::Closecrm => "closecrm",
            Provider::Linear => "linear",
            Provider::Clickup => "clickup",
            Provider::Jira => "jira",
            Provider::Slack => "slack",
            Provider::Discord => "discord",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Provider {
    type Err = ParseProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hubspot" => Ok(Provider::Hubspot),
            "sfdc" => Ok(Provider::Sfdc),
            "zohocrm" => Ok(Provider::Zohocrm),
            "pipedrive" => Ok(Provider::Pipedrive),
            "closecrm" => Ok(Provider::Closecrm),
            "linear" => Ok(Provider::Linear),
            "clickup" => Ok(Provider::Clickup),
            "jira" => Ok(Provider::Jira),
            "slack" => Ok(Provider::Slack),
            "discord" => Ok(Provider::Discord),
            _ => Err(ParseProviderError(s.to_string())),
        }
    }
}

/// Error parsing a provider from a string.
#[derive(Debug, Clone)]
pub struct ParseProviderError(String);

impl fmt::Display for ParseProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized provider '{}'", self.0)
    }
}

impl std::error::Error for ParseProviderError {}

/// Category a canonical object type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectCategory {
    /// CRM objects (contacts, companies, deals, ...)
    Crm,
    /// Chat objects (channels, messages, chat users)
    Chat,
    /// Ticketing objects (tasks, comments, ticket users)
    Ticket,
}

/// Canonical object type exposed by the unified API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectType {
    // CRM standard objects
    /// CRM company / account
    Company,
    /// CRM contact
    Contact,
    /// CRM deal / opportunity
    Deal,
    /// CRM calendar event / meeting
    Event,
    /// CRM lead
    Lead,
    /// CRM note
    Note,
    /// CRM task
    Task,
    /// CRM user (sales rep / owner)
    User,

    // Chat standard objects
    /// Chat channel
    Channel,
    /// Chat message
    Message,
    /// Chat user
    ChatUser,

    // Ticketing standard objects
    /// Ticketing task / issue
    TicketTask,
    /// Ticketing user
    TicketUser,
    /// Ticketing comment
    TicketComment,
}

impl ObjectType {
    /// Get all canonical object types.
    #[must_use]
    pub fn all() -> &'static [ObjectType] {
        &[
            ObjectType::Company,
            ObjectType::Contact,
            ObjectType::Deal,
            ObjectType::Event,
            ObjectType::Lead,
            ObjectType::Note,
            ObjectType::Task,
            ObjectType::User,
            ObjectType::Channel,
            ObjectType::Message,
            ObjectType::ChatUser,
            ObjectType::TicketTask,
            ObjectType::TicketUser,
            ObjectType::TicketComment,
        ]
    }

    /// Get the category this object type belongs to.
    #[must_use]
    pub fn category(&self) -> ObjectCategory {
        match self {
            ObjectType::Company
            | ObjectType::Contact
            | ObjectType::Deal
            | ObjectType::Event
            | ObjectType::Lead
            | ObjectType::Note
            | ObjectType::Task
            | ObjectType::User => ObjectCategory::Crm,
            ObjectType::Channel | ObjectType::Message | ObjectType::ChatUser => {
                ObjectCategory::Chat
            }
            ObjectType::TicketTask | ObjectType::TicketUser | ObjectType::TicketComment => {
                ObjectCategory::Ticket
            }
        }
    }

    /// Get the camel-case string representation used on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Company => "company",
            ObjectType::Contact => "contact",
            ObjectType::Deal => "deal",
            ObjectType::Event => "event",
            ObjectType::Lead => "lead",
            ObjectType::Note => "note",
            ObjectType::Task => "task",
            ObjectType::User => "user",
            ObjectType::Channel => "channel",
            ObjectType::Message => "message",
            ObjectType::ChatUser => "chatUser",
            ObjectType::TicketTask => "ticketTask",
            ObjectType::TicketUser => "ticketUser",
            ObjectType::TicketComment => "ticketComment",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = ParseObjectTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectType::all()
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| ParseObjectTypeError(s.to_string()))
    }
}

/// Error parsing an object type from a string.
#[derive(Debug, Clone)]
pub struct ParseObjectTypeError(String);

impl fmt::Display for ParseObjectTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized object type '{}'", self.0)
    }
}

impl std::error::Error for ParseObjectTypeError {}

/// The (provider, object type) pair that selects mapping and
/// preprocessing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectTypeKey {
    /// The third-party provider the payload came from.
    pub provider: Provider,
    /// The canonical object type the payload maps to.
    pub object_type: ObjectType,
}

impl ObjectTypeKey {
    /// Create a new key.
    #[must_use]
    pub fn new(provider: Provider, object_type: ObjectType) -> Self {
        Self {
            provider,
            object_type,
        }
    }
}

impl fmt::Display for ObjectTypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.provider, self.object_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_round_trip() {
        for provider in Provider::all() {
            let parsed: Provider = provider.as_str().parse().unwrap();
            assert_eq!(parsed, *provider);
        }
    }

    #[test]
    fn test_provider_parse_is_case_insensitive() {
        let parsed: Provider = "HubSpot".parse().unwrap();
        assert_eq!(parsed, Provider::Hubspot);
    }

    #[test]
    fn test_provider_parse_failure() {
        let err = "unknown_provider".parse::<Provider>().unwrap_err();
        assert!(err.to_string().contains("unknown_provider"));
    }

    #[test]
    fn test_object_type_round_trip() {
        for object_type in ObjectType::all() {
            let parsed: ObjectType = object_type.as_str().parse().unwrap();
            assert_eq!(parsed, *object_type);
        }
    }

    #[test]
    fn test_object_type_categories() {
        assert_eq!(ObjectType::Contact.category(), ObjectCategory::Crm);
        assert_eq!(ObjectType::Message.category(), ObjectCategory::Chat);
        assert_eq!(ObjectType::TicketUser.category(), ObjectCategory::Ticket);
    }

    #[test]
    fn test_object_type_serde_is_camel_case() {
        let json = serde_json::to_string(&ObjectType::TicketUser).unwrap();
        assert_eq!(json, "\"ticketUser\"");

        let parsed: ObjectType = serde_json::from_str("\"chatUser\"").unwrap();
        assert_eq!(parsed, ObjectType::ChatUser);
    }

    #[test]
    fn test_key_display() {
        let key = ObjectTypeKey::new(Provider::Linear, ObjectType::TicketUser);
        assert_eq!(key.to_string(), "linear/ticketUser");
    }
}
