//! Strongly Typed Identifiers
//!
//! This module provides type-safe identifier types for omnify.
//! Using the newtype pattern, these types prevent accidental misuse of
//! different ID types at compile time.
//!
//! # Example
//!
//! ```
//! use omnify_core::{TenantId, ConnectionId};
//!
//! let tenant = TenantId::new();
//! let connection = ConnectionId::new();
//!
//! // Type safety: cannot pass ConnectionId where TenantId is expected
//! fn requires_tenant(id: TenantId) -> String {
//!     id.to_string()
//! }
//!
//! let result = requires_tenant(tenant);
//! // requires_tenant(connection); // This would not compile!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Error type for ID parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse
    pub id_type: &'static str,
    /// The underlying UUID parse error message
    pub message: String,
}

impl Display for ParseIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse {}: {}", self.id_type, self.message)
    }
}

impl std::error::Error for ParseIdError {}

/// Macro to define a strongly-typed ID type
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random ID using UUID v4.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns a reference to the underlying UUID.
            #[must_use]
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|e| ParseIdError {
                        id_type: stringify!($name),
                        message: e.to_string(),
                    })
            }
        }
    };
}

define_id!(
    /// Strongly typed identifier for tenants.
    ///
    /// A tenant is a customer account that may customize field mappings.
    /// Provides compile-time type safety to prevent confusion with other
    /// ID types.
    ///
    /// # Example
    ///
    /// ```
    /// use omnify_core::TenantId;
    /// use uuid::Uuid;
    ///
    /// // Create a new random TenantId
    /// let tenant_id = TenantId::new();
    /// println!("Tenant: {}", tenant_id);
    ///
    /// // Create from existing UUID
    /// let uuid = Uuid::new_v4();
    /// let tenant_id = TenantId::from_uuid(uuid);
    /// assert_eq!(tenant_id.as_uuid(), &uuid);
    /// ```
    TenantId
);

define_id!(
    /// Strongly typed identifier for a tenant's connection to a provider.
    ///
    /// A connection binds a tenant to one third-party provider account.
    /// Field-mapping configurations are saved per connection.
    ConnectionId
);

define_id!(
    /// Strongly typed identifier for a tenant schema-mapping record.
    ///
    /// Identifies the field-mapping configuration a tenant has saved for a
    /// given canonical object type.
    SchemaMappingId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenant_id_new_is_random() {
        let id1 = TenantId::new();
        let id2 = TenantId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_tenant_id_from_uuid_roundtrip() {
        let uuid = Uuid::new_v4();
        let id = TenantId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_tenant_id_from_str() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: TenantId = uuid_str.parse().unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }

    #[test]
    fn test_tenant_id_parse_failure() {
        let err = "not-a-uuid".parse::<TenantId>().unwrap_err();
        assert_eq!(err.id_type, "TenantId");
        assert!(err.to_string().contains("Failed to parse TenantId"));
    }

    #[test]
    fn test_id_serialization_is_transparent() {
        let id: SchemaMappingId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");

        let parsed: SchemaMappingId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_connection_id_new_is_random() {
        let id1 = ConnectionId::new();
        let id2 = ConnectionId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_schema_mapping_id_display() {
        let uuid = Uuid::new_v4();
        let id = SchemaMappingId::from_uuid(uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }
}
