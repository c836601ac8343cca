//! Unification pipeline error types
//!
//! Only two classes of failure originate inside the pipeline: configuration
//! errors (no mapping rules exist for the request) and malformed input.
//! Provider-network and authentication failures belong to the adapter layer
//! and never appear here.

use thiserror::Error;

use crate::types::{ObjectType, ObjectTypeKey};

/// Error that can occur during unification.
#[derive(Debug, Clone, Error)]
pub enum UnifyError {
    /// No mapping table is registered for the requested
    /// (provider, object type) pair.
    ///
    /// Fatal to the single transformation: the caller must not receive a
    /// partially-mapped object that silently drops data.
    #[error("no mapping table registered for {key}")]
    MissingMappingTable {
        /// The pair that had no registered table.
        key: ObjectTypeKey,
    },

    /// The raw input is not a well-formed string-keyed object.
    #[error("malformed input: {message}")]
    MalformedInput {
        /// Description of the malformation.
        message: String,
    },

    /// The tenant mapping configuration targets a different object type
    /// than the one being transformed.
    #[error("mapping config is for object type '{config}', requested '{requested}'")]
    ObjectTypeMismatch {
        /// Object type the configuration was written for.
        config: ObjectType,
        /// Object type the caller requested.
        requested: ObjectType,
    },

    /// A tenant override names a field outside the canonical schema of the
    /// object type.
    #[error("'{field}' is not a canonical field of object type '{object_type}'")]
    InvalidFieldOverride {
        /// The offending canonical field name.
        field: String,
        /// The object type whose schema was checked.
        object_type: ObjectType,
    },
}

impl UnifyError {
    /// Check if this error is a configuration error.
    ///
    /// Configuration errors require a mapping-table or tenant-config change;
    /// retrying the same transformation cannot succeed.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            UnifyError::MissingMappingTable { .. }
                | UnifyError::ObjectTypeMismatch { .. }
                | UnifyError::InvalidFieldOverride { .. }
        )
    }

    /// Get an error code for classification.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            UnifyError::MissingMappingTable { .. } => "MISSING_MAPPING_TABLE",
            UnifyError::MalformedInput { .. } => "MALFORMED_INPUT",
            UnifyError::ObjectTypeMismatch { .. } => "OBJECT_TYPE_MISMATCH",
            UnifyError::InvalidFieldOverride { .. } => "INVALID_FIELD_OVERRIDE",
        }
    }

    /// Create a malformed input error.
    pub fn malformed_input(message: impl Into<String>) -> Self {
        UnifyError::MalformedInput {
            message: message.into(),
        }
    }
}

/// Result type for unification operations.
pub type UnifyResult<T> = Result<T, UnifyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ObjectType, Provider};

    #[test]
    fn test_configuration_classification() {
        let key = ObjectTypeKey::new(Provider::Linear, ObjectType::TicketUser);
        let config_errors = vec![
            UnifyError::MissingMappingTable { key },
            UnifyError::ObjectTypeMismatch {
                config: ObjectType::Contact,
                requested: ObjectType::Lead,
            },
            UnifyError::InvalidFieldOverride {
                field: "favorite_color".to_string(),
                object_type: ObjectType::Contact,
            },
        ];
        for err in config_errors {
            assert!(err.is_configuration(), "expected {} to be configuration", err.error_code());
        }

        assert!(!UnifyError::malformed_input("not an object").is_configuration());
    }

    #[test]
    fn test_error_display() {
        let key = ObjectTypeKey::new(Provider::Slack, ObjectType::Deal);
        let err = UnifyError::MissingMappingTable { key };
        assert_eq!(err.to_string(), "no mapping table registered for slack/deal");

        let err = UnifyError::malformed_input("expected a JSON object, got array");
        assert_eq!(
            err.to_string(),
            "malformed input: expected a JSON object, got array"
        );
    }

    #[test]
    fn test_error_codes() {
        let key = ObjectTypeKey::new(Provider::Hubspot, ObjectType::Contact);
        assert_eq!(
            UnifyError::MissingMappingTable { key }.error_code(),
            "MISSING_MAPPING_TABLE"
        );
        assert_eq!(
            UnifyError::malformed_input("x").error_code(),
            "MALFORMED_INPUT"
        );
    }
}
