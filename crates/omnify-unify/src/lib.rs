//! Field mapping and object unification for SaaS provider payloads.
//!
//! This crate normalizes raw CRM, ticketing, and chat objects from
//! third-party providers into a canonical schema, and projects canonical
//! objects back into provider shape. The pipeline is pure and synchronous:
//!
//! 1. [`preprocess`](preprocess::preprocess) reshapes provider quirks
//!    (nested property bags, metadata keys, primary-entry arrays).
//! 2. [`transform`](transform::transform) applies the resolved mapping
//!    table, with optional per-tenant field overrides.
//! 3. [`unify`](unify::unify) reconciles every unclaimed key of the
//!    original payload into the `additional` container, so no data is
//!    lost in translation.
//!
//! # Example
//!
//! ```
//! use omnify_unify::prelude::*;
//! use serde_json::json;
//!
//! let registry = MappingRegistry::with_defaults();
//! let key = ObjectTypeKey::new(Provider::Hubspot, ObjectType::Contact);
//! let raw = RawObject::from_value(json!({
//!     "id": "512",
//!     "properties": { "email": "jane@example.com", "firstname": "Jane" },
//! }))?;
//!
//! let contact = unify(&raw, key, None, None, &registry)?;
//! assert_eq!(contact.field("email").and_then(FieldValue::as_str), Some("jane@example.com"));
//! assert!(contact.additional.contains_key("id"));
//! # Ok::<(), omnify_unify::UnifyError>(())
//! ```

pub mod canonical;
pub mod error;
pub mod mapping;
pub mod preprocess;
pub mod providers;
pub mod registry;
pub mod transform;
pub mod types;
pub mod unify;
pub mod value;

pub use error::{UnifyError, UnifyResult};

/// Common imports for working with the unification pipeline.
pub mod prelude {
    pub use crate::canonical::{canonical_fields, CanonicalObject};
    pub use crate::error::{UnifyError, UnifyResult};
    pub use crate::mapping::{
        FieldMappingConfig, FieldOverride, MappingRule, MappingTable, SourcePath,
    };
    pub use crate::registry::MappingRegistry;
    pub use crate::transform::project;
    pub use crate::types::{ObjectCategory, ObjectType, ObjectTypeKey, Provider};
    pub use crate::unify::{unify, unify_batch, unify_value};
    pub use crate::value::{FieldValue, RawObject};
    pub use omnify_core::{ConnectionId, SchemaMappingId, TenantAware, TenantId};
}
