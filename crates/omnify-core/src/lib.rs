//! omnify Core Library
//!
//! Shared types and traits for omnify.
//!
//! # Modules
//!
//! - [`ids`] - Strongly typed identifiers (`TenantId`, `ConnectionId`,
//!   `SchemaMappingId`)
//! - [`traits`] - Multi-tenant traits (`TenantAware`)
//!
//! # Example
//!
//! ```
//! use omnify_core::{TenantId, SchemaMappingId, TenantAware};
//!
//! // Create strongly typed IDs
//! let tenant_id = TenantId::new();
//! let mapping_id = SchemaMappingId::new();
//! ```

pub mod ids;
pub mod traits;

// Re-export main types for convenient access
pub use ids::{ConnectionId, ParseIdError, SchemaMappingId, TenantId};
pub use traits::TenantAware;
