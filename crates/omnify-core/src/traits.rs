//! Multi-Tenant Traits
//!
//! This module provides traits for multi-tenant entities in omnify.
//!
//! # Example
//!
//! ```
//! use omnify_core::{TenantId, TenantAware};
//!
//! struct MappingRecord {
//!     tenant_id: TenantId,
//!     object_type: String,
//! }
//!
//! impl TenantAware for MappingRecord {
//!     fn tenant_id(&self) -> TenantId {
//!         self.tenant_id
//!     }
//! }
//!
//! // Generic function that works with any TenantAware entity
//! fn verify_tenant<T: TenantAware>(entity: &T, expected: TenantId) -> bool {
//!     entity.tenant_id() == expected
//! }
//!
//! let tenant = TenantId::new();
//! let record = MappingRecord {
//!     tenant_id: tenant,
//!     object_type: "contact".to_string(),
//! };
//!
//! assert!(verify_tenant(&record, tenant));
//! ```

use crate::ids::TenantId;

/// Trait for entities that belong to a specific tenant.
///
/// Implementing this trait marks an entity as tenant-scoped, enabling
/// compile-time verification that tenant isolation is properly implemented.
///
/// # Object Safety
///
/// This trait is object-safe, meaning it can be used with trait objects:
/// `Box<dyn TenantAware>` or `&dyn TenantAware`.
pub trait TenantAware {
    /// Returns the tenant ID associated with this entity.
    ///
    /// This method returns an owned `TenantId` (which is `Copy`) for
    /// convenience, allowing callers to use the value without lifetime
    /// concerns.
    fn tenant_id(&self) -> TenantId;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestEntity {
        tenant_id: TenantId,
    }

    impl TenantAware for TestEntity {
        fn tenant_id(&self) -> TenantId {
            self.tenant_id
        }
    }

    #[test]
    fn test_tenant_aware_returns_tenant() {
        let tenant = TenantId::new();
        let entity = TestEntity { tenant_id: tenant };
        assert_eq!(entity.tenant_id(), tenant);
    }

    #[test]
    fn test_tenant_aware_is_object_safe() {
        let tenant = TenantId::new();
        let entity = TestEntity { tenant_id: tenant };
        let dyn_ref: &dyn TenantAware = &entity;
        assert_eq!(dyn_ref.tenant_id(), tenant);
    }
}
