//! Unify orchestrator
//!
//! Composes preprocessing, mapping resolution, and transformation, then
//! reconciles every unclaimed key of the original payload into the
//! canonical object's `additional` container. Pure: no I/O, no shared
//! state, inputs are never mutated. Errors propagate to the caller; the
//! pipeline never returns a partially-populated object alongside an error.

use rayon::prelude::*;
use serde_json::Value;
use tracing::debug;

use omnify_core::SchemaMappingId;

use crate::canonical::CanonicalObject;
use crate::error::UnifyResult;
use crate::mapping::FieldMappingConfig;
use crate::preprocess::preprocess;
use crate::registry::MappingRegistry;
use crate::transform::transform;
use crate::types::ObjectTypeKey;
use crate::value::RawObject;

/// The literal key denoting a nested provider-specific field container.
/// It is handled by preprocessing and excluded from `additional`.
const PROPERTIES_KEY: &str = "properties";

/// Unify one raw provider object into its canonical representation.
///
/// Runs the preprocessor, then the model transformer, then a
/// reconciliation pass: every key of the *original* raw object that the
/// mapping did not claim (and that is not the literal `"properties"` key)
/// is preserved under `additional`. This holds even when preprocessing
/// renamed or restructured fields the transformer didn't claim.
///
/// `tenant_mapping_id` identifies the tenant's stored schema-mapping
/// record; it is carried for diagnostics only, since the configuration
/// record itself arrives as `config`.
///
/// # Errors
///
/// Propagates transformer configuration errors unchanged; silent data loss
/// is considered worse than a visible failure.
pub fn unify(
    raw: &RawObject,
    key: ObjectTypeKey,
    tenant_mapping_id: Option<SchemaMappingId>,
    config: Option<&FieldMappingConfig>,
    registry: &MappingRegistry,
) -> UnifyResult<CanonicalObject> {
    let preprocessed = preprocess(raw, key);
    let transformed = transform(&preprocessed, key, config, registry)?;

    let mut object = transformed.object;
    for (name, value) in raw.iter() {
        if name == PROPERTIES_KEY || transformed.claimed_keys.contains(name.as_str()) {
            continue;
        }
        object.set_additional(name.clone(), value.clone());
    }

    debug!(
        key = %key,
        tenant_mapping_id = ?tenant_mapping_id,
        fields = object.field_count(),
        additional = object.additional.len(),
        "unified object"
    );

    Ok(object)
}

/// Unify a JSON value, rejecting non-object input.
///
/// Convenience entry point for callers holding untyped provider responses.
///
/// # Errors
///
/// Returns `MalformedInput` for null or non-object input, plus everything
/// [`unify`] can return.
pub fn unify_value(
    value: Value,
    key: ObjectTypeKey,
    tenant_mapping_id: Option<SchemaMappingId>,
    config: Option<&FieldMappingConfig>,
    registry: &MappingRegistry,
) -> UnifyResult<CanonicalObject> {
    let raw = RawObject::from_value(value)?;
    unify(&raw, key, tenant_mapping_id, config, registry)
}

/// Unify a batch of raw objects concurrently.
///
/// Each object is transformed independently; results are returned in the
/// original input order regardless of completion order, since callers rely
/// on provider ordering. The first error aborts the batch result.
///
/// # Errors
///
/// Returns the first error produced by any element's transformation.
pub fn unify_batch(
    objects: &[RawObject],
    key: ObjectTypeKey,
    tenant_mapping_id: Option<SchemaMappingId>,
    config: Option<&FieldMappingConfig>,
    registry: &MappingRegistry,
) -> UnifyResult<Vec<CanonicalObject>> {
    objects
        .par_iter()
        .map(|raw| unify(raw, key, tenant_mapping_id, config, registry))
        .collect()
}
