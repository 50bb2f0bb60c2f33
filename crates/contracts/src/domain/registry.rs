//! Field schema registry
//!
//! Pure lookups from an entity-type name (the REST collection name) to its
//! static schema. Unknown names never fail: they resolve to the `"id"`
//! identifier and an empty field list.

use crate::enums::entity_kind::EntityKind;
use crate::shared::metadata::{EntitySchema, FieldDescriptor};

/// Identifier field used for entity types without a schema
pub const DEFAULT_ID_FIELD: &str = "id";

pub fn schema_for(entity_type: &str) -> Option<&'static EntitySchema> {
    EntityKind::from_code(entity_type).map(|kind| kind.schema())
}

/// Name of the field identifying records of `entity_type`
pub fn identifier_field(entity_type: &str) -> &'static str {
    schema_for(entity_type)
        .map(|schema| schema.id_field)
        .unwrap_or(DEFAULT_ID_FIELD)
}

/// Ordered form fields of `entity_type`, empty when unknown
pub fn form_fields(entity_type: &str) -> &'static [FieldDescriptor] {
    schema_for(entity_type)
        .map(|schema| schema.fields)
        .unwrap_or(&[])
}
