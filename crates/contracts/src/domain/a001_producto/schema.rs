use crate::enums::entity_kind::EntityKind;
use crate::shared::metadata::{EntitySchema, EntityUiMetadata, FieldDescriptor};

pub const ID_FIELD: &str = "id_producto";

pub const FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::text("nombre", "Nombre").required(),
    FieldDescriptor::textarea("descripcion", "Descripción"),
    FieldDescriptor::number("precio", "Precio").required(),
    FieldDescriptor::number("existencia", "Existencia"),
    FieldDescriptor::number("id_proveedor", "ID Proveedor"),
];

pub const RECORD_FIELDS: &[&str] = &[
    ID_FIELD,
    "nombre",
    "descripcion",
    "precio",
    "existencia",
    "id_proveedor",
    "fecha_creacion",
];

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::Productos,
    id_field: ID_FIELD,
    fields: FIELDS,
    record_fields: RECORD_FIELDS,
    statuses: &[],
    ui: EntityUiMetadata {
        element_name: "producto",
        list_name: "Productos",
        icon: Some("products"),
    },
};
