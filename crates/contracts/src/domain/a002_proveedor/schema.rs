use crate::enums::entity_kind::EntityKind;
use crate::shared::metadata::{EntitySchema, EntityUiMetadata, FieldDescriptor};

pub const ID_FIELD: &str = "id_proveedor";

pub const FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::text("nombre", "Nombre").required(),
    FieldDescriptor::text("direccion", "Dirección"),
    FieldDescriptor::text("telefono", "Teléfono"),
    FieldDescriptor::email("email", "Email"),
];

pub const RECORD_FIELDS: &[&str] = &[
    ID_FIELD,
    "nombre",
    "direccion",
    "telefono",
    "email",
    "fecha_registro",
];

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::Proveedores,
    id_field: ID_FIELD,
    fields: FIELDS,
    record_fields: RECORD_FIELDS,
    statuses: &[],
    ui: EntityUiMetadata {
        element_name: "proveedor",
        list_name: "Proveedores",
        icon: Some("suppliers"),
    },
};
