use crate::enums::entity_kind::EntityKind;
use crate::enums::record_status::{CANCELADA, PENDIENTE, RECIBIDA};
use crate::shared::metadata::{EntitySchema, EntityUiMetadata, FieldDescriptor, SelectOption};

pub const ID_FIELD: &str = "id_orden_proveedor";

pub const STATUSES: &[&str] = &[PENDIENTE, RECIBIDA, CANCELADA];

const STATUS_OPTIONS: &[SelectOption] = &[
    SelectOption::new(PENDIENTE, "Pendiente"),
    SelectOption::new(RECIBIDA, "Recibida"),
    SelectOption::new(CANCELADA, "Cancelada"),
];

pub const FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::number("id_proveedor", "ID Proveedor").required(),
    FieldDescriptor::select("estado", "Estado", STATUS_OPTIONS).required(),
    FieldDescriptor::number("total", "Total").required(),
];

pub const RECORD_FIELDS: &[&str] = &[ID_FIELD, "id_proveedor", "fecha_orden", "estado", "total"];

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::Ordenes,
    id_field: ID_FIELD,
    fields: FIELDS,
    record_fields: RECORD_FIELDS,
    statuses: STATUSES,
    ui: EntityUiMetadata {
        element_name: "orden",
        list_name: "Órdenes",
        icon: Some("purchases"),
    },
};
