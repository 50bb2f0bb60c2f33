use crate::enums::entity_kind::EntityKind;
use crate::enums::record_status::{CANCELADA, COMPLETADA, PENDIENTE};
use crate::shared::metadata::{EntitySchema, EntityUiMetadata, FieldDescriptor, SelectOption};

pub const ID_FIELD: &str = "id_venta";

pub const STATUSES: &[&str] = &[COMPLETADA, PENDIENTE, CANCELADA];

const STATUS_OPTIONS: &[SelectOption] = &[
    SelectOption::new(COMPLETADA, "Completada"),
    SelectOption::new(PENDIENTE, "Pendiente"),
    SelectOption::new(CANCELADA, "Cancelada"),
];

pub const FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::select("estado", "Estado", STATUS_OPTIONS).required(),
    FieldDescriptor::number("total", "Total").required(),
];

pub const RECORD_FIELDS: &[&str] = &[ID_FIELD, "fecha_venta", "estado", "total"];

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::Ventas,
    id_field: ID_FIELD,
    fields: FIELDS,
    record_fields: RECORD_FIELDS,
    statuses: STATUSES,
    ui: EntityUiMetadata {
        element_name: "venta",
        list_name: "Ventas",
        icon: Some("payments"),
    },
};
