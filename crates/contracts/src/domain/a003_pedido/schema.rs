use crate::enums::entity_kind::EntityKind;
use crate::enums::record_status::{CANCELADO, COMPLETADO, PENDIENTE};
use crate::shared::metadata::{EntitySchema, EntityUiMetadata, FieldDescriptor, SelectOption};

pub const ID_FIELD: &str = "id_pedido";

pub const STATUSES: &[&str] = &[PENDIENTE, COMPLETADO, CANCELADO];

const STATUS_OPTIONS: &[SelectOption] = &[
    SelectOption::new(PENDIENTE, "Pendiente"),
    SelectOption::new(COMPLETADO, "Completado"),
    SelectOption::new(CANCELADO, "Cancelado"),
];

pub const FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::select("estado", "Estado", STATUS_OPTIONS).required(),
    FieldDescriptor::number("total", "Total").required(),
];

pub const RECORD_FIELDS: &[&str] = &[ID_FIELD, "fecha_pedido", "estado", "total"];

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::Pedidos,
    id_field: ID_FIELD,
    fields: FIELDS,
    record_fields: RECORD_FIELDS,
    statuses: STATUSES,
    ui: EntityUiMetadata {
        element_name: "pedido",
        list_name: "Pedidos",
        icon: Some("orders"),
    },
};
