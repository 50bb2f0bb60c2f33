//! Status values carried in the `estado` field

/// Field holding the record status
pub const STATUS_FIELD: &str = "estado";

pub const PENDIENTE: &str = "pendiente";
pub const COMPLETADO: &str = "completado";
pub const COMPLETADA: &str = "completada";
pub const CANCELADO: &str = "cancelado";
pub const CANCELADA: &str = "cancelada";
pub const RECIBIDA: &str = "recibida";

/// Both grammatical genders of "cancelled" are used across entity types
pub fn is_cancelled(status: &str) -> bool {
    status == CANCELADO || status == CANCELADA
}

pub fn is_pending(status: &str) -> bool {
    status == PENDIENTE
}
