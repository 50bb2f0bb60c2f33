pub mod entity_kind;
pub mod record_status;
