pub mod coercion;
pub mod metadata;
pub mod record;
