pub mod entity_admin;
