pub mod api;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod entity_form;
pub mod entity_table;
pub mod icons;
