//! Shared contracts of the entity admin
//!
//! Target-independent types used by the frontend: entity kinds, the field
//! schema registry, the open record type and typed value coercion.

pub mod domain;
pub mod enums;
pub mod shared;
