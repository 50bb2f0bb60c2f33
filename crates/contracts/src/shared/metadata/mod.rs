//! Metadata types for describing entity forms
//!
//! Every entity type the admin manages is described by a static
//! [`EntitySchema`]: its identifier field, the ordered form fields and the
//! keys the backend returns for its records. All types use `'static`
//! lifetimes so schemas are plain compile-time constants.
//!
//! ## Usage
//!
//! ```rust
//! use contracts::domain::registry::form_fields;
//!
//! for field in form_fields("productos") {
//!     println!("{}: {}", field.name, field.label);
//! }
//! ```

mod field_kind;
mod types;
mod validation;

pub use field_kind::FieldKind;
pub use types::{EntitySchema, EntityUiMetadata, FieldDescriptor, SelectOption};
pub use validation::{ValidationError, ValidationRules};
