//! Form engine: draft state machine and its Leptos view

pub mod draft;
pub mod view;

pub use draft::{FormDraft, FormMode};
pub use view::EntityForm;
