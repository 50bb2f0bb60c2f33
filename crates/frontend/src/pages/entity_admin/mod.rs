//! Admin page: one entity type at a time, form above table

pub mod controller;
pub mod state;
pub mod view;

pub use controller::AdminController;
pub use state::{AdminState, StateStore};
pub use view::EntityAdminPage;
