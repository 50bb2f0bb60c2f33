//! Table engine: column derivation, cell formatting and the table view

pub mod columns;
pub mod view;

pub use columns::{RowActions, TableModel};
pub use view::EntityTable;
