pub mod header;

pub use header::{EntityTabs, Header};
