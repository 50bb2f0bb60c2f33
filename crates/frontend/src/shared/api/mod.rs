//! Transport client for the backend REST API

mod client;
mod error;
#[cfg(test)]
pub(crate) mod fake;
mod transport;

pub use client::{Acknowledgement, EntityApi};
pub use error::RequestError;
pub use transport::{GlooTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
