//! Transport abstraction over the cloud management surfaces.
//!
//! The engine and the resource adapters never see a concrete HTTP client;
//! they are written against [`RestTransport`], and tests substitute an
//! in-memory implementation.

mod errors;
mod http;
mod transport;
mod types;

pub use errors::ApiError;
pub use http::HttpTransport;
pub use transport::RestTransport;
pub use types::{DeleteRequest, ListRequest};
