//! Remote movie API (OMDb).
//!
//! The plugin never performs I/O here: requests are issued by the Zellij
//! runtime through `web_request`, and their results come back as events. This
//! module only builds request URLs, tags requests with a routing context, and
//! decodes the JSON bodies of completed requests.
//!
//! # Modules
//!
//! - [`endpoint`]: URL construction for search and lookup-by-id
//! - [`models`]: serde wire types and conversion into domain types
//! - [`response`]: status + body → domain value or `FetchError`
//! - [`context`]: request routing map passed through Zellij

pub mod context;
pub mod endpoint;
pub mod models;
pub mod response;

pub use context::RequestContext;
pub use endpoint::{OmdbEndpoint, DEFAULT_API_URL};
pub use response::{decode_detail, decode_search};
