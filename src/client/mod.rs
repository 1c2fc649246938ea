//! Capturing and assembling HTTP client responses
//!
mod config;
mod connection;
mod errors;
mod header_map;
mod response;
mod status;
pub mod buffered;

pub use self::errors::Error;
pub use self::connection::Connection;
pub use self::header_map::{HeaderMap, Iter, GetAll, ContentHeaders};
pub use self::response::{Response, Fragments, assemble};
pub use self::status::{StatusLineSource, StatusLine, StatusSnapshot};
pub use self::buffered::Exchange;


/// Client configuration shared (read-only) by all exchanges
///
/// Create one with `Config::new()`, tweak it and call `done()` to get an
/// `Arc<Config>` which is referenced by every `StatusSnapshot`.
#[derive(Debug, Clone)]
pub struct Config {
    max_response_length: usize,
    max_headers: usize,
}
