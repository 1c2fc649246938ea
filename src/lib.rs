//! Response assembly for HTTP clients based on `tokio` tools
//!
//! The transport reports a response in pieces: a status line, a header
//! block, zero or more body chunks and finally completion. This crate
//! captures the status line (and the endpoints of the connection) into a
//! `StatusSnapshot` the moment it arrives and later fuses it with the
//! finalized headers and body fragments into an immutable `Response`.
//!
//! Start with `client::Exchange` if you have a stream of transport events,
//! or use `client::StatusSnapshot` and `client::assemble` directly.
extern crate futures;
extern crate url;
extern crate httparse;
extern crate tokio_core;
#[macro_use(quick_error)] extern crate quick_error;
#[macro_use] extern crate matches;
#[macro_use] extern crate log;


pub mod client;
mod enums;
mod headers;

pub use enums::{Version, Protocol, Status};
