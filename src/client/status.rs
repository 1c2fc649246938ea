use std::net::SocketAddr;
use std::sync::Arc;

use httparse;
use url::Url;

use enums::{Protocol, Status, Version};
use client::{Config, Error, HeaderMap, Response};
use client::connection::{capture, Connection};
use client::response::assemble;


/// Anything the transport can provide a status line from
///
/// Implemented by `StatusLine`. Transports with their own parsed
/// representation may implement it directly.
pub trait StatusLineSource {
    /// Status code exactly as received
    fn code(&self) -> u16;
    /// Reason phrase exactly as received (may be empty)
    fn reason_text(&self) -> &str;
    /// Protocol identity of the response
    fn protocol(&self) -> Protocol;
}

/// Owned parsed status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    code: u16,
    reason: String,
    protocol: Protocol,
}

/// Immutable capture of the status line and connection endpoints
///
/// Created by the transport-event handler as soon as the status line is
/// parsed. Both endpoints are read from the connection right in the
/// constructor; no accessor of this structure ever touches the
/// transport again.
#[derive(Debug, Clone)]
pub struct StatusSnapshot {
    uri: Arc<Url>,
    config: Arc<Config>,
    code: u16,
    reason: String,
    protocol: Protocol,
    remote: Option<SocketAddr>,
    local: Option<SocketAddr>,
}

impl StatusLine {
    pub fn new(code: u16, reason: &str, protocol: Protocol) -> StatusLine {
        StatusLine {
            code: code,
            reason: reason.to_string(),
            protocol: protocol,
        }
    }
    /// Takes the status line out of a complete `httparse` response
    ///
    /// The parse must have returned `Status::Complete`, partial results
    /// have no status line yet.
    pub fn from_httparse(raw: &httparse::Response) -> Result<StatusLine, Error>
    {
        let (ver, code) = match (raw.version, raw.code) {
            (Some(ver), Some(code)) => (ver, code),
            _ => return Err(Error::IncompleteStatusLine),
        };
        let version = Version::from_httparse(ver)
            .ok_or(Error::UnsupportedVersion(ver))?;
        Ok(StatusLine {
            code: code,
            reason: raw.reason.unwrap_or("").to_string(),
            protocol: version.into(),
        })
    }
}

impl StatusLineSource for StatusLine {
    fn code(&self) -> u16 {
        self.code
    }
    fn reason_text(&self) -> &str {
        &self.reason
    }
    fn protocol(&self) -> Protocol {
        self.protocol.clone()
    }
}

impl<'a, T: StatusLineSource + ?Sized> StatusLineSource for &'a T {
    fn code(&self) -> u16 {
        (**self).code()
    }
    fn reason_text(&self) -> &str {
        (**self).reason_text()
    }
    fn protocol(&self) -> Protocol {
        (**self).protocol()
    }
}

impl StatusSnapshot {
    /// Capture status line and endpoints of the connection
    ///
    /// Pass `None` for connection if response isn't backed by a live
    /// connection (i.e. it's cached or synthetic), both endpoints are
    /// absent then. The connection is only borrowed for the duration of
    /// this call.
    pub fn new<S>(uri: &Arc<Url>, config: &Arc<Config>, line: &S,
        connection: Option<&dyn Connection>)
        -> StatusSnapshot
        where S: StatusLineSource + ?Sized,
    {
        let (remote, local) = capture(connection);
        let snapshot = StatusSnapshot {
            uri: uri.clone(),
            config: config.clone(),
            code: line.code(),
            reason: line.reason_text().to_string(),
            protocol: line.protocol(),
            remote: remote,
            local: local,
        };
        trace!("Status of {}: {} {} {:?} (remote {:?}, local {:?})",
            snapshot.uri, snapshot.protocol, snapshot.code, snapshot.reason,
            snapshot.remote, snapshot.local);
        snapshot
    }
    /// Status code as received, no validation is done
    pub fn status_code(&self) -> u16 {
        self.code
    }
    /// Reason phrase as received, may not match the code
    pub fn status_text(&self) -> &str {
        &self.reason
    }
    /// Returns status if it is one of the well-known ones
    pub fn status(&self) -> Option<Status> {
        Status::from_code(self.code)
    }
    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }
    pub fn protocol_name(&self) -> &str {
        self.protocol.name()
    }
    pub fn protocol_major_version(&self) -> u8 {
        self.protocol.major_version()
    }
    pub fn protocol_minor_version(&self) -> u8 {
        self.protocol.minor_version()
    }
    pub fn protocol_text(&self) -> &str {
        self.protocol.text()
    }
    /// Peer address at the time status line was received
    pub fn remote_endpoint(&self) -> Option<SocketAddr> {
        self.remote
    }
    /// Our address at the time status line was received
    pub fn local_endpoint(&self) -> Option<SocketAddr> {
        self.local
    }
    /// Target of the request this is a response to
    pub fn uri(&self) -> &Url {
        &self.uri
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    /// Fuse this snapshot with headers and body into a response
    ///
    /// Shortcut for `assemble(self, headers, fragments)`.
    pub fn prepare_response(self, headers: HeaderMap,
        fragments: Vec<Vec<u8>>)
        -> Response
    {
        assemble(self, headers, fragments)
    }
}
