use std::net::SocketAddr;
use std::slice::Iter as SliceIter;

use url::Url;

use enums::{Protocol, Status};
use client::{Config, Error, HeaderMap, GetAll, StatusSnapshot};


/// Complete response: status snapshot, headers and body fragments
///
/// Created only by `assemble`, when the whole response is received. The
/// response owns all of its parts and there are no methods to modify
/// them, so it may be kept around long after the connection is closed or
/// reused for another request.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusSnapshot,
    headers: HeaderMap,
    fragments: Vec<Vec<u8>>,
}

/// Iterator over body fragments in order of arrival
#[derive(Debug, Clone)]
pub struct Fragments<'a> {
    iter: SliceIter<'a, Vec<u8>>,
}

/// Fuse status snapshot, finalized headers and body into a response
///
/// `fragments` must be the complete body in order of arrival, an empty
/// vector means the response has no body. All three values are moved
/// into the response. This function does no I/O and never waits.
pub fn assemble(status: StatusSnapshot, headers: HeaderMap,
    fragments: Vec<Vec<u8>>)
    -> Response
{
    let response = Response {
        status: status,
        headers: headers,
        fragments: fragments,
    };
    debug!("Response for {}: {} ({} headers, {} bytes in {} fragments)",
        response.uri(), response.status_code(), response.headers.len(),
        response.body_len(), response.fragments.len());
    response
}

impl Response {
    /// Status line and endpoints this response was assembled from
    pub fn status_snapshot(&self) -> &StatusSnapshot {
        &self.status
    }
    /// Status code as received
    pub fn status_code(&self) -> u16 {
        self.status.status_code()
    }
    /// Reason phrase as received (you shouldn't rely on this, use
    /// `status_code()`)
    pub fn status_text(&self) -> &str {
        self.status.status_text()
    }
    /// Returns status if it is one of the well-known ones
    pub fn status(&self) -> Option<Status> {
        self.status.status()
    }
    pub fn protocol(&self) -> &Protocol {
        self.status.protocol()
    }
    pub fn protocol_name(&self) -> &str {
        self.status.protocol_name()
    }
    pub fn protocol_major_version(&self) -> u8 {
        self.status.protocol_major_version()
    }
    pub fn protocol_minor_version(&self) -> u8 {
        self.status.protocol_minor_version()
    }
    pub fn protocol_text(&self) -> &str {
        self.status.protocol_text()
    }
    /// Peer address, `None` if there was no live connection
    pub fn remote_endpoint(&self) -> Option<SocketAddr> {
        self.status.remote_endpoint()
    }
    /// Our address, `None` if there was no live connection
    pub fn local_endpoint(&self) -> Option<SocketAddr> {
        self.status.local_endpoint()
    }
    pub fn uri(&self) -> &Url {
        self.status.uri()
    }
    pub fn config(&self) -> &Config {
        self.status.config()
    }
    /// All response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
    /// First value of the header (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&[u8]> {
        self.headers.get(name)
    }
    /// First value of the header if it's valid utf-8
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get_str(name)
    }
    /// All values of the header in order of arrival
    pub fn header_all<'a>(&'a self, name: &'a str) -> GetAll<'a> {
        self.headers.get_all(name)
    }
    pub fn content_type(&self) -> Option<&str> {
        self.header_str("Content-Type")
    }
    pub fn location(&self) -> Option<&str> {
        self.header_str("Location")
    }
    /// True if status is one of the redirects (301, 302, 303, 307, 308)
    ///
    /// Note: this doesn't check whether `Location` is present.
    pub fn is_redirected(&self) -> bool {
        self.status().map(|s| s.is_redirect()).unwrap_or(false)
    }
    /// Body fragments as they were received
    pub fn fragments(&self) -> Fragments {
        Fragments { iter: self.fragments.iter() }
    }
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }
    /// Total length of the body
    pub fn body_len(&self) -> usize {
        self.fragments.iter().map(|f| f.len()).sum()
    }
    pub fn has_body(&self) -> bool {
        self.fragments.iter().any(|f| !f.is_empty())
    }
    /// Body glued into a single contiguous buffer
    pub fn body_bytes(&self) -> Vec<u8> {
        let mut body = Vec::with_capacity(self.body_len());
        for fragment in &self.fragments {
            body.extend_from_slice(fragment);
        }
        body
    }
    /// Body decoded as utf-8
    pub fn body_string(&self) -> Result<String, Error> {
        String::from_utf8(self.body_bytes())
            .map_err(|e| e.utf8_error().into())
    }
    /// Body decoded as utf-8, invalid sequences are replaced
    pub fn body_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body_bytes()).into_owned()
    }
    /// Take the response apart
    pub fn into_parts(self) -> (StatusSnapshot, HeaderMap, Vec<Vec<u8>>) {
        (self.status, self.headers, self.fragments)
    }
}

impl<'a> Iterator for Fragments<'a> {
    type Item = &'a [u8];
    fn next(&mut self) -> Option<&'a [u8]> {
        self.iter.next().map(|f| &f[..])
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Fragments<'a> {
    fn next_back(&mut self) -> Option<&'a [u8]> {
        self.iter.next_back().map(|f| &f[..])
    }
}

impl<'a> ExactSizeIterator for Fragments<'a> {}
