extern crate env_logger;
extern crate url;
extern crate tk_http_response;

use std::cell::Cell;
use std::io;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;

use url::Url;
use tk_http_response::{Protocol, Status};
use tk_http_response::client::{Config, Connection, HeaderMap, Error};
use tk_http_response::client::{StatusLine, StatusSnapshot, assemble};


/// Connection whose endpoints may change after the snapshot is taken
struct Mock {
    remote: Cell<Option<SocketAddr>>,
    local: Cell<Option<SocketAddr>>,
}

impl Mock {
    fn new(remote: &str, local: &str) -> Mock {
        Mock {
            remote: Cell::new(Some(addr(remote))),
            local: Cell::new(Some(addr(local))),
        }
    }
}

impl Connection for Mock {
    fn remote_endpoint(&self) -> io::Result<SocketAddr> {
        self.remote.get().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotConnected, "not connected")
        })
    }
    fn local_endpoint(&self) -> io::Result<SocketAddr> {
        self.local.get().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotConnected, "not connected")
        })
    }
}

fn addr(s: &str) -> SocketAddr {
    s.parse().unwrap()
}

fn uri() -> Arc<Url> {
    Arc::new(Url::parse("https://example.com/hello").unwrap())
}

fn ok_line() -> StatusLine {
    StatusLine::new(200, "OK", Protocol::parse("HTTP/1.1").unwrap())
}

fn text_headers() -> HeaderMap {
    vec![("Content-Type", "text/plain")].into_iter().collect()
}

fn hello() -> Vec<Vec<u8>> {
    vec![b"hel".to_vec(), b"lo".to_vec()]
}

#[test]
fn assemble_plain_response() {
    let _ = env_logger::try_init();
    let conn = Mock::new("10.0.0.1:443", "10.0.0.5:51000");
    let status = StatusSnapshot::new(&uri(), &Config::new().done(),
        &ok_line(), Some(&conn));
    let resp = assemble(status, text_headers(), hello());

    assert_eq!(resp.status_code(), 200);
    assert_eq!(resp.status_text(), "OK");
    assert_eq!(resp.status(), Some(Status::Ok));
    assert_eq!(resp.protocol_name(), "HTTP");
    assert_eq!(resp.protocol_major_version(), 1);
    assert_eq!(resp.protocol_minor_version(), 1);
    assert_eq!(resp.protocol_text(), "HTTP/1.1");
    assert_eq!(resp.remote_endpoint(), Some(addr("10.0.0.1:443")));
    assert_eq!(resp.local_endpoint(), Some(addr("10.0.0.5:51000")));
    assert_eq!(resp.header("Content-Type"), Some(&b"text/plain"[..]));
    assert_eq!(resp.content_type(), Some("text/plain"));
    let fragments: Vec<_> = resp.fragments().collect();
    assert_eq!(fragments, vec![&b"hel"[..], &b"lo"[..]]);
    assert_eq!(resp.fragment_count(), 2);
    assert_eq!(resp.body_len(), 5);
    assert_eq!(resp.body_bytes(), b"hello".to_vec());
    assert_eq!(resp.uri().as_str(), "https://example.com/hello");
}

#[test]
fn endpoints_captured_at_construction() {
    let conn = Mock::new("10.0.0.1:443", "10.0.0.5:51000");
    let status = StatusSnapshot::new(&uri(), &Config::new().done(),
        &ok_line(), Some(&conn));
    // connection is reused for another peer
    conn.remote.set(Some(addr("192.168.1.1:80")));
    conn.local.set(None);
    assert_eq!(status.remote_endpoint(), Some(addr("10.0.0.1:443")));
    assert_eq!(status.local_endpoint(), Some(addr("10.0.0.5:51000")));

    let resp = status.prepare_response(HeaderMap::new(), Vec::new());
    assert_eq!(resp.remote_endpoint(), Some(addr("10.0.0.1:443")));
    assert_eq!(resp.local_endpoint(), Some(addr("10.0.0.5:51000")));
}

#[test]
fn no_connection() {
    let status = StatusSnapshot::new(&uri(), &Config::new().done(),
        &ok_line(), None);
    assert_eq!(status.remote_endpoint(), None);
    assert_eq!(status.local_endpoint(), None);
    assert_eq!(status.status_code(), 200);
    assert_eq!(status.status_text(), "OK");
    assert_eq!(status.protocol_text(), "HTTP/1.1");

    let resp = assemble(status, text_headers(), hello());
    assert_eq!(resp.remote_endpoint(), None);
    assert_eq!(resp.local_endpoint(), None);
    assert_eq!(resp.header_str("content-type"), Some("text/plain"));
    assert_eq!(resp.body_string().unwrap(), "hello");
}

#[test]
fn disconnected_socket() {
    let conn = Mock::new("10.0.0.1:443", "10.0.0.5:51000");
    conn.remote.set(None);
    let status = StatusSnapshot::new(&uri(), &Config::new().done(),
        &ok_line(), Some(&conn));
    assert_eq!(status.remote_endpoint(), None);
    assert_eq!(status.local_endpoint(), Some(addr("10.0.0.5:51000")));
}

#[test]
fn tcp_connection() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let server = listener.local_addr().unwrap();
    let stream = TcpStream::connect(server).unwrap();
    let client = stream.local_addr().unwrap();

    let status = StatusSnapshot::new(&uri(), &Config::new().done(),
        &ok_line(), Some(&stream));
    drop(stream);
    drop(listener);
    assert_eq!(status.remote_endpoint(), Some(server));
    assert_eq!(status.local_endpoint(), Some(client));
}

#[test]
fn status_is_not_normalized() {
    let line = StatusLine::new(299, "Whatever You Like",
                               Protocol::new("ICE", 1, 0));
    let status = StatusSnapshot::new(&uri(), &Config::new().done(),
        &line, None);
    assert_eq!(status.status_code(), 299);
    assert_eq!(status.status_text(), "Whatever You Like");
    assert_eq!(status.status(), None);
    assert_eq!(status.protocol_name(), "ICE");
    assert_eq!(status.protocol().version(), None);

    let line = StatusLine::new(200, "", Protocol::new("HTTP", 1, 0));
    let status = StatusSnapshot::new(&uri(), &Config::new().done(),
        &line, None);
    assert_eq!(status.status_text(), "");
    assert_eq!(status.status(), Some(Status::Ok));
}

#[test]
fn assemble_is_deterministic() {
    let config = Config::new().done();
    let conn = Mock::new("10.0.0.1:443", "10.0.0.5:51000");
    let make = || {
        let status = StatusSnapshot::new(&uri(), &config,
            &ok_line(), Some(&conn));
        assemble(status, text_headers(), hello())
    };
    let a = make();
    let b = make();
    assert_eq!(a.status_code(), b.status_code());
    assert_eq!(a.status_text(), b.status_text());
    assert_eq!(a.protocol(), b.protocol());
    assert_eq!(a.remote_endpoint(), b.remote_endpoint());
    assert_eq!(a.local_endpoint(), b.local_endpoint());
    assert_eq!(a.uri(), b.uri());
    assert_eq!(a.headers(), b.headers());
    assert!(a.fragments().eq(b.fragments()));
}

#[test]
fn caller_copies_do_not_alias_response() {
    let status = StatusSnapshot::new(&uri(), &Config::new().done(),
        &ok_line(), None);
    let headers = text_headers();
    let mut fragments = hello();
    let resp = assemble(status, headers.clone(), fragments.clone());

    let headers: HeaderMap = headers.iter()
        .map(|(name, _)| (name, "application/json"))
        .collect();
    fragments[0].clear();
    fragments.push(b"!".to_vec());
    assert_eq!(headers.get_str("Content-Type"), Some("application/json"));

    assert_eq!(resp.content_type(), Some("text/plain"));
    assert_eq!(resp.headers(), &text_headers());
    let body: Vec<_> = resp.fragments().collect();
    assert_eq!(body, vec![&b"hel"[..], &b"lo"[..]]);
    assert_eq!(resp.body_string().unwrap(), "hello");
}

#[test]
fn empty_body() {
    let status = StatusSnapshot::new(&uri(), &Config::new().done(),
        &StatusLine::new(204, "No Content", Protocol::new("HTTP", 1, 1)),
        None);
    let resp = assemble(status, HeaderMap::new(), Vec::new());
    assert_eq!(resp.fragments().next(), None);
    assert_eq!(resp.fragment_count(), 0);
    assert_eq!(resp.body_len(), 0);
    assert!(!resp.has_body());
    assert_eq!(resp.body_bytes(), Vec::<u8>::new());
    assert_eq!(resp.body_string().unwrap(), "");
    assert!(resp.headers().is_empty());
    assert_eq!(resp.content_type(), None);
}

#[test]
fn invalid_utf8_body() {
    let status = StatusSnapshot::new(&uri(), &Config::new().done(),
        &ok_line(), None);
    let resp = assemble(status, HeaderMap::new(),
        vec![b"ok \xe2".to_vec(), b"\x28".to_vec()]);
    match resp.body_string() {
        Err(Error::Utf8(_)) => {}
        r => panic!("unexpected result {:?}", r),
    }
    assert_eq!(resp.body_string_lossy(), "ok \u{fffd}(");
}

#[test]
fn redirect() {
    let line = StatusLine::new(302, "Found", Protocol::new("HTTP", 1, 1));
    let status = StatusSnapshot::new(&uri(), &Config::new().done(),
        &line, None);
    let headers: HeaderMap = vec![("Location", "/elsewhere")]
        .into_iter().collect();
    let resp = assemble(status, headers, Vec::new());
    assert!(resp.is_redirected());
    assert_eq!(resp.location(), Some("/elsewhere"));

    let status = StatusSnapshot::new(&uri(), &Config::new().done(),
        &ok_line(), None);
    assert!(!assemble(status, HeaderMap::new(), Vec::new()).is_redirected());
}

#[test]
fn duplicate_headers_kept() {
    let status = StatusSnapshot::new(&uri(), &Config::new().done(),
        &ok_line(), None);
    let headers: HeaderMap = vec![
        ("Set-Cookie", "a=1"),
        ("X-Other", "x"),
        ("set-cookie", "b=2"),
    ].into_iter().collect();
    let resp = assemble(status, headers, Vec::new());
    let cookies: Vec<_> = resp.header_all("Set-Cookie").collect();
    assert_eq!(cookies, vec![&b"a=1"[..], &b"b=2"[..]]);
    assert_eq!(resp.header("set-COOKIE"), Some(&b"a=1"[..]));
}

#[test]
fn shared_config() {
    let config = Config::new().max_response_length(100).done();
    let status = StatusSnapshot::new(&uri(), &config, &ok_line(), None);
    assert_eq!(Arc::strong_count(&config), 2);
    let resp = assemble(status, HeaderMap::new(), Vec::new());
    assert_eq!(resp.config().response_length_limit(), 100);
    assert!(::std::ptr::eq(resp.config(), &*config));
    drop(resp);
    assert_eq!(Arc::strong_count(&config), 1);
}

#[test]
fn into_parts() {
    let status = StatusSnapshot::new(&uri(), &Config::new().done(),
        &ok_line(), None);
    let resp = assemble(status, text_headers(), hello());
    let (status, headers, fragments) = resp.into_parts();
    assert_eq!(status.status_code(), 200);
    assert_eq!(headers, text_headers());
    assert_eq!(fragments, hello());
}
