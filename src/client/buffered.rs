//! Collecting transport events into a fully buffered response
//!
//! The transport reports every exchange as a sequence of events:
//!
//! 1. Status line (`Exchange::status_received`)
//! 2. Header block (`Exchange::headers_received`)
//! 3. Zero or more body chunks (`Exchange::data_received`)
//! 4. Completion (`Exchange::complete`) or failure (`Exchange::fail`)
//!
//! `Exchange` captures a `StatusSnapshot` at step 1, keeps headers and
//! body chunks and assembles the `Response` at step 4. The response is
//! delivered through a oneshot channel, so the code which has started the
//! request may wait for it as for any other future.
//!
use std::mem;
use std::sync::Arc;

use futures::sync::oneshot::{channel, Sender, Receiver};
use httparse;
use url::Url;

use client::{Config, Error, HeaderMap, Response};
use client::{StatusLine, StatusLineSource, StatusSnapshot};
use client::connection::Connection;
use client::response::assemble;


/// Transport-event handler for a single request/response exchange
///
/// Events must be delivered in order. An event that comes out of order
/// finishes the exchange: the method returns an error and the same error
/// is sent to the receiver. No response is assembled in this case.
///
/// If the exchange is dropped before completion, the receiver is
/// canceled.
pub struct Exchange {
    uri: Arc<Url>,
    config: Arc<Config>,
    state: State,
    sender: Option<Sender<Result<Response, Error>>>,
}

#[derive(Debug)]
enum State {
    Status,
    Headers(StatusSnapshot),
    Body {
        status: StatusSnapshot,
        headers: HeaderMap,
        fragments: Vec<Vec<u8>>,
        received: usize,
    },
    Done,
}

/// Broken contract between the transport and the exchange
///
/// Both the caller and the receiver get an `Error` built from this.
#[derive(Debug, Clone, Copy)]
enum Violation {
    IncompleteStatusLine,
    UnsupportedVersion(u8),
    StatusMissing,
    HeadersMissing,
    DuplicateStatus,
    DuplicateHeaders,
    TooManyHeaders,
    ResponseBodyTooLong,
}

impl Violation {
    fn error(self) -> Error {
        use self::Violation::*;
        match self {
            IncompleteStatusLine => Error::IncompleteStatusLine,
            UnsupportedVersion(v) => Error::UnsupportedVersion(v),
            StatusMissing => Error::StatusMissing,
            HeadersMissing => Error::HeadersMissing,
            DuplicateStatus => Error::DuplicateStatus,
            DuplicateHeaders => Error::DuplicateHeaders,
            TooManyHeaders => Error::TooManyHeaders,
            ResponseBodyTooLong => Error::ResponseBodyTooLong,
        }
    }
}

impl Exchange {
    /// Start a new exchange for the request to `uri`
    pub fn new(uri: &Arc<Url>, config: &Arc<Config>)
        -> (Exchange, Receiver<Result<Response, Error>>)
    {
        let (tx, rx) = channel();
        (Exchange {
                uri: uri.clone(),
                config: config.clone(),
                state: State::Status,
                sender: Some(tx),
            },
         rx)
    }
    /// Status line is parsed
    ///
    /// Endpoints of the `connection` are captured right here, so the
    /// transport may recycle the connection as soon as this returns.
    pub fn status_received<S>(&mut self, line: &S,
        connection: Option<&dyn Connection>)
        -> Result<(), Error>
        where S: StatusLineSource + ?Sized,
    {
        match self.state {
            State::Status => {
                let status = StatusSnapshot::new(
                    &self.uri, &self.config, line, connection);
                self.state = State::Headers(status);
                Ok(())
            }
            State::Done => Err(Error::ExchangeFinished),
            _ => Err(self.abort(Violation::DuplicateStatus)),
        }
    }
    /// Header block is fully received
    pub fn headers_received(&mut self, headers: HeaderMap)
        -> Result<(), Error>
    {
        match mem::replace(&mut self.state, State::Done) {
            State::Headers(status) => {
                if headers.len() > self.config.max_headers {
                    return Err(self.abort(Violation::TooManyHeaders));
                }
                trace!("Headers of {}: {} headers", self.uri, headers.len());
                self.state = State::Body {
                    status: status,
                    headers: headers,
                    fragments: Vec::new(),
                    received: 0,
                };
                Ok(())
            }
            State::Status => Err(self.abort(Violation::StatusMissing)),
            State::Body { .. } => Err(self.abort(Violation::DuplicateHeaders)),
            State::Done => Err(Error::ExchangeFinished),
        }
    }
    /// Both status line and headers parsed by `httparse`
    ///
    /// The parse must have returned `Status::Complete`, a partial parse
    /// finishes the exchange with `Error::IncompleteStatusLine`.
    pub fn head_received(&mut self, raw: &httparse::Response,
        connection: Option<&dyn Connection>)
        -> Result<(), Error>
    {
        if self.is_finished() {
            return Err(Error::ExchangeFinished);
        }
        let line = match StatusLine::from_httparse(raw) {
            Ok(line) => line,
            Err(Error::UnsupportedVersion(v)) => {
                return Err(self.abort(Violation::UnsupportedVersion(v)));
            }
            Err(_) => {
                return Err(self.abort(Violation::IncompleteStatusLine));
            }
        };
        self.status_received(&line, connection)?;
        self.headers_received(HeaderMap::from_httparse(&*raw.headers))
    }
    /// Chunk of the response body received
    ///
    /// Data is copied, so the transport is free to reuse its buffer.
    /// Empty chunks are ignored.
    pub fn data_received(&mut self, data: &[u8]) -> Result<(), Error> {
        let limit = self.config.max_response_length;
        let violation = match self.state {
            State::Body { ref mut fragments, ref mut received, .. } => {
                let total = received.saturating_add(data.len());
                if total <= limit {
                    if !data.is_empty() {
                        fragments.push(data.to_vec());
                        *received = total;
                    }
                    return Ok(());
                }
                Violation::ResponseBodyTooLong
            }
            State::Status => Violation::StatusMissing,
            State::Headers(..) => Violation::HeadersMissing,
            State::Done => return Err(Error::ExchangeFinished),
        };
        Err(self.abort(violation))
    }
    /// Response is fully received, assemble and send it
    pub fn complete(&mut self) -> Result<(), Error> {
        match mem::replace(&mut self.state, State::Done) {
            State::Body { status, headers, fragments, .. } => {
                let response = assemble(status, headers, fragments);
                self.send(Ok(response));
                Ok(())
            }
            State::Status => Err(self.abort(Violation::StatusMissing)),
            State::Headers(..) => Err(self.abort(Violation::HeadersMissing)),
            State::Done => Err(Error::ExchangeFinished),
        }
    }
    /// Transport failed, forward the error to the receiver
    ///
    /// Anything received so far is discarded.
    pub fn fail(&mut self, err: Error) {
        if matches!(self.state, State::Done) {
            debug!("Error after exchange for {} is finished: {}",
                self.uri, err);
            return;
        }
        debug!("Exchange for {} failed: {}", self.uri, err);
        self.state = State::Done;
        self.send(Err(err));
    }
    /// Returns true when response (or an error) has already been sent
    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Done)
    }
    fn abort(&mut self, violation: Violation) -> Error {
        debug!("Exchange for {} aborted: {:?}", self.uri, violation);
        self.state = State::Done;
        self.send(Err(violation.error()));
        violation.error()
    }
    fn send(&mut self, result: Result<Response, Error>) {
        if let Some(tx) = self.sender.take() {
            if tx.send(result).is_err() {
                debug!("Receiver for {} is gone", self.uri);
            }
        }
    }
}
