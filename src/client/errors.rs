use std::io;
use std::str::Utf8Error;


quick_error! {
    #[derive(Debug)]
    /// Response assembly error
    ///
    /// Most variants denote a broken contract between the transport and
    /// `Exchange` (events delivered out of order). They are returned right
    /// away, no partial response is ever produced.
    pub enum Error {
        /// I/O (basically networking) error reported by the transport
        Io(err: io::Error) {
            description("IO error")
            display("IO error: {}", err)
            from()
        }
        /// Response body is not valid UTF-8
        Utf8(err: Utf8Error) {
            description("response body is not valid utf-8")
            display("response body is not valid utf-8: {}", err)
            from()
        }
        /// Parsed response head has no status line
        IncompleteStatusLine {
            description("status line is incomplete")
        }
        /// HTTP version reported by the parser is unknown
        UnsupportedVersion(version: u8) {
            description("unsupported http version")
            display("unsupported http version: 1.{}", version)
        }
        /// Headers or body received before the status line
        StatusMissing {
            description("event received before the status line")
        }
        /// Body or completion received before the header block
        HeadersMissing {
            description("event received before the header block")
        }
        /// Second status line for the same exchange
        DuplicateStatus {
            description("status line received twice")
        }
        /// Second header block for the same exchange
        DuplicateHeaders {
            description("header block received twice")
        }
        /// Event received after the exchange completed or failed
        ExchangeFinished {
            description("exchange is already finished")
        }
        /// Header block has more headers than `Config::max_headers`
        TooManyHeaders {
            description("too many headers")
        }
        /// Body is larger than `Config::max_response_length`
        ResponseBodyTooLong {
            description("response body is too long")
        }
    }
}
