macro_rules! statuses {
    ($( $code:tt $name:ident $reason:expr; )*) => {
        /// Well-known HTTP status codes
        ///
        /// This is used for classification only. Responses always keep the
        /// code and reason exactly as received, see `StatusSnapshot`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[allow(missing_docs)]
        pub enum Status {
            $( $name, )*
        }

        impl Status {
            /// Returns status if the code is one of the known ones
            pub fn from_code(code: u16) -> Option<Status> {
                match code {
                    $( $code => Some(Status::$name), )*
                    _ => None,
                }
            }
            pub fn code(&self) -> u16 {
                match *self {
                    $( Status::$name => $code, )*
                }
            }
            /// Canonical reason phrase for the code
            pub fn reason(&self) -> &'static str {
                match *self {
                    $( Status::$name => $reason, )*
                }
            }
        }
    }
}

statuses! {
    100 Continue "Continue";
    101 SwitchingProtocol "Switching Protocols";
    200 Ok "OK";
    201 Created "Created";
    202 Accepted "Accepted";
    203 NonAuthoritativeInformation "Non-Authoritative Information";
    204 NoContent "No Content";
    205 ResetContent "Reset Content";
    206 PartialContent "Partial Content";
    300 MultipleChoices "Multiple Choices";
    301 MovedPermanently "Moved Permanently";
    302 Found "Found";
    303 SeeOther "See Other";
    304 NotModified "Not Modified";
    305 UseProxy "Use Proxy";
    307 TemporaryRedirect "Temporary Redirect";
    308 PermanentRedirect "Permanent Redirect";
    400 BadRequest "Bad Request";
    401 Unauthorized "Unauthorized";
    402 PaymentRequired "Payment Required";
    403 Forbidden "Forbidden";
    404 NotFound "Not Found";
    405 MethodNotAllowed "Method Not Allowed";
    406 NotAcceptable "Not Acceptable";
    407 ProxyAuthenticationRequired "Proxy Authentication Required";
    408 RequestTimeout "Request Timeout";
    409 Conflict "Conflict";
    410 Gone "Gone";
    411 LengthRequired "Length Required";
    412 PreconditionFailed "Precondition Failed";
    413 RequestEntityTooLarge "Request Entity Too Large";
    414 RequestURITooLong "Request-URI Too Long";
    415 UnsupportedMediaType "Unsupported Media Type";
    416 RequestRangeNotSatisfiable "Request Range Not Satisfiable";
    417 ExpectationFailed "Expectation Failed";
    426 UpgradeRequired "Upgrade Required";
    429 TooManyRequests "Too Many Requests";
    500 InternalServerError "Internal Server Error";
    501 NotImplemented "Not Implemented";
    502 BadGateway "Bad Gateway";
    503 ServiceUnavailable "Service Unavailable";
    504 GatewayTimeout "Gateway Timeout";
    505 VersionNotSupported "HTTP Version Not Supported";
}

impl Status {
    /// True for statuses which carry a `Location` to follow
    ///
    /// Note: `300` and `304` are not considered redirects here.
    pub fn is_redirect(&self) -> bool {
        matches!(*self,
            Status::MovedPermanently | Status::Found | Status::SeeOther |
            Status::TemporaryRedirect | Status::PermanentRedirect)
    }
}
