use std::sync::Arc;

use client::{Config};

impl Config {
    /// Create a config with defaults
    pub fn new() -> Config {
        Config {
            max_response_length: 10_485_760,
            max_headers: 1024,
        }
    }
    /// Maximum total size of body fragments collected by `Exchange`
    ///
    /// Note this is just an upper limit it's neither buffer size
    /// nor *minimum* size of the body.
    pub fn max_response_length(&mut self, value: usize) -> &mut Self {
        self.max_response_length = value;
        self
    }
    /// A hard limit on the number of headers accepted by `Exchange`
    pub fn max_headers(&mut self, value: usize) -> &mut Self {
        self.max_headers = value;
        self
    }
    /// Current limit on response body size
    pub fn response_length_limit(&self) -> usize {
        self.max_response_length
    }
    /// Current limit on number of headers
    pub fn headers_limit(&self) -> usize {
        self.max_headers
    }
    /// Create a Arc'd config clone to pass to the constructor
    ///
    /// This is just a convenience method.
    pub fn done(&mut self) -> Arc<Config> {
        Arc::new(self.clone())
    }
}
