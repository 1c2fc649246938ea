use std::fmt;

/// Enum reprsenting HTTP version.
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub enum Version {
    Http10,
    Http11,
}

/// Protocol identity as reported by the transport with the status line
///
/// Unlike `Version` this can describe any `NAME/MAJOR.MINOR` pair the
/// transport reports, e.g. `HTTP/2.0` or `ICE/1.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Protocol {
    name: String,
    major: u8,
    minor: u8,
    text: String,
}

impl Version {
    /// Converts version number from `httparse` (the minor part of `1.x`)
    pub fn from_httparse(v: u8) -> Option<Version> {
        match v {
            0 => Some(Version::Http10),
            1 => Some(Version::Http11),
            _ => None,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Version::Http10 => f.write_str("HTTP/1.0"),
            Version::Http11 => f.write_str("HTTP/1.1"),
        }
    }
}

impl Protocol {
    /// Create a protocol descriptor, text is `name/major.minor`
    pub fn new(name: &str, major: u8, minor: u8) -> Protocol {
        Protocol {
            name: name.to_string(),
            major: major,
            minor: minor,
            text: format!("{}/{}.{}", name, major, minor),
        }
    }
    /// Parses protocol text like `HTTP/1.1`
    ///
    /// The minor version may be omitted (`HTTP/2` is `HTTP/2.0`). The text
    /// is kept as written, only surrounding whitespace is stripped.
    pub fn parse(text: &str) -> Option<Protocol> {
        let text = text.trim();
        let slash = text.find('/')?;
        let name = &text[..slash];
        if name.is_empty() ||
            name.bytes().any(|b| b <= b' ' || b == 0x7f)
        {
            return None;
        }
        let ver = &text[slash+1..];
        let (major, minor) = match ver.find('.') {
            Some(dot) => (&ver[..dot], &ver[dot+1..]),
            None => (ver, "0"),
        };
        if !is_digits(major) || !is_digits(minor) {
            return None;
        }
        Some(Protocol {
            name: name.to_string(),
            major: major.parse().ok()?,
            minor: minor.parse().ok()?,
            text: text.to_string(),
        })
    }
    /// Protocol name, e.g. `HTTP`
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn major_version(&self) -> u8 {
        self.major
    }
    pub fn minor_version(&self) -> u8 {
        self.minor
    }
    /// Full protocol text as reported, e.g. `HTTP/1.1`
    pub fn text(&self) -> &str {
        &self.text
    }
    /// Returns `Version` if this is HTTP/1.0 or HTTP/1.1
    pub fn version(&self) -> Option<Version> {
        if !self.name.eq_ignore_ascii_case("HTTP") || self.major != 1 {
            return None;
        }
        match self.minor {
            0 => Some(Version::Http10),
            1 => Some(Version::Http11),
            _ => None,
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl From<Version> for Protocol {
    fn from(v: Version) -> Protocol {
        match v {
            Version::Http10 => Protocol::new("HTTP", 1, 0),
            Version::Http11 => Protocol::new("HTTP", 1, 1),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}
