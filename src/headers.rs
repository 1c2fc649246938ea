pub fn is_transfer_encoding(val: &str) -> bool {
    val.eq_ignore_ascii_case("Transfer-Encoding")
}

pub fn is_content_length(val: &str) -> bool {
    val.eq_ignore_ascii_case("Content-Length")
}

pub fn is_connection(val: &str) -> bool {
    val.eq_ignore_ascii_case("Connection")
}

fn is_space(ch: u8) -> bool {
    matches!(ch, b'\r' | b'\n' | b' ' | b'\t')
}

/// Strips optional whitespace around a header value (or a token of it)
pub fn trim(val: &[u8]) -> &[u8] {
    let start = val.iter().position(|&c| !is_space(c)).unwrap_or(val.len());
    let end = val.iter().rposition(|&c| !is_space(c)).map(|x| x + 1)
        .unwrap_or(start);
    &val[start..end]
}

// header value is byte sequence
// we need case insensitive comparison and strip out of the whitespace
pub fn is_close(val: &[u8]) -> bool {
    trim(val).eq_ignore_ascii_case(b"close")
}

/// Returns true if `name` is listed in comma-separated `Connection` value
pub fn is_listed(connection: &[u8], name: &str) -> bool {
    connection.split(|&x| x == b',')
        .any(|token| trim(token).eq_ignore_ascii_case(name.as_bytes()))
}
