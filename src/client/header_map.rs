use std::iter::FromIterator;
use std::slice::Iter as SliceIter;
use std::str::from_utf8;

use httparse::Header;

use headers;


/// Finalized response headers
///
/// Headers are kept in the order they were received, duplicates are
/// neither glued together nor sorted. Lookups are ASCII case-insensitive.
/// There is no way to modify the map once it's built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderMap {
    entries: Vec<(String, Vec<u8>)>,
}

/// Iterator over all headers, created by `HeaderMap::iter`
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    iter: SliceIter<'a, (String, Vec<u8>)>,
}

/// Iterator over values of a single header, created by `HeaderMap::get_all`
#[derive(Debug, Clone)]
pub struct GetAll<'a> {
    name: &'a str,
    iter: SliceIter<'a, (String, Vec<u8>)>,
}

/// Iterator over all meaningful headers for the response
///
/// This iterator is created by `HeaderMap::content_headers`. And iterates
/// over all headers except hop-by-hop ones.
#[derive(Debug, Clone)]
pub struct ContentHeaders<'a> {
    map: &'a HeaderMap,
    iter: SliceIter<'a, (String, Vec<u8>)>,
}

impl HeaderMap {
    /// Empty header map, for responses without headers
    pub fn new() -> HeaderMap {
        HeaderMap { entries: Vec::new() }
    }
    /// Copies headers parsed by `httparse`
    pub fn from_httparse(headers: &[Header]) -> HeaderMap {
        headers.iter()
            .map(|h| (h.name, h.value))
            .collect()
    }
    /// Number of headers (duplicates are counted)
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// Value of the first header with this name
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.entries.iter()
            .find(|&&(ref n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, ref v)| &v[..])
    }
    /// Value of the first header with this name if it's valid utf-8
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| from_utf8(v).ok())
    }
    /// All values of the header in order of arrival
    pub fn get_all<'a>(&'a self, name: &'a str) -> GetAll<'a> {
        GetAll {
            name: name,
            iter: self.entries.iter(),
        }
    }
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
    /// All headers of the response
    ///
    /// Unlike `content_headers()` this does include hop-by-hop headers.
    pub fn iter(&self) -> Iter {
        Iter { iter: self.entries.iter() }
    }
    /// Iterator over the headers excluding hop-by-hop ones
    ///
    /// This iterator strips the following kinds of headers:
    ///
    /// 1. Hop-by-hop headers (`Connection` itself, and ones it enumerates)
    /// 2. `Content-Length` and `Transfer-Encoding`
    pub fn content_headers(&self) -> ContentHeaders {
        ContentHeaders {
            map: self,
            iter: self.entries.iter(),
        }
    }
    /// Value of `Content-Length` if there is a single valid one
    pub fn content_length(&self) -> Option<u64> {
        let mut values = self.get_all("Content-Length");
        let value = values.next()?;
        if values.next().is_some() {
            return None;
        }
        from_utf8(headers::trim(value)).ok()?.parse().ok()
    }
    /// Returns true if any `Connection` header contains `close`
    ///
    /// Transport may use this to decide if the connection can be reused.
    pub fn connection_close(&self) -> bool {
        self.get_all("Connection")
            .any(|v| v.split(|&x| x == b',').any(headers::is_close))
    }
    fn is_hop_by_hop(&self, name: &str) -> bool {
        if headers::is_connection(name) ||
            headers::is_transfer_encoding(name) ||
            headers::is_content_length(name)
        {
            return true;
        }
        self.get_all("Connection").any(|conn| headers::is_listed(conn, name))
    }
}

impl<N, V> FromIterator<(N, V)> for HeaderMap
    where N: Into<String>, V: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item=(N, V)>>(iter: I) -> HeaderMap {
        HeaderMap {
            entries: iter.into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a str, &'a [u8]);
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a [u8]);
    fn next(&mut self) -> Option<(&'a str, &'a [u8])> {
        self.iter.next().map(|&(ref n, ref v)| (&n[..], &v[..]))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a> Iterator for GetAll<'a> {
    type Item = &'a [u8];
    fn next(&mut self) -> Option<&'a [u8]> {
        while let Some(&(ref name, ref value)) = self.iter.next() {
            if name.eq_ignore_ascii_case(self.name) {
                return Some(&value[..]);
            }
        }
        None
    }
}

impl<'a> Iterator for ContentHeaders<'a> {
    type Item = (&'a str, &'a [u8]);
    fn next(&mut self) -> Option<(&'a str, &'a [u8])> {
        while let Some(&(ref name, ref value)) = self.iter.next() {
            if self.map.is_hop_by_hop(name) {
                continue;
            }
            return Some((&name[..], &value[..]));
        }
        return None;
    }
}
