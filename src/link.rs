//! Incoming deep links.
//!
//! The navigator treats a link as an opaque payload: it forwards the raw
//! string to the registered handler and never interprets it. The accessors
//! on [`DeepLink`] exist for handler authors who want a quick split of a
//! `scheme://host/path?query#fragment` string without pulling in a URL
//! parser.
//!
//! # Example
//!
//! ```
//! use tab_navigator::DeepLink;
//!
//! let link = DeepLink::new("shop://orders/1042/items?highlight=3&ref=push#top");
//! assert_eq!(link.scheme(), Some("shop"));
//! assert_eq!(link.host(), Some("orders"));
//! assert_eq!(link.path_segments(), vec!["1042", "items"]);
//! assert_eq!(link.query().get_as::<u32>("highlight"), Some(3));
//! assert_eq!(link.fragment(), Some("top"));
//! ```

use std::collections::HashMap;
use std::fmt;

/// Raw deep-link payload reported by the host's link-handling subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeepLink {
    raw: String,
}

impl DeepLink {
    /// Wrap a raw link.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The link exactly as received.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Scheme before `://`, if the link starts with one.
    pub fn scheme(&self) -> Option<&str> {
        self.split_scheme().map(|(scheme, _)| scheme)
    }

    /// First component after `://`, if the link has a scheme.
    pub fn host(&self) -> Option<&str> {
        let (_, rest) = self.split_scheme()?;
        let rest = strip_query_and_fragment(rest);
        let host = rest.split('/').next().unwrap_or_default();
        (!host.is_empty()).then_some(host)
    }

    /// Decoded, non-empty path segments after the host.
    ///
    /// For scheme-less links (`/orders/7`) every segment is returned.
    pub fn path_segments(&self) -> Vec<String> {
        let path = match self.split_scheme() {
            Some((_, rest)) => {
                let rest = strip_query_and_fragment(rest);
                rest.split_once('/').map(|(_, path)| path).unwrap_or_default()
            }
            None => strip_query_and_fragment(&self.raw),
        };

        path.split('/')
            .filter(|segment| !segment.is_empty())
            .map(decode_uri_component)
            .collect()
    }

    /// Parsed query string (empty if the link has none).
    pub fn query(&self) -> QueryParams {
        let without_fragment = self.raw.split('#').next().unwrap_or_default();
        without_fragment
            .split_once('?')
            .map(|(_, query)| QueryParams::from_query_string(query))
            .unwrap_or_default()
    }

    /// Text after `#`, if present.
    pub fn fragment(&self) -> Option<&str> {
        self.raw
            .split_once('#')
            .map(|(_, fragment)| fragment)
            .filter(|fragment| !fragment.is_empty())
    }

    /// Split `scheme://rest`. Only a leading, well-formed scheme counts; a URL
    /// nested in the query (`/orders?next=app://x`) is not one.
    fn split_scheme(&self) -> Option<(&str, &str)> {
        let (scheme, rest) = self.raw.split_once("://")?;
        is_scheme(scheme).then_some((scheme, rest))
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for DeepLink {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for DeepLink {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn strip_query_and_fragment(s: &str) -> &str {
    let end = s.find(|c: char| c == '?' || c == '#').unwrap_or(s.len());
    &s[..end]
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters parsed from a link's query string.
///
/// Supports multiple values for the same key.
///
/// # Example
///
/// ```
/// use tab_navigator::QueryParams;
///
/// let query = QueryParams::from_query_string("page=1&sort=name&tag=rust&tag=ui");
///
/// assert_eq!(query.get("sort"), Some("name"));
/// assert_eq!(query.get_as::<i32>("page"), Some(1));
/// assert_eq!(query.get_all("tag").len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: HashMap<String, Vec<String>>,
}

impl QueryParams {
    /// Create empty query parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string (without the leading `?`).
    ///
    /// Keys without `=` are kept with an empty value. `+` decodes to a space.
    pub fn from_query_string(query: &str) -> Self {
        let mut params = Self::new();

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            params.insert(decode_uri_component(key), decode_uri_component(value));
        }

        params
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key)?.first().map(String::as_str)
    }

    /// Get all values for a key, in order of appearance.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.params.get(key).map_or(&[][..], Vec::as_slice)
    }

    /// Get the first value for a key, parsed as type `T`.
    ///
    /// Returns `None` if the key is missing or the value cannot be parsed.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.get(key)?.parse().ok()
    }

    /// Append a value for the given key.
    pub fn insert(&mut self, key: String, value: String) {
        self.params.entry(key).or_default().push(value);
    }

    /// Return `true` if the given key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Return `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Return the number of unique parameter keys.
    pub fn len(&self) -> usize {
        self.params.len()
    }
}

/// Percent-decode a URI component. Invalid escapes are kept verbatim.
fn decode_uri_component(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let escaped = bytes
                    .get(i + 1..i + 3)
                    .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
                    .and_then(|hex| std::str::from_utf8(hex).ok())
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                if let Some(byte) = escaped {
                    out.push(byte);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

// ============================================================================
// Tests
// ============================================================================
