use crate::error::{QueryError, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// URI component percent-encode set
/// Everything except ASCII alphanumerics and `-`, `_`, `.`, `!`, `~`, `*`, `'`, `(`, `)`
/// Same unreserved set as ECMAScript `encodeURIComponent`
pub const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a value for use inside a query entry
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT_SET).to_string()
}

/// Write a percent-encoded value directly to buffer
pub fn encode_component_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, COMPONENT_SET) {
        buffer.push_str(chunk);
    }
}

/// Decode a percent-encoded value.
/// Unlike form decoding, `+` is kept as-is.
/// Every `%` must start a two digit hex escape and the decoded bytes must be UTF-8.
pub fn decode_component(input: &str) -> Result<String> {
    let bytes = input.as_bytes();

    for offset in memchr::memchr_iter(b'%', bytes) {
        let escape = bytes.get(offset + 1..offset + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            return Err(QueryError::MalformedEscape { offset });
        }
    }

    percent_encoding::percent_decode_str(input)
        .decode_utf8()
        .map(Into::into)
        .map_err(|_| QueryError::InvalidUtf8)
}
