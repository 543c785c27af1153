use std::fmt;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// The set of bytes escaped when serializing a cookie value.
///
/// Everything outside the URI-component unreserved set
/// (`A-Z a-z 0-9 - _ . ! ~ * ' ( )`) is escaped, so a space becomes `%20`,
/// never `+`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a cookie value for serialization.
pub(crate) fn encode(value: &str) -> impl fmt::Display + '_ {
    utf8_percent_encode(value, COMPONENT)
}

/// Decodes `%XX` escapes in a cookie value.
///
/// `+` passes through untouched, and stray `%` bytes that do not start a
/// valid escape are kept as-is.
pub(crate) fn decode(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}
