// ── Forward-compatible string enums ──
//
// The service may return values this client has never heard of. Every
// generated enum carries an `Unknown(UnknownValue)` variant that keeps the
// raw string, so decoding never fails and re-encoding is lossless.

use std::fmt;

/// A raw enum value outside the known vocabulary.
///
/// Only constructed by the generated `From<&str>` impls, which route known
/// strings to their named variant first. An `Unknown` therefore never
/// shadows a known value and equality stays structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnknownValue(String);

impl UnknownValue {
    pub(crate) fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Common surface of every generated string enum.
pub trait StringEnum: Sized + for<'a> From<&'a str> {
    /// The vocabulary known to this client, in declaration order.
    fn values() -> &'static [&'static str];

    /// The raw wire string.
    fn as_str(&self) -> &str;

    fn is_known(&self) -> bool;

    /// Parse a value, falling back to a case-insensitive match against the
    /// known vocabulary before giving up and keeping it as unknown.
    fn parse_lenient(raw: &str) -> Self {
        let exact = Self::from(raw);
        if exact.is_known() {
            return exact;
        }
        Self::values()
            .iter()
            .find(|known| known.eq_ignore_ascii_case(raw))
            .map_or(exact, |known| Self::from(*known))
    }
}
