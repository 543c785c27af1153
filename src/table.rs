//! Cookie string parsing and the [`CookieTable`] mapping.
//!
//! The module provides the [`CookieTable`] struct, an insertion-ordered
//! mapping from cookie name to decoded cookie value, built from a raw
//! `name=value; name=value` string and serializable back into one.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::encoding;
use crate::error::{Error, Result};

/// Validation applied to the raw string while parsing.
///
/// Both policies accept empty names, empty values, repeated delimiters and
/// arbitrary special characters without error. They only differ on input that
/// contains no `=` character anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Fail with [`Error::Malformed`] when a non-blank input contains no `=`
    /// character at all.
    #[default]
    Strict,
    /// Never fail; a no-`=` input yields zero usable entries.
    Lenient,
}

/// A mutable mapping from cookie name to decoded cookie value.
///
/// Entries keep their insertion order, so serialization is deterministic:
/// names appear in the order they were first encountered, and overwriting an
/// existing name keeps its original position. Stored values are always the
/// decoded form; percent-escapes exist only in the serialized string.
///
/// # Examples
///
/// ```
/// use cookie_table::CookieTable;
///
/// let mut cookies = CookieTable::parse("name=John%20Doe; age=25").unwrap();
///
/// assert_eq!(cookies.get("name"), Some("John Doe"));
/// assert_eq!(cookies.get("age"), Some("25"));
///
/// cookies.set("city", "New York");
///
/// assert_eq!(
///     cookies.stringify(),
///     "name=John%20Doe; age=25; city=New%20York"
/// );
/// ```
#[derive(Debug, PartialEq, Eq, Default, Clone)]
pub struct CookieTable {
    entries: IndexMap<String, String>,
}

impl CookieTable {
    /// Creates an empty `CookieTable`.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Parses a raw cookie string under [`ParsePolicy::Strict`].
    ///
    /// A blank input yields an empty table. A non-blank input without any
    /// `=` character fails with [`Error::Malformed`].
    pub fn parse(raw: &str) -> Result<Self> {
        Self::parse_with(raw, ParsePolicy::Strict)
    }

    /// Parses a raw cookie string under the given policy.
    ///
    /// The raw string is split on runs of `;`. Each segment splits on its
    /// first `=` into a name and a value, both trimmed; later `=` characters
    /// stay inside the value, and a segment without `=` is a name with an
    /// empty value. Segments whose trimmed name is empty are dropped.
    /// Values are percent-decoded before storage, and a repeated name
    /// overwrites the earlier entry in place.
    ///
    /// Under [`ParsePolicy::Lenient`] this never fails.
    pub fn parse_with(raw: &str, policy: ParsePolicy) -> Result<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Ok(Self::new());
        }

        if policy == ParsePolicy::Strict && !trimmed.contains('=') {
            return Err(Error::Malformed { raw: raw.to_string() });
        }

        let mut entries = IndexMap::new();

        for segment in trimmed.split(';') {
            let (name, value) = match segment.split_once('=') {
                Some((name, value)) => (name.trim(), value.trim()),
                None => (segment.trim(), ""),
            };

            if name.is_empty() {
                if !segment.is_empty() {
                    log::trace!("dropping nameless cookie segment: {:?}", segment);
                }
                continue;
            }

            entries.insert(name.to_string(), encoding::decode(value));
        }

        Ok(Self { entries })
    }

    /// Gets the decoded value stored under `name`, if any.
    ///
    /// A stored empty value is `Some("")`, distinct from an absent name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Checks whether an entry named `name` exists.
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Inserts or overwrites the entry named `name`.
    ///
    /// `value` is the decoded form; it is percent-encoded on serialization
    /// only. Overwriting keeps the entry's original position.
    pub fn set(&mut self, name: &str, value: &str) {
        self.entries.insert(name.to_string(), value.to_string());
    }

    /// Removes the entry named `name`, returning its decoded value.
    ///
    /// Returns `None` and leaves the table unchanged when the name is
    /// absent. The remaining entries keep their relative order.
    pub fn delete(&mut self, name: &str) -> Option<String> {
        self.entries.shift_remove(name)
    }

    /// Serializes the table as `name=value` pairs joined with `"; "`.
    ///
    /// Values are percent-encoded; names are written verbatim. Entries
    /// appear in insertion order and an empty table yields an empty string.
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over `(name, decoded value)` pairs in insertion
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl fmt::Display for CookieTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in &self.entries {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}={}", name, encoding::encode(value))?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for CookieTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<'a, const N: usize> From<[(&'a str, &'a str); N]> for CookieTable {
    fn from(pairs: [(&'a str, &'a str); N]) -> Self {
        let mut table = Self::new();
        for (name, value) in pairs {
            table.set(name, value);
        }
        table
    }
}
