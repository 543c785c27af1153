//! # cookie-table
//!
//! Parsing and serialization of HTTP-style cookie strings.
//!
//! A cookie string is a semicolon-delimited list of `name=value` pairs, as
//! found in `Cookie` header content. [`CookieTable`] parses such a string once
//! into an insertion-ordered mapping, exposes query and mutation operations
//! over it, and serializes the current state back into a cookie string with
//! values percent-encoded.
//!
//! # Examples
//!
//! ```
//! use cookie_table::CookieTable;
//!
//! let mut cookies = CookieTable::parse("name=John%20Doe; age=25").unwrap();
//!
//! assert_eq!(cookies.get("name"), Some("John Doe"));
//!
//! cookies.set("city", "New York");
//! cookies.delete("age");
//!
//! assert_eq!(cookies.stringify(), "name=John%20Doe; city=New%20York");
//! ```

pub mod table;

pub(crate) mod encoding;
pub(crate) mod error;

pub use error::Error;
pub use error::Result;
pub use table::CookieTable;
pub use table::ParsePolicy;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
