//! Order-independent placeholder substitution.
//!
//! Stencil scans a template for keys wrapped in a prefix and a suffix, and
//! replaces the ones it has values for. Placeholders it has no value for are
//! left exactly as they were, delimiters included, so a template can be
//! filled in over several passes. There is no logic, no escaping and no
//! format specifiers: a placeholder is a bare key.
//!
//! # Syntax
//!
//! ```plain
//! Hello ${name}, you have ${count} new messages.
//! ```
//!
//! A placeholder is denoted by `${` and `}` unless other delimiters are
//! configured. Everything between the prefix and the closest following suffix
//! is the key, verbatim (no trimming, and the empty key is allowed).
//!
//! # Usage
//!
//! ```
//! use stencil::Formatter;
//!
//! let mut formatter = Formatter::new();
//! formatter.put("fruit", "Apple");
//! formatter.put("name", "John");
//!
//! assert_eq!(
//!     formatter.format("Example: ${fruit}, ${number}, ${name}"),
//!     "Example: Apple, ${number}, John",
//! );
//! ```
//!
//! Values are kept between calls until [`Formatter::clear`] is called, which
//! makes partial formatting straightforward:
//!
//! ```
//! use stencil::Formatter;
//!
//! let mut formatter = Formatter::new();
//! formatter.put("0", "Apple");
//! let partial = formatter.format("${0} and ${1}");
//! assert_eq!(partial, "Apple and ${1}");
//!
//! formatter.clear();
//! formatter.put("1", 42);
//! assert_eq!(formatter.format(&partial), "Apple and 42");
//! ```
//!
//! Any delimiters can be used, including multi-character ones:
//!
//! ```
//! use stencil::Formatter;
//!
//! let mut formatter = Formatter::with_delimiters("<%", "%>!");
//! formatter.put("who", "world");
//! assert_eq!(formatter.format("hello <%who%>! ${who}"), "hello world ${who}");
//! ```
//!
//! # Values
//!
//! A [`Formatter`] owns a [`PlaceholderStore`], but the [`Scanner`] underneath
//! it works with anything implementing [`Values`]: std maps, slices of pairs,
//! or a closure wrapped with [`vals`].
//!
//! ```
//! use std::collections::HashMap;
//! use stencil::{Delimiters, Scanner};
//!
//! let delimiters = Delimiters::default();
//! let scanner = Scanner::new(&delimiters);
//!
//! let mut values = HashMap::new();
//! values.insert("name", "brutus");
//! assert_eq!(scanner.render("hello ${name}", &values), "hello brutus");
//! ```
//!
//! # Errors
//!
//! [`Formatter::format`] cannot fail. [`Formatter::format_bytes`] returns
//! [`InvalidTemplate`] if the template is not UTF-8, and
//! [`Formatter::format_into`] passes I/O errors through.

#[doc(inline)]
pub use delimiters::*;

#[doc(inline)]
pub use error::*;

#[doc(inline)]
pub use formatter::*;

#[doc(inline)]
pub use scanner::*;

#[doc(inline)]
pub use store::*;

#[doc(inline)]
pub use value::*;

#[doc(inline)]
pub use values::*;

mod delimiters;
mod error;
mod formatter;
mod macros;
mod scanner;
mod store;
mod value;
mod values;
