// SPDX-License-Identifier: MIT OR Apache-2.0
//! [![MIT OR Apache-2.0](https://img.shields.io/badge/license-MIT%20OR%20Apache--2.0-blue)](README.md#License)
//!
//! [KDL] v2.0.0 parser, document model and round-trip writer
//!
//! ```
//! use kdlform::dom::Document;
//! use kdlform::options::WriteOptions;
//!
//! let text = "package name=kdlform version=\"0.1.0\";\ndependencies {\n    thiserror \"2\"\n}\n";
//! let doc = Document::parse(text)?;
//! assert_eq!(doc.get("package").next().unwrap()["name"].as_str(), Some("kdlform"));
//! // canonical output drops the `;`
//! assert!(doc.to_string().starts_with("package name=kdlform version=\"0.1.0\"\n"));
//! // round-trip output doesn't
//! assert_eq!(doc.to_string_with(&WriteOptions::round_trip()), text);
//! # Ok::<_, kdlform::error::ParseError>(())
//! ```
//!
//! ## Why?
//!
//! Parsing configuration just to read it back is one job, rewriting it
//! without mangling how it was written is another. This crate keeps just
//! enough formatting information for the second (how each string was quoted,
//! `;` terminators, slashdashed entries) without keeping whitespace and
//! comments around.
//!
//! - Numbers keep their source text, converting only on request, with no
//!   precision lost on the way (see [`number::Number`])
//! - Strings remember their kind: bare, quoted, raw, multi-line
//! - Errors carry the byte offset, line and column they happened at
//! - Semantic checks plug in after parsing via [`validate::Validator`]
//!
//! [kdl]: <https://kdl.dev>

use std::borrow::Cow;

pub mod chars;
pub mod dom;
pub mod error;
mod grammar;
pub mod number;
pub mod options;
pub mod validate;
pub mod writer;

#[cfg(test)]
mod tests;

pub use dom::{Document, Entry, Node, Property, Scalar, StringKind, StringValue, Value};
pub use error::{Error, ErrorKind, ParseError};
pub use number::{Number, NumberError};
pub use options::{ParseOptions, WriteOptions};

fn cow_static<T: ?Sized + ToOwned>(value: Cow<'_, T>) -> Cow<'static, T> {
  Cow::Owned(value.into_owned())
}
