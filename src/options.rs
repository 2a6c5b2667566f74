// SPDX-License-Identifier: MIT OR Apache-2.0
//! Parser and writer configuration

use std::borrow::Cow;
use std::fmt;

use crate::validate::Validator;

/// Options for [`Document::parse_with`](crate::dom::Document::parse_with)
#[derive(Clone, Copy, Default)]
pub struct ParseOptions<'v> {
	validator: Option<&'v dyn Validator>,
}

impl<'v> ParseOptions<'v> {
	pub fn new() -> Self { Self::default() }
	/// Run `validator` over every successfully parsed document
	pub fn with_validator(mut self, validator: &'v dyn Validator) -> Self {
		self.validator = Some(validator);
		self
	}
	pub fn validator(&self) -> Option<&'v dyn Validator> { self.validator }
}

impl fmt::Debug for ParseOptions<'_> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("ParseOptions")
			.field("validator", &self.validator.is_some())
			.finish()
	}
}

/// Options for [`write`](crate::writer::write)
///
/// The default writes canonical text: strings in their simplest form, no
/// semicolons, no slashdashed entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
	round_trip: bool,
	prefer_raw: bool,
	indent: Cow<'static, str>,
	write_skipped: bool,
}

impl Default for WriteOptions {
	fn default() -> Self {
		Self {
			round_trip: false,
			prefer_raw: false,
			indent: Cow::Borrowed("    "),
			write_skipped: false,
		}
	}
}

impl WriteOptions {
	pub fn new() -> Self { Self::default() }
	/// Reproduce how the text was originally written: string kinds,
	/// semicolons and slashdashed entries
	pub fn round_trip() -> Self { Self::new().with_round_trip(true).with_write_skipped(true) }
	/// Replay each string's original kind and `;` terminators
	pub fn with_round_trip(mut self, round_trip: bool) -> Self {
		self.round_trip = round_trip;
		self
	}
	/// Use raw strings for text with quotes or backslashes
	pub fn with_prefer_raw(mut self, prefer_raw: bool) -> Self {
		self.prefer_raw = prefer_raw;
		self
	}
	/// One level of indentation, four spaces by default
	///
	/// Only spaces and tabs are kept, any other character is dropped.
	pub fn with_indent(mut self, indent: impl Into<Cow<'static, str>>) -> Self {
		let indent = indent.into();
		self.indent = if indent.chars().all(is_indent_char) {
			indent
		} else {
			Cow::Owned(indent.chars().filter(|&ch| is_indent_char(ch)).collect())
		};
		self
	}
	/// Write slashdashed entries back as `/- entry`
	pub fn with_write_skipped(mut self, write_skipped: bool) -> Self {
		self.write_skipped = write_skipped;
		self
	}
	pub fn is_round_trip(&self) -> bool { self.round_trip }
	pub fn prefers_raw(&self) -> bool { self.prefer_raw }
	pub fn indent(&self) -> &str { &self.indent }
	pub fn writes_skipped(&self) -> bool { self.write_skipped }
}

fn is_indent_char(ch: char) -> bool { ch == ' ' || ch == '\t' }
