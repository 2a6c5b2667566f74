// SPDX-License-Identifier: MIT OR Apache-2.0
//! The actual parser
//!
//! A recursive-descent parser over a complete `&str`. Every rule is a method
//! on [`Grammar`] taking the position to start at and returning the position
//! after the match.
//!
//! Rules come in two flavours:
//! - `PResult<Pos>` / `PResult<(Pos, T)>`: the rule must match here
//! - [`Trial`]: `Ok(None)` means "not this rule" and nothing was consumed,
//!   so the caller may try an alternative. `Err` is always final: some
//!   delimiter already committed to this rule and what followed is malformed.

use crate::dom::{Document, Value};
use crate::error::{ErrorKind, ParseError};
use crate::number::{Number, NumberError};

mod node;
mod scalar;
mod string;
mod trivia;

pub(crate) use node::MAX_DEPTH;

/// A committed failure, `usize` is the byte position in the source text
#[derive(Debug)]
struct Failure {
	kind: ErrorKind,
	at: usize,
}

impl Failure {
	fn new(kind: ErrorKind, at: Pos) -> Self { Self { kind, at: at.0 } }
	fn locate(self, text: &str) -> ParseError { ParseError::new(self.kind, text, self.at) }
}

type PResult<T> = Result<T, Failure>;
/// `Ok(None)` = no match, nothing consumed
type Trial<T> = PResult<Option<(Pos, T)>>;

/// parsing position
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pos(usize);

impl Pos {
	fn offset_bytes(self, n: usize) -> Self { Self(self.0 + n) }
	fn offset_char(self, ch: char) -> Self { self.offset_bytes(ch.len_utf8()) }
	fn offset_str(self, text: &str) -> Self { self.offset_bytes(text.len()) }
}

struct Grammar<'text>(&'text str);

// in the impls: anything in `backticks` represents a kdl grammar item
impl<'text> Grammar<'text> {
	fn tail(&self, at: Pos) -> &'text str { &self.0[at.0..] }
	fn slice(&self, from: Pos, to: Pos) -> &'text str { &self.0[from.0..to.0] }
	fn top_char(&self, at: Pos) -> Option<char> { self.tail(at).chars().next() }
	fn fail<T>(kind: ErrorKind, at: Pos) -> PResult<T> { Err(Failure::new(kind, at)) }
}

/// `document`
pub(crate) fn parse_document(text: &str) -> Result<Document<'_>, ParseError> {
	Grammar(text).document().map_err(|failure| failure.locate(text))
}

/// A single, optionally annotated, value making up the whole text
pub(crate) fn parse_value(text: &str) -> Result<Value<'_>, ParseError> {
	let grammar = Grammar(text);
	let result = grammar.value(Pos(0)).and_then(|value| match value {
		Some((end, value)) if end.0 == text.len() => Ok(value),
		Some((end, _)) => Grammar::fail(ErrorKind::UnconsumedContent, end),
		None => Grammar::fail(ErrorKind::ExpectedValue, Pos(0)),
	});
	result.map_err(|failure| failure.locate(text))
}

/// Actual number parsing implementation based on the grammar rules
pub(crate) fn parse_number(text: &str) -> Result<Number, NumberError> {
	match Grammar(text).number(Pos(0)) {
		Ok(Some((end, number))) if end.0 == text.len() => Ok(number),
		_ => Err(NumberError::BadSyntax),
	}
}

/// Whether `text` reads back as exactly one bare identifier
pub(crate) fn is_bare_identifier(text: &str) -> bool {
	matches!(
		Grammar(text).identifier_string(Pos(0)),
		Ok(Some((end, _))) if end.0 == text.len()
	)
}
