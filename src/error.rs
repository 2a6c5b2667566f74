// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types returned by the parser

use thiserror::Error;

use crate::validate::ValidationError;

/// What went wrong while parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ErrorKind {
	/// A `(` was opened but never closed
	#[error("Expected `)` to close the type annotation")]
	ExpectedCloseParen,
	/// `()` with nothing inside
	#[error("Type annotation must not be empty")]
	EmptyTypeAnnotation,
	/// A `{` was opened but never closed
	#[error("Expected closing brace")]
	ExpectedCloseBrace,
	/// A string or identifier was expected
	#[error("Expected a string or identifier")]
	ExpectedString,
	/// A value of some kind was expected
	#[error("Expected a value")]
	ExpectedValue,
	/// Something other than `;`, a newline, a comment or the end of the input
	/// followed a node
	#[error("Expected a node terminator (newline, `;` or comment)")]
	ExpectedNodeTerminator,
	/// A `\` line continuation wasn't followed by a line end
	#[error("Expected a newline or comment after line continuation")]
	ExpectedEscLine,
	/// The opening `"""` of a multi-line string must end its line
	#[error("Multi-line string opening must be followed by a newline")]
	ExpectedNewline,
	/// A literal newline inside a single-line string
	#[error("Newlines are not allowed in single-line strings")]
	UnexpectedNewline,
	/// The string never finished
	#[error("Unterminated string")]
	UnterminatedString,
	/// The block comment never finished
	#[error("Unterminated block comment")]
	UnterminatedComment,
	/// A number is invalid
	#[error("Invalid number")]
	InvalidNumber,
	/// An unknown `#keyword`
	#[error("Unknown keyword")]
	BadKeyword,
	/// A bare identifier that is spelled like a keyword
	#[error("`{0}` is a reserved keyword and cannot be used as a bare identifier, quote it instead: \"{0}\"")]
	ReservedIdentifier(String),
	/// An invalid escape sequence
	#[error("Invalid escape sequence")]
	BadEscape,
	/// The last line of a multi-line string holds something else than the indent
	#[error("Closing delimiter of a multi-line string must be on its own line")]
	ClosingDelimiterNotOnOwnLine,
	/// The indentation for this line doesn't match the closing line
	#[error("Multi-line string indentation mismatch")]
	IndentMismatch,
	/// `node{` or `node/-{`
	#[error("Nodes must be separated from their children block by whitespace")]
	ChildrenWithoutSpace,
	/// Multiple children blocks are present for one node
	#[error("A node may only have one children block")]
	MultipleChildren,
	/// Children blocks nested past the supported depth
	#[error("Children blocks are nested too deeply")]
	TooDeep,
	/// An always-invalid character
	#[error("Disallowed character {0:?}")]
	DisallowedChar(char),
	/// Anything left after the last node
	#[error("Unconsumed content at end of file.")]
	UnconsumedContent,
}

/// A parsing error, with the position it was found at
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} (line {line}, column {column})")]
pub struct ParseError {
	kind: ErrorKind,
	offset: usize,
	line: usize,
	column: usize,
}

impl ParseError {
	/// Locate a failure at byte `offset` of `text`
	pub(crate) fn new(kind: ErrorKind, text: &str, offset: usize) -> Self {
		let offset = offset.min(text.len());
		let (line, column) = line_column(text, offset);
		Self {
			kind,
			offset,
			line,
			column,
		}
	}
	/// What went wrong
	pub fn kind(&self) -> &ErrorKind { &self.kind }
	/// Byte position in the source text
	pub fn offset(&self) -> usize { self.offset }
	/// 1-based line
	pub fn line(&self) -> usize { self.line }
	/// 1-based column, in characters
	pub fn column(&self) -> usize { self.column }
}

fn line_column(text: &str, offset: usize) -> (usize, usize) {
	let mut line = 1;
	let mut column = 1;
	let mut chars = text[..offset].chars().peekable();
	while let Some(ch) = chars.next() {
		if ch == '\r' && chars.peek() == Some(&'\n') {
			continue;
		}
		if crate::chars::is_newline(ch) {
			line += 1;
			column = 1;
		} else {
			column += 1;
		}
	}
	(line, column)
}

/// Anything [`Document::parse_with`] can fail with
///
/// [`Document::parse_with`]: crate::dom::Document::parse_with
#[derive(Debug, Error)]
pub enum Error {
	#[error(transparent)]
	Parse(#[from] ParseError),
	#[error(transparent)]
	Validation(#[from] ValidationError),
}
