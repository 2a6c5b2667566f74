// SPDX-License-Identifier: MIT OR Apache-2.0
//! Identifier, quoted and raw strings

use std::borrow::Cow;

use super::{Failure, Grammar, PResult, Pos, Trial};
use crate::chars::{
	is_decimal_digit, is_disallowed_literal, is_identifier_char, is_newline, is_sign, is_whitespace,
};
use crate::dom::{StringKind, StringValue};
use crate::error::ErrorKind;

/// Identifiers that are always keywords
const RESERVED: [&str; 6] = ["true", "false", "null", "inf", "-inf", "nan"];

impl<'text> Grammar<'text> {
	/// `string` = `identifier-string | quoted-string | raw-string`
	pub(super) fn string(&self, at: Pos) -> Trial<StringValue<'text>> {
		match self.top_char(at) {
			Some('"') => self.quoted_string(at).map(Some),
			Some('#') => self.raw_string(at),
			_ => Ok(self
				.identifier_string(at)?
				.map(|(next, text)| (next, StringValue::new(text, StringKind::Bare)))),
		}
	}
	/// `identifier-char*`
	fn identifier_chars(&self, mut at: Pos) -> Pos {
		while let Some(ch) = self.top_char(at) {
			if !is_identifier_char(ch) {
				break;
			}
			at = at.offset_char(ch);
		}
		at
	}
	pub(super) fn sign(&self, at: Pos) -> Option<Pos> {
		self.top_char(at).filter(|&ch| is_sign(ch)).map(|ch| at.offset_char(ch))
	}
	/// `dotted-ident` = `sign? . ((identifier-char - digit) identifier-char*)?`
	fn dotted_ident(&self, at: Pos) -> Option<Pos> {
		let at = self.sign(at).unwrap_or(at);
		if self.top_char(at) != Some('.') {
			return None;
		}
		let at = at.offset_char('.');
		match self.top_char(at) {
			Some(ch) if is_decimal_digit(ch) => None,
			_ => Some(self.identifier_chars(at)),
		}
	}
	/// `signed-ident` = `sign ((identifier-char - digit - .) identifier-char*)?`
	fn signed_ident(&self, at: Pos) -> Option<Pos> {
		let at = self.sign(at)?;
		match self.top_char(at) {
			Some(ch) if is_decimal_digit(ch) || ch == '.' => None,
			_ => Some(self.identifier_chars(at)),
		}
	}
	/// `unambiguous-ident`
	fn unambiguous_ident(&self, at: Pos) -> Option<Pos> {
		match self.top_char(at)? {
			ch if is_identifier_char(ch) && !is_decimal_digit(ch) && !is_sign(ch) && ch != '.' => {
				Some(self.identifier_chars(at.offset_char(ch)))
			}
			_ => None,
		}
	}
	/// `identifier-string`, keywords are refused
	pub(super) fn identifier_string(&self, at: Pos) -> Trial<&'text str> {
		let Some(end) = self
			.dotted_ident(at)
			.or_else(|| self.signed_ident(at))
			.or_else(|| self.unambiguous_ident(at))
		else {
			return Ok(None);
		};
		let text = self.slice(at, end);
		if RESERVED.contains(&text) {
			return Self::fail(ErrorKind::ReservedIdentifier(text.to_owned()), at);
		}
		Ok(Some((end, text)))
	}
	/// string escape after `\`, `None` for whitespace escapes
	pub(super) fn escape(&self, at: Pos) -> PResult<(Pos, Option<char>)> {
		let Some(top) = self.top_char(at) else {
			return Self::fail(ErrorKind::UnterminatedString, at);
		};
		let (at, ch) = match top {
			'n' => (at.offset_char('n'), Some('\n')),
			'r' => (at.offset_char('r'), Some('\r')),
			't' => (at.offset_char('t'), Some('\t')),
			'\\' => (at.offset_char('\\'), Some('\\')),
			'"' => (at.offset_char('"'), Some('"')),
			'b' => (at.offset_char('b'), Some('\x08')),
			'f' => (at.offset_char('f'), Some('\x0C')),
			's' => (at.offset_char('s'), Some(' ')),
			'u' => {
				let start = at.offset_char('u');
				if self.top_char(start) != Some('{') {
					return Self::fail(ErrorKind::BadEscape, at);
				}
				let start = start.offset_char('{');
				let mut end = start;
				for _ in 0..6 {
					match self.top_char(end) {
						Some(ch) if ch.is_ascii_hexdigit() => end = end.offset_char(ch),
						Some('}') => break,
						_ => return Self::fail(ErrorKind::BadEscape, at),
					}
				}
				if self.top_char(end) != Some('}') {
					return Self::fail(ErrorKind::BadEscape, at);
				}
				// surrogates and anything past U+10FFFF aren't chars
				let ch = u32::from_str_radix(self.slice(start, end), 16)
					.ok()
					.and_then(char::from_u32)
					.ok_or(Failure::new(ErrorKind::BadEscape, at))?;
				(end.offset_char('}'), Some(ch))
			}
			ch if is_whitespace(ch) || is_newline(ch) => {
				let mut at = at.offset_char(ch);
				while let Some(next) = self.top_char(at) {
					if !is_whitespace(next) && !is_newline(next) {
						break;
					}
					at = at.offset_char(next);
				}
				(at, None)
			}
			_ => return Self::fail(ErrorKind::BadEscape, at),
		};
		Ok((at, ch))
	}
	/// `quoted-string`, starting at the first `"`
	fn quoted_string(&self, open: Pos) -> PResult<(Pos, StringValue<'text>)> {
		if self.tail(open).starts_with("\"\"\"") {
			let (at, text) = self.multi_line_string(open)?;
			return Ok((at, StringValue::new(text, StringKind::MultiLine)));
		}
		// single-line
		// none = can be borrowed
		let start = open.offset_char('"');
		let mut text = None::<String>;
		let mut at = start;
		loop {
			match self.top_char(at) {
				Some('\\') => {
					let text = text.get_or_insert_with(|| self.slice(start, at).to_owned());
					let (next, ch) = self.escape(at.offset_char('\\'))?;
					at = next;
					text.extend(ch);
				}
				Some('"') => {
					let value = text.map_or_else(|| Cow::Borrowed(self.slice(start, at)), Cow::Owned);
					break Ok((at.offset_char('"'), StringValue::new(value, StringKind::Quoted)));
				}
				// a literal CR takes up no room in a single-line string
				Some('\r') => {
					text.get_or_insert_with(|| self.slice(start, at).to_owned());
					at = at.offset_char('\r');
				}
				Some(ch) if is_newline(ch) => return Self::fail(ErrorKind::UnexpectedNewline, at),
				Some(ch) if is_disallowed_literal(ch) => {
					return Self::fail(ErrorKind::DisallowedChar(ch), at);
				}
				Some(ch) => {
					if let Some(text) = &mut text {
						text.push(ch);
					}
					at = at.offset_char(ch);
				}
				None => return Self::fail(ErrorKind::UnterminatedString, open),
			}
		}
	}
	/// `multi-line-string`, starting at the opening `"""`
	fn multi_line_string(&self, open: Pos) -> PResult<(Pos, Cow<'text, str>)> {
		let after_fence = open.offset_str("\"\"\"");
		let Some(start) = self.newline(after_fence) else {
			return Self::fail(ErrorKind::ExpectedNewline, after_fence);
		};
		// the first unescaped `"""` closes; skipping escape pairs means an odd
		// run of backslashes escapes the quote after it
		let mut at = start;
		let end = loop {
			match self.top_char(at) {
				Some('"') if self.tail(at).starts_with("\"\"\"") => break at,
				Some(ch) if is_disallowed_literal(ch) => {
					return Self::fail(ErrorKind::DisallowedChar(ch), at);
				}
				Some('\\') => {
					at = at.offset_char('\\');
					match self.top_char(at) {
						Some(ch) if is_disallowed_literal(ch) => {
							return Self::fail(ErrorKind::DisallowedChar(ch), at);
						}
						Some(ch) => at = at.offset_char(ch),
						None => {}
					}
				}
				Some(ch) => at = at.offset_char(ch),
				None => return Self::fail(ErrorKind::UnterminatedString, open),
			}
		};
		let body = normalize_newlines(self.slice(start, end));
		let body = collapse_whitespace_escapes(&body);
		let dedented = dedent(&body, is_whitespace).map_err(|kind| Failure::new(kind, open))?;
		let text = Grammar(&dedented)
			.unescape()
			.map_err(|failure| Failure::new(failure.kind, open))?;
		Ok((end.offset_str("\"\"\""), Cow::Owned(text)))
	}
	/// resolve every escape in the whole text, newlines are kept as-is
	fn unescape(&self) -> PResult<String> {
		let mut text = String::with_capacity(self.0.len());
		let mut at = Pos(0);
		while let Some(ch) = self.top_char(at) {
			if ch == '\\' {
				let (next, ch) = self.escape(at.offset_char('\\'))?;
				text.extend(ch);
				at = next;
			} else {
				text.push(ch);
				at = at.offset_char(ch);
			}
		}
		Ok(text)
	}
	/// `raw-string`, starting at the first `#`
	fn raw_string(&self, open: Pos) -> Trial<StringValue<'text>> {
		let hashes = self.tail(open).bytes().take_while(|&byte| byte == b'#').count();
		let fence = &self.tail(open)[..hashes];
		let at = open.offset_bytes(hashes);
		if self.top_char(at) != Some('"') {
			return Ok(None);
		}
		if self.tail(at).starts_with("\"\"\"") {
			let after_fence = at.offset_str("\"\"\"");
			let Some(start) = self.newline(after_fence) else {
				return Self::fail(ErrorKind::ExpectedNewline, after_fence);
			};
			let needle = format!("\"\"\"{fence}");
			let Some(len) = self.tail(start).find(&needle) else {
				return Self::fail(ErrorKind::UnterminatedString, open);
			};
			let end = start.offset_bytes(len);
			self.literal_text(start, end, true)?;
			let body = normalize_newlines(self.slice(start, end));
			let text = dedent(&body, |ch| matches!(ch, ' ' | '\t'))
				.map_err(|kind| Failure::new(kind, open))?;
			let value = StringValue::new(text, StringKind::RawMultiLine);
			Ok(Some((end.offset_str(&needle), value)))
		} else {
			let start = at.offset_char('"');
			let needle = format!("\"{fence}");
			let Some(len) = self.tail(start).find(&needle) else {
				return Self::fail(ErrorKind::UnterminatedString, open);
			};
			let end = start.offset_bytes(len);
			self.literal_text(start, end, false)?;
			let value = StringValue::new(self.slice(start, end), StringKind::Raw);
			Ok(Some((end.offset_str(&needle), value)))
		}
	}
	/// check raw string contents for characters that can't appear literally
	fn literal_text(&self, start: Pos, end: Pos, newlines: bool) -> PResult<()> {
		for (index, ch) in self.slice(start, end).char_indices() {
			let at = start.offset_bytes(index);
			if is_disallowed_literal(ch) {
				return Self::fail(ErrorKind::DisallowedChar(ch), at);
			}
			if !newlines && is_newline(ch) {
				return Self::fail(ErrorKind::UnexpectedNewline, at);
			}
		}
		Ok(())
	}
}

/// every newline (CRLF counting once) becomes `\n`
fn normalize_newlines(text: &str) -> Cow<'_, str> {
	if !text.contains(|ch: char| is_newline(ch) && ch != '\n') {
		return Cow::Borrowed(text);
	}
	let mut out = String::with_capacity(text.len());
	let mut chars = text.chars().peekable();
	while let Some(ch) = chars.next() {
		if ch == '\r' && chars.peek() == Some(&'\n') {
			continue;
		}
		out.push(if is_newline(ch) { '\n' } else { ch });
	}
	Cow::Owned(out)
}

/// drop whitespace escapes (`\` and the run of whitespace and newlines after
/// it), other escapes are left for later
fn collapse_whitespace_escapes(text: &str) -> Cow<'_, str> {
	if !text.contains('\\') {
		return Cow::Borrowed(text);
	}
	let mut out = String::with_capacity(text.len());
	let mut rest = text;
	while let Some(index) = rest.find('\\') {
		out.push_str(&rest[..index]);
		let after = &rest[index + 1..];
		let trimmed = after.trim_start_matches(|ch: char| is_whitespace(ch) || ch == '\n');
		if trimmed.len() != after.len() {
			rest = trimmed;
		} else {
			// keep the pair so `\\` can't start a whitespace escape
			out.push('\\');
			let mut chars = after.chars();
			out.extend(chars.next());
			rest = chars.as_str();
		}
	}
	out.push_str(rest);
	Cow::Owned(out)
}

/// Strip the closing line's indent from every line of a multi-line body.
///
/// `body` spans from after the opening newline to right before the closing
/// fence, with newlines normalized. Its last line is the indent.
fn dedent(body: &str, indent_char: fn(char) -> bool) -> Result<String, ErrorKind> {
	let (lines, indent) = match body.rsplit_once('\n') {
		Some((lines, indent)) => (Some(lines), indent),
		None => (None, body),
	};
	if !indent.chars().all(indent_char) {
		return Err(ErrorKind::ClosingDelimiterNotOnOwnLine);
	}
	let Some(lines) = lines else {
		return Ok(String::new());
	};
	lines
		.split('\n')
		.map(|line| {
			if line.chars().all(is_whitespace) {
				Ok("")
			} else {
				line.strip_prefix(indent).ok_or(ErrorKind::IndentMismatch)
			}
		})
		.collect::<Result<Vec<_>, _>>()
		.map(|lines| lines.join("\n"))
}
