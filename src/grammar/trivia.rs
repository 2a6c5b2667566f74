// SPDX-License-Identifier: MIT OR Apache-2.0
//! Whitespace, comments and line continuations

use super::{Failure, Grammar, PResult, Pos};
use crate::chars::{is_disallowed_literal, is_newline, is_whitespace};
use crate::error::ErrorKind;

impl<'text> Grammar<'text> {
	/// `bom`
	pub(super) fn bom(&self, at: Pos) -> Option<Pos> {
		(self.top_char(at) == Some('\u{FEFF}')).then(|| at.offset_char('\u{FEFF}'))
	}
	/// `newline`, with CRLF as a single one
	pub(super) fn newline(&self, at: Pos) -> Option<Pos> {
		match self.top_char(at)? {
			'\r' if self.tail(at).starts_with("\r\n") => Some(at.offset_str("\r\n")),
			ch if is_newline(ch) => Some(at.offset_char(ch)),
			_ => None,
		}
	}
	/// `single-line-comment`, up to but excluding the line end
	pub(super) fn single_line_comment(&self, at: Pos) -> PResult<Option<Pos>> {
		if !self.tail(at).starts_with("//") {
			return Ok(None);
		}
		let mut at = at.offset_str("//");
		loop {
			match self.top_char(at) {
				Some(ch) if is_newline(ch) => return Ok(Some(at)),
				Some(ch) if is_disallowed_literal(ch) => {
					return Self::fail(ErrorKind::DisallowedChar(ch), at);
				}
				Some(ch) => at = at.offset_char(ch),
				None => return Ok(Some(at)),
			}
		}
	}
	/// `multi-line-comment`, nested comments are matched whole
	pub(super) fn multi_line_comment(&self, start: Pos) -> PResult<Option<Pos>> {
		if !self.tail(start).starts_with("/*") {
			return Ok(None);
		}
		let mut at = start.offset_str("/*");
		let mut nest = 0_usize;
		loop {
			if self.tail(at).starts_with("*/") {
				at = at.offset_str("*/");
				match nest.checked_sub(1) {
					Some(next) => nest = next,
					None => return Ok(Some(at)),
				}
				continue;
			}
			if self.tail(at).starts_with("/*") {
				at = at.offset_str("/*");
				nest += 1;
				continue;
			}
			match self.top_char(at) {
				Some(ch) if is_disallowed_literal(ch) => {
					return Self::fail(ErrorKind::DisallowedChar(ch), at);
				}
				Some(ch) => at = at.offset_char(ch),
				None => return Err(Failure::new(ErrorKind::UnterminatedComment, start)),
			}
		}
	}
	/// `ws`
	pub(super) fn ws(&self, at: Pos) -> PResult<Option<Pos>> {
		match self.top_char(at) {
			Some(ch) if is_whitespace(ch) => Ok(Some(at.offset_char(ch))),
			Some('/') => self.multi_line_comment(at),
			_ => Ok(None),
		}
	}
	/// `ws*`
	fn ws_star(&self, mut at: Pos) -> PResult<Pos> {
		while let Some(next) = self.ws(at)? {
			at = next;
		}
		Ok(at)
	}
	/// `escline` = `\ ws* (single-line-comment | newline | eof)`
	pub(super) fn escline(&self, at: Pos) -> PResult<Option<Pos>> {
		if self.top_char(at) != Some('\\') {
			return Ok(None);
		}
		let at = self.ws_star(at.offset_char('\\'))?;
		if let Some(next) = self.single_line_comment(at)? {
			return Ok(Some(self.newline(next).unwrap_or(next)));
		}
		if let Some(next) = self.newline(at) {
			return Ok(Some(next));
		}
		if self.top_char(at).is_none() {
			return Ok(Some(at));
		}
		Self::fail(ErrorKind::ExpectedEscLine, at)
	}
	/// one `node-space` = `ws* escline ws* | ws+`
	pub(super) fn node_space(&self, at: Pos) -> PResult<Option<Pos>> {
		let next = self.ws_star(at)?;
		if let Some(next) = self.escline(next)? {
			return self.ws_star(next).map(Some);
		}
		Ok((next != at).then_some(next))
	}
	/// `node-space*`
	pub(super) fn node_spaces(&self, mut at: Pos) -> PResult<Pos> {
		while let Some(next) = self.node_space(at)? {
			at = next;
		}
		Ok(at)
	}
	/// one `line-space` = `node-space | newline | single-line-comment`
	pub(super) fn line_space(&self, at: Pos) -> PResult<Option<Pos>> {
		if let Some(next) = self.node_space(at)? {
			return Ok(Some(next));
		}
		if let Some(next) = self.newline(at) {
			return Ok(Some(next));
		}
		self.single_line_comment(at)
	}
	/// `line-space*`
	pub(super) fn line_spaces(&self, mut at: Pos) -> PResult<Pos> {
		while let Some(next) = self.line_space(at)? {
			at = next;
		}
		Ok(at)
	}
	/// `slashdash` = `/- line-space*`
	pub(super) fn slashdash(&self, at: Pos) -> PResult<Option<Pos>> {
		if !self.tail(at).starts_with("/-") {
			return Ok(None);
		}
		self.line_spaces(at.offset_str("/-")).map(Some)
	}
}
