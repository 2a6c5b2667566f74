// SPDX-License-Identifier: MIT OR Apache-2.0
//! Numbers and keywords

use super::{Grammar, PResult, Pos, Trial};
use crate::chars::{is_binary_digit, is_decimal_digit, is_hex_digit, is_identifier_char, is_octal_digit};
use crate::dom::Scalar;
use crate::error::ErrorKind;
use crate::number::Number;

impl<'text> Grammar<'text> {
	/// whether a token ending here runs straight into more identifier text
	fn identifier_follows(&self, at: Pos) -> bool { self.top_char(at).is_some_and(is_identifier_char) }
	/// `keyword` = `#true | #false | #null`
	pub(super) fn keyword(&self, at: Pos) -> Option<(Pos, Scalar<'text>)> {
		[
			("#true", Scalar::Bool(true)),
			("#false", Scalar::Bool(false)),
			("#null", Scalar::Null),
		]
		.into_iter()
		.find(|(word, _)| self.tail(at).starts_with(word) && !self.identifier_follows(at.offset_str(word)))
		.map(|(word, value)| (at.offset_str(word), value))
	}
	/// `keyword-number` = `#inf | #-inf | #nan`
	fn keyword_number(&self, at: Pos) -> Option<Pos> {
		["#inf", "#-inf", "#nan"]
			.into_iter()
			.find(|word| self.tail(at).starts_with(word))
			.map(|word| at.offset_str(word))
	}
	/// `digit (digit | _)*`, not ending on `_`
	fn digits(&self, at: Pos, digit: fn(char) -> bool) -> PResult<Option<Pos>> {
		if !self.top_char(at).is_some_and(digit) {
			return Ok(None);
		}
		let mut end = at;
		while let Some(ch) = self.top_char(end) {
			if !digit(ch) && ch != '_' {
				break;
			}
			end = end.offset_char(ch);
		}
		if self.slice(at, end).ends_with('_') {
			return Self::fail(ErrorKind::InvalidNumber, end);
		}
		Ok(Some(end))
	}
	/// `hex`, `octal` or `binary`
	fn prefixed_integer(&self, at: Pos, prefix: &str, digit: fn(char) -> bool) -> PResult<Option<Pos>> {
		let at = self.sign(at).unwrap_or(at);
		if !self.tail(at).starts_with(prefix) {
			return Ok(None);
		}
		self.digits(at.offset_str(prefix), digit)
	}
	/// `decimal` = `sign? integer (. integer)? exponent?`
	fn decimal(&self, at: Pos) -> PResult<Option<Pos>> {
		let at = self.sign(at).unwrap_or(at);
		let Some(mut at) = self.digits(at, is_decimal_digit)? else {
			return Ok(None);
		};
		if self.top_char(at) == Some('.') {
			if let Some(next) = self.digits(at.offset_char('.'), is_decimal_digit)? {
				at = next;
			}
		}
		if let Some(e @ ('e' | 'E')) = self.top_char(at) {
			let exponent = at.offset_char(e);
			let exponent = self.sign(exponent).unwrap_or(exponent);
			if let Some(next) = self.digits(exponent, is_decimal_digit)? {
				at = next;
			}
		}
		Ok(Some(at))
	}
	/// `number`
	///
	/// A number followed directly by identifier characters (`1.`, `0x`,
	/// `12.34.56`, `1abc`) can't be anything else, so that fails outright.
	pub(super) fn number(&self, at: Pos) -> Trial<Number> {
		let end = match self.keyword_number(at) {
			Some(end) => end,
			None => match self.prefixed_integer(at, "0x", is_hex_digit)? {
				Some(end) => end,
				None => match self.prefixed_integer(at, "0o", is_octal_digit)? {
					Some(end) => end,
					None => match self.prefixed_integer(at, "0b", is_binary_digit)? {
						Some(end) => end,
						None => match self.decimal(at)? {
							Some(end) => end,
							None => return Ok(None),
						},
					},
				},
			},
		};
		if self.identifier_follows(end) {
			return Self::fail(ErrorKind::InvalidNumber, at);
		}
		Ok(Some((end, Number::from_raw(self.slice(at, end)))))
	}
}
