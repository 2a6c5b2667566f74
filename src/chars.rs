// SPDX-License-Identifier: MIT OR Apache-2.0
//! Code point classes used by the grammar and the writer

/// `unicode-space`
pub fn is_whitespace(ch: char) -> bool {
	matches!(
		ch,
		'\u{9}' | '\u{20}' | '\u{A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}'
	)
}

/// `newline`, every code point on its own (CRLF is handled by the grammar)
pub fn is_newline(ch: char) -> bool {
	matches!(ch, '\u{A}'..='\u{D}' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// `disallowed-literal-code-points`
pub fn is_disallowed_literal(ch: char) -> bool {
	// D800-DFFF are not allowed by rust char
	matches!(ch, '\u{0}'..='\u{8}' | '\u{E}'..='\u{1F}' | '\u{7F}' | '\u{200E}' | '\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}' | '\u{FEFF}')
}

/// `identifier-char`
pub fn is_identifier_char(ch: char) -> bool {
	!(is_disallowed_literal(ch)
		|| is_whitespace(ch)
		|| is_newline(ch)
		|| matches!(
			ch,
			'\\' | '/' | '(' | ')' | '{' | '}' | ';' | '[' | ']' | '"' | '#' | '='
		))
}

pub fn is_decimal_digit(ch: char) -> bool { ch.is_ascii_digit() }
pub fn is_hex_digit(ch: char) -> bool { ch.is_ascii_hexdigit() }
pub fn is_octal_digit(ch: char) -> bool { matches!(ch, '0'..='7') }
pub fn is_binary_digit(ch: char) -> bool { matches!(ch, '0' | '1') }

pub fn is_sign(ch: char) -> bool { matches!(ch, '+' | '-') }
