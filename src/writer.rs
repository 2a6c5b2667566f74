// SPDX-License-Identifier: MIT OR Apache-2.0
//! Turning documents back into text
//!
//! Every node is written on its own line, entries separated by single spaces,
//! children one indent deeper than their parent. By default strings take the
//! simplest form that reads back the same. In round-trip mode they keep the
//! kind they were parsed with wherever that kind can still hold the text.

use std::fmt;

use crate::chars::{is_disallowed_literal, is_newline, is_whitespace};
use crate::dom::{Document, Entry, Node, Scalar, StringKind, StringValue, Value};
use crate::grammar::is_bare_identifier;
use crate::options::WriteOptions;

/// Write a whole document out with the given options
pub fn write(document: &Document<'_>, options: &WriteOptions) -> String {
	// writing into a String can't fail
	Writer::new(String::new(), options)
		.write_document(document)
		.unwrap_or_default()
}

/// Single-use document writer over any [`fmt::Write`]
pub struct Writer<'o, W> {
	out: W,
	options: &'o WriteOptions,
	depth: usize,
}

impl<'o, W: fmt::Write> Writer<'o, W> {
	pub fn new(out: W, options: &'o WriteOptions) -> Self {
		Self {
			out,
			options,
			depth: 0,
		}
	}
	/// Write every node, each followed by a newline
	pub fn write_document(mut self, document: &Document<'_>) -> Result<W, fmt::Error> {
		self.nodes(document)?;
		Ok(self.out)
	}
	/// Write one node with its children, without a trailing newline
	pub fn write_node(mut self, node: &Node<'_>) -> Result<W, fmt::Error> {
		self.node(node)?;
		Ok(self.out)
	}
	/// Write one entry's value, with its type annotation
	pub fn write_value(mut self, value: &Value<'_>) -> Result<W, fmt::Error> {
		self.value(value)?;
		Ok(self.out)
	}
	/// Write a property or argument, or a slashdashed entry as `/-` and its
	/// source text
	pub fn write_entry(mut self, entry: &Entry<'_>) -> Result<W, fmt::Error> {
		self.entry(entry)?;
		Ok(self.out)
	}

	fn indent(&mut self, depth: usize) -> fmt::Result {
		for _ in 0..depth {
			self.out.write_str(self.options.indent())?;
		}
		Ok(())
	}
	fn nodes(&mut self, document: &Document<'_>) -> fmt::Result {
		for node in document {
			self.indent(self.depth)?;
			self.node(node)?;
			self.out.write_str("\n")?;
		}
		Ok(())
	}
	fn node(&mut self, node: &Node<'_>) -> fmt::Result {
		if let Some(r#type) = node.type_hint_value() {
			self.annotation(r#type)?;
		}
		self.string(node.name_value())?;
		for entry in node.raw_entries() {
			if entry.is_skipped() && !self.options.writes_skipped() {
				continue;
			}
			self.out.write_str(" ")?;
			self.entry(entry)?;
		}
		match node.children() {
			Some(children) if children.nodes().is_empty() => self.out.write_str(" {}")?,
			Some(children) => {
				self.out.write_str(" {\n")?;
				self.depth += 1;
				self.nodes(children)?;
				self.depth -= 1;
				self.indent(self.depth)?;
				self.out.write_str("}")?;
			}
			None => {}
		}
		if self.options.is_round_trip() && node.terminated_by_semicolon() {
			self.out.write_str(";")?;
		}
		Ok(())
	}
	fn entry(&mut self, entry: &Entry<'_>) -> fmt::Result {
		match entry {
			Entry::Argument(value) => self.value(value),
			Entry::Property(prop) => {
				self.string(prop.key_value())?;
				self.out.write_str("=")?;
				self.value(prop.value())
			}
			Entry::Skipped(text) => write!(self.out, "/- {text}"),
		}
	}
	fn annotation(&mut self, r#type: &StringValue<'_>) -> fmt::Result {
		self.out.write_str("(")?;
		self.string(r#type)?;
		self.out.write_str(")")
	}
	fn value(&mut self, value: &Value<'_>) -> fmt::Result {
		if let Some(r#type) = value.type_hint_value() {
			self.annotation(r#type)?;
		}
		match value.scalar() {
			Scalar::String(string) => self.string(string),
			Scalar::Number(number) => self.out.write_str(&number.to_canonical_string()),
			Scalar::Bool(true) => self.out.write_str("#true"),
			Scalar::Bool(false) => self.out.write_str("#false"),
			Scalar::Null => self.out.write_str("#null"),
		}
	}
	fn string(&mut self, value: &StringValue<'_>) -> fmt::Result {
		if !self.options.is_round_trip() {
			return self.plain_string(value.as_str());
		}
		let text = value.as_str();
		match value.kind() {
			StringKind::Bare if is_bare_identifier(text) => self.out.write_str(text),
			StringKind::Raw => match raw_hashes(text) {
				Some(hashes) => self.raw(text, hashes),
				None => self.quoted(text),
			},
			StringKind::MultiLine => self.multi_line(text),
			StringKind::RawMultiLine => match raw_multi_line_hashes(text) {
				Some(hashes) => self.raw_multi_line(text, hashes),
				None => self.multi_line(text),
			},
			StringKind::Bare | StringKind::Quoted => self.quoted(text),
		}
	}
	/// Canonical choice: bare, then raw if preferred and it helps, then quoted
	fn plain_string(&mut self, text: &str) -> fmt::Result {
		if is_bare_identifier(text) {
			return self.out.write_str(text);
		}
		if self.options.prefers_raw() && text.contains(['"', '\\']) {
			if let Some(hashes) = raw_hashes(text) {
				return self.raw(text, hashes);
			}
		}
		self.quoted(text)
	}
	fn quoted(&mut self, text: &str) -> fmt::Result {
		self.out.write_str("\"")?;
		for ch in text.chars() {
			match ch {
				'"' => self.out.write_str("\\\"")?,
				_ => self.escaped_char(ch)?,
			}
		}
		self.out.write_str("\"")
	}
	/// one character of a quoted body, `"` excluded
	fn escaped_char(&mut self, ch: char) -> fmt::Result {
		match ch {
			'\\' => self.out.write_str("\\\\"),
			'\n' => self.out.write_str("\\n"),
			'\r' => self.out.write_str("\\r"),
			'\t' => self.out.write_str("\\t"),
			'\u{8}' => self.out.write_str("\\b"),
			'\u{C}' => self.out.write_str("\\f"),
			ch if is_newline(ch) || is_disallowed_literal(ch) => write!(self.out, "\\u{{{:x}}}", ch as u32),
			ch => self.out.write_char(ch),
		}
	}
	fn raw(&mut self, text: &str, hashes: usize) -> fmt::Result {
		let fence = "#".repeat(hashes);
		write!(self.out, "{fence}\"{text}\"{fence}")
	}
	fn multi_line(&mut self, text: &str) -> fmt::Result {
		let depth = self.depth + 1;
		self.out.write_str("\"\"\"\n")?;
		// an empty body has no lines at all, only the closing indent
		for line in text.split('\n').filter(|_| !text.is_empty()) {
			if !line.is_empty() {
				self.indent(depth)?;
			}
			let mut quotes = 0;
			for (index, ch) in line.char_indices() {
				match ch {
					// two quotes are fine, a third would close the string
					'"' if quotes == 2 => {
						self.out.write_str("\\\"")?;
						quotes = 0;
					}
					'"' => {
						self.out.write_char('"')?;
						quotes += 1;
					}
					// a whitespace-only line would be read back empty
					ch if index == 0 && line.chars().all(is_whitespace) => {
						quotes = 0;
						match ch {
							' ' => self.out.write_str("\\s")?,
							'\t' => self.out.write_str("\\t")?,
							ch => write!(self.out, "\\u{{{:x}}}", ch as u32)?,
						}
					}
					'\t' => {
						quotes = 0;
						self.out.write_char('\t')?;
					}
					ch => {
						quotes = 0;
						self.escaped_char(ch)?;
					}
				}
			}
			self.out.write_str("\n")?;
		}
		self.indent(depth)?;
		self.out.write_str("\"\"\"")
	}
	fn raw_multi_line(&mut self, text: &str, hashes: usize) -> fmt::Result {
		let fence = "#".repeat(hashes);
		let depth = self.depth + 1;
		write!(self.out, "{fence}\"\"\"\n")?;
		for line in text.split('\n').filter(|_| !text.is_empty()) {
			if !line.is_empty() {
				self.indent(depth)?;
			}
			self.out.write_str(line)?;
			self.out.write_str("\n")?;
		}
		self.indent(depth)?;
		write!(self.out, "\"\"\"{fence}")
	}
}

/// Hash count for a raw string, one more than the longest run of `#` right
/// after a `"` in the text; `None` if the text can't be written raw
fn raw_hashes(text: &str) -> Option<usize> {
	// `#"""` would open a multi-line string instead
	let opens_multi_line = text.starts_with("\"\"") || text == "\"";
	if opens_multi_line || text.contains(|ch: char| is_newline(ch) || is_disallowed_literal(ch)) {
		return None;
	}
	Some(longest_fence(text) + 1)
}

/// Like [`raw_hashes`], for multi-line raw strings: only `\n` line breaks, and
/// no whitespace-only lines since those read back empty
fn raw_multi_line_hashes(text: &str) -> Option<usize> {
	let representable = !text.contains(|ch: char| (is_newline(ch) && ch != '\n') || is_disallowed_literal(ch))
		&& text.split('\n').all(|line| line.is_empty() || !line.chars().all(is_whitespace));
	representable.then(|| longest_fence(text) + 1)
}

/// longest run of `#` following a `"`, the only place a fence could close
fn longest_fence(text: &str) -> usize {
	text
		.split('"')
		.skip(1)
		.map(|rest| rest.bytes().take_while(|&byte| byte == b'#').count())
		.max()
		.unwrap_or(0)
}
