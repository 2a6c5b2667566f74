// SPDX-License-Identifier: MIT OR Apache-2.0
//! Type annotations, entries, nodes and documents

use std::borrow::Cow;

use super::{Grammar, PResult, Pos, Trial};
use crate::chars::is_identifier_char;
use crate::dom::{Document, Entry, Node, Property, Scalar, StringValue, Value};
use crate::error::ErrorKind;

/// Children blocks nested deeper than this are refused rather than risking
/// the stack
pub(crate) const MAX_DEPTH: usize = 128;

impl<'text> Grammar<'text> {
	/// `type` = `( node-space* string node-space* )`
	pub(super) fn type_annotation(&self, at: Pos) -> Trial<StringValue<'text>> {
		if self.top_char(at) != Some('(') {
			return Ok(None);
		}
		let inner = self.node_spaces(at.offset_char('('))?;
		let Some((after, name)) = self.string(inner)? else {
			return Self::fail(
				if self.top_char(inner) == Some(')') {
					ErrorKind::EmptyTypeAnnotation
				} else {
					ErrorKind::ExpectedString
				},
				inner,
			);
		};
		let after = self.node_spaces(after)?;
		if self.top_char(after) != Some(')') {
			return Self::fail(ErrorKind::ExpectedCloseParen, after);
		}
		Ok(Some((after.offset_char(')'), name)))
	}
	/// `keyword | number | string`
	fn scalar(&self, at: Pos) -> Trial<Scalar<'text>> {
		if let Some(keyword) = self.keyword(at) {
			return Ok(Some(keyword));
		}
		if let Some((next, number)) = self.number(at)? {
			return Ok(Some((next, Scalar::Number(number))));
		}
		if let Some((next, string)) = self.string(at)? {
			return Ok(Some((next, Scalar::String(string))));
		}
		// nothing fits, but some things are obviously an attempt at one
		match self.top_char(at) {
			Some('#') if self.top_char(at.offset_char('#')).is_some_and(is_identifier_char) => {
				Self::fail(ErrorKind::BadKeyword, at)
			}
			// leftovers like `-.5`
			Some(ch) if is_identifier_char(ch) => Self::fail(ErrorKind::InvalidNumber, at),
			_ => Ok(None),
		}
	}
	/// `value` = `type? node-space* (keyword | number | string)`
	pub(super) fn value(&self, at: Pos) -> Trial<Value<'text>> {
		let Some((next, r#type)) = self.type_annotation(at)? else {
			return Ok(self.scalar(at)?.map(|(next, scalar)| (next, Value::new(scalar))));
		};
		let next = self.node_spaces(next)?;
		match self.scalar(next)? {
			Some((end, scalar)) => Ok(Some((end, Value::new(scalar).with_type_hint(Some(r#type))))),
			None => Self::fail(ErrorKind::ExpectedValue, next),
		}
	}
	/// `prop | value`
	fn prop_or_arg(&self, at: Pos) -> Trial<Entry<'text>> {
		if let Some((next, key)) = self.string(at)? {
			let equals = self.node_spaces(next)?;
			if self.top_char(equals) == Some('=') {
				let at = self.node_spaces(equals.offset_char('='))?;
				return match self.value(at)? {
					Some((end, value)) => Ok(Some((end, Entry::Property(Property::new(key, value))))),
					None => Self::fail(ErrorKind::ExpectedValue, at),
				};
			}
		}
		Ok(self.value(at)?.map(|(next, value)| (next, Entry::Argument(value))))
	}
	/// `node-terminator`, `}` counts (unconsumed) for the last node of a block
	fn node_terminator(&self, at: Pos, depth: usize) -> PResult<(Pos, bool)> {
		match self.top_char(at) {
			Some(';') => Ok((at.offset_char(';'), true)),
			None => Ok((at, false)),
			Some('}') if depth > 0 => Ok((at, false)),
			Some(_) => {
				if let Some(next) = self.single_line_comment(at)? {
					Ok((next, false))
				} else if let Some(next) = self.newline(at) {
					Ok((next, false))
				} else {
					Self::fail(ErrorKind::ExpectedNodeTerminator, at)
				}
			}
		}
	}
	/// `{ nodes }`, starting at the `{`; `depth` counts the blocks around it
	fn children_block(&self, open: Pos, depth: usize) -> PResult<(Pos, Document<'text>)> {
		if depth >= MAX_DEPTH {
			return Self::fail(ErrorKind::TooDeep, open);
		}
		let (at, nodes) = self.nodes(open.offset_char('{'), depth + 1)?;
		if self.top_char(at) == Some('}') {
			Ok((at.offset_char('}'), nodes.into_iter().collect()))
		} else {
			Self::fail(ErrorKind::ExpectedCloseBrace, at)
		}
	}
	/// `node`, the inner `None` is a slashdashed node
	fn node(&self, start: Pos, depth: usize) -> Trial<Option<Node<'text>>> {
		let elided = self.slashdash(start)?;
		let at = elided.unwrap_or(start);
		let (at, r#type) = match self.type_annotation(at)? {
			Some((next, r#type)) => (next, Some(r#type)),
			None => (at, None),
		};
		let name_at = self.node_spaces(at)?;
		let Some((mut at, name)) = self.string(name_at)? else {
			if elided.is_some() || r#type.is_some() {
				return Self::fail(ErrorKind::ExpectedString, name_at);
			}
			return Ok(None);
		};
		let mut node = Node::new(name).with_type_hint(r#type);
		let mut children = None;
		let mut had_children = false;
		loop {
			let spaced = self.node_spaces(at)?;
			if spaced == at {
				if self.top_char(at) == Some('{') || self.tail(at).starts_with("/-") {
					return Self::fail(ErrorKind::ChildrenWithoutSpace, at);
				}
				break;
			}
			let slashdash = self.slashdash(spaced)?;
			let item = slashdash.unwrap_or(spaced);
			if self.top_char(item) == Some('{') {
				let (next, block) = self.children_block(item, depth)?;
				if slashdash.is_none() {
					if children.is_some() {
						return Self::fail(ErrorKind::MultipleChildren, item);
					}
					children = Some(block);
				}
				had_children = true;
				at = next;
				continue;
			}
			if had_children {
				// nothing but more (slashdashed) blocks after the children
				if slashdash.is_some() {
					return Self::fail(ErrorKind::ExpectedNodeTerminator, spaced);
				}
				break;
			}
			match self.prop_or_arg(item)? {
				Some((next, entry)) => {
					node = node.with_entry(match slashdash {
						Some(_) => Entry::Skipped(Cow::Borrowed(self.slice(item, next))),
						None => entry,
					});
					at = next;
				}
				None if slashdash.is_some() => return Self::fail(ErrorKind::ExpectedValue, item),
				None => break,
			}
		}
		let at = self.node_spaces(at)?;
		let (end, semicolon) = self.node_terminator(at, depth)?;
		let node = node.with_children(children).with_terminated_by_semicolon(semicolon);
		Ok(Some((end, elided.is_none().then_some(node))))
	}
	/// `nodes`, slashdashed nodes are left out
	fn nodes(&self, mut at: Pos, depth: usize) -> PResult<(Pos, Vec<Node<'text>>)> {
		let mut nodes = Vec::new();
		loop {
			at = self.line_spaces(at)?;
			match self.node(at, depth)? {
				Some((next, node)) => {
					nodes.extend(node);
					at = next;
				}
				None => return Ok((at, nodes)),
			}
		}
	}
	/// `document` = `bom? nodes`
	pub(super) fn document(&self) -> PResult<Document<'text>> {
		let at = self.bom(Pos(0)).unwrap_or(Pos(0));
		let (at, nodes) = self.nodes(at, 0)?;
		if self.top_char(at).is_some() {
			return Self::fail(ErrorKind::UnconsumedContent, at);
		}
		Ok(nodes.into_iter().collect())
	}
}
