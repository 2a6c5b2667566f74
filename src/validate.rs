// SPDX-License-Identifier: MIT OR Apache-2.0
//! Post-parse document checks
//!
//! The parser only checks syntax. Anything semantic, like whether `(u8)300`
//! fits its annotation, is up to a [`Validator`] handed in through
//! [`ParseOptions`](crate::options::ParseOptions). Validators report every
//! problem in one pass rather than stopping at the first.

use std::fmt;

use thiserror::Error;

use crate::dom::{Document, Node, Value};

/// A semantic check run over a parsed document
pub trait Validator {
	/// Every problem found, empty if the document is fine
	fn validate(&self, document: &Document<'_>) -> Vec<ValidationIssue>;
}

impl<F: Fn(&Document<'_>) -> Vec<ValidationIssue>> Validator for F {
	fn validate(&self, document: &Document<'_>) -> Vec<ValidationIssue> { self(document) }
}

/// One problem, located by the names of the nodes leading to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
	path: Vec<String>,
	message: String,
}

impl ValidationIssue {
	pub fn new(path: impl IntoIterator<Item = impl Into<String>>, message: impl Into<String>) -> Self {
		Self {
			path: path.into_iter().map(Into::into).collect(),
			message: message.into(),
		}
	}
	/// Node names from the document root down to the offending node
	pub fn path(&self) -> &[String] { &self.path }
	pub fn message(&self) -> &str { &self.message }
}

impl fmt::Display for ValidationIssue {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if !self.path.is_empty() {
			write!(f, "{}: ", self.path.join("/"))?;
		}
		f.write_str(&self.message)
	}
}

/// Everything a [`Validator`] objected to
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Document failed validation with {} issue(s)", .issues.len())]
pub struct ValidationError {
	issues: Vec<ValidationIssue>,
}

impl ValidationError {
	pub(crate) fn new(issues: Vec<ValidationIssue>) -> Self { Self { issues } }
	pub fn issues(&self) -> &[ValidationIssue] { &self.issues }
}

/// Visit every value in the document (node type hints excluded), depth first,
/// along with the path of node names leading to it
pub fn walk_values<'doc, 'text>(
	document: &'doc Document<'text>,
	visit: &mut impl FnMut(&[&'doc str], &'doc Value<'text>),
) {
	fn walk_node<'doc, 'text>(
		node: &'doc Node<'text>,
		path: &mut Vec<&'doc str>,
		visit: &mut impl FnMut(&[&'doc str], &'doc Value<'text>),
	) {
		path.push(node.name());
		for value in node.entries().filter_map(|entry| entry.value()) {
			visit(path, value);
		}
		for child in node.children().into_iter().flatten() {
			walk_node(child, path, visit);
		}
		path.pop();
	}
	let mut path = Vec::new();
	for node in document {
		walk_node(node, &mut path, visit);
	}
}
