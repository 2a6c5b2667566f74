// SPDX-License-Identifier: MIT OR Apache-2.0
//! document tree structures, start at [`Document`]
//!
//! Every type here is a plain value: clone it, compare it, and build modified
//! copies with the `with_*` methods. Formatting details (how a string was
//! quoted, whether a node ended in `;`, slashdashed entries) are kept for the
//! writer but don't take part in equality.

use std::borrow::Cow;
use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::str::FromStr;

use crate::cow_static;
use crate::error::{Error, ParseError};
use crate::grammar::{parse_document, parse_value};
use crate::number::Number;
use crate::options::{ParseOptions, WriteOptions};
use crate::validate::ValidationError;
use crate::writer::{Writer, write};

fn maybe_debug<T: fmt::Debug>(value: Option<&T>) -> &dyn fmt::Debug {
  match value {
    Some(value) => value,
    None => &None::<Infallible>,
  }
}

/// A `document` or `nodes` element, a container of [`Node`]
///
/// Also used as the children block of a node.
#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct Document<'text> {
  nodes: Vec<Node<'text>>,
}

impl<'text> Document<'text> {
  /// Create a document with no children
  pub fn new() -> Self {
    Self::default()
  }
  /// Parse a whole document
  pub fn parse(text: &'text str) -> Result<Self, ParseError> {
    parse_document(text)
  }
  /// Parse a whole document, then run the configured validator over it
  pub fn parse_with(text: &'text str, options: &ParseOptions<'_>) -> Result<Self, Error> {
    let document = Self::parse(text)?;
    if let Some(validator) = options.validator() {
      let issues = validator.validate(&document);
      if !issues.is_empty() {
        return Err(ValidationError::new(issues).into());
      }
    }
    Ok(document)
  }
  /// Convert into an owned value
  pub fn into_owned(self) -> Document<'static> {
    Document {
      nodes: self.nodes.into_iter().map(Node::into_owned).collect(),
    }
  }
  /// The nodes in this document, in order
  pub fn nodes(&self) -> &[Node<'text>] {
    &self.nodes
  }
  /// A copy with one more node at the end
  pub fn with_node(mut self, node: Node<'text>) -> Self {
    self.nodes.push(node);
    self
  }
  /// Iterator over every node with a particular name
  pub fn get(&self, name: &str) -> impl Iterator<Item = &Node<'text>> {
    self.nodes.iter().filter(move |node| node.name() == name)
  }
  /// Arguments of the first node with a particular name
  pub fn get_args(&self, name: &str) -> Vec<&Value<'text>> {
    self.get(name).next().map(|node| node.arguments().collect()).unwrap_or_default()
  }
  /// Normalize every node, see [`Node::normalized`]
  pub fn normalized(self) -> Self {
    self.nodes.into_iter().map(Node::normalized).collect()
  }
  /// Write out with custom options
  pub fn to_string_with(&self, options: &WriteOptions) -> String {
    write(self, options)
  }
}

impl fmt::Debug for Document<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("Document ")?;
    f.debug_list().entries(&self.nodes).finish()
  }
}
impl fmt::Display for Document<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    Writer::new(f, &WriteOptions::default()).write_document(self).map(drop)
  }
}
impl<'text> FromIterator<Node<'text>> for Document<'text> {
  fn from_iter<T: IntoIterator<Item = Node<'text>>>(iter: T) -> Self {
    Self {
      nodes: iter.into_iter().collect(),
    }
  }
}
impl<'doc, 'text> IntoIterator for &'doc Document<'text> {
  type Item = &'doc Node<'text>;
  type IntoIter = std::slice::Iter<'doc, Node<'text>>;
  fn into_iter(self) -> Self::IntoIter {
    self.nodes.iter()
  }
}
impl FromStr for Document<'static> {
  type Err = ParseError;
  fn from_str(text: &str) -> Result<Self, Self::Err> {
    Document::parse(text).map(Document::into_owned)
  }
}

/// A `node` element
#[derive(Clone)]
pub struct Node<'text> {
  r#type: Option<StringValue<'text>>,
  name: StringValue<'text>,
  entries: Vec<Entry<'text>>,
  children: Option<Document<'text>>,
  terminated_by_semicolon: bool,
}

impl<'text> Node<'text> {
  /// Create a new node with a name
  pub fn new(name: impl Into<StringValue<'text>>) -> Self {
    Self {
      r#type: None,
      name: name.into(),
      entries: Vec::new(),
      children: None,
      terminated_by_semicolon: false,
    }
  }
  /// Convert into an owned value
  pub fn into_owned(self) -> Node<'static> {
    Node {
      r#type: self.r#type.map(StringValue::into_owned),
      name: self.name.into_owned(),
      entries: self.entries.into_iter().map(Entry::into_owned).collect(),
      children: self.children.map(Document::into_owned),
      terminated_by_semicolon: self.terminated_by_semicolon,
    }
  }
  /// Get the node's name
  pub fn name(&self) -> &str {
    self.name.as_str()
  }
  /// Get the node's name along with how it was written
  pub fn name_value(&self) -> &StringValue<'text> {
    &self.name
  }
  /// A copy with another name
  pub fn with_name(mut self, name: impl Into<StringValue<'text>>) -> Self {
    self.name = name.into();
    self
  }
  /// Get the node's type hint
  pub fn type_hint(&self) -> Option<&str> {
    self.r#type.as_ref().map(StringValue::as_str)
  }
  /// Get the type hint along with how it was written
  pub fn type_hint_value(&self) -> Option<&StringValue<'text>> {
    self.r#type.as_ref()
  }
  /// A copy with another type hint
  pub fn with_type_hint(mut self, r#type: Option<impl Into<StringValue<'text>>>) -> Self {
    self.r#type = r#type.map(Into::into);
    self
  }
  /// The live entries, in order (slashdashed ones are left out)
  pub fn entries(&self) -> impl DoubleEndedIterator<Item = &Entry<'text>> {
    self.entries.iter().filter(|entry| !entry.is_skipped())
  }
  /// Every entry, including slashdashed ones
  pub fn raw_entries(&self) -> &[Entry<'text>] {
    &self.entries
  }
  /// Source text of the slashdashed entries
  pub fn skipped_entries(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().filter_map(|entry| match entry {
      Entry::Skipped(text) => Some(&**text),
      _ => None,
    })
  }
  /// A copy with one more entry at the end
  pub fn with_entry(mut self, entry: impl Into<Entry<'text>>) -> Self {
    self.entries.push(entry.into());
    self
  }
  /// Positional values, in order
  pub fn arguments(&self) -> impl DoubleEndedIterator<Item = &Value<'text>> {
    self.entries.iter().filter_map(|entry| match entry {
      Entry::Argument(value) => Some(value),
      _ => None,
    })
  }
  /// Properties, in order, duplicates included
  pub fn properties(&self) -> impl DoubleEndedIterator<Item = &Property<'text>> {
    self.entries.iter().filter_map(|entry| match entry {
      Entry::Property(prop) => Some(prop),
      _ => None,
    })
  }
  /// Get an argument by position or a property by name
  pub fn get<'key>(&self, key: impl Into<EntryKey<'key>>) -> Option<&Value<'text>> {
    match key.into() {
      EntryKey::Pos(index) => self.arguments().nth(index),
      // right-most property overrides value
      EntryKey::Name(key) => self
        .properties()
        .rfind(|prop| prop.key() == key)
        .map(Property::value),
    }
  }
  /// Like [`Node::get`], but the whole entry
  pub fn entry<'key>(&self, key: impl Into<EntryKey<'key>>) -> Option<&Entry<'text>> {
    match key.into() {
      EntryKey::Pos(index) => self
        .entries()
        .filter(|entry| entry.key().is_none())
        .nth(index),
      EntryKey::Name(key) => self.entries().rfind(|entry| entry.key() == Some(key)),
    }
  }
  /// The node's child document
  pub fn children(&self) -> Option<&Document<'text>> {
    self.children.as_ref()
  }
  /// A copy with another (or no) child document
  pub fn with_children(mut self, children: impl Into<Option<Document<'text>>>) -> Self {
    self.children = children.into();
    self
  }
  /// Whether the node was ended by `;`
  pub fn terminated_by_semicolon(&self) -> bool {
    self.terminated_by_semicolon
  }
  pub fn with_terminated_by_semicolon(mut self, semicolon: bool) -> Self {
    self.terminated_by_semicolon = semicolon;
    self
  }
  /// Normalize node to kdl spec:
  /// - Empty children block gets removed
  /// - Normalize child nodes
  /// - Duplicate properties are removed, the last one stays
  /// - Slashdashed entries are dropped
  pub fn normalized(mut self) -> Self {
    self.children = self
      .children
      .filter(|children| !children.nodes.is_empty())
      .map(Document::normalized);
    let mut seen = HashSet::new();
    let mut entries = self
      .entries
      .into_iter()
      .rev()
      .filter(|entry| match entry {
        Entry::Property(prop) => seen.insert(prop.key().to_owned()),
        Entry::Argument(_) => true,
        Entry::Skipped(_) => false,
      })
      .collect::<Vec<_>>();
    entries.reverse();
    self.entries = entries;
    self
  }
}

impl PartialEq for Node<'_> {
  fn eq(&self, other: &Self) -> bool {
    // slashdashed entries are formatting too
    self.r#type == other.r#type
      && self.name == other.name
      && self.entries().eq(other.entries())
      && self.children == other.children
  }
}
impl Eq for Node<'_> {}
impl Hash for Node<'_> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.r#type.hash(state);
    self.name.hash(state);
    state.write_usize(self.entries().count());
    self.entries().for_each(|entry| entry.hash(state));
    self.children.hash(state);
  }
}
impl fmt::Debug for Node<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("Node")
      .field("type", maybe_debug(self.type_hint().as_ref()))
      .field("name", &self.name)
      .field("entries", &self.entries)
      .field("children", maybe_debug(self.children.as_ref()))
      .finish()
  }
}
impl fmt::Display for Node<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    Writer::new(f, &WriteOptions::default()).write_node(self).map(drop)
  }
}
impl<'key, 'text, T: Into<EntryKey<'key>>> Index<T> for Node<'text> {
  type Output = Value<'text>;
  fn index(&self, index: T) -> &Self::Output {
    let key = index.into();
    self
      .get(key)
      .unwrap_or_else(|| panic!("Key {key:?} does not exist in node"))
  }
}

/// A numeric or textual key to look up a [`Value`] in a [`Node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKey<'text> {
  /// The n-th argument
  Pos(usize),
  /// The last property with this name
  Name(&'text str),
}
impl From<usize> for EntryKey<'_> {
  fn from(value: usize) -> Self {
    Self::Pos(value)
  }
}
impl<'text> From<&'text str> for EntryKey<'text> {
  fn from(value: &'text str) -> Self {
    Self::Name(value)
  }
}

/// A `prop`, `value`, or slashdashed entry
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Entry<'text> {
  /// A positional value
  Argument(Value<'text>),
  /// A `key=value` pair
  Property(Property<'text>),
  /// Source text of an entry removed with `/-`
  Skipped(Cow<'text, str>),
}

impl<'text> Entry<'text> {
  /// Convert into an owned value
  pub fn into_owned(self) -> Entry<'static> {
    match self {
      Self::Argument(value) => Entry::Argument(value.into_owned()),
      Self::Property(prop) => Entry::Property(prop.into_owned()),
      Self::Skipped(text) => Entry::Skipped(cow_static(text)),
    }
  }
  /// Get the property's key, if it is one
  pub fn key(&self) -> Option<&str> {
    match self {
      Self::Property(prop) => Some(prop.key()),
      _ => None,
    }
  }
  /// The value, unless this entry was slashdashed
  pub fn value(&self) -> Option<&Value<'text>> {
    match self {
      Self::Argument(value) => Some(value),
      Self::Property(prop) => Some(prop.value()),
      Self::Skipped(_) => None,
    }
  }
  pub fn is_skipped(&self) -> bool {
    matches!(self, Self::Skipped(_))
  }
}

impl fmt::Debug for Entry<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Argument(value) => f.debug_tuple("Argument").field(value).finish(),
      Self::Property(prop) => fmt::Debug::fmt(prop, f),
      Self::Skipped(text) => f.debug_tuple("Skipped").field(text).finish(),
    }
  }
}
impl fmt::Display for Entry<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    Writer::new(f, &WriteOptions::default()).write_entry(self).map(drop)
  }
}
impl<'text, K: Into<StringValue<'text>>, V: Into<Value<'text>>> From<(K, V)> for Entry<'text> {
  fn from((key, value): (K, V)) -> Self {
    Self::Property(Property::new(key, value))
  }
}
impl<'text, V: Into<Value<'text>>> From<V> for Entry<'text> {
  fn from(value: V) -> Self {
    Self::Argument(value.into())
  }
}

/// A `key=value` entry
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Property<'text> {
  key: StringValue<'text>,
  value: Value<'text>,
}

impl<'text> Property<'text> {
  pub fn new(key: impl Into<StringValue<'text>>, value: impl Into<Value<'text>>) -> Self {
    Self {
      key: key.into(),
      value: value.into(),
    }
  }
  /// Convert into an owned value
  pub fn into_owned(self) -> Property<'static> {
    Property {
      key: self.key.into_owned(),
      value: self.value.into_owned(),
    }
  }
  pub fn key(&self) -> &str {
    self.key.as_str()
  }
  /// Get the key along with how it was written
  pub fn key_value(&self) -> &StringValue<'text> {
    &self.key
  }
  pub fn value(&self) -> &Value<'text> {
    &self.value
  }
}

impl fmt::Debug for Property<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("Property")
      .field("key", &self.key)
      .field("value", &self.value)
      .finish()
  }
}

/// How a string is spelled in kdl text
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKind {
  /// `ident`
  #[default]
  Bare,
  /// `"text"`
  Quoted,
  /// `#"text"#`
  Raw,
  /// `"""` on separate lines
  MultiLine,
  /// `#"""` on separate lines
  RawMultiLine,
}

impl StringKind {
  pub fn is_raw(self) -> bool {
    matches!(self, Self::Raw | Self::RawMultiLine)
  }
  pub fn is_multi_line(self) -> bool {
    matches!(self, Self::MultiLine | Self::RawMultiLine)
  }
}

/// Text, and how it was written
///
/// Only the text takes part in comparisons.
#[derive(Clone)]
pub struct StringValue<'text> {
  text: Cow<'text, str>,
  kind: StringKind,
}

impl<'text> StringValue<'text> {
  pub fn new(text: impl Into<Cow<'text, str>>, kind: StringKind) -> Self {
    Self {
      text: text.into(),
      kind,
    }
  }
  /// Convert into an owned value
  pub fn into_owned(self) -> StringValue<'static> {
    StringValue {
      text: cow_static(self.text),
      kind: self.kind,
    }
  }
  pub fn as_str(&self) -> &str {
    &self.text
  }
  pub fn into_text(self) -> Cow<'text, str> {
    self.text
  }
  pub fn kind(&self) -> StringKind {
    self.kind
  }
  /// A copy that will be written another way
  pub fn with_kind(mut self, kind: StringKind) -> Self {
    self.kind = kind;
    self
  }
}

impl PartialEq for StringValue<'_> {
  fn eq(&self, other: &Self) -> bool {
    self.text == other.text
  }
}
impl Eq for StringValue<'_> {}
impl Hash for StringValue<'_> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.text.hash(state);
  }
}
impl fmt::Debug for StringValue<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Debug::fmt(&*self.text, f)
  }
}
impl<'text> From<&'text str> for StringValue<'text> {
  fn from(value: &'text str) -> Self {
    Self::new(value, StringKind::Bare)
  }
}
impl From<String> for StringValue<'_> {
  fn from(value: String) -> Self {
    Self::new(value, StringKind::Bare)
  }
}
impl<'text> From<Cow<'text, str>> for StringValue<'text> {
  fn from(value: Cow<'text, str>) -> Self {
    Self::new(value, StringKind::Bare)
  }
}

/// The value of an [`Entry`]: a [`Scalar`] with an optional type annotation
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Value<'text> {
  r#type: Option<StringValue<'text>>,
  scalar: Scalar<'text>,
}

/// What a [`Value`] holds
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scalar<'text> {
  /// A textual value
  String(StringValue<'text>),
  /// A numeric value
  Number(Number),
  /// A boolean value
  Bool(bool),
  /// The `#null` value
  Null,
}

impl<'text> Value<'text> {
  pub fn new(scalar: Scalar<'text>) -> Self {
    Self { r#type: None, scalar }
  }
  /// Parse a single, optionally annotated, value such as `(u8)200`
  pub fn parse(text: &'text str) -> Result<Self, ParseError> {
    parse_value(text)
  }
  /// Convert into an owned value
  pub fn into_owned(self) -> Value<'static> {
    Value {
      r#type: self.r#type.map(StringValue::into_owned),
      scalar: match self.scalar {
        Scalar::String(value) => Scalar::String(value.into_owned()),
        Scalar::Number(value) => Scalar::Number(value),
        Scalar::Bool(value) => Scalar::Bool(value),
        Scalar::Null => Scalar::Null,
      },
    }
  }
  /// Get the value's type hint
  pub fn type_hint(&self) -> Option<&str> {
    self.r#type.as_ref().map(StringValue::as_str)
  }
  /// Get the type hint along with how it was written
  pub fn type_hint_value(&self) -> Option<&StringValue<'text>> {
    self.r#type.as_ref()
  }
  /// A copy with another type hint
  pub fn with_type_hint(mut self, r#type: Option<impl Into<StringValue<'text>>>) -> Self {
    self.r#type = r#type.map(Into::into);
    self
  }
  pub fn scalar(&self) -> &Scalar<'text> {
    &self.scalar
  }
  pub fn as_str(&self) -> Option<&str> {
    match &self.scalar {
      Scalar::String(value) => Some(value.as_str()),
      _ => None,
    }
  }
  pub fn as_string_value(&self) -> Option<&StringValue<'text>> {
    match &self.scalar {
      Scalar::String(value) => Some(value),
      _ => None,
    }
  }
  pub fn as_number(&self) -> Option<&Number> {
    match &self.scalar {
      Scalar::Number(value) => Some(value),
      _ => None,
    }
  }
  pub fn as_bool(&self) -> Option<bool> {
    match self.scalar {
      Scalar::Bool(value) => Some(value),
      _ => None,
    }
  }
  pub fn is_null(&self) -> bool {
    matches!(self.scalar, Scalar::Null)
  }
}

impl fmt::Debug for Value<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    if let Some(r#type) = &self.r#type {
      write!(f, "({type:?})")?;
    }
    match &self.scalar {
      Scalar::String(value) => fmt::Debug::fmt(value, f),
      Scalar::Number(value) => fmt::Debug::fmt(value, f),
      Scalar::Bool(true) => f.write_str("#true"),
      Scalar::Bool(false) => f.write_str("#false"),
      Scalar::Null => f.write_str("#null"),
    }
  }
}
impl fmt::Display for Value<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    Writer::new(f, &WriteOptions::default()).write_value(self).map(drop)
  }
}
impl FromStr for Value<'static> {
  type Err = ParseError;
  fn from_str(text: &str) -> Result<Self, Self::Err> {
    parse_value(text).map(Value::into_owned)
  }
}
impl<'text> From<Scalar<'text>> for Value<'text> {
  fn from(value: Scalar<'text>) -> Self {
    Self::new(value)
  }
}
impl<'text> From<StringValue<'text>> for Value<'text> {
  fn from(value: StringValue<'text>) -> Self {
    Self::new(Scalar::String(value))
  }
}
impl<'text> From<&'text str> for Value<'text> {
  fn from(value: &'text str) -> Self {
    Self::new(Scalar::String(value.into()))
  }
}
impl<'text> From<String> for Value<'text> {
  fn from(value: String) -> Self {
    Self::new(Scalar::String(value.into()))
  }
}
impl<'text, T: Into<Number>> From<T> for Value<'text> {
  fn from(value: T) -> Self {
    Self::new(Scalar::Number(value.into()))
  }
}
impl<'text> From<bool> for Value<'text> {
  fn from(value: bool) -> Self {
    Self::new(Scalar::Bool(value))
  }
}
impl<'text> From<()> for Value<'text> {
  fn from((): ()) -> Self {
    Self::new(Scalar::Null)
  }
}
impl<'text, T: Into<Value<'text>>> From<Option<T>> for Value<'text> {
  fn from(value: Option<T>) -> Self {
    match value {
      Some(v) => v.into(),
      _ => Self::new(Scalar::Null),
    }
  }
}
