//! Node tree for declarative form composition.
//!
//! A form's children are described as an immutable tree of [`Node`]s. Every
//! node is one of three explicit variants, and the engine never inspects a
//! node's shape to guess what it is:
//!
//! ```text
//! Node
//! ├── Field(FieldNode)      a named form control, receives callback bindings
//! ├── Wrapper(WrapperNode)  a grouping element with an explicit child list
//! └── Opaque(OpaqueNode)    text, single-child elements, unknown values
//! ```
//!
//! Variants hold their payload behind an `Arc`, so cloning a `Node` never
//! copies a subtree. Field and wrapper props sit behind their own `Arc` as
//! well. The tree walker relies on both to reuse untouched content by
//! reference when it builds the augmented tree: only bindings, keys and
//! child lists are new.
//!
//! ## Example
//!
//! ```ignore
//! use formweave_pages::node::{FieldNode, Node, WrapperNode};
//!
//! let tree: Vec<Node> = vec![
//!     WrapperNode::new("fieldset")
//!         .child(Node::text("Contact"))
//!         .child(FieldNode::new("email").prop("type", "email"))
//!         .into(),
//!     FieldNode::new("message").into(),
//! ];
//! ```

mod descriptor;

pub use descriptor::{FIELD_MARKER, is_field_marker};

use crate::form::FieldBinding;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// An arbitrary property set attached to a node.
pub type Props = serde_json::Map<String, Value>;

/// Positional identity of a node among its siblings.
///
/// Keys exist only so a host renderer can match nodes across passes; they are
/// not business identifiers and are unique only within one sibling list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(usize);

impl Key {
	/// Creates a key from a sibling index.
	pub fn new(index: usize) -> Self {
		Self(index)
	}

	/// Returns the sibling index this key was created from.
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A node of the form's child tree.
#[derive(Debug, Clone)]
pub enum Node {
	/// A form field.
	Field(Arc<FieldNode>),
	/// A structural grouping node with an explicit child list.
	Wrapper(Arc<WrapperNode>),
	/// Content the engine passes through untouched.
	Opaque(Arc<OpaqueNode>),
}

impl Node {
	/// Creates a text node.
	pub fn text(content: impl Into<String>) -> Self {
		OpaqueNode::Text(content.into()).into()
	}

	/// Creates an opaque element whose content is not a child list.
	pub fn element(tag: impl Into<String>, props: Props) -> Self {
		OpaqueNode::Element {
			tag: tag.into(),
			props,
		}
		.into()
	}

	/// Wraps an arbitrary value the engine does not interpret.
	pub fn raw(value: Value) -> Self {
		OpaqueNode::Raw(value).into()
	}

	/// Returns the key assigned by the last walk, if any.
	pub fn key(&self) -> Option<Key> {
		match self {
			Node::Field(field) => field.key,
			Node::Wrapper(wrapper) => wrapper.key,
			Node::Opaque(_) => None,
		}
	}

	/// Returns the field payload if this is a field node.
	pub fn as_field(&self) -> Option<&FieldNode> {
		match self {
			Node::Field(field) => Some(&**field),
			_ => None,
		}
	}

	/// Returns the wrapper payload if this is a wrapper node.
	pub fn as_wrapper(&self) -> Option<&WrapperNode> {
		match self {
			Node::Wrapper(wrapper) => Some(&**wrapper),
			_ => None,
		}
	}

	/// Returns the opaque payload if this is an opaque node.
	pub fn as_opaque(&self) -> Option<&OpaqueNode> {
		match self {
			Node::Opaque(opaque) => Some(&**opaque),
			_ => None,
		}
	}

	/// Returns `true` when both nodes share the same allocation.
	pub fn ptr_eq(&self, other: &Node) -> bool {
		match (self, other) {
			(Node::Field(a), Node::Field(b)) => Arc::ptr_eq(a, b),
			(Node::Wrapper(a), Node::Wrapper(b)) => Arc::ptr_eq(a, b),
			(Node::Opaque(a), Node::Opaque(b)) => Arc::ptr_eq(a, b),
			_ => false,
		}
	}
}

/// A named form field.
///
/// Field names must be unique within one form. After a walk the clone carries
/// a [`FieldBinding`], the field's only channel back into the form.
#[derive(Debug, Clone)]
pub struct FieldNode {
	name: String,
	props: Arc<Props>,
	key: Option<Key>,
	binding: Option<FieldBinding>,
}

impl FieldNode {
	/// Creates an unbound field.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			props: Arc::default(),
			key: None,
			binding: None,
		}
	}

	/// Adds a property.
	pub fn prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		Arc::make_mut(&mut self.props).insert(name.into(), value.into());
		self
	}

	/// Adds every property of `props`, overwriting existing entries.
	pub fn with_props(mut self, props: Props) -> Self {
		Arc::make_mut(&mut self.props).extend(props);
		self
	}

	/// Returns the field name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the field's own properties.
	pub fn props(&self) -> &Props {
		&self.props
	}

	/// Returns the key assigned by the walk.
	pub fn key(&self) -> Option<Key> {
		self.key
	}

	/// Returns the injected binding.
	pub fn binding(&self) -> Option<&FieldBinding> {
		self.binding.as_ref()
	}

	/// Returns `true` once the walk has injected a binding.
	pub fn is_bound(&self) -> bool {
		self.binding.is_some()
	}

	pub(crate) fn shared_props(&self) -> Arc<Props> {
		Arc::clone(&self.props)
	}

	pub(crate) fn bound(&self, binding: FieldBinding, key: Key) -> Self {
		Self {
			name: self.name.clone(),
			props: Arc::clone(&self.props),
			key: Some(key),
			binding: Some(binding),
		}
	}
}

/// A grouping node whose children are an explicit list.
#[derive(Debug, Clone)]
pub struct WrapperNode {
	tag: String,
	props: Arc<Props>,
	children: Vec<Node>,
	key: Option<Key>,
}

impl WrapperNode {
	/// Creates an empty wrapper.
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			props: Arc::default(),
			children: Vec::new(),
			key: None,
		}
	}

	/// Adds a property.
	pub fn prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		Arc::make_mut(&mut self.props).insert(name.into(), value.into());
		self
	}

	/// Adds every property of `props`, overwriting existing entries.
	pub fn with_props(mut self, props: Props) -> Self {
		Arc::make_mut(&mut self.props).extend(props);
		self
	}

	/// Appends a child.
	pub fn child(mut self, child: impl Into<Node>) -> Self {
		self.children.push(child.into());
		self
	}

	/// Appends several children.
	pub fn children(mut self, children: impl IntoIterator<Item = impl Into<Node>>) -> Self {
		self.children.extend(children.into_iter().map(Into::into));
		self
	}

	/// Returns the tag name.
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Returns the wrapper's own properties.
	pub fn props(&self) -> &Props {
		&self.props
	}

	/// Returns the child list.
	pub fn child_nodes(&self) -> &[Node] {
		&self.children
	}

	/// Returns the key assigned by the walk.
	pub fn key(&self) -> Option<Key> {
		self.key
	}

	pub(crate) fn rebuilt(&self, children: Vec<Node>, key: Option<Key>) -> Self {
		Self {
			tag: self.tag.clone(),
			props: Arc::clone(&self.props),
			children,
			key,
		}
	}
}

/// Content the engine never interprets or recurses into.
#[derive(Debug, Clone, PartialEq)]
pub enum OpaqueNode {
	/// A text node.
	Text(String),
	/// An element whose content is a single value rather than a child list.
	Element {
		/// The tag name.
		tag: String,
		/// Properties, including any single `children` value.
		props: Props,
	},
	/// A value of unrecognized shape.
	Raw(Value),
}

impl From<FieldNode> for Node {
	fn from(field: FieldNode) -> Self {
		Node::Field(Arc::new(field))
	}
}

impl From<WrapperNode> for Node {
	fn from(wrapper: WrapperNode) -> Self {
		Node::Wrapper(Arc::new(wrapper))
	}
}

impl From<OpaqueNode> for Node {
	fn from(opaque: OpaqueNode) -> Self {
		Node::Opaque(Arc::new(opaque))
	}
}

impl From<&str> for Node {
	fn from(text: &str) -> Self {
		Node::text(text)
	}
}

impl From<String> for Node {
	fn from(text: String) -> Self {
		Node::text(text)
	}
}

/// Collects every field node of `nodes`, depth-first in document order.
pub fn collect_fields(nodes: &[Node]) -> Vec<&FieldNode> {
	let mut fields = Vec::new();
	collect_fields_into(nodes, &mut fields);
	fields
}

fn collect_fields_into<'a>(nodes: &'a [Node], fields: &mut Vec<&'a FieldNode>) {
	for node in nodes {
		match node {
			Node::Field(field) => fields.push(&**field),
			Node::Wrapper(wrapper) => collect_fields_into(&wrapper.children, fields),
			Node::Opaque(_) => {}
		}
	}
}

/// Finds the first field named `name`.
pub fn find_field<'a>(nodes: &'a [Node], name: &str) -> Option<&'a FieldNode> {
	collect_fields(nodes)
		.into_iter()
		.find(|field| field.name() == name)
}
