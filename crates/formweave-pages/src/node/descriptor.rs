//! Conversion between [`Node`] trees and loosely-typed host descriptors.
//!
//! Hosts that describe their UI as data hand the engine values shaped like
//!
//! ```text
//! { "type": "<tag>", "props": { "name": ..., "children": [...], ... } }
//! ```
//!
//! Classification never fails: a value that is not a recognizable element
//! becomes [`OpaqueNode::Raw`] and is passed through unchanged.

use super::{FieldNode, Key, Node, OpaqueNode, Props, WrapperNode};
use serde_json::Value;

/// Type tag identifying a field node.
pub const FIELD_MARKER: &str = "Input";

const TYPE_KEY: &str = "type";
const PROPS_KEY: &str = "props";
const KEY_KEY: &str = "key";
const NAME_PROP: &str = "name";
const CHILDREN_PROP: &str = "children";

/// Returns `true` when `type_tag` is the field marker.
pub fn is_field_marker(type_tag: &str) -> bool {
	type_tag == FIELD_MARKER
}

impl Node {
	/// Classifies a host descriptor into a node.
	///
	/// - a string becomes a text node
	/// - `type == FIELD_MARKER` with a string `props.name` becomes a field;
	///   without one it becomes an opaque element, never a wrapper, so its
	///   children are not walked
	/// - any other tagged element whose `props.children` is an array becomes
	///   a wrapper, with its children classified recursively
	/// - a tagged element with a single non-array child becomes an opaque element
	/// - everything else, including untagged objects, is kept as a raw value
	pub fn from_descriptor(value: &Value) -> Node {
		let object = match value {
			Value::String(text) => return Node::text(text.clone()),
			Value::Object(object) => object,
			_ => return Node::raw(value.clone()),
		};

		let Some(type_tag) = object.get(TYPE_KEY).and_then(Value::as_str) else {
			return Node::raw(value.clone());
		};
		let mut props = object
			.get(PROPS_KEY)
			.and_then(Value::as_object)
			.cloned()
			.unwrap_or_default();

		if is_field_marker(type_tag) {
			let Some(name) = props.get(NAME_PROP).and_then(Value::as_str).map(str::to_string)
			else {
				return Node::element(type_tag, props);
			};
			props.remove(NAME_PROP);
			return FieldNode::new(name).with_props(props).into();
		}

		if let Some(Value::Array(children)) = props.get(CHILDREN_PROP) {
			let children: Vec<Node> = children.iter().map(Node::from_descriptor).collect();
			props.remove(CHILDREN_PROP);
			return WrapperNode::new(type_tag)
				.with_props(props)
				.children(children)
				.into();
		}

		Node::element(type_tag, props)
	}

	/// Classifies a descriptor list. A non-array value yields a single node.
	pub fn from_descriptors(value: &Value) -> Vec<Node> {
		match value {
			Value::Array(items) => items.iter().map(Node::from_descriptor).collect(),
			other => vec![Node::from_descriptor(other)],
		}
	}

	/// Converts the node back to the host descriptor shape.
	///
	/// Assigned keys are emitted under `"key"`. Bindings are not
	/// representable as data and are omitted.
	pub fn to_descriptor(&self) -> Value {
		match self {
			Node::Field(field) => {
				let mut props = field.props().clone();
				props.insert(NAME_PROP.to_string(), Value::from(field.name()));
				element_descriptor(FIELD_MARKER, props, field.key())
			}
			Node::Wrapper(wrapper) => {
				let mut props = wrapper.props().clone();
				let children = wrapper
					.child_nodes()
					.iter()
					.map(Node::to_descriptor)
					.collect();
				props.insert(CHILDREN_PROP.to_string(), Value::Array(children));
				element_descriptor(wrapper.tag(), props, wrapper.key())
			}
			Node::Opaque(opaque) => match opaque.as_ref() {
				OpaqueNode::Text(text) => Value::String(text.clone()),
				OpaqueNode::Element { tag, props } => element_descriptor(tag, props.clone(), None),
				OpaqueNode::Raw(value) => value.clone(),
			},
		}
	}
}

fn element_descriptor(type_tag: &str, props: Props, key: Option<Key>) -> Value {
	let mut object = Props::new();
	object.insert(TYPE_KEY.to_string(), Value::from(type_tag));
	object.insert(PROPS_KEY.to_string(), Value::Object(props));
	if let Some(key) = key {
		object.insert(KEY_KEY.to_string(), Value::from(key.index()));
	}
	Value::Object(object)
}
