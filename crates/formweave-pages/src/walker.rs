//! Tree walker: finds field nodes at any depth and injects their bindings.
//!
//! ## Algorithm
//!
//! For each node of a sibling list, at position `i`:
//!
//! ```text
//! Field    ──► clone with binding, key = i
//! Wrapper  ──► walk children, clone with walked children, key = i
//! Opaque   ──► same Arc, no key
//! ```
//!
//! The input tree is never mutated. Opaque content is reused by reference,
//! so the output shares every subtree the walk had no reason to touch.
//! Keys depend only on sibling positions, so walking an unchanged tree twice
//! yields identical keys.

use crate::debug_log;
use crate::form::FieldBinding;
use crate::node::{Key, Node};
use std::sync::Arc;

/// Produces augmented trees for one render pass.
#[derive(Debug, Clone)]
pub struct TreeWalker {
	binding: FieldBinding,
}

impl TreeWalker {
	/// Creates a walker injecting `binding` into every field.
	pub fn new(binding: FieldBinding) -> Self {
		Self { binding }
	}

	/// Walks one sibling list.
	pub fn walk(&self, nodes: &[Node]) -> Vec<Node> {
		let walked = self.walk_level(nodes);
		debug_log!("Walk pass bound {} fields", crate::node::collect_fields(&walked).len());
		walked
	}

	fn walk_level(&self, nodes: &[Node]) -> Vec<Node> {
		nodes
			.iter()
			.enumerate()
			.map(|(index, node)| self.walk_node(node, Key::new(index)))
			.collect()
	}

	fn walk_node(&self, node: &Node, key: Key) -> Node {
		match node {
			Node::Field(field) => Node::Field(Arc::new(field.bound(self.binding.clone(), key))),
			Node::Wrapper(wrapper) => {
				let children = self.walk_level(wrapper.child_nodes());
				Node::Wrapper(Arc::new(wrapper.rebuilt(children, Some(key))))
			}
			Node::Opaque(_) => node.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::callback::Callback;
	use crate::form::FieldEvent;
	use crate::node::{FieldNode, WrapperNode, collect_fields};
	use rstest::{fixture, rstest};
	use std::sync::Mutex;

	#[fixture]
	fn recorded() -> (TreeWalker, Arc<Mutex<Vec<FieldEvent>>>) {
		let events = Arc::new(Mutex::new(Vec::new()));
		let binding = FieldBinding::new(Callback::new({
			let events = Arc::clone(&events);
			move |event: FieldEvent| events.lock().unwrap().push(event)
		}));
		(TreeWalker::new(binding), events)
	}

	fn nested_tree() -> Vec<Node> {
		vec![
			WrapperNode::new("div")
				.child(WrapperNode::new("div").child(FieldNode::new("x")))
				.into(),
			FieldNode::new("y").into(),
		]
	}

	#[rstest]
	fn test_fields_are_bound_at_any_depth(recorded: (TreeWalker, Arc<Mutex<Vec<FieldEvent>>>)) {
		// Arrange
		let (walker, events) = recorded;

		// Act
		let walked = walker.walk(&nested_tree());
		let fields = collect_fields(&walked);

		// Assert
		assert_eq!(fields.len(), 2);
		assert!(fields.iter().all(|field| field.is_bound()));
		for field in &fields {
			field.binding().unwrap().report_value(field.name(), "v");
		}
		let names: Vec<_> = events
			.lock()
			.unwrap()
			.iter()
			.map(|event| event.name().to_string())
			.collect();
		assert_eq!(names, vec!["x", "y"]);
	}

	#[rstest]
	fn test_keys_are_sibling_positions(recorded: (TreeWalker, Arc<Mutex<Vec<FieldEvent>>>)) {
		// Arrange
		let (walker, _) = recorded;

		// Act
		let walked = walker.walk(&nested_tree());

		// Assert
		assert_eq!(walked[0].key(), Some(Key::new(0)));
		assert_eq!(walked[1].key(), Some(Key::new(1)));
		let outer = walked[0].as_wrapper().unwrap();
		let inner = &outer.child_nodes()[0];
		assert_eq!(inner.key(), Some(Key::new(0)));
		let x = &inner.as_wrapper().unwrap().child_nodes()[0];
		assert_eq!(x.key(), Some(Key::new(0)));
	}

	#[rstest]
	fn test_opaque_nodes_are_reused_without_key(
		recorded: (TreeWalker, Arc<Mutex<Vec<FieldEvent>>>),
	) {
		// Arrange
		let (walker, _) = recorded;
		let text = Node::text("Contact");
		let tree = vec![
			text.clone(),
			WrapperNode::new("p").child(text.clone()).into(),
		];

		// Act
		let walked = walker.walk(&tree);

		// Assert
		assert!(walked[0].ptr_eq(&text));
		assert_eq!(walked[0].key(), None);
		let nested = &walked[1].as_wrapper().unwrap().child_nodes()[0];
		assert!(nested.ptr_eq(&text));
		// The index consumed by the opaque node still counts toward positions
		assert_eq!(walked[1].key(), Some(Key::new(1)));
	}

	#[rstest]
	fn test_input_tree_is_untouched(recorded: (TreeWalker, Arc<Mutex<Vec<FieldEvent>>>)) {
		// Arrange
		let (walker, _) = recorded;
		let tree = nested_tree();

		// Act
		let walked = walker.walk(&tree);

		// Assert
		assert!(collect_fields(&tree).iter().all(|field| !field.is_bound()));
		assert!(tree.iter().all(|node| node.key().is_none()));
		assert!(!walked[1].ptr_eq(&tree[1]));
	}

	#[rstest]
	fn test_empty_wrapper_is_still_keyed(recorded: (TreeWalker, Arc<Mutex<Vec<FieldEvent>>>)) {
		let (walker, _) = recorded;

		let walked = walker.walk(&[WrapperNode::new("div").into()]);

		assert_eq!(walked[0].key(), Some(Key::new(0)));
		assert!(walked[0].as_wrapper().unwrap().child_nodes().is_empty());
	}

	#[rstest]
	fn test_field_props_survive_binding(recorded: (TreeWalker, Arc<Mutex<Vec<FieldEvent>>>)) {
		let (walker, _) = recorded;
		let tree = vec![Node::from(FieldNode::new("age").prop("min", 18))];

		let walked = walker.walk(&tree);

		let field = walked[0].as_field().unwrap();
		assert_eq!(field.name(), "age");
		assert_eq!(field.props(), tree[0].as_field().unwrap().props());
	}

	#[rstest]
	fn test_props_are_shared_not_copied(recorded: (TreeWalker, Arc<Mutex<Vec<FieldEvent>>>)) {
		// Arrange
		let (walker, _) = recorded;
		let tree = vec![Node::from(
			WrapperNode::new("div")
				.prop("style", "x".repeat(1024))
				.child(FieldNode::new("bio").prop("meta", "y".repeat(1024))),
		)];

		// Act
		let walked = walker.walk(&tree);

		// Assert
		let before = tree[0].as_wrapper().unwrap();
		let after = walked[0].as_wrapper().unwrap();
		assert!(std::ptr::eq(before.props(), after.props()));
		let field_before = before.child_nodes()[0].as_field().unwrap();
		let field_after = after.child_nodes()[0].as_field().unwrap();
		assert!(std::ptr::eq(field_before.props(), field_after.props()));
	}

	#[rstest]
	fn test_empty_input_yields_empty_output(recorded: (TreeWalker, Arc<Mutex<Vec<FieldEvent>>>)) {
		let (walker, _) = recorded;

		assert!(walker.walk(&[]).is_empty());
	}
}
