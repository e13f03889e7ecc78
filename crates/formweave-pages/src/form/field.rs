//! Capability handle for external field implementations.
//!
//! A rendered field node carries its name, its own props and the binding the
//! walker injected. [`FieldHandle`] bundles the three so a widget only has to
//! call `set_value` / `set_validity` and never deals with names twice.

use super::binding::FieldBinding;
use crate::node::{FieldNode, Props};
use serde_json::Value;
use std::sync::Arc;

/// The reporting surface of one bound field.
#[derive(Debug, Clone)]
pub struct FieldHandle {
	name: String,
	props: Arc<Props>,
	binding: FieldBinding,
}

impl FieldHandle {
	/// Creates a handle for a walked field node.
	///
	/// Returns `None` for a node that has not been through a walk.
	pub fn attach(node: &FieldNode) -> Option<Self> {
		let binding = node.binding()?.clone();
		Some(Self {
			name: node.name().to_string(),
			props: node.shared_props(),
			binding,
		})
	}

	/// Returns the field name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the field's own properties.
	pub fn props(&self) -> &Props {
		&self.props
	}

	/// Reports the field's current value.
	pub fn set_value(&self, value: impl Into<Value>) {
		self.binding.report_value(self.name.clone(), value);
	}

	/// Reports the outcome of the field's validation rules.
	pub fn set_validity(&self, valid: bool) {
		self.binding.report_validity(self.name.clone(), valid);
	}
}
