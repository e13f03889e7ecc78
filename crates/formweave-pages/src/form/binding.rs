//! Field bindings: the only channel from a field back into its form.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  report_value     ┌──────────────┐  apply()   ┌───────────┐
//! │ field impl  │ ─────────────────►│ FieldBinding │ ─────────► │ FormState │
//! │  (external) │  report_validity  │  FieldEvent  │  reducer   │           │
//! └─────────────┘                   └──────────────┘            └───────────┘
//! ```
//!
//! A binding turns each report into a typed [`FieldEvent`] and hands it to a
//! single dispatcher. The form owns that dispatcher and is the only writer of
//! its state; fields can trigger writes but never observe or hold the state.
//!
//! Bindings are created fresh on every walk. They refer to the state weakly,
//! so a binding that outlives its form silently drops its reports.

use crate::callback::Callback;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A change reported by a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FieldEvent {
	/// The field's current value changed.
	ValueChanged {
		/// Field name.
		name: String,
		/// New value.
		value: Value,
	},
	/// The field's validation outcome changed.
	ValidityChanged {
		/// Field name.
		name: String,
		/// Whether the field currently passes its own validation rules.
		valid: bool,
	},
}

impl FieldEvent {
	/// Returns the name of the reporting field.
	pub fn name(&self) -> &str {
		match self {
			FieldEvent::ValueChanged { name, .. } | FieldEvent::ValidityChanged { name, .. } => {
				name
			}
		}
	}
}

/// Callback pair injected into every field node by the tree walker.
#[derive(Clone)]
pub struct FieldBinding {
	dispatch: Callback<FieldEvent>,
}

impl FieldBinding {
	/// Creates a binding that forwards every event to `dispatch`.
	pub fn new(dispatch: Callback<FieldEvent>) -> Self {
		Self { dispatch }
	}

	/// Reports the field's current value.
	///
	/// Overwrites the stored value for `name`; aggregate validity is untouched.
	pub fn report_value(&self, name: impl Into<String>, value: impl Into<Value>) {
		self.emit(FieldEvent::ValueChanged {
			name: name.into(),
			value: value.into(),
		});
	}

	/// Reports the field's validation outcome.
	///
	/// Overwrites the stored validity for `name` and recomputes the aggregate
	/// before returning.
	pub fn report_validity(&self, name: impl Into<String>, valid: bool) {
		self.emit(FieldEvent::ValidityChanged {
			name: name.into(),
			valid,
		});
	}

	/// Sends an already-built event.
	pub fn emit(&self, event: FieldEvent) {
		self.dispatch.call(event);
	}

	/// Returns `true` when both bindings were created by the same pass.
	pub fn same_pass(&self, other: &FieldBinding) -> bool {
		self.dispatch.ptr_eq(&other.dispatch)
	}
}

impl std::fmt::Debug for FieldBinding {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FieldBinding")
			.field("dispatch", &"<function>")
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;
	use std::sync::{Arc, Mutex};

	fn recording_binding() -> (FieldBinding, Arc<Mutex<Vec<FieldEvent>>>) {
		let events = Arc::new(Mutex::new(Vec::new()));
		let binding = FieldBinding::new(Callback::new({
			let events = Arc::clone(&events);
			move |event: FieldEvent| events.lock().unwrap().push(event)
		}));
		(binding, events)
	}

	#[rstest]
	fn test_report_value_emits_value_changed() {
		// Arrange
		let (binding, events) = recording_binding();

		// Act
		binding.report_value("email", "a@b.com");

		// Assert
		assert_eq!(
			*events.lock().unwrap(),
			vec![FieldEvent::ValueChanged {
				name: "email".to_string(),
				value: json!("a@b.com"),
			}]
		);
	}

	#[rstest]
	fn test_report_validity_emits_validity_changed() {
		let (binding, events) = recording_binding();

		binding.report_validity("email", false);

		assert_eq!(
			*events.lock().unwrap(),
			vec![FieldEvent::ValidityChanged {
				name: "email".to_string(),
				valid: false,
			}]
		);
	}

	#[rstest]
	fn test_clones_belong_to_the_same_pass() {
		let (binding, _) = recording_binding();
		let (other, _) = recording_binding();

		assert!(binding.same_pass(&binding.clone()));
		assert!(!binding.same_pass(&other));
	}

	#[rstest]
	#[case(FieldEvent::ValueChanged { name: "age".to_string(), value: json!(30) }, json!({ "event": "value_changed", "name": "age", "value": 30 }))]
	#[case(FieldEvent::ValidityChanged { name: "age".to_string(), valid: true }, json!({ "event": "validity_changed", "name": "age", "valid": true }))]
	fn test_event_serialization(#[case] event: FieldEvent, #[case] expected: Value) {
		assert_eq!(serde_json::to_value(&event).unwrap(), expected);
		assert_eq!(event.name(), "age");
	}
}
