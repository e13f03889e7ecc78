//! Form state: reported values, per-field validity and the derived aggregate.
//!
//! [`FormState`] is a plain reducer over [`FieldEvent`]s. [`FormStore`] is the
//! shared handle the form container keeps and hands out bindings from.
//!
//! ## Aggregate validity
//!
//! `is_valid()` is the AND over every *reported* validity entry. A field that
//! has never reported does not count against the form, so an empty form is
//! valid. The aggregate is recomputed once for every validity report and
//! never for value reports.

use super::binding::{FieldBinding, FieldEvent};
use crate::callback::Callback;
use crate::debug_log;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::ops::Deref;
use std::sync::{Arc, Weak};

/// In-memory record of everything the form's fields have reported.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
	values: HashMap<String, Value>,
	validity: HashMap<String, bool>,
	overall_valid: bool,
}

impl FormState {
	/// Creates an empty, vacuously valid state.
	pub fn new() -> Self {
		Self {
			values: HashMap::new(),
			validity: HashMap::new(),
			overall_valid: true,
		}
	}

	/// Creates a state whose values are seeded from `initial`.
	///
	/// Seeded values carry no validity information.
	pub fn with_initial(initial: HashMap<String, Value>) -> Self {
		Self {
			values: initial,
			..Self::new()
		}
	}

	/// Applies one field event. This is the only mutation entry point.
	///
	/// Returns `true` when the aggregate validity changed.
	pub fn apply(&mut self, event: FieldEvent) -> bool {
		match event {
			FieldEvent::ValueChanged { name, value } => {
				self.values.insert(name, value);
				false
			}
			FieldEvent::ValidityChanged { name, valid } => {
				self.validity.insert(name, valid);
				let before = self.overall_valid;
				self.recompute_validity();
				before != self.overall_valid
			}
		}
	}

	/// Recomputes the aggregate from the per-field validity map.
	pub fn recompute_validity(&mut self) {
		self.overall_valid = self.validity.values().all(|valid| *valid);
	}

	/// Returns the aggregate validity.
	pub fn is_valid(&self) -> bool {
		self.overall_valid
	}

	/// Returns every reported value.
	pub fn values(&self) -> &HashMap<String, Value> {
		&self.values
	}

	/// Returns the reported value of one field.
	pub fn value(&self, name: &str) -> Option<&Value> {
		self.values.get(name)
	}

	/// Returns every reported validity entry.
	pub fn validity(&self) -> &HashMap<String, bool> {
		&self.validity
	}

	/// Returns the reported validity of one field, `None` if it never reported.
	pub fn field_validity(&self, name: &str) -> Option<bool> {
		self.validity.get(name).copied()
	}

	/// Returns an owned copy of the current values.
	pub fn snapshot(&self) -> FormData {
		FormData(self.values.clone())
	}
}

impl Default for FormState {
	fn default() -> Self {
		Self::new()
	}
}

/// Owned copy of a form's values, as handed to the submit handler.
///
/// Mutating a `FormData` never affects the form it was taken from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(HashMap<String, Value>);

impl FormData {
	/// Returns the value of one field.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.0.get(name)
	}

	/// Converts the data into a JSON object.
	pub fn to_json(&self) -> Value {
		Value::Object(
			self.0
				.iter()
				.map(|(name, value)| (name.clone(), value.clone()))
				.collect(),
		)
	}

	/// Consumes the data, returning the underlying map.
	pub fn into_inner(self) -> HashMap<String, Value> {
		self.0
	}
}

impl Deref for FormData {
	type Target = HashMap<String, Value>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<HashMap<String, Value>> for FormData {
	fn from(values: HashMap<String, Value>) -> Self {
		Self(values)
	}
}

/// Shared handle to one form's state.
///
/// The host delivers interaction callbacks one at a time, so the lock is
/// never contended; it exists to make the handle `Send + Sync`. Every public
/// accessor returns owned data, so no lock is held once it returns and
/// callers may report through a binding at any point.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
	inner: Arc<RwLock<FormState>>,
}

impl FormStore {
	/// Creates a store around `state`.
	pub fn new(state: FormState) -> Self {
		Self {
			inner: Arc::new(RwLock::new(state)),
		}
	}

	/// Applies `event` through the reducer.
	pub fn dispatch(&self, event: FieldEvent) -> bool {
		apply_event(&self.inner, event)
	}

	/// Creates a fresh binding for one walk pass.
	pub fn binding(&self) -> FieldBinding {
		let state: Weak<RwLock<FormState>> = Arc::downgrade(&self.inner);
		FieldBinding::new(Callback::new(move |event: FieldEvent| {
			match state.upgrade() {
				Some(state) => {
					apply_event(&state, event);
				}
				None => {
					debug_log!("Dropped report from `{}` after unmount", event.name());
				}
			}
		}))
	}

	/// Runs `f` under the read lock.
	///
	/// `f` must not report through a binding of this store: the write lock
	/// is not re-entrant. Public accessors return owned data instead.
	pub(crate) fn read<R>(&self, f: impl FnOnce(&FormState) -> R) -> R {
		f(&self.inner.read())
	}

	/// Returns the current value of one field.
	pub fn value(&self, name: &str) -> Option<Value> {
		self.read(|state| state.value(name).cloned())
	}

	/// Returns the reported validity of one field.
	pub fn field_validity(&self, name: &str) -> Option<bool> {
		self.read(|state| state.field_validity(name))
	}

	/// Returns a clone of the current state.
	pub fn state(&self) -> FormState {
		self.inner.read().clone()
	}

	/// Returns the aggregate validity.
	pub fn is_valid(&self) -> bool {
		self.inner.read().is_valid()
	}

	/// Returns an owned copy of the current values.
	pub fn snapshot(&self) -> FormData {
		self.inner.read().snapshot()
	}
}

fn apply_event(state: &RwLock<FormState>, event: FieldEvent) -> bool {
	let changed = state.write().apply(event);
	if changed {
		debug_log!("Form validity changed");
	}
	changed
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn value(name: &str, value: Value) -> FieldEvent {
		FieldEvent::ValueChanged {
			name: name.to_string(),
			value,
		}
	}

	fn validity(name: &str, valid: bool) -> FieldEvent {
		FieldEvent::ValidityChanged {
			name: name.to_string(),
			valid,
		}
	}

	#[rstest]
	fn test_empty_state_is_valid() {
		let state = FormState::new();

		assert!(state.is_valid());
		assert!(state.values().is_empty());
		assert!(state.validity().is_empty());
	}

	#[rstest]
	fn test_single_invalid_field_invalidates_form() {
		// Arrange
		let mut state = FormState::new();

		// Act
		state.apply(validity("a", true));
		state.apply(validity("b", false));

		// Assert
		assert!(!state.is_valid());
	}

	#[rstest]
	fn test_form_stays_invalid_until_offending_field_recovers() {
		// Arrange
		let mut state = FormState::new();
		state.apply(validity("a", true));
		state.apply(validity("b", false));

		// Act / Assert
		state.apply(validity("a", false));
		assert!(!state.is_valid());
		state.apply(validity("a", true));
		assert!(!state.is_valid());
		state.apply(validity("b", true));
		assert!(state.is_valid());
	}

	#[rstest]
	#[case(true)]
	#[case(false)]
	fn test_value_report_never_changes_aggregate(#[case] prior: bool) {
		// Arrange
		let mut state = FormState::new();
		state.apply(validity("a", prior));

		// Act
		let changed = state.apply(value("a", json!("anything")));

		// Assert
		assert!(!changed);
		assert_eq!(state.is_valid(), prior);
	}

	#[rstest]
	fn test_validity_report_touches_only_its_entry() {
		// Arrange
		let mut state = FormState::new();
		state.apply(value("a", json!(1)));
		state.apply(value("b", json!(2)));
		state.apply(validity("b", true));
		let before = state.clone();

		// Act
		state.apply(validity("a", false));

		// Assert
		assert_eq!(state.values(), before.values());
		assert_eq!(state.field_validity("b"), Some(true));
		assert_eq!(state.field_validity("a"), Some(false));
	}

	#[rstest]
	fn test_last_write_wins_per_name() {
		let mut state = FormState::new();

		state.apply(value("a", json!("first")));
		state.apply(value("a", json!("second")));
		state.apply(validity("a", false));
		state.apply(validity("a", true));

		assert_eq!(state.value("a"), Some(&json!("second")));
		assert_eq!(state.field_validity("a"), Some(true));
		assert!(state.is_valid());
	}

	#[rstest]
	fn test_apply_reports_aggregate_transitions() {
		let mut state = FormState::new();

		assert!(state.apply(validity("a", false)));
		assert!(!state.apply(validity("b", false)));
		assert!(!state.apply(validity("a", true)));
		assert!(state.apply(validity("b", true)));
	}

	#[rstest]
	fn test_initial_values_carry_no_validity() {
		let initial = HashMap::from([("name".to_string(), json!("John"))]);

		let state = FormState::with_initial(initial);

		assert_eq!(state.value("name"), Some(&json!("John")));
		assert_eq!(state.field_validity("name"), None);
		assert!(state.is_valid());
	}

	#[rstest]
	fn test_snapshot_is_detached() {
		// Arrange
		let mut state = FormState::new();
		state.apply(value("email", json!("a@b.com")));

		// Act
		let mut data = state.snapshot().into_inner();
		data.insert("email".to_string(), json!("changed"));

		// Assert
		assert_eq!(state.value("email"), Some(&json!("a@b.com")));
	}

	#[rstest]
	fn test_store_binding_writes_through() {
		// Arrange
		let store = FormStore::default();
		let binding = store.binding();

		// Act
		binding.report_value("email", "a@b.com");
		binding.report_validity("email", false);

		// Assert
		assert_eq!(store.value("email"), Some(json!("a@b.com")));
		assert_eq!(store.field_validity("email"), Some(false));
		assert!(!store.is_valid());
	}

	#[rstest]
	fn test_report_while_inspecting_state_does_not_block() {
		// Arrange
		let store = FormStore::default();
		let binding = store.binding();
		let (tx, rx) = std::sync::mpsc::channel();

		// Act
		std::thread::spawn(move || {
			let seen = store.state();
			binding.report_value("a", seen.values().len());
			let _ = tx.send(store.value("a"));
		});

		// Assert
		let reported = rx.recv_timeout(std::time::Duration::from_secs(3));
		assert_eq!(reported, Ok(Some(json!(0))));
	}

	#[rstest]
	fn test_binding_outliving_store_is_inert() {
		// Arrange
		let store = FormStore::default();
		let binding = store.binding();

		// Act
		drop(store);
		binding.report_validity("email", false);
		binding.report_value("email", "ignored");

		// Assert: nothing to observe, reporting must simply not panic
	}

	#[rstest]
	fn test_each_binding_is_a_new_pass() {
		let store = FormStore::default();

		assert!(!store.binding().same_pass(&store.binding()));
	}

	#[rstest]
	fn test_form_data_to_json() {
		let data = FormData::from(HashMap::from([("email".to_string(), json!("a@b.com"))]));

		assert_eq!(data.to_json(), json!({ "email": "a@b.com" }));
		assert_eq!(data.get("email"), Some(&json!("a@b.com")));
		assert_eq!(data.len(), 1);
	}
}
