//! The form container: lifecycle glue between the walker, the state store
//! and the submission dispatcher.
//!
//! ## Lifecycle
//!
//! ```text
//! FormBuilder::build()      mount: attributes filtered once, empty state
//!        │
//!        ▼
//! Form::render()  ◄──┐      every pass: fresh walk, fresh bindings,
//!        │           │      same state
//!        ▼           │
//! host renders, fields report through their bindings
//!        │           │
//!        └───────────┘
//! Form::submit(event)       owned snapshot handed to `on_submit`
//! Form::unmount()           state dropped, stale bindings become inert
//! ```
//!
//! ## Example
//!
//! ```
//! use formweave_pages::form::{FieldHandle, Form, SubmitEvent};
//! use formweave_pages::node::{FieldNode, WrapperNode, collect_fields};
//!
//! let form = Form::builder()
//!     .attr("action", "/signup")
//!     .attr("style", "ignored")
//!     .child(WrapperNode::new("div").child(FieldNode::new("email")))
//!     .on_submit(|_event, data| assert_eq!(data.len(), 1))
//!     .build()
//!     .unwrap();
//!
//! let rendered = form.render();
//! let wrapper = rendered.as_wrapper().unwrap();
//! let email = collect_fields(wrapper.child_nodes())[0];
//! FieldHandle::attach(email).unwrap().set_value("a@b.com");
//!
//! assert!(form.is_valid());
//! form.submit(SubmitEvent::new());
//! ```

use super::attributes::{FormAttributes, FormConfig};
use super::error::{FormError, FormResult};
use super::state::{FormData, FormState, FormStore};
use super::submit::{
	SubmissionDispatcher, SubmitEvent, SubmitHandler, SubmitOutcome, SubmitPolicy,
};
use crate::callback::Callback;
use crate::node::{Node, Props, WrapperNode, collect_fields};
use crate::walker::TreeWalker;
use crate::{debug_log, info_log};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Tag of the wrapper node produced by [`Form::render`].
pub const FORM_TAG: &str = "form";

/// A mounted form.
#[derive(Debug)]
pub struct Form {
	attributes: FormAttributes,
	dispatcher: SubmissionDispatcher,
	children: Vec<Node>,
	store: FormStore,
}

impl Form {
	/// Starts building a form.
	pub fn builder() -> FormBuilder {
		FormBuilder::new()
	}

	/// Produces this pass's augmented tree.
	///
	/// The result is a `form` wrapper whose props are the filtered attributes
	/// and whose children are the walked children. Every call creates new
	/// bindings that write into the same state.
	pub fn render(&self) -> Node {
		WrapperNode::new(FORM_TAG)
			.with_props(self.attributes.as_props().clone())
			.children(self.render_children())
			.into()
	}

	/// Walks the children without wrapping them in a `form` node.
	pub fn render_children(&self) -> Vec<Node> {
		TreeWalker::new(self.store.binding()).walk(&self.children)
	}

	/// Returns the caller-supplied children.
	pub fn children(&self) -> &[Node] {
		&self.children
	}

	/// Replaces the children for subsequent passes.
	///
	/// State is kept. Attributes are not recomputed.
	pub fn set_children(&mut self, children: Vec<Node>) -> FormResult<()> {
		ensure_unique_names(&children)?;
		self.children = children;
		Ok(())
	}

	/// Returns the names of every field in the children, in document order.
	pub fn field_names(&self) -> Vec<&str> {
		collect_fields(&self.children)
			.into_iter()
			.map(|field| field.name())
			.collect()
	}

	/// Returns the attributes computed at mount.
	pub fn attributes(&self) -> &FormAttributes {
		&self.attributes
	}

	/// Returns the submit gating policy.
	pub fn submit_policy(&self) -> SubmitPolicy {
		self.dispatcher.policy()
	}

	/// Handles a submit trigger.
	pub fn submit(&self, event: SubmitEvent) -> SubmitOutcome {
		self.dispatcher.dispatch(event, &self.store)
	}

	/// Returns the aggregate validity.
	pub fn is_valid(&self) -> bool {
		self.store.is_valid()
	}

	/// Returns an owned copy of the current values.
	pub fn values(&self) -> FormData {
		self.store.snapshot()
	}

	/// Returns the current value of one field.
	pub fn value(&self, name: &str) -> Option<Value> {
		self.store.value(name)
	}

	/// Returns the reported validity of one field.
	pub fn field_validity(&self, name: &str) -> Option<bool> {
		self.store.field_validity(name)
	}

	/// Returns a copy of the whole state.
	pub fn state(&self) -> FormState {
		self.store.state()
	}

	/// Tears the form down. Bindings still held by the host stop writing.
	pub fn unmount(self) {
		info_log!("Unmounting form {:?}", self.attributes.name());
	}
}

/// Builder for [`Form`].
#[derive(Debug, Default)]
pub struct FormBuilder {
	props: Props,
	on_submit: Option<SubmitHandler>,
	policy: SubmitPolicy,
	children: Vec<Node>,
	initial: HashMap<String, Value>,
}

impl FormBuilder {
	/// Creates an empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets one raw property. Unrecognized names are dropped at build time.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.props.insert(name.into(), value.into());
		self
	}

	/// Sets several raw properties.
	pub fn props(mut self, props: Props) -> Self {
		self.props.extend(props);
		self
	}

	/// Sets properties from a typed configuration.
	pub fn config(mut self, config: &FormConfig) -> Self {
		self.props.extend(config.to_props());
		self
	}

	/// Sets the submit handler.
	pub fn on_submit<F>(mut self, f: F) -> Self
	where
		F: Fn(SubmitEvent, FormData) + Send + Sync + 'static,
	{
		self.on_submit = Some(Callback::new(move |(event, data)| f(event, data)));
		self
	}

	/// Sets an already-wrapped submit handler.
	pub fn submit_handler(mut self, handler: SubmitHandler) -> Self {
		self.on_submit = Some(handler);
		self
	}

	/// Sets the submit gating policy.
	pub fn submit_policy(mut self, policy: SubmitPolicy) -> Self {
		self.policy = policy;
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

	/// Seeds field values.
	pub fn initial(mut self, initial: HashMap<String, Value>) -> Self {
		self.initial = initial;
		self
	}

	/// Mounts the form.
	///
	/// # Errors
	///
	/// [`FormError::DuplicateField`] if two fields share a name.
	pub fn build(self) -> FormResult<Form> {
		ensure_unique_names(&self.children)?;

		let attributes = FormAttributes::from_props(&self.props);
		let dispatcher = match self.on_submit {
			Some(handler) => SubmissionDispatcher::new(handler, self.policy),
			None => SubmissionDispatcher::new(Callback::noop(), self.policy),
		};
		let form = Form {
			attributes,
			dispatcher,
			children: self.children,
			store: FormStore::new(FormState::with_initial(self.initial)),
		};
		debug_log!("Mounted form with fields {:?}", form.field_names());
		Ok(form)
	}
}

fn ensure_unique_names(nodes: &[Node]) -> FormResult<()> {
	let mut seen = HashSet::new();
	for field in collect_fields(nodes) {
		if !seen.insert(field.name()) {
			return Err(FormError::DuplicateField {
				name: field.name().to_string(),
			});
		}
	}
	Ok(())
}
