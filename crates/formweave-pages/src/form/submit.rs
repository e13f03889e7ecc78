//! Submission dispatch.
//!
//! On a submit trigger the dispatcher takes an owned snapshot of the form's
//! values and passes it, together with the triggering event, to the external
//! `on_submit` handler. The handler runs after every lock on the state has
//! been released, so it may freely call back into the form.

use super::state::{FormData, FormStore};
use crate::callback::Callback;
use crate::{debug_log, info_log};
use serde::{Deserialize, Serialize};

/// Host-side payload of a submit trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitEvent {
	/// Name of the control that triggered submission, if the host knows it.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub submitter: Option<String>,
}

impl SubmitEvent {
	/// Creates an event without submitter information.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records the control that triggered submission.
	pub fn with_submitter(mut self, submitter: impl Into<String>) -> Self {
		self.submitter = Some(submitter.into());
		self
	}
}

/// External handler receiving `(event, data)` on submit.
pub type SubmitHandler = Callback<(SubmitEvent, FormData)>;

/// Whether submission is gated on aggregate validity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitPolicy {
	/// Always forward to the handler.
	#[default]
	Always,
	/// Forward only while the form is valid.
	RequireValid,
}

/// Result of a submit trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// The handler was invoked.
	Dispatched,
	/// The handler was not invoked because the form was invalid.
	Blocked,
}

/// Forwards submit triggers to the external handler.
#[derive(Debug, Clone)]
pub struct SubmissionDispatcher {
	handler: SubmitHandler,
	policy: SubmitPolicy,
}

impl SubmissionDispatcher {
	/// Creates a dispatcher forwarding to `handler`.
	pub fn new(handler: SubmitHandler, policy: SubmitPolicy) -> Self {
		Self { handler, policy }
	}

	/// Creates a dispatcher whose handler does nothing.
	pub fn noop() -> Self {
		Self::new(Callback::noop(), SubmitPolicy::default())
	}

	/// Returns the gating policy.
	pub fn policy(&self) -> SubmitPolicy {
		self.policy
	}

	/// Handles one submit trigger against the current state of `store`.
	pub fn dispatch(&self, event: SubmitEvent, store: &FormStore) -> SubmitOutcome {
		let (valid, data) = store.read(|state| (state.is_valid(), state.snapshot()));

		if self.policy == SubmitPolicy::RequireValid && !valid {
			info_log!("Submit blocked: form has invalid fields");
			return SubmitOutcome::Blocked;
		}

		debug_log!("Submitting {} values", data.len());
		self.handler.call((event, data));
		SubmitOutcome::Dispatched
	}
}

impl Default for SubmissionDispatcher {
	fn default() -> Self {
		Self::noop()
	}
}
