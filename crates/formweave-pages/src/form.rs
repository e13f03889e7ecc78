//! Form composition: state, bindings, attributes and submission.
//!
//! ## Architecture
//!
//! ```text
//!  children (Vec<Node>)          FormStore (Arc<RwLock<FormState>>)
//!         │                           ▲
//!         ▼                           │ FieldEvent
//!   TreeWalker ── FieldBinding ───────┘
//!         │
//!         ▼
//!  augmented tree ──► host renders fields, fields report
//!
//!  submit(event) ──► SubmissionDispatcher ──► on_submit(event, FormData)
//! ```
//!
//! ## Components
//!
//! - **Form**: the container that owns state and glues the pieces together
//! - **FieldBinding**: the pair of reporting callbacks injected into each field
//! - **FormStore / FormState**: the single reducer fields write into
//! - **FormAttributes**: the whitelisted subset of caller props
//! - **SubmissionDispatcher**: hands an owned snapshot to `on_submit`

pub mod attributes;
pub mod binding;
pub mod component;
pub mod error;
pub mod field;
pub mod state;
pub mod submit;

pub use attributes::{
	AttributeError, Autocomplete, EncType, FORM_ATTRIBUTES, FormAttributes, FormConfig, NoValidate,
	check_attribute, filter_attributes,
};
pub use binding::{FieldBinding, FieldEvent};
pub use component::{FORM_TAG, Form, FormBuilder};
pub use error::{FormError, FormResult};
pub use field::FieldHandle;
pub use state::{FormData, FormState, FormStore};
pub use submit::{SubmissionDispatcher, SubmitEvent, SubmitHandler, SubmitOutcome, SubmitPolicy};
