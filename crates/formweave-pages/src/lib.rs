//! Formweave Pages - declarative form composition
//!
//! A form is described as a tree of nodes. Somewhere inside that tree, at any
//! depth, are field nodes. The engine finds every field, hands it a pair of
//! reporting callbacks, aggregates what the fields report into one state, and
//! forwards a snapshot of that state to a submit handler.
//!
//! ## Architecture
//!
//! - [`node`]: the tree model (`Field`, `Wrapper`, `Opaque`) and its JSON descriptor form
//! - [`walker`]: the recursive walk that binds fields and assigns positional keys
//! - [`form`](mod@form): state, bindings, attribute filtering, submission and the `Form` container
//! - [`callback`]: shareable callback wrapper used for every external hook
//! - [`logging`]: logging macros backed by `tracing`
//!
//! Rendering, field widgets and validation rules are the host's business. The
//! engine only sees what fields report.
//!
//! ## Example
//!
//! ```
//! use formweave_pages::prelude::*;
//!
//! let form = Form::builder()
//!     .attr("method", "post")
//!     .child(
//!         WrapperNode::new("fieldset")
//!             .child(Node::text("Contact"))
//!             .child(FieldNode::new("email")),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let rendered = form.render();
//! let fields = collect_fields(rendered.as_wrapper().unwrap().child_nodes());
//! let email = FieldHandle::attach(fields[0]).unwrap();
//! email.set_value("a@b.com");
//! email.set_validity(true);
//!
//! assert!(form.is_valid());
//! assert_eq!(form.values().len(), 1);
//! ```

#![warn(missing_docs)]

// Core modules
pub mod callback;
pub mod logging;
pub mod node;
pub mod walker;

// Form composition
pub mod form;

// Unified prelude for simplified imports
pub mod prelude;

// Re-export commonly used types
pub use callback::Callback;
pub use form::{
	FieldBinding, FieldEvent, FieldHandle, Form, FormAttributes, FormBuilder, FormConfig, FormData,
	FormError, FormResult, FormState, FormStore, SubmitEvent, SubmitOutcome, SubmitPolicy,
};
pub use node::{FieldNode, Key, Node, OpaqueNode, Props, WrapperNode};
pub use walker::TreeWalker;

// Logging macros are automatically exported via #[macro_export]
// Users can access them as: formweave_pages::debug_log!, formweave_pages::info_log!, etc.
