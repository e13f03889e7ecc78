//! Everything needed to build, render and submit a form.
//!
//! ```
//! use formweave_pages::prelude::*;
//! ```

pub use crate::callback::Callback;
pub use crate::form::{
	FieldBinding, FieldEvent, FieldHandle, Form, FormBuilder, FormConfig, FormData, FormError,
	FormResult, SubmitEvent, SubmitOutcome, SubmitPolicy,
};
pub use crate::node::{FieldNode, Key, Node, OpaqueNode, Props, WrapperNode, collect_fields, find_field};
pub use crate::walker::TreeWalker;
