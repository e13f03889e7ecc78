//! # Formweave
//!
//! Declarative form composition for node-tree user interfaces.
//!
//! A caller describes a form as a tree of nodes with field nodes nested at any
//! depth inside wrapper elements. Formweave discovers those fields, injects a
//! value/validity reporting binding into each one, keeps an aggregate validity
//! flag, and hands an owned snapshot of the values to a submit handler.
//!
//! ## Quick Start
//!
//! ```rust
//! use formweave::prelude::*;
//!
//! let form = Form::builder()
//!     .attr("action", "/signup")
//!     .child(FieldNode::new("email"))
//!     .on_submit(|_event, data| println!("submitted {:?}", data.get("email")))
//!     .build()
//!     .unwrap();
//!
//! let rendered = form.render();
//! let email = find_field(rendered.as_wrapper().unwrap().child_nodes(), "email").unwrap();
//! FieldHandle::attach(email).unwrap().set_value("a@b.com");
//!
//! assert_eq!(form.submit(SubmitEvent::new()), SubmitOutcome::Dispatched);
//! ```
//!
//! ## Feature Flags
//!
//! - `debug-hooks` - Emit per-pass walk details through `tracing` at debug level
//!
//! ## Modules
//!
//! - [`pages`]: the form composition engine

#![warn(missing_docs)]

pub mod pages;

/// Prelude for the common form composition types.
pub mod prelude {
	pub use formweave_pages::prelude::*;
}
