//! Declarative form composition
//!
//! This module provides access to formweave-pages, the engine that walks a
//! form's node tree, binds every field it finds and aggregates what those
//! fields report.
//!
//! ## Architecture
//!
//! - **Node Model**: `Field`, `Wrapper` and `Opaque` nodes with shared subtrees
//! - **Tree Walker**: per-pass binding injection with positional keys
//! - **Form State**: a single reducer over value and validity reports
//! - **Submission**: owned snapshots handed to the submit handler
//!
//! ## Example
//!
//! ```rust
//! use formweave::pages::prelude::*;
//!
//! let form = Form::builder()
//!     .child(WrapperNode::new("div").child(FieldNode::new("name")))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(form.field_names(), vec!["name"]);
//! ```

pub use formweave_pages::*;
