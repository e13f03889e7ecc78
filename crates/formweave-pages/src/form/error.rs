//! Errors raised while building or updating a form.

/// Errors raised by the form container.
///
/// Field-level problems never surface here: validation outcomes are data
/// reported by the fields, and malformed nodes are passed through as opaque.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
	/// Two field nodes in the same form share a name.
	#[error("Duplicate field name: {name}")]
	DuplicateField {
		/// The repeated name.
		name: String,
	},
	/// The typed configuration could not be parsed.
	#[error("Invalid form configuration: {0}")]
	InvalidConfig(#[source] serde_json::Error),
}

/// Result type for form operations.
pub type FormResult<T> = Result<T, FormError>;
