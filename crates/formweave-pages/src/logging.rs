//! Logging abstraction layer for formweave-pages
//!
//! This module provides logging macros backed by [`tracing`], so the engine
//! emits structured events that any subscriber installed by the host can
//! collect. The macros are re-exported through `$crate`, which means crates
//! using them do not need their own `tracing` dependency.
//!
//! ## Macro Overview
//!
//! | Macro | Feature Required | Level |
//! |-------|------------------|-------|
//! | `debug_log!` | `debug-hooks` | `DEBUG` |
//! | `info_log!` | None | `INFO` |
//! | `warn_log!` | None | `WARN` |
//! | `error_log!` | None | `ERROR` |
//!
//! ## Example
//!
//! ```ignore
//! use formweave_pages::{debug_log, info_log, warn_log, error_log};
//!
//! // Only emitted when the `debug-hooks` feature is enabled
//! debug_log!("walk pass bound {} fields", count);
//!
//! info_log!("Form mounted");
//! warn_log!("attribute `{}` has an unexpected value", name);
//! error_log!("Failed to parse form config: {}", error);
//! ```

#[doc(hidden)]
pub use tracing as __tracing;

/// Logs a debug message (requires the `debug-hooks` feature)
///
/// This macro is for per-pass traversal and reducer details.
/// It compiles to a no-op when the feature is disabled.
///
/// # Example
///
/// ```ignore
/// debug_log!("Validity of {} changed to {}", name, valid);
/// ```
#[macro_export]
#[cfg(feature = "debug-hooks")]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::logging::__tracing::debug!($($arg)*);
	}};
}

/// No-op debug_log when the `debug-hooks` feature is disabled
#[macro_export]
#[cfg(not(feature = "debug-hooks"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs an info message
///
/// # Example
///
/// ```ignore
/// info_log!("Form submitted");
/// ```
#[macro_export]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::logging::__tracing::info!($($arg)*);
	}};
}

/// Logs a warning message
///
/// # Example
///
/// ```ignore
/// warn_log!("Unexpected value for `{}`", "autocomplete");
/// ```
#[macro_export]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::logging::__tracing::warn!($($arg)*);
	}};
}

/// Logs an error message
///
/// # Example
///
/// ```ignore
/// error_log!("Rejected form children: {}", error);
/// ```
#[macro_export]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::logging::__tracing::error!($($arg)*);
	}};
}

#[cfg(test)]
mod tests {
	use crate::{error_log, info_log, warn_log};
	use rstest::rstest;
	use std::fmt;
	use std::sync::{Arc, Mutex};
	use tracing::field::{Field, Visit};
	use tracing::span::{Attributes, Id, Record};
	use tracing::{Event, Level, Metadata, Subscriber};

	type Recorded = Arc<Mutex<Vec<(Level, String)>>>;

	struct Recorder {
		events: Recorded,
	}

	struct MessageVisitor(String);

	impl Visit for MessageVisitor {
		fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
			if field.name() == "message" {
				self.0 = format!("{value:?}");
			}
		}
	}

	impl Subscriber for Recorder {
		fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
			true
		}

		fn new_span(&self, _span: &Attributes<'_>) -> Id {
			Id::from_u64(1)
		}

		fn record(&self, _span: &Id, _values: &Record<'_>) {}

		fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

		fn event(&self, event: &Event<'_>) {
			let mut visitor = MessageVisitor(String::new());
			event.record(&mut visitor);
			self.events
				.lock()
				.unwrap()
				.push((*event.metadata().level(), visitor.0));
		}

		fn enter(&self, _span: &Id) {}

		fn exit(&self, _span: &Id) {}
	}

	fn capture(f: impl FnOnce()) -> Vec<(Level, String)> {
		let events: Recorded = Arc::default();
		let recorder = Recorder {
			events: Arc::clone(&events),
		};
		tracing::subscriber::with_default(recorder, f);
		events.lock().unwrap().clone()
	}

	#[rstest]
	fn test_macros_emit_at_their_level() {
		// Act
		let events = capture(|| {
			info_log!("mounted {}", "signup");
			warn_log!("attribute `{}` has an unexpected value", "autocomplete");
			error_log!("failed");
		});

		// Assert
		assert_eq!(
			events,
			vec![
				(Level::INFO, "mounted signup".to_string()),
				(
					Level::WARN,
					"attribute `autocomplete` has an unexpected value".to_string()
				),
				(Level::ERROR, "failed".to_string()),
			]
		);
	}

	#[cfg(not(feature = "debug-hooks"))]
	#[rstest]
	fn test_debug_log_is_silent_without_feature() {
		let events = capture(|| crate::debug_log!("walk pass bound {} fields", 3));

		assert!(events.is_empty());
	}
}
