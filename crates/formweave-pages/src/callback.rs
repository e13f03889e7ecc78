//! Callback types shared between the engine and its host.
//!
//! A [`Callback`] is the only thing a field or a host ever holds on to: the
//! field bindings injected by the tree walker and the external submit handler
//! are both callbacks. Field implementations never see the form state itself.
//!
//! ## Example
//!
//! ```ignore
//! use formweave_pages::Callback;
//!
//! let on_submit = Callback::new(|(event, data): (SubmitEvent, FormData)| {
//!     info_log!("submitted {} values", data.len());
//! });
//! ```

use std::sync::Arc;

/// A type-safe, cloneable callback wrapper.
///
/// `Callback` wraps a function in an `Arc`, so clones share one allocation and
/// a clone handed to a field stays valid for as long as the field keeps it.
///
/// ## Type Parameters
///
/// - `Args`: The argument the callback receives (use a tuple for several)
/// - `Ret`: The return type of the callback (defaults to `()`)
///
/// ## Example
///
/// ```ignore
/// use formweave_pages::Callback;
///
/// let double = Callback::new(|x: i32| x * 2);
/// assert_eq!(double.call(21), 42);
/// ```
// Callback struct with conditional Send + Sync bounds for non-WASM targets
#[cfg(target_arch = "wasm32")]
pub struct Callback<Args, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + 'static>,
}

/// A type-safe, cloneable callback wrapper (native version).
///
/// See the WASM version for full documentation.
/// This version requires `Send + Sync` so forms can live on any thread of a
/// server-side renderer.
#[cfg(not(target_arch = "wasm32"))]
pub struct Callback<Args, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + Send + Sync + 'static>,
}

// WASM implementation without Send + Sync bounds
#[cfg(target_arch = "wasm32")]
impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback with the given arguments.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

// Non-WASM implementation with Send + Sync bounds
#[cfg(not(target_arch = "wasm32"))]
impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	///
	/// # Arguments
	///
	/// * `f` - The function or closure to wrap
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback with the given arguments.
	///
	/// # Arguments
	///
	/// * `args` - The arguments to pass to the callback
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Args: 'static> Callback<Args, ()> {
	/// Creates a callback that ignores its arguments.
	pub fn noop() -> Self {
		Self::new(|_| {})
	}
}

impl<Args, Ret> Callback<Args, Ret> {
	/// Returns `true` when both callbacks wrap the same function allocation.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}
