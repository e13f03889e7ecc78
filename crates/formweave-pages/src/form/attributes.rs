//! Form attribute filtering and typed form configuration.
//!
//! A form accepts an arbitrary property set. Only the W3C form attributes
//! listed in [`FORM_ATTRIBUTES`] are forwarded to the rendered `<form>`
//! element; everything else (styling, handlers, host-specific props) is
//! dropped. The filtered result is computed once, when the form is built,
//! and is not recomputed if the caller's properties change afterwards.

use super::error::{FormError, FormResult};
use crate::node::Props;
use crate::warn_log;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The recognized form attributes, in declaration order.
pub const FORM_ATTRIBUTES: [&str; 8] = [
	"accept-charset",
	"action",
	"autocomplete",
	"encrypt",
	"method",
	"name",
	"novalidate",
	"target",
];

/// Returns the subset of `props` whose keys appear in `whitelist`.
pub fn filter_attributes(props: &Props, whitelist: &[&str]) -> Props {
	props
		.iter()
		.filter(|(name, _)| whitelist.contains(&name.as_str()))
		.map(|(name, value)| (name.clone(), value.clone()))
		.collect()
}

/// An attribute value that does not match its declared type.
///
/// These are reported as warnings; the attribute is still forwarded.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AttributeError {
	/// The attribute must be a string.
	#[error("attribute `{name}` must be a string, got {value}")]
	NotAString {
		/// Attribute name.
		name: String,
		/// Offending value.
		value: Value,
	},
	/// The attribute must be one of a fixed set of strings.
	#[error("attribute `{name}` must be one of {allowed:?}, got {value}")]
	InvalidChoice {
		/// Attribute name.
		name: String,
		/// Offending value.
		value: Value,
		/// Accepted values.
		allowed: &'static [&'static str],
	},
}

/// Checks one attribute value against its declared type.
pub fn check_attribute(name: &str, value: &Value) -> Result<(), AttributeError> {
	let allowed = match name {
		"autocomplete" => Some(Autocomplete::VALUES),
		"encrypt" => Some(EncType::VALUES),
		"novalidate" => Some(NoValidate::VALUES),
		_ => None,
	};

	let Some(text) = value.as_str() else {
		return Err(AttributeError::NotAString {
			name: name.to_string(),
			value: value.clone(),
		});
	};

	match allowed {
		Some(allowed) if !allowed.contains(&text) => Err(AttributeError::InvalidChoice {
			name: name.to_string(),
			value: value.clone(),
			allowed,
		}),
		_ => Ok(()),
	}
}

/// Immutable snapshot of a form's recognized attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormAttributes {
	attrs: Props,
}

impl FormAttributes {
	/// Filters `props` down to [`FORM_ATTRIBUTES`].
	///
	/// Values violating their declared type are logged and kept.
	pub fn from_props(props: &Props) -> Self {
		let attributes = Self {
			attrs: filter_attributes(props, &FORM_ATTRIBUTES),
		};
		for error in attributes.check() {
			warn_log!("{}", error);
		}
		attributes
	}

	/// Returns every type violation among the kept attributes.
	pub fn check(&self) -> Vec<AttributeError> {
		self.attrs
			.iter()
			.filter_map(|(name, value)| check_attribute(name, value).err())
			.collect()
	}

	/// Returns the raw value of one attribute.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.attrs.get(name)
	}

	/// Returns one attribute as a string.
	pub fn get_str(&self, name: &str) -> Option<&str> {
		self.attrs.get(name).and_then(Value::as_str)
	}

	/// Returns the `action` attribute.
	pub fn action(&self) -> Option<&str> {
		self.get_str("action")
	}

	/// Returns the `method` attribute.
	pub fn method(&self) -> Option<&str> {
		self.get_str("method")
	}

	/// Returns the `name` attribute.
	pub fn name(&self) -> Option<&str> {
		self.get_str("name")
	}

	/// Returns the filtered attributes.
	pub fn as_props(&self) -> &Props {
		&self.attrs
	}

	/// Returns `true` when no recognized attribute was supplied.
	pub fn is_empty(&self) -> bool {
		self.attrs.is_empty()
	}

	/// Parses the attributes into the typed configuration.
	pub fn config(&self) -> FormResult<FormConfig> {
		serde_json::from_value(Value::Object(self.attrs.clone())).map_err(FormError::InvalidConfig)
	}
}

/// `autocomplete` attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Autocomplete {
	/// `on`
	On,
	/// `off`
	Off,
}

impl Autocomplete {
	const VALUES: &'static [&'static str] = &["on", "off"];
}

/// `encrypt` attribute values (form encoding types).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncType {
	/// `application/x-www-form-urlencoded`
	#[serde(rename = "application/x-www-form-urlencoded")]
	UrlEncoded,
	/// `multipart/form-data`
	#[serde(rename = "multipart/form-data")]
	Multipart,
	/// `text/plain`
	#[serde(rename = "text/plain")]
	TextPlain,
}

impl EncType {
	const VALUES: &'static [&'static str] = &[
		"application/x-www-form-urlencoded",
		"multipart/form-data",
		"text/plain",
	];
}

/// `novalidate` attribute value; the only accepted spelling is `novalidate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoValidate {
	/// `novalidate`
	NoValidate,
}

impl NoValidate {
	const VALUES: &'static [&'static str] = &["novalidate"];
}

/// Typed form configuration surface.
///
/// # Examples
///
/// ```
/// use formweave_pages::form::{Autocomplete, FormConfig};
///
/// let config = FormConfig::from_json(r#"{ "action": "/go", "autocomplete": "off" }"#).unwrap();
/// assert_eq!(config.action.as_deref(), Some("/go"));
/// assert_eq!(config.autocomplete, Some(Autocomplete::Off));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormConfig {
	/// Character encodings accepted by the server.
	#[serde(rename = "accept-charset", default, skip_serializing_if = "Option::is_none")]
	pub accept_charset: Option<String>,
	/// Submission URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub action: Option<String>,
	/// Browser autocompletion.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub autocomplete: Option<Autocomplete>,
	/// Encoding type of the submitted body.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub encrypt: Option<EncType>,
	/// HTTP method.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub method: Option<String>,
	/// Form name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Disables browser validation.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub novalidate: Option<NoValidate>,
	/// Browsing context for the response.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub target: Option<String>,
}

impl FormConfig {
	/// Parses a configuration from JSON.
	pub fn from_json(json: &str) -> FormResult<Self> {
		serde_json::from_str(json).map_err(FormError::InvalidConfig)
	}

	/// Converts the configuration into raw form properties.
	pub fn to_props(&self) -> Props {
		match serde_json::to_value(self) {
			Ok(Value::Object(props)) => props,
			_ => Props::new(),
		}
	}
}
