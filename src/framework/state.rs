//! Plan and state containers exchanged with the framework.
//!
//! A [`State`] is either null (the resource does not exist) or an object of attribute values.
//! Adapters read it into a typed model with [`State::get`] and write a model back with
//! [`State::set`]; conversion failures become diagnostics instead of panics. Attributes whose
//! value is not known until apply are tracked as unknown and read back as `null`.

// crates.io
use serde_json::{Map, Value};
// self
use crate::{
	_prelude::*,
	framework::{AttributePath, Diagnostic},
};

/// Attribute container for plans, prior state, and new state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
	values: Option<Map<String, Value>>,
	unknown: BTreeSet<String>,
}
impl State {
	/// Null state: the resource is absent.
	pub fn null() -> Self {
		Self::default()
	}

	/// Builds a state from a JSON object (or `null`).
	pub fn from_value(value: Value) -> Result<Self, Diagnostic> {
		match value {
			Value::Null => Ok(Self::null()),
			Value::Object(values) => Ok(Self { values: Some(values), unknown: BTreeSet::new() }),
			other => Err(Diagnostic::error(
				"Value Conversion Error",
				format!("Expected an object of attribute values, got: {other}."),
			)),
		}
	}

	/// Builds a state from a typed model.
	pub fn from_model<M>(model: &M) -> Result<Self, Diagnostic>
	where
		M: ?Sized + Serialize,
	{
		let mut state = Self::null();

		state.set(model)?;

		Ok(state)
	}

	/// Decodes the attribute values into a typed model.
	///
	/// A null state decodes from an empty object, so models should give every attribute a
	/// default.
	pub fn get<M>(&self) -> Result<M, Diagnostic>
	where
		M: DeserializeOwned,
	{
		let object = Value::Object(self.values.clone().unwrap_or_default());

		serde_path_to_error::deserialize(object).map_err(|err| {
			Diagnostic::error(
				"Value Conversion Error",
				format!(
					"Could not read attribute `{}`: {}. Please report this issue to the provider developers.",
					err.path(),
					err.inner()
				),
			)
		})
	}

	/// Replaces every attribute with the serialized model; all written attributes are known.
	pub fn set<M>(&mut self, model: &M) -> Result<(), Diagnostic>
	where
		M: ?Sized + Serialize,
	{
		let value = serde_json::to_value(model).map_err(|err| {
			Diagnostic::error(
				"Value Conversion Error",
				format!("Could not write state: {err}. Please report this issue to the provider developers."),
			)
		})?;

		match value {
			Value::Object(values) => {
				self.values = Some(values);
				self.unknown.clear();

				Ok(())
			},
			other => Err(Diagnostic::error(
				"Value Conversion Error",
				format!(
					"Expected an object of attribute values, got: {other}. Please report this issue to the provider developers."
				),
			)),
		}
	}

	/// Sets one attribute, creating the object if the state was null.
	pub fn set_attribute(&mut self, path: &AttributePath, value: impl Into<Value>) {
		self.unknown.remove(path.name());
		self.values.get_or_insert_with(Map::new).insert(path.name().to_owned(), value.into());
	}

	/// Returns the raw value of one attribute.
	pub fn attribute(&self, name: &str) -> Option<&Value> {
		self.values.as_ref()?.get(name)
	}

	/// Marks an attribute as unknown until apply; its value reads back as `null`.
	pub fn mark_unknown(&mut self, path: &AttributePath) {
		self.values.get_or_insert_with(Map::new).insert(path.name().to_owned(), Value::Null);
		self.unknown.insert(path.name().to_owned());
	}

	/// Returns true if the attribute is unknown.
	pub fn is_unknown(&self, name: &str) -> bool {
		self.unknown.contains(name)
	}

	/// Drops the resource; the framework stops tracking it.
	pub fn remove_resource(&mut self) {
		self.values = None;
		self.unknown.clear();
	}

	/// Returns true if the state is null (resource absent or removed).
	pub fn is_null(&self) -> bool {
		self.values.is_none()
	}

	/// Returns the JSON representation (`null` when the resource is absent).
	pub fn to_value(&self) -> Value {
		self.values.clone().map(Value::Object).unwrap_or(Value::Null)
	}
}
