//! Attribute declarations a resource or provider advertises to the framework.

// self
use crate::_prelude::*;

/// Errors raised while validating a schema.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum SchemaError {
	/// The attribute is neither required, optional, nor computed.
	#[error("Attribute `{name}` must be required, optional, or computed.")]
	Unconfigurable {
		/// Attribute name.
		name: String,
	},
	/// The attribute is required and also optional or computed.
	#[error("Attribute `{name}` cannot be required and also optional or computed.")]
	ConflictingRequirement {
		/// Attribute name.
		name: String,
	},
	/// `UseStateForUnknown` only makes sense for computed attributes.
	#[error("Attribute `{name}` uses state for unknown values but is not computed.")]
	StateForUnknownWithoutComputed {
		/// Attribute name.
		name: String,
	},
}

/// Value type carried by an attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
	/// UTF-8 string.
	String,
	/// Ordered list of strings.
	StringList,
}

/// Plan-time behaviors attached to an attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanModifier {
	/// Keep the prior state value instead of planning an unknown (stable once known).
	UseStateForUnknown,
	/// Any change to the attribute plans a delete-then-create replacement.
	RequiresReplace,
}

/// Single attribute declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
	/// Human-readable description.
	pub description: String,
	/// Value type.
	pub ty: AttributeType,
	/// Must be set in configuration.
	pub required: bool,
	/// May be set in configuration.
	pub optional: bool,
	/// Populated by the provider.
	pub computed: bool,
	/// Hidden from plan output and logs.
	pub sensitive: bool,
	/// Plan-time behaviors.
	pub plan_modifiers: Vec<PlanModifier>,
}
impl Attribute {
	/// Declares a string attribute with no requirement flags set.
	pub fn string(description: impl Into<String>) -> Self {
		Self::of(AttributeType::String, description)
	}

	/// Declares a list-of-strings attribute with no requirement flags set.
	pub fn string_list(description: impl Into<String>) -> Self {
		Self::of(AttributeType::StringList, description)
	}

	fn of(ty: AttributeType, description: impl Into<String>) -> Self {
		Self {
			description: description.into(),
			ty,
			required: false,
			optional: false,
			computed: false,
			sensitive: false,
			plan_modifiers: Vec::new(),
		}
	}

	/// Marks the attribute as required.
	pub fn required(mut self) -> Self {
		self.required = true;

		self
	}

	/// Marks the attribute as optional.
	pub fn optional(mut self) -> Self {
		self.optional = true;

		self
	}

	/// Marks the attribute as computed.
	pub fn computed(mut self) -> Self {
		self.computed = true;

		self
	}

	/// Marks the attribute as sensitive.
	pub fn sensitive(mut self) -> Self {
		self.sensitive = true;

		self
	}

	/// Keeps the prior state value once known.
	pub fn use_state_for_unknown(self) -> Self {
		self.plan_modifier(PlanModifier::UseStateForUnknown)
	}

	/// Forces replacement when the value changes.
	pub fn requires_replace(self) -> Self {
		self.plan_modifier(PlanModifier::RequiresReplace)
	}

	fn plan_modifier(mut self, modifier: PlanModifier) -> Self {
		if !self.plan_modifiers.contains(&modifier) {
			self.plan_modifiers.push(modifier);
		}

		self
	}

	/// Returns true if the attribute carries `modifier`.
	pub fn has_plan_modifier(&self, modifier: PlanModifier) -> bool {
		self.plan_modifiers.contains(&modifier)
	}

	fn validate(&self, name: &str) -> Result<(), SchemaError> {
		if !self.required && !self.optional && !self.computed {
			return Err(SchemaError::Unconfigurable { name: name.to_owned() });
		}
		if self.required && (self.optional || self.computed) {
			return Err(SchemaError::ConflictingRequirement { name: name.to_owned() });
		}
		if self.has_plan_modifier(PlanModifier::UseStateForUnknown) && !self.computed {
			return Err(SchemaError::StateForUnknownWithoutComputed { name: name.to_owned() });
		}

		Ok(())
	}
}

/// Attribute set advertised by a resource or provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
	/// Human-readable description.
	pub description: String,
	/// Attributes keyed by name.
	pub attributes: BTreeMap<String, Attribute>,
}
impl Schema {
	/// Creates an empty schema.
	pub fn new(description: impl Into<String>) -> Self {
		Self { description: description.into(), attributes: BTreeMap::new() }
	}

	/// Adds (or replaces) an attribute.
	pub fn attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
		self.attributes.insert(name.into(), attribute);

		self
	}

	/// Looks up an attribute by name.
	pub fn get(&self, name: &str) -> Option<&Attribute> {
		self.attributes.get(name)
	}

	/// Validates every attribute's flag combination.
	pub fn validate(&self) -> Result<(), SchemaError> {
		self.attributes.iter().try_for_each(|(name, attribute)| attribute.validate(name))
	}
}
