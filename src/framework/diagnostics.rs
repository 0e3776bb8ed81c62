//! User-facing diagnostics accumulated while the framework drives an operation.

// self
use crate::_prelude::*;

/// Diagnostic severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
	/// The operation failed.
	Error,
	/// The operation succeeded but the operator should take note.
	Warning,
}

/// Path to a single top-level attribute.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributePath(String);
impl AttributePath {
	/// Path to the named root attribute.
	pub fn root(name: impl Into<String>) -> Self {
		Self(name.into())
	}

	/// Attribute name.
	pub fn name(&self) -> &str {
		&self.0
	}
}
impl Display for AttributePath {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

/// Structured, non-fatal error or warning surfaced to the operator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
	/// Severity.
	pub severity: Severity,
	/// Short summary line.
	pub summary: String,
	/// Detailed explanation.
	pub detail: String,
	/// Attribute the diagnostic refers to, if any.
	pub attribute: Option<AttributePath>,
}
impl Diagnostic {
	/// Creates an error diagnostic.
	pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
		Self {
			severity: Severity::Error,
			summary: summary.into(),
			detail: detail.into(),
			attribute: None,
		}
	}

	/// Creates a warning diagnostic.
	pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
		Self { severity: Severity::Warning, ..Self::error(summary, detail) }
	}

	/// Attaches the attribute the diagnostic refers to.
	pub fn with_attribute(mut self, path: AttributePath) -> Self {
		self.attribute = Some(path);

		self
	}

	/// Returns true for error severity.
	pub fn is_error(&self) -> bool {
		self.severity == Severity::Error
	}
}
impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let label = match self.severity {
			Severity::Error => "Error",
			Severity::Warning => "Warning",
		};

		match &self.attribute {
			Some(path) => write!(f, "{label}: {} [{path}]: {}", self.summary, self.detail),
			None => write!(f, "{label}: {}: {}", self.summary, self.detail),
		}
	}
}

/// Ordered collection of diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);
impl Diagnostics {
	/// Appends a diagnostic.
	pub fn push(&mut self, diagnostic: Diagnostic) {
		self.0.push(diagnostic);
	}

	/// Appends an error diagnostic.
	pub fn add_error(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
		self.push(Diagnostic::error(summary, detail));
	}

	/// Appends an error diagnostic tied to an attribute.
	pub fn add_attribute_error(
		&mut self,
		path: AttributePath,
		summary: impl Into<String>,
		detail: impl Into<String>,
	) {
		self.push(Diagnostic::error(summary, detail).with_attribute(path));
	}

	/// Appends a warning diagnostic.
	pub fn add_warning(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
		self.push(Diagnostic::warning(summary, detail));
	}

	/// Moves every diagnostic from `other` into `self`.
	pub fn append(&mut self, other: Diagnostics) {
		self.0.extend(other.0);
	}

	/// Returns true if any diagnostic has error severity.
	pub fn has_error(&self) -> bool {
		self.0.iter().any(Diagnostic::is_error)
	}

	/// Iterator over error diagnostics.
	pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
		self.0.iter().filter(|diagnostic| diagnostic.is_error())
	}

	/// Iterator over all diagnostics.
	pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
		self.0.iter()
	}

	/// Number of diagnostics.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if nothing was reported.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl From<Diagnostic> for Diagnostics {
	fn from(value: Diagnostic) -> Self {
		Self(vec![value])
	}
}
impl Extend<Diagnostic> for Diagnostics {
	fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
		self.0.extend(iter);
	}
}
impl IntoIterator for Diagnostics {
	type IntoIter = std::vec::IntoIter<Diagnostic>;
	type Item = Diagnostic;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}
