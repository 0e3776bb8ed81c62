//! Zendesk account credentials and the Basic authorization header derived from them.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::header::HeaderValue;
// self
use crate::{_prelude::*, auth::TokenSecret, error::ConfigError};

/// Credentials used to address and authenticate against one Zendesk account.
///
/// Zendesk API-token authentication is HTTP Basic with the username `{email}/token` and the
/// API token as password. Presence is checked by the provider configuration layer; this type
/// performs no further validation.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	/// Account subdomain (`acme` in `acme.zendesk.com`).
	pub subdomain: String,
	/// Email address of the agent that owns the API token.
	pub email: String,
	/// API token; never logged.
	pub api_token: TokenSecret,
}
impl Credentials {
	/// Creates a credential set.
	pub fn new(
		subdomain: impl Into<String>,
		email: impl Into<String>,
		api_token: impl Into<String>,
	) -> Self {
		Self {
			subdomain: subdomain.into(),
			email: email.into(),
			api_token: TokenSecret::new(api_token),
		}
	}

	/// Basic-auth username for API-token authentication.
	pub fn username(&self) -> String {
		format!("{}/token", self.email)
	}

	/// Builds the sensitive `Authorization` header value.
	pub fn authorization_header(&self) -> Result<HeaderValue, ConfigError> {
		let raw = format!("{}:{}", self.username(), self.api_token.expose());
		let mut value = HeaderValue::try_from(format!("Basic {}", STANDARD.encode(raw)))
			.map_err(|source| ConfigError::InvalidCredentials { source })?;

		value.set_sensitive(true);

		Ok(value)
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("subdomain", &self.subdomain)
			.field("email", &self.email)
			.field("api_token", &self.api_token)
			.finish()
	}
}
