//! Provider entry point: metadata, configuration schema, credential resolution, and the
//! resource factories handed to the framework.
//!
//! Configuration resolves `subdomain`, `email`, and `api_token` from the provider block,
//! falling back to `ZENDESK_SUBDOMAIN`, `ZENDESK_EMAIL`, and `ZENDESK_API_TOKEN`. A successful
//! configure yields [`ProviderData`] wrapping a shared [`ApiClient`]; every resource receives
//! the same instance through [`Resource::configure`](crate::framework::Resource::configure).

pub mod config;

pub use config::*;

// self
use crate::{
	_prelude::*,
	api::ApiClient,
	framework::{Attribute, Diagnostics, ProviderData, ResourceFactory, Schema, State},
	resources::{OAuthClientResource, OAuthTokenResource},
};

/// Provider type name; prefix of every resource type name.
pub const TYPE_NAME: &str = "zendesk";

/// Provider metadata reported to the framework.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderMetadata {
	/// Prefix of every resource type name.
	pub type_name: String,
	/// Provider release version.
	pub version: String,
}

/// Configure request carrying the provider block.
#[derive(Clone, Debug, Default)]
pub struct ConfigureProviderRequest {
	/// Provider configuration values.
	pub config: State,
}

/// Configure response; `provider_data` is set only when no error was reported.
#[derive(Clone, Debug, Default)]
pub struct ConfigureProviderResponse {
	/// Shared data handed to every resource.
	pub provider_data: Option<ProviderData>,
	/// Reported problems.
	pub diagnostics: Diagnostics,
}

/// Zendesk provider.
#[derive(Clone, Debug)]
pub struct ZendeskProvider {
	version: String,
}
impl ZendeskProvider {
	/// Creates the provider for a release version (`dev`, `test`, or a semver string).
	pub fn new(version: impl Into<String>) -> Self {
		Self { version: version.into() }
	}

	/// Type name and version.
	pub fn metadata(&self) -> ProviderMetadata {
		ProviderMetadata { type_name: TYPE_NAME.into(), version: self.version.clone() }
	}

	/// Provider block schema.
	pub fn schema(&self) -> Schema {
		Schema::new("Interact with Zendesk.")
			.attribute(
				"subdomain",
				Attribute::string("The Zendesk subdomain (e.g. `company` in `company.zendesk.com`).")
					.required(),
			)
			.attribute(
				"email",
				Attribute::string("The email address associated with the Zendesk account.").required(),
			)
			.attribute(
				"api_token",
				Attribute::string("The API token used for authentication.").required().sensitive(),
			)
	}

	/// Configures the provider using the process environment as fallback.
	pub fn configure(&self, request: ConfigureProviderRequest) -> ConfigureProviderResponse {
		self.configure_with_env(request, |key| std::env::var(key).ok())
	}

	/// Configures the provider with an explicit environment lookup.
	pub fn configure_with_env<F>(
		&self,
		request: ConfigureProviderRequest,
		lookup: F,
	) -> ConfigureProviderResponse
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut response = ConfigureProviderResponse::default();
		let credentials = match resolve_credentials(&request.config, lookup) {
			Ok(credentials) => credentials,
			Err(diagnostics) => {
				response.diagnostics = diagnostics;

				return response;
			},
		};

		match ApiClient::new(credentials) {
			Ok(client) => response.provider_data = Some(ProviderData::new(client)),
			Err(err) => response.diagnostics.add_error(
				"Unable to Create Zendesk API Client",
				format!("An unexpected error occurred when creating the Zendesk API client: {err}"),
			),
		}

		response
	}

	/// Factories for every resource the provider serves.
	pub fn resources(&self) -> Vec<ResourceFactory> {
		vec![OAuthClientResource::boxed as ResourceFactory, OAuthTokenResource::boxed]
	}
}
impl Default for ZendeskProvider {
	fn default() -> Self {
		Self::new("dev")
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	fn request(value: serde_json::Value) -> ConfigureProviderRequest {
		ConfigureProviderRequest {
			config: State::from_value(value).expect("Config fixture should be an object."),
		}
	}

	#[test]
	fn schema_marks_api_token_sensitive() {
		let schema = ZendeskProvider::default().schema();

		assert_eq!(schema.validate(), Ok(()));
		assert!(schema.get("api_token").is_some_and(|a| a.sensitive && a.required));
		assert!(schema.get("subdomain").is_some_and(|a| !a.sensitive));
	}

	#[test]
	fn resource_type_names_use_provider_prefix() {
		let provider = ZendeskProvider::new("1.2.3");
		let names: Vec<_> =
			provider.resources().iter().map(|factory| factory().type_name(TYPE_NAME)).collect();

		assert_eq!(provider.metadata().version, "1.2.3");
		assert_eq!(names, ["zendesk_oauth_client", "zendesk_oauth_token"]);
	}

	#[test]
	fn configure_hands_out_an_api_client() {
		let response = ZendeskProvider::default().configure_with_env(
			request(json!({ "subdomain": "acme", "email": "a@acme.test" })),
			|key| (key == ENV_API_TOKEN).then(|| "t0ken".to_owned()),
		);

		assert!(response.diagnostics.is_empty(), "{:?}", response.diagnostics);

		let client = response
			.provider_data
			.and_then(|data| data.downcast::<ApiClient>())
			.expect("Provider data should hold an API client.");

		assert_eq!(client.base_url().as_str(), "https://acme.zendesk.com/api/v2/");
		assert_eq!(client.credentials().api_token.expose(), "t0ken");
	}

	#[test]
	fn configure_without_credentials_yields_no_data() {
		let response = ZendeskProvider::default().configure_with_env(request(json!({})), |_| None);

		assert!(response.provider_data.is_none());
		assert_eq!(response.diagnostics.errors().count(), 3);
	}

	#[test]
	fn invalid_subdomain_is_reported() {
		let response = ZendeskProvider::default().configure_with_env(
			request(json!({ "subdomain": "not a host", "email": "a@acme.test", "api_token": "t" })),
			|_| None,
		);

		assert!(response.provider_data.is_none());
		assert!(
			response.diagnostics.iter().any(|d| d.summary == "Unable to Create Zendesk API Client")
		);
	}
}
