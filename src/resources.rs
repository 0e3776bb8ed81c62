//! Declarative resource adapters for Zendesk OAuth clients and tokens.
//!
//! Both adapters follow the same lifecycle: create issues one POST and writes the
//! server-assigned id back into state; read refreshes state and drops the resource when the
//! API answers `404`; update always fails because the API cannot modify either object; delete
//! issues one DELETE. Failures never escape as errors, they become diagnostics on the
//! response.

pub mod oauth_client;
pub mod oauth_token;

pub use oauth_client::*;
pub use oauth_token::*;

// self
use crate::{
	_prelude::*,
	api::ApiClient,
	auth::IdentifierError,
	framework::{AttributePath, ConfigureRequest, ConfigureResponse, Diagnostics},
	obs,
};

/// API client slot shared by both adapters.
#[derive(Clone, Debug, Default)]
struct ClientSlot(Option<Arc<ApiClient>>);
impl ClientSlot {
	fn configure(&mut self, request: ConfigureRequest) -> ConfigureResponse {
		let mut response = ConfigureResponse::default();
		// Provider not configured yet; the framework calls again once it is.
		let Some(data) = request.provider_data else {
			return response;
		};

		match data.downcast::<ApiClient>() {
			Some(client) => self.0 = Some(client),
			None => response.diagnostics.add_error(
				"Unexpected Resource Configure Type",
				format!(
					"Expected ApiClient, got: {}. Please report this issue to the provider developers.",
					data.type_name()
				),
			),
		}

		response
	}

	fn get(&self, diagnostics: &mut Diagnostics) -> Option<&ApiClient> {
		if self.0.is_none() {
			diagnostics.add_error(
				"Unconfigured API Client",
				"Expected a configured Zendesk API client. Please report this issue to the provider developers.",
			);
		}

		self.0.as_deref()
	}
}

/// Unwraps a required plan attribute, reporting it when absent.
fn require<T>(value: Option<T>, attribute: &str, diagnostics: &mut Diagnostics) -> Option<T> {
	if value.is_none() {
		diagnostics.add_attribute_error(
			AttributePath::root(attribute),
			"Missing Required Attribute",
			format!("The `{attribute}` attribute must be set."),
		);
	}

	value
}

/// Parses a stored identifier, reporting malformed values before any network call.
fn parse_id<I>(raw: Option<&str>, summary: &str, noun: &str, diagnostics: &mut Diagnostics) -> Option<I>
where
	I: FromStr<Err = IdentifierError>,
{
	match raw.unwrap_or_default().parse() {
		Ok(id) => Some(id),
		Err(err) => {
			diagnostics.add_error(summary, format!("Could not parse {noun}: {err}"));

			None
		},
	}
}

fn report_drift(resource: &'static str, id: &str) {
	obs::trace_drift(resource, id);
	obs::record_drift(resource);
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		auth::{Credentials, OAuthClientId},
		framework::ProviderData,
	};

	#[test]
	fn configure_rejects_foreign_provider_data() {
		let mut slot = ClientSlot::default();
		let response = slot.configure(ConfigureRequest { provider_data: Some(ProviderData::new(42_u8)) });

		assert!(response.diagnostics.has_error());
		assert!(slot.0.is_none());
	}

	#[test]
	fn configure_without_provider_data_is_a_noop() {
		let mut slot = ClientSlot::default();
		let response = slot.configure(ConfigureRequest::default());

		assert!(response.diagnostics.is_empty());

		let mut diagnostics = Diagnostics::default();

		assert!(slot.get(&mut diagnostics).is_none());
		assert_eq!(diagnostics.iter().next().map(|d| d.summary.as_str()), Some("Unconfigured API Client"));
	}

	#[test]
	fn configure_accepts_api_client() {
		let client = ApiClient::new(Credentials::new("acme", "a@acme.test", "t"))
			.expect("Client fixture should build.");
		let mut slot = ClientSlot::default();
		let response = slot.configure(ConfigureRequest { provider_data: Some(ProviderData::new(client)) });
		let mut diagnostics = Diagnostics::default();

		assert!(response.diagnostics.is_empty());
		assert!(slot.get(&mut diagnostics).is_some());
		assert!(diagnostics.is_empty());
	}

	#[test]
	fn parse_id_reports_malformed_values() {
		let mut diagnostics = Diagnostics::default();
		let id: Option<OAuthClientId> =
			parse_id(Some("abc"), "Error Parsing OAuth Client ID", "OAuth client ID", &mut diagnostics);

		assert!(id.is_none());
		assert!(diagnostics.has_error());

		let id: Option<OAuthClientId> =
			parse_id(Some("12"), "Error Parsing OAuth Client ID", "OAuth client ID", &mut diagnostics);

		assert_eq!(id.map(OAuthClientId::get), Some(12));
	}

	#[test]
	fn require_reports_the_attribute() {
		let mut diagnostics = Diagnostics::default();

		assert_eq!(require(None::<String>, "name", &mut diagnostics), None);
		assert_eq!(
			diagnostics.iter().next().and_then(|d| d.attribute.as_ref()).map(AttributePath::name),
			Some("name")
		);
	}
}
