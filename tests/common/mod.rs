#![allow(dead_code)]

// crates.io
use httpmock::MockServer;
use serde_json::Value;
// self
use zendesk_oauth_provider::{
	api::ApiClient,
	auth::Credentials,
	framework::{AttributePath, ConfigureRequest, ProviderData, Resource, State},
	http::HttpClient,
	url::Url,
};

pub const SUBDOMAIN: &str = "acme";
pub const EMAIL: &str = "agent@acme.test";
pub const API_TOKEN: &str = "t0ken";

pub fn credentials() -> Credentials {
	Credentials::new(SUBDOMAIN, EMAIL, API_TOKEN)
}

/// `Authorization` header value the mock server expects on every request.
pub fn authorization() -> String {
	credentials()
		.authorization_header()
		.expect("Credential fixture should encode.")
		.to_str()
		.expect("Authorization header should be ASCII.")
		.to_owned()
}

pub fn api_client(server: &MockServer) -> ApiClient {
	api_client_at(&server.url("/api/v2/"))
}

pub fn api_client_at(base_url: &str) -> ApiClient {
	let base_url = Url::parse(base_url).expect("Mock API root should parse.");

	ApiClient::with_http_client(credentials(), base_url, HttpClient::default())
		.expect("API client should build against the mock server.")
}

/// Builds a resource adapter that already received the shared API client.
pub fn configured<R>(mut resource: R, client: ApiClient) -> R
where
	R: Resource,
{
	let response =
		resource.configure(ConfigureRequest { provider_data: Some(ProviderData::new(client)) });

	assert!(response.diagnostics.is_empty(), "Configure should succeed: {:?}.", response.diagnostics);

	resource
}

pub fn state(value: Value) -> State {
	State::from_value(value).expect("State fixture should be an object.")
}

/// Plan with the given computed attributes still unknown.
pub fn plan(value: Value, unknown: &[&str]) -> State {
	let mut plan = state(value);

	for name in unknown {
		plan.mark_unknown(&AttributePath::root(*name));
	}

	plan
}

pub fn summaries(diagnostics: &zendesk_oauth_provider::framework::Diagnostics) -> Vec<String> {
	diagnostics.iter().map(|d| d.summary.clone()).collect()
}
