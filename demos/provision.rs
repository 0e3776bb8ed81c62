//! Provisions an OAuth client and a token for it through the resource adapters, against a
//! local mock of the Zendesk API, then tears both down again.

// crates.io
use color_eyre::{Result, eyre::eyre};
use httpmock::prelude::*;
use serde_json::json;
// self
use zendesk_oauth_provider::{
	api::ApiClient,
	auth::Credentials,
	framework::{
		AttributePath, ConfigureRequest, CreateRequest, DeleteRequest, Diagnostics, ProviderData,
		ReadRequest, Resource, State,
	},
	http::HttpClient,
	provider::{TYPE_NAME, ZendeskProvider},
	resources::{OAuthClientModel, OAuthTokenModel},
	url::Url,
};

fn check(diagnostics: &Diagnostics) -> Result<()> {
	match diagnostics.errors().next() {
		Some(diagnostic) => Err(eyre!("{diagnostic}")),
		None => Ok(()),
	}
}

fn plan(value: serde_json::Value, unknown: &[&str]) -> Result<State> {
	let mut plan = State::from_value(value).map_err(|d| eyre!("{d}"))?;

	for name in unknown {
		plan.mark_unknown(&AttributePath::root(*name));
	}

	Ok(plan)
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v2/oauth/clients.json");
			then.status(201).header("content-type", "application/json").body(
				"{\"client\":{\"id\":1001,\"name\":\"Reporting\",\"identifier\":\"reporting\",\"kind\":\"confidential\",\"description\":\"Nightly exports\"}}",
			);
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v2/oauth/tokens.json");
			then.status(201).header("content-type", "application/json").body(
				"{\"token\":{\"id\":2002,\"client_id\":1001,\"full_token\":\"demo-full-token\",\"scopes\":[\"tickets:read\"],\"expires_at\":\"2030-12-31T23:59:59Z\"}}",
			);
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v2/oauth/tokens/2002.json");
			then.status(404);
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(DELETE).path("/api/v2/oauth/clients/1001.json");
			then.status(204);
		})
		.await;

	let client = ApiClient::with_http_client(
		Credentials::new("acme", "admin@acme.test", "demo-api-token"),
		Url::parse(&server.url("/api/v2/"))?,
		HttpClient::default(),
	)?;
	let data = ProviderData::new(client);
	let provider = ZendeskProvider::new(env!("CARGO_PKG_VERSION"));
	let mut resources = provider.resources().into_iter().map(|factory| factory()).collect::<Vec<_>>();

	for resource in &mut resources {
		check(&resource.configure(ConfigureRequest { provider_data: Some(data.clone()) }).diagnostics)?;
	}

	let [oauth_client, oauth_token] = resources.as_slice() else {
		return Err(eyre!("Expected exactly two resources."));
	};
	let created_client = oauth_client
		.create(CreateRequest {
			plan: plan(
				json!({
					"name": "Reporting",
					"identifier": "reporting",
					"kind": "confidential",
					"description": "Nightly exports",
				}),
				&["id"],
			)?,
		})
		.await;

	check(&created_client.diagnostics)?;

	let client_model: OAuthClientModel =
		created_client.state.get().map_err(|d| eyre!("{d}"))?;

	println!(
		"{} created with id {}",
		oauth_client.type_name(TYPE_NAME),
		client_model.id.as_deref().unwrap_or_default()
	);

	let created_token = oauth_token
		.create(CreateRequest {
			plan: plan(
				json!({
					"client_id": client_model.id,
					"scopes": ["tickets:read"],
					"expires_at": "2030-12-31T23:59:59Z",
				}),
				&["id", "full_token"],
			)?,
		})
		.await;

	check(&created_token.diagnostics)?;

	let token_model: OAuthTokenModel = created_token.state.get().map_err(|d| eyre!("{d}"))?;

	println!(
		"{} created with id {} (full token {:?})",
		oauth_token.type_name(TYPE_NAME),
		token_model.id.as_deref().unwrap_or_default(),
		token_model.full_token,
	);

	// The mock answers 404 here, as if the token was revoked in the Zendesk admin UI.
	let refreshed = oauth_token.read(ReadRequest { state: created_token.state }).await;

	check(&refreshed.diagnostics)?;
	println!("token still tracked after refresh: {}", !refreshed.state.is_null());

	let deleted = oauth_client.delete(DeleteRequest { state: created_client.state }).await;

	check(&deleted.diagnostics)?;
	println!("client deleted");

	Ok(())
}
