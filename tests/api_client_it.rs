mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use common::*;
use zendesk_oauth_provider::{
	api::{NewOAuthClient, NewOAuthToken},
	auth::{OAuthClientId, OAuthTokenId},
	error::Error,
};

const CLIENT_BODY: &str = "{\"client\":{\"id\":1001,\"user_id\":5,\"name\":\"Basic Client\",\"identifier\":\"basic_client\",\"kind\":\"public\",\"description\":null,\"secret\":\"s3cret\"}}";
const TOKEN_BODY: &str = "{\"token\":{\"id\":2002,\"client_id\":1001,\"user_id\":5,\"token\":\"abcd\",\"full_token\":\"abcd0123456789\",\"scopes\":[\"read\"],\"expires_at\":null}}";

fn client_id(raw: i64) -> OAuthClientId {
	OAuthClientId::new(raw).expect("Client id fixture should be positive.")
}

fn token_id(raw: i64) -> OAuthTokenId {
	OAuthTokenId::new(raw).expect("Token id fixture should be positive.")
}

#[tokio::test]
async fn create_client_posts_envelope_with_basic_auth() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v2/oauth/clients.json")
				.header("authorization", authorization())
				.header("content-type", "application/json")
				.json_body(json!({
					"client": { "name": "Basic Client", "identifier": "basic_client", "kind": "public" }
				}));
			then.status(201).header("content-type", "application/json").body(CLIENT_BODY);
		})
		.await;
	let created = api_client(&server)
		.create_oauth_client(&NewOAuthClient::new("Basic Client", "basic_client", "public"))
		.await
		.expect("Create should succeed on 201.");

	mock.assert_async().await;

	assert_eq!(created.id.get(), 1001);
	assert_eq!(created.name, "Basic Client");
	assert_eq!(created.description, "");
}

#[tokio::test]
async fn create_client_forwards_error_body_verbatim() {
	let server = MockServer::start_async().await;
	let body = "{\"error\":\"RecordInvalid\",\"description\":\"Record validation errors\",\"details\":{\"identifier\":[{\"description\":\"Identifier: has already been taken\"}]}}";
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v2/oauth/clients.json");
			then.status(422).header("content-type", "application/json").body(body);
		})
		.await;
	let err = api_client(&server)
		.create_oauth_client(&NewOAuthClient::new("Basic Client", "basic_client", "public"))
		.await
		.expect_err("422 must fail the create.");

	mock.assert_async().await;

	assert_eq!(err.status(), Some(422));
	assert!(err.to_string().contains(body), "{err}");
}

#[tokio::test]
async fn create_client_rejects_200_as_unexpected() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v2/oauth/clients.json");
			then.status(200).header("content-type", "application/json").body(CLIENT_BODY);
		})
		.await;

	let err = api_client(&server)
		.create_oauth_client(&NewOAuthClient::new("Basic Client", "basic_client", "public"))
		.await
		.expect_err("Only 201 counts as a successful create.");

	assert!(matches!(err, Error::UnexpectedStatus { status: 200, .. }));
}

#[tokio::test]
async fn read_client_distinguishes_not_found_from_errors() {
	let server = MockServer::start_async().await;
	let missing = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v2/oauth/clients/999999.json");
			then.status(404).header("content-type", "application/json").body("{\"error\":\"RecordNotFound\"}");
		})
		.await;
	let broken = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v2/oauth/clients/5.json");
			then.status(500).body("upstream exploded");
		})
		.await;
	let client = api_client(&server);
	let found =
		client.read_oauth_client(client_id(999999)).await.expect("404 must not be an error.");

	assert!(found.is_none());

	let err = client.read_oauth_client(client_id(5)).await.expect_err("500 must be an error.");

	assert!(matches!(err, Error::UnexpectedStatus { status: 500, ref body, .. } if body == "upstream exploded"));

	missing.assert_async().await;
	broken.assert_async().await;
}

#[tokio::test]
async fn read_client_reports_malformed_body() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v2/oauth/clients/1001.json");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"client\":{\"id\":\"not-a-number\"}}");
		})
		.await;

	let err = api_client(&server)
		.read_oauth_client(client_id(1001))
		.await
		.expect_err("A malformed body must not decode silently.");

	assert!(matches!(err, Error::Decode { status: 200, .. }));
	assert!(err.to_string().contains("client.id"), "{err}");
}

#[tokio::test]
async fn reads_are_idempotent() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v2/oauth/clients/1001.json");
			then.status(200).header("content-type", "application/json").body(CLIENT_BODY);
		})
		.await;
	let client = api_client(&server);
	let first = client.read_oauth_client(client_id(1001)).await.expect("First read should succeed.");
	let second =
		client.read_oauth_client(client_id(1001)).await.expect("Second read should succeed.");

	assert!(first.is_some());
	assert_eq!(first, second);

	mock.assert_calls_async(2).await;
}

#[tokio::test]
async fn delete_then_read_yields_not_found() {
	let server = MockServer::start_async().await;
	let delete = server
		.mock_async(|when, then| {
			when.method(DELETE)
				.path("/api/v2/oauth/clients/1001.json")
				.header("authorization", authorization());
			then.status(204);
		})
		.await;
	let read = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v2/oauth/clients/1001.json");
			then.status(404);
		})
		.await;
	let client = api_client(&server);

	client.delete_oauth_client(client_id(1001)).await.expect("204 delete should succeed.");

	let after = client.read_oauth_client(client_id(1001)).await.expect("404 must not be an error.");

	assert!(after.is_none());

	delete.assert_async().await;
	read.assert_async().await;
}

#[tokio::test]
async fn delete_requires_no_content() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(DELETE).path("/api/v2/oauth/tokens/2002.json");
			then.status(404).body("{\"error\":\"RecordNotFound\"}");
		})
		.await;

	let err = api_client(&server)
		.delete_oauth_token(token_id(2002))
		.await
		.expect_err("Deleting requires 204.");

	assert_eq!(err.status(), Some(404));
	assert!(err.to_string().contains("RecordNotFound"));
}

#[tokio::test]
async fn create_token_returns_full_token_once() {
	let server = MockServer::start_async().await;
	let create = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v2/oauth/tokens.json")
				.header("authorization", authorization())
				.json_body(json!({ "token": { "client_id": 1001, "scopes": ["read"] } }));
			then.status(201).header("content-type", "application/json").body(TOKEN_BODY);
		})
		.await;
	let read = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v2/oauth/tokens/2002.json");
			then.status(200).header("content-type", "application/json").body(
				"{\"token\":{\"id\":2002,\"client_id\":1001,\"user_id\":5,\"token\":\"abcd\",\"scopes\":[\"read\"],\"expires_at\":null}}",
			);
		})
		.await;
	let client = api_client(&server);
	let created = client
		.create_oauth_token(&NewOAuthToken::new(client_id(1001), ["read"]))
		.await
		.expect("Create should succeed on 201.");

	assert_eq!(created.id.get(), 2002);
	assert_eq!(created.full_token.as_ref().map(|t| t.expose()), Some("abcd0123456789"));
	assert_eq!(created.expires_at, "");

	let read_back = client
		.read_oauth_token(created.id)
		.await
		.expect("Read should succeed.")
		.expect("Token should exist.");

	assert_eq!(read_back.full_token, None);
	assert_eq!(read_back.scopes, ["read"]);

	create.assert_async().await;
	read.assert_async().await;
}

#[tokio::test]
async fn create_token_sends_expiry_when_set() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v2/oauth/tokens.json").json_body(json!({
				"token": {
					"client_id": 1001,
					"scopes": ["read", "write"],
					"expires_at": "2030-12-31T23:59:59Z"
				}
			}));
			then.status(201).header("content-type", "application/json").body(
				"{\"token\":{\"id\":2003,\"client_id\":1001,\"full_token\":\"f\",\"scopes\":[\"read\",\"write\"],\"expires_at\":\"2030-12-31T23:59:59Z\"}}",
			);
		})
		.await;
	let created = api_client(&server)
		.create_oauth_token(
			&NewOAuthToken::new(client_id(1001), ["read", "write"])
				.with_expires_at("2030-12-31T23:59:59Z"),
		)
		.await
		.expect("Create should succeed on 201.");

	mock.assert_async().await;

	assert_eq!(created.expires_at, "2030-12-31T23:59:59Z");
}

#[tokio::test]
async fn transport_failures_surface_as_transport_errors() {
	let client = api_client_at("http://127.0.0.1:1/api/v2/");
	let err = client
		.read_oauth_token(token_id(1))
		.await
		.expect_err("Nothing listens on port 1.");

	assert!(matches!(err, Error::Transport(_)));
	assert_eq!(err.status(), None);
}
