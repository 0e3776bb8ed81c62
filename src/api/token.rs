//! OAuth token records and their create/read/delete operations.

// self
use crate::{
	_prelude::*,
	api::{ApiClient, nullable_string},
	auth::{OAuthClientId, OAuthTokenId, TokenSecret},
	obs::{Observed, Operation},
};

/// OAuth token as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OAuthToken {
	/// Server-assigned identifier.
	pub id: OAuthTokenId,
	/// OAuth client the token was issued for.
	pub client_id: OAuthClientId,
	/// User the token acts on behalf of, when reported.
	#[serde(default)]
	pub user_id: Option<i64>,
	/// Granted scopes, in the order the API lists them.
	#[serde(default)]
	pub scopes: Vec<String>,
	/// Full token value; only present on the creation response.
	#[serde(default)]
	pub full_token: Option<TokenSecret>,
	/// ISO-8601 expiry; empty when the token never expires.
	#[serde(default, deserialize_with = "nullable_string")]
	pub expires_at: String,
}

/// Fields accepted when creating an OAuth token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewOAuthToken {
	/// OAuth client to issue the token for.
	pub client_id: OAuthClientId,
	/// Scopes to grant.
	pub scopes: Vec<String>,
	/// ISO-8601 expiry; omitted from the payload when empty so the token never expires.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub expires_at: String,
}
impl NewOAuthToken {
	/// Creates a non-expiring token payload.
	pub fn new<I, S>(client_id: OAuthClientId, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			client_id,
			scopes: scopes.into_iter().map(Into::into).collect(),
			expires_at: String::new(),
		}
	}

	/// Sets the expiry timestamp.
	pub fn with_expires_at(mut self, expires_at: impl Into<String>) -> Self {
		self.expires_at = expires_at.into();

		self
	}
}

#[derive(Serialize, Deserialize)]
struct TokenEnvelope<T> {
	token: T,
}
impl<T> Observed for TokenEnvelope<T> {}

const TOKENS_PATH: &str = "oauth/tokens.json";

fn token_path(id: OAuthTokenId) -> String {
	format!("oauth/tokens/{id}.json")
}

impl ApiClient {
	/// Issues an OAuth token; succeeds only on `201 Created`.
	///
	/// The returned [`OAuthToken::full_token`] is the only time the secret is available.
	pub async fn create_oauth_token(&self, new: &NewOAuthToken) -> Result<OAuthToken> {
		let envelope: TokenEnvelope<OAuthToken> = self
			.create(Operation::CreateOAuthToken, TOKENS_PATH, &TokenEnvelope { token: new })
			.await?;

		Ok(envelope.token)
	}

	/// Reads an OAuth token; `Ok(None)` means the API answered `404 Not Found`.
	pub async fn read_oauth_token(&self, id: OAuthTokenId) -> Result<Option<OAuthToken>> {
		let envelope: Option<TokenEnvelope<OAuthToken>> =
			self.read(Operation::ReadOAuthToken, &token_path(id)).await?;

		Ok(envelope.map(|envelope| envelope.token))
	}

	/// Revokes an OAuth token; succeeds only on `204 No Content`.
	pub async fn delete_oauth_token(&self, id: OAuthTokenId) -> Result<()> {
		self.delete(Operation::DeleteOAuthToken, &token_path(id)).await
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn client_id() -> OAuthClientId {
		OAuthClientId::new(7).expect("Client id fixture should be valid.")
	}

	#[test]
	fn create_payload_keeps_scope_order() {
		let payload = TokenEnvelope { token: NewOAuthToken::new(client_id(), ["write", "read"]) };

		assert_eq!(
			serde_json::to_value(&payload).expect("Payload should serialize."),
			serde_json::json!({ "token": { "client_id": 7, "scopes": ["write", "read"] } }),
		);
	}

	#[test]
	fn create_payload_includes_expiry_when_set() {
		let payload = TokenEnvelope {
			token: NewOAuthToken::new(client_id(), ["read"]).with_expires_at("2030-01-01T00:00:00Z"),
		};

		assert_eq!(
			serde_json::to_value(&payload).expect("Payload should serialize.")["token"]["expires_at"],
			"2030-01-01T00:00:00Z",
		);
	}

	#[test]
	fn read_response_without_full_token_decodes() {
		let envelope: TokenEnvelope<OAuthToken> = serde_json::from_str(
			"{\"token\":{\"id\":3,\"client_id\":7,\"user_id\":11,\"token\":\"abc\",\"scopes\":[\"read\"],\"expires_at\":null}}",
		)
		.expect("Token envelope should decode.");

		assert_eq!(envelope.token.id.get(), 3);
		assert_eq!(envelope.token.user_id, Some(11));
		assert_eq!(envelope.token.full_token, None);
		assert_eq!(envelope.token.expires_at, "");
	}
}
