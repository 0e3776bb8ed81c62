//! OAuth client records and their create/read/delete operations.

// self
use crate::{
	_prelude::*,
	api::{ApiClient, nullable_string},
	auth::OAuthClientId,
	obs::{Observed, Operation},
};

/// OAuth client as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OAuthClient {
	/// Server-assigned identifier.
	pub id: OAuthClientId,
	/// Display name.
	#[serde(default, deserialize_with = "nullable_string")]
	pub name: String,
	/// Identifier unique within the account.
	#[serde(default, deserialize_with = "nullable_string")]
	pub identifier: String,
	/// Client kind (e.g. `public`, `confidential`).
	#[serde(default, deserialize_with = "nullable_string")]
	pub kind: String,
	/// Description; an omitted or `null` description decodes as the empty string.
	#[serde(default, deserialize_with = "nullable_string")]
	pub description: String,
}

/// Fields accepted when creating an OAuth client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewOAuthClient {
	/// Display name.
	pub name: String,
	/// Identifier unique within the account.
	pub identifier: String,
	/// Client kind (e.g. `public`).
	pub kind: String,
	/// Optional description; omitted from the payload when empty.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub description: String,
}
impl NewOAuthClient {
	/// Creates a payload without a description.
	pub fn new(
		name: impl Into<String>,
		identifier: impl Into<String>,
		kind: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			identifier: identifier.into(),
			kind: kind.into(),
			description: String::new(),
		}
	}

	/// Sets the description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();

		self
	}
}

#[derive(Serialize, Deserialize)]
struct ClientEnvelope<T> {
	client: T,
}
impl<T> Observed for ClientEnvelope<T> {}

const CLIENTS_PATH: &str = "oauth/clients.json";

fn client_path(id: OAuthClientId) -> String {
	format!("oauth/clients/{id}.json")
}

impl ApiClient {
	/// Creates an OAuth client; succeeds only on `201 Created`.
	pub async fn create_oauth_client(&self, new: &NewOAuthClient) -> Result<OAuthClient> {
		let envelope: ClientEnvelope<OAuthClient> = self
			.create(Operation::CreateOAuthClient, CLIENTS_PATH, &ClientEnvelope { client: new })
			.await?;

		Ok(envelope.client)
	}

	/// Reads an OAuth client; `Ok(None)` means the API answered `404 Not Found`.
	pub async fn read_oauth_client(&self, id: OAuthClientId) -> Result<Option<OAuthClient>> {
		let envelope: Option<ClientEnvelope<OAuthClient>> =
			self.read(Operation::ReadOAuthClient, &client_path(id)).await?;

		Ok(envelope.map(|envelope| envelope.client))
	}

	/// Deletes an OAuth client; succeeds only on `204 No Content`.
	pub async fn delete_oauth_client(&self, id: OAuthClientId) -> Result<()> {
		self.delete(Operation::DeleteOAuthClient, &client_path(id)).await
	}
}
