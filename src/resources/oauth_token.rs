//! `zendesk_oauth_token` resource.
//!
//! The issued token value is only returned by the create call. Create stores it in the
//! sensitive `full_token` attribute and read never touches it afterwards.

// crates.io
use time::{
	Date, OffsetDateTime, PrimitiveDateTime, error::Parse as TimeParseError,
	format_description::well_known::Iso8601,
};
// self
use crate::{
	_prelude::*,
	api::NewOAuthToken,
	auth::{OAuthClientId, OAuthTokenId, TokenSecret},
	framework::{
		Attribute, AttributePath, ConfigureRequest, ConfigureResponse, CreateRequest, CreateResponse,
		DeleteRequest, DeleteResponse, Diagnostics, ImportStateRequest, ImportStateResponse,
		ReadRequest, ReadResponse, Resource, ResourceFuture, Schema, UpdateRequest, UpdateResponse,
		import_state_passthrough_id,
	},
	resources::{ClientSlot, parse_id, report_drift, require},
};

/// Resource label on drift events and counters; matches the registered type name.
const DRIFT_LABEL: &str = "zendesk_oauth_token";

/// State model of an OAuth token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthTokenModel {
	/// Server-assigned id in decimal form.
	#[serde(default)]
	pub id: Option<String>,
	/// OAuth client id in decimal form.
	#[serde(default)]
	pub client_id: Option<String>,
	/// Granted scopes.
	#[serde(default)]
	pub scopes: Option<Vec<String>>,
	/// Issued token value; only known after create.
	#[serde(default)]
	pub full_token: Option<TokenSecret>,
	/// ISO-8601 expiry; empty when the token never expires.
	#[serde(default)]
	pub expires_at: Option<String>,
}

/// Manages a Zendesk OAuth token.
#[derive(Clone, Debug, Default)]
pub struct OAuthTokenResource {
	client: ClientSlot,
}
impl OAuthTokenResource {
	/// Creates an unconfigured adapter.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an unconfigured adapter behind the framework's trait object.
	pub fn boxed() -> Box<dyn Resource> {
		Box::new(Self::new())
	}

	async fn create_token(&self, request: CreateRequest) -> CreateResponse {
		let mut response = CreateResponse::default();
		let Some(client) = self.client.get(&mut response.diagnostics) else {
			return response;
		};
		let mut plan: OAuthTokenModel = match request.plan.get() {
			Ok(plan) => plan,
			Err(diagnostic) => {
				response.diagnostics.push(diagnostic);

				return response;
			},
		};
		let Some(new) = new_token(&plan, &mut response.diagnostics) else {
			return response;
		};
		let created = match client.create_oauth_token(&new).await {
			Ok(created) => created,
			Err(err) => {
				response.diagnostics.add_error(
					"Error Creating OAuth Token",
					format!("Could not create OAuth token: {err}"),
				);

				return response;
			},
		};

		plan.id = Some(created.id.to_string());
		plan.full_token = Some(created.full_token.unwrap_or_default());
		plan.expires_at = Some(created.expires_at);

		if let Err(diagnostic) = response.state.set(&plan) {
			response.diagnostics.push(diagnostic);
		}

		response
	}

	async fn read_token(&self, request: ReadRequest) -> ReadResponse {
		let mut response = ReadResponse::for_request(&request);
		let Some(client) = self.client.get(&mut response.diagnostics) else {
			return response;
		};
		let mut state: OAuthTokenModel = match request.state.get() {
			Ok(state) => state,
			Err(diagnostic) => {
				response.diagnostics.push(diagnostic);

				return response;
			},
		};
		let Some(id) = parse_id::<OAuthTokenId>(
			state.id.as_deref(),
			"Error Parsing OAuth Token ID",
			"OAuth token ID",
			&mut response.diagnostics,
		) else {
			return response;
		};
		let remote = match client.read_oauth_token(id).await {
			Ok(Some(remote)) => remote,
			Ok(None) => {
				report_drift(DRIFT_LABEL, &id.to_string());
				response.state.remove_resource();

				return response;
			},
			Err(err) => {
				response.diagnostics.add_error(
					"Error Reading OAuth Token",
					format!("Could not read OAuth token: {err}"),
				);

				return response;
			},
		};

		state.client_id = Some(remote.client_id.to_string());
		state.scopes = Some(remote.scopes);
		state.expires_at = Some(remote.expires_at);

		if let Err(diagnostic) = response.state.set(&state) {
			response.diagnostics.push(diagnostic);
		}

		response
	}

	async fn delete_token(&self, request: DeleteRequest) -> DeleteResponse {
		let mut response = DeleteResponse::default();
		let Some(client) = self.client.get(&mut response.diagnostics) else {
			return response;
		};
		let state: OAuthTokenModel = match request.state.get() {
			Ok(state) => state,
			Err(diagnostic) => {
				response.diagnostics.push(diagnostic);

				return response;
			},
		};
		let Some(id) = parse_id::<OAuthTokenId>(
			state.id.as_deref(),
			"Error Parsing OAuth Token ID",
			"OAuth token ID",
			&mut response.diagnostics,
		) else {
			return response;
		};

		if let Err(err) = client.delete_oauth_token(id).await {
			response.diagnostics.add_error(
				"Error Deleting OAuth Token",
				format!("Could not delete OAuth token: {err}"),
			);
		}

		response
	}
}
impl Resource for OAuthTokenResource {
	fn type_name(&self, provider_type_name: &str) -> String {
		format!("{provider_type_name}_oauth_token")
	}

	fn schema(&self) -> Schema {
		Schema::new("Manages a Zendesk OAuth token.")
			.attribute(
				"id",
				Attribute::string("The ID of the OAuth token.").computed().use_state_for_unknown(),
			)
			.attribute(
				"client_id",
				Attribute::string("The ID of the OAuth client.").required().requires_replace(),
			)
			.attribute(
				"scopes",
				Attribute::string_list("The scopes granted to the OAuth token.")
					.required()
					.requires_replace(),
			)
			.attribute(
				"full_token",
				Attribute::string("The full OAuth token value (only available after creation).")
					.computed()
					.sensitive()
					.use_state_for_unknown(),
			)
			.attribute(
				"expires_at",
				Attribute::string(
					"The expiration date of the token in ISO 8601 format (e.g. `2024-12-31T23:59:59Z`). If not set, the token will not expire.",
				)
				.optional()
				.computed()
				.requires_replace(),
			)
	}

	fn configure(&mut self, request: ConfigureRequest) -> ConfigureResponse {
		self.client.configure(request)
	}

	fn create(&self, request: CreateRequest) -> ResourceFuture<'_, CreateResponse> {
		Box::pin(self.create_token(request))
	}

	fn read(&self, request: ReadRequest) -> ResourceFuture<'_, ReadResponse> {
		Box::pin(self.read_token(request))
	}

	fn update(&self, request: UpdateRequest) -> ResourceFuture<'_, UpdateResponse> {
		let mut response = UpdateResponse { state: request.state, ..Default::default() };

		response.diagnostics.add_error(
			"Update Not Supported",
			"The Zendesk API does not support updating OAuth tokens. To change the configuration, you must create a new token.",
		);

		Box::pin(async move { response })
	}

	fn delete(&self, request: DeleteRequest) -> ResourceFuture<'_, DeleteResponse> {
		Box::pin(self.delete_token(request))
	}

	fn import_state(&self, request: ImportStateRequest) -> ImportStateResponse {
		import_state_passthrough_id(&AttributePath::root("id"), request)
	}
}

/// Validates the plan and builds the create payload; nothing is sent when this fails.
fn new_token(plan: &OAuthTokenModel, diagnostics: &mut Diagnostics) -> Option<NewOAuthToken> {
	let client_id = require(plan.client_id.as_deref(), "client_id", diagnostics);
	let scopes = require(plan.scopes.clone(), "scopes", diagnostics);
	let (client_id, scopes) = (client_id?, scopes?);
	let client_id = match client_id.parse::<OAuthClientId>() {
		Ok(client_id) => client_id,
		Err(err) => {
			diagnostics.add_attribute_error(
				AttributePath::root("client_id"),
				"Error Parsing Client ID",
				format!("Could not parse client ID: {err}"),
			);

			return None;
		},
	};
	let expires_at = plan.expires_at.clone().unwrap_or_default();

	let parsed = match expires_at.as_str() {
		"" => Ok(()),
		raw => check_iso8601(raw),
	};

	if let Err(err) = parsed {
		diagnostics.add_attribute_error(
			AttributePath::root("expires_at"),
			"Invalid Expiration Timestamp",
			format!("`{expires_at}` is not an ISO 8601 date or timestamp: {err}"),
		);

		return None;
	}

	Some(NewOAuthToken::new(client_id, scopes).with_expires_at(expires_at))
}

/// Accepts any ISO 8601 date, local date-time, or offset date-time; the API judges the rest.
fn check_iso8601(raw: &str) -> Result<(), TimeParseError> {
	OffsetDateTime::parse(raw, &Iso8601::DEFAULT)
		.map(drop)
		.or_else(|_| PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT).map(drop))
		.or_else(|_| Date::parse(raw, &Iso8601::DEFAULT).map(drop))
}
