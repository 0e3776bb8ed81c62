//! `zendesk_oauth_client` resource.

// self
use crate::{
	_prelude::*,
	api::NewOAuthClient,
	auth::OAuthClientId,
	framework::{
		Attribute, AttributePath, ConfigureRequest, ConfigureResponse, CreateRequest, CreateResponse,
		DeleteRequest, DeleteResponse, ImportStateRequest, ImportStateResponse, ReadRequest,
		ReadResponse, Resource, ResourceFuture, Schema, UpdateRequest, UpdateResponse,
		import_state_passthrough_id,
	},
	resources::{ClientSlot, parse_id, report_drift, require},
};

/// Resource label on drift events and counters; matches the registered type name.
const DRIFT_LABEL: &str = "zendesk_oauth_client";

/// State model of an OAuth client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthClientModel {
	/// Server-assigned id in decimal form.
	#[serde(default)]
	pub id: Option<String>,
	/// Display name.
	#[serde(default)]
	pub name: Option<String>,
	/// Identifier unique within the account.
	#[serde(default)]
	pub identifier: Option<String>,
	/// Client kind.
	#[serde(default)]
	pub kind: Option<String>,
	/// Description as echoed by the API.
	#[serde(default)]
	pub description: Option<String>,
}

/// Manages a Zendesk OAuth client.
#[derive(Clone, Debug, Default)]
pub struct OAuthClientResource {
	client: ClientSlot,
}
impl OAuthClientResource {
	/// Creates an unconfigured adapter.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an unconfigured adapter behind the framework's trait object.
	pub fn boxed() -> Box<dyn Resource> {
		Box::new(Self::new())
	}

	async fn create_client(&self, request: CreateRequest) -> CreateResponse {
		let mut response = CreateResponse::default();
		let Some(client) = self.client.get(&mut response.diagnostics) else {
			return response;
		};
		let mut plan: OAuthClientModel = match request.plan.get() {
			Ok(plan) => plan,
			Err(diagnostic) => {
				response.diagnostics.push(diagnostic);

				return response;
			},
		};
		let diagnostics = &mut response.diagnostics;
		let name = require(plan.name.clone(), "name", diagnostics);
		let identifier = require(plan.identifier.clone(), "identifier", diagnostics);
		let kind = require(plan.kind.clone(), "kind", diagnostics);
		let (Some(name), Some(identifier), Some(kind)) = (name, identifier, kind) else {
			return response;
		};
		let new = NewOAuthClient::new(name, identifier, kind)
			.with_description(plan.description.clone().unwrap_or_default());
		let created = match client.create_oauth_client(&new).await {
			Ok(created) => created,
			Err(err) => {
				response.diagnostics.add_error(
					"Error Creating OAuth Client",
					format!("Could not create OAuth client: {err}"),
				);

				return response;
			},
		};

		plan.id = Some(created.id.to_string());
		plan.description = Some(created.description);

		if let Err(diagnostic) = response.state.set(&plan) {
			response.diagnostics.push(diagnostic);
		}

		response
	}

	async fn read_client(&self, request: ReadRequest) -> ReadResponse {
		let mut response = ReadResponse::for_request(&request);
		let Some(client) = self.client.get(&mut response.diagnostics) else {
			return response;
		};
		let mut state: OAuthClientModel = match request.state.get() {
			Ok(state) => state,
			Err(diagnostic) => {
				response.diagnostics.push(diagnostic);

				return response;
			},
		};
		let Some(id) = parse_id::<OAuthClientId>(
			state.id.as_deref(),
			"Error Parsing OAuth Client ID",
			"OAuth client ID",
			&mut response.diagnostics,
		) else {
			return response;
		};
		let remote = match client.read_oauth_client(id).await {
			Ok(Some(remote)) => remote,
			Ok(None) => {
				report_drift(DRIFT_LABEL, &id.to_string());
				response.state.remove_resource();

				return response;
			},
			Err(err) => {
				response.diagnostics.add_error(
					"Error Reading OAuth Client",
					format!("Could not read OAuth client: {err}"),
				);

				return response;
			},
		};

		state.name = Some(remote.name);
		state.identifier = Some(remote.identifier);
		state.kind = Some(remote.kind);
		state.description = Some(remote.description);

		if let Err(diagnostic) = response.state.set(&state) {
			response.diagnostics.push(diagnostic);
		}

		response
	}

	async fn delete_client(&self, request: DeleteRequest) -> DeleteResponse {
		let mut response = DeleteResponse::default();
		let Some(client) = self.client.get(&mut response.diagnostics) else {
			return response;
		};
		let state: OAuthClientModel = match request.state.get() {
			Ok(state) => state,
			Err(diagnostic) => {
				response.diagnostics.push(diagnostic);

				return response;
			},
		};
		let Some(id) = parse_id::<OAuthClientId>(
			state.id.as_deref(),
			"Error Parsing OAuth Client ID",
			"OAuth client ID",
			&mut response.diagnostics,
		) else {
			return response;
		};

		if let Err(err) = client.delete_oauth_client(id).await {
			response.diagnostics.add_error(
				"Error Deleting OAuth Client",
				format!("Could not delete OAuth client: {err}"),
			);
		}

		response
	}
}
impl Resource for OAuthClientResource {
	fn type_name(&self, provider_type_name: &str) -> String {
		format!("{provider_type_name}_oauth_client")
	}

	fn schema(&self) -> Schema {
		Schema::new("Manages a Zendesk OAuth client.")
			.attribute(
				"id",
				Attribute::string("The ID of the OAuth client.").computed().use_state_for_unknown(),
			)
			.attribute(
				"name",
				Attribute::string("The name of the OAuth client.").required().requires_replace(),
			)
			.attribute(
				"identifier",
				Attribute::string("The unique identifier of the OAuth client.")
					.required()
					.requires_replace(),
			)
			.attribute(
				"kind",
				Attribute::string("The kind of OAuth client (e.g. `public`).")
					.required()
					.requires_replace(),
			)
			.attribute(
				"description",
				Attribute::string("A description of the OAuth client.")
					.optional()
					.computed()
					.requires_replace(),
			)
	}

	fn configure(&mut self, request: ConfigureRequest) -> ConfigureResponse {
		self.client.configure(request)
	}

	fn create(&self, request: CreateRequest) -> ResourceFuture<'_, CreateResponse> {
		Box::pin(self.create_client(request))
	}

	fn read(&self, request: ReadRequest) -> ResourceFuture<'_, ReadResponse> {
		Box::pin(self.read_client(request))
	}

	fn update(&self, request: UpdateRequest) -> ResourceFuture<'_, UpdateResponse> {
		let mut response = UpdateResponse { state: request.state, ..Default::default() };

		response.diagnostics.add_error(
			"Update Not Supported",
			"The Zendesk API does not support updating OAuth clients. To change the configuration, you must create a new client.",
		);

		Box::pin(async move { response })
	}

	fn delete(&self, request: DeleteRequest) -> ResourceFuture<'_, DeleteResponse> {
		Box::pin(self.delete_client(request))
	}

	fn import_state(&self, request: ImportStateRequest) -> ImportStateResponse {
		import_state_passthrough_id(&AttributePath::root("id"), request)
	}
}
