//! The resource contract and the request/response envelopes the framework exchanges with it.

// std
use std::any;
// self
use crate::{
	_prelude::*,
	framework::{AttributePath, Diagnostics, Schema, State},
};

/// Boxed future returned by asynchronous [`Resource`] operations.
pub type ResourceFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a + Send>>;

/// Factory the provider hands to the framework for each resource type.
pub type ResourceFactory = fn() -> Box<dyn Resource>;

/// Type-erased value the provider hands to resources at configure time.
#[derive(Clone)]
pub struct ProviderData {
	value: Arc<dyn Any + Send + Sync>,
	type_name: &'static str,
}
impl ProviderData {
	/// Wraps a value.
	pub fn new<T>(value: T) -> Self
	where
		T: Any + Send + Sync,
	{
		Self::from_arc(Arc::new(value))
	}

	/// Wraps an already shared value.
	pub fn from_arc<T>(value: Arc<T>) -> Self
	where
		T: Any + Send + Sync,
	{
		Self { value, type_name: any::type_name::<T>() }
	}

	/// Returns the shared value if it is a `T`.
	pub fn downcast<T>(&self) -> Option<Arc<T>>
	where
		T: Any + Send + Sync,
	{
		self.value.clone().downcast::<T>().ok()
	}

	/// Name of the wrapped type, for diagnostics.
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}
}
impl Debug for ProviderData {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ProviderData").field("type_name", &self.type_name).finish()
	}
}

/// Configure-time handoff of the provider's shared data.
#[derive(Clone, Debug, Default)]
pub struct ConfigureRequest {
	/// `None` when the provider has not been configured yet.
	pub provider_data: Option<ProviderData>,
}

/// Outcome of [`Resource::configure`].
#[derive(Clone, Debug, Default)]
pub struct ConfigureResponse {
	/// Reported problems.
	pub diagnostics: Diagnostics,
}

/// Create request carrying the planned attribute values.
#[derive(Clone, Debug, Default)]
pub struct CreateRequest {
	/// Planned values; computed attributes are unknown.
	pub plan: State,
}

/// Create response; a null state means nothing was created.
#[derive(Clone, Debug, Default)]
pub struct CreateResponse {
	/// New state to persist.
	pub state: State,
	/// Reported problems.
	pub diagnostics: Diagnostics,
}

/// Read (refresh) request carrying the prior state.
#[derive(Clone, Debug, Default)]
pub struct ReadRequest {
	/// Prior state.
	pub state: State,
}

/// Read response; starts as a copy of the prior state.
#[derive(Clone, Debug, Default)]
pub struct ReadResponse {
	/// Refreshed state; null when the resource no longer exists.
	pub state: State,
	/// Reported problems.
	pub diagnostics: Diagnostics,
}
impl ReadResponse {
	/// Seeds the response with the prior state so failures leave it untouched.
	pub fn for_request(request: &ReadRequest) -> Self {
		Self { state: request.state.clone(), diagnostics: Diagnostics::default() }
	}
}

/// Update request carrying both the plan and the prior state.
#[derive(Clone, Debug, Default)]
pub struct UpdateRequest {
	/// Planned values.
	pub plan: State,
	/// Prior state.
	pub state: State,
}

/// Update response.
#[derive(Clone, Debug, Default)]
pub struct UpdateResponse {
	/// New state.
	pub state: State,
	/// Reported problems.
	pub diagnostics: Diagnostics,
}

/// Delete request carrying the prior state.
#[derive(Clone, Debug, Default)]
pub struct DeleteRequest {
	/// Prior state.
	pub state: State,
}

/// Delete response; the framework drops the state when no error is reported.
#[derive(Clone, Debug, Default)]
pub struct DeleteResponse {
	/// Reported problems.
	pub diagnostics: Diagnostics,
}

/// Import request carrying the operator-supplied identifier.
#[derive(Clone, Debug, Default)]
pub struct ImportStateRequest {
	/// Identifier passed on the command line.
	pub id: String,
}

/// Import response; the framework follows it with a read.
#[derive(Clone, Debug, Default)]
pub struct ImportStateResponse {
	/// Seed state.
	pub state: State,
	/// Reported problems.
	pub diagnostics: Diagnostics,
}

/// Declarative resource driven by the framework.
///
/// Implementations never panic on malformed plan or state data; every failure is reported
/// through the response diagnostics. Asynchronous operations return boxed futures so the
/// trait stays object safe and resources can live behind `Box<dyn Resource>`.
pub trait Resource
where
	Self: Send + Sync,
{
	/// Full resource type name, derived from the provider's type name.
	fn type_name(&self, provider_type_name: &str) -> String;

	/// Attribute declarations.
	fn schema(&self) -> Schema;

	/// Receives the provider's shared data.
	fn configure(&mut self, request: ConfigureRequest) -> ConfigureResponse;

	/// Creates the remote object described by the plan.
	fn create(&self, request: CreateRequest) -> ResourceFuture<'_, CreateResponse>;

	/// Refreshes state from the remote object.
	fn read(&self, request: ReadRequest) -> ResourceFuture<'_, ReadResponse>;

	/// Applies in-place changes.
	fn update(&self, request: UpdateRequest) -> ResourceFuture<'_, UpdateResponse>;

	/// Deletes the remote object.
	fn delete(&self, request: DeleteRequest) -> ResourceFuture<'_, DeleteResponse>;

	/// Seeds state for an existing remote object.
	fn import_state(&self, request: ImportStateRequest) -> ImportStateResponse;
}

/// Writes the import identifier verbatim to `path`; the follow-up read fills in the rest.
pub fn import_state_passthrough_id(
	path: &AttributePath,
	request: ImportStateRequest,
) -> ImportStateResponse {
	let mut response = ImportStateResponse::default();

	if request.id.is_empty() {
		response.diagnostics.add_error(
			"Missing Import Identifier",
			format!("An identifier is required to import a resource into the `{path}` attribute."),
		);

		return response;
	}

	response.state.set_attribute(path, request.id);

	response
}
