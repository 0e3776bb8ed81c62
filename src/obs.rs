//! Optional observability helpers for API operations and state reconciliation.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (default) to emit structured spans named `zendesk_oauth.api` with the
//!   `operation` and `http.status` fields, plus an event whenever a read drops a resource that
//!   was deleted outside the provider.
//! - Enable `metrics` to increment the `zendesk_oauth_api_requests_total` counter for every
//!   attempt/success/not-found/failure, labeled by `operation` + `outcome`, and the
//!   `zendesk_oauth_drift_total` counter labeled by `resource`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// API operations issued by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// `POST oauth/clients.json`.
	CreateOAuthClient,
	/// `GET oauth/clients/{id}.json`.
	ReadOAuthClient,
	/// `DELETE oauth/clients/{id}.json`.
	DeleteOAuthClient,
	/// `POST oauth/tokens.json`.
	CreateOAuthToken,
	/// `GET oauth/tokens/{id}.json`.
	ReadOAuthToken,
	/// `DELETE oauth/tokens/{id}.json`.
	DeleteOAuthToken,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::CreateOAuthClient => "create_oauth_client",
			Operation::ReadOAuthClient => "read_oauth_client",
			Operation::DeleteOAuthClient => "delete_oauth_client",
			Operation::CreateOAuthToken => "create_oauth_token",
			Operation::ReadOAuthToken => "read_oauth_token",
			Operation::DeleteOAuthToken => "delete_oauth_token",
		}
	}

	/// Returns the human-readable phrase used in error messages.
	pub const fn describe(self) -> &'static str {
		match self {
			Operation::CreateOAuthClient => "create OAuth client",
			Operation::ReadOAuthClient => "read OAuth client",
			Operation::DeleteOAuthClient => "delete OAuth client",
			Operation::CreateOAuthToken => "create OAuth token",
			Operation::ReadOAuthToken => "read OAuth token",
			Operation::DeleteOAuthToken => "delete OAuth token",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.describe())
	}
}

/// Outcome labels recorded for each operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiOutcome {
	/// Entry to an API operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Read answered `404`.
	NotFound,
	/// Failure propagated back to the caller.
	Failure,
}
impl ApiOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ApiOutcome::Attempt => "attempt",
			ApiOutcome::Success => "success",
			ApiOutcome::NotFound => "not_found",
			ApiOutcome::Failure => "failure",
		}
	}
}
impl Display for ApiOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Values that know which [`ApiOutcome`] they represent once an operation completes.
pub trait Observed {
	/// Outcome label for a successfully returned value.
	fn outcome(&self) -> ApiOutcome {
		ApiOutcome::Success
	}
}
impl Observed for () {}
impl<T> Observed for Option<T> {
	fn outcome(&self) -> ApiOutcome {
		if self.is_some() { ApiOutcome::Success } else { ApiOutcome::NotFound }
	}
}

/// Runs `fut` inside an operation span and records its attempt + final outcome.
pub async fn observe<T, Fut>(operation: Operation, span: &ApiSpan, fut: Fut) -> Result<T>
where
	T: Observed,
	Fut: Future<Output = Result<T>>,
{
	record_api_outcome(operation, ApiOutcome::Attempt);

	let result = span.instrument(fut).await;

	match &result {
		Ok(value) => record_api_outcome(operation, value.outcome()),
		Err(_) => record_api_outcome(operation, ApiOutcome::Failure),
	}

	result
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn option_outcome_distinguishes_not_found() {
		assert_eq!(Some(1).outcome(), ApiOutcome::Success);
		assert_eq!(None::<u8>.outcome(), ApiOutcome::NotFound);
		assert_eq!(().outcome(), ApiOutcome::Success);
	}

	#[test]
	fn operation_labels_are_stable() {
		assert_eq!(Operation::ReadOAuthToken.as_str(), "read_oauth_token");
		assert_eq!(Operation::DeleteOAuthClient.to_string(), "delete OAuth client");
	}

	#[tokio::test]
	async fn observe_passes_results_through() {
		let span = ApiSpan::new(Operation::ReadOAuthClient);
		let found: Option<u8> = observe(Operation::ReadOAuthClient, &span, async { Ok(Some(7)) })
			.await
			.expect("Observed future should succeed.");

		assert_eq!(found, Some(7));
	}
}
