// self
use crate::obs::{ApiOutcome, Operation};

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_api_outcome(operation: Operation, outcome: ApiOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"zendesk_oauth_api_requests_total",
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}

/// Counts resources dropped from state because they were deleted outside the provider.
pub fn record_drift(resource: &'static str) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("zendesk_oauth_drift_total", "resource" => resource).increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = resource;
	}
}
