// self
use crate::{_prelude::*, obs::Operation};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedOperation<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedOperation<F> = F;

/// A span builder used by API operations.
#[derive(Clone, Debug)]
pub struct ApiSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ApiSpan {
	/// Creates a new span tagged with the provided operation.
	///
	/// The `http.status` field starts empty and is filled by [`ApiSpan::record_status`].
	pub fn new(operation: Operation) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"zendesk_oauth.api",
				operation = operation.as_str(),
				http.status = tracing::field::Empty,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = operation;

			Self {}
		}
	}

	/// Records the HTTP status returned for the operation.
	pub fn record_status(&self, status: u16) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("http.status", status);
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = status;
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedOperation<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits an event when a read finds that a tracked resource no longer exists remotely.
pub fn trace_drift(resource: &'static str, id: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::info!(resource, id, "Resource no longer exists remotely; removing it from state.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (resource, id);
	}
}
