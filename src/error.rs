//! Crate-level error types shared by the API client, provider configuration, and adapters.

// self
use crate::{_prelude::*, obs::Operation};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by the API client.
///
/// A `404` on a read is never represented here; read operations report it as `Ok(None)`.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The API answered with a status other than the one the operation expects.
	///
	/// The raw response body is kept verbatim because Zendesk encodes its structured error
	/// detail there.
	#[error("Failed to {operation} (HTTP {status}): {body}")]
	UnexpectedStatus {
		/// Operation that was attempted.
		operation: Operation,
		/// HTTP status code returned by the API.
		status: u16,
		/// Raw response body.
		body: String,
	},
	/// The request payload could not be serialized.
	#[error("Failed to encode the {operation} request: {source}")]
	Encode {
		/// Operation that was attempted.
		operation: Operation,
		/// Serializer failure.
		#[source]
		source: serde_json::Error,
	},
	/// The API answered with the expected status but a malformed body.
	#[error("Failed to {operation}: response body is malformed ({source})")]
	Decode {
		/// Operation that was attempted.
		operation: Operation,
		/// HTTP status code of the response.
		status: u16,
		/// Structured parsing failure, including the offending JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl Error {
	/// Returns the HTTP status attached to the error, when one was received.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::UnexpectedStatus { status, .. } | Self::Decode { status, .. } => Some(*status),
			_ => None,
		}
	}
}

/// Configuration and validation failures raised while building the API client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// The API base URL cannot be parsed.
	#[error("API base URL `{url}` is invalid.")]
	InvalidBaseUrl {
		/// URL string that failed to parse.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The subdomain did not yield an API root under the account domain.
	#[error("Subdomain produced API base URL `{url}`, which is not an API root under `{domain}`.")]
	ForeignBaseUrl {
		/// URL built from the subdomain.
		url: String,
		/// Domain the host must sit under.
		domain: String,
	},
	/// The API base URL cannot carry relative endpoint paths.
	#[error("API base URL `{url}` cannot be used as a base for endpoint paths.")]
	CannotBeABase {
		/// Offending URL.
		url: String,
	},
	/// Credentials contain bytes that are not valid in an HTTP header.
	#[error("Credentials cannot be encoded into an Authorization header.")]
	InvalidCredentials {
		/// Header encoding failure.
		#[source]
		source: reqwest::header::InvalidHeaderValue,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Zendesk API: {source}")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
