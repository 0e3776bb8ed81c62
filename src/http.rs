//! Transport primitives for Zendesk API calls.
//!
//! The module exposes [`HttpClient`], a thin wrapper around reqwest that executes one request
//! and hands back an [`ApiResponse`] holding the status code and the full body text. Status
//! checks and JSON decoding live on [`ApiResponse`] so every operation classifies failures the
//! same way: an unexpected status always carries the raw body, and a malformed body on an
//! expected status is a decode error with the offending JSON path.

// std
use std::ops::Deref;
// crates.io
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
// self
use crate::{_prelude::*, error::TransportError, obs::Operation};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug, Default)]
pub struct HttpClient(pub ReqwestClient);
impl HttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Executes a single request and buffers the response body.
	///
	/// No retries are attempted; any network failure is returned as-is.
	pub(crate) async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
		let ApiRequest { method, url, authorization, body } = request;
		let mut builder = self.0.request(method, url).header(AUTHORIZATION, authorization);

		if let Some(body) = body {
			builder = builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(body);
		}

		let response = builder.send().await?;
		let status = response.status();
		let body = response.text().await?;

		Ok(ApiResponse { status, body })
	}
}
impl AsRef<ReqwestClient> for HttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for HttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Fully resolved outbound request.
pub(crate) struct ApiRequest {
	pub(crate) method: Method,
	pub(crate) url: Url,
	pub(crate) authorization: HeaderValue,
	pub(crate) body: Option<Vec<u8>>,
}
impl ApiRequest {
	pub(crate) fn new(method: Method, url: Url, authorization: HeaderValue) -> Self {
		Self { method, url, authorization, body: None }
	}

	/// Attaches a JSON body; `execute` adds the matching `Content-Type`.
	pub(crate) fn json<T>(mut self, operation: Operation, payload: &T) -> Result<Self>
	where
		T: ?Sized + Serialize,
	{
		let body =
			serde_json::to_vec(payload).map_err(|source| Error::Encode { operation, source })?;

		self.body = Some(body);

		Ok(self)
	}
}

/// Buffered API response.
#[derive(Clone, Debug)]
pub struct ApiResponse {
	/// HTTP status returned by the API.
	pub status: StatusCode,
	/// Raw response body text.
	pub body: String,
}
impl ApiResponse {
	/// Fails with [`Error::UnexpectedStatus`] unless the status equals `expected`.
	pub fn expect_status(self, operation: Operation, expected: StatusCode) -> Result<Self> {
		if self.status == expected {
			Ok(self)
		} else {
			Err(Error::UnexpectedStatus {
				operation,
				status: self.status.as_u16(),
				body: self.body,
			})
		}
	}

	/// Decodes the body as JSON, reporting the failing path on error.
	pub fn decode<T>(&self, operation: Operation) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let mut de = serde_json::Deserializer::from_str(&self.body);

		serde_path_to_error::deserialize(&mut de).map_err(|source| Error::Decode {
			operation,
			status: self.status.as_u16(),
			source,
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn response(status: StatusCode, body: &str) -> ApiResponse {
		ApiResponse { status, body: body.into() }
	}

	#[test]
	fn expect_status_forwards_body_on_mismatch() {
		let err = response(StatusCode::UNPROCESSABLE_ENTITY, "{\"error\":\"RecordInvalid\"}")
			.expect_status(Operation::CreateOAuthToken, StatusCode::CREATED)
			.expect_err("422 must not satisfy a 201 expectation.");

		match err {
			Error::UnexpectedStatus { operation, status, body } => {
				assert_eq!(operation, Operation::CreateOAuthToken);
				assert_eq!(status, 422);
				assert_eq!(body, "{\"error\":\"RecordInvalid\"}");
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}

	#[test]
	fn decode_rejects_malformed_json() {
		let err = response(StatusCode::OK, "<html>maintenance</html>")
			.decode::<serde_json::Value>(Operation::ReadOAuthClient)
			.expect_err("HTML must not decode as JSON.");

		assert!(matches!(err, Error::Decode { status: 200, .. }));
	}

	#[test]
	fn json_body_is_attached() {
		let url = Url::parse("https://acme.zendesk.com/api/v2/oauth/clients.json")
			.expect("Fixture URL should parse.");
		let request = ApiRequest::new(Method::POST, url, HeaderValue::from_static("Basic x"))
			.json(Operation::CreateOAuthClient, &serde_json::json!({ "client": { "name": "n" } }))
			.expect("JSON payload should encode.");

		assert_eq!(request.body.as_deref(), Some(&b"{\"client\":{\"name\":\"n\"}}"[..]));
	}
}
