//! Typed client for the Zendesk OAuth REST endpoints.
//!
//! [`ApiClient`] is built once from [`Credentials`] and then shared, read-only, by every
//! resource adapter. Each operation is a single request/response exchange:
//!
//! | Operation | Request | Success | Not found |
//! |-----------|---------|---------|-----------|
//! | create    | `POST oauth/{kind}s.json` | `201` | n/a |
//! | read      | `GET oauth/{kind}s/{id}.json` | `200` | `404` ⇒ `Ok(None)` |
//! | delete    | `DELETE oauth/{kind}s/{id}.json` | `204` | n/a |
//!
//! Every other status becomes [`Error::UnexpectedStatus`] carrying the raw body.

pub mod client;
pub mod token;

pub use client::*;
pub use token::*;

// crates.io
use reqwest::header::HeaderValue;
// self
use crate::{
	_prelude::*,
	auth::Credentials,
	error::ConfigError,
	http::{ApiRequest, ApiResponse, HttpClient},
	obs::{self, ApiSpan, Observed, Operation},
};

/// Domain Zendesk accounts are served from.
pub const DEFAULT_DOMAIN: &str = "zendesk.com";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Shared, immutable handle to one Zendesk account's API.
#[derive(Clone)]
pub struct ApiClient {
	http_client: HttpClient,
	base_url: Url,
	authorization: HeaderValue,
	credentials: Credentials,
}
impl ApiClient {
	/// Creates a client for `https://{subdomain}.zendesk.com/api/v2/`.
	pub fn new(credentials: Credentials) -> Result<Self> {
		Self::for_domain(credentials, DEFAULT_DOMAIN)
	}

	/// Creates a client for `https://{subdomain}.{domain}/api/v2/`.
	pub fn for_domain(credentials: Credentials, domain: &str) -> Result<Self> {
		let raw = format!("https://{}.{domain}/api/v2/", credentials.subdomain);
		let base_url = Url::parse(&raw)
			.map_err(|source| ConfigError::InvalidBaseUrl { url: raw.clone(), source })?;
		let suffix = format!(".{domain}");
		let under_domain = base_url
			.host_str()
			.is_some_and(|host| host.len() > suffix.len() && host.ends_with(&suffix));

		if !under_domain
			|| base_url.path() != "/api/v2/"
			|| base_url.query().is_some()
			|| base_url.fragment().is_some()
		{
			return Err(ConfigError::ForeignBaseUrl { url: raw, domain: domain.into() }.into());
		}

		let http_client = ReqwestClient::builder()
			.user_agent(USER_AGENT)
			.build()
			.map_err(ConfigError::http_client_build)?;

		Self::with_http_client(credentials, base_url, HttpClient::with_client(http_client))
	}

	/// Creates a client against an explicit API root (e.g. a mock server), reusing the
	/// caller-provided transport.
	///
	/// A missing trailing slash is added so endpoint paths resolve beneath the root.
	pub fn with_http_client(
		credentials: Credentials,
		mut base_url: Url,
		http_client: HttpClient,
	) -> Result<Self> {
		if base_url.cannot_be_a_base() {
			return Err(ConfigError::CannotBeABase { url: base_url.to_string() }.into());
		}
		if !base_url.path().ends_with('/') {
			let path = format!("{}/", base_url.path());

			base_url.set_path(&path);
		}

		let authorization = credentials.authorization_header()?;

		Ok(Self { http_client, base_url, authorization, credentials })
	}

	/// API root every endpoint is resolved against.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Credentials the client authenticates with.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	fn endpoint(&self, path: &str) -> Result<Url> {
		self.base_url.join(path).map_err(|source| {
			ConfigError::InvalidBaseUrl { url: format!("{}{path}", self.base_url), source }.into()
		})
	}

	fn request(&self, method: Method, path: &str) -> Result<ApiRequest> {
		Ok(ApiRequest::new(method, self.endpoint(path)?, self.authorization.clone()))
	}

	async fn send(&self, span: &ApiSpan, request: ApiRequest) -> Result<ApiResponse> {
		let response = self.http_client.execute(request).await?;

		span.record_status(response.status.as_u16());

		Ok(response)
	}

	/// Shared create path: POST the envelope, require `201`, decode the echoed envelope.
	async fn create<B, T>(&self, operation: Operation, path: &str, payload: &B) -> Result<T>
	where
		B: ?Sized + Serialize,
		T: DeserializeOwned + Observed,
	{
		let span = ApiSpan::new(operation);

		obs::observe(operation, &span, async {
			let request = self.request(Method::POST, path)?.json(operation, payload)?;

			self.send(&span, request)
				.await?
				.expect_status(operation, StatusCode::CREATED)?
				.decode(operation)
		})
		.await
	}

	/// Shared read path: `404` maps to `None`, `200` decodes.
	async fn read<T>(&self, operation: Operation, path: &str) -> Result<Option<T>>
	where
		T: DeserializeOwned,
	{
		let span = ApiSpan::new(operation);

		obs::observe(operation, &span, async {
			let response = self.send(&span, self.request(Method::GET, path)?).await?;

			if response.status == StatusCode::NOT_FOUND {
				return Ok(None);
			}

			response.expect_status(operation, StatusCode::OK)?.decode(operation).map(Some)
		})
		.await
	}

	/// Shared delete path: only `204` succeeds.
	async fn delete(&self, operation: Operation, path: &str) -> Result<()> {
		let span = ApiSpan::new(operation);

		obs::observe(operation, &span, async {
			self.send(&span, self.request(Method::DELETE, path)?)
				.await?
				.expect_status(operation, StatusCode::NO_CONTENT)?;

			Ok(())
		})
		.await
	}
}
impl Debug for ApiClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient")
			.field("base_url", &self.base_url.as_str())
			.field("credentials", &self.credentials)
			.finish()
	}
}

/// Deserializes a string that the API may send as `null` or omit, treating both as empty.
pub(crate) fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: serde::Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
