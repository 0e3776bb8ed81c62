//! Provider configuration: explicit attributes merged over environment variables.

// self
use crate::{
	_prelude::*,
	auth::{Credentials, TokenSecret},
	framework::{AttributePath, Diagnostics, State},
};

/// Environment variable consulted when `subdomain` is not configured.
pub const ENV_SUBDOMAIN: &str = "ZENDESK_SUBDOMAIN";
/// Environment variable consulted when `email` is not configured.
pub const ENV_EMAIL: &str = "ZENDESK_EMAIL";
/// Environment variable consulted when `api_token` is not configured.
pub const ENV_API_TOKEN: &str = "ZENDESK_API_TOKEN";

/// Provider configuration block as written by the operator.
///
/// `None` means the attribute was not set; an explicit empty string still overrides the
/// environment.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
	/// Account subdomain.
	#[serde(default)]
	pub subdomain: Option<String>,
	/// Agent email address.
	#[serde(default)]
	pub email: Option<String>,
	/// API token.
	#[serde(default)]
	pub api_token: Option<TokenSecret>,
}
impl Debug for ProviderConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ProviderConfig")
			.field("subdomain", &self.subdomain)
			.field("email", &self.email)
			.field("api_token", &self.api_token)
			.finish()
	}
}

struct Setting {
	attribute: &'static str,
	env: &'static str,
	label: &'static str,
}

const SUBDOMAIN: Setting = Setting { attribute: "subdomain", env: ENV_SUBDOMAIN, label: "subdomain" };
const EMAIL: Setting = Setting { attribute: "email", env: ENV_EMAIL, label: "email" };
const API_TOKEN: Setting = Setting { attribute: "api_token", env: ENV_API_TOKEN, label: "API token" };

/// Resolves credentials from the configuration state, falling back to `lookup` for unset
/// attributes.
///
/// Unknown values are reported first and stop resolution; otherwise every missing value is
/// reported before returning.
pub fn resolve_credentials<F>(config: &State, lookup: F) -> Result<Credentials, Diagnostics>
where
	F: Fn(&str) -> Option<String>,
{
	let mut diagnostics = Diagnostics::default();

	for setting in [&SUBDOMAIN, &EMAIL, &API_TOKEN] {
		if config.is_unknown(setting.attribute) {
			diagnostics.add_attribute_error(
				AttributePath::root(setting.attribute),
				format!("Unknown Zendesk {}", setting.label),
				format!(
					"The provider cannot create the Zendesk API client as the {} is unknown. Either target apply the source of the value first, set the value statically in the configuration, or use the {} environment variable.",
					setting.label, setting.env
				),
			);
		}
	}
	if diagnostics.has_error() {
		return Err(diagnostics);
	}

	let config = config.get::<ProviderConfig>().map_err(Diagnostics::from)?;
	let merge = |explicit: Option<String>, setting: &Setting| {
		explicit.or_else(|| lookup(setting.env)).unwrap_or_default()
	};
	let subdomain = merge(config.subdomain, &SUBDOMAIN);
	let email = merge(config.email, &EMAIL);
	let api_token = merge(config.api_token.map(|token| token.expose().to_owned()), &API_TOKEN);

	for (value, setting) in [(&subdomain, &SUBDOMAIN), (&email, &EMAIL), (&api_token, &API_TOKEN)] {
		if value.is_empty() {
			diagnostics.add_attribute_error(
				AttributePath::root(setting.attribute),
				format!("Missing Zendesk {}", setting.label),
				format!(
					"The provider cannot create the Zendesk API client as the {} is missing. Set the {} value in the configuration or use the {} environment variable.",
					setting.label, setting.attribute, setting.env
				),
			);
		}
	}
	if diagnostics.has_error() {
		return Err(diagnostics);
	}

	Ok(Credentials::new(subdomain, email, api_token))
}
