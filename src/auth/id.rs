//! Strongly typed identifiers for server-assigned Zendesk resources.

// std
use std::num::ParseIntError;
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "i64", into = "i64")]
		pub struct $name(i64);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: i64) -> Result<Self, IdentifierError> {
				validate_value($kind, value)?;

				Ok(Self(value))
			}

			/// Returns the raw integer value.
			pub const fn get(self) -> i64 {
				self.0
			}
		}
		impl From<$name> for i64 {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<i64> for $name {
			type Error = IdentifierError;

			fn try_from(value: i64) -> Result<Self, Self::Error> {
				Self::new(value)
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!(stringify!($name), "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				Display::fmt(&self.0, f)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				let value = s
					.parse::<i64>()
					.map_err(|source| IdentifierError::Malformed {
						kind: $kind,
						value: s.to_owned(),
						source,
					})?;

				Self::new(value)
			}
		}
	};
}

/// Error returned when identifier parsing or validation fails.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum IdentifierError {
	/// The identifier is not a base-10 integer.
	#[error("{kind} ID `{value}` is not a valid integer: {source}")]
	Malformed {
		/// Kind of identifier (OAuth client, OAuth token).
		kind: &'static str,
		/// Raw text that failed to parse.
		value: String,
		/// Integer parsing failure.
		#[source]
		source: ParseIntError,
	},
	/// The identifier is zero or negative.
	#[error("{kind} ID must be positive, got {value}")]
	NotPositive {
		/// Kind of identifier (OAuth client, OAuth token).
		kind: &'static str,
		/// Rejected value.
		value: i64,
	},
}

def_id! { OAuthClientId, "Server-assigned identifier of a Zendesk OAuth client.", "OAuth client" }
def_id! { OAuthTokenId, "Server-assigned identifier of a Zendesk OAuth token.", "OAuth token" }

fn validate_value(kind: &'static str, value: i64) -> Result<(), IdentifierError> {
	if value <= 0 {
		return Err(IdentifierError::NotPositive { kind, value });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn identifiers_parse_and_validate() {
		let id: OAuthClientId = "1234".parse().expect("Numeric fixture should parse.");

		assert_eq!(id.get(), 1234);
		assert_eq!(id.to_string(), "1234");
		assert!(matches!(
			"abc".parse::<OAuthClientId>(),
			Err(IdentifierError::Malformed { kind: "OAuth client", .. })
		));
		assert!(matches!(
			"0".parse::<OAuthTokenId>(),
			Err(IdentifierError::NotPositive { kind: "OAuth token", value: 0 })
		));
		assert!(" 12".parse::<OAuthTokenId>().is_err(), "Whitespace must be rejected.");
		assert!("".parse::<OAuthTokenId>().is_err());
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let id: OAuthTokenId =
			serde_json::from_str("42").expect("Token id should deserialize successfully.");

		assert_eq!(id.get(), 42);
		assert_eq!(serde_json::to_string(&id).expect("Token id should serialize."), "42");
		assert!(serde_json::from_str::<OAuthTokenId>("-3").is_err());
		assert!(serde_json::from_str::<OAuthTokenId>("\"42\"").is_err());
	}

	#[test]
	fn malformed_error_names_the_input() {
		let err = "12x".parse::<OAuthClientId>().expect_err("Suffix must be rejected.");

		assert!(err.to_string().starts_with("OAuth client ID `12x` is not a valid integer"));
	}
}
