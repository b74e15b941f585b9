//! Error types for deeplink configuration and resolution.

use std::path::PathBuf;

use thiserror::Error;

use crate::route::RouteName;

/// Errors that can occur while configuring or resolving deeplinks.
///
/// Resolving a [`url::Url`] with [`DeeplinkParser::parse`](crate::DeeplinkParser::parse)
/// never fails; these errors come from configuration, from parsing raw text
/// into a URI, and from the opt-in strict mode.
#[derive(Debug, Error)]
pub enum DeeplinkError {
	/// Invalid URI scheme.
	///
	/// Schemes must start with an ASCII letter followed by letters, digits,
	/// `+`, `-` or `.`.
	#[error("invalid URI scheme: {0:?}. Expected a letter followed by letters, digits, '+', '-' or '.'")]
	InvalidScheme(String),

	/// Invalid URI host.
	#[error("invalid URI host: {0:?}")]
	InvalidHost(String),

	/// A route catalog path template could not be compiled.
	#[error("invalid path template {template:?}: {reason}")]
	InvalidTemplate {
		/// The offending template.
		template: String,
		/// Why it was rejected.
		reason: String,
	},

	/// A route name that is not part of the known route set.
	#[error("unknown route name: {0}")]
	UnknownRoute(String),

	/// A path parameter required by a route is missing or empty.
	#[error("missing path parameter {param:?} for route {route}")]
	MissingPathParam {
		/// Route whose template needs the parameter.
		route: RouteName,
		/// Parameter name.
		param: String,
	},

	/// A path parameter value cannot be carried by a URI path segment.
	///
	/// URI paths drop `.` and `..` segments, even percent-encoded ones.
	#[error("path parameter {param:?} for route {route} cannot be the dot segment {value:?}")]
	InvalidPathParam {
		/// Route whose template holds the parameter.
		route: RouteName,
		/// Parameter name.
		param: String,
		/// Rejected value.
		value: String,
	},

	/// Text could not be parsed as a URI.
	#[error("invalid URI: {0}")]
	InvalidUri(#[from] url::ParseError),

	/// Configuration file is not valid TOML or does not match the schema.
	#[error("invalid deeplink configuration: {0}")]
	Config(#[from] toml::de::Error),

	/// Configuration file could not be read.
	#[error("failed to read {}: {source}", path.display())]
	Io {
		/// Path that was being read.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},
}

/// Validates a URI scheme.
///
/// Valid format (RFC 3986): `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
///
/// # Errors
///
/// Returns `DeeplinkError::InvalidScheme` if the format is invalid.
pub fn validate_scheme(scheme: &str) -> Result<(), DeeplinkError> {
	let mut chars = scheme.chars();

	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() => {}
		_ => return Err(DeeplinkError::InvalidScheme(scheme.to_string())),
	}

	if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
		return Err(DeeplinkError::InvalidScheme(scheme.to_string()));
	}

	Ok(())
}

/// Validates a URI host.
///
/// The host must be non-empty and must not contain whitespace, control
/// characters or the delimiters `/`, `?`, `#` and `@`, which would make it
/// spill into another URI component.
///
/// # Errors
///
/// Returns `DeeplinkError::InvalidHost` if the host is invalid.
pub fn validate_host(host: &str) -> Result<(), DeeplinkError> {
	if host.is_empty() {
		return Err(DeeplinkError::InvalidHost(host.to_string()));
	}

	if host
		.chars()
		.any(|c| c.is_whitespace() || c.is_control() || matches!(c, '/' | '?' | '#' | '@'))
	{
		return Err(DeeplinkError::InvalidHost(host.to_string()));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("https", true)]
	#[case("navee", true)]
	#[case("com.navee.app", true)]
	#[case("web+navee", true)]
	#[case("x-navee-1", true)]
	#[case("", false)]
	#[case("1navee", false)]
	#[case("na vee", false)]
	#[case("navee://", false)]
	#[case("-navee", false)]
	fn test_validate_scheme(#[case] scheme: &str, #[case] expected_valid: bool) {
		let result = validate_scheme(scheme);
		assert_eq!(result.is_ok(), expected_valid, "scheme: {}", scheme);
	}

	#[rstest]
	#[case("app.local", true)]
	#[case("open", true)]
	#[case("localhost:8080", true)]
	#[case("[::1]", true)]
	#[case("", false)]
	#[case("app.local/atlas", false)]
	#[case("app local", false)]
	#[case("user@app.local", false)]
	#[case("app.local?x=1", false)]
	#[case("app.local#top", false)]
	fn test_validate_host(#[case] host: &str, #[case] expected_valid: bool) {
		let result = validate_host(host);
		assert_eq!(result.is_ok(), expected_valid, "host: {}", host);
	}

	#[rstest]
	fn test_missing_path_param_display() {
		let error = DeeplinkError::MissingPathParam {
			route: RouteName::PlaceDetail,
			param: "id".to_string(),
		};

		assert_eq!(
			error.to_string(),
			"missing path parameter \"id\" for route placeDetail"
		);
	}
}
