//! Deeplink configuration: link origin and route catalog.
//!
//! Configuration can be assembled in code with [`DeeplinkConfig::builder`]
//! or loaded from TOML:
//!
//! ```toml
//! scheme = "navee"
//! host = "open"
//!
//! [catalog.routes]
//! atlas = "/explore"
//!
//! [catalog.journey]
//! categories = ["/journey/flights", "/journey/ferries"]
//! routes = { "/journey/flights" = "flightSearch" }
//! ```
//!
//! Every key is optional; anything omitted keeps its default.

use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::DeeplinkResult;
use crate::catalog::RouteCatalog;
use crate::error::{DeeplinkError, validate_host, validate_scheme};

/// Default scheme for generated links.
pub const DEFAULT_SCHEME: &str = "https";

/// Default host for generated links.
pub const DEFAULT_HOST: &str = "app.local";

/// Scheme and host that generated links are rooted at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
	scheme: String,
	host: String,
	base: Url,
}

impl Origin {
	/// Creates a validated origin.
	///
	/// # Errors
	///
	/// Returns [`DeeplinkError::InvalidScheme`] or [`DeeplinkError::InvalidHost`]
	/// if either part is malformed, and [`DeeplinkError::InvalidUri`] if the
	/// combination is rejected by the URL parser (for example a bad port).
	pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> DeeplinkResult<Self> {
		let scheme = scheme.into();
		let host = host.into();

		validate_scheme(&scheme)?;
		validate_host(&host)?;

		let base = Url::parse(&format!("{}://{}/", scheme, host))?;
		if !base.has_host() || base.cannot_be_a_base() {
			return Err(DeeplinkError::InvalidHost(host));
		}

		Ok(Self { scheme, host, base })
	}

	/// Returns the scheme.
	pub fn scheme(&self) -> &str {
		&self.scheme
	}

	/// Returns the host.
	pub fn host(&self) -> &str {
		&self.host
	}

	/// Returns `scheme://host/`, the base every generated link starts from.
	pub fn base_url(&self) -> &Url {
		&self.base
	}
}

impl Default for Origin {
	fn default() -> Self {
		Origin::new(DEFAULT_SCHEME, DEFAULT_HOST)
			.unwrap_or_else(|e| panic!("default origin is invalid: {}", e))
	}
}

/// Complete deeplink configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ConfigTable")]
pub struct DeeplinkConfig {
	origin: Origin,
	catalog: RouteCatalog,
}

impl DeeplinkConfig {
	/// Creates a new configuration builder.
	///
	/// # Example
	///
	/// ```rust
	/// use navee_deeplink::DeeplinkConfig;
	///
	/// let config = DeeplinkConfig::builder()
	///     .scheme("navee")
	///     .host("open")
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(config.origin().base_url().as_str(), "navee://open/");
	/// ```
	pub fn builder() -> DeeplinkConfigBuilder {
		DeeplinkConfigBuilder::default()
	}

	/// Parses a configuration from TOML text.
	///
	/// # Errors
	///
	/// Returns [`DeeplinkError::Config`] if the text is not valid TOML, has
	/// unknown keys, or describes an invalid origin or catalog.
	pub fn from_toml_str(text: &str) -> DeeplinkResult<Self> {
		Ok(toml::from_str(text)?)
	}

	/// Loads a configuration from a TOML file.
	///
	/// # Errors
	///
	/// Returns [`DeeplinkError::Io`] if the file cannot be read, otherwise
	/// the same errors as [`DeeplinkConfig::from_toml_str`].
	pub fn from_file(path: impl AsRef<Path>) -> DeeplinkResult<Self> {
		let path = path.as_ref();
		tracing::debug!("loading deeplink configuration from {}", path.display());

		let text = std::fs::read_to_string(path).map_err(|source| DeeplinkError::Io {
			path: path.to_path_buf(),
			source,
		})?;

		Self::from_toml_str(&text)
	}

	/// Returns the origin generated links are rooted at.
	pub fn origin(&self) -> &Origin {
		&self.origin
	}

	/// Returns the route catalog.
	pub fn catalog(&self) -> &RouteCatalog {
		&self.catalog
	}

	/// Consumes the configuration, returning its parts.
	pub fn into_parts(self) -> (Origin, RouteCatalog) {
		(self.origin, self.catalog)
	}
}

/// Builder for [`DeeplinkConfig`].
#[derive(Debug, Clone, Default)]
pub struct DeeplinkConfigBuilder {
	scheme: Option<String>,
	host: Option<String>,
	catalog: Option<RouteCatalog>,
}

impl DeeplinkConfigBuilder {
	/// Sets the scheme (default `https`).
	pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
		self.scheme = Some(scheme.into());
		self
	}

	/// Sets the host (default `app.local`).
	pub fn host(mut self, host: impl Into<String>) -> Self {
		self.host = Some(host.into());
		self
	}

	/// Sets the route catalog (default [`RouteCatalog::default`]).
	pub fn catalog(mut self, catalog: RouteCatalog) -> Self {
		self.catalog = Some(catalog);
		self
	}

	/// Validates and builds the configuration.
	///
	/// # Errors
	///
	/// Returns an error if the scheme or host is invalid.
	pub fn build(self) -> DeeplinkResult<DeeplinkConfig> {
		let origin = Origin::new(
			self.scheme.unwrap_or_else(|| DEFAULT_SCHEME.to_string()),
			self.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
		)?;

		Ok(DeeplinkConfig {
			origin,
			catalog: self.catalog.unwrap_or_default(),
		})
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigTable {
	scheme: Option<String>,
	host: Option<String>,
	catalog: Option<RouteCatalog>,
}

impl TryFrom<ConfigTable> for DeeplinkConfig {
	type Error = DeeplinkError;

	fn try_from(table: ConfigTable) -> Result<Self, Self::Error> {
		DeeplinkConfigBuilder {
			scheme: table.scheme,
			host: table.host,
			catalog: table.catalog,
		}
		.build()
	}
}
