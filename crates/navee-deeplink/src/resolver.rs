//! One-stop resolver sharing a catalog between the builders and the parser.

use std::sync::Arc;

use url::Url;

use crate::DeeplinkResult;
use crate::builder::UriBuilder;
use crate::config::DeeplinkConfig;
use crate::intent::RouteIntent;
use crate::parser::DeeplinkParser;

/// Builders and parser over a single configuration.
#[derive(Debug, Clone)]
pub struct DeeplinkResolver {
	config: DeeplinkConfig,
	builder: UriBuilder,
	parser: DeeplinkParser,
}

impl DeeplinkResolver {
	/// Creates a resolver from a validated configuration.
	pub fn new(config: DeeplinkConfig) -> Self {
		let catalog = Arc::new(config.catalog().clone());
		let origin = config.origin().clone();

		Self {
			builder: UriBuilder::new(Arc::clone(&catalog), origin.clone()),
			parser: DeeplinkParser::new(catalog, origin),
			config,
		}
	}

	/// Returns the configuration this resolver was built from.
	pub fn config(&self) -> &DeeplinkConfig {
		&self.config
	}

	/// Returns the URI builders.
	pub fn builder(&self) -> &UriBuilder {
		&self.builder
	}

	/// Returns the parser.
	pub fn parser(&self) -> &DeeplinkParser {
		&self.parser
	}

	/// Resolves a URI. See [`DeeplinkParser::parse`].
	pub fn parse(&self, uri: &Url) -> RouteIntent {
		self.parser.parse(uri)
	}

	/// Parses text and resolves it. See [`DeeplinkParser::parse_str`].
	///
	/// # Errors
	///
	/// Returns [`DeeplinkError::InvalidUri`](crate::DeeplinkError::InvalidUri)
	/// if `input` is not a URI.
	pub fn parse_str(&self, input: &str) -> DeeplinkResult<RouteIntent> {
		self.parser.parse_str(input)
	}
}

impl Default for DeeplinkResolver {
	fn default() -> Self {
		Self::new(DeeplinkConfig::default())
	}
}

impl From<DeeplinkConfig> for DeeplinkResolver {
	fn from(config: DeeplinkConfig) -> Self {
		Self::new(config)
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;
	use crate::route::RouteName;

	#[rstest]
	fn test_builder_and_parser_share_catalog() {
		let resolver = DeeplinkResolver::default();

		assert!(std::ptr::eq(
			resolver.builder().catalog(),
			resolver.parser().catalog()
		));
	}

	#[rstest]
	fn test_parse_str_delegates_to_parser() {
		let resolver = DeeplinkResolver::default();
		let intent = resolver.parse_str("/navee-ai").unwrap();

		assert_eq!(intent.route_name(), RouteName::NaveeAi);
	}
}
