//! Inbound deeplink parsing.
//!
//! The parser checks the URI path against the catalog in a fixed priority
//! order, first match wins:
//!
//! 1. Place detail: the path starts with the place detail prefix (`/place`).
//!    The last non-empty segment after the prefix is the identifier, or the
//!    empty string when there is none.
//! 2. Atlas: the path equals the atlas template.
//! 3. Journey category: the path equals one of the category paths.
//! 4. Main tab: the path equals one of the tab templates.
//! 5. Fallback: anything else resolves to atlas.
//!
//! Query parameters are passed through untouched in every case.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::DeeplinkResult;
use crate::catalog::RouteCatalog;
use crate::config::Origin;
use crate::error::DeeplinkError;
use crate::intent::RouteIntent;
use crate::pattern::split_segments;
use crate::route::RouteName;

/// The parser rule that produced an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchRule {
	/// Path starts with the place detail prefix.
	PlaceDetail,
	/// Path is exactly the atlas path.
	Atlas,
	/// Path is exactly a journey category path.
	JourneyCategory,
	/// Path is exactly a main tab path.
	MainTab,
	/// Nothing matched.
	Fallback,
}

impl fmt::Display for MatchRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			MatchRule::PlaceDetail => "place detail",
			MatchRule::Atlas => "atlas",
			MatchRule::JourneyCategory => "journey category",
			MatchRule::MainTab => "main tab",
			MatchRule::Fallback => "fallback",
		})
	}
}

/// Resolves inbound URIs into [`RouteIntent`]s.
#[derive(Debug, Clone)]
pub struct DeeplinkParser {
	catalog: Arc<RouteCatalog>,
	origin: Origin,
}

impl DeeplinkParser {
	/// Creates a parser. `origin` is only used to resolve root-relative links
	/// in [`DeeplinkParser::parse_str`].
	pub fn new(catalog: Arc<RouteCatalog>, origin: Origin) -> Self {
		Self { catalog, origin }
	}

	/// Returns the route catalog.
	pub fn catalog(&self) -> &RouteCatalog {
		&self.catalog
	}

	/// Resolves a URI. Never fails: unrecognized paths resolve to atlas.
	///
	/// # Example
	///
	/// ```rust
	/// use navee_deeplink::{DeeplinkResolver, RouteName, Url};
	///
	/// let resolver = DeeplinkResolver::default();
	/// let uri = Url::parse("https://app.local/place/abc123").unwrap();
	/// let intent = resolver.parser().parse(&uri);
	///
	/// assert_eq!(intent.route_name(), RouteName::PlaceDetail);
	/// assert_eq!(intent.path_param("id"), Some("abc123"));
	/// ```
	pub fn parse(&self, uri: &Url) -> RouteIntent {
		self.explain(uri).0
	}

	/// Resolves a URI and reports which rule matched.
	pub fn explain(&self, uri: &Url) -> (RouteIntent, MatchRule) {
		let path = uri.path();
		let query_params: BTreeMap<String, String> = uri.query_pairs().into_owned().collect();
		let (route, path_params, rule) = self.match_path(path);

		match rule {
			MatchRule::Fallback => tracing::debug!(
				"no deeplink rule matched path {:?}; falling back to {}",
				path,
				route
			),
			_ => tracing::debug!("deeplink path {:?} resolved to {} by {} rule", path, route, rule),
		}

		(RouteIntent::new(route, path_params, query_params), rule)
	}

	/// Parses text as a URI and resolves it.
	///
	/// Accepts absolute URIs (`navee://open/place/abc`) as well as
	/// root-relative links (`/place/abc?ref=share`), which are resolved
	/// against the configured origin.
	///
	/// # Errors
	///
	/// Returns [`DeeplinkError::InvalidUri`] if `input` is not a URI.
	pub fn parse_str(&self, input: &str) -> DeeplinkResult<RouteIntent> {
		let uri = self.to_url(input)?;
		Ok(self.parse(&uri))
	}

	/// Resolves a URI, rejecting place detail links without an identifier.
	///
	/// [`DeeplinkParser::parse`] treats `/place` as a place detail link with
	/// an empty identifier; this variant reports it instead.
	///
	/// # Errors
	///
	/// Returns [`DeeplinkError::MissingPathParam`] for a place detail link
	/// whose identifier is empty.
	pub fn parse_strict(&self, uri: &Url) -> DeeplinkResult<RouteIntent> {
		let intent = self.parse(uri);
		let id_param = self.catalog.id_param();

		if intent.route_name() == RouteName::PlaceDetail
			&& intent.path_param(id_param).is_none_or(str::is_empty)
		{
			return Err(DeeplinkError::MissingPathParam {
				route: RouteName::PlaceDetail,
				param: id_param.to_string(),
			});
		}

		Ok(intent)
	}

	/// Converts text into a URI, resolving relative links against the origin.
	///
	/// # Errors
	///
	/// Returns [`DeeplinkError::InvalidUri`] if `input` is not a URI.
	pub fn to_url(&self, input: &str) -> DeeplinkResult<Url> {
		match Url::parse(input) {
			Ok(uri) => Ok(uri),
			Err(url::ParseError::RelativeUrlWithoutBase) => {
				Ok(self.origin.base_url().join(input)?)
			}
			Err(e) => Err(e.into()),
		}
	}

	fn match_path(&self, path: &str) -> (RouteName, BTreeMap<String, String>, MatchRule) {
		let catalog = &*self.catalog;

		if let Some(rest) = path.strip_prefix(catalog.place_detail_prefix()) {
			let id = split_segments(rest)
				.last()
				.map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
				.unwrap_or_default();
			let path_params = BTreeMap::from([(catalog.id_param().to_string(), id)]);
			return (RouteName::PlaceDetail, path_params, MatchRule::PlaceDetail);
		}

		if catalog.template(RouteName::Atlas).is_exact_match(path) {
			return (RouteName::Atlas, BTreeMap::new(), MatchRule::Atlas);
		}

		if catalog.is_journey_category(path) {
			let route = catalog.journey_route_for(path);
			return (route, BTreeMap::new(), MatchRule::JourneyCategory);
		}

		if let Some(tab) = catalog.main_tab_for(path) {
			return (tab, BTreeMap::new(), MatchRule::MainTab);
		}

		(RouteName::FALLBACK, BTreeMap::new(), MatchRule::Fallback)
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	fn parser() -> DeeplinkParser {
		DeeplinkParser::new(Arc::new(RouteCatalog::default()), Origin::default())
	}

	fn url(text: &str) -> Url {
		Url::parse(text).unwrap()
	}

	#[rstest]
	#[case("https://app.local/place/abc123", MatchRule::PlaceDetail)]
	#[case("https://app.local/atlas", MatchRule::Atlas)]
	#[case("https://app.local/journey/hotels", MatchRule::JourneyCategory)]
	#[case("https://app.local/trails", MatchRule::MainTab)]
	#[case("https://app.local/atlas/extra", MatchRule::Fallback)]
	#[case("https://app.local/", MatchRule::Fallback)]
	fn test_explain_reports_rule(#[case] uri: &str, #[case] expected: MatchRule) {
		let (_, rule) = parser().explain(&url(uri));
		assert_eq!(rule, expected);
	}

	#[rstest]
	fn test_place_identifier_is_percent_decoded() {
		let intent = parser().parse(&url("https://app.local/place/caf%C3%A9%20du%20port"));
		assert_eq!(intent.path_param("id"), Some("café du port"));
	}

	#[rstest]
	fn test_duplicate_query_keys_keep_last_value() {
		let intent = parser().parse(&url("https://app.local/atlas?sort=near&sort=top"));
		assert_eq!(intent.query_param("sort"), Some("top"));
	}

	#[rstest]
	fn test_to_url_resolves_relative_links() {
		let uri = parser().to_url("/journey/buses?from=pune").unwrap();
		assert_eq!(uri.as_str(), "https://app.local/journey/buses?from=pune");
	}

	#[rstest]
	fn test_to_url_rejects_garbage() {
		let result = parser().to_url("http://[::1");
		assert!(matches!(result, Err(DeeplinkError::InvalidUri(_))));
	}

	#[rstest]
	fn test_match_rule_display() {
		assert_eq!(MatchRule::JourneyCategory.to_string(), "journey category");
		assert_eq!(MatchRule::Fallback.to_string(), "fallback");
	}
}
