//! Shareable URI builders.
//!
//! Once a [`UriBuilder`] exists (its origin already validated), the atlas
//! and journey category builders always produce a URI. Builders that fill a
//! template from path parameters fail only when a parameter is missing or
//! is a `.`/`..` segment, which a URI path cannot carry. An empty place
//! identifier is accepted and yields an empty trailing segment.

use std::collections::BTreeMap;
use std::sync::Arc;

use url::Url;

use crate::DeeplinkResult;
use crate::catalog::RouteCatalog;
use crate::config::Origin;
use crate::error::DeeplinkError;
use crate::intent::RouteIntent;
use crate::pattern::{is_dot_segment, split_segments};
use crate::route::RouteName;

/// A value that can be written into a query string.
trait QueryValue {
	fn to_query_value(&self) -> String;
}

impl QueryValue for String {
	fn to_query_value(&self) -> String {
		self.clone()
	}
}

impl QueryValue for bool {
	fn to_query_value(&self) -> String {
		self.to_string()
	}
}

impl QueryValue for f64 {
	/// Shortest round-trip form, always with a fractional part (`5.0`, `12.97`).
	fn to_query_value(&self) -> String {
		format!("{:?}", self)
	}
}

/// Optional filters for the atlas explorer link.
///
/// Every field is optional; only the ones that are set end up in the query
/// string, in this order:
///
/// | Field | Key |
/// | --- | --- |
/// | `query` | `q` |
/// | `region` | `region` |
/// | `nearby` | `nearby` |
/// | `trending` | `trending` |
/// | `open_now` | `openNow` |
/// | `emotion` | `emotion` |
/// | `category` | `category` |
/// | `sort` | `sort` |
/// | `price` | `price` |
/// | `rating` | `rating` |
/// | `radius_km` | `radius` |
/// | `lat` | `lat` |
/// | `lng` | `lng` |
/// | `zoom` | `zoom` |
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtlasQuery {
	/// Free-text search.
	pub query: Option<String>,
	/// Region filter.
	pub region: Option<String>,
	/// Only places near the user.
	pub nearby: Option<bool>,
	/// Only trending places.
	pub trending: Option<bool>,
	/// Only places open right now.
	pub open_now: Option<bool>,
	/// Mood filter.
	pub emotion: Option<String>,
	/// Place category.
	pub category: Option<String>,
	/// Sort order.
	pub sort: Option<String>,
	/// Price band.
	pub price: Option<String>,
	/// Rating band.
	pub rating: Option<String>,
	/// Search radius in kilometres.
	pub radius_km: Option<f64>,
	/// Map centre latitude.
	pub lat: Option<f64>,
	/// Map centre longitude.
	pub lng: Option<f64>,
	/// Map zoom level.
	pub zoom: Option<f64>,
}

impl AtlasQuery {
	/// Creates an empty query.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the free-text search.
	pub fn query(mut self, query: impl Into<String>) -> Self {
		self.query = Some(query.into());
		self
	}

	/// Sets the region filter.
	pub fn region(mut self, region: impl Into<String>) -> Self {
		self.region = Some(region.into());
		self
	}

	/// Sets the nearby flag.
	pub fn nearby(mut self, nearby: bool) -> Self {
		self.nearby = Some(nearby);
		self
	}

	/// Sets the trending flag.
	pub fn trending(mut self, trending: bool) -> Self {
		self.trending = Some(trending);
		self
	}

	/// Sets the open-now flag.
	pub fn open_now(mut self, open_now: bool) -> Self {
		self.open_now = Some(open_now);
		self
	}

	/// Sets the mood filter.
	pub fn emotion(mut self, emotion: impl Into<String>) -> Self {
		self.emotion = Some(emotion.into());
		self
	}

	/// Sets the place category.
	pub fn category(mut self, category: impl Into<String>) -> Self {
		self.category = Some(category.into());
		self
	}

	/// Sets the sort order.
	pub fn sort(mut self, sort: impl Into<String>) -> Self {
		self.sort = Some(sort.into());
		self
	}

	/// Sets the price band.
	pub fn price(mut self, price: impl Into<String>) -> Self {
		self.price = Some(price.into());
		self
	}

	/// Sets the rating band.
	pub fn rating(mut self, rating: impl Into<String>) -> Self {
		self.rating = Some(rating.into());
		self
	}

	/// Sets the search radius in kilometres.
	pub fn radius_km(mut self, radius_km: f64) -> Self {
		self.radius_km = Some(radius_km);
		self
	}

	/// Sets the map centre.
	pub fn center(mut self, lat: f64, lng: f64) -> Self {
		self.lat = Some(lat);
		self.lng = Some(lng);
		self
	}

	/// Sets the map zoom level.
	pub fn zoom(mut self, zoom: f64) -> Self {
		self.zoom = Some(zoom);
		self
	}

	/// Returns the query pairs for every field that is set.
	pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
		fn push<T: QueryValue>(
			pairs: &mut Vec<(&'static str, String)>,
			key: &'static str,
			value: &Option<T>,
		) {
			if let Some(value) = value {
				pairs.push((key, value.to_query_value()));
			}
		}

		let mut pairs = Vec::new();
		push(&mut pairs, "q", &self.query);
		push(&mut pairs, "region", &self.region);
		push(&mut pairs, "nearby", &self.nearby);
		push(&mut pairs, "trending", &self.trending);
		push(&mut pairs, "openNow", &self.open_now);
		push(&mut pairs, "emotion", &self.emotion);
		push(&mut pairs, "category", &self.category);
		push(&mut pairs, "sort", &self.sort);
		push(&mut pairs, "price", &self.price);
		push(&mut pairs, "rating", &self.rating);
		push(&mut pairs, "radius", &self.radius_km);
		push(&mut pairs, "lat", &self.lat);
		push(&mut pairs, "lng", &self.lng);
		push(&mut pairs, "zoom", &self.zoom);
		pairs
	}
}

/// Builds shareable URIs for catalog routes.
#[derive(Debug, Clone)]
pub struct UriBuilder {
	catalog: Arc<RouteCatalog>,
	origin: Origin,
}

impl UriBuilder {
	/// Creates a builder rooted at `origin`.
	pub fn new(catalog: Arc<RouteCatalog>, origin: Origin) -> Self {
		Self { catalog, origin }
	}

	/// Returns a builder that shares this catalog but roots links at another
	/// scheme and host.
	///
	/// # Errors
	///
	/// Returns an error if the scheme or host is invalid.
	pub fn with_origin(
		&self,
		scheme: impl Into<String>,
		host: impl Into<String>,
	) -> DeeplinkResult<Self> {
		Ok(Self {
			catalog: Arc::clone(&self.catalog),
			origin: Origin::new(scheme, host)?,
		})
	}

	/// Returns the origin links are rooted at.
	pub fn origin(&self) -> &Origin {
		&self.origin
	}

	/// Returns the route catalog.
	pub fn catalog(&self) -> &RouteCatalog {
		&self.catalog
	}

	/// Builds a link to the atlas explorer.
	///
	/// # Example
	///
	/// ```rust
	/// use navee_deeplink::{AtlasQuery, DeeplinkResolver};
	///
	/// let resolver = DeeplinkResolver::default();
	/// let uri = resolver.builder().atlas(&AtlasQuery::new().query("beach").radius_km(5.0));
	///
	/// assert_eq!(uri.as_str(), "https://app.local/atlas?q=beach&radius=5.0");
	/// ```
	pub fn atlas(&self, query: &AtlasQuery) -> Url {
		let path = self.catalog.path(RouteName::Atlas);
		let url = self.compose(split_segments(path), query.to_query_pairs());
		tracing::trace!("built atlas link {}", url);
		url
	}

	/// Builds a link to a single place.
	///
	/// The identifier becomes the last path segment, percent-encoded. An
	/// empty identifier yields `/place/`.
	///
	/// # Errors
	///
	/// Returns [`DeeplinkError::InvalidPathParam`] if `id` is `.` or `..`.
	pub fn place_detail(&self, id: &str) -> DeeplinkResult<Url> {
		let path_params = BTreeMap::from([(self.catalog.id_param().to_string(), id.to_string())]);
		self.route(
			RouteName::PlaceDetail,
			&path_params,
			std::iter::empty::<(&str, &str)>(),
		)
	}

	/// Builds a link to a journey category path such as `/journey/flights`.
	///
	/// An empty `query` produces a URI with no query component at all.
	pub fn journey_category<I, K, V>(&self, category_path: &str, query: I) -> Url
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		let url = self.compose(split_segments(category_path), query);
		tracing::trace!("built journey category link {}", url);
		url
	}

	/// Builds a link to a journey category addressed by route name.
	///
	/// The route's template is filled like [`UriBuilder::route`] with no
	/// path parameters, so a parameterized route is reported rather than
	/// leaking its placeholder into the link.
	///
	/// # Errors
	///
	/// Returns [`DeeplinkError::MissingPathParam`] if the route's template
	/// declares a parameter, e.g. [`RouteName::PlaceDetail`].
	pub fn journey<I, K, V>(&self, route: RouteName, query: I) -> DeeplinkResult<Url>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		self.route(route, &BTreeMap::new(), query)
	}

	/// Builds a link to any route, filling its template from `path_params`.
	///
	/// # Errors
	///
	/// Returns [`DeeplinkError::MissingPathParam`] if the template declares a
	/// parameter that `path_params` does not provide, and
	/// [`DeeplinkError::InvalidPathParam`] if a parameter value is `.` or `..`.
	pub fn route<I, K, V>(
		&self,
		route: RouteName,
		path_params: &BTreeMap<String, String>,
		query: I,
	) -> DeeplinkResult<Url>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		let template = self.catalog.template(route);

		for name in template.param_names() {
			if let Some(value) = path_params.get(name).filter(|value| is_dot_segment(value)) {
				return Err(DeeplinkError::InvalidPathParam {
					route,
					param: name.clone(),
					value: value.clone(),
				});
			}
		}

		let segments = template.fill(path_params).ok_or_else(|| {
			let missing = template
				.param_names()
				.iter()
				.find(|name| !path_params.contains_key(*name))
				.cloned()
				.unwrap_or_default();
			DeeplinkError::MissingPathParam {
				route,
				param: missing,
			}
		})?;

		let url = self.compose(segments, query);
		tracing::trace!("built {} link {}", route, url);
		Ok(url)
	}

	/// Rebuilds a shareable link from a resolved intent.
	///
	/// # Errors
	///
	/// Returns [`DeeplinkError::MissingPathParam`] if the intent lacks a path
	/// parameter its route's template needs, and
	/// [`DeeplinkError::InvalidPathParam`] for a `.` or `..` value.
	pub fn intent_uri(&self, intent: &RouteIntent) -> DeeplinkResult<Url> {
		self.route(
			intent.route_name(),
			intent.path_params(),
			intent.query_params(),
		)
	}

	fn compose<'a, S, I, K, V>(&self, segments: S, query: I) -> Url
	where
		S: IntoIterator<Item = &'a str>,
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		let mut url = self.origin.base_url().clone();

		// Origin guarantees a base URL, so the path is always editable.
		if let Ok(mut path) = url.path_segments_mut() {
			path.clear().extend(segments);
		}

		let mut pairs = query.into_iter().peekable();
		if pairs.peek().is_some() {
			url.query_pairs_mut().extend_pairs(pairs);
		}

		url
	}
}
