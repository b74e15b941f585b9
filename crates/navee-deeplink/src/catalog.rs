//! Route catalog: logical route names to path templates.
//!
//! The catalog is plain immutable configuration. It is built once, usually
//! through [`DeeplinkConfig`](crate::DeeplinkConfig), and shared by the
//! builders and the parser.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::DeeplinkResult;
use crate::error::DeeplinkError;
use crate::pattern::PathTemplate;
use crate::route::RouteName;

/// Default parameter key for the place identifier.
pub const DEFAULT_ID_PARAM: &str = "id";

const DEFAULT_ROUTES: [(RouteName, &str); 14] = [
	(RouteName::Atlas, "/atlas"),
	(RouteName::PlaceDetail, "/place/:id"),
	(RouteName::Home, "/home"),
	(RouteName::Trails, "/trails"),
	(RouteName::Journey, "/journey"),
	(RouteName::NaveeAi, "/navee-ai"),
	(RouteName::FlightSearch, "/journey/flights"),
	(RouteName::TrainSearch, "/journey/trains"),
	(RouteName::BusSearch, "/journey/buses"),
	(RouteName::CabSearch, "/journey/cabs"),
	(RouteName::HotelSearch, "/journey/hotels"),
	(RouteName::RestaurantSearch, "/journey/restaurants"),
	(RouteName::ActivitySearch, "/journey/activities"),
	(RouteName::PlaceSearch, "/journey/places"),
];

const DEFAULT_JOURNEY_CATEGORIES: [(&str, RouteName); 8] = [
	("/journey/flights", RouteName::FlightSearch),
	("/journey/trains", RouteName::TrainSearch),
	("/journey/buses", RouteName::BusSearch),
	("/journey/cabs", RouteName::CabSearch),
	("/journey/hotels", RouteName::HotelSearch),
	("/journey/restaurants", RouteName::RestaurantSearch),
	("/journey/activities", RouteName::ActivitySearch),
	("/journey/places", RouteName::PlaceSearch),
];

const DEFAULT_MAIN_TABS: [RouteName; 4] = [
	RouteName::Home,
	RouteName::Trails,
	RouteName::Journey,
	RouteName::NaveeAi,
];

/// Static table of route templates and the lookup tables the parser uses.
///
/// Every [`RouteName`] always has a template, so lookups by route never fail.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "CatalogTable")]
pub struct RouteCatalog {
	/// Templates indexed by `RouteName as usize`.
	templates: Vec<PathTemplate>,
	/// Journey category paths, checked in order.
	journey_categories: Vec<String>,
	/// Category path to route name.
	journey_routes: BTreeMap<String, RouteName>,
	/// Top-level tabs, checked in order.
	main_tabs: Vec<RouteName>,
	/// Key under which the place identifier is reported.
	id_param: String,
}

impl RouteCatalog {
	/// Creates a builder preloaded with the default catalog.
	///
	/// # Example
	///
	/// ```rust
	/// use navee_deeplink::{RouteCatalog, RouteName};
	///
	/// let catalog = RouteCatalog::builder()
	///     .route(RouteName::Atlas, "/explore")
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(catalog.path(RouteName::Atlas), "/explore");
	/// ```
	pub fn builder() -> RouteCatalogBuilder {
		RouteCatalogBuilder::new()
	}

	/// Returns the compiled template for a route.
	pub fn template(&self, route: RouteName) -> &PathTemplate {
		&self.templates[route as usize]
	}

	/// Returns the template text for a route.
	pub fn path(&self, route: RouteName) -> &str {
		self.template(route).template()
	}

	/// Iterates over every route and its template.
	pub fn routes(&self) -> impl Iterator<Item = (RouteName, &PathTemplate)> {
		RouteName::ALL
			.into_iter()
			.map(move |route| (route, self.template(route)))
	}

	/// Returns the literal prefix of the place detail template (`/place`).
	pub fn place_detail_prefix(&self) -> &str {
		self.template(RouteName::PlaceDetail).static_prefix()
	}

	/// Returns whether `path` is exactly one of the journey category paths.
	pub fn is_journey_category(&self, path: &str) -> bool {
		self.journey_categories.iter().any(|category| category == path)
	}

	/// Maps a journey category path to its route name.
	///
	/// Category paths without an explicit mapping resolve to the generic
	/// [`RouteName::Journey`]. With the default catalog every category is
	/// mapped, but a configured category may not be.
	pub fn journey_route_for(&self, path: &str) -> RouteName {
		self.journey_routes
			.get(path)
			.copied()
			.unwrap_or(RouteName::Journey)
	}

	/// Returns the main tab whose template is exactly `path`.
	pub fn main_tab_for(&self, path: &str) -> Option<RouteName> {
		self.main_tabs
			.iter()
			.copied()
			.find(|tab| self.template(*tab).is_exact_match(path))
	}

	/// Returns the journey category paths in match order.
	pub fn journey_categories(&self) -> &[String] {
		&self.journey_categories
	}

	/// Returns the main tabs in match order.
	pub fn main_tabs(&self) -> &[RouteName] {
		&self.main_tabs
	}

	/// Returns the key under which the place identifier is reported.
	pub fn id_param(&self) -> &str {
		&self.id_param
	}
}

impl Default for RouteCatalog {
	/// The built-in catalog.
	///
	/// # Panics
	///
	/// Never in practice: the built-in templates are constants known to compile.
	fn default() -> Self {
		RouteCatalogBuilder::new()
			.build()
			.unwrap_or_else(|e| panic!("built-in route catalog is invalid: {}", e))
	}
}

/// Builder for [`RouteCatalog`].
///
/// Starts from the default catalog; every setter overrides one part of it.
#[derive(Debug, Clone)]
pub struct RouteCatalogBuilder {
	routes: BTreeMap<RouteName, String>,
	journey_categories: Vec<String>,
	journey_routes: BTreeMap<String, RouteName>,
	main_tabs: Vec<RouteName>,
	id_param: String,
}

impl Default for RouteCatalogBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl RouteCatalogBuilder {
	/// Creates a builder preloaded with the default catalog.
	pub fn new() -> Self {
		Self {
			routes: DEFAULT_ROUTES
				.iter()
				.map(|(route, template)| (*route, template.to_string()))
				.collect(),
			journey_categories: DEFAULT_JOURNEY_CATEGORIES
				.iter()
				.map(|(path, _)| path.to_string())
				.collect(),
			journey_routes: DEFAULT_JOURNEY_CATEGORIES
				.iter()
				.map(|(path, route)| (path.to_string(), *route))
				.collect(),
			main_tabs: DEFAULT_MAIN_TABS.to_vec(),
			id_param: DEFAULT_ID_PARAM.to_string(),
		}
	}

	/// Sets the path template for a route.
	pub fn route(mut self, route: RouteName, template: impl Into<String>) -> Self {
		self.routes.insert(route, template.into());
		self
	}

	/// Removes every journey category and its mapping.
	pub fn clear_journey_categories(mut self) -> Self {
		self.journey_categories.clear();
		self.journey_routes.clear();
		self
	}

	/// Appends a journey category path.
	///
	/// With `route` set to `None` the category resolves to the generic
	/// [`RouteName::Journey`].
	pub fn journey_category(mut self, path: impl Into<String>, route: Option<RouteName>) -> Self {
		let path = path.into();
		if let Some(route) = route {
			self.journey_routes.insert(path.clone(), route);
		}
		if !self.journey_categories.contains(&path) {
			self.journey_categories.push(path);
		}
		self
	}

	/// Replaces the main tabs.
	pub fn main_tabs(mut self, tabs: impl IntoIterator<Item = RouteName>) -> Self {
		self.main_tabs = tabs.into_iter().collect();
		self
	}

	/// Sets the place identifier parameter key.
	pub fn id_param(mut self, id_param: impl Into<String>) -> Self {
		self.id_param = id_param.into();
		self
	}

	/// Compiles every template and validates the catalog.
	///
	/// # Errors
	///
	/// Returns [`DeeplinkError::InvalidTemplate`] if a template does not
	/// compile, or if the place detail template is not a literal prefix
	/// followed by the identifier parameter.
	pub fn build(self) -> DeeplinkResult<RouteCatalog> {
		let templates = RouteName::ALL
			.iter()
			.map(|route| {
				let template = self
					.routes
					.get(route)
					.map(String::as_str)
					.unwrap_or(DEFAULT_ROUTES[*route as usize].1);
				PathTemplate::new(template)
			})
			.collect::<DeeplinkResult<Vec<_>>>()?;

		// The parser reads the identifier from the last path segment.
		let place = &templates[RouteName::PlaceDetail as usize];
		if place.param_names().len() != 1
			|| place.trailing_param() != Some(self.id_param.as_str())
		{
			return Err(DeeplinkError::InvalidTemplate {
				template: place.template().to_string(),
				reason: format!(
					"place detail template must end with ':{}' and declare no other parameter",
					self.id_param
				),
			});
		}

		Ok(RouteCatalog {
			templates,
			journey_categories: self.journey_categories,
			journey_routes: self.journey_routes,
			main_tabs: self.main_tabs,
			id_param: self.id_param,
		})
	}
}

/// Deserialized form of a catalog, merged over the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CatalogTable {
	routes: BTreeMap<String, String>,
	journey: Option<JourneyTable>,
	main_tabs: Option<Vec<String>>,
	id_param: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct JourneyTable {
	categories: Vec<String>,
	#[serde(default)]
	routes: BTreeMap<String, String>,
}

impl TryFrom<CatalogTable> for RouteCatalog {
	type Error = DeeplinkError;

	fn try_from(table: CatalogTable) -> Result<Self, Self::Error> {
		let mut builder = RouteCatalogBuilder::new();

		for (name, template) in table.routes {
			builder = builder.route(name.parse()?, template);
		}

		if let Some(journey) = table.journey {
			let mut routes = journey
				.routes
				.into_iter()
				.map(|(path, name)| -> DeeplinkResult<(String, RouteName)> {
					Ok((path, name.parse()?))
				})
				.collect::<DeeplinkResult<BTreeMap<_, _>>>()?;

			builder = builder.clear_journey_categories();
			for path in journey.categories {
				let route = routes.remove(&path);
				builder = builder.journey_category(path, route);
			}
		}

		if let Some(tabs) = table.main_tabs {
			let tabs = tabs
				.iter()
				.map(|name| name.parse::<RouteName>())
				.collect::<DeeplinkResult<Vec<_>>>()?;
			builder = builder.main_tabs(tabs);
		}

		if let Some(id_param) = table.id_param {
			builder = builder.id_param(id_param);
		}

		builder.build()
	}
}
