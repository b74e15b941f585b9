//! Inbound deeplink resolution tests
//!
//! Covers the rule priority order, the literal scenarios the app relies on,
//! and the lenient and strict handling of place links without an identifier.


use std::collections::BTreeMap;

use fixtures::{custom_scheme_resolver, relocated_resolver, resolver, url};
use navee_deeplink::{AtlasQuery, DeeplinkError, DeeplinkResolver, MatchRule, RouteName};
use rstest::*;

// ============================================================================
// Literal Scenarios
// ============================================================================

#[rstest]
fn test_place_detail_with_identifier(resolver: DeeplinkResolver) {
	// Act
	let intent = resolver.parse(&url("https://app.local/place/abc123"));

	// Assert
	assert_eq!(intent.route_name(), RouteName::PlaceDetail);
	assert_eq!(
		intent.path_params(),
		&BTreeMap::from([("id".to_string(), "abc123".to_string())])
	);
	assert!(intent.query_params().is_empty());
}

#[rstest]
fn test_atlas_keeps_query(resolver: DeeplinkResolver) {
	// Act
	let intent = resolver.parse(&url("https://app.local/atlas?trending=true"));

	// Assert
	assert_eq!(intent.route_name(), RouteName::Atlas);
	assert!(intent.path_params().is_empty());
	assert_eq!(
		intent.query_params(),
		&BTreeMap::from([("trending".to_string(), "true".to_string())])
	);
}

#[rstest]
#[case("https://app.local/place")]
#[case("https://app.local/place/")]
#[case("https://app.local/place//")]
fn test_place_without_identifier_is_empty(resolver: DeeplinkResolver, #[case] uri: &str) {
	let intent = resolver.parse(&url(uri));

	assert_eq!(intent.route_name(), RouteName::PlaceDetail);
	assert_eq!(intent.path_param("id"), Some(""));
}

#[rstest]
fn test_atlas_link_parses_to_exact_query(resolver: DeeplinkResolver) {
	// Arrange
	let query = AtlasQuery::new().query("beach").radius_km(5.0);

	// Act
	let intent = resolver.parse(&resolver.builder().atlas(&query));

	// Assert: no extra or missing keys
	assert_eq!(intent.route_name(), RouteName::Atlas);
	assert!(intent.path_params().is_empty());
	assert_eq!(
		intent.query_params(),
		&BTreeMap::from([
			("q".to_string(), "beach".to_string()),
			("radius".to_string(), "5.0".to_string()),
		])
	);
}

#[rstest]
#[case("abc123")]
#[case("...")]
#[case("café du port")]
#[case("a/b?c#d")]
fn test_place_link_parses_to_same_id(resolver: DeeplinkResolver, #[case] id: &str) {
	let uri = resolver.builder().place_detail(id).unwrap();

	let intent = resolver.parse(&uri);

	assert_eq!(intent.route_name(), RouteName::PlaceDetail);
	assert_eq!(intent.path_param("id"), Some(id));
}

// ============================================================================
// Rule Priority
// ============================================================================

#[rstest]
#[case("/journey/flights", RouteName::FlightSearch)]
#[case("/journey/trains", RouteName::TrainSearch)]
#[case("/journey/buses", RouteName::BusSearch)]
#[case("/journey/cabs", RouteName::CabSearch)]
#[case("/journey/hotels", RouteName::HotelSearch)]
#[case("/journey/restaurants", RouteName::RestaurantSearch)]
#[case("/journey/activities", RouteName::ActivitySearch)]
#[case("/journey/places", RouteName::PlaceSearch)]
fn test_journey_categories(
	resolver: DeeplinkResolver,
	#[case] path: &str,
	#[case] expected: RouteName,
) {
	let intent = resolver.parse_str(path).unwrap();

	assert_eq!(intent.route_name(), expected);
	assert!(intent.path_params().is_empty());
}

#[rstest]
#[case("/home", RouteName::Home)]
#[case("/trails", RouteName::Trails)]
#[case("/journey", RouteName::Journey)]
#[case("/navee-ai", RouteName::NaveeAi)]
fn test_main_tabs(resolver: DeeplinkResolver, #[case] path: &str, #[case] expected: RouteName) {
	let parser = resolver.parser();

	let (intent, rule) = parser.explain(&parser.to_url(path).unwrap());

	assert_eq!(intent.route_name(), expected);
	assert_eq!(rule, MatchRule::MainTab);
}

#[rstest]
#[case("/")]
#[case("/settings")]
#[case("/atlas/")]
#[case("/journey/flights/")]
#[case("/journey/submarines")]
#[case("/HOME")]
fn test_unknown_paths_fall_back_to_atlas(resolver: DeeplinkResolver, #[case] path: &str) {
	let parser = resolver.parser();

	let (intent, rule) = parser.explain(&parser.to_url(path).unwrap());

	assert_eq!(intent.route_name(), RouteName::Atlas);
	assert_eq!(rule, MatchRule::Fallback);
	assert!(intent.path_params().is_empty());
}

#[rstest]
#[case("https://app.local/totally/unknown/path", &[])]
#[case("https://app.local/totally/unknown/path?q=beach&zoom=12", &[("q", "beach"), ("zoom", "12")])]
#[case("navee://open/totally/unknown/path?from=share", &[("from", "share")])]
fn test_fallback_keeps_query(
	resolver: DeeplinkResolver,
	#[case] uri: &str,
	#[case] expected_query: &[(&str, &str)],
) {
	let intent = resolver.parse(&url(uri));

	let expected: BTreeMap<String, String> = expected_query
		.iter()
		.map(|(key, value)| (key.to_string(), value.to_string()))
		.collect();
	assert_eq!(intent.route_name(), RouteName::Atlas);
	assert!(intent.path_params().is_empty());
	assert_eq!(intent.query_params(), &expected);
}

#[rstest]
fn test_place_prefix_is_plain_string_prefix(resolver: DeeplinkResolver) {
	// "/placeholder" starts with "/place", so it resolves as place detail
	let intent = resolver.parse_str("/placeholder").unwrap();

	assert_eq!(intent.route_name(), RouteName::PlaceDetail);
	assert_eq!(intent.path_param("id"), Some("holder"));
}

#[rstest]
fn test_place_uses_last_segment(resolver: DeeplinkResolver) {
	let intent = resolver.parse_str("/place/lisbon/abc123").unwrap();

	assert_eq!(intent.path_param("id"), Some("abc123"));
}

#[rstest]
fn test_scheme_and_host_are_ignored(custom_scheme_resolver: DeeplinkResolver) {
	let a = custom_scheme_resolver.parse(&url("navee://open/place/p_1?ref=share"));
	let b = custom_scheme_resolver.parse(&url("https://elsewhere.example/place/p_1?ref=share"));

	assert_eq!(a, b);
	assert_eq!(a.route_name(), RouteName::PlaceDetail);
}

#[rstest]
fn test_parsing_is_idempotent(resolver: DeeplinkResolver) {
	let uri = url("https://app.local/journey/hotels?city=goa&guests=2");

	assert_eq!(resolver.parse(&uri), resolver.parse(&uri));
}

// ============================================================================
// Strict Mode
// ============================================================================

#[rstest]
fn test_strict_rejects_empty_identifier(resolver: DeeplinkResolver) {
	let result = resolver.parser().parse_strict(&url("https://app.local/place"));

	match result {
		Err(DeeplinkError::MissingPathParam { route, param }) => {
			assert_eq!(route, RouteName::PlaceDetail);
			assert_eq!(param, "id");
		}
		other => panic!("expected MissingPathParam, got {:?}", other),
	}
}

#[rstest]
#[case("https://app.local/place/abc123")]
#[case("https://app.local/atlas")]
#[case("https://app.local/somewhere")]
fn test_strict_accepts_everything_else(resolver: DeeplinkResolver, #[case] uri: &str) {
	let uri = url(uri);

	assert_eq!(
		resolver.parser().parse_strict(&uri).unwrap(),
		resolver.parse(&uri)
	);
}

// ============================================================================
// Custom Catalog
// ============================================================================

#[rstest]
fn test_relocated_routes(relocated_resolver: DeeplinkResolver) {
	let parser = relocated_resolver.parser();

	let (place, _) = parser.explain(&parser.to_url("/spots/p_9").unwrap());
	let (atlas, atlas_rule) = parser.explain(&parser.to_url("/explore").unwrap());
	let (old_atlas, old_atlas_rule) = parser.explain(&parser.to_url("/atlas").unwrap());

	assert_eq!(place.route_name(), RouteName::PlaceDetail);
	assert_eq!(place.path_param("slug"), Some("p_9"));
	assert_eq!(atlas.route_name(), RouteName::Atlas);
	assert_eq!(atlas_rule, MatchRule::Atlas);
	assert_eq!(old_atlas.route_name(), RouteName::Atlas);
	assert_eq!(old_atlas_rule, MatchRule::Fallback);
}

#[rstest]
fn test_unmapped_category_resolves_to_journey(relocated_resolver: DeeplinkResolver) {
	let parser = relocated_resolver.parser();

	let (intent, rule) = parser.explain(&parser.to_url("/journey/ferries").unwrap());

	assert_eq!(intent.route_name(), RouteName::Journey);
	assert_eq!(rule, MatchRule::JourneyCategory);
}
