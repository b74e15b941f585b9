//! Configuration loading tests

use std::fs;

use navee_deeplink::{DeeplinkConfig, DeeplinkError, DeeplinkResolver, RouteName};
use rstest::*;
use tempfile::TempDir;

#[fixture]
fn config_dir() -> TempDir {
	TempDir::new().unwrap()
}

#[rstest]
fn test_from_file(config_dir: TempDir) {
	// Arrange
	let path = config_dir.path().join("deeplinks.toml");
	fs::write(
		&path,
		r#"
scheme = "navee"
host = "open"

[catalog]
main_tabs = ["home", "naveeAI"]

[catalog.routes]
placeDetail = "/p/:id"

[catalog.journey]
categories = ["/journey/flights", "/journey/ferries"]

[catalog.journey.routes]
"/journey/flights" = "flightSearch"
"#,
	)
	.unwrap();

	// Act
	let config = DeeplinkConfig::from_file(&path).unwrap();
	let resolver = DeeplinkResolver::new(config);

	// Assert
	assert_eq!(
		resolver.builder().place_detail("abc").unwrap().as_str(),
		"navee://open/p/abc"
	);
	assert_eq!(
		resolver.parse_str("/journey/ferries").unwrap().route_name(),
		RouteName::Journey
	);
	assert_eq!(
		resolver.parse_str("/journey/hotels").unwrap().route_name(),
		RouteName::Atlas
	);
	assert_eq!(
		resolver.parse_str("/trails").unwrap().route_name(),
		RouteName::Atlas
	);
	assert_eq!(
		resolver.parse_str("/navee-ai").unwrap().route_name(),
		RouteName::NaveeAi
	);
}

#[rstest]
fn test_from_file_missing(config_dir: TempDir) {
	let path = config_dir.path().join("absent.toml");

	let result = DeeplinkConfig::from_file(&path);

	match result {
		Err(DeeplinkError::Io { path: reported, .. }) => assert_eq!(reported, path),
		other => panic!("expected Io error, got {:?}", other),
	}
}

#[rstest]
#[case::unknown_route("[catalog.routes]\nsubmarine = \"/sub\"\n")]
#[case::unknown_field("colour = \"blue\"\n")]
#[case::bad_template("[catalog.routes]\natlas = \"atlas\"\n")]
#[case::bad_scheme("scheme = \"9lives\"\n")]
#[case::place_without_id("[catalog.routes]\nplaceDetail = \"/place\"\n")]
#[case::place_id_not_last("[catalog.routes]\nplaceDetail = \"/spots/:id/info\"\n")]
fn test_invalid_config_is_rejected(config_dir: TempDir, #[case] text: &str) {
	let path = config_dir.path().join("deeplinks.toml");
	fs::write(&path, text).unwrap();

	let result = DeeplinkConfig::from_file(&path);

	assert!(matches!(result, Err(DeeplinkError::Config(_))));
}
