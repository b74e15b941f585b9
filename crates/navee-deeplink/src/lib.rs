//! Deeplink support for the Navee travel app.
//!
//! This crate maps inbound links onto named navigation intents and builds
//! shareable links for the same destinations:
//!
//! - **Route catalog**: route names to path templates, injected as configuration
//! - **URI builders**: atlas, place detail and journey category links
//! - **Deeplink parser**: fixed-priority resolution of an inbound URI into a
//!   [`RouteIntent`], falling back to the atlas explorer instead of failing
//!
//! # Quick Start
//!
//! ```rust
//! use navee_deeplink::{AtlasQuery, DeeplinkResolver, RouteName};
//!
//! let resolver = DeeplinkResolver::default();
//!
//! let uri = resolver
//!     .builder()
//!     .atlas(&AtlasQuery::new().nearby(true).center(12.97, 77.59));
//! assert_eq!(
//!     uri.as_str(),
//!     "https://app.local/atlas?nearby=true&lat=12.97&lng=77.59"
//! );
//!
//! let intent = resolver.parse(&uri);
//! assert_eq!(intent.route_name(), RouteName::Atlas);
//! assert_eq!(intent.query_param("lat"), Some("12.97"));
//! ```
//!
//! # Custom Configuration
//!
//! ```rust
//! use navee_deeplink::{DeeplinkConfig, DeeplinkResolver, RouteCatalog, RouteName};
//!
//! let catalog = RouteCatalog::builder()
//!     .route(RouteName::PlaceDetail, "/spot/:id")
//!     .build()
//!     .unwrap();
//! let config = DeeplinkConfig::builder()
//!     .scheme("navee")
//!     .host("open")
//!     .catalog(catalog)
//!     .build()
//!     .unwrap();
//!
//! let resolver = DeeplinkResolver::new(config);
//! assert_eq!(
//!     resolver.builder().place_detail("p_1").unwrap().as_str(),
//!     "navee://open/spot/p_1"
//! );
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod intent;
pub mod parser;
pub mod pattern;
pub mod resolver;
pub mod route;

// Re-export main types for convenience
pub use builder::{AtlasQuery, UriBuilder};
pub use catalog::{DEFAULT_ID_PARAM, RouteCatalog, RouteCatalogBuilder};
pub use config::{DEFAULT_HOST, DEFAULT_SCHEME, DeeplinkConfig, DeeplinkConfigBuilder, Origin};
pub use error::{DeeplinkError, validate_host, validate_scheme};
pub use intent::RouteIntent;
pub use parser::{DeeplinkParser, MatchRule};
pub use pattern::{PathTemplate, split_segments};
pub use resolver::DeeplinkResolver;
pub use route::RouteName;

pub use url::Url;

/// Result type for deeplink operations.
pub type DeeplinkResult<T> = Result<T, DeeplinkError>;
