//! # Navee
//!
//! Deep links and shareable URIs for the Navee travel app.
//!
//! The facade re-exports the workspace crates behind feature flags, so an app
//! can depend on `navee` alone.
//!
//! ## Feature Flags
//!
//! - `deeplink` (default) - Deeplink parsing and URI builders
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "deeplink")]
//! # {
//! use navee::deeplink::{DeeplinkResolver, RouteName};
//!
//! let resolver = DeeplinkResolver::default();
//! let intent = resolver.parse_str("/journey/flights?from=BLR").unwrap();
//!
//! assert_eq!(intent.route_name(), RouteName::FlightSearch);
//! assert_eq!(intent.query_param("from"), Some("BLR"));
//! # }
//! ```

#[cfg(feature = "deeplink")]
pub mod deeplink;
