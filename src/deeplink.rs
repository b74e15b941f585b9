//! Deeplink module.
//!
//! This module provides the route catalog, the shareable URI builders and the
//! inbound deeplink parser.
//!
//! # Examples
//!
//! ```rust
//! use navee::deeplink::{AtlasQuery, DeeplinkResolver};
//!
//! let resolver = DeeplinkResolver::default();
//! let uri = resolver.builder().atlas(&AtlasQuery::new().trending(true));
//! assert_eq!(uri.as_str(), "https://app.local/atlas?trending=true");
//! ```

pub use navee_deeplink::*;
