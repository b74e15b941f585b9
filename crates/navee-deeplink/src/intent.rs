//! Resolved navigation intents.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::route::RouteName;

/// The resolved outcome of parsing a deeplink.
///
/// A pure value: two intents are equal when their route and parameters are
/// equal. Parameter values are always the raw, percent-decoded strings from
/// the URI; nothing is converted to numbers or booleans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteIntent {
	route_name: RouteName,
	path_params: BTreeMap<String, String>,
	query_params: BTreeMap<String, String>,
}

impl RouteIntent {
	/// Creates an intent.
	pub fn new(
		route_name: RouteName,
		path_params: BTreeMap<String, String>,
		query_params: BTreeMap<String, String>,
	) -> Self {
		Self {
			route_name,
			path_params,
			query_params,
		}
	}

	/// Returns the resolved route.
	pub fn route_name(&self) -> RouteName {
		self.route_name
	}

	/// Returns the parameters extracted from the path.
	pub fn path_params(&self) -> &BTreeMap<String, String> {
		&self.path_params
	}

	/// Returns the query parameters of the inbound URI.
	pub fn query_params(&self) -> &BTreeMap<String, String> {
		&self.query_params
	}

	/// Returns a single path parameter.
	pub fn path_param(&self, name: &str) -> Option<&str> {
		self.path_params.get(name).map(String::as_str)
	}

	/// Returns a single query parameter.
	pub fn query_param(&self, name: &str) -> Option<&str> {
		self.query_params.get(name).map(String::as_str)
	}

	/// Consumes the intent, returning its parts.
	pub fn into_parts(
		self,
	) -> (
		RouteName,
		BTreeMap<String, String>,
		BTreeMap<String, String>,
	) {
		(self.route_name, self.path_params, self.query_params)
	}
}
