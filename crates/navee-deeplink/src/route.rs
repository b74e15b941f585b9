//! Logical route names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeeplinkError;

/// A logical, stable identifier for a navigable screen.
///
/// Route names are independent of their URI path representation; the
/// mapping from names to paths lives in the [`RouteCatalog`](crate::RouteCatalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteName {
	/// Places explorer. Also the target of unrecognized links.
	Atlas,
	/// A single place, addressed by identifier.
	PlaceDetail,
	/// Home tab.
	Home,
	/// Trails tab.
	Trails,
	/// Journey tab. Also used for journey categories with no dedicated route.
	Journey,
	/// AI trip-planning assistant tab.
	#[serde(rename = "naveeAI")]
	NaveeAi,
	/// Flight search.
	FlightSearch,
	/// Train search.
	TrainSearch,
	/// Bus search.
	BusSearch,
	/// Cab search.
	CabSearch,
	/// Hotel search.
	HotelSearch,
	/// Restaurant search.
	RestaurantSearch,
	/// Activity search.
	ActivitySearch,
	/// Place search within the journey flow.
	PlaceSearch,
}

impl RouteName {
	/// Every known route, in declaration order.
	pub const ALL: [RouteName; 14] = [
		RouteName::Atlas,
		RouteName::PlaceDetail,
		RouteName::Home,
		RouteName::Trails,
		RouteName::Journey,
		RouteName::NaveeAi,
		RouteName::FlightSearch,
		RouteName::TrainSearch,
		RouteName::BusSearch,
		RouteName::CabSearch,
		RouteName::HotelSearch,
		RouteName::RestaurantSearch,
		RouteName::ActivitySearch,
		RouteName::PlaceSearch,
	];

	/// Route used when no rule matches an inbound link.
	pub const FALLBACK: RouteName = RouteName::Atlas;

	/// Returns the wire name of this route.
	pub const fn as_str(self) -> &'static str {
		match self {
			RouteName::Atlas => "atlas",
			RouteName::PlaceDetail => "placeDetail",
			RouteName::Home => "home",
			RouteName::Trails => "trails",
			RouteName::Journey => "journey",
			RouteName::NaveeAi => "naveeAI",
			RouteName::FlightSearch => "flightSearch",
			RouteName::TrainSearch => "trainSearch",
			RouteName::BusSearch => "busSearch",
			RouteName::CabSearch => "cabSearch",
			RouteName::HotelSearch => "hotelSearch",
			RouteName::RestaurantSearch => "restaurantSearch",
			RouteName::ActivitySearch => "activitySearch",
			RouteName::PlaceSearch => "placeSearch",
		}
	}

	/// Returns whether this route is one of the four top-level tabs.
	pub const fn is_main_tab(self) -> bool {
		matches!(
			self,
			RouteName::Home | RouteName::Trails | RouteName::Journey | RouteName::NaveeAi
		)
	}

	/// Returns whether this route is a journey search category.
	pub const fn is_journey_category(self) -> bool {
		matches!(
			self,
			RouteName::FlightSearch
				| RouteName::TrainSearch
				| RouteName::BusSearch
				| RouteName::CabSearch
				| RouteName::HotelSearch
				| RouteName::RestaurantSearch
				| RouteName::ActivitySearch
				| RouteName::PlaceSearch
		)
	}
}

impl fmt::Display for RouteName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for RouteName {
	type Err = DeeplinkError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		RouteName::ALL
			.into_iter()
			.find(|route| route.as_str() == s)
			.ok_or_else(|| DeeplinkError::UnknownRoute(s.to_string()))
	}
}
