//! Human-readable output.

use std::collections::BTreeMap;

use colored::Colorize;
use navee_deeplink::{MatchRule, RouteCatalog, RouteIntent};

pub(crate) fn print_intent(intent: &RouteIntent, rule: MatchRule) {
	println!("{} {}", "route:".bold(), intent.route_name().to_string().green());
	println!("{} {}", "rule:".bold(), rule);
	print_params("path params:", intent.path_params());
	print_params("query params:", intent.query_params());
}

fn print_params(title: &str, params: &BTreeMap<String, String>) {
	println!("{}", title.bold());

	if params.is_empty() {
		println!("  {}", "(none)".dimmed());
		return;
	}

	for (key, value) in params {
		println!("  {} = {:?}", key.cyan(), value);
	}
}

pub(crate) fn print_routes(catalog: &RouteCatalog) {
	for (route, template) in catalog.routes() {
		println!("{} {}", format!("{:<18}", route.as_str()).bold(), template);
	}

	println!();
	println!("{}", "journey categories:".bold());
	for path in catalog.journey_categories() {
		println!("  {} -> {}", path, catalog.journey_route_for(path));
	}

	let tabs: Vec<&str> = catalog.main_tabs().iter().map(|tab| tab.as_str()).collect();
	println!("{} {}", "main tabs:".bold(), tabs.join(", "));
	println!("{} {}", "id param:".bold(), catalog.id_param());
}
